use anchor_lang::prelude::*;

use crate::constants::DAO_SEED;
use crate::errors::GovernanceError;
use crate::events::TreasuryFunded;
use crate::state::CampaignDao;

#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [DAO_SEED, &dao.campaign_id.to_le_bytes()],
        bump = dao.bump,
    )]
    pub dao: Box<Account<'info, CampaignDao>>,

    pub system_program: Program<'info, System>,
}

pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, GovernanceError::InvalidParameters);

    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.dao.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(TreasuryFunded {
        dao: ctx.accounts.dao.key(),
        from: ctx.accounts.payer.key(),
        amount,
    });

    msg!("Treasury funded with {} lamports", amount);

    Ok(())
}
