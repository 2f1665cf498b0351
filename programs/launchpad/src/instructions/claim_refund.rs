use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::const_pda::const_authority::VAULT_BUMP;
use crate::constants::*;
use crate::errors::LaunchpadError;
use crate::events::RefundClaimed;
use crate::state::{Campaign, InvestorPosition, Platform};

#[derive(Accounts)]
#[instruction(campaign_id: u32)]
pub struct ClaimRefund<'info> {
    #[account(mut)]
    pub investor: Signer<'info>,

    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Box<Account<'info, Platform>>,

    #[account(
        mut,
        seeds = [CAMPAIGN_SEED, &campaign_id.to_le_bytes()],
        bump = campaign.bump,
        constraint = campaign.id == campaign_id @ LaunchpadError::CampaignDoesNotExist,
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    /// CHECK: vault authority
    #[account(
        mut,
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    /// Campaign USDC vault the contribution is paid back from
    #[account(
        mut,
        seeds = [USDC_VAULT, campaign.key().as_ref()],
        bump,
        token::mint = platform.usdc_mint,
        token::authority = vault_authority,
    )]
    pub usdc_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = platform.usdc_mint,
        token::authority = investor,
    )]
    pub investor_usdc_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [INVESTOR_POSITION_SEED, campaign.key().as_ref(), investor.key().as_ref()],
        bump = investor_position.bump,
    )]
    pub investor_position: Box<Account<'info, InvestorPosition>>,

    pub token_program: Program<'info, Token>,
}

pub fn claim_refund(ctx: Context<ClaimRefund>, campaign_id: u32) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let campaign = &mut ctx.accounts.campaign;
    require!(
        campaign.is_refundable(now),
        LaunchpadError::UserCannotClaimRefund
    );
    campaign.lock()?;

    // Zero the record before any transfer; a second claim finds nothing
    let position = &mut ctx.accounts.investor_position;
    let amount = position.take_refund(now)?;

    require!(
        ctx.accounts.usdc_vault.amount >= amount,
        LaunchpadError::InsufficientFunds
    );

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.usdc_vault.to_account_info(),
                to: ctx.accounts.investor_usdc_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(RefundClaimed {
        campaign_id,
        investor: ctx.accounts.investor.key(),
        amount,
    });

    ctx.accounts.campaign.unlock();

    msg!("Refund of {} USDC units claimed (campaign {})", amount, campaign_id);

    Ok(())
}
