use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::constants::*;
use crate::errors::LaunchpadError;
use crate::events::CampaignPromoted;
use crate::state::{Campaign, Platform};

#[derive(Accounts)]
#[instruction(campaign_id: u32)]
pub struct PromoteCampaign<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Box<Account<'info, Platform>>,

    #[account(
        mut,
        seeds = [CAMPAIGN_SEED, &campaign_id.to_le_bytes()],
        bump = campaign.bump,
        constraint = campaign.creator == creator.key() @ LaunchpadError::NotCampaignOwner,
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    #[account(
        mut,
        token::mint = platform.usdc_mint,
        token::authority = creator,
    )]
    pub creator_usdc_account: Box<Account<'info, TokenAccount>>,

    /// Admin's USDC account collecting promotion fees
    #[account(
        mut,
        token::mint = platform.usdc_mint,
        token::authority = platform.admin,
    )]
    pub admin_usdc_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn promote_campaign(ctx: Context<PromoteCampaign>, campaign_id: u32) -> Result<()> {
    let clock = Clock::get()?;
    let campaign = &mut ctx.accounts.campaign;

    campaign.assert_purchasable(clock.unix_timestamp)?;
    require!(!campaign.is_promoted, LaunchpadError::AlreadyPromoted);

    let fee = ctx.accounts.platform.promotion_fee;
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.creator_usdc_account.to_account_info(),
                to: ctx.accounts.admin_usdc_account.to_account_info(),
                authority: ctx.accounts.creator.to_account_info(),
            },
        ),
        fee,
    )?;

    campaign.is_promoted = true;
    campaign.promotional_og_points = ctx.accounts.platform.promotional_og_points;

    emit!(CampaignPromoted { campaign_id });

    msg!("Campaign {} promoted for {} USDC units", campaign_id, fee);

    Ok(())
}
