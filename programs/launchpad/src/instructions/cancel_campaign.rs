use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LaunchpadError;
use crate::events::CampaignCancelled;
use crate::state::{Campaign, Platform};

#[derive(Accounts)]
#[instruction(campaign_id: u32)]
pub struct CancelCampaign<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
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
}

pub fn cancel_campaign(ctx: Context<CancelCampaign>, campaign_id: u32) -> Result<()> {
    let campaign = &mut ctx.accounts.campaign;
    campaign.mark_cancelled()?;

    let platform = &mut ctx.accounts.platform;
    platform.cancelled_campaigns = platform
        .cancelled_campaigns
        .checked_add(1)
        .ok_or(LaunchpadError::MathOverflow)?;

    emit!(CampaignCancelled {
        campaign_id,
        creator: ctx.accounts.creator.key(),
    });

    msg!("Campaign {} cancelled; contributions are claimable as refunds", campaign_id);

    Ok(())
}
