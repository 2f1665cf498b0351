use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LaunchpadError;
use crate::state::{Campaign, CampaignPhase, InvestorPosition, Platform};
use crate::utils::curve::BondingCurve;
use crate::utils::validation::page_window;

/// Compact campaign projection returned by the list views
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct CampaignSummary {
    pub id: u32,
    pub creator: Pubkey,
    pub token_mint: Pubkey,
    pub target_amount: u64,
    pub amount_raised: u64,
    pub tokens_sold: u64,
    pub deadline: i64,
    pub is_active: bool,
    pub is_funding_complete: bool,
    pub is_cancelled: bool,
    pub is_promoted: bool,
}

impl From<&Campaign> for CampaignSummary {
    fn from(c: &Campaign) -> Self {
        Self {
            id: c.id,
            creator: c.creator,
            token_mint: c.token_mint,
            target_amount: c.target_amount,
            amount_raised: c.amount_raised,
            tokens_sold: c.tokens_sold,
            deadline: c.deadline,
            is_active: c.is_active,
            is_funding_complete: c.is_funding_complete,
            is_cancelled: c.is_cancelled,
            is_promoted: c.is_promoted,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct PaginatedCampaigns {
    pub items: Vec<CampaignSummary>,
    pub total: u32,
    pub has_more: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct SummaryStats {
    pub total_campaigns: u32,
    pub active_campaigns: u32,
    pub completed_campaigns: u32,
    pub cancelled_campaigns: u32,
    pub expired_campaigns: u32,
    pub total_funding_raised: u64,
}

/// (active, expired) counts over derived campaign phases
pub fn fold_phase_counts(phases: impl Iterator<Item = CampaignPhase>) -> (u32, u32) {
    let mut active = 0u32;
    let mut expired = 0u32;
    for phase in phases {
        match phase {
            CampaignPhase::Active => active += 1,
            CampaignPhase::Expired => expired += 1,
            _ => {}
        }
    }
    (active, expired)
}

#[derive(Accounts)]
#[instruction(campaign_id: u32)]
pub struct CampaignView<'info> {
    #[account(
        seeds = [CAMPAIGN_SEED, &campaign_id.to_le_bytes()],
        bump = campaign.bump,
        constraint = campaign.id == campaign_id @ LaunchpadError::CampaignDoesNotExist,
    )]
    pub campaign: Box<Account<'info, Campaign>>,
}

/// Tokens a deposit would buy right now; 0 (not an error) when the campaign
/// cannot accept purchases
pub fn preview_purchase(
    ctx: Context<CampaignView>,
    _campaign_id: u32,
    usdc_amount: u64,
) -> Result<u64> {
    let campaign = &ctx.accounts.campaign;
    let clock = Clock::get()?;

    if !campaign.is_purchasable(clock.unix_timestamp) {
        return Ok(0);
    }

    let curve = BondingCurve::new(
        campaign.tokens_for_sale,
        campaign.target_amount,
        campaign.reserve_ratio,
    )?;
    let quote = curve.quote_purchase(campaign.amount_raised, campaign.tokens_sold, usdc_amount)?;
    Ok(quote.tokens_out)
}

/// Buy-direction curve projection (alias surface of preview_purchase)
pub fn get_token_amount_out(
    ctx: Context<CampaignView>,
    campaign_id: u32,
    usdc_amount_in: u64,
) -> Result<u64> {
    preview_purchase(ctx, campaign_id, usdc_amount_in)
}

/// Sell-direction curve projection: USDC released by returning tokens to
/// the curve; 0 when the campaign cannot accept purchases
pub fn get_swap_amount_out(
    ctx: Context<CampaignView>,
    _campaign_id: u32,
    token_amount_in: u64,
) -> Result<u64> {
    let campaign = &ctx.accounts.campaign;
    let clock = Clock::get()?;

    if !campaign.is_purchasable(clock.unix_timestamp) {
        return Ok(0);
    }

    let curve = BondingCurve::new(
        campaign.tokens_for_sale,
        campaign.target_amount,
        campaign.reserve_ratio,
    )?;
    curve.quote_sale(campaign.tokens_sold, token_amount_in)
}

#[derive(Accounts)]
pub struct PlatformView<'info> {
    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Box<Account<'info, Platform>>,
}

/// Page through campaigns in ascending id order. The campaign accounts for
/// ids offset+1 ..= offset+limit are passed as remaining accounts, in order;
/// each is owner- and id-checked before it is summarized.
pub fn get_all_campaigns_paginated<'info>(
    ctx: Context<'_, '_, '_, 'info, PlatformView<'info>>,
    offset: u32,
    limit: u32,
) -> Result<PaginatedCampaigns> {
    let total = ctx.accounts.platform.campaign_count;
    let (first, last, has_more) = page_window(offset, limit, total)?;

    let mut items = Vec::new();
    if first > 0 {
        let expected = (last - first + 1) as usize;
        require!(
            ctx.remaining_accounts.len() >= expected,
            LaunchpadError::PageAccountMismatch
        );
        for (i, id) in (first..=last).enumerate() {
            let info = &ctx.remaining_accounts[i];
            let campaign: Account<Campaign> =
                Account::try_from(info).map_err(|_| LaunchpadError::PageAccountMismatch)?;
            require!(campaign.id == id, LaunchpadError::PageAccountMismatch);
            items.push(CampaignSummary::from(&*campaign));
        }
    }

    Ok(PaginatedCampaigns {
        items,
        total,
        has_more,
    })
}

/// Aggregate platform statistics. Stored counters cover totals; the
/// non-terminal campaign accounts are passed as remaining accounts so the
/// active/expired breakdown can be derived against the clock.
pub fn get_summary_stats<'info>(
    ctx: Context<'_, '_, '_, 'info, PlatformView<'info>>,
) -> Result<SummaryStats> {
    let platform = &ctx.accounts.platform;
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let mut phases = Vec::with_capacity(ctx.remaining_accounts.len());
    for info in ctx.remaining_accounts {
        let campaign: Account<Campaign> =
            Account::try_from(info).map_err(|_| LaunchpadError::PageAccountMismatch)?;
        phases.push(campaign.phase(now));
    }
    let (active_campaigns, expired_campaigns) = fold_phase_counts(phases.into_iter());

    Ok(SummaryStats {
        total_campaigns: platform.campaign_count,
        active_campaigns,
        completed_campaigns: platform.completed_campaigns,
        cancelled_campaigns: platform.cancelled_campaigns,
        expired_campaigns,
        total_funding_raised: platform.total_funding_raised,
    })
}

#[derive(Accounts)]
#[instruction(campaign_id: u32, user: Pubkey)]
pub struct InvestmentView<'info> {
    #[account(
        seeds = [CAMPAIGN_SEED, &campaign_id.to_le_bytes()],
        bump = campaign.bump,
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    #[account(
        seeds = [INVESTOR_POSITION_SEED, campaign.key().as_ref(), user.as_ref()],
        bump = investor_position.bump,
    )]
    pub investor_position: Box<Account<'info, InvestorPosition>>,
}

/// Recorded contribution for one investor in one campaign
pub fn get_user_investment(
    ctx: Context<InvestmentView>,
    _campaign_id: u32,
    _user: Pubkey,
) -> Result<u64> {
    Ok(ctx.accounts.investor_position.contribution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_counts_ignore_terminal_states() {
        let phases = vec![
            CampaignPhase::Active,
            CampaignPhase::Active,
            CampaignPhase::Expired,
            CampaignPhase::Completed,
            CampaignPhase::Cancelled,
        ];
        assert_eq!(fold_phase_counts(phases.into_iter()), (2, 1));
    }
}
