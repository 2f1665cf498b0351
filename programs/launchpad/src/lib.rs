#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

mod const_pda;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("EQGaVFpPT1CNmkbMzMKtwSMT8RR3eeZwLAGUXCmay6c");

#[program]
pub mod astro_launchpad {
    use super::*;

    /// Initialize platform configuration
    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        instructions::initialize(ctx, params)
    }

    /// Create a new campaign with its token, vaults and bonding curve
    pub fn create_campaign(
        ctx: Context<CreateCampaign>,
        params: CreateCampaignParams,
    ) -> Result<u32> {
        instructions::create_campaign(ctx, params)
    }

    /// Buy campaign tokens along the bonding curve; the purchase reaching
    /// the target settles the campaign and opens the liquidity pool
    pub fn buy_tokens(ctx: Context<BuyTokens>, campaign_id: u32, usdc_amount: u64) -> Result<()> {
        instructions::buy_tokens(ctx, campaign_id, usdc_amount)
    }

    /// Cancel an active campaign (creator only)
    pub fn cancel_campaign(ctx: Context<CancelCampaign>, campaign_id: u32) -> Result<()> {
        instructions::cancel_campaign(ctx, campaign_id)
    }

    /// Reclaim a contribution from a cancelled or expired campaign
    pub fn claim_refund(ctx: Context<ClaimRefund>, campaign_id: u32) -> Result<()> {
        instructions::claim_refund(ctx, campaign_id)
    }

    /// Pay the promotion fee to feature a campaign
    pub fn promote_campaign(ctx: Context<PromoteCampaign>, campaign_id: u32) -> Result<()> {
        instructions::promote_campaign(ctx, campaign_id)
    }

    /// Update the platform fee (admin only)
    pub fn update_platform_fee(ctx: Context<UpdatePlatformFee>, new_fee_bps: u16) -> Result<()> {
        instructions::update_platform_fee(ctx, new_fee_bps)
    }

    /// Rescue unsold tokens from a terminal campaign (admin only)
    pub fn withdraw_remaining_tokens(
        ctx: Context<WithdrawRemainingTokens>,
        campaign_id: u32,
    ) -> Result<()> {
        instructions::withdraw_remaining_tokens(ctx, campaign_id)
    }

    // ===== Read views =====

    /// Tokens a deposit would buy right now (0 when not purchasable)
    pub fn preview_purchase(
        ctx: Context<CampaignView>,
        campaign_id: u32,
        usdc_amount: u64,
    ) -> Result<u64> {
        instructions::preview_purchase(ctx, campaign_id, usdc_amount)
    }

    /// Buy-direction curve projection
    pub fn get_token_amount_out(
        ctx: Context<CampaignView>,
        campaign_id: u32,
        usdc_amount_in: u64,
    ) -> Result<u64> {
        instructions::get_token_amount_out(ctx, campaign_id, usdc_amount_in)
    }

    /// Sell-direction curve projection
    pub fn get_swap_amount_out(
        ctx: Context<CampaignView>,
        campaign_id: u32,
        token_amount_in: u64,
    ) -> Result<u64> {
        instructions::get_swap_amount_out(ctx, campaign_id, token_amount_in)
    }

    /// Campaign listing in ascending id order
    pub fn get_all_campaigns_paginated<'info>(
        ctx: Context<'_, '_, '_, 'info, PlatformView<'info>>,
        offset: u32,
        limit: u32,
    ) -> Result<PaginatedCampaigns> {
        instructions::get_all_campaigns_paginated(ctx, offset, limit)
    }

    /// Aggregate platform statistics
    pub fn get_summary_stats<'info>(
        ctx: Context<'_, '_, '_, 'info, PlatformView<'info>>,
    ) -> Result<SummaryStats> {
        instructions::get_summary_stats(ctx)
    }

    /// Recorded contribution for one investor in one campaign
    pub fn get_user_investment(
        ctx: Context<InvestmentView>,
        campaign_id: u32,
        user: Pubkey,
    ) -> Result<u64> {
        instructions::get_user_investment(ctx, campaign_id, user)
    }
}
