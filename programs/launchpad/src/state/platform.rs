use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LaunchpadError;

#[account]
pub struct Platform {
    /// Admin address (can update fees, rescue terminal-campaign tokens)
    pub admin: Pubkey,

    /// Funding token mint (6-decimal stablecoin)
    pub usdc_mint: Pubkey,

    /// Platform fee in basis points of total supply, taken in campaign
    /// tokens at creation time; applies to campaigns created afterwards
    pub platform_fee_bps: u16,

    /// One-time USDC fee for promoting a campaign
    pub promotion_fee: u64,

    /// OG-point bonus granted per participation in a promoted campaign
    pub promotional_og_points: u64,

    /// Number of campaigns ever created; ids ascend from 1
    pub campaign_count: u32,

    /// Campaigns that reached their funding target
    pub completed_campaigns: u32,

    /// Campaigns cancelled by their creator
    pub cancelled_campaigns: u32,

    /// Cumulative USDC accepted across all campaigns
    pub total_funding_raised: u64,

    /// Cumulative platform fee tokens collected at completions
    pub total_platform_fees: u64,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 8],
}

impl Platform {
    pub const SIZE: usize = 8 + // discriminator
        32 + // admin
        32 + // usdc_mint
        2 + // platform_fee_bps
        8 + // promotion_fee
        8 + // promotional_og_points
        4 + // campaign_count
        4 + // completed_campaigns
        4 + // cancelled_campaigns
        8 + // total_funding_raised
        8 + // total_platform_fees
        1 + // bump
        8 * 8; // reserved

    /// Initialize default configuration
    pub fn initialize_defaults(&mut self, admin: Pubkey, usdc_mint: Pubkey, bump: u8) {
        self.admin = admin;
        self.usdc_mint = usdc_mint;
        self.platform_fee_bps = DEFAULT_PLATFORM_FEE_BPS;
        self.promotion_fee = DEFAULT_PROMOTION_FEE;
        self.promotional_og_points = DEFAULT_PROMOTIONAL_OG_POINTS;
        self.campaign_count = 0;
        self.completed_campaigns = 0;
        self.cancelled_campaigns = 0;
        self.total_funding_raised = 0;
        self.total_platform_fees = 0;
        self.bump = bump;
    }

    /// Next campaign id, bumping the counter
    pub fn assign_campaign_id(&mut self) -> Result<u32> {
        self.campaign_count = self
            .campaign_count
            .checked_add(1)
            .ok_or(LaunchpadError::MathOverflow)?;
        Ok(self.campaign_count)
    }

    /// Validate campaign creation parameters against platform bounds
    pub fn validate_campaign_params(
        &self,
        target_amount: u64,
        total_supply: u64,
        reserve_ratio: u32,
        deadline: i64,
        now: i64,
    ) -> Result<()> {
        require!(target_amount > 0, LaunchpadError::InvalidInput);

        require!(
            total_supply >= MIN_TOTAL_SUPPLY && total_supply <= MAX_TOTAL_SUPPLY,
            LaunchpadError::InvalidSupply
        );

        require!(
            reserve_ratio >= MIN_RESERVE_RATIO && reserve_ratio <= MAX_RESERVE_RATIO,
            LaunchpadError::ReserveRatioOutOfBounds
        );

        let window = deadline
            .checked_sub(now)
            .ok_or(LaunchpadError::MathOverflow)?;
        require!(window >= MIN_DEADLINE_WINDOW, LaunchpadError::DeadlineTooShort);
        require!(window <= MAX_DEADLINE_WINDOW, LaunchpadError::DeadlineTooLong);

        Ok(())
    }

    /// Record an accepted purchase amount in the aggregate counters
    pub fn record_funding(&mut self, usdc_amount: u64) -> Result<()> {
        self.total_funding_raised = self
            .total_funding_raised
            .checked_add(usdc_amount)
            .ok_or(LaunchpadError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Platform {
        let mut p = Platform {
            admin: Pubkey::new_unique(),
            usdc_mint: Pubkey::new_unique(),
            platform_fee_bps: 0,
            promotion_fee: 0,
            promotional_og_points: 0,
            campaign_count: 0,
            completed_campaigns: 0,
            cancelled_campaigns: 0,
            total_funding_raised: 0,
            total_platform_fees: 0,
            bump: 255,
            reserved: [0; 8],
        };
        p.initialize_defaults(p.admin, p.usdc_mint, 255);
        p
    }

    #[test]
    fn assigns_ascending_ids_from_one() {
        let mut p = platform();
        assert_eq!(p.assign_campaign_id().unwrap(), 1);
        assert_eq!(p.assign_campaign_id().unwrap(), 2);
        assert_eq!(p.assign_campaign_id().unwrap(), 3);
        assert_eq!(p.campaign_count, 3);
    }

    #[test]
    fn rejects_out_of_bounds_params() {
        let p = platform();
        let now = 1_700_000_000;
        let deadline = now + 30 * 24 * 60 * 60;

        assert!(p
            .validate_campaign_params(10_000_000_000, MIN_TOTAL_SUPPLY, 500_000, deadline, now)
            .is_ok());

        // zero target
        assert!(p
            .validate_campaign_params(0, MIN_TOTAL_SUPPLY, 500_000, deadline, now)
            .is_err());
        // supply below minimum
        assert!(p
            .validate_campaign_params(1, MIN_TOTAL_SUPPLY - 1, 500_000, deadline, now)
            .is_err());
        // ratio above 100%
        assert!(p
            .validate_campaign_params(1, MIN_TOTAL_SUPPLY, RESERVE_RATIO_PPM + 1, deadline, now)
            .is_err());
        // deadline in the past
        assert!(p
            .validate_campaign_params(1, MIN_TOTAL_SUPPLY, 500_000, now - 1, now)
            .is_err());
        // window beyond the maximum
        assert!(p
            .validate_campaign_params(
                1,
                MIN_TOTAL_SUPPLY,
                500_000,
                now + MAX_DEADLINE_WINDOW + 1,
                now
            )
            .is_err());
    }
}
