use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LaunchpadError;

/// Derived lifecycle phase; `Expired` is a time-based view over an
/// active-pending campaign whose deadline has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignPhase {
    Active,
    Completed,
    Cancelled,
    Expired,
}

#[account]
pub struct Campaign {
    /// Campaign id (ascending from 1)
    pub id: u32,

    /// Campaign creator
    pub creator: Pubkey,

    /// Campaign token mint
    pub token_mint: Pubkey,

    /// AMM pool created at funding completion; None until then, set once
    pub amm_pool: Option<Pubkey>,

    // ===== Funding State (USDC units) =====
    /// Funding target
    pub target_amount: u64,

    /// USDC accepted so far; never exceeds target_amount
    pub amount_raised: u64,

    // ===== Token State (token units) =====
    /// Total minted supply
    pub total_supply: u64,

    /// Tokens sold along the curve; never exceeds tokens_for_sale
    pub tokens_sold: u64,

    /// Sale allocation
    pub tokens_for_sale: u64,

    /// Creator allocation, released at completion
    pub creator_allocation: u64,

    /// Liquidity allocation, paired into the AMM pool at completion
    pub liquidity_allocation: u64,

    /// Platform fee, taken in tokens at completion
    pub platform_fee_tokens: u64,

    // ===== Curve Parameters =====
    /// Reserve ratio in parts per million; immutable after creation
    pub reserve_ratio: u32,

    // ===== Time =====
    /// Purchase deadline (unix)
    pub deadline: i64,

    /// Creation timestamp
    pub created_at: i64,

    // ===== Lifecycle Flags =====
    /// Accepting purchases (pending state)
    pub is_active: bool,

    /// Funding target reached; terminal
    pub is_funding_complete: bool,

    /// Cancelled by creator; terminal
    pub is_cancelled: bool,

    /// Promotion fee paid
    pub is_promoted: bool,

    /// Settlement in progress; guards the external-transfer paths
    pub locked: bool,

    /// Distinct investors; each address counts once
    pub participants_count: u32,

    // ===== Promotion =====
    /// OG-point bonus for participants while promoted
    pub promotional_og_points: u64,

    // ===== Metadata =====
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub icon_uri: String,
    pub whitepaper_uri: String,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl Campaign {
    pub const SIZE: usize = 8 + // discriminator
        4 + // id
        32 + // creator
        32 + // token_mint
        33 + // amm_pool (Option<Pubkey>)
        8 + // target_amount
        8 + // amount_raised
        8 + // total_supply
        8 + // tokens_sold
        8 + // tokens_for_sale
        8 + // creator_allocation
        8 + // liquidity_allocation
        8 + // platform_fee_tokens
        4 + // reserve_ratio
        8 + // deadline
        8 + // created_at
        1 + // is_active
        1 + // is_funding_complete
        1 + // is_cancelled
        1 + // is_promoted
        1 + // locked
        4 + // participants_count
        8 + // promotional_og_points
        4 + MAX_NAME_LEN + // name
        4 + MAX_SYMBOL_LEN + // symbol
        4 + MAX_DESCRIPTION_LEN + // description
        4 + MAX_URI_LEN + // icon_uri
        4 + MAX_URI_LEN + // whitepaper_uri
        1 + // bump
        8 * 4; // reserved

    /// Derived phase; exactly one of the three stored states holds at any
    /// time, with Expired carved out of Active by the clock.
    pub fn phase(&self, now: i64) -> CampaignPhase {
        if self.is_cancelled {
            CampaignPhase::Cancelled
        } else if self.is_funding_complete {
            CampaignPhase::Completed
        } else if now > self.deadline {
            CampaignPhase::Expired
        } else {
            CampaignPhase::Active
        }
    }

    /// Purchase preconditions; each violation is a distinct typed failure
    pub fn assert_purchasable(&self, now: i64) -> Result<()> {
        require!(!self.is_cancelled, LaunchpadError::CampaignInactive);
        require!(
            !self.is_funding_complete,
            LaunchpadError::FundingAlreadyCompleted
        );
        require!(self.is_active, LaunchpadError::CampaignInactive);
        require!(now <= self.deadline, LaunchpadError::DeadlineExpired);
        Ok(())
    }

    /// Whether purchases are possible at all; the read-only projections
    /// return 0 instead of failing when this is false
    pub fn is_purchasable(&self, now: i64) -> bool {
        self.assert_purchasable(now).is_ok()
    }

    /// Refund preconditions: cancelled, or expired without completing
    pub fn is_refundable(&self, now: i64) -> bool {
        matches!(
            self.phase(now),
            CampaignPhase::Cancelled | CampaignPhase::Expired
        )
    }

    /// Enter the settlement critical section
    pub fn lock(&mut self) -> Result<()> {
        require!(!self.locked, LaunchpadError::ReentrantCall);
        self.locked = true;
        Ok(())
    }

    /// Leave the settlement critical section
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Apply an accepted purchase to the ledger
    pub fn record_purchase(&mut self, usdc_accepted: u64, tokens_out: u64) -> Result<()> {
        self.amount_raised = self
            .amount_raised
            .checked_add(usdc_accepted)
            .ok_or(LaunchpadError::MathOverflow)?;
        require!(
            self.amount_raised <= self.target_amount,
            LaunchpadError::MathOverflow
        );

        self.tokens_sold = self
            .tokens_sold
            .checked_add(tokens_out)
            .ok_or(LaunchpadError::MathOverflow)?;
        require!(
            self.tokens_sold <= self.tokens_for_sale,
            LaunchpadError::MathOverflow
        );

        Ok(())
    }

    /// Whether the ledger has reached its target
    pub fn target_reached(&self) -> bool {
        self.amount_raised == self.target_amount
    }

    /// Transition active-pending -> complete; terminal
    pub fn mark_completed(&mut self, amm_pool: Pubkey) -> Result<()> {
        require!(self.is_active, LaunchpadError::CampaignInactive);
        require!(self.target_reached(), LaunchpadError::FundingNotMet);
        self.is_active = false;
        self.is_funding_complete = true;
        self.amm_pool = Some(amm_pool);
        Ok(())
    }

    /// Transition active-pending -> cancelled; terminal
    pub fn mark_cancelled(&mut self) -> Result<()> {
        require!(
            !self.is_funding_complete,
            LaunchpadError::FundingAlreadyCompleted
        );
        require!(self.is_active, LaunchpadError::CampaignInactive);
        self.is_active = false;
        self.is_cancelled = true;
        Ok(())
    }

    /// Tokens still held for sale (unsold remainder)
    pub fn unsold_tokens(&self) -> u64 {
        self.tokens_for_sale.saturating_sub(self.tokens_sold)
    }

    /// Count a first-time investor
    pub fn record_participant(&mut self) -> Result<()> {
        self.participants_count = self
            .participants_count
            .checked_add(1)
            .ok_or(LaunchpadError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign() -> Campaign {
        Campaign {
            id: 1,
            creator: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            amm_pool: None,
            target_amount: 10_000_000_000, // 10,000 USDC
            amount_raised: 0,
            total_supply: 1_000_000_000_000_000,
            tokens_sold: 0,
            tokens_for_sale: 600_000_000_000_000,
            creator_allocation: 200_000_000_000_000,
            liquidity_allocation: 150_000_000_000_000,
            platform_fee_tokens: 50_000_000_000_000,
            reserve_ratio: 500_000,
            deadline: 2_000_000_000,
            created_at: 1_900_000_000,
            is_active: true,
            is_funding_complete: false,
            is_cancelled: false,
            is_promoted: false,
            locked: false,
            participants_count: 0,
            promotional_og_points: 0,
            name: "Test".into(),
            symbol: "TST".into(),
            description: String::new(),
            icon_uri: String::new(),
            whitepaper_uri: String::new(),
            bump: 255,
            reserved: [0; 4],
        }
    }

    #[test]
    fn phases_are_mutually_exclusive() {
        let mut c = campaign();
        let before = c.deadline - 1;
        let after = c.deadline + 1;

        assert_eq!(c.phase(before), CampaignPhase::Active);
        assert_eq!(c.phase(after), CampaignPhase::Expired);

        c.amount_raised = c.target_amount;
        c.mark_completed(Pubkey::new_unique()).unwrap();
        assert_eq!(c.phase(before), CampaignPhase::Completed);
        assert_eq!(c.phase(after), CampaignPhase::Completed);
        assert!(!c.is_active);
        assert!(c.amm_pool.is_some());

        // terminal: cannot cancel a completed campaign
        assert!(c.mark_cancelled().is_err());
    }

    #[test]
    fn cancelled_is_terminal() {
        let mut c = campaign();
        c.mark_cancelled().unwrap();
        assert!(c.is_cancelled && !c.is_active && !c.is_funding_complete);

        // no re-activation path: completion is rejected too
        c.amount_raised = c.target_amount;
        assert!(c.mark_completed(Pubkey::new_unique()).is_err());
    }

    #[test]
    fn purchase_preconditions() {
        let mut c = campaign();
        assert!(c.assert_purchasable(c.deadline).is_ok());
        assert!(c.assert_purchasable(c.deadline + 1).is_err());

        c.is_funding_complete = true;
        c.is_active = false;
        let err = c.assert_purchasable(c.deadline).unwrap_err();
        assert_eq!(
            err,
            LaunchpadError::FundingAlreadyCompleted.into(),
            "completed campaigns must fail with FundingAlreadyCompleted"
        );
    }

    #[test]
    fn record_purchase_is_monotonic_and_bounded() {
        let mut c = campaign();
        c.record_purchase(6_000_000_000, 300_000_000_000_000).unwrap();
        assert_eq!(c.amount_raised, 6_000_000_000);
        assert_eq!(c.tokens_sold, 300_000_000_000_000);

        // raising past the target is a ledger violation, not a clamp
        assert!(c.record_purchase(5_000_000_000, 1).is_err());
    }

    #[test]
    fn refundable_only_when_cancelled_or_expired_unfunded() {
        let mut c = campaign();
        assert!(!c.is_refundable(c.deadline));
        assert!(c.is_refundable(c.deadline + 1));

        c.amount_raised = c.target_amount;
        c.mark_completed(Pubkey::new_unique()).unwrap();
        assert!(!c.is_refundable(c.deadline + 1));

        let mut c = campaign();
        c.mark_cancelled().unwrap();
        assert!(c.is_refundable(c.deadline - 1));
    }

    #[test]
    fn settlement_guard_rejects_reentry() {
        let mut c = campaign();
        c.lock().unwrap();
        assert!(c.lock().is_err());
        c.unlock();
        assert!(c.lock().is_ok());
    }
}
