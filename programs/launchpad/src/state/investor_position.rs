use anchor_lang::prelude::*;

use crate::errors::LaunchpadError;

#[account]
pub struct InvestorPosition {
    /// Investor address
    pub investor: Pubkey,

    /// Associated campaign
    pub campaign: Pubkey,

    /// bump seed
    pub bump: u8,

    /// Cumulative USDC contributed; zeroed by a refund
    pub contribution: u64,

    /// Whether the contribution has been refunded
    pub refunded: bool,

    /// First participation time
    pub participated_at: i64,

    /// Last update time
    pub last_updated: i64,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl InvestorPosition {
    pub const SIZE: usize = 8 + // discriminator
        32 + // investor
        32 + // campaign
        1 + // bump
        8 + // contribution
        1 + // refunded
        8 + // participated_at
        8 + // last_updated
        8 * 4; // reserved

    /// First purchase for this campaign?
    pub fn is_first_participation(&self) -> bool {
        self.contribution == 0 && !self.refunded
    }

    /// Accumulate a purchase
    pub fn record_contribution(&mut self, usdc_amount: u64, now: i64) -> Result<()> {
        self.contribution = self
            .contribution
            .checked_add(usdc_amount)
            .ok_or(LaunchpadError::MathOverflow)?;
        if self.participated_at == 0 {
            self.participated_at = now;
        }
        self.last_updated = now;
        Ok(())
    }

    /// Take the full contribution for a refund, zeroing the record so a
    /// second claim has nothing left to pay
    pub fn take_refund(&mut self, now: i64) -> Result<u64> {
        require!(
            self.contribution > 0 && !self.refunded,
            LaunchpadError::UserCannotClaimRefund
        );
        let amount = self.contribution;
        self.contribution = 0;
        self.refunded = true;
        self.last_updated = now;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position() -> InvestorPosition {
        InvestorPosition {
            investor: Pubkey::new_unique(),
            campaign: Pubkey::new_unique(),
            bump: 255,
            contribution: 0,
            refunded: false,
            participated_at: 0,
            last_updated: 0,
            reserved: [0; 4],
        }
    }

    #[test]
    fn participation_flag_is_idempotent() {
        let mut p = position();
        assert!(p.is_first_participation());
        p.record_contribution(1_000_000, 100).unwrap();
        assert!(!p.is_first_participation());
        p.record_contribution(2_000_000, 200).unwrap();
        assert!(!p.is_first_participation());
        assert_eq!(p.contribution, 3_000_000);
        assert_eq!(p.participated_at, 100);
        assert_eq!(p.last_updated, 200);
    }

    #[test]
    fn refund_claims_at_most_once() {
        let mut p = position();
        p.record_contribution(5_000_000, 100).unwrap();

        let amount = p.take_refund(300).unwrap();
        assert_eq!(amount, 5_000_000);
        assert_eq!(p.contribution, 0);
        assert!(p.refunded);

        assert!(p.take_refund(400).is_err());
    }

    #[test]
    fn refund_requires_a_contribution() {
        let mut p = position();
        assert!(p.take_refund(100).is_err());
    }
}
