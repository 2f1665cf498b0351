use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GovernanceError;

/// Governance parameters, either the factory defaults or a per-DAO override.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GovernanceParams {
    /// Minimum token balance required to create a proposal
    pub proposal_threshold: u64,

    /// Voting window in seconds
    pub voting_period: i64,

    /// Minimum participation, in basis points of the snapshot supply
    pub quorum_bps: u16,

    /// Minimum share of decisive (for vs against) votes, in basis points
    pub majority_bps: u16,
}

impl GovernanceParams {
    pub const SIZE: usize = 8 + 8 + 2 + 2;

    /// Each field validated independently against sane bounds
    pub fn validate(&self) -> Result<()> {
        require!(self.proposal_threshold > 0, GovernanceError::InvalidParameters);
        require!(
            self.voting_period >= MIN_VOTING_PERIOD && self.voting_period <= MAX_VOTING_PERIOD,
            GovernanceError::InvalidParameters
        );
        require!(
            self.quorum_bps as u64 <= BASIS_POINTS,
            GovernanceError::InvalidParameters
        );
        require!(
            self.majority_bps as u64 <= BASIS_POINTS,
            GovernanceError::InvalidParameters
        );
        Ok(())
    }
}

impl Default for GovernanceParams {
    fn default() -> Self {
        Self {
            proposal_threshold: DEFAULT_PROPOSAL_THRESHOLD,
            voting_period: DEFAULT_VOTING_PERIOD,
            quorum_bps: DEFAULT_QUORUM_BPS,
            majority_bps: DEFAULT_MAJORITY_BPS,
        }
    }
}

#[account]
pub struct DaoRegistry {
    /// Factory admin (can update the defaults for future DAOs)
    pub admin: Pubkey,

    /// Default parameters applied when a DAO supplies no overrides
    pub default_params: GovernanceParams,

    /// Number of DAOs ever created
    pub dao_count: u32,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl DaoRegistry {
    pub const SIZE: usize = 8 + // discriminator
        32 + // admin
        GovernanceParams::SIZE + // default_params
        4 + // dao_count
        1 + // bump
        8 * 4; // reserved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        GovernanceParams::default().validate().unwrap();
    }

    #[test]
    fn each_override_is_validated_independently() {
        let mut p = GovernanceParams::default();
        p.quorum_bps = 10_001;
        assert!(p.validate().is_err());

        let mut p = GovernanceParams::default();
        p.majority_bps = 10_001;
        assert!(p.validate().is_err());

        let mut p = GovernanceParams::default();
        p.voting_period = MIN_VOTING_PERIOD - 1;
        assert!(p.validate().is_err());

        let mut p = GovernanceParams::default();
        p.proposal_threshold = 0;
        assert!(p.validate().is_err());

        // boundary values are allowed
        let mut p = GovernanceParams::default();
        p.quorum_bps = 10_000;
        p.majority_bps = 10_000;
        p.voting_period = MAX_VOTING_PERIOD;
        assert!(p.validate().is_ok());
    }
}
