use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GovernanceError;
use crate::state::GovernanceParams;

/// Derived proposal lifecycle state; never stored, always computed from the
/// clock, the tallies and the executed flag.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProposalState {
    Pending,
    Active,
    Defeated,
    Succeeded,
    Executed,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteType {
    Against,
    For,
    Abstain,
}

/// Executable payload of a proposal. A tagged variant set instead of a raw
/// target+calldata forward: transfers and self-amendment are first-class,
/// anything else is an inert on-chain remark.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum ProposalAction {
    /// Pay lamports out of the DAO treasury
    TransferFunds { recipient: Pubkey, amount: u64 },
    /// Amend the DAO's own governance parameters
    UpdateParameters {
        proposal_threshold: u64,
        voting_period: i64,
        quorum_bps: u16,
        majority_bps: u16,
    },
    /// Record an arbitrary payload without side effects
    Remark { data: Vec<u8> },
}

impl ProposalAction {
    /// Largest serialized variant: tag + remark length prefix + payload
    pub const MAX_SIZE: usize = 1 + 4 + MAX_REMARK_LEN;

    pub fn validate(&self) -> Result<()> {
        match self {
            ProposalAction::TransferFunds { amount, .. } => {
                require!(*amount > 0, GovernanceError::InvalidParameters);
            }
            ProposalAction::UpdateParameters {
                proposal_threshold,
                voting_period,
                quorum_bps,
                majority_bps,
            } => {
                GovernanceParams {
                    proposal_threshold: *proposal_threshold,
                    voting_period: *voting_period,
                    quorum_bps: *quorum_bps,
                    majority_bps: *majority_bps,
                }
                .validate()?;
            }
            ProposalAction::Remark { data } => {
                require!(data.len() <= MAX_REMARK_LEN, GovernanceError::InvalidParameters);
            }
        }
        Ok(())
    }
}

#[account]
pub struct Proposal {
    /// Owning DAO
    pub dao: Pubkey,

    /// Per-DAO ascending id starting at 1
    pub id: u64,

    /// Proposal author
    pub proposer: Pubkey,

    pub title: String,
    pub description: String,

    /// Action performed on execution
    pub action: ProposalAction,

    /// Voting window
    pub start_time: i64,
    pub end_time: i64,

    /// Token supply at creation; fixed quorum denominator for the life of
    /// the proposal, decoupled from later supply changes
    pub snapshot_supply: u64,

    // ===== Tallies (monotonically increasing) =====
    pub for_votes: u64,
    pub against_votes: u64,
    pub abstain_votes: u64,

    /// Set exactly once, only from Succeeded
    pub executed: bool,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 2],
}

impl Proposal {
    pub const SIZE: usize = 8 + // discriminator
        32 + // dao
        8 + // id
        32 + // proposer
        4 + MAX_TITLE_LEN + // title
        4 + MAX_DESCRIPTION_LEN + // description
        ProposalAction::MAX_SIZE + // action
        8 + // start_time
        8 + // end_time
        8 + // snapshot_supply
        8 + // for_votes
        8 + // against_votes
        8 + // abstain_votes
        1 + // executed
        1 + // bump
        8 * 2; // reserved

    /// Add a vote to the matching tally. Weight is the voter's live token
    /// balance at vote time (the snapshot fixes only the quorum
    /// denominator); tokens acquired after proposal creation therefore
    /// still vote, which callers should treat as a known manipulation
    /// surface of balance-weighted governance.
    pub fn record_vote(&mut self, vote_type: VoteType, weight: u64) -> Result<()> {
        require!(weight > 0, GovernanceError::InsufficientVotingPower);
        let tally = match vote_type {
            VoteType::Against => &mut self.against_votes,
            VoteType::For => &mut self.for_votes,
            VoteType::Abstain => &mut self.abstain_votes,
        };
        *tally = tally
            .checked_add(weight)
            .ok_or(GovernanceError::MathOverflow)?;
        Ok(())
    }

    /// All votes count toward quorum, abstentions included
    pub fn quorum_reached(&self, quorum_bps: u16) -> bool {
        let cast = self.for_votes as u128 + self.against_votes as u128 + self.abstain_votes as u128;
        cast * BASIS_POINTS as u128 >= self.snapshot_supply as u128 * quorum_bps as u128
    }

    /// Abstentions are excluded from the majority denominator
    pub fn majority_reached(&self, majority_bps: u16) -> bool {
        let decisive = self.for_votes as u128 + self.against_votes as u128;
        self.for_votes as u128 * BASIS_POINTS as u128 >= decisive * majority_bps as u128
    }

    /// Derived state against the DAO's current thresholds
    pub fn state(&self, now: i64, params: &GovernanceParams) -> ProposalState {
        if self.executed {
            return ProposalState::Executed;
        }
        if now < self.start_time {
            return ProposalState::Pending;
        }
        if now < self.end_time {
            return ProposalState::Active;
        }
        if self.quorum_reached(params.quorum_bps) && self.majority_reached(params.majority_bps) {
            ProposalState::Succeeded
        } else {
            ProposalState::Defeated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(quorum_bps: u16, majority_bps: u16) -> GovernanceParams {
        GovernanceParams {
            proposal_threshold: 1,
            voting_period: DEFAULT_VOTING_PERIOD,
            quorum_bps,
            majority_bps,
        }
    }

    fn proposal(snapshot_supply: u64) -> Proposal {
        Proposal {
            dao: Pubkey::new_unique(),
            id: 1,
            proposer: Pubkey::new_unique(),
            title: "t".into(),
            description: String::new(),
            action: ProposalAction::Remark { data: vec![] },
            start_time: 1_000,
            end_time: 1_000 + DEFAULT_VOTING_PERIOD,
            snapshot_supply,
            for_votes: 0,
            against_votes: 0,
            abstain_votes: 0,
            executed: false,
            bump: 255,
            reserved: [0; 2],
        }
    }

    /// 1M snapshot, 10% quorum, 50% majority; 400k for / 200k against /
    /// 50k abstain clears both bars once voting ends.
    #[test]
    fn quorum_and_majority_scenario_succeeds() {
        let p = params(1_000, 5_000);
        let mut prop = proposal(1_000_000);
        prop.record_vote(VoteType::For, 400_000).unwrap();
        prop.record_vote(VoteType::Against, 200_000).unwrap();
        prop.record_vote(VoteType::Abstain, 50_000).unwrap();

        assert!(prop.quorum_reached(p.quorum_bps)); // 650k >= 100k
        assert!(prop.majority_reached(p.majority_bps)); // 400k / 600k

        assert_eq!(prop.state(prop.end_time, &p), ProposalState::Succeeded);
    }

    #[test]
    fn defeated_when_quorum_missed() {
        let p = params(1_000, 5_000);
        let mut prop = proposal(1_000_000);
        prop.record_vote(VoteType::For, 99_999).unwrap();

        assert!(!prop.quorum_reached(p.quorum_bps));
        assert_eq!(prop.state(prop.end_time, &p), ProposalState::Defeated);

        // one more vote-weight unit tips the quorum
        prop.record_vote(VoteType::Abstain, 1).unwrap();
        assert!(prop.quorum_reached(p.quorum_bps));
        assert_eq!(prop.state(prop.end_time, &p), ProposalState::Succeeded);
    }

    #[test]
    fn defeated_when_majority_missed() {
        let p = params(1_000, 5_000);
        let mut prop = proposal(1_000_000);
        prop.record_vote(VoteType::For, 200_000).unwrap();
        prop.record_vote(VoteType::Against, 200_001).unwrap();

        assert!(prop.quorum_reached(p.quorum_bps));
        assert!(!prop.majority_reached(p.majority_bps));
        assert_eq!(prop.state(prop.end_time, &p), ProposalState::Defeated);
    }

    #[test]
    fn abstentions_count_toward_quorum_only() {
        let p = params(1_000, 5_000);
        let mut prop = proposal(1_000_000);
        // quorum entirely from abstentions; a single decisive vote carries
        prop.record_vote(VoteType::Abstain, 100_000).unwrap();
        prop.record_vote(VoteType::For, 1).unwrap();

        assert_eq!(prop.state(prop.end_time, &p), ProposalState::Succeeded);
    }

    #[test]
    fn exact_majority_boundary_passes() {
        let p = params(0, 5_000);
        let mut prop = proposal(1_000_000);
        prop.record_vote(VoteType::For, 300_000).unwrap();
        prop.record_vote(VoteType::Against, 300_000).unwrap();

        // for * 10000 == decisive * 5000: the bar is inclusive
        assert!(prop.majority_reached(p.majority_bps));
    }

    #[test]
    fn state_follows_the_clock() {
        let p = params(0, 0);
        let prop = proposal(1_000_000);

        assert_eq!(prop.state(prop.start_time - 1, &p), ProposalState::Pending);
        assert_eq!(prop.state(prop.start_time, &p), ProposalState::Active);
        assert_eq!(prop.state(prop.end_time - 1, &p), ProposalState::Active);
        // zero thresholds: an uncontested proposal succeeds at the bell
        assert_eq!(prop.state(prop.end_time, &p), ProposalState::Succeeded);
    }

    #[test]
    fn executed_is_terminal() {
        let p = params(0, 0);
        let mut prop = proposal(1_000_000);
        prop.executed = true;
        assert_eq!(prop.state(prop.start_time - 1, &p), ProposalState::Executed);
        assert_eq!(prop.state(prop.end_time + 1, &p), ProposalState::Executed);
    }

    #[test]
    fn snapshot_supply_is_the_fixed_denominator() {
        let p = params(1_000, 0);
        let mut prop = proposal(1_000_000);
        prop.record_vote(VoteType::For, 100_000).unwrap();
        assert!(prop.quorum_reached(p.quorum_bps));

        // a larger live supply would miss quorum; the snapshot keeps it
        let mut bigger = proposal(10_000_000);
        bigger.record_vote(VoteType::For, 100_000).unwrap();
        assert!(!bigger.quorum_reached(p.quorum_bps));
    }

    #[test]
    fn zero_weight_votes_are_rejected() {
        let mut prop = proposal(1_000_000);
        assert!(prop.record_vote(VoteType::For, 0).is_err());
    }

    #[test]
    fn action_validation() {
        assert!(ProposalAction::TransferFunds {
            recipient: Pubkey::new_unique(),
            amount: 0,
        }
        .validate()
        .is_err());

        assert!(ProposalAction::UpdateParameters {
            proposal_threshold: 1,
            voting_period: DEFAULT_VOTING_PERIOD,
            quorum_bps: 10_001,
            majority_bps: 5_000,
        }
        .validate()
        .is_err());

        assert!(ProposalAction::Remark {
            data: vec![0; MAX_REMARK_LEN + 1],
        }
        .validate()
        .is_err());

        assert!(ProposalAction::Remark { data: vec![1, 2, 3] }.validate().is_ok());
    }
}
