use anchor_lang::prelude::*;

/// Event emitted when a campaign DAO is created
#[event]
pub struct CampaignDAOCreated {
    /// Campaign the DAO governs
    pub campaign_id: u32,
    /// Campaign token mint (voting-weight source)
    pub campaign_token: Pubkey,
    /// DAO account address
    pub dao_address: Pubkey,
    /// Campaign creator
    pub creator: Pubkey,
}

/// Event emitted when a proposal is created
#[event]
pub struct ProposalCreated {
    pub dao: Pubkey,
    pub proposal_id: u64,
    pub proposer: Pubkey,
    pub title: String,
    pub start_time: i64,
    pub end_time: i64,
    /// Token supply captured as the quorum denominator
    pub snapshot_supply: u64,
}

/// Event emitted for every vote
#[event]
pub struct VoteCast {
    pub dao: Pubkey,
    pub proposal_id: u64,
    pub voter: Pubkey,
    /// 0 = Against, 1 = For, 2 = Abstain
    pub vote_type: u8,
    pub weight: u64,
}

/// Event emitted when a succeeded proposal is executed
#[event]
pub struct ProposalExecuted {
    pub dao: Pubkey,
    pub proposal_id: u64,
    pub executor: Pubkey,
}

/// Event emitted when a DAO amends its own parameters
#[event]
pub struct ParametersUpdated {
    pub dao: Pubkey,
    pub proposal_threshold: u64,
    pub voting_period: i64,
    pub quorum_bps: u16,
    pub majority_bps: u16,
}

/// Event emitted when the factory defaults change
#[event]
pub struct DefaultParametersUpdated {
    pub proposal_threshold: u64,
    pub voting_period: i64,
    pub quorum_bps: u16,
    pub majority_bps: u16,
}

/// Event emitted when the treasury is topped up
#[event]
pub struct TreasuryFunded {
    pub dao: Pubkey,
    pub from: Pubkey,
    pub amount: u64,
}
