use anchor_lang::prelude::*;

#[error_code]
pub enum GovernanceError {
    // ===== Permission Errors =====
    #[msg("Unauthorized: caller lacks the required role")]
    Unauthorized,

    #[msg("Governance is disabled for this campaign")]
    DaoDisabled,

    #[msg("Insufficient voting power")]
    InsufficientVotingPower,

    // ===== Parameter Errors =====
    #[msg("Invalid governance parameters")]
    InvalidParameters,

    #[msg("Proposal title is empty or too long")]
    EmptyTitle,

    // ===== Proposal State Errors =====
    #[msg("Proposal does not exist")]
    ProposalDoesNotExist,

    #[msg("Voting has not started yet")]
    VotingNotStarted,

    #[msg("Voting period has closed")]
    VotingClosed,

    #[msg("Voting period is still active")]
    VotingStillActive,

    #[msg("Proposal has not succeeded")]
    ProposalNotSucceeded,

    #[msg("Proposal already executed")]
    AlreadyExecuted,

    // ===== Treasury Errors =====
    #[msg("Insufficient treasury balance")]
    InsufficientTreasuryBalance,

    // ===== Math Errors =====
    #[msg("Math overflow")]
    MathOverflow,
}
