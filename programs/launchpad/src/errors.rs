use anchor_lang::prelude::*;

#[error_code]
pub enum LaunchpadError {
    // ===== Permission Errors =====
    #[msg("Unauthorized: caller lacks the required role")]
    Unauthorized,

    #[msg("Not the creator of this campaign")]
    NotCampaignOwner,

    // ===== Input Errors =====
    #[msg("Invalid input")]
    InvalidInput,

    #[msg("Total supply out of bounds")]
    InvalidSupply,

    #[msg("Reserve ratio out of bounds")]
    ReserveRatioOutOfBounds,

    #[msg("Deadline too short")]
    DeadlineTooShort,

    #[msg("Deadline too long")]
    DeadlineTooLong,

    // ===== Campaign State Errors =====
    #[msg("Campaign does not exist")]
    CampaignDoesNotExist,

    #[msg("Campaign is not active")]
    CampaignInactive,

    #[msg("Funding already completed")]
    FundingAlreadyCompleted,

    #[msg("Campaign deadline has expired")]
    DeadlineExpired,

    #[msg("Funding target not met")]
    FundingNotMet,

    #[msg("Campaign is already promoted")]
    AlreadyPromoted,

    // ===== Funds Errors =====
    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Insufficient funds in vault")]
    InsufficientFunds,

    #[msg("Nothing to withdraw")]
    NothingToWithdraw,

    // ===== Refund Errors =====
    #[msg("User cannot claim a refund for this campaign")]
    UserCannotClaimRefund,

    // ===== Settlement Errors =====
    #[msg("Reentrant call detected")]
    ReentrantCall,

    #[msg("Completing purchase requires the liquidity pool accounts")]
    MissingLiquidityAccounts,

    #[msg("Token allocation does not sum to total supply")]
    InvalidTokenAllocation,

    // ===== Math Errors =====
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Division by zero")]
    DivisionByZero,

    #[msg("Type conversion failed")]
    TypeCastFailed,

    // ===== View Errors =====
    #[msg("Invalid pagination bounds")]
    InvalidPageBounds,

    #[msg("Campaign account does not match the requested page")]
    PageAccountMismatch,
}
