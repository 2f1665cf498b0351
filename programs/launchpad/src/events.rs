use anchor_lang::prelude::*;

// =============================================================================
// CAMPAIGN LIFECYCLE EVENTS
// =============================================================================

/// Event emitted when a new campaign is created
#[event]
pub struct CampaignCreated {
    /// Campaign id
    pub campaign_id: u32,
    /// Creator of the campaign
    pub creator: Pubkey,
    /// Token name
    pub name: String,
    /// Funding target (USDC units)
    pub target_funding: u64,
    /// Total token supply
    pub total_supply: u64,
    /// Funding deadline (unix)
    pub deadline: i64,
}

/// Event emitted on every purchase
#[event]
pub struct TokensPurchased {
    /// Campaign id
    pub campaign_id: u32,
    /// Buyer address
    pub buyer: Pubkey,
    /// USDC accepted for this purchase
    pub usdc_amount: u64,
    /// Tokens received by the buyer
    pub tokens_received: u64,
    /// Purchase timestamp
    pub timestamp: i64,
}

/// Event emitted only on an investor's first purchase in a campaign
#[event]
pub struct UserParticipatedInCampaign {
    /// Campaign id
    pub campaign_id: u32,
    /// Investor address
    pub user: Pubkey,
    /// USDC amount of the first purchase
    pub amount: u64,
}

/// Event emitted when a campaign reaches its funding target
#[event]
pub struct FundingCompleted {
    /// Campaign id
    pub campaign_id: u32,
    /// Total funding raised (== target)
    pub total_funding: u64,
}

/// Event emitted when a campaign is cancelled by its creator
#[event]
pub struct CampaignCancelled {
    /// Campaign id
    pub campaign_id: u32,
    /// Campaign creator
    pub creator: Pubkey,
}

/// Event emitted when an investor reclaims their contribution
#[event]
pub struct RefundClaimed {
    /// Campaign id
    pub campaign_id: u32,
    /// Investor address
    pub investor: Pubkey,
    /// USDC amount refunded
    pub amount: u64,
}

// =============================================================================
// SETTLEMENT EVENTS
// =============================================================================

/// Event emitted when the liquidity pool is provisioned at completion
#[event]
pub struct LiquidityAdded {
    /// Campaign id
    pub campaign_id: u32,
    /// USDC paired into the pool
    pub usdc_amount: u64,
    /// Campaign tokens paired into the pool
    pub tokens_amount: u64,
}

/// Event emitted when OG points are credited to a user
#[event]
pub struct OgPointsAwarded {
    /// Campaign id
    pub campaign_id: u32,
    /// Recipient
    pub user: Pubkey,
    /// Points awarded
    pub amount: u64,
}

// =============================================================================
// PLATFORM EVENTS
// =============================================================================

/// Event emitted when a creator pays the promotion fee
#[event]
pub struct CampaignPromoted {
    /// Campaign id
    pub campaign_id: u32,
}

/// Event emitted when the admin changes the platform fee
#[event]
pub struct PlatformFeeUpdated {
    /// New fee in basis points
    pub new_fee: u16,
}
