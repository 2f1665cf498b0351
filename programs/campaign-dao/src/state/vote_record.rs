use anchor_lang::prelude::*;

use crate::state::VoteType;

/// One per (proposal, voter); the account's existence is the
/// one-vote-per-voter guarantee, the fields keep the choice displayable.
#[account]
pub struct VoteRecord {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub vote_type: VoteType,
    pub weight: u64,
    pub voted_at: i64,
    pub bump: u8,
}

impl VoteRecord {
    pub const SIZE: usize = 8 + // discriminator
        32 + // proposal
        32 + // voter
        1 + // vote_type
        8 + // weight
        8 + // voted_at
        1; // bump
}
