use anchor_lang::prelude::*;

use crate::constants::MAX_TOPIC_LEN;
use crate::errors::GovernanceError;
use crate::state::GovernanceParams;

#[account]
pub struct CampaignDao {
    /// Campaign this DAO governs; one DAO per campaign
    pub campaign_id: u32,

    /// Campaign token mint; balances are the voting-weight source
    pub token_mint: Pubkey,

    /// Campaign creator
    pub creator: Pubkey,

    /// Off-chain discussion topic handle
    pub topic: String,

    /// Whether governance is enabled for this campaign
    pub enabled: bool,

    /// Active governance parameters; amendable only through a proposal
    pub params: GovernanceParams,

    /// Proposals ever created; ids ascend from 1
    pub proposal_count: u64,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl CampaignDao {
    pub const SIZE: usize = 8 + // discriminator
        4 + // campaign_id
        32 + // token_mint
        32 + // creator
        4 + MAX_TOPIC_LEN + // topic
        1 + // enabled
        GovernanceParams::SIZE + // params
        8 + // proposal_count
        1 + // bump
        8 * 4; // reserved

    /// Next proposal id, bumping the counter
    pub fn assign_proposal_id(&mut self) -> Result<u64> {
        self.proposal_count = self
            .proposal_count
            .checked_add(1)
            .ok_or(GovernanceError::MathOverflow)?;
        Ok(self.proposal_count)
    }
}

/// Reverse lookup: campaign token mint -> DAO. Initialized together with
/// the DAO, so a token can back at most one DAO.
#[account]
pub struct DaoTokenIndex {
    pub token_mint: Pubkey,
    pub dao: Pubkey,
    pub bump: u8,
}

impl DaoTokenIndex {
    pub const SIZE: usize = 8 + // discriminator
        32 + // token_mint
        32 + // dao
        1; // bump
}

/// Lamports spendable from the DAO treasury without dipping below the
/// account's rent-exempt floor.
pub fn spendable_treasury_lamports(dao_info: &AccountInfo, rent: &Rent) -> Result<u64> {
    let floor = rent.minimum_balance(dao_info.data_len());
    Ok(dao_info.lamports().saturating_sub(floor))
}
