use anchor_lang::prelude::*;

use crate::errors::LaunchpadError;

#[account]
pub struct OgPointsAccount {
    /// Owning user
    pub user: Pubkey,

    /// Cumulative OG points across all campaigns
    pub points: u64,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 2],
}

impl OgPointsAccount {
    pub const SIZE: usize = 8 + // discriminator
        32 + // user
        8 + // points
        1 + // bump
        8 * 2; // reserved

    pub fn award(&mut self, amount: u64) -> Result<()> {
        self.points = self
            .points
            .checked_add(amount)
            .ok_or(LaunchpadError::MathOverflow)?;
        Ok(())
    }
}
