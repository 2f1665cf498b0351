use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LaunchpadError;
use crate::events::PlatformFeeUpdated;
use crate::state::Platform;

#[derive(Accounts)]
pub struct UpdatePlatformFee<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
        constraint = platform.admin == admin.key() @ LaunchpadError::Unauthorized,
    )]
    pub platform: Box<Account<'info, Platform>>,
}

/// Applies to campaigns created after the update; existing splits are fixed
pub fn update_platform_fee(ctx: Context<UpdatePlatformFee>, new_fee_bps: u16) -> Result<()> {
    require!(
        new_fee_bps <= MAX_PLATFORM_FEE_BPS,
        LaunchpadError::InvalidInput
    );

    let platform = &mut ctx.accounts.platform;
    platform.platform_fee_bps = new_fee_bps;

    emit!(PlatformFeeUpdated { new_fee: new_fee_bps });

    msg!("Platform fee updated to {} bps", new_fee_bps);

    Ok(())
}
