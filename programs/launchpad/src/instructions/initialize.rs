use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::*;
use crate::state::Platform;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializeParams {
    pub platform_fee_bps: Option<u16>,
    pub promotion_fee: Option<u64>,
    pub promotional_og_points: Option<u64>,
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = Platform::SIZE,
        seeds = [PLATFORM_SEED],
        bump,
    )]
    pub platform: Box<Account<'info, Platform>>,

    /// Funding token mint (6-decimal stablecoin)
    pub usdc_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    let platform = &mut ctx.accounts.platform;

    // First set default values
    platform.initialize_defaults(
        ctx.accounts.admin.key(),
        ctx.accounts.usdc_mint.key(),
        ctx.bumps.platform,
    );

    // Then override defaults with supplied parameters
    if let Some(fee_bps) = params.platform_fee_bps {
        require!(
            fee_bps <= MAX_PLATFORM_FEE_BPS,
            crate::errors::LaunchpadError::InvalidInput
        );
        platform.platform_fee_bps = fee_bps;
    }

    if let Some(promotion_fee) = params.promotion_fee {
        platform.promotion_fee = promotion_fee;
    }

    if let Some(promotional_og_points) = params.promotional_og_points {
        platform.promotional_og_points = promotional_og_points;
    }

    msg!("Platform initialized successfully");
    msg!("Admin: {}", platform.admin);
    msg!("Funding token: {}", platform.usdc_mint);
    msg!("Platform fee: {} bps", platform.platform_fee_bps);

    Ok(())
}
