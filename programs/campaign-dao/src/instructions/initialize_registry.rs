use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::state::{DaoRegistry, GovernanceParams};

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = DaoRegistry::SIZE,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub registry: Box<Account<'info, DaoRegistry>>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_registry(
    ctx: Context<InitializeRegistry>,
    params: Option<GovernanceParams>,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    let default_params = params.unwrap_or_default();
    default_params.validate()?;

    registry.admin = ctx.accounts.admin.key();
    registry.default_params = default_params;
    registry.dao_count = 0;
    registry.bump = ctx.bumps.registry;

    msg!("DAO registry initialized");
    msg!("Admin: {}", registry.admin);
    msg!(
        "Defaults: threshold {}, period {}s, quorum {} bps, majority {} bps",
        default_params.proposal_threshold,
        default_params.voting_period,
        default_params.quorum_bps,
        default_params.majority_bps
    );

    Ok(())
}
