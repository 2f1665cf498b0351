use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::errors::GovernanceError;
use crate::events::DefaultParametersUpdated;
use crate::state::{DaoRegistry, GovernanceParams};

#[derive(Accounts)]
pub struct UpdateDefaultParameters<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        constraint = registry.admin == admin.key() @ GovernanceError::Unauthorized,
    )]
    pub registry: Box<Account<'info, DaoRegistry>>,
}

/// Applies to DAOs created after the update; existing DAOs keep their
/// parameters until they amend themselves
pub fn update_default_parameters(
    ctx: Context<UpdateDefaultParameters>,
    params: GovernanceParams,
) -> Result<()> {
    params.validate()?;

    let registry = &mut ctx.accounts.registry;
    registry.default_params = params;

    emit!(DefaultParametersUpdated {
        proposal_threshold: params.proposal_threshold,
        voting_period: params.voting_period,
        quorum_bps: params.quorum_bps,
        majority_bps: params.majority_bps,
    });

    msg!("Default governance parameters updated");

    Ok(())
}
