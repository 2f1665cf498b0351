use anchor_lang::prelude::*;

use crate::constants::DAO_SEED;
use crate::errors::GovernanceError;
use crate::events::ParametersUpdated;
use crate::state::{CampaignDao, GovernanceParams};

#[derive(Accounts)]
pub struct UpdateParameters<'info> {
    /// Only the DAO account itself may sign; no external key can produce
    /// that signature, so this path is reachable solely through a passed
    /// governance proposal (the self-amendment pattern)
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [DAO_SEED, &dao.campaign_id.to_le_bytes()],
        bump = dao.bump,
        constraint = authority.key() == dao.key() @ GovernanceError::Unauthorized,
    )]
    pub dao: Box<Account<'info, CampaignDao>>,
}

pub fn update_parameters(ctx: Context<UpdateParameters>, params: GovernanceParams) -> Result<()> {
    params.validate()?;

    let dao = &mut ctx.accounts.dao;
    dao.params = params;

    emit!(ParametersUpdated {
        dao: dao.key(),
        proposal_threshold: params.proposal_threshold,
        voting_period: params.voting_period,
        quorum_bps: params.quorum_bps,
        majority_bps: params.majority_bps,
    });

    Ok(())
}
