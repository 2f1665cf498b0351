#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::{GovernanceParams, ProposalState, VoteType};

declare_id!("BKGiuneKF1jy6H1fbRrcEVXJEnNVFQ2Cez3JZrQ3C3dj");

#[program]
pub mod campaign_dao {
    use super::*;

    /// Initialize the factory registry and its default parameters
    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        params: Option<GovernanceParams>,
    ) -> Result<()> {
        instructions::initialize_registry(ctx, params)
    }

    /// Update the defaults for future DAOs (admin only)
    pub fn update_default_parameters(
        ctx: Context<UpdateDefaultParameters>,
        params: GovernanceParams,
    ) -> Result<()> {
        instructions::update_default_parameters(ctx, params)
    }

    /// Create the DAO for a campaign with the registry defaults
    pub fn create_campaign_dao(ctx: Context<CreateDao>, params: CreateDaoParams) -> Result<()> {
        instructions::create_campaign_dao(ctx, params)
    }

    /// Create the DAO for a campaign with per-DAO parameter overrides
    pub fn create_campaign_dao_with_custom_params(
        ctx: Context<CreateDao>,
        params: CreateDaoParams,
        governance_params: GovernanceParams,
    ) -> Result<()> {
        instructions::create_campaign_dao_with_custom_params(ctx, params, governance_params)
    }

    /// Create a proposal; requires the proposer to hold the threshold
    pub fn create_proposal(
        ctx: Context<CreateProposal>,
        params: CreateProposalParams,
    ) -> Result<()> {
        instructions::create_proposal(ctx, params)
    }

    /// Cast a vote weighted by the caller's live token balance
    pub fn cast_vote(ctx: Context<CastVote>, vote_type: VoteType) -> Result<()> {
        instructions::cast_vote(ctx, vote_type)
    }

    /// Execute a succeeded proposal's action
    pub fn execute_proposal(ctx: Context<ExecuteProposal>) -> Result<()> {
        instructions::execute_proposal(ctx)
    }

    /// Amend governance parameters; only the DAO itself may sign
    pub fn update_parameters(
        ctx: Context<UpdateParameters>,
        params: GovernanceParams,
    ) -> Result<()> {
        instructions::update_parameters(ctx, params)
    }

    /// Top up the DAO treasury
    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        instructions::fund_treasury(ctx, amount)
    }

    // ===== Read views =====

    /// Derived proposal lifecycle state
    pub fn get_proposal_state(ctx: Context<ProposalView>) -> Result<ProposalState> {
        instructions::get_proposal_state(ctx)
    }

    /// Live voting weight of a token account
    pub fn get_voting_power(ctx: Context<VotingPowerView>) -> Result<u64> {
        instructions::get_voting_power(ctx)
    }
}
