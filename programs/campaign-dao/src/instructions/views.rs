use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::*;
use crate::errors::GovernanceError;
use crate::state::{CampaignDao, Proposal, ProposalState};

#[derive(Accounts)]
pub struct ProposalView<'info> {
    #[account(
        seeds = [DAO_SEED, &dao.campaign_id.to_le_bytes()],
        bump = dao.bump,
    )]
    pub dao: Box<Account<'info, CampaignDao>>,

    #[account(
        seeds = [PROPOSAL_SEED, dao.key().as_ref(), &proposal.id.to_le_bytes()],
        bump = proposal.bump,
        constraint = proposal.dao == dao.key() @ GovernanceError::ProposalDoesNotExist,
    )]
    pub proposal: Box<Account<'info, Proposal>>,
}

/// Derived, never stored: Pending before start, Active until end, then
/// Succeeded iff quorum and majority were met, else Defeated; Executed once
/// executed
pub fn get_proposal_state(ctx: Context<ProposalView>) -> Result<ProposalState> {
    let clock = Clock::get()?;
    Ok(ctx
        .accounts
        .proposal
        .state(clock.unix_timestamp, &ctx.accounts.dao.params))
}

#[derive(Accounts)]
pub struct VotingPowerView<'info> {
    #[account(
        seeds = [DAO_SEED, &dao.campaign_id.to_le_bytes()],
        bump = dao.bump,
    )]
    pub dao: Box<Account<'info, CampaignDao>>,

    #[account(
        token::mint = dao.token_mint,
    )]
    pub token_account: Box<Account<'info, TokenAccount>>,
}

/// Live token balance; the weight a vote cast right now would carry
pub fn get_voting_power(ctx: Context<VotingPowerView>) -> Result<u64> {
    Ok(ctx.accounts.token_account.amount)
}
