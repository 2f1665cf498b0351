use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::constants::*;
use crate::errors::GovernanceError;
use crate::events::ProposalCreated;
use crate::state::{CampaignDao, Proposal, ProposalAction};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateProposalParams {
    pub title: String,
    pub description: String,
    pub action: ProposalAction,
}

#[derive(Accounts)]
pub struct CreateProposal<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(
        mut,
        seeds = [DAO_SEED, &dao.campaign_id.to_le_bytes()],
        bump = dao.bump,
        constraint = dao.enabled @ GovernanceError::DaoDisabled,
    )]
    pub dao: Box<Account<'info, CampaignDao>>,

    #[account(
        init,
        payer = proposer,
        space = Proposal::SIZE,
        seeds = [PROPOSAL_SEED, dao.key().as_ref(), &(dao.proposal_count + 1).to_le_bytes()],
        bump,
    )]
    pub proposal: Box<Account<'info, Proposal>>,

    /// Proposer's token balance gates proposal creation
    #[account(
        token::mint = dao.token_mint,
        token::authority = proposer,
        constraint = proposer_token_account.amount >= dao.params.proposal_threshold
            @ GovernanceError::InsufficientVotingPower,
    )]
    pub proposer_token_account: Box<Account<'info, TokenAccount>>,

    /// Supply snapshot source
    #[account(
        address = dao.token_mint,
    )]
    pub token_mint: Box<Account<'info, Mint>>,

    pub system_program: Program<'info, System>,
}

pub fn create_proposal(ctx: Context<CreateProposal>, params: CreateProposalParams) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    require!(
        !params.title.is_empty() && params.title.len() <= MAX_TITLE_LEN,
        GovernanceError::EmptyTitle
    );
    require!(
        params.description.len() <= MAX_DESCRIPTION_LEN,
        GovernanceError::InvalidParameters
    );
    params.action.validate()?;

    let dao = &mut ctx.accounts.dao;
    let proposal_id = dao.assign_proposal_id()?;

    let proposal = &mut ctx.accounts.proposal;
    proposal.dao = dao.key();
    proposal.id = proposal_id;
    proposal.proposer = ctx.accounts.proposer.key();
    proposal.title = params.title.clone();
    proposal.description = params.description;
    proposal.action = params.action;
    proposal.start_time = now;
    proposal.end_time = now
        .checked_add(dao.params.voting_period)
        .ok_or(GovernanceError::MathOverflow)?;
    proposal.snapshot_supply = ctx.accounts.token_mint.supply;
    proposal.for_votes = 0;
    proposal.against_votes = 0;
    proposal.abstain_votes = 0;
    proposal.executed = false;
    proposal.bump = ctx.bumps.proposal;

    emit!(ProposalCreated {
        dao: dao.key(),
        proposal_id,
        proposer: ctx.accounts.proposer.key(),
        title: params.title,
        start_time: proposal.start_time,
        end_time: proposal.end_time,
        snapshot_supply: proposal.snapshot_supply,
    });

    msg!(
        "Proposal {} created; voting ends at {}",
        proposal_id,
        proposal.end_time
    );

    Ok(())
}
