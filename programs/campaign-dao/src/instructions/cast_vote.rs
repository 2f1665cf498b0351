use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::*;
use crate::errors::GovernanceError;
use crate::events::VoteCast;
use crate::state::{CampaignDao, Proposal, ProposalState, VoteRecord, VoteType};

#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [DAO_SEED, &dao.campaign_id.to_le_bytes()],
        bump = dao.bump,
    )]
    pub dao: Box<Account<'info, CampaignDao>>,

    #[account(
        mut,
        seeds = [PROPOSAL_SEED, dao.key().as_ref(), &proposal.id.to_le_bytes()],
        bump = proposal.bump,
        constraint = proposal.dao == dao.key() @ GovernanceError::ProposalDoesNotExist,
    )]
    pub proposal: Box<Account<'info, Proposal>>,

    /// One per (proposal, voter): a repeat vote fails on init
    #[account(
        init,
        payer = voter,
        space = VoteRecord::SIZE,
        seeds = [VOTE_SEED, proposal.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub vote_record: Box<Account<'info, VoteRecord>>,

    /// Live balance at vote time is the voting weight
    #[account(
        token::mint = dao.token_mint,
        token::authority = voter,
    )]
    pub voter_token_account: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
}

pub fn cast_vote(ctx: Context<CastVote>, vote_type: VoteType) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let dao = &ctx.accounts.dao;
    let proposal = &mut ctx.accounts.proposal;

    match proposal.state(now, &dao.params) {
        ProposalState::Active => {}
        ProposalState::Pending => return err!(GovernanceError::VotingNotStarted),
        _ => return err!(GovernanceError::VotingClosed),
    }

    let weight = ctx.accounts.voter_token_account.amount;
    proposal.record_vote(vote_type, weight)?;

    let vote_record = &mut ctx.accounts.vote_record;
    vote_record.proposal = proposal.key();
    vote_record.voter = ctx.accounts.voter.key();
    vote_record.vote_type = vote_type;
    vote_record.weight = weight;
    vote_record.voted_at = now;
    vote_record.bump = ctx.bumps.vote_record;

    emit!(VoteCast {
        dao: dao.key(),
        proposal_id: proposal.id,
        voter: ctx.accounts.voter.key(),
        vote_type: vote_type as u8,
        weight,
    });

    msg!(
        "Vote recorded on proposal {}: weight {}",
        proposal.id,
        weight
    );

    Ok(())
}
