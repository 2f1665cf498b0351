use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GovernanceError;
use crate::events::{ParametersUpdated, ProposalExecuted};
use crate::state::{
    spendable_treasury_lamports, CampaignDao, GovernanceParams, Proposal, ProposalAction,
    ProposalState,
};

#[derive(Accounts)]
pub struct ExecuteProposal<'info> {
    pub executor: Signer<'info>,

    #[account(
        mut,
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

    /// CHECK: required for TransferFunds; must match the action's recipient
    #[account(mut)]
    pub recipient: Option<UncheckedAccount<'info>>,
}

pub fn execute_proposal(ctx: Context<ExecuteProposal>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let proposal = &mut ctx.accounts.proposal;
    let dao = &mut ctx.accounts.dao;

    require!(!proposal.executed, GovernanceError::AlreadyExecuted);
    match proposal.state(now, &dao.params) {
        ProposalState::Succeeded => {}
        ProposalState::Active | ProposalState::Pending => {
            return err!(GovernanceError::VotingStillActive)
        }
        _ => return err!(GovernanceError::ProposalNotSucceeded),
    }

    // Mark executed before dispatching; a failed action aborts the whole
    // transaction, so no partial execution is observable
    proposal.executed = true;

    match proposal.action.clone() {
        ProposalAction::TransferFunds { recipient, amount } => {
            let recipient_info = ctx
                .accounts
                .recipient
                .as_ref()
                .ok_or(GovernanceError::InvalidParameters)?;
            require!(
                recipient_info.key() == recipient,
                GovernanceError::InvalidParameters
            );

            let dao_info = dao.to_account_info();
            let rent = Rent::get()?;
            require!(
                spendable_treasury_lamports(&dao_info, &rent)? >= amount,
                GovernanceError::InsufficientTreasuryBalance
            );

            **dao_info.try_borrow_mut_lamports()? -= amount;
            **recipient_info.try_borrow_mut_lamports()? += amount;

            msg!("Treasury transfer: {} lamports to {}", amount, recipient);
        }
        ProposalAction::UpdateParameters {
            proposal_threshold,
            voting_period,
            quorum_bps,
            majority_bps,
        } => {
            let params = GovernanceParams {
                proposal_threshold,
                voting_period,
                quorum_bps,
                majority_bps,
            };
            params.validate()?;
            dao.params = params;

            emit!(ParametersUpdated {
                dao: dao.key(),
                proposal_threshold,
                voting_period,
                quorum_bps,
                majority_bps,
            });

            msg!("Governance parameters amended by proposal {}", proposal.id);
        }
        ProposalAction::Remark { data } => {
            msg!("Remark executed ({} bytes)", data.len());
        }
    }

    emit!(ProposalExecuted {
        dao: dao.key(),
        proposal_id: proposal.id,
        executor: ctx.accounts.executor.key(),
    });

    Ok(())
}
