use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::*;
use crate::errors::GovernanceError;
use crate::events::CampaignDAOCreated;
use crate::state::{CampaignDao, DaoRegistry, DaoTokenIndex, GovernanceParams};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateDaoParams {
    pub campaign_id: u32,
    /// Off-chain discussion topic handle
    pub topic: String,
    /// Campaign creator recorded on the DAO
    pub creator: Pubkey,
    /// Must be true; a campaign that opted out gets no DAO
    pub is_dao_enabled: bool,
}

#[derive(Accounts)]
#[instruction(params: CreateDaoParams)]
pub struct CreateDao<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, DaoRegistry>>,

    /// One DAO per campaign: a second init on the same id fails
    #[account(
        init,
        payer = payer,
        space = CampaignDao::SIZE,
        seeds = [DAO_SEED, &params.campaign_id.to_le_bytes()],
        bump,
    )]
    pub dao: Box<Account<'info, CampaignDao>>,

    /// One DAO per token: the reverse-lookup index is also an init
    #[account(
        init,
        payer = payer,
        space = DaoTokenIndex::SIZE,
        seeds = [DAO_TOKEN_SEED, token_mint.key().as_ref()],
        bump,
    )]
    pub token_index: Box<Account<'info, DaoTokenIndex>>,

    /// Campaign token mint the DAO draws voting weight from
    pub token_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

pub fn create_campaign_dao(ctx: Context<CreateDao>, params: CreateDaoParams) -> Result<()> {
    let defaults = ctx.accounts.registry.default_params;
    create_dao_inner(ctx, params, defaults)
}

pub fn create_campaign_dao_with_custom_params(
    ctx: Context<CreateDao>,
    params: CreateDaoParams,
    governance_params: GovernanceParams,
) -> Result<()> {
    governance_params.validate()?;
    create_dao_inner(ctx, params, governance_params)
}

fn create_dao_inner(
    ctx: Context<CreateDao>,
    params: CreateDaoParams,
    governance_params: GovernanceParams,
) -> Result<()> {
    require!(params.is_dao_enabled, GovernanceError::DaoDisabled);
    require!(
        params.topic.len() <= MAX_TOPIC_LEN,
        GovernanceError::InvalidParameters
    );

    let registry = &mut ctx.accounts.registry;
    let dao = &mut ctx.accounts.dao;
    let token_index = &mut ctx.accounts.token_index;

    dao.campaign_id = params.campaign_id;
    dao.token_mint = ctx.accounts.token_mint.key();
    dao.creator = params.creator;
    dao.topic = params.topic;
    dao.enabled = true;
    dao.params = governance_params;
    dao.proposal_count = 0;
    dao.bump = ctx.bumps.dao;

    token_index.token_mint = ctx.accounts.token_mint.key();
    token_index.dao = dao.key();
    token_index.bump = ctx.bumps.token_index;

    registry.dao_count = registry
        .dao_count
        .checked_add(1)
        .ok_or(GovernanceError::MathOverflow)?;

    emit!(CampaignDAOCreated {
        campaign_id: params.campaign_id,
        campaign_token: ctx.accounts.token_mint.key(),
        dao_address: dao.key(),
        creator: params.creator,
    });

    msg!("DAO created for campaign {}", params.campaign_id);

    Ok(())
}
