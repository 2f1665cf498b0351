use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::{
    create_metadata_accounts_v3,
    CreateMetadataAccountsV3,
    Metadata,
};
use anchor_spl::token::{self, Mint, Token, TokenAccount};
use mpl_token_metadata::types::DataV2;

use crate::constants::*;
use crate::events::CampaignCreated;
use crate::state::{Campaign, Platform};
use crate::utils::token::calculate_token_allocations;
use crate::utils::validation::validate_campaign_metadata;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateCampaignParams {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub icon_uri: String,
    pub whitepaper_uri: String,
    /// Funding target in USDC units
    pub target_funding: u64,
    /// Total token supply to mint
    pub total_supply: u64,
    /// Curve steepness in parts per million
    pub reserve_ratio: u32,
    /// Purchase deadline (unix)
    pub deadline: i64,
}

#[derive(Accounts)]
#[instruction(params: CreateCampaignParams)]
pub struct CreateCampaign<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Box<Account<'info, Platform>>,

    /// Campaign ledger account, seeded by the next ascending id
    #[account(
        init,
        payer = creator,
        space = Campaign::SIZE,
        seeds = [CAMPAIGN_SEED, &(platform.campaign_count + 1).to_le_bytes()],
        bump,
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    /// CHECK: vault authority
    #[account(
        mut,
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    #[account(
        init,
        payer = creator,
        seeds = [TOKEN_MINT_SEED, campaign.key().as_ref()],
        bump,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = campaign.key(),
        mint::freeze_authority = campaign.key(),
    )]
    pub token_mint: Account<'info, Mint>,

    /// Campaign token vault holding the entire supply until settlement
    #[account(
        init,
        payer = creator,
        seeds = [TOKEN_VAULT, vault_authority.key().as_ref(), token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = vault_authority,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    /// CHECK: funding token mint (verified against the platform config)
    #[account(
        address = platform.usdc_mint,
    )]
    pub usdc_mint: Account<'info, Mint>,

    /// Per-campaign USDC vault holding contributions until completion or refund
    #[account(
        init,
        payer = creator,
        seeds = [USDC_VAULT, campaign.key().as_ref()],
        bump,
        token::mint = usdc_mint,
        token::authority = vault_authority,
    )]
    pub usdc_vault: Account<'info, TokenAccount>,

    /// Token metadata account
    /// CHECK: Validated by Metaplex program
    #[account(
        mut,
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            token_mint.key().as_ref(),
        ],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub metadata: UncheckedAccount<'info>,

    /// Token program
    pub token_program: Program<'info, Token>,

    /// Associated Token program
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// Metadata program
    pub metadata_program: Program<'info, Metadata>,

    /// System program
    pub system_program: Program<'info, System>,

    /// Rent
    pub rent: Sysvar<'info, Rent>,
}

pub fn create_campaign(
    ctx: Context<CreateCampaign>,
    params: CreateCampaignParams,
) -> Result<u32> {
    let platform = &mut ctx.accounts.platform;
    let campaign = &mut ctx.accounts.campaign;
    let token_mint = &ctx.accounts.token_mint;
    let creator = &ctx.accounts.creator;
    let clock = Clock::get()?;

    validate_campaign_metadata(
        &params.name,
        &params.symbol,
        &params.description,
        &params.icon_uri,
        &params.whitepaper_uri,
    )?;
    platform.validate_campaign_params(
        params.target_funding,
        params.total_supply,
        params.reserve_ratio,
        params.deadline,
        clock.unix_timestamp,
    )?;

    let campaign_id = platform.assign_campaign_id()?;

    // Four-way split; must sum to the total supply exactly
    let allocations =
        calculate_token_allocations(params.total_supply, platform.platform_fee_bps)?;

    campaign.id = campaign_id;
    campaign.creator = creator.key();
    campaign.token_mint = token_mint.key();
    campaign.amm_pool = None;
    campaign.target_amount = params.target_funding;
    campaign.amount_raised = 0;
    campaign.total_supply = params.total_supply;
    campaign.tokens_sold = 0;
    campaign.tokens_for_sale = allocations.tokens_for_sale;
    campaign.creator_allocation = allocations.creator_allocation;
    campaign.liquidity_allocation = allocations.liquidity_allocation;
    campaign.platform_fee_tokens = allocations.platform_fee_tokens;
    campaign.reserve_ratio = params.reserve_ratio;
    campaign.deadline = params.deadline;
    campaign.created_at = clock.unix_timestamp;
    campaign.is_active = true;
    campaign.is_funding_complete = false;
    campaign.is_cancelled = false;
    campaign.is_promoted = false;
    campaign.locked = false;
    campaign.participants_count = 0;
    campaign.promotional_og_points = 0;
    campaign.name = params.name.clone();
    campaign.symbol = params.symbol.clone();
    campaign.description = params.description;
    campaign.icon_uri = params.icon_uri;
    campaign.whitepaper_uri = params.whitepaper_uri;
    campaign.bump = ctx.bumps.campaign;

    // Mint the full supply to the vault
    let id_bytes = campaign_id.to_le_bytes();
    let seeds = &[CAMPAIGN_SEED, id_bytes.as_ref(), &[campaign.bump]];
    let signer_seeds = &[&seeds[..]];

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::MintTo {
                mint: ctx.accounts.token_mint.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: campaign.to_account_info(),
            },
            signer_seeds,
        ),
        params.total_supply,
    )?;

    // Create metadata
    let metadata_accounts = CreateMetadataAccountsV3 {
        metadata: ctx.accounts.metadata.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        mint_authority: campaign.to_account_info(),
        payer: ctx.accounts.creator.to_account_info(),
        update_authority: campaign.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        rent: ctx.accounts.rent.to_account_info(),
    };

    let data = DataV2 {
        name: params.name.clone(),
        symbol: params.symbol,
        uri: campaign.icon_uri.clone(),
        seller_fee_basis_points: 0,
        creators: None,
        collection: None,
        uses: None,
    };

    create_metadata_accounts_v3(
        CpiContext::new_with_signer(
            ctx.accounts.metadata_program.to_account_info(),
            metadata_accounts,
            signer_seeds,
        ),
        data,
        false, // is_mutable
        true,  // update_authority_is_signer
        None,  // collection_details
    )?;

    // Revoke mint authority so the supply is fixed for good
    token::set_authority(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::SetAuthority {
                current_authority: campaign.to_account_info(),
                account_or_mint: ctx.accounts.token_mint.to_account_info(),
            },
            signer_seeds,
        ),
        token::spl_token::instruction::AuthorityType::MintTokens,
        None,
    )?;

    emit!(CampaignCreated {
        campaign_id,
        creator: creator.key(),
        name: params.name,
        target_funding: params.target_funding,
        total_supply: params.total_supply,
        deadline: params.deadline,
    });

    msg!("Campaign {} created", campaign_id);
    msg!("Token: {}", token_mint.key());
    msg!("Target: {} USDC units", params.target_funding);

    Ok(campaign_id)
}
