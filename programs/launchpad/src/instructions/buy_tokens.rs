use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount};
use anchor_spl::token_interface::TokenInterface;
use cp_amm::state::Config;

use crate::const_pda::const_authority::{POOL_ID, VAULT_BUMP};
use crate::constants::*;
use crate::errors::LaunchpadError;
use crate::events::{
    FundingCompleted, LiquidityAdded, OgPointsAwarded, TokensPurchased,
    UserParticipatedInCampaign,
};
use crate::state::{Campaign, InvestorPosition, OgPointsAccount, Platform};
use crate::utils::curve::BondingCurve;
use crate::utils::pool_liquidity::{get_liquidity_for_adding_liquidity, sqrt_price_from_amounts};

#[derive(Accounts)]
#[instruction(campaign_id: u32)]
pub struct BuyTokens<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Box<Account<'info, Platform>>,

    #[account(
        mut,
        seeds = [CAMPAIGN_SEED, &campaign_id.to_le_bytes()],
        bump = campaign.bump,
        constraint = campaign.id == campaign_id @ LaunchpadError::CampaignDoesNotExist,
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
        mut,
        address = campaign.token_mint @ LaunchpadError::InvalidInput,
    )]
    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        address = platform.usdc_mint @ LaunchpadError::InvalidInput,
    )]
    pub usdc_mint: Box<Account<'info, Mint>>,

    /// Campaign token vault
    #[account(
        mut,
        seeds = [TOKEN_VAULT, vault_authority.key().as_ref(), token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = vault_authority,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    /// Campaign USDC vault
    #[account(
        mut,
        seeds = [USDC_VAULT, campaign.key().as_ref()],
        bump,
        token::mint = usdc_mint,
        token::authority = vault_authority,
    )]
    pub usdc_vault: Box<Account<'info, TokenAccount>>,

    /// Buyer's funding account; SPL enforces balance sufficiency
    #[account(
        mut,
        token::mint = usdc_mint,
        token::authority = buyer,
    )]
    pub buyer_usdc_account: Box<Account<'info, TokenAccount>>,

    /// Buyer's campaign token account
    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = token_mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token_account: Box<Account<'info, TokenAccount>>,

    /// Per-campaign contribution record; created on first purchase
    #[account(
        init_if_needed,
        payer = buyer,
        space = InvestorPosition::SIZE,
        seeds = [INVESTOR_POSITION_SEED, campaign.key().as_ref(), buyer.key().as_ref()],
        bump,
    )]
    pub investor_position: Box<Account<'info, InvestorPosition>>,

    /// Buyer's OG points tally
    #[account(
        init_if_needed,
        payer = buyer,
        space = OgPointsAccount::SIZE,
        seeds = [OG_POINTS_SEED, buyer.key().as_ref()],
        bump,
    )]
    pub og_points: Box<Account<'info, OgPointsAccount>>,

    // ------------------------------------------------------------------
    // Completion accounts. Only the purchase that brings the campaign to
    // its target needs them; that purchase fails without them, which keeps
    // settlement atomic with the triggering transaction.
    // ------------------------------------------------------------------

    /// Creator's campaign token account, receives the creator allocation
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = campaign.creator,
    )]
    pub creator_token_account: Option<Box<Account<'info, TokenAccount>>>,

    /// Creator's USDC account, receives proceeds net of the liquidity float
    #[account(
        mut,
        token::mint = usdc_mint,
        token::authority = campaign.creator,
    )]
    pub creator_usdc_account: Option<Box<Account<'info, TokenAccount>>>,

    /// Platform's fee token account
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = platform.admin,
    )]
    pub platform_fee_account: Option<Box<Account<'info, TokenAccount>>>,

    /// CHECK: pool config
    pub amm_config: Option<AccountLoader<'info, Config>>,
    /// CHECK: pool authority
    #[account(
        mut,
        address = POOL_ID,
    )]
    pub amm_pool_authority: Option<UncheckedAccount<'info>>,
    /// CHECK: pool
    #[account(mut)]
    pub amm_pool: Option<UncheckedAccount<'info>>,
    /// CHECK: position nft mint
    #[account(mut)]
    pub position_nft_mint: Option<Signer<'info>>,
    /// CHECK: position nft account
    #[account(mut)]
    pub position_nft_account: Option<UncheckedAccount<'info>>,
    /// CHECK: position
    #[account(mut)]
    pub amm_position: Option<UncheckedAccount<'info>>,
    /// CHECK: pool base vault
    #[account(mut)]
    pub token_a_vault: Option<UncheckedAccount<'info>>,
    /// CHECK: pool quote vault
    #[account(mut)]
    pub token_b_vault: Option<UncheckedAccount<'info>>,
    /// CHECK: AMM program
    #[account(address = cp_amm::ID)]
    pub amm_program: Option<UncheckedAccount<'info>>,
    /// CHECK: AMM event authority
    pub amm_event_authority: Option<UncheckedAccount<'info>>,
    /// CHECK: token 2022 program
    pub token_2022_program: Option<Interface<'info, TokenInterface>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn buy_tokens(ctx: Context<BuyTokens>, campaign_id: u32, usdc_amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    require!(usdc_amount > 0, LaunchpadError::InvalidInput);

    let campaign = &mut ctx.accounts.campaign;
    campaign.assert_purchasable(now)?;
    campaign.lock()?;

    let curve = BondingCurve::new(
        campaign.tokens_for_sale,
        campaign.target_amount,
        campaign.reserve_ratio,
    )?;
    let quote = curve.quote_purchase(campaign.amount_raised, campaign.tokens_sold, usdc_amount)?;
    require!(quote.usdc_accepted > 0, LaunchpadError::InvalidInput);
    require!(
        ctx.accounts.buyer_usdc_account.amount >= quote.usdc_accepted,
        LaunchpadError::InsufficientBalance
    );

    // Ledger first, transfers second
    let campaign_key = campaign.key();
    let is_promoted = campaign.is_promoted;
    let promotional_og_points = campaign.promotional_og_points;
    campaign.record_purchase(quote.usdc_accepted, quote.tokens_out)?;
    ctx.accounts.platform.record_funding(quote.usdc_accepted)?;

    let position = &mut ctx.accounts.investor_position;
    let is_first_participation = position.is_first_participation();
    if position.investor == Pubkey::default() {
        position.investor = ctx.accounts.buyer.key();
        position.campaign = campaign_key;
        position.bump = ctx.bumps.investor_position;
    }
    position.record_contribution(quote.usdc_accepted, now)?;

    if is_first_participation {
        ctx.accounts.campaign.record_participant()?;

        let og_points = &mut ctx.accounts.og_points;
        if og_points.user == Pubkey::default() {
            og_points.user = ctx.accounts.buyer.key();
            og_points.bump = ctx.bumps.og_points;
        }
        let mut award = OG_POINTS_BASE_AWARD;
        if is_promoted {
            award = award
                .checked_add(promotional_og_points)
                .ok_or(LaunchpadError::MathOverflow)?;
        }
        og_points.award(award)?;

        emit!(OgPointsAwarded {
            campaign_id,
            user: ctx.accounts.buyer.key(),
            amount: award,
        });
        emit!(UserParticipatedInCampaign {
            campaign_id,
            user: ctx.accounts.buyer.key(),
            amount: quote.usdc_accepted,
        });
    }

    // Pull only the accepted amount from the buyer
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.buyer_usdc_account.to_account_info(),
                to: ctx.accounts.usdc_vault.to_account_info(),
                authority: ctx.accounts.buyer.to_account_info(),
            },
        ),
        quote.usdc_accepted,
    )?;

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];
    if quote.tokens_out > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                token::Transfer {
                    from: ctx.accounts.token_vault.to_account_info(),
                    to: ctx.accounts.buyer_token_account.to_account_info(),
                    authority: ctx.accounts.vault_authority.to_account_info(),
                },
                signer_seeds,
            ),
            quote.tokens_out,
        )?;
    }

    emit!(TokensPurchased {
        campaign_id,
        buyer: ctx.accounts.buyer.key(),
        usdc_amount: quote.usdc_accepted,
        tokens_received: quote.tokens_out,
        timestamp: now,
    });

    if quote.completes_funding {
        let (liquidity_tokens, liquidity_usdc) = settle_completion(&ctx)?;

        let pool_key = ctx
            .accounts
            .amm_pool
            .as_ref()
            .ok_or(LaunchpadError::MissingLiquidityAccounts)?
            .key();

        let campaign = &mut ctx.accounts.campaign;
        campaign.mark_completed(pool_key)?;
        let fee_tokens = campaign.platform_fee_tokens;
        let total_funding = campaign.target_amount;

        let platform = &mut ctx.accounts.platform;
        platform.completed_campaigns = platform
            .completed_campaigns
            .checked_add(1)
            .ok_or(LaunchpadError::MathOverflow)?;
        platform.total_platform_fees = platform
            .total_platform_fees
            .checked_add(fee_tokens)
            .ok_or(LaunchpadError::MathOverflow)?;

        emit!(FundingCompleted {
            campaign_id,
            total_funding,
        });
        emit!(LiquidityAdded {
            campaign_id,
            usdc_amount: liquidity_usdc,
            tokens_amount: liquidity_tokens,
        });

        msg!("Campaign {} funding completed, pool {}", campaign_id, pool_key);
    }

    ctx.accounts.campaign.unlock();

    msg!(
        "Purchase settled: {} USDC for {} tokens (campaign {})",
        quote.usdc_accepted,
        quote.tokens_out,
        campaign_id
    );

    Ok(())
}

/// Completion split and liquidity provisioning, atomic with the purchase
/// that reached the target. Returns the (token, USDC) amounts paired into
/// the pool.
fn settle_completion(ctx: &Context<BuyTokens>) -> Result<(u64, u64)> {
    let campaign = &ctx.accounts.campaign;
    let total_funding = campaign.target_amount;
    let liquidity_tokens = campaign.liquidity_allocation;
    let creator_tokens = campaign.creator_allocation;
    let fee_tokens = campaign.platform_fee_tokens;

    // USDC paired into the pool mirrors the liquidity share of the token
    // split; the rest is released to the creator
    let liquidity_usdc = (total_funding as u128)
        .checked_mul(LIQUIDITY_ALLOCATION_PERCENT as u128)
        .ok_or(LaunchpadError::MathOverflow)?
        .checked_div(100)
        .ok_or(LaunchpadError::DivisionByZero)? as u64;
    let creator_usdc = total_funding
        .checked_sub(liquidity_usdc)
        .ok_or(LaunchpadError::MathOverflow)?;

    let creator_token_account = ctx
        .accounts
        .creator_token_account
        .as_ref()
        .ok_or(LaunchpadError::MissingLiquidityAccounts)?;
    let creator_usdc_account = ctx
        .accounts
        .creator_usdc_account
        .as_ref()
        .ok_or(LaunchpadError::MissingLiquidityAccounts)?;
    let platform_fee_account = ctx
        .accounts
        .platform_fee_account
        .as_ref()
        .ok_or(LaunchpadError::MissingLiquidityAccounts)?;
    let amm_config = ctx
        .accounts
        .amm_config
        .as_ref()
        .ok_or(LaunchpadError::MissingLiquidityAccounts)?;
    let amm_pool_authority = ctx
        .accounts
        .amm_pool_authority
        .as_ref()
        .ok_or(LaunchpadError::MissingLiquidityAccounts)?;
    let amm_pool = ctx
        .accounts
        .amm_pool
        .as_ref()
        .ok_or(LaunchpadError::MissingLiquidityAccounts)?;
    let position_nft_mint = ctx
        .accounts
        .position_nft_mint
        .as_ref()
        .ok_or(LaunchpadError::MissingLiquidityAccounts)?;
    let position_nft_account = ctx
        .accounts
        .position_nft_account
        .as_ref()
        .ok_or(LaunchpadError::MissingLiquidityAccounts)?;
    let amm_position = ctx
        .accounts
        .amm_position
        .as_ref()
        .ok_or(LaunchpadError::MissingLiquidityAccounts)?;
    let token_a_vault = ctx
        .accounts
        .token_a_vault
        .as_ref()
        .ok_or(LaunchpadError::MissingLiquidityAccounts)?;
    let token_b_vault = ctx
        .accounts
        .token_b_vault
        .as_ref()
        .ok_or(LaunchpadError::MissingLiquidityAccounts)?;
    let amm_program = ctx
        .accounts
        .amm_program
        .as_ref()
        .ok_or(LaunchpadError::MissingLiquidityAccounts)?;
    let amm_event_authority = ctx
        .accounts
        .amm_event_authority
        .as_ref()
        .ok_or(LaunchpadError::MissingLiquidityAccounts)?;
    let token_2022_program = ctx
        .accounts
        .token_2022_program
        .as_ref()
        .ok_or(LaunchpadError::MissingLiquidityAccounts)?;

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];

    // Creator allocation
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.token_vault.to_account_info(),
                to: creator_token_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        creator_tokens,
    )?;

    // Platform fee tokens
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.token_vault.to_account_info(),
                to: platform_fee_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        fee_tokens,
    )?;

    // Creator proceeds net of the liquidity float
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.usdc_vault.to_account_info(),
                to: creator_usdc_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        creator_usdc,
    )?;

    // Open the AMM pool at the settlement price
    let sqrt_price = sqrt_price_from_amounts(liquidity_tokens, liquidity_usdc)?;
    let config = amm_config.load()?;
    let liquidity = get_liquidity_for_adding_liquidity(
        liquidity_tokens,
        liquidity_usdc,
        sqrt_price,
        config.sqrt_min_price,
        config.sqrt_max_price,
    )?;
    drop(config);

    cp_amm::cpi::initialize_pool(
        CpiContext::new_with_signer(
            amm_program.to_account_info(),
            cp_amm::cpi::accounts::InitializePoolCtx {
                creator: ctx.accounts.vault_authority.to_account_info(),
                position_nft_mint: position_nft_mint.to_account_info(),
                position_nft_account: position_nft_account.to_account_info(),
                payer: ctx.accounts.vault_authority.to_account_info(),
                config: amm_config.to_account_info(),
                pool_authority: amm_pool_authority.to_account_info(),
                pool: amm_pool.to_account_info(),
                position: amm_position.to_account_info(),
                token_a_mint: ctx.accounts.token_mint.to_account_info(),
                token_b_mint: ctx.accounts.usdc_mint.to_account_info(),
                token_a_vault: token_a_vault.to_account_info(),
                token_b_vault: token_b_vault.to_account_info(),
                payer_token_a: ctx.accounts.token_vault.to_account_info(),
                payer_token_b: ctx.accounts.usdc_vault.to_account_info(),
                token_a_program: ctx.accounts.token_program.to_account_info(),
                token_b_program: ctx.accounts.token_program.to_account_info(),
                token_2022_program: token_2022_program.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                event_authority: amm_event_authority.to_account_info(),
                program: amm_program.to_account_info(),
            },
            signer_seeds,
        ),
        cp_amm::InitializePoolParameters {
            liquidity,
            sqrt_price,
            activation_point: None,
        },
    )?;

    Ok((liquidity_tokens, liquidity_usdc))
}
