use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::const_pda::const_authority::VAULT_BUMP;
use crate::constants::*;
use crate::errors::LaunchpadError;
use crate::state::{Campaign, CampaignPhase, Platform};

#[derive(Accounts)]
#[instruction(campaign_id: u32)]
pub struct WithdrawRemainingTokens<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
        constraint = platform.admin == admin.key() @ LaunchpadError::Unauthorized,
    )]
    pub platform: Box<Account<'info, Platform>>,

    #[account(
        seeds = [CAMPAIGN_SEED, &campaign_id.to_le_bytes()],
        bump = campaign.bump,
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
        seeds = [TOKEN_VAULT, vault_authority.key().as_ref(), campaign.token_mint.as_ref()],
        bump,
        token::mint = campaign.token_mint,
        token::authority = vault_authority,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    /// Destination for the rescued tokens
    #[account(
        mut,
        token::mint = campaign.token_mint,
    )]
    pub destination: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Rescue unsold campaign tokens once a campaign is terminal without having
/// completed (cancelled, or expired below target). Buyers' tokens are
/// untouched; only the vault remainder moves.
pub fn withdraw_remaining_tokens(
    ctx: Context<WithdrawRemainingTokens>,
    campaign_id: u32,
) -> Result<()> {
    let clock = Clock::get()?;
    let campaign = &ctx.accounts.campaign;

    let phase = campaign.phase(clock.unix_timestamp);
    require!(
        matches!(phase, CampaignPhase::Cancelled | CampaignPhase::Expired),
        LaunchpadError::CampaignInactive
    );

    let amount = ctx.accounts.token_vault.amount;
    require!(amount > 0, LaunchpadError::NothingToWithdraw);

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.token_vault.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    msg!("Withdrew {} remaining tokens from campaign {}", amount, campaign_id);

    Ok(())
}
