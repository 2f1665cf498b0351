//! Dev/test faucet for the funding token: a fixed claim per wallet per
//! interval, paid out of a program-owned vault.
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount};

declare_id!("9cRmeC1ZdA3wv91QyuTWGFM4SqAPMnaXFqiMrXh8ZfRM");

pub const FAUCET_SEED: &[u8] = b"faucet";
pub const FAUCET_VAULT_SEED: &[u8] = b"faucet_vault";
pub const CLAIM_RECORD_SEED: &[u8] = b"claim_record";

/// 1,000 USDC per claim (6 decimals)
pub const USDC_CLAIM_AMOUNT: u64 = 1_000 * 1_000_000;

/// One claim per wallet per day
pub const CLAIM_INTERVAL: i64 = 24 * 60 * 60;

#[error_code]
pub enum FaucetError {
    #[msg("Claim interval has not elapsed yet")]
    ClaimTooSoon,

    #[msg("Faucet vault does not hold enough tokens")]
    InsufficientFaucetBalance,
}

#[account]
pub struct Faucet {
    pub usdc_mint: Pubkey,
    pub usdc_claim_amount: u64,
    pub claim_interval: i64,
    pub bump: u8,
}

impl Faucet {
    pub const SIZE: usize = 8 + 32 + 8 + 8 + 1;
}

#[account]
pub struct ClaimRecord {
    pub user: Pubkey,
    pub last_claim_time: i64,
    pub bump: u8,
}

impl ClaimRecord {
    pub const SIZE: usize = 8 + 32 + 8 + 1;
}

#[derive(Accounts)]
pub struct InitializeFaucet<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = Faucet::SIZE,
        seeds = [FAUCET_SEED],
        bump,
    )]
    pub faucet: Box<Account<'info, Faucet>>,

    pub usdc_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = payer,
        seeds = [FAUCET_VAULT_SEED],
        bump,
        token::mint = usdc_mint,
        token::authority = faucet,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [FAUCET_SEED],
        bump = faucet.bump,
    )]
    pub faucet: Box<Account<'info, Faucet>>,

    #[account(
        init_if_needed,
        payer = user,
        space = ClaimRecord::SIZE,
        seeds = [CLAIM_RECORD_SEED, user.key().as_ref()],
        bump,
    )]
    pub claim_record: Box<Account<'info, ClaimRecord>>,

    #[account(
        mut,
        seeds = [FAUCET_VAULT_SEED],
        bump,
        token::mint = faucet.usdc_mint,
        token::authority = faucet,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = faucet.usdc_mint,
        token::authority = user,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[program]
pub mod usdc_faucet {
    use super::*;

    pub fn initialize_faucet(ctx: Context<InitializeFaucet>) -> Result<()> {
        let faucet = &mut ctx.accounts.faucet;
        faucet.usdc_mint = ctx.accounts.usdc_mint.key();
        faucet.usdc_claim_amount = USDC_CLAIM_AMOUNT;
        faucet.claim_interval = CLAIM_INTERVAL;
        faucet.bump = ctx.bumps.faucet;

        msg!("Faucet initialized for mint {}", faucet.usdc_mint);
        Ok(())
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        let faucet = &ctx.accounts.faucet;
        let record = &mut ctx.accounts.claim_record;

        if record.last_claim_time != 0 {
            require!(
                now - record.last_claim_time >= faucet.claim_interval,
                FaucetError::ClaimTooSoon
            );
        }
        require!(
            ctx.accounts.vault.amount >= faucet.usdc_claim_amount,
            FaucetError::InsufficientFaucetBalance
        );

        if record.user == Pubkey::default() {
            record.user = ctx.accounts.user.key();
            record.bump = ctx.bumps.claim_record;
        }
        record.last_claim_time = now;

        let signer_seeds: &[&[&[u8]]] = &[&[FAUCET_SEED, &[faucet.bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                token::Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.user_token_account.to_account_info(),
                    authority: ctx.accounts.faucet.to_account_info(),
                },
                signer_seeds,
            ),
            faucet.usdc_claim_amount,
        )?;

        msg!(
            "Dispensed {} units to {}",
            faucet.usdc_claim_amount,
            ctx.accounts.user.key()
        );
        Ok(())
    }
}
