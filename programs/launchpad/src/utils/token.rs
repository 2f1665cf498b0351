use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LaunchpadError;

/// Four-way token split fixed at campaign creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAllocations {
    pub tokens_for_sale: u64,
    pub creator_allocation: u64,
    pub liquidity_allocation: u64,
    pub platform_fee_tokens: u64,
}

/// Proportional share of the supply, widened so percent/bps products cannot
/// overflow near the supply ceiling
fn supply_share(total_supply: u64, numerator: u64, denominator: u64) -> Result<u64> {
    let share = (total_supply as u128)
        .checked_mul(numerator as u128)
        .ok_or(LaunchpadError::MathOverflow)?
        .checked_div(denominator as u128)
        .ok_or(LaunchpadError::DivisionByZero)?;
    share
        .try_into()
        .map_err(|_| LaunchpadError::TypeCastFailed.into())
}

/// Split the total supply into sale / creator / liquidity / platform-fee
/// allocations. The sale allocation absorbs integer-division remainders so
/// the four terms always sum to the total supply exactly.
pub fn calculate_token_allocations(
    total_supply: u64,
    platform_fee_bps: u16,
) -> Result<TokenAllocations> {
    let creator_allocation =
        supply_share(total_supply, CREATOR_ALLOCATION_PERCENT as u64, 100)?;

    let liquidity_allocation =
        supply_share(total_supply, LIQUIDITY_ALLOCATION_PERCENT as u64, 100)?;

    let platform_fee_tokens =
        supply_share(total_supply, platform_fee_bps as u64, BASIS_POINTS)?;

    let tokens_for_sale = total_supply
        .checked_sub(creator_allocation)
        .and_then(|v| v.checked_sub(liquidity_allocation))
        .and_then(|v| v.checked_sub(platform_fee_tokens))
        .ok_or(LaunchpadError::InvalidTokenAllocation)?;

    require!(tokens_for_sale > 0, LaunchpadError::InvalidTokenAllocation);

    // Verify total
    let total = tokens_for_sale
        .checked_add(creator_allocation)
        .and_then(|v| v.checked_add(liquidity_allocation))
        .and_then(|v| v.checked_add(platform_fee_tokens))
        .ok_or(LaunchpadError::MathOverflow)?;

    require!(total == total_supply, LaunchpadError::InvalidTokenAllocation);

    Ok(TokenAllocations {
        tokens_for_sale,
        creator_allocation,
        liquidity_allocation,
        platform_fee_tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocations_sum_to_total_supply() {
        // prime-ish supplies exercise every rounding path
        for supply in [
            MIN_TOTAL_SUPPLY,
            MIN_TOTAL_SUPPLY + 1,
            123_456_789_123_456_789,
            MAX_TOTAL_SUPPLY,
        ] {
            for fee_bps in [0u16, 1, DEFAULT_PLATFORM_FEE_BPS, MAX_PLATFORM_FEE_BPS] {
                let a = calculate_token_allocations(supply, fee_bps).unwrap();
                assert_eq!(
                    a.tokens_for_sale
                        + a.creator_allocation
                        + a.liquidity_allocation
                        + a.platform_fee_tokens,
                    supply,
                    "split must conserve the total supply (supply {supply}, fee {fee_bps})"
                );
                assert!(a.tokens_for_sale > 0);
            }
        }
    }

    #[test]
    fn default_split_shape() {
        let supply = 1_000_000_000_000_000u64;
        let a = calculate_token_allocations(supply, DEFAULT_PLATFORM_FEE_BPS).unwrap();
        assert_eq!(a.creator_allocation, supply / 5); // 20%
        assert_eq!(a.liquidity_allocation, supply * 15 / 100);
        assert_eq!(a.platform_fee_tokens, supply / 20); // 5%
        assert_eq!(a.tokens_for_sale, supply * 60 / 100);
    }
}
