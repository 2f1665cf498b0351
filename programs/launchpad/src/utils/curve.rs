use anchor_lang::prelude::*;
use ruint::aliases::U256;

use crate::constants::RESERVE_RATIO_PPM;
use crate::errors::LaunchpadError;

/// Bonding-curve parameters for one campaign. The cumulative cost of the
/// first `s` tokens is
///
///   cost(s) = T * (r*S*s + (PPM - r)*s^2) / (PPM * S^2)
///
/// with S = tokens_for_sale, T = target_amount and r the reserve ratio in
/// parts per million. At r = PPM the price is constant; lower ratios shift
/// cost toward the end of the sale, so the marginal price rises with every
/// token sold. cost(0) = 0 and cost(S) = T hold exactly, which pins the
/// sold-out state to the funding target with no rounding dust.
#[derive(Debug, Clone, Copy)]
pub struct BondingCurve {
    pub tokens_for_sale: u64,
    pub target_amount: u64,
    pub reserve_ratio: u32,
}

/// Result of projecting a purchase against the current ledger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseQuote {
    /// USDC actually accepted; the overshooting part of a final purchase is
    /// never pulled from the buyer
    pub usdc_accepted: u64,
    /// Tokens the buyer receives
    pub tokens_out: u64,
    /// Whether this purchase brings amount_raised to the target
    pub completes_funding: bool,
}

impl PurchaseQuote {
    pub const ZERO: PurchaseQuote = PurchaseQuote {
        usdc_accepted: 0,
        tokens_out: 0,
        completes_funding: false,
    };
}

impl BondingCurve {
    pub fn new(tokens_for_sale: u64, target_amount: u64, reserve_ratio: u32) -> Result<Self> {
        require!(
            tokens_for_sale > 0 && target_amount > 0,
            LaunchpadError::InvalidInput
        );
        require!(
            reserve_ratio > 0 && reserve_ratio <= RESERVE_RATIO_PPM,
            LaunchpadError::ReserveRatioOutOfBounds
        );
        Ok(Self {
            tokens_for_sale,
            target_amount,
            reserve_ratio,
        })
    }

    /// Cumulative USDC cost of the first `sold` tokens, floored.
    pub fn cost_at(&self, sold: u64) -> Result<u64> {
        let sold = sold.min(self.tokens_for_sale);

        let s = U256::from(self.tokens_for_sale);
        let t = U256::from(self.target_amount);
        let r = U256::from(self.reserve_ratio);
        let ppm = U256::from(RESERVE_RATIO_PPM);
        let x = U256::from(sold);

        // r*S*x + (PPM - r)*x^2
        let linear = r
            .checked_mul(s)
            .ok_or(LaunchpadError::MathOverflow)?
            .checked_mul(x)
            .ok_or(LaunchpadError::MathOverflow)?;
        let quadratic = (ppm - r)
            .checked_mul(x)
            .ok_or(LaunchpadError::MathOverflow)?
            .checked_mul(x)
            .ok_or(LaunchpadError::MathOverflow)?;
        let num = linear
            .checked_add(quadratic)
            .ok_or(LaunchpadError::MathOverflow)?
            .checked_mul(t)
            .ok_or(LaunchpadError::MathOverflow)?;

        let denom = ppm
            .checked_mul(s)
            .ok_or(LaunchpadError::MathOverflow)?
            .checked_mul(s)
            .ok_or(LaunchpadError::MathOverflow)?;

        let cost = num.checked_div(denom).ok_or(LaunchpadError::DivisionByZero)?;
        cost.try_into().map_err(|_| LaunchpadError::TypeCastFailed.into())
    }

    /// Greatest `s <= tokens_for_sale` with cost(s) <= raised: the inverse
    /// of `cost_at`, solved in closed form. Floored sqrt and division keep
    /// the result on the paid side of the curve.
    pub fn tokens_at(&self, raised: u64) -> Result<u64> {
        if raised >= self.target_amount {
            return Ok(self.tokens_for_sale);
        }

        let s = U256::from(self.tokens_for_sale);
        let t = U256::from(self.target_amount);
        let r = U256::from(self.reserve_ratio);
        let ppm = U256::from(RESERVE_RATIO_PPM);
        let c = U256::from(raised);

        // K = c * PPM * S^2 / T, the normalized cost
        let k = c
            .checked_mul(ppm)
            .ok_or(LaunchpadError::MathOverflow)?
            .checked_mul(s)
            .ok_or(LaunchpadError::MathOverflow)?
            .checked_mul(s)
            .ok_or(LaunchpadError::MathOverflow)?
            .checked_div(t)
            .ok_or(LaunchpadError::DivisionByZero)?;

        let a = ppm - r;
        let rs = r.checked_mul(s).ok_or(LaunchpadError::MathOverflow)?;

        let sold = if a.is_zero() {
            // constant price: r*S*x = K
            k.checked_div(rs).ok_or(LaunchpadError::DivisionByZero)?
        } else {
            // positive root of a*x^2 + r*S*x - K = 0
            let disc = rs
                .checked_mul(rs)
                .ok_or(LaunchpadError::MathOverflow)?
                .checked_add(
                    U256::from(4u8)
                        .checked_mul(a)
                        .ok_or(LaunchpadError::MathOverflow)?
                        .checked_mul(k)
                        .ok_or(LaunchpadError::MathOverflow)?,
                )
                .ok_or(LaunchpadError::MathOverflow)?;
            isqrt(disc)
                .checked_sub(rs)
                .ok_or(LaunchpadError::MathOverflow)?
                .checked_div(a.checked_mul(U256::from(2u8)).ok_or(LaunchpadError::MathOverflow)?)
                .ok_or(LaunchpadError::DivisionByZero)?
        };

        let sold: u64 = sold
            .try_into()
            .map_err(|_| error!(LaunchpadError::TypeCastFailed))?;
        Ok(sold.min(self.tokens_for_sale))
    }

    /// Project a purchase of `usdc_in` against the current ledger state. A
    /// deposit that would overshoot the target is clamped to the exact
    /// remainder and receives the entire unsold allocation, so the
    /// completing purchase leaves amount_raised == target and
    /// tokens_sold == tokens_for_sale with no residue.
    pub fn quote_purchase(
        &self,
        amount_raised: u64,
        tokens_sold: u64,
        usdc_in: u64,
    ) -> Result<PurchaseQuote> {
        if usdc_in == 0 || amount_raised >= self.target_amount {
            return Ok(PurchaseQuote::ZERO);
        }

        let remaining = self.target_amount - amount_raised;
        if usdc_in >= remaining {
            return Ok(PurchaseQuote {
                usdc_accepted: remaining,
                tokens_out: self.tokens_for_sale.saturating_sub(tokens_sold),
                completes_funding: true,
            });
        }

        let raised_after = amount_raised
            .checked_add(usdc_in)
            .ok_or(LaunchpadError::MathOverflow)?;
        let sold_after = self.tokens_at(raised_after)?;
        let tokens_out = sold_after
            .checked_sub(tokens_sold)
            .ok_or(LaunchpadError::MathOverflow)?;

        Ok(PurchaseQuote {
            usdc_accepted: usdc_in,
            tokens_out,
            completes_funding: false,
        })
    }

    /// Read-only sell projection: USDC released by putting `tokens_in` back
    /// on the curve from the current sold level.
    pub fn quote_sale(&self, tokens_sold: u64, tokens_in: u64) -> Result<u64> {
        let returned = tokens_in.min(tokens_sold);
        if returned == 0 {
            return Ok(0);
        }
        let high = self.cost_at(tokens_sold)?;
        let low = self.cost_at(tokens_sold - returned)?;
        high.checked_sub(low)
            .ok_or(LaunchpadError::MathOverflow.into())
    }
}

/// Floor integer square root (Newton's method, converging from above).
pub(crate) fn isqrt(n: U256) -> U256 {
    if n <= U256::from(1u8) {
        return n;
    }
    let mut x = U256::from(1u8) << n.bit_len().div_ceil(2);
    loop {
        let y = (x + n / x) >> 1usize;
        if y >= x {
            return x;
        }
        x = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: u64 = 10_000_000_000; // 10,000 USDC
    const FOR_SALE: u64 = 600_000_000_000_000; // 600M tokens at 9 decimals

    fn curve(reserve_ratio: u32) -> BondingCurve {
        BondingCurve::new(FOR_SALE, TARGET, reserve_ratio).unwrap()
    }

    #[test]
    fn cost_endpoints_are_exact() {
        for ratio in [MIN_RATIO, 250_000, 500_000, 900_000, RESERVE_RATIO_PPM] {
            let c = curve(ratio);
            assert_eq!(c.cost_at(0).unwrap(), 0);
            assert_eq!(
                c.cost_at(FOR_SALE).unwrap(),
                TARGET,
                "selling out must raise exactly the target (ratio {ratio})"
            );
        }
    }

    const MIN_RATIO: u32 = RESERVE_RATIO_PPM / 100;

    #[test]
    fn cost_is_monotonic_and_convex() {
        let c = curve(500_000);
        let step = FOR_SALE / 10;
        let mut prev_cost = 0;
        let mut prev_delta = 0;
        for i in 1..=10u64 {
            let cost = c.cost_at(i * step).unwrap();
            assert!(cost > prev_cost, "cost must increase with supply sold");
            let delta = cost - prev_cost;
            assert!(
                delta >= prev_delta,
                "marginal price must not fall along the curve"
            );
            prev_cost = cost;
            prev_delta = delta;
        }
    }

    #[test]
    fn constant_price_at_full_reserve_ratio() {
        let c = curve(RESERVE_RATIO_PPM);
        let step = FOR_SALE / 4;
        let quarter = c.cost_at(step).unwrap();
        for i in 2..=4u64 {
            let cost = c.cost_at(i * step).unwrap();
            let expected = quarter * i;
            // equal quarters of the sale cost equal quarters of the target
            assert!(expected.abs_diff(cost) <= i, "price must be flat at 100%");
        }
    }

    #[test]
    fn inverse_never_overcredits() {
        let c = curve(500_000);
        for raised in [1u64, 17, 999_999, TARGET / 3, TARGET / 2, TARGET - 1] {
            let sold = c.tokens_at(raised).unwrap();
            assert!(
                c.cost_at(sold).unwrap() <= raised,
                "cost(tokens_at(c)) must not exceed c"
            );
        }
        assert_eq!(c.tokens_at(TARGET).unwrap(), FOR_SALE);
    }

    #[test]
    fn inverse_is_monotonic() {
        let c = curve(250_000);
        let mut prev = 0;
        for raised in (0..=TARGET).step_by((TARGET / 20) as usize) {
            let sold = c.tokens_at(raised).unwrap();
            assert!(sold >= prev);
            prev = sold;
        }
    }

    #[test]
    fn identical_inputs_yield_identical_quotes() {
        let c = curve(500_000);
        let a = c.quote_purchase(TARGET / 2, FOR_SALE / 3, 1_000_000_000).unwrap();
        let b = c.quote_purchase(TARGET / 2, FOR_SALE / 3, 1_000_000_000).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn same_deposit_buys_fewer_tokens_later() {
        let c = curve(500_000);
        let deposit = 1_000_000_000; // 1,000 USDC

        let early = c.quote_purchase(0, 0, deposit).unwrap();
        let sold = c.tokens_at(deposit).unwrap();
        let late = c.quote_purchase(deposit, sold, deposit).unwrap();

        assert!(early.tokens_out > 0 && late.tokens_out > 0);
        assert!(
            late.tokens_out < early.tokens_out,
            "price must rise along the curve"
        );
    }

    #[test]
    fn overshooting_purchase_is_clamped_to_remainder() {
        let c = curve(500_000);
        let raised = 6_000_000_000;
        let sold = c.tokens_at(raised).unwrap();

        let q = c.quote_purchase(raised, sold, 5_000_000_000).unwrap();
        assert_eq!(q.usdc_accepted, 4_000_000_000);
        assert_eq!(q.tokens_out, FOR_SALE - sold);
        assert!(q.completes_funding);
    }

    #[test]
    fn exhausted_campaign_quotes_zero() {
        let c = curve(500_000);
        let q = c.quote_purchase(TARGET, FOR_SALE, 1_000_000).unwrap();
        assert_eq!(q, PurchaseQuote::ZERO);
        assert_eq!(c.quote_purchase(0, 0, 0).unwrap(), PurchaseQuote::ZERO);
    }

    /// Replays the two-investor ordering scenario: 6,000 then 4,000 USDC
    /// versus the swapped order. The end state must be identical; only the
    /// identity of the completing purchase moves.
    #[test]
    fn purchase_order_changes_completer_not_end_state() {
        let c = curve(500_000);

        let run = |amounts: [u64; 2]| {
            let mut raised = 0u64;
            let mut sold = 0u64;
            let mut completer = None;
            for (i, usdc) in amounts.into_iter().enumerate() {
                let q = c.quote_purchase(raised, sold, usdc).unwrap();
                raised += q.usdc_accepted;
                sold += q.tokens_out;
                if q.completes_funding {
                    assert!(completer.is_none(), "completion fires exactly once");
                    completer = Some(i);
                }
            }
            (raised, sold, completer)
        };

        let (raised_ab, sold_ab, completer_ab) = run([6_000_000_000, 4_000_000_000]);
        let (raised_ba, sold_ba, completer_ba) = run([4_000_000_000, 6_000_000_000]);

        assert_eq!(raised_ab, TARGET);
        assert_eq!(raised_ba, TARGET);
        assert_eq!(sold_ab, FOR_SALE);
        assert_eq!(sold_ba, FOR_SALE);
        assert_eq!(completer_ab, Some(1));
        assert_eq!(completer_ba, Some(1));
    }

    #[test]
    fn many_small_purchases_sell_out_exactly() {
        let c = curve(300_000);
        let mut raised = 0u64;
        let mut sold = 0u64;
        let chunk = TARGET / 7 + 13; // uneven chunks, last one clamps
        while raised < TARGET {
            let q = c.quote_purchase(raised, sold, chunk).unwrap();
            assert!(q.usdc_accepted > 0);
            raised += q.usdc_accepted;
            sold += q.tokens_out;
        }
        assert_eq!(raised, TARGET);
        assert_eq!(sold, FOR_SALE);
    }

    #[test]
    fn sell_projection_never_exceeds_cost_paid() {
        let c = curve(500_000);
        let sold = c.tokens_at(TARGET / 2).unwrap();
        let paid = c.cost_at(sold).unwrap();

        let all_back = c.quote_sale(sold, sold).unwrap();
        assert!(all_back <= paid);
        assert_eq!(c.quote_sale(sold, 0).unwrap(), 0);

        // selling more than was bought clamps to the sold amount
        assert_eq!(c.quote_sale(sold, sold * 2).unwrap(), all_back);
    }

    #[test]
    fn isqrt_matches_perfect_and_offset_squares() {
        for v in [0u64, 1, 2, 3, 4, 15, 16, 17, 1_000_000, u64::MAX] {
            let n = U256::from(v);
            let r = isqrt(n * n);
            assert_eq!(r, n);
            if v > 0 {
                assert_eq!(isqrt(n * n - U256::from(1u8)), n - U256::from(1u8));
                assert_eq!(isqrt(n * n + U256::from(1u8)), n);
            }
        }
    }
}
