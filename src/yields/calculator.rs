//! Kinked interest-rate curve and APY calculation
//!
//! All quantities stay in `Decimal` until the 365-period compounding step,
//! which is done in `f64` and converted back.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use tracing::debug;
use crate::{
    errors::{LendingError, LendingResult},
    types::{KINK_UTILIZATION, PoolTotals, RateCurveParams, RateRegime, YieldResult},
    utils::from_base_units,
};

/// Compounding periods per year.
pub const PERIODS_PER_YEAR: i32 = 365;

pub fn compute_yield(
    totals: &PoolTotals,
    params: &RateCurveParams,
    decimals: u8,
) -> LendingResult<YieldResult> {
    let supply = from_base_units(totals.supply_total, decimals)?;
    let borrow = from_base_units(totals.borrow_total, decimals)?;

    let utilization = utilization(supply, borrow, params.reserve_amount())?;
    let (regime, borrow_apr) = borrow_apr(utilization, params)?;
    let borrow_apy = annualize(borrow_apr)?;
    let supply_apy = supply_apy(borrow_apy, utilization)?;

    debug!(
        "supply={} borrow={} utilization={} regime={:?} apr={} apy={}",
        supply, borrow, utilization, regime, borrow_apr, borrow_apy
    );

    Ok(YieldResult {
        utilization,
        regime,
        borrow_apr,
        borrow_apy,
        supply_apy,
    })
}

/// Borrowed fraction of the supply left after reserves. A zero remainder divides by one.
pub fn utilization(supply: Decimal, borrow: Decimal, reserve: Decimal) -> LendingResult<Decimal> {
    let remaining = supply
        .checked_sub(reserve)
        .ok_or_else(|| LendingError::overflow("remaining supply"))?;
    let divisor = if remaining.is_zero() { Decimal::ONE } else { remaining };

    borrow
        .checked_div(divisor)
        .ok_or_else(|| LendingError::overflow("utilization"))
}

/// Linear up to and including the kink, quadratic above it.
pub fn borrow_apr(utilization: Decimal, params: &RateCurveParams) -> LendingResult<(RateRegime, Decimal)> {
    if utilization <= KINK_UTILIZATION {
        let apr = params
            .slope()
            .checked_mul(utilization)
            .and_then(|v| v.checked_add(params.base_rate()))
            .ok_or_else(|| LendingError::overflow("linear borrow APR"))?;
        return Ok((RateRegime::Linear, apr));
    }

    let apr = utilization
        .checked_sub(params.kink_offset())
        .and_then(|excess| excess.checked_mul(excess))
        .and_then(|sq| sq.checked_mul(params.quadratic_coefficient()))
        .and_then(|v| v.checked_add(params.kink_premium()))
        .ok_or_else(|| LendingError::overflow("kinked borrow APR"))?;
    Ok((RateRegime::Kinked, apr))
}

/// `(apr / 365 + 1)^365 - 1`
pub fn annualize(apr: Decimal) -> LendingResult<Decimal> {
    let daily_factor = apr
        .checked_div(dec!(365))
        .and_then(|v| v.checked_add(Decimal::ONE))
        .and_then(|v| v.to_f64())
        .ok_or_else(|| LendingError::overflow("daily rate factor"))?;

    let apy = daily_factor.powi(PERIODS_PER_YEAR) - 1.0;
    if !apy.is_finite() {
        return Err(LendingError::overflow(format!("APY for APR {}", apr)));
    }

    Decimal::from_f64(apy).ok_or_else(|| LendingError::overflow(format!("APY for APR {}", apr)))
}

/// Suppliers earn the borrow yield on the utilized share of the pool.
pub fn supply_apy(borrow_apy: Decimal, utilization: Decimal) -> LendingResult<Decimal> {
    borrow_apy
        .checked_mul(utilization)
        .ok_or_else(|| LendingError::overflow("supply APY"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_params(k: u64, b: u64) -> RateCurveParams {
        RateCurveParams { reserves: 0, k, b, a: 0, c: 0, d: 0 }
    }

    fn compounded(apr: f64) -> f64 {
        (1.0 + apr / 365.0).powi(365) - 1.0
    }

    fn close(actual: Decimal, expected: f64) -> bool {
        (actual.to_f64().unwrap() - expected).abs() < 1e-6
    }

    #[test]
    fn reference_scenario_low_utilization() {
        let totals = PoolTotals::new(2_000_000_000, 800_000_000);
        let result = compute_yield(&totals, &linear_params(500, 0), 6).unwrap();

        assert_eq!(result.utilization, dec!(0.4));
        assert_eq!(result.regime, RateRegime::Linear);
        assert_eq!(result.borrow_apr, dec!(0.02));
        assert!(close(result.borrow_apy, compounded(0.02)));
        assert!(close(result.borrow_apy, 0.0202008));
        assert!(close(result.supply_apy, compounded(0.02) * 0.4));
        assert!(close(result.supply_apy, 0.0080803));
    }

    #[test]
    fn zero_remaining_supply_divides_by_one() {
        // 1.0 supplied, 1.0 held in reserves, 0.5 borrowed
        let params = RateCurveParams { reserves: 1000, ..linear_params(500, 0) };
        let totals = PoolTotals::new(1_000_000, 500_000);
        let result = compute_yield(&totals, &params, 6).unwrap();
        assert_eq!(result.utilization, dec!(0.5));
    }

    #[test]
    fn empty_pool_has_zero_utilization() {
        let result = compute_yield(&PoolTotals::new(0, 0), &linear_params(500, 1000), 8).unwrap();
        assert_eq!(result.utilization, Decimal::ZERO);
        assert_eq!(result.borrow_apr, dec!(0.001));
        assert_eq!(result.supply_apy, Decimal::ZERO);
    }

    #[test]
    fn reserves_shrink_the_divisor() {
        // 100 supplied, 20 reserved, 40 borrowed -> 40 / 80
        let params = RateCurveParams { reserves: 20_000, ..linear_params(500, 0) };
        let result = compute_yield(&PoolTotals::new(100, 40), &params, 0).unwrap();
        assert_eq!(result.utilization, dec!(0.5));
    }

    #[test]
    fn kink_boundary_uses_linear_segment() {
        let params = RateCurveParams { reserves: 0, k: 1000, b: 10_000, a: 50, c: 8000, d: 500_000 };
        let (regime, apr) = borrow_apr(dec!(0.8), &params).unwrap();
        assert_eq!(regime, RateRegime::Linear);
        // 0.1 * 0.8 + 0.01
        assert_eq!(apr, dec!(0.09));
    }

    #[test]
    fn regime_switches_across_the_kink() {
        let params = RateCurveParams { reserves: 0, k: 1000, b: 10_000, a: 50, c: 8000, d: 500_000 };

        let (below, below_apr) = borrow_apr(dec!(0.79), &params).unwrap();
        assert_eq!(below, RateRegime::Linear);
        assert_eq!(below_apr, dec!(0.089));

        let (above, above_apr) = borrow_apr(dec!(0.81), &params).unwrap();
        assert_eq!(above, RateRegime::Kinked);
        // 50 * 0.01^2 + 0.5
        assert_eq!(above_apr, dec!(0.505));
    }

    #[test]
    fn high_utilization_flows_through_compute_yield() {
        let params = RateCurveParams { reserves: 0, k: 1000, b: 0, a: 2, c: 8000, d: 100_000 };
        let result = compute_yield(&PoolTotals::new(1000, 900), &params, 0).unwrap();
        assert_eq!(result.utilization, dec!(0.9));
        assert_eq!(result.regime, RateRegime::Kinked);
        // 2 * 0.1^2 + 0.1
        assert_eq!(result.borrow_apr, dec!(0.12));
        assert!(close(result.borrow_apy, compounded(0.12)));
        assert!(close(result.supply_apy, compounded(0.12) * 0.9));
    }

    #[test]
    fn supply_apy_scales_by_utilization() {
        assert_eq!(supply_apy(dec!(0.10), dec!(0.5)).unwrap(), dec!(0.05));
    }

    #[test]
    fn annualize_zero_rate() {
        assert_eq!(annualize(Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn runaway_rate_is_reported() {
        // 1e9 borrowed against 1 supplied: the quadratic segment explodes
        let params = RateCurveParams { reserves: 0, k: 0, b: 0, a: 1_000_000, c: 0, d: 0 };
        let err = compute_yield(&PoolTotals::new(1, 1_000_000_000), &params, 0).unwrap_err();
        assert!(matches!(err, LendingError::ArithmeticOverflow { .. }));
    }
}
