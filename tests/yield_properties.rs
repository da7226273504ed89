//! Property tests for the rate curve and base-unit scaling

use aptos_lend::{
    PoolTotals, RateCurveParams, RateRegime, compute_yield,
    utils::{from_base_units, to_base_units},
    yields::{borrow_apr, supply_apy, utilization},
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn curve() -> impl Strategy<Value = RateCurveParams> {
    (0u64..100_000, 0u64..100_000, 0u64..50, 0u64..10_000, 0u64..1_000_000).prop_map(|(k, b, a, c, d)| {
        RateCurveParams { reserves: 0, k, b, a, c, d }
    })
}

proptest! {
    /// Reserves equal to supply leave nothing lendable; the divisor floors to one.
    #[test]
    fn prop_zero_remaining_supply_uses_unit_divisor(
        whole_units in 1u64..1_000_000,
        borrow_raw in 0u64..u64::MAX,
        decimals in 0u8..=12,
    ) {
        let supply = Decimal::from(whole_units);
        let borrow = from_base_units(borrow_raw as u128, decimals).unwrap();

        prop_assert_eq!(utilization(supply, borrow, supply).unwrap(), borrow);
    }

    /// Same floor, through the full computation with reserves stored in thousandths.
    #[test]
    fn prop_reserve_floor_in_compute_yield(whole_units in 1u64..1_000_000, borrow_units in 0u64..=8, decimals in 0u8..=12) {
        let unit = 10u128.pow(decimals as u32);
        let totals = PoolTotals::new(whole_units as u128 * unit, borrow_units as u128 * unit / 10);
        let params = RateCurveParams { reserves: whole_units * 1000, k: 500, b: 0, a: 0, c: 0, d: 0 };

        let result = compute_yield(&totals, &params, decimals).unwrap();
        prop_assert_eq!(result.utilization, from_base_units(totals.borrow_total, decimals).unwrap());
    }

    /// Utilization at or below the kink always uses the linear segment.
    #[test]
    fn prop_regime_follows_kink(bps in 0u32..=20_000, params in curve()) {
        let utilization = Decimal::from(bps) / dec!(10_000);
        let (regime, apr) = borrow_apr(utilization, &params).unwrap();

        if utilization <= dec!(0.8) {
            prop_assert_eq!(regime, RateRegime::Linear);
            prop_assert_eq!(apr, params.slope() * utilization + params.base_rate());
        } else {
            prop_assert_eq!(regime, RateRegime::Kinked);
            let excess = utilization - params.kink_offset();
            prop_assert_eq!(apr, params.quadratic_coefficient() * excess * excess + params.kink_premium());
        }
    }

    /// Supply yield never exceeds borrow yield while utilization is a fraction.
    #[test]
    fn prop_supply_apy_bounded_by_borrow_apy(
        supply in 1u64..u64::MAX,
        borrow_share in 0u32..=10_000,
        params in curve(),
    ) {
        let borrow = (supply as u128 * borrow_share as u128) / 10_000;
        let result = compute_yield(&PoolTotals::new(supply as u128, borrow), &params, 6).unwrap();

        prop_assert!(result.utilization <= Decimal::ONE);
        prop_assert!(result.supply_apy <= result.borrow_apy);
        prop_assert_eq!(result.supply_apy, supply_apy(result.borrow_apy, result.utilization).unwrap());
    }

    /// Converting to base units never rounds up.
    #[test]
    fn prop_base_units_truncate(mantissa in 0u64..100_000_000_000, scale in 0u32..=12, decimals in 0u8..=8) {
        let amount = Decimal::new(mantissa as i64, scale);
        let raw = to_base_units(amount, decimals).unwrap();
        let back = from_base_units(raw as u128, decimals).unwrap();

        prop_assert!(back <= amount);
        prop_assert!(amount - back < from_base_units(1, decimals).unwrap());
    }
}

#[test]
fn kink_is_distinguishable_by_parameters() {
    // slope 0.1 on the linear side, coefficient 50 on the quadratic side
    let params = RateCurveParams { reserves: 0, k: 1000, b: 0, a: 50, c: 8000, d: 0 };

    let below = compute_yield(&PoolTotals::new(1_000_000, 799_000), &params, 3).unwrap();
    let at = compute_yield(&PoolTotals::new(1_000_000, 800_000), &params, 3).unwrap();
    let above = compute_yield(&PoolTotals::new(1_000_000, 801_000), &params, 3).unwrap();

    assert_eq!(below.borrow_apr, dec!(0.0799));
    assert_eq!(at.regime, RateRegime::Linear);
    assert_eq!(at.borrow_apr, dec!(0.08));
    assert_eq!(above.regime, RateRegime::Kinked);
    // 50 * 0.001^2
    assert_eq!(above.borrow_apr, dec!(0.00005));
}
