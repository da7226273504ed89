//! Pool-wide aggregation of per-coin yields

use std::collections::HashMap;
use tracing::{debug, warn};
use crate::{
    errors::{LendingError, LendingResult},
    types::{CoinFailure, CoinMeta, CoinYield, PoolSnapshot, PoolTotals, RateCurveParams},
    yields::compute_yield,
};

/// Values every coin of the pool in coin-list order.
///
/// A coin that cannot be valued is recorded in `failures` and skipped; the
/// remaining coins are still computed. This never fails as a whole.
pub fn compute_pool_snapshot(
    coins: &[String],
    states: &HashMap<String, PoolTotals>,
    params: &HashMap<String, RateCurveParams>,
    metas: &HashMap<String, CoinMeta>,
) -> PoolSnapshot {
    let mut snapshot = PoolSnapshot::default();

    for coin in coins {
        match value_coin(coin, states, params, metas) {
            Ok(entry) => {
                debug!("Valued {}: utilization {}", coin, entry.yields.utilization);
                snapshot.entries.push(entry);
            }
            Err(error) => {
                warn!("❌ {} - skipped: {}", coin, error);
                snapshot.failures.push(CoinFailure { coin: coin.clone(), error });
            }
        }
    }

    snapshot
}

fn value_coin(
    coin: &str,
    states: &HashMap<String, PoolTotals>,
    params: &HashMap<String, RateCurveParams>,
    metas: &HashMap<String, CoinMeta>,
) -> LendingResult<CoinYield> {
    let totals = states.get(coin).ok_or_else(|| LendingError::MalformedPoolState {
        coin: coin.to_string(),
        reason: "no pool entry".to_string(),
    })?;
    let curve = params.get(coin).ok_or_else(|| LendingError::MissingCurveParams {
        coin: coin.to_string(),
    })?;
    let meta = metas.get(coin).ok_or_else(|| LendingError::MissingCoinMeta {
        coin: coin.to_string(),
    })?;

    let yields = compute_yield(totals, curve, meta.decimals)?;

    Ok(CoinYield {
        meta: meta.clone(),
        totals: *totals,
        yields,
    })
}
