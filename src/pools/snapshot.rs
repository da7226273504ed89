//! Pool snapshot assembly over the node

use futures::future::join_all;
use std::collections::HashMap;
use tracing::{info, warn};
use crate::{
    config::Config,
    errors::LendingResult,
    network::NodeClient,
    pools::{PoolLayout, fetch_coin_meta, fetch_pool_totals, fetch_rate_params},
    types::{CoinFailure, CoinMeta, PoolSnapshot, PoolTotals, RateCurveParams},
    yields::compute_pool_snapshot,
};

type CoinInputs = (PoolTotals, RateCurveParams, CoinMeta);

async fn fetch_coin_inputs(
    client: &NodeClient,
    config: &Config,
    layout: &PoolLayout,
    coin: &str,
) -> LendingResult<CoinInputs> {
    let (totals, params, meta) = tokio::join!(
        fetch_pool_totals(client, config, &layout.pool_table, coin),
        fetch_rate_params(client, config, &layout.params_table, coin),
        fetch_coin_meta(client, coin),
    );
    Ok((totals?, params?, meta?))
}

/// Fetches every coin of `layout` concurrently and values the pool.
///
/// Coins whose data cannot be fetched end up in `failures`, like coins that
/// cannot be valued. This never fails as a whole.
pub async fn fetch_pool_snapshot(client: &NodeClient, config: &Config, layout: &PoolLayout) -> PoolSnapshot {
    let results = join_all(
        layout
            .coins
            .iter()
            .map(|coin| fetch_coin_inputs(client, config, layout, coin)),
    )
    .await;

    let mut states = HashMap::new();
    let mut params = HashMap::new();
    let mut metas = HashMap::new();
    let mut fetched = Vec::new();
    let mut fetch_failures = Vec::new();

    for (coin, result) in layout.coins.iter().zip(results) {
        match result {
            Ok((totals, curve, meta)) => {
                states.insert(coin.clone(), totals);
                params.insert(coin.clone(), curve);
                metas.insert(coin.clone(), meta);
                fetched.push(coin.clone());
            }
            Err(error) => {
                warn!("❌ {} - fetch failed: {}", coin, error);
                fetch_failures.push(CoinFailure { coin: coin.clone(), error });
            }
        }
    }

    let mut snapshot = compute_pool_snapshot(&fetched, &states, &params, &metas);
    snapshot.failures.extend(fetch_failures);
    snapshot
        .failures
        .sort_by_key(|f| layout.coins.iter().position(|c| *c == f.coin));

    info!("✅ Valued {} coins (failed: {})", snapshot.entries.len(), snapshot.failures.len());
    snapshot
}
