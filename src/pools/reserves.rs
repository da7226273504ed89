//! Per-coin pool totals and interest-rate parameters

use crate::{
    config::Config,
    errors::{LendingError, LendingResult},
    network::NodeClient,
    types::{PoolTotals, RateCurveParams},
};

pub const STRING_KEY_TYPE: &str = "0x1::string::String";

pub async fn fetch_pool_totals(
    client: &NodeClient,
    config: &Config,
    pool_table: &str,
    coin: &str,
) -> LendingResult<PoolTotals> {
    let value = client
        .get_table_item(pool_table, STRING_KEY_TYPE, &config.protocol_type("pool::Pool"), coin)
        .await
        .map_err(|e| match e {
            LendingError::NotFound { .. } => LendingError::MalformedPoolState {
                coin: coin.to_string(),
                reason: "no pool entry".to_string(),
            },
            other => other,
        })?;
    PoolTotals::from_json(coin, &value)
}

pub async fn fetch_rate_params(
    client: &NodeClient,
    config: &Config,
    params_table: &str,
    coin: &str,
) -> LendingResult<RateCurveParams> {
    let value = client
        .get_table_item(params_table, STRING_KEY_TYPE, &config.protocol_type("interest::RateParams"), coin)
        .await
        .map_err(|e| match e {
            LendingError::NotFound { .. } => LendingError::MissingCurveParams { coin: coin.to_string() },
            other => other,
        })?;
    RateCurveParams::from_json(coin, &value)
}
