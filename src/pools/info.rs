//! Pool layout and coin metadata retrieval

use tracing::debug;
use crate::{
    config::Config,
    errors::{LendingError, LendingResult},
    network::{NodeClient, string_list, table_handle},
    types::{CoinMeta, coin_account, coin_info_type},
};

/// Coins listed by the pool together with the tables the per-coin data lives in.
///
/// Callers keep this value and refresh it when they want a newer coin list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolLayout {
    pub coins: Vec<String>,
    pub pool_table: String,
    pub params_table: String,
}

pub async fn fetch_coin_meta(client: &NodeClient, coin: &str) -> LendingResult<CoinMeta> {
    debug!("Getting coin info for {}", coin);
    let data = client
        .get_resource(coin_account(coin), &coin_info_type(coin))
        .await
        .map_err(|e| match e {
            LendingError::NotFound { .. } => LendingError::MissingCoinMeta { coin: coin.to_string() },
            other => other,
        })?;
    CoinMeta::from_coin_info(coin, &data)
}

pub async fn fetch_pool_layout(client: &NodeClient, config: &Config) -> LendingResult<PoolLayout> {
    let pools = client
        .get_resource(&config.protocol_address, &config.protocol_type("pool::Pools"))
        .await?;
    let params = client
        .get_resource(&config.protocol_address, &config.protocol_type("interest::InterestParams"))
        .await?;

    let coins = config.filter_coins(string_list(&pools, "coins")?);
    debug!("Pool lists {} coins", coins.len());

    Ok(PoolLayout {
        coins,
        pool_table: table_handle(&pools, "pools")?,
        params_table: table_handle(&params, "params")?,
    })
}

/// Just the (allow-listed) coin list of the pool.
pub async fn fetch_pool_coins(client: &NodeClient, config: &Config) -> LendingResult<Vec<String>> {
    let pools = client
        .get_resource(&config.protocol_address, &config.protocol_type("pool::Pools"))
        .await?;
    Ok(config.filter_coins(string_list(&pools, "coins")?))
}
