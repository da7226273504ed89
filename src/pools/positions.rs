//! User supply and borrow positions

use futures::future::try_join_all;
use serde_json::Value;
use tracing::{debug, warn};
use crate::{
    config::Config,
    errors::LendingResult,
    network::{NodeClient, string_list, table_handle},
    pools::{STRING_KEY_TYPE, fetch_coin_meta},
    types::{LendingAssets, PoolData},
};

async fn fetch_position_row(
    client: &NodeClient,
    handle: &str,
    value_type: &str,
    coin: &str,
) -> LendingResult<PoolData> {
    let (meta, position) = tokio::try_join!(
        fetch_coin_meta(client, coin),
        client.get_table_item(handle, STRING_KEY_TYPE, value_type, coin),
    )?;

    Ok(PoolData {
        name: meta.name,
        decimals: meta.decimals,
        symbol: meta.symbol,
        amount: field_string(&position, "amount"),
        index_interest: field_string(&position, "index_interest"),
        interest: field_string(&position, "interest"),
        reward: field_string(&position, "reward"),
        last_update_time_interest: field_string(&position, "last_update_time_interest"),
        last_update_time_reward: field_string(&position, "last_update_time_reward"),
    })
}

/// Position fields arrive as strings (u64/u128) or plain numbers; absent fields are empty.
fn field_string(value: &Value, key: &str) -> String {
    match &value[key] {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

async fn fetch_side(
    client: &NodeClient,
    positions: &Value,
    coins_field: &str,
    table_field: &str,
    value_type: &str,
) -> LendingResult<Vec<PoolData>> {
    let coins = string_list(positions, coins_field)?;
    let handle = table_handle(positions, table_field)?;
    try_join_all(
        coins
            .iter()
            .map(|coin| fetch_position_row(client, &handle, value_type, coin)),
    )
    .await
}

pub async fn try_get_assets(client: &NodeClient, config: &Config, account: &str) -> LendingResult<LendingAssets> {
    debug!("Getting positions for {}", account);
    let positions = client
        .get_resource(account, &config.protocol_type("pool::Positions"))
        .await?;

    let supply_type = config.protocol_type("pool::SupplyPosition");
    let borrow_type = config.protocol_type("pool::BorrowPosition");
    let (supply, borrow) = tokio::try_join!(
        fetch_side(client, &positions, "supply_coins", "supply_position", &supply_type),
        fetch_side(client, &positions, "borrow_coins", "borrow_position", &borrow_type),
    )?;

    Ok(LendingAssets { supply, borrow })
}

/// Positions of `config.account`; any failure yields empty lists.
pub async fn get_assets(client: &NodeClient, config: &Config) -> LendingAssets {
    match try_get_assets(client, config, &config.account).await {
        Ok(assets) => assets,
        Err(e) => {
            warn!("⚠️ Failed to load positions for {}: {}", config.account, e);
            LendingAssets::default()
        }
    }
}
