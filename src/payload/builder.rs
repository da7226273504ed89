//! Payload construction for supply, withdraw, borrow and repay

use rust_decimal::Decimal;
use serde_json::{Value, json};
use tracing::debug;
use crate::{
    config::Config,
    errors::LendingResult,
    network::NodeClient,
    pools::fetch_coin_meta,
    types::{LendingAction, TransactionPayload},
    utils::to_base_units,
};

/// Builds the `lend::<action>` payload for `amount` of `coin`.
///
/// The amount is truncated to whole base units, never rounded up.
pub fn build_payload(
    config: &Config,
    action: LendingAction,
    coin: &str,
    decimals: u8,
    amount: Decimal,
) -> LendingResult<TransactionPayload> {
    let raw = to_base_units(amount, decimals)?;
    // u64 arguments travel as strings in Aptos JSON
    let raw_arg = Value::String(raw.to_string());

    let arguments = match action {
        LendingAction::Supply => vec![raw_arg, json!(true)],
        LendingAction::Withdraw => vec![raw_arg, json!(config.account)],
        LendingAction::Borrow | LendingAction::Repay => vec![raw_arg],
    };

    Ok(TransactionPayload {
        function: config.protocol_type(&format!("lend::{}", action)),
        type_arguments: vec![coin.to_string()],
        arguments,
    })
}

/// Looks up the coin's decimals on chain, then builds the payload.
pub async fn payload_for(
    client: &NodeClient,
    config: &Config,
    action: LendingAction,
    coin: &str,
    amount: Decimal,
) -> LendingResult<TransactionPayload> {
    let meta = fetch_coin_meta(client, coin).await?;
    debug!("{} {} {} ({} decimals)", action, amount, meta.symbol, meta.decimals);
    build_payload(config, action, coin, meta.decimals, amount)
}

pub async fn supply(client: &NodeClient, config: &Config, coin: &str, amount: Decimal) -> LendingResult<TransactionPayload> {
    payload_for(client, config, LendingAction::Supply, coin, amount).await
}

pub async fn withdraw(client: &NodeClient, config: &Config, coin: &str, amount: Decimal) -> LendingResult<TransactionPayload> {
    payload_for(client, config, LendingAction::Withdraw, coin, amount).await
}

pub async fn borrow(client: &NodeClient, config: &Config, coin: &str, amount: Decimal) -> LendingResult<TransactionPayload> {
    payload_for(client, config, LendingAction::Borrow, coin, amount).await
}

pub async fn repay(client: &NodeClient, config: &Config, coin: &str, amount: Decimal) -> LendingResult<TransactionPayload> {
    payload_for(client, config, LendingAction::Repay, coin, amount).await
}
