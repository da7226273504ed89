//! Aptos lending client - demo entry point
//!
//! Prints the pool snapshot, the configured account's positions and sample payloads

use aptos_lend::*;
use anyhow::Result;
use rust_decimal_macros::dec;
use tracing::{info, warn};

const SAMPLE_COIN: &str = "0x1::aptos_coin::AptosCoin";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = CONFIG.clone();

    // Initialize logging
    let _logging_guard = utils::setup_logging(&config)?;

    info!("🏦 Aptos Lending Client v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!("   Node: {}", config.node_url);
    info!("   Protocol: {}", config.protocol_address);
    info!("   Account: {}", if config.account.is_empty() { "<unset>" } else { config.account.as_str() });
    if let Some(coins) = &config.coin_allow_list {
        info!("   Coin allow-list: {}", coins.join(", "));
    }

    let client = NodeClient::from_config(&config)?;

    match pools::fetch_pool_layout(&client, &config).await {
        Ok(layout) => {
            let snapshot = pools::fetch_pool_snapshot(&client, &config, &layout).await;
            utils::print_pool_snapshot(&snapshot);
        }
        Err(e) => warn!("⚠️ Could not read pool layout: {}", e),
    }

    if config.account.is_empty() {
        warn!("LENDING_ACCOUNT not set, skipping positions and payloads");
        return Ok(());
    }

    let assets = pools::get_assets(&client, &config).await;
    utils::print_lending_assets(&assets);

    let amount = dec!(1.5);
    for action in [LendingAction::Supply, LendingAction::Withdraw, LendingAction::Borrow, LendingAction::Repay] {
        info!("\n📝 {} {} of {}", action, amount, SAMPLE_COIN);
        match payload::payload_for(&client, &config, action, SAMPLE_COIN, amount).await {
            Ok(payload) => utils::print_payload(&payload),
            Err(e) => warn!("⚠️ Failed to build {} payload: {}", action, e),
        }
    }

    Ok(())
}
