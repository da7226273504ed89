//! Display and printing utilities

use rust_decimal_macros::dec;
use tracing::{info, warn};
use crate::types::{LendingAssets, PoolData, PoolSnapshot, TransactionPayload};

pub fn print_pool_snapshot(snapshot: &PoolSnapshot) {
    info!("\n📊 Pool Snapshot ({} coins, {} failed)", snapshot.entries.len(), snapshot.failures.len());

    for entry in &snapshot.entries {
        let y = &entry.yields;
        info!("📍 {} ({})", entry.meta.symbol, entry.meta.address);
        info!("   Supply (raw): {}", entry.totals.supply_total);
        info!("   Borrow (raw): {}", entry.totals.borrow_total);
        info!("   Utilization:  {:.2}%", y.utilization * dec!(100));
        info!("   Borrow APR:   {:.4}% ({:?})", y.borrow_apr * dec!(100), y.regime);
        info!("   Borrow APY:   {:.4}%", y.borrow_apy * dec!(100));
        info!("   Supply APY:   {:.4}%", y.supply_apy * dec!(100));
    }

    for failure in &snapshot.failures {
        warn!("❌ {} - {} ({})", failure.coin, failure.error, failure.error.kind());
    }
}

pub fn print_lending_assets(assets: &LendingAssets) {
    info!("\n💰 Positions");
    if assets.is_empty() {
        info!("   No supply or borrow positions");
        return;
    }
    info!("   📈 SUPPLY:");
    for row in &assets.supply {
        print_position_row(row);
    }
    info!("   📉 BORROW:");
    for row in &assets.borrow {
        print_position_row(row);
    }
}

fn print_position_row(row: &PoolData) {
    let updated = row
        .last_interest_update()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    info!(
        "     {} amount={} interest={} reward={} (updated {})",
        row.symbol, row.amount, row.interest, row.reward, updated
    );
}

pub fn print_payload(payload: &TransactionPayload) {
    match serde_json::to_string_pretty(payload) {
        Ok(json) => info!("{}", json),
        Err(e) => warn!("⚠️ Failed to render payload {}: {}", payload.function, e),
    }
}
