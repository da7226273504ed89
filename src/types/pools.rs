//! Pool state and snapshot types

use serde::Serialize;
use serde_json::Value;
use crate::{
    errors::{LendingError, LendingResult},
    types::{CoinMeta, YieldResult},
    utils::parse_u128,
};

/// Raw supply and borrow totals of one coin's pool, in base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolTotals {
    pub supply_total: u128,
    pub borrow_total: u128,
}

impl PoolTotals {
    pub fn new(supply_total: u128, borrow_total: u128) -> Self {
        Self { supply_total, borrow_total }
    }

    /// Decodes a `pool::Pool` table value. Totals may be JSON strings or numbers.
    pub fn from_json(coin: &str, value: &Value) -> LendingResult<Self> {
        let total = |key: &str| {
            parse_u128(&value[key]).ok_or_else(|| LendingError::MalformedPoolState {
                coin: coin.to_string(),
                reason: format!("'{}' is missing or not an unsigned integer", key),
            })
        };

        Ok(Self {
            supply_total: total("total_supply")?,
            borrow_total: total("total_borrow")?,
        })
    }
}

/// One successfully valued coin of a pool snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct CoinYield {
    pub meta: CoinMeta,
    pub totals: PoolTotals,
    pub yields: YieldResult,
}

/// A coin that could not be valued, with the reason.
#[derive(Debug)]
pub struct CoinFailure {
    pub coin: String,
    pub error: LendingError,
}

/// Yields for every coin of a pool, in pool coin-list order.
#[derive(Debug, Default)]
pub struct PoolSnapshot {
    pub entries: Vec<CoinYield>,
    pub failures: Vec<CoinFailure>,
}

impl PoolSnapshot {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn get(&self, coin: &str) -> Option<&CoinYield> {
        self.entries.iter().find(|e| e.meta.address == coin)
    }

    pub fn coins(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.meta.address.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn totals_accept_strings_and_numbers() {
        let totals = PoolTotals::from_json("APT", &json!({ "total_supply": "2000000000", "total_borrow": 800000000 })).unwrap();
        assert_eq!(totals, PoolTotals::new(2_000_000_000, 800_000_000));
    }

    #[test]
    fn non_numeric_totals_are_malformed() {
        let err = PoolTotals::from_json("APT", &json!({ "total_supply": "lots", "total_borrow": "1" })).unwrap_err();
        assert!(matches!(err, LendingError::MalformedPoolState { ref coin, .. } if coin == "APT"));

        let err = PoolTotals::from_json("APT", &json!({ "total_supply": "1" })).unwrap_err();
        assert!(matches!(err, LendingError::MalformedPoolState { .. }));
    }
}
