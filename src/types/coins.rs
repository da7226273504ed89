//! Coin metadata

use serde::Serialize;
use serde_json::Value;
use crate::errors::{LendingError, LendingResult};

/// Resource type holding metadata for `coin`.
pub fn coin_info_type(coin: &str) -> String {
    format!("0x1::coin::CoinInfo<{}>", coin)
}

/// Account that publishes the coin's module, i.e. the part before the first `::`.
pub fn coin_account(coin: &str) -> &str {
    coin.split("::").next().unwrap_or(coin)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinMeta {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl CoinMeta {
    /// Builds metadata from the `data` object of a `CoinInfo` resource.
    pub fn from_coin_info(address: &str, data: &Value) -> LendingResult<Self> {
        let field = |key: &str| {
            data[key].as_str().map(str::to_string).ok_or_else(|| {
                LendingError::parsing(
                    format!("CoinInfo<{}>", address),
                    anyhow::anyhow!("missing '{}' field", key),
                )
            })
        };

        let decimals = data["decimals"]
            .as_u64()
            .and_then(|d| u8::try_from(d).ok())
            .ok_or_else(|| {
                LendingError::parsing(
                    format!("CoinInfo<{}>", address),
                    anyhow::anyhow!("missing or invalid 'decimals' field"),
                )
            })?;

        Ok(CoinMeta {
            address: address.to_string(),
            name: field("name")?,
            symbol: field("symbol")?,
            decimals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coin_account_is_module_owner() {
        assert_eq!(coin_account("0x1::aptos_coin::AptosCoin"), "0x1");
        assert_eq!(coin_info_type("0x1::aptos_coin::AptosCoin"), "0x1::coin::CoinInfo<0x1::aptos_coin::AptosCoin>");
    }

    #[test]
    fn parses_coin_info() {
        let data = json!({ "name": "Aptos Coin", "symbol": "APT", "decimals": 8, "supply": { "vec": [] } });
        let meta = CoinMeta::from_coin_info("0x1::aptos_coin::AptosCoin", &data).unwrap();
        assert_eq!(meta.symbol, "APT");
        assert_eq!(meta.decimals, 8);
    }

    #[test]
    fn rejects_missing_decimals() {
        let data = json!({ "name": "Aptos Coin", "symbol": "APT" });
        let err = CoinMeta::from_coin_info("0x1::aptos_coin::AptosCoin", &data).unwrap_err();
        assert!(matches!(err, LendingError::DataParsing { .. }));
    }
}
