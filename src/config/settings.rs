//! Client configuration and environment variable handling

use std::env;

// Deployment defaults
pub const DEFAULT_NODE_URL: &str = "https://aptos-mainnet.pontem.network";
pub const DEFAULT_PROTOCOL_ADDRESS: &str =
    "0xb7d960e5f0a58cc0817774e611d7e3ae54c6843816521f02d7ced583d6434896";
pub const DEFAULT_LOG_DIR: &str = "output/logs";

// Request timeout bounds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct Config {
    /// Aptos node REST endpoint, without the `/v1` suffix
    pub node_url: String,
    pub protocol_address: String,
    /// Wallet address used for positions and withdraw payloads
    pub account: String,
    /// When set, only these coins are included in pool snapshots
    pub coin_allow_list: Option<Vec<String>>,
    pub request_timeout_secs: u64,
    pub log_dir: String,
    /// Write the log file as JSON lines instead of compact text
    pub log_json: bool,
}

impl Config {
    /// Mainnet deployment for the given account.
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            node_url: DEFAULT_NODE_URL.to_string(),
            protocol_address: DEFAULT_PROTOCOL_ADDRESS.to_string(),
            account: account.into(),
            coin_allow_list: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_dir: DEFAULT_LOG_DIR.to_string(),
            log_json: false,
        }
    }

    pub fn with_node_url(mut self, node_url: impl Into<String>) -> Self {
        self.node_url = node_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_protocol_address(mut self, protocol_address: impl Into<String>) -> Self {
        self.protocol_address = protocol_address.into();
        self
    }

    pub fn with_coin_allow_list(mut self, coins: Vec<String>) -> Self {
        self.coin_allow_list = Some(coins);
        self
    }

    pub fn load() -> Self {
        Self {
            node_url: env::var("APTOS_NODE_URL")
                .unwrap_or_else(|_| DEFAULT_NODE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            protocol_address: env::var("LENDING_PROTOCOL_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_PROTOCOL_ADDRESS.to_string()),
            account: env::var("LENDING_ACCOUNT").unwrap_or_default(),
            coin_allow_list: env::var("LENDING_COINS")
                .ok()
                .and_then(|s| parse_coin_list(&s)),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
                .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string()),
            log_json: env::var("LOG_JSON")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
        }
    }

    /// Fully qualified Move type under the protocol address, e.g. `pool::Positions`.
    pub fn protocol_type(&self, path: &str) -> String {
        format!("{}::{}", self.protocol_address, path)
    }

    /// Applies the allow-list to an on-chain coin list, keeping on-chain order.
    pub fn filter_coins(&self, coins: Vec<String>) -> Vec<String> {
        match &self.coin_allow_list {
            Some(allowed) => coins.into_iter().filter(|c| allowed.contains(c)).collect(),
            None => coins,
        }
    }
}

fn parse_coin_list(raw: &str) -> Option<Vec<String>> {
    let coins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if coins.is_empty() { None } else { Some(coins) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_list_parsing_skips_blanks() {
        let coins = parse_coin_list(" 0x1::aptos_coin::AptosCoin, ,0xabc::usdc::USDC ").unwrap();
        assert_eq!(coins, vec!["0x1::aptos_coin::AptosCoin", "0xabc::usdc::USDC"]);
        assert!(parse_coin_list(" , ").is_none());
    }

    #[test]
    fn allow_list_keeps_chain_order() {
        let config = Config::new("0xa11ce").with_coin_allow_list(vec![
            "0x3::c::C".to_string(),
            "0x1::a::A".to_string(),
        ]);
        let filtered = config.filter_coins(vec![
            "0x1::a::A".to_string(),
            "0x2::b::B".to_string(),
            "0x3::c::C".to_string(),
        ]);
        assert_eq!(filtered, vec!["0x1::a::A", "0x3::c::C"]);
    }

    #[test]
    fn node_url_trailing_slash_is_trimmed() {
        let config = Config::new("0xa11ce").with_node_url("http://127.0.0.1:8080/");
        assert_eq!(config.node_url, "http://127.0.0.1:8080");
        assert_eq!(config.protocol_type("pool::Pools"), format!("{}::pool::Pools", DEFAULT_PROTOCOL_ADDRESS));
    }
}
