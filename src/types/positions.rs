//! User supply and borrow positions

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One position row: coin metadata merged with the position table value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PoolData {
    pub name: String,
    pub decimals: u8,
    pub symbol: String,
    pub amount: String,
    pub index_interest: String,
    pub interest: String,
    pub reward: String,
    pub last_update_time_interest: String,
    pub last_update_time_reward: String,
}

impl PoolData {
    pub fn last_interest_update(&self) -> Option<DateTime<Utc>> {
        parse_unix_seconds(&self.last_update_time_interest)
    }

    pub fn last_reward_update(&self) -> Option<DateTime<Utc>> {
        parse_unix_seconds(&self.last_update_time_reward)
    }
}

fn parse_unix_seconds(raw: &str) -> Option<DateTime<Utc>> {
    raw.parse::<i64>().ok().and_then(|secs| DateTime::from_timestamp(secs, 0))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LendingAssets {
    pub supply: Vec<PoolData>,
    pub borrow: Vec<PoolData>,
}

impl LendingAssets {
    pub fn is_empty(&self) -> bool {
        self.supply.is_empty() && self.borrow.is_empty()
    }
}
