//! Transaction payload types

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LendingAction {
    Supply,
    Withdraw,
    Borrow,
    Repay,
}

impl LendingAction {
    /// Entry function name in the protocol's `lend` module.
    pub fn as_str(&self) -> &'static str {
        match self {
            LendingAction::Supply => "supply",
            LendingAction::Withdraw => "withdraw",
            LendingAction::Borrow => "borrow",
            LendingAction::Repay => "repay",
        }
    }
}

impl fmt::Display for LendingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LendingAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "supply" => Ok(LendingAction::Supply),
            "withdraw" => Ok(LendingAction::Withdraw),
            "borrow" => Ok(LendingAction::Borrow),
            "repay" => Ok(LendingAction::Repay),
            other => Err(format!("unknown lending action '{}'", other)),
        }
    }
}

/// Unsigned entry-function payload, ready for a wallet to sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPayload {
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<Value>,
}
