//! One adapter per wallet extension, selected by `WalletKind`

use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;
use crate::types::TransactionPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    Petra,
    Martian,
    Pontem,
    Fewcha,
}

impl WalletKind {
    pub const ALL: [WalletKind; 4] = [WalletKind::Petra, WalletKind::Martian, WalletKind::Pontem, WalletKind::Fewcha];

    pub fn adapter(self) -> Box<dyn WalletAdapter> {
        match self {
            WalletKind::Petra => Box::new(PetraWallet),
            WalletKind::Martian => Box::new(MartianWallet),
            WalletKind::Pontem => Box::new(PontemWallet),
            WalletKind::Fewcha => Box::new(FewchaWallet),
        }
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WalletKind::Petra => "petra",
            WalletKind::Martian => "martian",
            WalletKind::Pontem => "pontem",
            WalletKind::Fewcha => "fewcha",
        };
        f.write_str(name)
    }
}

impl FromStr for WalletKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "petra" | "aptos" => Ok(WalletKind::Petra),
            "martian" => Ok(WalletKind::Martian),
            "pontem" => Ok(WalletKind::Pontem),
            "fewcha" => Ok(WalletKind::Fewcha),
            other => Err(format!("unsupported wallet '{}'", other)),
        }
    }
}

/// Argument of a provider call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallArg {
    Value(Value),
    /// Whatever the preceding call in the sequence resolved to.
    PreviousResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletCall {
    pub method: &'static str,
    pub params: Vec<CallArg>,
}

impl WalletCall {
    fn new(method: &'static str, params: Vec<CallArg>) -> Self {
        Self { method, params }
    }
}

pub trait WalletAdapter: Send + Sync {
    fn kind(&self) -> WalletKind;

    /// Global object the extension injects into the page.
    fn provider(&self) -> &'static str;

    /// Calls, in order, that sign and submit `payload` for `sender`.
    fn submit_calls(&self, payload: &TransactionPayload, sender: &str) -> Vec<WalletCall>;
}

fn payload_arg(payload: &TransactionPayload) -> CallArg {
    CallArg::Value(json!({
        "type": "entry_function_payload",
        "function": payload.function,
        "type_arguments": payload.type_arguments,
        "arguments": payload.arguments,
    }))
}

pub struct PetraWallet;

impl WalletAdapter for PetraWallet {
    fn kind(&self) -> WalletKind {
        WalletKind::Petra
    }

    fn provider(&self) -> &'static str {
        "aptos"
    }

    fn submit_calls(&self, payload: &TransactionPayload, _sender: &str) -> Vec<WalletCall> {
        vec![WalletCall::new("signAndSubmitTransaction", vec![payload_arg(payload)])]
    }
}

pub struct MartianWallet;

impl WalletAdapter for MartianWallet {
    fn kind(&self) -> WalletKind {
        WalletKind::Martian
    }

    fn provider(&self) -> &'static str {
        "martian"
    }

    fn submit_calls(&self, payload: &TransactionPayload, sender: &str) -> Vec<WalletCall> {
        vec![
            WalletCall::new("generateTransaction", vec![CallArg::Value(json!(sender)), payload_arg(payload)]),
            WalletCall::new("signAndSubmitTransaction", vec![CallArg::PreviousResult]),
        ]
    }
}

pub struct PontemWallet;

impl WalletAdapter for PontemWallet {
    fn kind(&self) -> WalletKind {
        WalletKind::Pontem
    }

    fn provider(&self) -> &'static str {
        "pontem"
    }

    fn submit_calls(&self, payload: &TransactionPayload, _sender: &str) -> Vec<WalletCall> {
        vec![WalletCall::new("signAndSubmit", vec![payload_arg(payload)])]
    }
}

pub struct FewchaWallet;

impl WalletAdapter for FewchaWallet {
    fn kind(&self) -> WalletKind {
        WalletKind::Fewcha
    }

    fn provider(&self) -> &'static str {
        "fewcha"
    }

    fn submit_calls(&self, payload: &TransactionPayload, _sender: &str) -> Vec<WalletCall> {
        vec![
            WalletCall::new("generateTransaction", vec![payload_arg(payload)]),
            WalletCall::new("signAndSubmitTransaction", vec![CallArg::PreviousResult]),
        ]
    }
}
