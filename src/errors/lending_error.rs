//! Custom error types for the lending client

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LendingError {
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Resource not found: {resource}")]
    NotFound {
        resource: String,
    },

    #[error("Data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("No rate curve parameters for {coin}")]
    MissingCurveParams {
        coin: String,
    },

    #[error("Malformed pool state for {coin}: {reason}")]
    MalformedPoolState {
        coin: String,
        reason: String,
    },

    #[error("No coin metadata for {coin}")]
    MissingCoinMeta {
        coin: String,
    },

    #[error("Invalid amount {amount}: {reason}")]
    InvalidAmount {
        amount: Decimal,
        reason: String,
    },

    #[error("Arithmetic overflow while computing {context}")]
    ArithmeticOverflow {
        context: String,
    },
}

impl LendingError {
    pub fn parsing(context: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        LendingError::DataParsing {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn overflow(context: impl Into<String>) -> Self {
        LendingError::ArithmeticOverflow {
            context: context.into(),
        }
    }

    /// Short machine-friendly tag, used in failure summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            LendingError::Network { .. } => "network",
            LendingError::NotFound { .. } => "not_found",
            LendingError::DataParsing { .. } => "parse_error",
            LendingError::MissingCurveParams { .. } => "missing_curve_params",
            LendingError::MalformedPoolState { .. } => "malformed_pool_state",
            LendingError::MissingCoinMeta { .. } => "missing_coin_meta",
            LendingError::InvalidAmount { .. } => "invalid_amount",
            LendingError::ArithmeticOverflow { .. } => "overflow",
        }
    }
}

pub type LendingResult<T> = Result<T, LendingError>;
