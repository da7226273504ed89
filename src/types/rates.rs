//! Interest-rate curve parameters and computed yields

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::Serialize;
use serde_json::Value;
use crate::{
    errors::{LendingError, LendingResult},
    utils::parse_u128,
};

/// Utilization at which the curve switches from linear to quadratic.
pub const KINK_UTILIZATION: Decimal = dec!(0.8);

/// Per-coin curve parameters exactly as stored on chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateCurveParams {
    pub reserves: u64,
    pub k: u64,
    pub b: u64,
    pub a: u64,
    pub c: u64,
    pub d: u64,
}

impl RateCurveParams {
    /// Decodes an `interest::RateParams` table value.
    pub fn from_json(coin: &str, value: &Value) -> LendingResult<Self> {
        let field = |key: &str| {
            parse_u128(&value[key])
                .and_then(|v| u64::try_from(v).ok())
                .ok_or_else(|| {
                    LendingError::parsing(
                        format!("rate params for {}", coin),
                        anyhow::anyhow!("'{}' is missing or not a u64", key),
                    )
                })
        };

        Ok(Self {
            reserves: field("reserves")?,
            k: field("k")?,
            b: field("b")?,
            a: field("a")?,
            c: field("c")?,
            d: field("d")?,
        })
    }

    /// Reserve amount excluded from lendable supply (thousandths).
    pub fn reserve_amount(&self) -> Decimal {
        Decimal::from(self.reserves) / dec!(1000)
    }

    /// Slope of the linear segment. `k` is hundredths and the curve applies it as a percentage.
    pub fn slope(&self) -> Decimal {
        Decimal::from(self.k) / dec!(100) / dec!(100)
    }

    pub fn base_rate(&self) -> Decimal {
        Decimal::from(self.b) / dec!(1_000_000)
    }

    pub fn quadratic_coefficient(&self) -> Decimal {
        Decimal::from(self.a)
    }

    pub fn kink_offset(&self) -> Decimal {
        Decimal::from(self.c) / dec!(10_000)
    }

    pub fn kink_premium(&self) -> Decimal {
        Decimal::from(self.d) / dec!(1_000_000)
    }
}

/// Which segment of the curve produced the borrow APR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RateRegime {
    Linear,
    Kinked,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldResult {
    pub utilization: Decimal,
    pub regime: RateRegime,
    pub borrow_apr: Decimal,
    pub borrow_apy: Decimal,
    pub supply_apy: Decimal,
}
