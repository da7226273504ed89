//! Decimal scaling and numeric decoding helpers

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde_json::Value;
use crate::errors::{LendingError, LendingResult};

/// Largest decimals count a `Decimal` can represent as a scale.
pub const MAX_DECIMALS: u8 = 28;

pub fn pow10(n: i32) -> Decimal {
    match n {
        0 => dec!(1),
        6 => dec!(1_000_000),
        8 => dec!(100_000_000),
        _ => {
            let mut result = dec!(1);
            if n > 0 {
                for _ in 0..n {
                    result *= dec!(10);
                }
            } else {
                for _ in 0..(-n) {
                    result /= dec!(10);
                }
            }
            result
        }
    }
}

/// Converts raw base units to a human-scale amount by an exact decimal shift.
pub fn from_base_units(raw: u128, decimals: u8) -> LendingResult<Decimal> {
    if decimals > MAX_DECIMALS {
        return Err(LendingError::overflow(format!("scale of {} decimals", decimals)));
    }
    let mantissa = i128::try_from(raw)
        .map_err(|_| LendingError::overflow(format!("raw amount {}", raw)))?;
    Decimal::try_from_i128_with_scale(mantissa, decimals as u32)
        .map_err(|_| LendingError::overflow(format!("raw amount {}", raw)))
}

/// Converts a human-scale amount to base units, truncating toward zero.
pub fn to_base_units(amount: Decimal, decimals: u8) -> LendingResult<u64> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(LendingError::InvalidAmount {
            amount,
            reason: "amount must not be negative".to_string(),
        });
    }
    if decimals > MAX_DECIMALS {
        return Err(LendingError::InvalidAmount {
            amount,
            reason: format!("coin has unsupported precision of {} decimals", decimals),
        });
    }

    let scaled = amount
        .checked_mul(pow10(decimals as i32))
        .ok_or_else(|| LendingError::InvalidAmount {
            amount,
            reason: "amount too large for coin precision".to_string(),
        })?;

    scaled.trunc().to_u64().ok_or_else(|| LendingError::InvalidAmount {
        amount,
        reason: "amount exceeds u64 base units".to_string(),
    })
}

/// Reads an unsigned integer that the node may encode as a string or a number.
pub fn parse_u128(value: &Value) -> Option<u128> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_u64().map(u128::from),
        _ => None,
    }
}
