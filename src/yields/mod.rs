//! Pool yield computation: interest-rate curve, annualization and pool-wide aggregation

pub mod calculator;
pub mod snapshot;

pub use calculator::*;
pub use snapshot::*;
