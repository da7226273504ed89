//! Aptos lending pool client
//!
//! Reads pool state and curve parameters from an Aptos node, values each coin
//! of the pool (utilization, borrow APR/APY, supply APY), reads a user's
//! positions and builds unsigned supply/withdraw/borrow/repay payloads.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod pools;
pub mod yields;
pub mod payload;
pub mod wallet;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{LendingError, LendingResult};
pub use network::NodeClient;
pub use types::*;
pub use yields::{compute_pool_snapshot, compute_yield};
