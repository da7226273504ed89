//! Fetching pool state, curve parameters, coin metadata and positions

pub mod info;
pub mod reserves;
pub mod snapshot;
pub mod positions;

pub use info::*;
pub use reserves::*;
pub use snapshot::*;
pub use positions::*;
