//! Core data types and structures

pub mod coins;
pub mod pools;
pub mod rates;
pub mod positions;
pub mod payload;

pub use coins::*;
pub use pools::*;
pub use rates::*;
pub use positions::*;
pub use payload::*;
