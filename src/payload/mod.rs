//! Unsigned transaction payloads for lending actions

pub mod builder;

pub use builder::*;
