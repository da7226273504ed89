//! Aptos node REST access

pub mod client;

pub use client::*;
