//! Error types for node access, decoding and yield computation

pub mod lending_error;

pub use lending_error::*;
