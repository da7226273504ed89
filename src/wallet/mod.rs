//! Browser wallet dispatch
//!
//! Each supported extension gets a `WalletAdapter` describing the calls the
//! page has to make on the injected provider object to sign and submit a
//! payload. Connecting to the extension and signing happen in the browser.

pub mod adapters;

pub use adapters::*;
