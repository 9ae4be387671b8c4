//! Logging utilities.
//!
//! Centralizes logger initialization. Library crates only use the `log`
//! facade; binaries call [`init_logging`] once early in `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
