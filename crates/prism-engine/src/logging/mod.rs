//! Logging setup.
//!
//! Everything in the workspace logs through the `log` facade; this module
//! only installs `env_logger` as the backend.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
