//! Shared utilities for ethauth binaries.

pub mod logging;

pub use logging::{init_logging, LogFormat};
