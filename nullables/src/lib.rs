//! Nullable infrastructure for deterministic testing.
//!
//! The two external capabilities of verification (randomness and curve
//! arithmetic) sit behind traits in `ethauth-crypto`. This crate provides
//! test-friendly implementations that:
//! - Return deterministic values
//! - Can be scripted to fail
//! - Count how often they were called
//!
//! Usage: swap real implementations for nullables in tests.

pub mod curve;
pub mod random;

pub use curve::NullCurve;
pub use random::NullEntropy;
