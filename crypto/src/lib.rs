//! Cryptographic primitives for ethauth.
//!
//! - **Keccak-256** (the pre-standard padding, not SHA3-256) for digests and accounts
//! - The `"\x19Ethereum Signed Message:\n" + len + message` signing-intent hash
//! - **secp256k1** public-key recovery behind the [`CurveBackend`] capability
//! - Recovery-indicator normalization (27/28 to 0/1)
//! - Secure randomness behind the [`EntropySource`] capability

pub mod address;
pub mod curve;
pub mod error;
pub mod hash;
pub mod keys;
pub mod random;
pub mod sign;

pub use address::{account_from_public_key, to_checksum_address};
pub use curve::{CurveBackend, Secp256k1};
pub use error::CryptoError;
pub use hash::{hash_signed_message, keccak256, keccak256_multi, SIGNED_MESSAGE_PREFIX};
pub use keys::SecretKey;
pub use random::{EntropySource, OsEntropy};
pub use sign::normalize_signature;
