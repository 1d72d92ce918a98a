//! Fundamental types for ethauth.
//!
//! This crate defines the values that flow between the challenge generator,
//! the message hasher and the signature verifier: account identifiers,
//! challenges, raw signatures, digests, and the shared error taxonomy.
//! It contains no curve arithmetic.

pub mod account;
pub mod challenge;
pub mod digest;
pub mod encoding;
pub mod error;
pub mod signature;

pub use account::{AccountId, ACCOUNT_LEN};
pub use challenge::{Challenge, CHALLENGE_BYTES, CHALLENGE_ENCODED_LEN};
pub use digest::{Digest, DIGEST_LEN};
pub use encoding::{decode_hex, strip_hex_prefix};
pub use error::{AuthError, AuthErrorKind, ChallengeFormatError, LengthError};
pub use signature::{SignatureBlob, SIGNATURE_LEN};
