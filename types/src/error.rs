//! Error taxonomy shared across crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AccountId, Digest};

/// Why an authentication call failed.
///
/// Every variant carries the raw inputs needed to audit the attempt. None
/// of them is logged by the library itself.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("entropy source unavailable: {0}")]
    Entropy(String),

    #[error("invalid account identifier {input:?}: {reason}")]
    InvalidAccount { input: String, reason: String },

    #[error("invalid signature encoding {input:?}: {reason}")]
    InvalidSignatureEncoding { input: String, reason: String },

    #[error("public key recovery failed: {reason} (digest {digest}, signature 0x{signature})")]
    Recovery {
        reason: String,
        digest: Digest,
        /// Normalized signature bytes, hex-encoded without prefix.
        signature: String,
    },

    #[error("signed by account {recovered} but presented for account {claimed}")]
    AccountMismatch {
        claimed: AccountId,
        recovered: AccountId,
    },
}

/// Fieldless view of [`AuthError`], for branching and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorKind {
    Entropy,
    InvalidAccount,
    InvalidSignatureEncoding,
    Recovery,
    AccountMismatch,
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::Entropy(_) => AuthErrorKind::Entropy,
            Self::InvalidAccount { .. } => AuthErrorKind::InvalidAccount,
            Self::InvalidSignatureEncoding { .. } => AuthErrorKind::InvalidSignatureEncoding,
            Self::Recovery { .. } => AuthErrorKind::Recovery,
            Self::AccountMismatch { .. } => AuthErrorKind::AccountMismatch,
        }
    }
}

impl AuthErrorKind {
    /// True when the error is a failed authentication attempt rather than
    /// malformed input or a system fault.
    pub fn is_failed_attempt(self) -> bool {
        matches!(self, Self::Recovery | Self::AccountMismatch)
    }

    /// True when the caller can fix the error by re-submitting input.
    pub fn is_malformed_input(self) -> bool {
        matches!(self, Self::InvalidAccount | Self::InvalidSignatureEncoding)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entropy => "entropy",
            Self::InvalidAccount => "invalid_account",
            Self::InvalidSignatureEncoding => "invalid_signature_encoding",
            Self::Recovery => "recovery",
            Self::AccountMismatch => "account_mismatch",
        }
    }
}

/// A byte sequence had the wrong length for a fixed-size value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("expected {expected} bytes, got {actual}")]
pub struct LengthError {
    pub expected: usize,
    pub actual: usize,
}

/// An encoded challenge did not have the shape issued by the generator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChallengeFormatError {
    #[error("expected {expected} characters, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("invalid base64: {0}")]
    Encoding(String),

    #[error("challenge must decode to {expected} bytes, got {actual}")]
    DecodedLength { expected: usize, actual: usize },
}
