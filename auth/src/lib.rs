//! Challenge–response authentication of secp256k1 accounts.
//!
//! Three pieces, no shared state:
//! 1. **Challenge**: [`ChallengeGenerator`] issues 64 random bytes as 88
//!    characters of padded base64.
//! 2. **Hashing**: a [`MessageHasher`] turns the text the claimant signed
//!    into the signed-message digest.
//! 3. **Verification**: [`SignatureVerifier`] normalizes the signature,
//!    recovers the signer's key and compares its account to the claimed one.
//!
//! The caller hands the challenge to the claimant out of band and passes
//! back `(claimed account, challenge, signature)`. Tracking issued and used
//! challenges is the caller's job. Nothing here logs or performs I/O apart
//! from reading the entropy source.

pub mod challenge;
pub mod hasher;
pub mod verifier;

pub use challenge::{generate_challenge, ChallengeGenerator};
pub use hasher::{ChallengeHasher, MessageHasher, PersonalMessageHasher};
pub use verifier::SignatureVerifier;

pub use ethauth_crypto::{hash_signed_message, normalize_signature};
pub use ethauth_types::{AccountId, AuthError, AuthErrorKind, Challenge};

/// Check that `signature_hex` over `challenge` was produced by `account`.
///
/// `Ok(true)` only when every gate passes; any failure is an `Err` naming
/// which gate rejected the attempt.
pub fn is_challenge_signed_by_account(
    account: &str,
    challenge: &str,
    signature_hex: &str,
) -> Result<bool, AuthError> {
    SignatureVerifier::new(ChallengeHasher).is_signed_by(account, challenge, signature_hex)
}

/// Check that `signature_hex` over an arbitrary `message` was produced by
/// `account`. Same contract as [`is_challenge_signed_by_account`].
pub fn is_message_signed_by_account(
    account: &str,
    message: &str,
    signature_hex: &str,
) -> Result<bool, AuthError> {
    SignatureVerifier::new(PersonalMessageHasher).is_signed_by(account, message, signature_hex)
}
