//! Pluggable hashing strategies for the verifier.
//!
//! Challenges and free-form messages are two entry points into the same
//! verification routine. Each has its own hasher type so the paths can be
//! told apart, but both currently hash with the signed-message scheme.

use ethauth_crypto::hash_signed_message;
use ethauth_types::Digest;

/// Turns the text a claimant signed into the digest they signed.
pub trait MessageHasher: Send + Sync {
    fn hash(&self, message: &str) -> Digest;

    /// Short label for this entry point.
    fn name(&self) -> &str;
}

/// Hashes issued challenges.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChallengeHasher;

impl MessageHasher for ChallengeHasher {
    fn hash(&self, challenge: &str) -> Digest {
        hash_signed_message(challenge)
    }

    fn name(&self) -> &str {
        "challenge"
    }
}

/// Hashes arbitrary human-readable messages.
#[derive(Clone, Copy, Debug, Default)]
pub struct PersonalMessageHasher;

impl MessageHasher for PersonalMessageHasher {
    fn hash(&self, message: &str) -> Digest {
        hash_signed_message(message)
    }

    fn name(&self) -> &str {
        "message"
    }
}
