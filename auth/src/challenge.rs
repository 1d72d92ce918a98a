//! Challenge generation.

use ethauth_crypto::{CryptoError, EntropySource, OsEntropy};
use ethauth_types::{AuthError, Challenge, CHALLENGE_BYTES};

/// Issues fresh challenges from an entropy source.
///
/// Each call draws 64 independent bytes; nothing caller-supplied seeds the
/// draw. An entropy failure is returned as [`AuthError::Entropy`] and never
/// retried.
#[derive(Clone, Debug, Default)]
pub struct ChallengeGenerator<E = OsEntropy> {
    entropy: E,
}

impl ChallengeGenerator<OsEntropy> {
    /// A generator backed by the operating system's CSPRNG.
    pub fn new() -> Self {
        Self { entropy: OsEntropy }
    }
}

impl<E: EntropySource> ChallengeGenerator<E> {
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    /// Draw a challenge. The result is always 88 characters long.
    pub fn generate(&self) -> Result<Challenge, AuthError> {
        let mut raw = [0u8; CHALLENGE_BYTES];
        self.entropy.fill_bytes(&mut raw).map_err(|e| match e {
            CryptoError::Entropy(reason) => AuthError::Entropy(reason),
            other => AuthError::Entropy(other.to_string()),
        })?;
        Ok(Challenge::from_bytes(raw))
    }
}

/// Draw a challenge from the operating system's CSPRNG.
pub fn generate_challenge() -> Result<Challenge, AuthError> {
    ChallengeGenerator::new().generate()
}
