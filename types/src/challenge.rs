//! Authentication challenges.
//!
//! A challenge is 64 random bytes rendered as standard padded base64, which
//! is always exactly 88 ASCII characters.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::ChallengeFormatError;

/// Number of random bytes in a challenge.
pub const CHALLENGE_BYTES: usize = 64;

/// Length of the encoded challenge: `4 * ceil(64 / 3)`.
pub const CHALLENGE_ENCODED_LEN: usize = 88;

/// An issued challenge. Immutable once created.
///
/// Uniqueness and single use are the caller's responsibility.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Challenge {
    raw: [u8; CHALLENGE_BYTES],
    encoded: String,
}

impl Challenge {
    /// Encode raw challenge bytes.
    pub fn from_bytes(raw: [u8; CHALLENGE_BYTES]) -> Self {
        let encoded = STANDARD.encode(raw);
        Self { raw, encoded }
    }

    /// Parse a challenge string previously issued by a generator.
    ///
    /// Accepts only the exact shape issued: 88 characters of standard,
    /// padded base64 that decode to 64 bytes.
    pub fn from_encoded(s: &str) -> Result<Self, ChallengeFormatError> {
        if s.len() != CHALLENGE_ENCODED_LEN {
            return Err(ChallengeFormatError::Length {
                expected: CHALLENGE_ENCODED_LEN,
                actual: s.len(),
            });
        }
        let decoded = STANDARD
            .decode(s)
            .map_err(|e| ChallengeFormatError::Encoding(e.to_string()))?;
        let raw: [u8; CHALLENGE_BYTES] =
            decoded
                .as_slice()
                .try_into()
                .map_err(|_| ChallengeFormatError::DecodedLength {
                    expected: CHALLENGE_BYTES,
                    actual: decoded.len(),
                })?;
        Ok(Self {
            raw,
            encoded: s.to_string(),
        })
    }

    /// The printable form handed to the claimant.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    pub fn as_bytes(&self) -> &[u8; CHALLENGE_BYTES] {
        &self.raw
    }
}

impl fmt::Debug for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Challenge({}…)", &self.encoded[..8])
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl AsRef<str> for Challenge {
    fn as_ref(&self) -> &str {
        &self.encoded
    }
}

impl Serialize for Challenge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encoded)
    }
}

impl<'de> Deserialize<'de> for Challenge {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_encoded(&s).map_err(serde::de::Error::custom)
    }
}
