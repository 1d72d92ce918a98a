//! Account identifiers: the last 20 bytes of Keccak-256 over an uncompressed
//! secp256k1 public key.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::encoding::decode_hex;
use crate::error::{AuthError, LengthError};

/// Byte length of an account identifier.
pub const ACCOUNT_LEN: usize = 20;

/// A 20-byte account identifier.
///
/// Parsing is case-insensitive and accepts an optional `0x` prefix. Two
/// identifiers are equal iff their raw bytes are equal. Displays as `0x`
/// followed by 40 lowercase hex digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId([u8; ACCOUNT_LEN]);

impl AccountId {
    pub const fn new(bytes: [u8; ACCOUNT_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_LEN] {
        &self.0
    }

    /// Parse a hex account string, failing with [`AuthError::InvalidAccount`].
    pub fn parse(s: &str) -> Result<Self, AuthError> {
        let invalid = |reason: String| AuthError::InvalidAccount {
            input: s.to_string(),
            reason,
        };
        let bytes = decode_hex(s).map_err(|e| invalid(e.to_string()))?;
        Self::try_from(bytes.as_slice()).map_err(|e| invalid(e.to_string()))
    }

    /// Lowercase hex without the `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl TryFrom<&[u8]> for AccountId {
    type Error = LengthError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; ACCOUNT_LEN] = bytes.try_into().map_err(|_| LengthError {
            expected: ACCOUNT_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl FromStr for AccountId {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId(0x{})", self.to_hex())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
