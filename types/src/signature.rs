//! Raw recoverable ECDSA signatures: `r ‖ s ‖ v`.

use std::fmt;

use crate::error::LengthError;

/// Byte length of a recoverable signature.
pub const SIGNATURE_LEN: usize = 65;

/// A 65-byte signature: 32-byte R, 32-byte S, 1-byte recovery indicator.
///
/// Only constructible from exactly 65 bytes, so curve backends never see
/// truncated or padded input.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureBlob([u8; SIGNATURE_LEN]);

impl SignatureBlob {
    pub const fn new(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    /// The 64-byte `r ‖ s` part.
    pub fn rs(&self) -> &[u8] {
        &self.0[..64]
    }

    pub fn r(&self) -> &[u8] {
        &self.0[..32]
    }

    pub fn s(&self) -> &[u8] {
        &self.0[32..64]
    }

    /// The recovery indicator byte.
    pub fn v(&self) -> u8 {
        self.0[64]
    }

    /// `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl TryFrom<&[u8]> for SignatureBlob {
    type Error = LengthError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; SIGNATURE_LEN] = bytes.try_into().map_err(|_| LengthError {
            expected: SIGNATURE_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for SignatureBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignatureBlob({})", self.to_hex())
    }
}

impl fmt::Display for SignatureBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
