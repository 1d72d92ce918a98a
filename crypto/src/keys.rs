//! secp256k1 secret keys and claimant-side signing.
//!
//! Verification never needs these. They exist to produce signatures for
//! tests, benchmarks and the CLI's `sign` command.

use ethauth_types::{AccountId, Digest, SignatureBlob, SIGNATURE_LEN};
use k256::ecdsa::{SigningKey, VerifyingKey};
use std::fmt;

use crate::address::account_from_public_key;
use crate::hash::hash_signed_message;
use crate::sign::LEGACY_V_EVEN;
use crate::CryptoError;

/// A secp256k1 secret key. Zeroized on drop, never printed.
#[derive(Clone)]
pub struct SecretKey(SigningKey);

impl SecretKey {
    /// Build from 32 big-endian bytes. Fails for zero or values >= n.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, CryptoError> {
        SigningKey::from_slice(bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidSecretKey("scalar out of range".into()))
    }

    /// Parse 64 hex digits, with an optional `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let bytes = ethauth_types::decode_hex(s)
            .map_err(|e| CryptoError::InvalidSecretKey(e.to_string()))?;
        let arr: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
            CryptoError::InvalidSecretKey(format!("expected 32 bytes, got {}", bytes.len()))
        })?;
        Self::from_bytes(&arr)
    }

    pub fn public_key(&self) -> VerifyingKey {
        *self.0.verifying_key()
    }

    pub fn account(&self) -> AccountId {
        account_from_public_key(self.0.verifying_key())
    }

    /// Sign a 32-byte digest, returning `r ‖ s ‖ v` with `v` in 27/28.
    pub fn sign_digest(&self, digest: &Digest) -> Result<SignatureBlob, CryptoError> {
        let (sig, recovery_id) = self
            .0
            .sign_prehash_recoverable(digest.as_bytes())
            .map_err(|e| CryptoError::Signing(e.to_string()))?;
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes[..64].copy_from_slice(&sig.to_bytes());
        bytes[64] = LEGACY_V_EVEN + recovery_id.to_byte();
        Ok(SignatureBlob::new(bytes))
    }

    /// Sign `message` under the signed-message hashing scheme.
    pub fn sign_message(&self, message: &str) -> Result<SignatureBlob, CryptoError> {
        self.sign_digest(&hash_signed_message(message))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({})", self.account())
    }
}
