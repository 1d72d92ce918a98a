//! Public-key recovery capability and its secp256k1 implementation.

use ethauth_types::{AccountId, Digest, SignatureBlob};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use crate::address::account_from_public_key;
use crate::CryptoError;

/// The two elliptic-curve operations verification depends on.
///
/// Swapping the backend (or substituting a deterministic fake in tests)
/// never touches verification logic.
pub trait CurveBackend: Send + Sync {
    type PublicKey;

    /// Recover the signer's public key from a digest and a normalized
    /// (`v` in 0/1) signature.
    fn recover_public_key(
        &self,
        digest: &Digest,
        signature: &SignatureBlob,
    ) -> Result<Self::PublicKey, CryptoError>;

    /// Derive the account identifier of a public key.
    fn derive_account(&self, public_key: &Self::PublicKey) -> AccountId;

    /// Human-readable name of this backend.
    fn name(&self) -> &str;
}

/// secp256k1 recovery via `k256`.
///
/// Accepts high-S signatures by recovering through their low-S twin, so any
/// R and S in `[1, n-1]` are in range.
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256k1;

impl CurveBackend for Secp256k1 {
    type PublicKey = VerifyingKey;

    fn recover_public_key(
        &self,
        digest: &Digest,
        signature: &SignatureBlob,
    ) -> Result<VerifyingKey, CryptoError> {
        let recovery_id = parse_recovery_id(signature.v())?;
        let sig = Signature::from_slice(signature.rs())
            .map_err(|_| CryptoError::Recovery("r or s out of range".into()))?;

        // (r, n - s) with the opposite y parity recovers the same key.
        let (sig, recovery_id) = match sig.normalize_s() {
            Some(low) => (
                low,
                RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
            ),
            None => (sig, recovery_id),
        };

        VerifyingKey::recover_from_prehash(digest.as_bytes(), &sig, recovery_id)
            .map_err(|_| CryptoError::Recovery("no curve point for signature".into()))
    }

    fn derive_account(&self, public_key: &VerifyingKey) -> AccountId {
        account_from_public_key(public_key)
    }

    fn name(&self) -> &str {
        "secp256k1"
    }
}

/// Recovery ids 0 through 3. Ids 2 and 3 name an `R` whose x-coordinate
/// overflowed the group order; they are legal but almost never produced.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, CryptoError> {
    RecoveryId::from_byte(v)
        .ok_or_else(|| CryptoError::Recovery(format!("invalid recovery id {v}")))
}
