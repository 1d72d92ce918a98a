//! Nullable curve: a lookup table standing in for secp256k1.

use ethauth_crypto::{CryptoError, CurveBackend};
use ethauth_types::{AccountId, Digest, SignatureBlob};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A deterministic curve backend for testing.
///
/// "Recovers" only the `(digest, signature)` pairs registered with
/// [`NullCurve::with_signer`]; everything else fails recovery. The public
/// key type is the account itself.
#[derive(Default)]
pub struct NullCurve {
    signers: HashMap<(Digest, SignatureBlob), AccountId>,
    recoveries: AtomicUsize,
}

impl NullCurve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `account` as the signer of `signature` over `digest`.
    pub fn with_signer(
        mut self,
        digest: Digest,
        signature: SignatureBlob,
        account: AccountId,
    ) -> Self {
        self.signers.insert((digest, signature), account);
        self
    }

    /// Number of recovery attempts so far.
    pub fn recoveries(&self) -> usize {
        self.recoveries.load(Ordering::SeqCst)
    }
}

impl CurveBackend for NullCurve {
    type PublicKey = AccountId;

    fn recover_public_key(
        &self,
        digest: &Digest,
        signature: &SignatureBlob,
    ) -> Result<AccountId, CryptoError> {
        self.recoveries.fetch_add(1, Ordering::SeqCst);
        self.signers
            .get(&(*digest, *signature))
            .copied()
            .ok_or_else(|| CryptoError::Recovery("unknown signature".into()))
    }

    fn derive_account(&self, public_key: &AccountId) -> AccountId {
        *public_key
    }

    fn name(&self) -> &str {
        "null-curve"
    }
}
