//! Signature verification.
//!
//! Gates, in order; the first failure short-circuits:
//! 1. parse the claimed account (20 bytes of hex)
//! 2. decode the signature hex
//! 3. normalize the recovery indicator
//! 4. hash the message
//! 5. recover the public key (65-byte length check first)
//! 6. derive the recovered account
//! 7. compare with the claimed account

use ethauth_crypto::{normalize_signature, CurveBackend, Secp256k1};
use ethauth_types::{decode_hex, AccountId, AuthError, Digest, SignatureBlob};

use crate::hasher::MessageHasher;

/// One verification routine, parameterized by hashing strategy and curve.
#[derive(Clone, Debug, Default)]
pub struct SignatureVerifier<H, C = Secp256k1> {
    hasher: H,
    curve: C,
}

impl<H: MessageHasher> SignatureVerifier<H, Secp256k1> {
    pub fn new(hasher: H) -> Self {
        Self {
            hasher,
            curve: Secp256k1,
        }
    }
}

impl<H: MessageHasher, C: CurveBackend> SignatureVerifier<H, C> {
    pub fn with_curve(hasher: H, curve: C) -> Self {
        Self { hasher, curve }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Run every gate and return the authenticated account.
    pub fn verify(
        &self,
        claimed_account: &str,
        message: &str,
        signature_hex: &str,
    ) -> Result<AccountId, AuthError> {
        let claimed = AccountId::parse(claimed_account)?;
        let recovered = self.recover_account(message, signature_hex)?;
        if recovered != claimed {
            return Err(AuthError::AccountMismatch { claimed, recovered });
        }
        Ok(recovered)
    }

    /// [`verify`](Self::verify) reduced to the boolean contract: `Ok(true)`
    /// or the error of the gate that failed.
    pub fn is_signed_by(
        &self,
        claimed_account: &str,
        message: &str,
        signature_hex: &str,
    ) -> Result<bool, AuthError> {
        self.verify(claimed_account, message, signature_hex)
            .map(|_| true)
    }

    /// Who signed `message`? Runs gates 2 through 6.
    pub fn recover_account(
        &self,
        message: &str,
        signature_hex: &str,
    ) -> Result<AccountId, AuthError> {
        let mut signature =
            decode_hex(signature_hex).map_err(|e| AuthError::InvalidSignatureEncoding {
                input: signature_hex.to_string(),
                reason: e.to_string(),
            })?;
        normalize_signature(&mut signature);

        let digest = self.hasher.hash(message);
        let blob = SignatureBlob::try_from(signature.as_slice())
            .map_err(|e| recovery_error(e.to_string(), digest, &signature))?;
        let public_key = self
            .curve
            .recover_public_key(&digest, &blob)
            .map_err(|e| recovery_error(e.to_string(), digest, &signature))?;

        Ok(self.curve.derive_account(&public_key))
    }
}

fn recovery_error(reason: String, digest: Digest, signature: &[u8]) -> AuthError {
    AuthError::Recovery {
        reason,
        digest,
        signature: hex::encode(signature),
    }
}
