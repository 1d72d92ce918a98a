//! Keccak-256 hashing and the signed-message digest.

use ethauth_types::Digest;
use sha3::{Digest as _, Keccak256};

/// Domain separator for signed text: the raw byte `0x19` followed by the
/// ASCII text `Ethereum Signed Message:\n`.
pub const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Compute Keccak-256 of arbitrary data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn keccak256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash a message the way wallets do before signing it.
///
/// Preimage: [`SIGNED_MESSAGE_PREFIX`], then the decimal byte length of
/// `message` in its UTF-8 encoding, then the message bytes. Never fails.
pub fn hash_signed_message(message: &str) -> Digest {
    let len = message.len().to_string();
    Digest::new(keccak256_multi(&[
        SIGNED_MESSAGE_PREFIX,
        len.as_bytes(),
        message.as_bytes(),
    ]))
}
