//! Account derivation from public keys.
//!
//! Account = last 20 bytes of Keccak-256(x ‖ y), where x ‖ y is the 64-byte
//! uncompressed public key without its `0x04` SEC1 tag.
//!
//! Mixed-case rendering follows EIP-55: hex digit `i` of the lowercase
//! account is uppercased when nibble `i` of Keccak-256(lowercase hex) >= 8.

use ethauth_types::{AccountId, ACCOUNT_LEN};
use k256::ecdsa::VerifyingKey;

use crate::keccak256;

/// Derive the account of a secp256k1 public key.
pub fn account_from_public_key(public_key: &VerifyingKey) -> AccountId {
    let point = public_key.to_encoded_point(false);
    // Skip the 0x04 prefix.
    account_from_uncompressed(&point.as_bytes()[1..])
}

/// Derive an account from the 64 raw bytes `x ‖ y`.
fn account_from_uncompressed(xy: &[u8]) -> AccountId {
    let hash = keccak256(xy);
    let mut account = [0u8; ACCOUNT_LEN];
    account.copy_from_slice(&hash[32 - ACCOUNT_LEN..]);
    AccountId::new(account)
}

/// Render an account with the EIP-55 mixed-case checksum, `0x`-prefixed.
///
/// Parsing stays case-insensitive; this only affects output.
pub fn to_checksum_address(account: &AccountId) -> String {
    let lower = account.to_hex();
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = (hash[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0f;
        if nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::SecretKey;

    #[test]
    fn secret_key_one_vector() {
        let mut secret = [0u8; 32];
        secret[31] = 1;
        let key = SecretKey::from_bytes(&secret).unwrap();
        assert_eq!(
            to_checksum_address(&key.account()),
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
        );
    }

    #[test]
    fn eip55_vectors() {
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            let account = AccountId::parse(expected).unwrap();
            assert_eq!(to_checksum_address(&account), expected);
        }
    }

    #[test]
    fn checksum_is_case_insensitive_on_input() {
        let a = AccountId::parse("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        let b = AccountId::parse("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").unwrap();
        assert_eq!(to_checksum_address(&a), to_checksum_address(&b));
    }

    #[test]
    fn derive_is_deterministic() {
        let key = SecretKey::from_bytes(&[7u8; 32]).unwrap();
        let a1 = account_from_public_key(&key.public_key());
        let a2 = account_from_public_key(&key.public_key());
        assert_eq!(a1, a2);
    }

    #[test]
    fn different_keys_different_accounts() {
        let k1 = SecretKey::from_bytes(&[1u8; 32]).unwrap();
        let k2 = SecretKey::from_bytes(&[2u8; 32]).unwrap();
        assert_ne!(k1.account(), k2.account());
    }
}
