#![no_main]

use ethauth_crypto::{CurveBackend, Secp256k1};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // 32 digest bytes followed by 65 signature bytes.
    if data.len() < 97 {
        return;
    }
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&data[..32]);
    let digest = ethauth_types::Digest::new(digest);

    let mut sig = data[32..97].to_vec();
    ethauth_crypto::normalize_signature(&mut sig);
    let Ok(blob) = ethauth_types::SignatureBlob::try_from(sig.as_slice()) else {
        return;
    };

    // Recovery must never panic regardless of input.
    if let Ok(key) = Secp256k1.recover_public_key(&digest, &blob) {
        let _ = Secp256k1.derive_account(&key);
    }
});
