#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(account) = ethauth_types::AccountId::parse(s) {
            // Display form parses back to the same account.
            let again = ethauth_types::AccountId::parse(&account.to_string());
            assert_eq!(again.ok(), Some(account));
            let checksummed = ethauth_crypto::to_checksum_address(&account);
            assert_eq!(checksummed.to_lowercase(), account.to_string());
        }
        if let Ok(challenge) = ethauth_types::Challenge::from_encoded(s) {
            assert_eq!(challenge.as_str(), s);
            assert_eq!(challenge.as_str().len(), ethauth_types::CHALLENGE_ENCODED_LEN);
        }
    }

    let _ = ethauth_types::SignatureBlob::try_from(data);
    if let Some(secret) = data.first_chunk::<32>() {
        let _ = ethauth_crypto::SecretKey::from_bytes(secret);
    }
});
