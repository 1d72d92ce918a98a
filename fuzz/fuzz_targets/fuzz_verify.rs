#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    account: String,
    message: String,
    signature: String,
    challenge: bool,
}

fuzz_target!(|input: Input| {
    // Arbitrary strings must never panic and never produce Ok(false).
    let result = if input.challenge {
        ethauth_auth::is_challenge_signed_by_account(
            &input.account,
            &input.message,
            &input.signature,
        )
    } else {
        ethauth_auth::is_message_signed_by_account(
            &input.account,
            &input.message,
            &input.signature,
        )
    };
    if let Ok(verified) = result {
        assert!(verified);
    }
});
