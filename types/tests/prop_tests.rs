use proptest::prelude::*;

use ethauth_types::{
    decode_hex, AccountId, AuthError, Challenge, SignatureBlob, CHALLENGE_BYTES,
    CHALLENGE_ENCODED_LEN,
};

proptest! {
    /// Any 64 bytes encode to exactly 88 characters and parse back.
    #[test]
    fn challenge_length_invariant(raw in prop::collection::vec(any::<u8>(), CHALLENGE_BYTES)) {
        let arr: [u8; CHALLENGE_BYTES] = raw.as_slice().try_into().unwrap();
        let challenge = Challenge::from_bytes(arr);
        prop_assert_eq!(challenge.as_str().len(), CHALLENGE_ENCODED_LEN);
        let parsed = Challenge::from_encoded(challenge.as_str()).unwrap();
        prop_assert_eq!(parsed.as_bytes(), &arr);
    }

    /// Display output of an account parses back to the same account, in
    /// either case and with or without the prefix.
    #[test]
    fn account_display_parses_back(bytes in prop::array::uniform20(any::<u8>())) {
        let account = AccountId::new(bytes);
        let shown = account.to_string();
        prop_assert_eq!(AccountId::parse(&shown).unwrap(), account);
        prop_assert_eq!(AccountId::parse(&shown[2..]).unwrap(), account);
        prop_assert_eq!(AccountId::parse(&shown.to_uppercase()).unwrap(), account);
    }

    /// Accounts of any byte length other than 20 are rejected.
    #[test]
    fn account_wrong_length_rejected(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(bytes.len() != 20);
        let err = AccountId::parse(&hex::encode(&bytes)).unwrap_err();
        let is_invalid_account = matches!(err, AuthError::InvalidAccount { .. });
        prop_assert!(is_invalid_account);
    }

    /// Only 65-byte inputs become signature blobs.
    #[test]
    fn signature_blob_length_gate(bytes in prop::collection::vec(any::<u8>(), 0..140)) {
        let result = SignatureBlob::try_from(bytes.as_slice());
        prop_assert_eq!(result.is_ok(), bytes.len() == 65);
    }

    /// Hex decoding never panics on arbitrary text.
    #[test]
    fn decode_hex_total(s in "\\PC*") {
        let _ = decode_hex(&s);
    }
}
