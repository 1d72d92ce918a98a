//! Hex parsing shared by account and signature inputs.

/// Strip a single leading `0x` / `0X` prefix, if present.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decode a hex string that may carry a `0x` prefix.
///
/// Digits are case-insensitive. An odd number of digits is an error; the
/// value is never left-padded. The empty string decodes to no bytes.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(strip_hex_prefix(s))
}
