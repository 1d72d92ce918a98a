//! Recovery-indicator normalization.
//!
//! Signing tools emit the ECDSA recovery indicator either as 27/28
//! (`0x1b`/`0x1c`) or as 0/1. Recovery below assumes 0/1.

/// Legacy recovery indicator for an even-y `R`.
pub const LEGACY_V_EVEN: u8 = 0x1b;
/// Legacy recovery indicator for an odd-y `R`.
pub const LEGACY_V_ODD: u8 = 0x1c;

/// Rewrite a trailing `0x1b`/`0x1c` to `0x00`/`0x01` in place.
///
/// Total over any length: inputs of zero or one byte and any other trailing
/// byte are left untouched.
pub fn normalize_signature(sig: &mut [u8]) {
    if sig.len() < 2 {
        return;
    }
    if let Some(last) = sig.last_mut() {
        match *last {
            LEGACY_V_EVEN => *last = 0x00,
            LEGACY_V_ODD => *last = 0x01,
            _ => {}
        }
    }
}
