//! Randomness capability.

use crate::CryptoError;

/// A source of cryptographically secure random bytes.
///
/// Implementations must fill the whole buffer or fail; they never fall
/// back to a weaker source.
pub trait EntropySource: Send + Sync {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), CryptoError>;
}

/// The operating system's CSPRNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        getrandom::getrandom(dest).map_err(|e| CryptoError::Entropy(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_buffer() {
        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        OsEntropy.fill_bytes(&mut a).unwrap();
        OsEntropy.fill_bytes(&mut b).unwrap();
        assert_ne!(a, [0u8; 64]);
        assert_ne!(a, b);
    }

    #[test]
    fn empty_buffer_is_ok() {
        OsEntropy.fill_bytes(&mut []).unwrap();
    }
}
