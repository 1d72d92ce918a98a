//! Nullable entropy: scripted random bytes.

use ethauth_crypto::{CryptoError, EntropySource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// A deterministic entropy source for testing.
///
/// Emits the configured byte pattern in order, cycling, continuing where
/// the previous call stopped. A failing source never fills anything.
pub struct NullEntropy {
    pattern: Vec<u8>,
    cursor: Mutex<usize>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl NullEntropy {
    /// Create with a byte pattern to cycle through.
    pub fn new(pattern: Vec<u8>) -> Self {
        Self {
            pattern,
            cursor: Mutex::new(0),
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create with a single byte that fills every buffer.
    pub fn constant(value: u8) -> Self {
        Self::new(vec![value])
    }

    /// Create a source that always reports itself unavailable.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new(Vec::new())
        }
    }

    /// Number of `fill_bytes` calls so far, successful or not.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EntropySource for NullEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = &self.failure {
            return Err(CryptoError::Entropy(reason.clone()));
        }
        if self.pattern.is_empty() {
            return Err(CryptoError::Entropy("no scripted bytes".into()));
        }
        let mut cursor = self.cursor.lock().unwrap_or_else(PoisonError::into_inner);
        for byte in dest.iter_mut() {
            *byte = self.pattern[*cursor % self.pattern.len()];
            *cursor += 1;
        }
        Ok(())
    }
}
