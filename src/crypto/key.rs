//! Zero-on-drop holder for decoded key material.

use base64::{engine::general_purpose::STANDARD, DecodeError, Engine as _};

/// Raw symmetric key bytes, as handed over by a configuration source.
///
/// When this value is dropped the buffer is overwritten with zeroes to
/// minimise the window during which plaintext key material lives in RAM,
/// and the `Debug` representation never prints the bytes.
pub struct KeyMaterial(Vec<u8>);

impl KeyMaterial {
    /// Wrap already-decoded key bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Decode a standard-base64 key string.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`DecodeError`] if `encoded` is not valid
    /// base64. Length validation is left to [`Engine::new`].
    ///
    /// [`Engine::new`]: crate::crypto::Engine::new
    pub fn from_base64(encoded: &str) -> Result<Self, DecodeError> {
        STANDARD.decode(encoded).map(Self)
    }

    /// Borrow the key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for KeyMaterial {
    fn drop(&mut self) {
        // Zero the key material on drop.
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("KeyMaterial([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_standard_base64() {
        let key = KeyMaterial::from_base64("QkJCQkJCQkJCQkJCQkJCQg==").unwrap();
        assert_eq!(key.as_bytes(), &[0x42; 16]);
    }

    #[test]
    fn rejects_malformed_base64() {
        assert!(KeyMaterial::from_base64("not-base64!!").is_err());
    }

    #[test]
    fn redacted_in_debug_output() {
        let key = KeyMaterial::new(vec![0xFF; 32]);
        assert!(format!("{key:?}").contains("REDACTED"));
    }
}
