//! [`Service`]: the public encryption surface — text, byte, and record modes.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

use crate::crypto::Engine;
use crate::error::CryptoError;
use crate::record::{transform, Direction, Protected};

/// An encryption service owning one keyed [`Engine`] for its lifetime.
///
/// Construct once and pass by reference to all call sites; there is no
/// ambient global instance. The service holds no mutable state, so `&Service`
/// can be shared freely across threads.
pub struct Service {
    engine: Engine,
}

impl Service {
    /// Build a service from raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeyLength`] unless the key is exactly
    /// 16, 24, or 32 bytes (AES-128/192/256-GCM respectively).
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let engine = Engine::new(key)?;
        debug!(key_bits = key.len() * 8, "encryption service initialised");
        Ok(Self { engine })
    }

    /// Encrypt a string, returning the standard-base64 sealed payload.
    ///
    /// An empty input is an explicit pass-through: the result is `""` and no
    /// error is raised.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::EncryptionFailed`] if entropy or sealing fails.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CryptoError> {
        if plaintext.is_empty() {
            return Ok(String::new());
        }
        let blob = self.engine.seal(plaintext.as_bytes())?;
        Ok(STANDARD.encode(blob))
    }

    /// Decrypt a standard-base64 sealed payload back to the plaintext string.
    ///
    /// An empty input returns `""` with no error.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidData`] if the input is not valid base64,
    /// decodes to fewer bytes than one nonce, or authenticates but is not
    /// valid UTF-8; [`CryptoError::DecryptionFailed`] if authentication
    /// fails. The two are deliberately distinct: "not even well-formed"
    /// versus "well-formed but not authentic".
    pub fn decrypt(&self, encoded: &str) -> Result<String, CryptoError> {
        if encoded.is_empty() {
            return Ok(String::new());
        }
        let blob = STANDARD
            .decode(encoded)
            .map_err(|_| CryptoError::InvalidData)?;
        let plaintext = self.engine.open(&blob)?;
        String::from_utf8(plaintext).map_err(|_| CryptoError::InvalidData)
    }

    /// Encrypt raw bytes into a `nonce || ciphertext || tag` blob.
    ///
    /// Empty input yields an empty blob with no error.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::EncryptionFailed`] if entropy or sealing fails.
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.engine.seal(plaintext)
    }

    /// Decrypt a `nonce || ciphertext || tag` blob back to raw bytes.
    ///
    /// Empty input yields empty output with no error.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidData`] for a blob shorter than one
    /// nonce, and [`CryptoError::DecryptionFailed`] on authentication
    /// failure.
    pub fn decrypt_bytes(&self, blob: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.engine.open(blob)
    }

    /// Encrypt every field flagged as protected, recursing into nested
    /// records depth-first in declaration order.
    ///
    /// # Errors
    ///
    /// Propagates the first cipher error verbatim. Fields transformed before
    /// the failure stay transformed; there is no rollback.
    pub fn encrypt_record<R: Protected>(&self, record: &mut R) -> Result<(), CryptoError> {
        transform::walk_tagged(self, record, Direction::Encrypt)
    }

    /// Decrypt every field flagged as protected; the inverse of
    /// [`encrypt_record`](Service::encrypt_record), with the same abort and
    /// no-rollback behaviour.
    pub fn decrypt_record<R: Protected>(&self, record: &mut R) -> Result<(), CryptoError> {
        transform::walk_tagged(self, record, Direction::Decrypt)
    }

    /// Encrypt the named top-level string fields, in caller order, regardless
    /// of their protected flag. Unknown or non-string names are skipped
    /// silently; nested records are not entered.
    ///
    /// # Errors
    ///
    /// Propagates the first cipher error verbatim, leaving earlier fields
    /// transformed.
    pub fn encrypt_fields<R: Protected>(
        &self,
        record: &mut R,
        names: &[&str],
    ) -> Result<(), CryptoError> {
        transform::apply_named(self, record, Direction::Encrypt, names)
    }

    /// Decrypt the named top-level string fields; the inverse of
    /// [`encrypt_fields`](Service::encrypt_fields).
    pub fn decrypt_fields<R: Protected>(
        &self,
        record: &mut R,
        names: &[&str],
    ) -> Result<(), CryptoError> {
        transform::apply_named(self, record, Direction::Decrypt, names)
    }
}

impl std::fmt::Debug for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service").field("engine", &self.engine).finish()
    }
}
