//! Error taxonomy for the cipher core and record transformer.

use thiserror::Error;

/// Errors produced by [`Service`](crate::Service) operations.
///
/// All variants are terminal for the operation that raised them; nothing is
/// retried internally. [`CryptoError::DecryptionFailed`] is deliberately a
/// single undifferentiated outcome — the error never reveals which
/// authentication check failed, so it cannot be used as a decryption oracle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// No key was supplied to a constructor that requires one.
    #[error("encryption key is missing")]
    MissingKey,

    /// The key is not 16, 24, or 32 bytes.
    #[error("invalid key length: expected 16, 24, or 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// Nonce generation or AEAD sealing failed.
    #[error("encryption failed")]
    EncryptionFailed,

    /// Authentication failed: tampered, truncated, or wrong-key ciphertext.
    #[error("decryption failed")]
    DecryptionFailed,

    /// The input is not a well-formed sealed payload — malformed text
    /// encoding, or a blob shorter than one nonce.
    #[error("invalid encrypted data")]
    InvalidData,
}
