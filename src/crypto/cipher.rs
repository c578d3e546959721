//! Key-length validated AES-GCM engine: seal and open over opaque byte blobs.
//!
//! A fresh 96-bit nonce is drawn from the OS CSPRNG for every seal and
//! travels prepended to its ciphertext. Nonces are never derived from
//! counters, timestamps, or the plaintext — reuse under the same key breaks
//! both confidentiality and authentication.

use aes_gcm::{
    aead::{consts::U12, rand_core::RngCore, Aead, KeyInit, OsRng},
    aes::Aes192,
    Aes128Gcm, Aes256Gcm, AesGcm, Nonce,
};

use crate::error::CryptoError;

/// Byte length of an AES-GCM nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// AES-GCM over a 192-bit key; the `aes-gcm` crate only aliases the 128- and
/// 256-bit variants.
type Aes192Gcm = AesGcm<Aes192, U12>;

/// An authenticated-encryption engine, keyed once at construction.
///
/// The key length selects the variant: 16 bytes → AES-128-GCM, 24 bytes →
/// AES-192-GCM, 32 bytes → AES-256-GCM. The engine holds no per-call state
/// and is never mutated after construction, so one instance is safe to share
/// across concurrent callers for its whole lifetime.
pub struct Engine {
    aead: Variant,
}

enum Variant {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
}

impl Engine {
    /// Build an engine from raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeyLength`] unless the key is exactly
    /// 16, 24, or 32 bytes. An invalid key is always a construction-time
    /// failure, never deferred to use-time.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let invalid = || CryptoError::InvalidKeyLength(key.len());
        let aead = match key.len() {
            16 => Variant::Aes128(Aes128Gcm::new_from_slice(key).map_err(|_| invalid())?),
            24 => Variant::Aes192(Aes192Gcm::new_from_slice(key).map_err(|_| invalid())?),
            32 => Variant::Aes256(Aes256Gcm::new_from_slice(key).map_err(|_| invalid())?),
            _ => return Err(invalid()),
        };
        Ok(Self { aead })
    }

    /// Encrypt `plaintext` into a `nonce || ciphertext || tag` blob.
    ///
    /// Empty input is an explicit pass-through: the result is empty and no
    /// error is raised. Callers must not treat an empty result as encrypted
    /// data.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::EncryptionFailed`] if the CSPRNG cannot supply
    /// a nonce or the AEAD seal fails.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if plaintext.is_empty() {
            return Ok(Vec::new());
        }

        let mut nonce = [0u8; NONCE_LEN];
        OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|_| CryptoError::EncryptionFailed)?;

        let sealed = self
            .aead
            .encrypt_at(&nonce, plaintext)
            .map_err(|_| CryptoError::EncryptionFailed)?;

        let mut blob = Vec::with_capacity(NONCE_LEN + sealed.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&sealed);
        Ok(blob)
    }

    /// Open a `nonce || ciphertext || tag` blob back into plaintext.
    ///
    /// Empty input returns empty output with no error, mirroring [`seal`].
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidData`] if the blob is shorter than one
    /// nonce, and [`CryptoError::DecryptionFailed`] on any authentication
    /// failure — tampered, truncated after the nonce, or wrong key.
    /// Unauthenticated plaintext is never returned, even partially.
    ///
    /// [`seal`]: Engine::seal
    pub fn open(&self, blob: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if blob.is_empty() {
            return Ok(Vec::new());
        }
        if blob.len() < NONCE_LEN {
            return Err(CryptoError::InvalidData);
        }

        let (nonce, sealed) = blob.split_at(NONCE_LEN);
        self.aead
            .decrypt_at(nonce, sealed)
            .map_err(|_| CryptoError::DecryptionFailed)
    }
}

impl Variant {
    fn encrypt_at(&self, nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, aes_gcm::aead::Error> {
        match self {
            Variant::Aes128(c) => c.encrypt(Nonce::from_slice(nonce), plaintext),
            Variant::Aes192(c) => c.encrypt(Nonce::from_slice(nonce), plaintext),
            Variant::Aes256(c) => c.encrypt(Nonce::from_slice(nonce), plaintext),
        }
    }

    fn decrypt_at(&self, nonce: &[u8], sealed: &[u8]) -> Result<Vec<u8>, aes_gcm::aead::Error> {
        match self {
            Variant::Aes128(c) => c.decrypt(Nonce::from_slice(nonce), sealed),
            Variant::Aes192(c) => c.decrypt(Nonce::from_slice(nonce), sealed),
            Variant::Aes256(c) => c.decrypt(Nonce::from_slice(nonce), sealed),
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.write_str(match self.aead {
            Variant::Aes128(_) => "Engine(AES-128-GCM)",
            Variant::Aes192(_) => "Engine(AES-192-GCM)",
            Variant::Aes256(_) => "Engine(AES-256-GCM)",
        })
    }
}
