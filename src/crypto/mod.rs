//! AES-GCM sealed-payload primitives.
//!
//! This module is intentionally free of encoding and record concerns.
//! It provides the low-level seal/open operations used by
//! [`Service`](crate::Service), and can be used standalone for raw byte
//! payloads.
//!
//! # Sealed payload format
//!
//! ```text
//! nonce (12 bytes) || ciphertext || tag (16 bytes)
//! ```
//!
//! No version byte or algorithm identifier is included. The key length alone
//! selects the AES variant, so callers must track which key produced any
//! stored payload.

pub mod cipher;
pub mod key;

pub use cipher::{Engine, NONCE_LEN};
pub use key::KeyMaterial;
