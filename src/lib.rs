//! `fieldseal` — authenticated field-level encryption for in-memory records.
//!
//! Two layers, the second built on the first:
//!
//! - the **cipher core** ([`crypto::Engine`], wrapped by [`Service`]):
//!   AES-GCM seal/open over opaque byte payloads, with a fresh random nonce
//!   per call, plus text-mode wrappers over standard base64;
//! - the **record transformer** ([`record::Protected`]): applies the cipher
//!   in place to the string fields of arbitrarily nested records, either to
//!   every field flagged as protected or to an explicit list of field names.
//!
//! # Sealed payload format
//!
//! ```text
//! base64( nonce (12 bytes) || ciphertext || tag (16 bytes) )
//! ```
//!
//! There is no version byte or algorithm identifier; the key length alone
//! selects the AES variant, so callers must track which key produced any
//! stored ciphertext.
//!
//! # Examples
//!
//! Text mode:
//!
//! ```
//! use fieldseal::Service;
//!
//! let service = Service::new(&[0x42; 32])?;
//! let sealed = service.encrypt("123-45-6789")?;
//! assert_eq!(service.decrypt(&sealed)?, "123-45-6789");
//! # Ok::<(), fieldseal::CryptoError>(())
//! ```
//!
//! Record mode:
//!
//! ```
//! use fieldseal::{impl_protected, Service};
//!
//! struct User {
//!     email: String,
//!     name: String,
//! }
//!
//! impl_protected!(User {
//!     email: protected,
//!     name: plain,
//! });
//!
//! let service = Service::new(&[0x42; 32])?;
//! let mut user = User { email: "a@b.com".into(), name: "Alice".into() };
//!
//! service.encrypt_record(&mut user)?;
//! assert_ne!(user.email, "a@b.com");
//! assert_eq!(user.name, "Alice");
//!
//! service.decrypt_record(&mut user)?;
//! assert_eq!(user.email, "a@b.com");
//! # Ok::<(), fieldseal::CryptoError>(())
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod record;
pub mod service;

pub use config::Config;
pub use error::CryptoError;
pub use record::{Direction, FieldMut, Protected};
pub use service::Service;
