//! Environment configuration for embedders that supply the key externally.
//!
//! The key itself is never generated here; it arrives as a standard-base64
//! string in `ENCRYPTION_KEY` and is handed to [`Service::new`] after
//! decoding.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::crypto::KeyMaterial;
use crate::error::CryptoError;
use crate::service::Service;

/// Validated crate configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Standard-base64 encoding of the symmetric key. **Required.**
    #[serde(default)]
    pub encryption_key: String,

    /// Tracing log level for embedding binaries (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment cannot be read or a variable
    /// cannot be deserialised into its field.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;
        cfg.try_deserialize()
            .context("failed to deserialise configuration")
    }

    /// Decode the configured key and construct a [`Service`] from it.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MissingKey`] if `ENCRYPTION_KEY` is absent or
    /// blank, a contextual error if it is not valid base64, and
    /// [`CryptoError::InvalidKeyLength`] if the decoded key is not 16, 24,
    /// or 32 bytes.
    pub fn build_service(&self) -> Result<Service> {
        let encoded = self.encryption_key.trim();
        if encoded.is_empty() {
            return Err(CryptoError::MissingKey.into());
        }
        let key = KeyMaterial::from_base64(encoded)
            .context("ENCRYPTION_KEY is not valid base64")?;
        Ok(Service::new(key.as_bytes())?)
    }
}
