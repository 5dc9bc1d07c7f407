//! Service configuration types.
//!
//! `ServiceConfig` holds the full configuration; `ConfigUpdate` is a
//! partial overlay whose set fields are merged over the current value.
//! Fields left unset in an update keep their previous value.

use std::path::PathBuf;

use crate::DEFAULT_MODULUS_LENGTH;

/// Configuration for a [`SignatureService`](crate::SignatureService)
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// RSA modulus length in bits for generated keys
    pub modulus_length: usize,

    /// Directory the default local key store writes to.
    /// Required only when no custom store is injected.
    pub storage_local_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            modulus_length: DEFAULT_MODULUS_LENGTH,
            storage_local_path: None,
        }
    }
}

impl ServiceConfig {
    /// Set the modulus length
    pub fn with_modulus_length(mut self, bits: usize) -> Self {
        self.modulus_length = bits;
        self
    }

    /// Set the local storage directory
    pub fn with_storage_local_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_local_path = Some(path.into());
        self
    }
}

/// Partial configuration overlay.
///
/// No validation happens here; an absurd modulus length is accepted
/// and surfaces later as a key generation error.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub modulus_length: Option<usize>,
    pub storage_local_path: Option<PathBuf>,
}

impl ConfigUpdate {
    /// Override the modulus length
    pub fn modulus_length(mut self, bits: usize) -> Self {
        self.modulus_length = Some(bits);
        self
    }

    /// Override the local storage directory
    pub fn storage_local_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_local_path = Some(path.into());
        self
    }

    /// Merge this update's set fields into `config`
    pub fn apply(&self, config: &mut ServiceConfig) {
        if let Some(bits) = self.modulus_length {
            config.modulus_length = bits;
        }
        if let Some(path) = &self.storage_local_path {
            config.storage_local_path = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.modulus_length, DEFAULT_MODULUS_LENGTH);
        assert!(config.storage_local_path.is_none());
    }

    #[test]
    fn test_update_merges_instead_of_replacing() {
        let mut config = ServiceConfig::default();

        ConfigUpdate::default().modulus_length(2048).apply(&mut config);
        ConfigUpdate::default()
            .storage_local_path("/x")
            .apply(&mut config);

        assert_eq!(config.modulus_length, 2048);
        assert_eq!(config.storage_local_path, Some(PathBuf::from("/x")));
    }

    #[test]
    fn test_empty_update_is_a_no_op() {
        let mut config = ServiceConfig::default()
            .with_modulus_length(1024)
            .with_storage_local_path("/keys");

        ConfigUpdate::default().apply(&mut config);

        assert_eq!(config.modulus_length, 1024);
        assert_eq!(config.storage_local_path, Some(PathBuf::from("/keys")));
    }
}
