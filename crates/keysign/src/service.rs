//! The signature service facade.
//!
//! `SignatureService` ties the pieces together: it holds the mutable
//! configuration behind a lock, resolves the key store (injected, or
//! the local filesystem default built from the current config), and
//! exposes key generation, signing, verification, and the storage
//! pass-throughs.
//!
//! Error asymmetry, deliberately preserved: key generation and signing
//! fail loud; verification and storage fail soft. Storage failures
//! during key generation are logged and swallowed, the generated pair
//! is still returned.

use std::sync::{Arc, RwLock};

use tracing::{error, info};

use crate::config::{ConfigUpdate, ServiceConfig};
use crate::crypto::keys::KeyPair;
use crate::crypto::verification::SignatureRequest;
use crate::crypto::{signing, verification};
use crate::error::{Error, Result};
use crate::storage::{KeyStore, LocalKeyStore};

/// Per-call overrides for [`SignatureService::generate_key_pair`].
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Modulus length override; falls back to the service configuration
    pub modulus_length: Option<usize>,
}

impl GenerateOptions {
    pub fn modulus_length(mut self, bits: usize) -> Self {
        self.modulus_length = Some(bits);
        self
    }
}

/// RSA key generation, signing, and verification over a pluggable key store.
pub struct SignatureService {
    config: RwLock<ServiceConfig>,
    store: Option<Arc<dyn KeyStore>>,
}

impl SignatureService {
    /// Create a service with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::default())
    }

    /// Create a service with the given configuration, using the local
    /// filesystem store rooted at `config.storage_local_path`.
    pub fn with_config(config: ServiceConfig) -> Self {
        Self {
            config: RwLock::new(config),
            store: None,
        }
    }

    /// Create a service with a custom key store backend. The configured
    /// `storage_local_path` is ignored in favor of the injected store.
    pub fn with_store(config: ServiceConfig, store: Arc<dyn KeyStore>) -> Self {
        Self {
            config: RwLock::new(config),
            store: Some(store),
        }
    }

    /// Merge a partial configuration update into the current config.
    ///
    /// Fields not set in `update` keep their previous values. Each merge
    /// is atomic with respect to concurrent operations.
    pub fn configure(&self, update: ConfigUpdate) {
        let mut config = self
            .config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        update.apply(&mut config);
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> ServiceConfig {
        self.config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    // Injected store wins; otherwise a local store bound to the current
    // configured path, so reconfiguring the path takes effect on the
    // next call. None when nothing is configured at all.
    fn resolve_store(&self) -> Option<Arc<dyn KeyStore>> {
        if let Some(store) = &self.store {
            return Some(Arc::clone(store));
        }
        self.config()
            .storage_local_path
            .map(|path| Arc::new(LocalKeyStore::new(path)) as Arc<dyn KeyStore>)
    }

    /// Generate an RSA key pair and persist both halves under
    /// `"{key_name}_public"` and `"{key_name}_private"`.
    ///
    /// Persistence is best-effort: a storage failure is logged and the
    /// pair is still returned. A backend generation failure propagates
    /// as [`Error::KeyGeneration`].
    pub fn generate_key_pair(&self, key_name: &str, options: GenerateOptions) -> Result<KeyPair> {
        let modulus_length = options
            .modulus_length
            .unwrap_or_else(|| self.config().modulus_length);

        let keypair = KeyPair::generate(modulus_length).map_err(|e| {
            error!("Failed to generate keys: {e}");
            e
        })?;

        self.save_to_storage(&format!("{key_name}_public"), keypair.public_key.as_bytes());
        self.save_to_storage(&format!("{key_name}_private"), keypair.private_key.as_bytes());

        Ok(keypair)
    }

    /// Load a key pair from storage by name, or generate and persist a
    /// new one when either half is missing.
    pub fn load_or_generate(&self, key_name: &str, options: GenerateOptions) -> Result<KeyPair> {
        let public = self.get_from_storage(&format!("{key_name}_public"));
        let private = self.get_from_storage(&format!("{key_name}_private"));

        if let (Some(public), Some(private)) = (public, private) {
            info!("Loaded existing key pair: {key_name}");
            return Ok(KeyPair {
                public_key: String::from_utf8(public)
                    .map_err(|e| Error::Storage(format!("stored public key is not UTF-8: {e}")))?,
                private_key: String::from_utf8(private)
                    .map_err(|e| Error::Storage(format!("stored private key is not UTF-8: {e}")))?,
            });
        }

        info!("Generating new key pair: {key_name}");
        self.generate_key_pair(key_name, options)
    }

    /// Sign a string payload with a PKCS#1 PEM private key.
    /// Returns a base64 signature.
    pub fn sign(&self, data: &str, private_key_pem: &str) -> Result<String> {
        signing::sign(data, private_key_pem)
    }

    /// Sign a JSON-serializable value with a PKCS#1 PEM private key.
    pub fn sign_json<T: serde::Serialize>(
        &self,
        value: &T,
        private_key_pem: &str,
    ) -> Result<String> {
        signing::sign_json(value, private_key_pem)
    }

    /// Verify a signature, collapsing evaluation errors into `false`.
    pub fn verify(&self, request: &SignatureRequest, public_key_pem: &str) -> bool {
        verification::verify(request, public_key_pem)
    }

    /// Verify a signature, distinguishing "invalid" (`Ok(false)`) from
    /// "could not be evaluated" (`Err`).
    pub fn try_verify(&self, request: &SignatureRequest, public_key_pem: &str) -> Result<bool> {
        verification::try_verify(request, public_key_pem)
    }

    /// Best-effort write to the key store. Failures are logged, never
    /// propagated.
    pub fn save_to_storage(&self, key_name: &str, material: &[u8]) {
        let Some(store) = self.resolve_store() else {
            error!("Failed to save key {key_name}: no storage configured");
            return;
        };
        if let Err(e) = store.put(key_name, material) {
            error!("Failed to save key {key_name}: {e}");
        }
    }

    /// Read from the key store. Returns `None` for missing keys and for
    /// backend failures, which are logged.
    pub fn get_from_storage(&self, key_name: &str) -> Option<Vec<u8>> {
        let Some(store) = self.resolve_store() else {
            error!("Failed to read key {key_name}: no storage configured");
            return None;
        };
        match store.get(key_name) {
            Ok(material) => material,
            Err(e) => {
                error!("Failed to read key {key_name}: {e}");
                None
            }
        }
    }
}

impl Default for SignatureService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeyStore;

    fn test_service() -> SignatureService {
        SignatureService::with_store(
            ServiceConfig::default().with_modulus_length(512),
            Arc::new(MemoryKeyStore::new()),
        )
    }

    #[test]
    fn test_generate_persists_both_halves() {
        let service = test_service();
        let keypair = service
            .generate_key_pair("node", GenerateOptions::default())
            .unwrap();

        assert_eq!(
            service.get_from_storage("node_public"),
            Some(keypair.public_key.into_bytes())
        );
        assert_eq!(
            service.get_from_storage("node_private"),
            Some(keypair.private_key.into_bytes())
        );
    }

    #[test]
    fn test_options_override_config() {
        let service = test_service();
        let keypair = service
            .generate_key_pair("node", GenerateOptions::default().modulus_length(1024))
            .unwrap();

        // A 1024-bit PKCS#1 private key PEM is visibly longer than a 512-bit one
        let baseline = service
            .generate_key_pair("small", GenerateOptions::default())
            .unwrap();
        assert!(keypair.private_key.len() > baseline.private_key.len());
    }

    #[test]
    fn test_generation_survives_missing_storage() {
        // No store injected, no path configured: persistence fails soft
        let service = SignatureService::with_config(ServiceConfig::default().with_modulus_length(512));
        let keypair = service
            .generate_key_pair("orphan", GenerateOptions::default())
            .unwrap();

        assert!(!keypair.public_key.is_empty());
        assert_eq!(service.get_from_storage("orphan_public"), None);
    }

    #[test]
    fn test_configure_merges() {
        let service = test_service();
        service.configure(ConfigUpdate::default().modulus_length(2048));
        service.configure(ConfigUpdate::default().storage_local_path("/x"));

        let config = service.config();
        assert_eq!(config.modulus_length, 2048);
        assert_eq!(
            config.storage_local_path,
            Some(std::path::PathBuf::from("/x"))
        );
    }

    #[test]
    fn test_sign_and_verify_through_service() {
        let service = test_service();
        let keypair = service
            .generate_key_pair("signer", GenerateOptions::default())
            .unwrap();

        let signature = service.sign("payload", &keypair.private_key).unwrap();
        let request = SignatureRequest::new("payload", signature);

        assert!(service.verify(&request, &keypair.public_key));
        assert!(service.try_verify(&request, &keypair.public_key).unwrap());
    }

    #[test]
    fn test_load_or_generate_is_stable() {
        let service = test_service();
        let first = service
            .load_or_generate("stable", GenerateOptions::default())
            .unwrap();
        let second = service
            .load_or_generate("stable", GenerateOptions::default())
            .unwrap();

        assert_eq!(first.public_key, second.public_key);
        assert_eq!(first.private_key, second.private_key);
    }
}
