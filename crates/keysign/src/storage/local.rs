//! Local filesystem key store.
//!
//! Writes each key as a file named after its logical name inside a
//! base directory. The directory is created on first write.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::info;

use super::KeyStore;
use crate::error::{Error, Result};

/// Default key store: one file per key under a base directory.
#[derive(Debug, Clone)]
pub struct LocalKeyStore {
    base_path: PathBuf,
}

impl LocalKeyStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl KeyStore for LocalKeyStore {
    fn put(&self, key_name: &str, material: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.base_path)
            .map_err(|e| Error::Storage(format!("failed to create {}: {e}", self.base_path.display())))?;

        let path = self.base_path.join(key_name);
        fs::write(&path, material)
            .map_err(|e| Error::Storage(format!("failed to write {}: {e}", path.display())))?;

        info!("Saved key to: {}", path.display());
        Ok(())
    }

    fn get(&self, key_name: &str) -> Result<Option<Vec<u8>>> {
        let path = self.base_path.join(key_name);
        match fs::read(&path) {
            Ok(material) => Ok(Some(material)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Storage(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }
}
