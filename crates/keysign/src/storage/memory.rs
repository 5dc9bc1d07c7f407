//! In-memory key store for tests and embedders without a filesystem.

use std::collections::HashMap;
use std::sync::RwLock;

use super::KeyStore;
use crate::error::{Error, Result};

/// Thread-safe in-memory key store.
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    keys: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyStore for MemoryKeyStore {
    fn put(&self, key_name: &str, material: &[u8]) -> Result<()> {
        let mut keys = self
            .keys
            .write()
            .map_err(|_| Error::Storage("key store lock poisoned".to_string()))?;
        keys.insert(key_name.to_string(), material.to_vec());
        Ok(())
    }

    fn get(&self, key_name: &str) -> Result<Option<Vec<u8>>> {
        let keys = self
            .keys
            .read()
            .map_err(|_| Error::Storage("key store lock poisoned".to_string()))?;
        Ok(keys.get(key_name).cloned())
    }
}
