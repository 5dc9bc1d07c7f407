//! Key storage abstraction.
//!
//! The service persists generated keys through a small capability
//! interface so the backend can be swapped (local filesystem by
//! default, in-memory for tests, or a remote secret store supplied by
//! the embedder).

pub mod local;
pub mod memory;

pub use local::LocalKeyStore;
pub use memory::MemoryKeyStore;

use crate::error::Result;

/// Backend for persisting key material under logical names.
pub trait KeyStore: Send + Sync {
    /// Store key material under a logical name, overwriting any
    /// previous value.
    fn put(&self, key_name: &str, material: &[u8]) -> Result<()>;

    /// Fetch key material by logical name. `Ok(None)` means the name
    /// is unknown; `Err` means the backend itself failed.
    fn get(&self, key_name: &str) -> Result<Option<Vec<u8>>>;
}
