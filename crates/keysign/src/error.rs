//! Error types for keysign operations.
//!
//! Key generation and signing fail loud: their errors propagate to the
//! caller. Verification and storage fail soft at the service layer, but
//! the strict variants surface these errors so callers can tell an
//! invalid signature apart from an unevaluable one.

use thiserror::Error;

/// Keysign result type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The crypto backend rejected the key parameters or failed outright
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Malformed private key or backend signing failure
    #[error("Signing failed: {0}")]
    Signing(String),

    /// The signature could not be evaluated (malformed key or encoding)
    #[error("Signature could not be evaluated: {0}")]
    Verification(String),

    /// A storage backend read or write failed
    #[error("Key storage failed: {0}")]
    Storage(String),
}
