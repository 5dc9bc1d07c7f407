//! Keysign - RSA key management and digital signature service
//!
//! This library provides RSA key pair generation with PKCS#1 PEM encoding,
//! RSA-SHA256 signing and verification, and pluggable key storage backends.

pub mod config;
pub mod crypto;
pub mod error;
pub mod service;
pub mod storage;

// Re-export main types
pub use config::{ConfigUpdate, ServiceConfig};
pub use crypto::{generate_keypair, sign, sign_bytes, sign_json, try_verify, verify};
pub use crypto::{KeyPair, SignatureRequest};
pub use service::{GenerateOptions, SignatureService};
pub use storage::{KeyStore, LocalKeyStore, MemoryKeyStore};

pub use error::{Error, Result};

/// The fixed signature scheme: SHA-256 digest, PKCS#1 v1.5 padding
pub const SIGNATURE_ALGORITHM: &str = "RSA-SHA256";

/// Default RSA modulus length in bits
pub const DEFAULT_MODULUS_LENGTH: usize = 4096;
