//! Cryptographic operations for keysign.
//!
//! This module is the single source of truth for all crypto in the crate:
//! - RSA key pair generation with PKCS#1 PEM encoding
//! - RSA-SHA256 signing (PKCS#1 v1.5 padding, base64 output)
//! - Signature verification, strict and fail-soft

pub mod keys;
pub mod signing;
pub mod verification;

pub use keys::{generate_keypair, KeyPair};
pub use signing::{sign, sign_bytes, sign_json};
pub use verification::{try_verify, verify, SignatureRequest};
