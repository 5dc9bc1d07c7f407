//! RSA-SHA256 signature verification.
//!
//! Two entry points with different error contracts:
//! - [`try_verify`] is strict: `Ok(false)` means the signature does not
//!   match, `Err` means the inputs could not be evaluated at all
//!   (malformed PEM, bad base64).
//! - [`verify`] is fail-soft: any evaluation error is logged and
//!   collapsed into `false`, matching the historical wrapper contract.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::signature::Verifier;
use rsa::RsaPublicKey;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::warn;

use crate::error::{Error, Result};

/// A payload-plus-signature pair submitted for verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureRequest {
    /// The exact original payload string
    pub data: String,
    /// Base64 signature previously produced by [`sign`](crate::sign)
    pub signature: String,
}

impl SignatureRequest {
    pub fn new(data: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            signature: signature.into(),
        }
    }
}

/// Verify a signature, distinguishing "invalid" from "unevaluable".
///
/// Returns `Ok(true)` if the signature is valid for exactly this data
/// and key, `Ok(false)` if it does not match (wrong data, wrong key,
/// tampered or truncated signature), or `Err` when the public key or
/// the base64 encoding is malformed.
pub fn try_verify(request: &SignatureRequest, public_key_pem: &str) -> Result<bool> {
    let public_key = RsaPublicKey::from_pkcs1_pem(public_key_pem)
        .map_err(|e| Error::Verification(format!("invalid public key: {e}")))?;

    let signature_bytes = BASE64
        .decode(&request.signature)
        .map_err(|e| Error::Verification(format!("invalid signature encoding: {e}")))?;

    // A signature of the wrong length can never match; not an input error
    let signature = match Signature::try_from(signature_bytes.as_slice()) {
        Ok(signature) => signature,
        Err(_) => return Ok(false),
    };

    let verifying_key = VerifyingKey::<Sha256>::new(public_key);
    Ok(verifying_key
        .verify(request.data.as_bytes(), &signature)
        .is_ok())
}

/// Verify a signature, collapsing evaluation errors into `false`.
pub fn verify(request: &SignatureRequest, public_key_pem: &str) -> bool {
    match try_verify(request, public_key_pem) {
        Ok(valid) => valid,
        Err(e) => {
            warn!("Failed to verify signature: {e}");
            false
        }
    }
}
