//! RSA-SHA256 signing operations.
//!
//! Generic byte-level and JSON-level signing over a PKCS#1 PEM private
//! key. The scheme is fixed: SHA-256 digest, PKCS#1 v1.5 padding,
//! base64 standard-alphabet output.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::RsaPrivateKey;
use sha2::Sha256;
use tracing::error;

use crate::error::{Error, Result};

/// Sign raw bytes with a PKCS#1 PEM private key. Returns a base64 signature.
pub fn sign_bytes(data: &[u8], private_key_pem: &str) -> Result<String> {
    let private_key = RsaPrivateKey::from_pkcs1_pem(private_key_pem).map_err(|e| {
        error!("Failed to create signature: invalid private key: {e}");
        Error::Signing(format!("invalid private key: {e}"))
    })?;

    let signing_key = SigningKey::<Sha256>::new(private_key);
    let signature = signing_key.try_sign(data).map_err(|e| {
        error!("Failed to create signature: {e}");
        Error::Signing(e.to_string())
    })?;

    Ok(BASE64.encode(signature.to_bytes()))
}

/// Sign a string payload (UTF-8 bytes). Returns a base64 signature.
pub fn sign(data: &str, private_key_pem: &str) -> Result<String> {
    sign_bytes(data.as_bytes(), private_key_pem)
}

/// Sign a JSON-serializable value. Serializes to canonical JSON bytes,
/// then signs those.
pub fn sign_json<T: serde::Serialize>(value: &T, private_key_pem: &str) -> Result<String> {
    let bytes = serde_json::to_vec(value).map_err(|e| Error::Signing(e.to_string()))?;
    sign_bytes(&bytes, private_key_pem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::generate_keypair;
    use crate::crypto::verification::{verify, SignatureRequest};

    #[test]
    fn test_sign_produces_base64() {
        let keypair = generate_keypair(512).unwrap();
        let signature = sign("hello world", &keypair.private_key).unwrap();

        assert!(!signature.is_empty());
        assert!(BASE64.decode(&signature).is_ok());
    }

    #[test]
    fn test_sign_verifies() {
        let keypair = generate_keypair(512).unwrap();
        let data = "test message";
        let signature = sign(data, &keypair.private_key).unwrap();

        let request = SignatureRequest::new(data, signature);
        assert!(verify(&request, &keypair.public_key));
    }

    #[test]
    fn test_sign_json() {
        let keypair = generate_keypair(512).unwrap();
        let value = serde_json::json!({"key": "value", "num": 42});
        let signature = sign_json(&value, &keypair.private_key).unwrap();

        // Verify against the same JSON serialization
        let bytes = serde_json::to_vec(&value).unwrap();
        let request = SignatureRequest::new(String::from_utf8(bytes).unwrap(), signature);
        assert!(verify(&request, &keypair.public_key));
    }

    #[test]
    fn test_malformed_private_key_fails_loud() {
        let result = sign("data", "not a pem key");
        assert!(matches!(result, Err(Error::Signing(_))));
    }

    #[test]
    fn test_public_key_is_not_a_signing_key() {
        let keypair = generate_keypair(512).unwrap();
        let result = sign("data", &keypair.public_key);
        assert!(matches!(result, Err(Error::Signing(_))));
    }
}
