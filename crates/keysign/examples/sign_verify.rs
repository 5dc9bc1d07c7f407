//! A simple keysign example.
//!
//! This example demonstrates generating a key pair, signing a payload,
//! and verifying the signature.

use anyhow::Result;
use keysign::{GenerateOptions, ServiceConfig, SignatureRequest, SignatureService};
use std::env;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Create a service configuration
    let mut config = ServiceConfig::default();

    // Allow overriding the modulus length via environment variable
    if let Some(bits) = env::var("KEYSIGN_MODULUS_LENGTH")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
    {
        config.modulus_length = bits;
    }

    // Allow specifying a storage directory
    if let Ok(path) = env::var("KEYSIGN_STORAGE_PATH") {
        config.storage_local_path = Some(path.into());
    }

    println!("Starting keysign demo with configuration:");
    println!("  Modulus length: {}", config.modulus_length);
    println!("  Storage path: {:?}", config.storage_local_path);

    let service = SignatureService::with_config(config);

    println!("Generating key pair (this can take a while for 4096-bit keys)...");
    let keypair = service.generate_key_pair("demo", GenerateOptions::default())?;
    println!("{}", keypair.public_key);

    let data = "Hello, world!";
    let signature = service.sign(data, &keypair.private_key)?;
    println!("Signature (base64): {signature}");

    let request = SignatureRequest::new(data, signature);
    println!("Verified: {}", service.verify(&request, &keypair.public_key));

    Ok(())
}
