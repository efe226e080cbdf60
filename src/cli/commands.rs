//! CLI commands for the ledger
//!
//! Implements all command handlers for the CLI interface.

use crate::core::{break_chain, Blockchain, ChainConfig, Transaction};
use crate::crypto::{create_private_key, get_public_key, sign, verify};
use crate::validation::validate_chain;
use std::fs;
use std::path::Path;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Generate a new key pair
pub fn cmd_keygen() -> CliResult<()> {
    let private_key = create_private_key();
    let public_key = get_public_key(&private_key)?;

    println!("🔐 New key pair created!");
    println!("   🔑 Private key: {}", private_key);
    println!("   📍 Public key:  {}", public_key);
    println!("\n   ⚠️  IMPORTANT: Keep the private key secret!");

    Ok(())
}

/// Derive the public key for a private key
pub fn cmd_pubkey(private_key: &str) -> CliResult<()> {
    println!("{}", get_public_key(private_key)?);
    Ok(())
}

/// Sign a message
pub fn cmd_sign(private_key: &str, message: &str) -> CliResult<()> {
    println!("{}", sign(private_key, message)?);
    Ok(())
}

/// Verify a signature; returns whether it matched
pub fn cmd_verify(public_key: &str, message: &str, signature: &str) -> CliResult<bool> {
    let valid = verify(public_key, message, signature)?;
    if valid {
        println!("✅ Signature is valid");
    } else {
        println!("❌ Signature does NOT match");
    }
    Ok(valid)
}

/// Load a JSON-encoded blockchain from disk
pub fn load_chain(path: &Path) -> CliResult<Blockchain> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Validate a blockchain file; returns whether it was valid
pub fn cmd_validate(path: &Path, config: &ChainConfig) -> CliResult<bool> {
    let blockchain = load_chain(path)?;
    println!("🔍 Validating blockchain from {:?}...", path);

    match validate_chain(&blockchain, &config.builder()) {
        Ok(()) => {
            println!("✅ Blockchain is valid!");
            println!("   {} blocks verified", blockchain.len());
            Ok(true)
        }
        Err(e) => {
            println!("❌ Blockchain validation FAILED!");
            println!("   {}", e);
            Ok(false)
        }
    }
}

/// Build a small chain, validate it, tamper with it and validate again.
///
/// Returns the untouched chain.
pub fn cmd_demo(config: &ChainConfig) -> CliResult<Blockchain> {
    let builder = config.builder();
    let alice = create_private_key();
    let bob = create_private_key();
    let alice_public = get_public_key(&alice)?;
    let bob_public = get_public_key(&bob)?;

    println!("⛓️  Building demo chain (difficulty {})", config.difficulty);
    let mut blockchain = Blockchain::new(&builder);
    blockchain.add_block(
        vec![
            Transaction::new(&alice, &bob_public, 25)?,
            Transaction::new(&bob, &alice_public, 5)?,
        ],
        &builder,
    );
    blockchain.add_block(vec![Transaction::new(&alice, &bob_public, 10)?], &builder);

    for (height, block) in blockchain.blocks.iter().enumerate() {
        println!(
            "   #{} | {} | nonce {} | {} tx",
            height,
            &block.hash[..16],
            block.nonce,
            block.tx_count()
        );
    }

    report("Original chain", &blockchain, config);

    let mut tampered = blockchain.clone();
    break_chain(&mut tampered);
    report("Tampered chain", &tampered, config);

    println!("\n{}", serde_json::to_string_pretty(&blockchain)?);
    Ok(blockchain)
}

fn report(label: &str, blockchain: &Blockchain, config: &ChainConfig) {
    match validate_chain(blockchain, &config.builder()) {
        Ok(()) => println!("✅ {}: valid", label),
        Err(e) => println!("❌ {}: invalid ({})", label, e),
    }
}
