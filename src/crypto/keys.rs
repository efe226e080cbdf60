//! ECDSA key management and signing
//!
//! Keys, signatures and public keys cross this boundary as lowercase hex
//! strings. Every signature is made over the SHA-256 digest of the message,
//! never over the raw message bytes.

use rand::rngs::OsRng;
use secp256k1::constants::{COMPACT_SIGNATURE_SIZE, PUBLIC_KEY_SIZE};
use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use thiserror::Error;

use super::hash::sha256;

/// Errors raised for malformed key engine input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Invalid private key: {0}")]
    InvalidKey(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Generate a new random private key as a 64 character hex string
pub fn create_private_key() -> String {
    let secret_key = SecretKey::new(&mut OsRng);
    hex::encode(secret_key.secret_bytes())
}

/// Derive the compressed public key (66 hex characters) for a private key
pub fn get_public_key(private_key: &str) -> Result<String, KeyError> {
    let secret_key = secret_key_from_hex(private_key)?;
    let secp = Secp256k1::signing_only();
    let public_key = PublicKey::from_secret_key(&secp, &secret_key);
    Ok(hex::encode(public_key.serialize()))
}

/// Sign the SHA-256 digest of `message`, returning a 128 character hex signature.
///
/// Signing is deterministic (RFC 6979): the same key and message always give
/// the same signature.
pub fn sign(private_key: &str, message: impl AsRef<[u8]>) -> Result<String, KeyError> {
    let secret_key = secret_key_from_hex(private_key)?;
    let digest = digest_message(message.as_ref());

    let secp = Secp256k1::signing_only();
    let signature = secp.sign_ecdsa(&digest, &secret_key);
    Ok(hex::encode(signature.serialize_compact()))
}

/// Verify a hex signature over the SHA-256 digest of `message`.
///
/// Returns `Ok(false)` for any signature that does not match, including
/// decodable bytes that are not a valid point or scalar. Only input that
/// cannot be decoded to 33 (public key) or 64 (signature) bytes is an error.
pub fn verify(
    public_key: &str,
    message: impl AsRef<[u8]>,
    signature: &str,
) -> Result<bool, KeyError> {
    let key_bytes = decode_exact(public_key, PUBLIC_KEY_SIZE, "public key")?;
    let sig_bytes = decode_exact(signature, COMPACT_SIGNATURE_SIZE, "signature")?;
    let digest = digest_message(message.as_ref());

    let public_key = match PublicKey::from_slice(&key_bytes) {
        Ok(key) => key,
        Err(_) => return Ok(false),
    };
    let signature = match Signature::from_compact(&sig_bytes) {
        Ok(sig) => sig,
        Err(_) => return Ok(false),
    };

    let secp = Secp256k1::verification_only();
    Ok(secp.verify_ecdsa(&digest, &signature, &public_key).is_ok())
}

fn secret_key_from_hex(private_key: &str) -> Result<SecretKey, KeyError> {
    let bytes = hex::decode(private_key)
        .map_err(|e| KeyError::InvalidKey(format!("not valid hex: {}", e)))?;
    SecretKey::from_slice(&bytes).map_err(|e| KeyError::InvalidKey(e.to_string()))
}

fn decode_exact(value: &str, expected: usize, what: &str) -> Result<Vec<u8>, KeyError> {
    let bytes = hex::decode(value)
        .map_err(|e| KeyError::InvalidInput(format!("{} is not valid hex: {}", what, e)))?;
    if bytes.len() != expected {
        return Err(KeyError::InvalidInput(format!(
            "{} must be {} bytes, got {}",
            what,
            expected,
            bytes.len()
        )));
    }
    Ok(bytes)
}

fn digest_message(message: &[u8]) -> Message {
    Message::from_digest(sha256(message))
}
