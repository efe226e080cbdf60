//! Hashing utilities
//!
//! SHA-256 is used both for message digests (before signing) and for
//! block seals (proof of work).

use sha2::{Digest, Sha256};

/// Size of a SHA-256 digest in bytes
pub const DIGEST_SIZE: usize = 32;

/// Computes SHA-256 hash of the input data
pub fn sha256(data: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes SHA-256 hash and returns it as a lowercase hex string
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Checks if a hash meets the difficulty target
/// The hash must have `difficulty` leading zero bits
pub fn meets_difficulty(hash: &[u8], difficulty: u32) -> bool {
    let required_zeros = difficulty as usize / 8;
    let remaining_bits = difficulty as usize % 8;

    if required_zeros > hash.len() {
        return false;
    }

    // Check full zero bytes
    if hash.iter().take(required_zeros).any(|byte| *byte != 0) {
        return false;
    }

    // Check remaining bits
    if remaining_bits > 0 {
        match hash.get(required_zeros) {
            Some(byte) => {
                let mask = 0xFFu8 << (8 - remaining_bits);
                if byte & mask != 0 {
                    return false;
                }
            }
            None => return false,
        }
    }

    true
}
