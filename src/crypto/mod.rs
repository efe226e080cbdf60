//! Cryptographic utilities for the ledger
//!
//! This module provides:
//! - SHA-256 hashing and difficulty checks
//! - ECDSA key management and signing (secp256k1)

pub mod hash;
pub mod keys;

pub use hash::{meets_difficulty, sha256, sha256_hex, DIGEST_SIZE};
pub use keys::{create_private_key, get_public_key, sign, verify, KeyError};
