//! Integrity validation
//!
//! Three tiers, each a pure classifier:
//! - transactions (amount and signature)
//! - blocks (transactions plus recomputed hash and nonce)
//! - chains (genesis shape, every block, and parent links)
//!
//! Every `validate_*` function reports why data was rejected; the matching
//! `is_valid_*` function folds that into a plain `bool` and never fails.

pub mod block;
pub mod chain;
pub mod transaction;

use thiserror::Error;

pub use block::{is_valid_block, validate_block};
pub use chain::{is_valid_chain, validate_chain};
pub use transaction::{is_valid_transaction, validate_transaction};

/// Reasons for rejecting a transaction, block or chain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Negative amount: {0}")]
    NegativeAmount(i64),
    #[error("Signature does not match transaction")]
    BadSignature,
    #[error("Malformed transaction: {0}")]
    Malformed(#[from] crate::crypto::KeyError),
    #[error("Invalid transaction at index {index}: {source}")]
    InvalidTransaction {
        index: usize,
        source: Box<ValidationError>,
    },
    #[error("Hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },
    #[error("Nonce mismatch: expected {expected}, got {actual}")]
    NonceMismatch { expected: u64, actual: u64 },
    #[error("Missing genesis block")]
    MissingGenesis,
    #[error("Genesis block must have no transactions and no previous hash")]
    InvalidGenesis,
    #[error("Invalid block at height {height}: {source}")]
    InvalidBlock {
        height: usize,
        source: Box<ValidationError>,
    },
    #[error("Block at height {height} does not link to its predecessor")]
    BrokenLink { height: usize },
}
