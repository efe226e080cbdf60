//! Block implementation for the ledger
//!
//! A block holds a list of signed transactions and a link to its parent.
//! Its `hash` and `nonce` come from a [`BlockBuilder`], which must be
//! deterministic so that validators can recompute them.

use crate::core::transaction::Transaction;
use crate::crypto::{meets_difficulty, sha256, DIGEST_SIZE};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Default mining difficulty (number of leading zero bits)
pub const DEFAULT_DIFFICULTY: u32 = 12;

/// Largest satisfiable difficulty: every bit of a SHA-256 digest
pub const MAX_DIFFICULTY: u32 = (DIGEST_SIZE * 8) as u32;

/// Result of sealing a block: the values a builder commits to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSeal {
    pub hash: String,
    pub nonce: u64,
}

/// Deterministic block constructor.
///
/// The same `(transactions, previous_hash)` must always produce the same seal.
pub trait BlockBuilder {
    fn build(&self, transactions: &[Transaction], previous_hash: Option<&str>) -> BlockSeal;
}

/// Proof-of-work builder: searches nonces upward from zero until the
/// SHA-256 of the block contents has `difficulty` leading zero bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofOfWork {
    pub difficulty: u32,
}

impl ProofOfWork {
    pub fn new(difficulty: u32) -> Self {
        Self { difficulty }
    }

    /// Bytes hashed for a given nonce. The parent is tagged so that a
    /// missing parent and an empty parent never collide.
    fn preimage(transactions: &[Transaction], previous_hash: Option<&str>) -> String {
        let mut data = match previous_hash {
            Some(hash) => format!("1{}", hash),
            None => String::from("0"),
        };
        for tx in transactions {
            data.push_str(&tx.source);
            data.push_str(&tx.recipient);
            data.push_str(&tx.amount.to_string());
            data.push_str(&tx.signature);
        }
        data
    }
}

impl Default for ProofOfWork {
    fn default() -> Self {
        Self::new(DEFAULT_DIFFICULTY)
    }
}

impl BlockBuilder for ProofOfWork {
    fn build(&self, transactions: &[Transaction], previous_hash: Option<&str>) -> BlockSeal {
        let preimage = Self::preimage(transactions, previous_hash);
        let mut nonce = 0u64;

        if self.difficulty > MAX_DIFFICULTY {
            warn!(
                "Difficulty {} exceeds {} bits, sealing without proof of work",
                self.difficulty, MAX_DIFFICULTY
            );
            return BlockSeal {
                hash: hex::encode(sha256(format!("{}{}", preimage, nonce).as_bytes())),
                nonce,
            };
        }

        loop {
            let hash = sha256(format!("{}{}", preimage, nonce).as_bytes());
            if meets_difficulty(&hash, self.difficulty) || nonce == u64::MAX {
                debug!("Sealed block after {} attempts", nonce + 1);
                return BlockSeal {
                    hash: hex::encode(hash),
                    nonce,
                };
            }
            nonce += 1;
        }
    }
}

/// A block in the chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Transactions carried by the block
    pub transactions: Vec<Transaction>,
    /// Hash of the parent block; `None` only for genesis
    pub previous_hash: Option<String>,
    /// Nonce chosen by the builder
    pub nonce: u64,
    /// Block hash (hex)
    pub hash: String,
}

impl Block {
    /// Create and seal a block
    pub fn new<B: BlockBuilder + ?Sized>(
        transactions: Vec<Transaction>,
        previous_hash: Option<String>,
        builder: &B,
    ) -> Self {
        let seal = builder.build(&transactions, previous_hash.as_deref());
        info!(
            "Sealed block {} ({} transactions, nonce {})",
            seal.hash,
            transactions.len(),
            seal.nonce
        );

        Self {
            transactions,
            previous_hash,
            nonce: seal.nonce,
            hash: seal.hash,
        }
    }

    /// Create the genesis block: no transactions and no parent
    pub fn genesis<B: BlockBuilder + ?Sized>(builder: &B) -> Self {
        Self::new(Vec::new(), None, builder)
    }

    /// Whether this block has the genesis shape
    pub fn is_genesis(&self) -> bool {
        self.transactions.is_empty() && self.previous_hash.is_none()
    }

    /// Get number of transactions in this block
    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }
}
