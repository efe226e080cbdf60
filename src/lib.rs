//! Signed Ledger: signing and tamper detection for a minimal blockchain
//!
//! This crate provides:
//! - secp256k1 key generation, ECDSA signing and verification over SHA-256 digests
//! - Signed transactions, blocks sealed by a deterministic builder, and chains
//! - A three-tier validator for transactions, blocks and whole chains
//!
//! # Example
//!
//! ```rust
//! use signed_ledger::core::{Blockchain, ProofOfWork, Transaction};
//! use signed_ledger::crypto::{create_private_key, get_public_key};
//! use signed_ledger::validation::is_valid_chain;
//!
//! let pow = ProofOfWork::new(8);
//! let alice = create_private_key();
//! let bob = get_public_key(&create_private_key()).unwrap();
//!
//! let mut blockchain = Blockchain::new(&pow);
//! let tx = Transaction::new(&alice, &bob, 10).unwrap();
//! blockchain.add_block(vec![tx], &pow);
//! assert!(is_valid_chain(&blockchain, &pow));
//!
//! blockchain.blocks[1].transactions[0].amount = 1_000;
//! assert!(!is_valid_chain(&blockchain, &pow));
//! ```

pub mod cli;
pub mod core;
pub mod crypto;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    Block, BlockBuilder, BlockSeal, Blockchain, ChainConfig, ProofOfWork, Transaction,
    DEFAULT_DIFFICULTY,
};
pub use crate::crypto::{create_private_key, get_public_key, sign, verify, KeyError};
pub use crate::validation::{is_valid_block, is_valid_chain, is_valid_transaction, ValidationError};
