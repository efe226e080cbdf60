//! Core ledger components
//!
//! This module contains the data the validators inspect:
//! - Transactions (signed transfers between public keys)
//! - Blocks (sealed by a deterministic builder)
//! - Blockchain (ordered blocks starting at genesis)
//! - Tampering helper for demonstrations

pub mod block;
pub mod blockchain;
pub mod tamper;
pub mod transaction;

pub use block::{Block, BlockBuilder, BlockSeal, ProofOfWork, DEFAULT_DIFFICULTY, MAX_DIFFICULTY};
pub use blockchain::{Blockchain, ChainConfig};
pub use tamper::break_chain;
pub use transaction::Transaction;
