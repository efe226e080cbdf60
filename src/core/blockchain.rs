//! Blockchain implementation
//!
//! An ordered list of blocks starting with genesis. Construction goes
//! through a [`BlockBuilder`]; integrity checks live in
//! [`crate::validation`].

use crate::core::block::{Block, BlockBuilder, ProofOfWork, DEFAULT_DIFFICULTY};
use crate::core::transaction::Transaction;
use serde::{Deserialize, Serialize};

/// Chain configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    /// Proof-of-work difficulty (leading zero bits)
    pub difficulty: u32,
}

impl ChainConfig {
    /// The proof-of-work builder for this configuration
    pub fn builder(&self) -> ProofOfWork {
        ProofOfWork::new(self.difficulty)
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

/// The chain of blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blockchain {
    pub blocks: Vec<Block>,
}

impl Blockchain {
    /// Create a new blockchain with a genesis block
    pub fn new<B: BlockBuilder + ?Sized>(builder: &B) -> Self {
        Self {
            blocks: vec![Block::genesis(builder)],
        }
    }

    /// Get the latest block, if any
    pub fn latest_block(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Get blockchain height (genesis is height 0)
    pub fn height(&self) -> u64 {
        self.blocks.len().saturating_sub(1) as u64
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Seal a block on top of the current tip and append it
    pub fn add_block<B: BlockBuilder + ?Sized>(
        &mut self,
        transactions: Vec<Transaction>,
        builder: &B,
    ) -> &Block {
        let previous_hash = self.latest_block().map(|block| block.hash.clone());
        let block = Block::new(transactions, previous_hash, builder);
        let height = self.blocks.len();
        self.blocks.push(block);
        &self.blocks[height]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_blockchain() {
        let blockchain = Blockchain::new(&ProofOfWork::new(4));
        assert_eq!(blockchain.len(), 1);
        assert_eq!(blockchain.height(), 0);
        assert!(blockchain.blocks[0].is_genesis());
    }

    #[test]
    fn test_add_block_links_to_tip() {
        let pow = ProofOfWork::new(4);
        let mut blockchain = Blockchain::new(&pow);
        let genesis_hash = blockchain.blocks[0].hash.clone();

        let block = blockchain.add_block(vec![], &pow);
        assert_eq!(block.previous_hash.as_deref(), Some(genesis_hash.as_str()));

        let tip_hash = blockchain.add_block(vec![], &pow).hash.clone();
        assert_eq!(blockchain.height(), 2);
        assert_eq!(blockchain.latest_block().map(|b| &b.hash), Some(&tip_hash));
        assert_eq!(
            blockchain.blocks[2].previous_hash.as_ref(),
            Some(&blockchain.blocks[1].hash)
        );
    }

    #[test]
    fn test_config_builder() {
        assert_eq!(ChainConfig::default().difficulty, DEFAULT_DIFFICULTY);
        assert_eq!(ChainConfig { difficulty: 3 }.builder(), ProofOfWork::new(3));
    }

    #[test]
    fn test_json_round_trip_keeps_null_genesis_parent() {
        let blockchain = Blockchain::new(&ProofOfWork::new(2));
        let json = serde_json::to_value(&blockchain).unwrap();
        assert!(json["blocks"][0]["previous_hash"].is_null());

        let back: Blockchain = serde_json::from_value(json).unwrap();
        assert_eq!(back, blockchain);
    }
}
