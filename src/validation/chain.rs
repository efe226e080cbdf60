//! Chain validation

use super::block::validate_block;
use super::ValidationError;
use crate::core::{BlockBuilder, Blockchain};
use log::debug;

/// Check genesis shape, every block, and every parent link, in that order.
///
/// The chain is accepted or rejected as a whole.
pub fn validate_chain<B: BlockBuilder + ?Sized>(
    blockchain: &Blockchain,
    builder: &B,
) -> Result<(), ValidationError> {
    let genesis = blockchain
        .blocks
        .first()
        .ok_or(ValidationError::MissingGenesis)?;
    if !genesis.is_genesis() {
        return Err(ValidationError::InvalidGenesis);
    }

    for (height, block) in blockchain.blocks.iter().enumerate() {
        validate_block(block, builder).map_err(|e| ValidationError::InvalidBlock {
            height,
            source: Box::new(e),
        })?;
    }

    for (offset, pair) in blockchain.blocks.windows(2).enumerate() {
        if pair[1].previous_hash.as_deref() != Some(pair[0].hash.as_str()) {
            return Err(ValidationError::BrokenLink { height: offset + 1 });
        }
    }

    Ok(())
}

/// Whether an entire chain is valid under `builder`
pub fn is_valid_chain<B: BlockBuilder + ?Sized>(blockchain: &Blockchain, builder: &B) -> bool {
    match validate_chain(blockchain, builder) {
        Ok(()) => true,
        Err(e) => {
            debug!("Rejected chain of {} blocks: {}", blockchain.len(), e);
            false
        }
    }
}
