//! Block validation

use super::transaction::validate_transaction;
use super::ValidationError;
use crate::core::{Block, BlockBuilder};
use log::debug;

/// Check every transaction in a block, then recompute its seal.
///
/// `hash` and `nonce` are never trusted: the builder recomputes both from
/// the block's transactions and parent hash and they must match exactly.
pub fn validate_block<B: BlockBuilder + ?Sized>(
    block: &Block,
    builder: &B,
) -> Result<(), ValidationError> {
    for (index, tx) in block.transactions.iter().enumerate() {
        validate_transaction(tx).map_err(|e| ValidationError::InvalidTransaction {
            index,
            source: Box::new(e),
        })?;
    }

    let reference = builder.build(&block.transactions, block.previous_hash.as_deref());

    if reference.hash != block.hash {
        return Err(ValidationError::HashMismatch {
            expected: reference.hash,
            actual: block.hash.clone(),
        });
    }

    if reference.nonce != block.nonce {
        return Err(ValidationError::NonceMismatch {
            expected: reference.nonce,
            actual: block.nonce,
        });
    }

    Ok(())
}

/// Whether a block is valid under `builder`
pub fn is_valid_block<B: BlockBuilder + ?Sized>(block: &Block, builder: &B) -> bool {
    match validate_block(block, builder) {
        Ok(()) => true,
        Err(e) => {
            debug!("Rejected block {}: {}", block.hash, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BlockSeal, ProofOfWork, Transaction};
    use crate::crypto::{create_private_key, get_public_key, sha256_hex};

    /// Cheap deterministic builder: hashes the parent and signatures, nonce 7
    struct StubBuilder;

    impl BlockBuilder for StubBuilder {
        fn build(&self, transactions: &[Transaction], previous_hash: Option<&str>) -> BlockSeal {
            let mut data = previous_hash.unwrap_or("genesis").to_string();
            for tx in transactions {
                data.push_str(&tx.signing_message());
                data.push_str(&tx.signature);
            }
            BlockSeal {
                hash: sha256_hex(data.as_bytes()),
                nonce: 7,
            }
        }
    }

    fn signed_txs(count: usize) -> Vec<Transaction> {
        (0..count)
            .map(|i| {
                let key = create_private_key();
                let recipient = get_public_key(&create_private_key()).unwrap();
                Transaction::new(&key, &recipient, i as i64 * 10).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_valid_block() {
        let block = Block::new(signed_txs(3), Some("parent".to_string()), &StubBuilder);
        assert!(is_valid_block(&block, &StubBuilder));
    }

    #[test]
    fn test_valid_block_with_proof_of_work() {
        let pow = ProofOfWork::new(6);
        let block = Block::new(signed_txs(2), Some("parent".to_string()), &pow);
        assert!(is_valid_block(&block, &pow));
        assert!(is_valid_block(&Block::genesis(&pow), &pow));
    }

    #[test]
    fn test_tampered_transaction_with_stale_seal() {
        let mut block = Block::new(signed_txs(3), None, &StubBuilder);
        block.transactions[1].amount += 5;

        assert!(matches!(
            validate_block(&block, &StubBuilder),
            Err(ValidationError::InvalidTransaction { index: 1, .. })
        ));
        assert!(!is_valid_block(&block, &StubBuilder));
    }

    #[test]
    fn test_replaced_hash() {
        let mut block = Block::new(signed_txs(1), None, &StubBuilder);
        block.hash = "a".repeat(64);

        assert!(matches!(
            validate_block(&block, &StubBuilder),
            Err(ValidationError::HashMismatch { .. })
        ));
    }

    #[test]
    fn test_replaced_nonce() {
        let mut block = Block::new(signed_txs(1), None, &StubBuilder);
        block.nonce = 8;

        assert_eq!(
            validate_block(&block, &StubBuilder),
            Err(ValidationError::NonceMismatch {
                expected: 7,
                actual: 8
            })
        );
    }

    #[test]
    fn test_changed_previous_hash() {
        let mut block = Block::new(signed_txs(1), Some("parent".to_string()), &StubBuilder);
        block.previous_hash = Some("other".to_string());
        assert!(!is_valid_block(&block, &StubBuilder));
    }

    #[test]
    fn test_missing_parent_replaced_with_empty() {
        let pow = ProofOfWork::new(4);
        let mut block = Block::new(vec![], None, &pow);
        assert!(is_valid_block(&block, &pow));

        block.previous_hash = Some(String::new());
        assert!(matches!(
            validate_block(&block, &pow),
            Err(ValidationError::HashMismatch { .. })
        ));
    }

    #[test]
    fn test_removed_transaction() {
        let mut block = Block::new(signed_txs(2), None, &StubBuilder);
        block.transactions.pop();
        assert!(!is_valid_block(&block, &StubBuilder));
    }
}
