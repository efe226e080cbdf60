//! Deliberate chain tampering
//!
//! Used to demonstrate that validation catches edits made after sealing.

use crate::core::blockchain::Blockchain;
use log::warn;

/// Mutate `blockchain` so that it no longer validates.
///
/// Bumps the amount of the first transaction found. A chain with no
/// transactions gets the last bit of its tip hash flipped instead.
/// Returns `false` only for an empty chain, which is left untouched.
pub fn break_chain(blockchain: &mut Blockchain) -> bool {
    let target = blockchain
        .blocks
        .iter_mut()
        .enumerate()
        .find_map(|(index, block)| block.transactions.first_mut().map(|tx| (index, tx)));

    if let Some((index, tx)) = target {
        tx.amount = tx.amount.saturating_add(1);
        warn!("Tampered with transaction amount in block {}", index);
        return true;
    }

    match blockchain.blocks.last_mut() {
        Some(block) => {
            block.hash = flip_last_bit(&block.hash);
            warn!("Tampered with tip hash");
            true
        }
        None => false,
    }
}

/// Flip the lowest bit of the final hex digit
pub(crate) fn flip_last_bit(hash: &str) -> String {
    let mut chars: Vec<char> = hash.chars().collect();
    if let Some(last) = chars.last_mut() {
        if let Some(digit) = last.to_digit(16) {
            if let Some(flipped) = std::char::from_digit(digit ^ 1, 16) {
                *last = flipped;
            }
        }
    }
    chars.into_iter().collect()
}
