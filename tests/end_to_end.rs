//! End-to-end tamper detection across all three validation tiers

use signed_ledger::core::{Block, Blockchain, ProofOfWork, Transaction};
use signed_ledger::crypto::{create_private_key, get_public_key, sign, verify};
use signed_ledger::validation::{is_valid_block, is_valid_chain, is_valid_transaction};

const DIFFICULTY: u32 = 6;

fn build_chain(pow: &ProofOfWork) -> Blockchain {
    let alice = create_private_key();
    let bob = create_private_key();
    let alice_public = get_public_key(&alice).unwrap();
    let bob_public = get_public_key(&bob).unwrap();

    let mut blockchain = Blockchain::new(pow);
    blockchain.add_block(
        vec![
            Transaction::new(&alice, &bob_public, 40).unwrap(),
            Transaction::new(&bob, &alice_public, 2).unwrap(),
        ],
        pow,
    );
    blockchain.add_block(vec![Transaction::new(&bob, &alice_public, 7).unwrap()], pow);
    blockchain
}

#[test]
fn three_block_chain_detects_flipped_hash_bit() {
    let pow = ProofOfWork::new(DIFFICULTY);
    let mut blockchain = build_chain(&pow);
    assert_eq!(blockchain.len(), 3);
    assert!(is_valid_chain(&blockchain, &pow));

    let mut hash = hex::decode(&blockchain.blocks[2].hash).unwrap();
    hash[0] ^= 0x80;
    blockchain.blocks[2].hash = hex::encode(hash);

    assert!(!is_valid_chain(&blockchain, &pow));
}

#[test]
fn interior_link_change_is_caught_at_chain_level() {
    let pow = ProofOfWork::new(DIFFICULTY);
    let mut blockchain = build_chain(&pow);

    let relinked = Block::new(
        blockchain.blocks[1].transactions.clone(),
        Some("0".repeat(64)),
        &pow,
    );
    blockchain.blocks[1] = relinked;

    assert!(blockchain.blocks.iter().all(|b| is_valid_block(b, &pow)));
    assert!(!is_valid_chain(&blockchain, &pow));
}

#[test]
fn tampered_amount_invalidates_every_tier() {
    let pow = ProofOfWork::new(DIFFICULTY);
    let mut blockchain = build_chain(&pow);
    blockchain.blocks[1].transactions[1].amount += 1;

    assert!(!is_valid_transaction(&blockchain.blocks[1].transactions[1]));
    assert!(!is_valid_block(&blockchain.blocks[1], &pow));
    assert!(!is_valid_chain(&blockchain, &pow));
}

#[test]
fn signature_properties_hold_for_many_keys() {
    for i in 0..16 {
        let k1 = create_private_key();
        let k2 = create_private_key();
        let p1 = get_public_key(&k1).unwrap();
        let p2 = get_public_key(&k2).unwrap();
        let m1 = format!("message {}", i);
        let m2 = format!("message {}!", i);

        let sig = sign(&k1, &m1).unwrap();
        assert!(verify(&p1, &m1, &sig).unwrap());
        assert!(!verify(&p1, &m2, &sig).unwrap());
        assert!(!verify(&p2, &m1, &sig).unwrap());
    }
}
