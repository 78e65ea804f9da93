//! Shared builders for the integration suites.

#![allow(dead_code)]

use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};
use utxo_ledger::{Block, Input, OutPoint, Output, Parent, Transaction};

/// Deterministic keypair: the secret key is `[seed; 32]`, the credential is
/// the serialized compressed public key.
pub fn keypair(seed: u8) -> (SecretKey, Vec<u8>) {
    let secp = Secp256k1::new();
    let sk = SecretKey::from_slice(&[seed; 32]).unwrap();
    let pk = PublicKey::from_secret_key(&secp, &sk);
    (sk, pk.serialize().to_vec())
}

pub fn sign_input(tx: &mut Transaction, index: usize, sk: &SecretKey) {
    let secp = Secp256k1::new();
    let digest = Sha256::digest(tx.signing_payload(index));
    let msg = Message::from_digest_slice(&digest).unwrap();
    let sig = secp.sign_ecdsa(&msg, sk).serialize_der().to_vec();
    tx.inputs[index].signature = Some(sig);
}

pub fn output(value: i64, owner: &[u8]) -> Output {
    Output { value, owner: owner.to_vec() }
}

pub fn coinbase(outputs: Vec<Output>) -> Transaction {
    Transaction { inputs: vec![], outputs }
}

/// A single-input transaction spending `prevout`, signed by `sk`.
pub fn spend(prevout: OutPoint, sk: &SecretKey, outputs: Vec<Output>) -> Transaction {
    let mut tx = Transaction {
        inputs: vec![Input { prevout, signature: None }],
        outputs,
    };
    sign_input(&mut tx, 0, sk);
    tx
}

pub fn genesis_block(coinbase_outputs: Vec<Output>) -> Block {
    Block {
        parent: Parent::Genesis,
        coinbase: coinbase(coinbase_outputs),
        transactions: vec![],
    }
}

/// A child of `parent` carrying `transactions` and a coinbase paying 50 to
/// `miner`. Distinct miners give sibling blocks distinct identities.
pub fn child_block(parent: &Block, miner: &[u8], transactions: Vec<Transaction>) -> Block {
    Block {
        parent: Parent::ChildOf(parent.id()),
        coinbase: coinbase(vec![output(50, miner)]),
        transactions,
    }
}

/// The outpoint of output `index` of `tx`.
pub fn outpoint_of(tx: &Transaction, index: u32) -> OutPoint {
    OutPoint { hash: tx.id(), index }
}
