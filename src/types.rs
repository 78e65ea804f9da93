//! Core ledger types: outputs, transactions and blocks.
//!
//! Identities are content hashes: two transactions (or blocks) with identical
//! content are the same entity. The byte encodings below exist only to feed
//! the hash and the signing payload; no wire format is defined here.

use serde::{Deserialize, Serialize};

use crate::crypto;

/// Hash type: 256-bit content hash
pub type Hash = [u8; 32];

/// Byte string type
pub type ByteString = Vec<u8>;

/// Output value in base units
pub type Value = i64;

/// Reference to a prior transaction output
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
}

/// A spendable output: a value locked to an owner credential.
///
/// The owner credential is a serialized compressed secp256k1 public key;
/// the ledger core treats it as opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub value: Value,
    pub owner: ByteString,
}

/// Transaction input: an outpoint plus an optional DER-encoded signature
/// over the transaction's signing payload for this input. An input with no
/// signature is exempt from the signature check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub prevout: OutPoint,
    pub signature: Option<ByteString>,
}

/// A transaction: ordered inputs consuming prior outputs, ordered outputs
/// creating new ones. A transaction with no inputs is a coinbase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
}

impl Transaction {
    /// Content-derived identity: double SHA-256 over the full transaction,
    /// signatures included.
    pub fn id(&self) -> Hash {
        let mut data = Vec::new();
        data.extend_from_slice(&(self.inputs.len() as u32).to_le_bytes());
        for input in &self.inputs {
            encode_outpoint(&mut data, &input.prevout);
            match &input.signature {
                Some(sig) => {
                    data.push(1);
                    data.extend_from_slice(&(sig.len() as u32).to_le_bytes());
                    data.extend_from_slice(sig);
                }
                None => data.push(0),
            }
        }
        data.extend_from_slice(&(self.outputs.len() as u32).to_le_bytes());
        for output in &self.outputs {
            encode_output(&mut data, output);
        }
        crypto::hash256(&data)
    }

    /// The canonical bytes the signature on input `input_index` must cover:
    /// that input's outpoint followed by every output. Signature fields are
    /// excluded, so the payload is stable across signing.
    ///
    /// # Panics
    ///
    /// Panics if `input_index` is out of bounds; querying the payload of a
    /// nonexistent input is a programming error.
    pub fn signing_payload(&self, input_index: usize) -> ByteString {
        let mut data = Vec::new();
        encode_outpoint(&mut data, &self.inputs[input_index].prevout);
        for output in &self.outputs {
            encode_output(&mut data, output);
        }
        data
    }

    /// A zero-input transaction is a coinbase: exempt from signature and
    /// funding checks, its outputs are newly issued value.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// Parent reference of a block. Only the genesis block has no parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parent {
    Genesis,
    ChildOf(Hash),
}

/// A block: parent reference, coinbase transaction, and the ordered
/// non-coinbase transactions it proposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub parent: Parent,
    pub coinbase: Transaction,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Content-derived identity over parent, coinbase and transaction ids.
    pub fn id(&self) -> Hash {
        let mut data = Vec::new();
        match &self.parent {
            Parent::Genesis => data.push(0),
            Parent::ChildOf(hash) => {
                data.push(1);
                data.extend_from_slice(hash);
            }
        }
        data.extend_from_slice(&self.coinbase.id());
        data.extend_from_slice(&(self.transactions.len() as u32).to_le_bytes());
        for tx in &self.transactions {
            data.extend_from_slice(&tx.id());
        }
        crypto::hash256(&data)
    }
}

fn encode_outpoint(data: &mut Vec<u8>, prevout: &OutPoint) {
    data.extend_from_slice(&prevout.hash);
    data.extend_from_slice(&prevout.index.to_le_bytes());
}

fn encode_output(data: &mut Vec<u8>, output: &Output) {
    data.extend_from_slice(&output.value.to_le_bytes());
    data.extend_from_slice(&(output.owner.len() as u32).to_le_bytes());
    data.extend_from_slice(&output.owner);
}
