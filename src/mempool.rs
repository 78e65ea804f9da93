//! Staging area for not-yet-included transactions.
//!
//! Purely an intake collaborator: the chain store and validator never read
//! from it to decide validity. Keyed by transaction identity, so adding the
//! same transaction twice is a no-op overwrite.

use std::collections::HashMap;

use crate::types::{Hash, Transaction};

#[derive(Debug, Clone, Default)]
pub struct TransactionPool {
    transactions: HashMap<Hash, Transaction>,
}

impl TransactionPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tx: Transaction) {
        self.transactions.insert(tx.id(), tx);
    }

    pub fn remove(&mut self, id: &Hash) {
        self.transactions.remove(id);
    }

    pub fn get(&self, id: &Hash) -> Option<&Transaction> {
        self.transactions.get(id)
    }

    pub fn contains(&self, id: &Hash) -> bool {
        self.transactions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Unordered view of the staged transactions.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.values()
    }
}
