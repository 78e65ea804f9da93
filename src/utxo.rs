//! The unspent-output set.
//!
//! One owned snapshot per accepted block. An outpoint is present iff that
//! output has not been consumed by any transaction in this snapshot's
//! lineage. Snapshots for competing branches are independent clones; a
//! committed snapshot is never mutated in place.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{OutPoint, Output};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoSet {
    entries: HashMap<OutPoint, Output>,
}

impl UtxoSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `output` as spendable at `outpoint`.
    pub fn add(&mut self, outpoint: OutPoint, output: Output) {
        self.entries.insert(outpoint, output);
    }

    /// Remove a spent outpoint. Removing an absent key is a no-op; callers
    /// only remove keys they have verified exist.
    pub fn remove(&mut self, outpoint: &OutPoint) {
        self.entries.remove(outpoint);
    }

    pub fn contains(&self, outpoint: &OutPoint) -> bool {
        self.entries.contains_key(outpoint)
    }

    pub fn get(&self, outpoint: &OutPoint) -> Option<&Output> {
        self.entries.get(outpoint)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn outpoints(&self) -> impl Iterator<Item = &OutPoint> {
        self.entries.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outpoint(n: u8) -> OutPoint {
        OutPoint { hash: [n; 32], index: 0 }
    }

    fn output(value: i64) -> Output {
        Output { value, owner: vec![0x02; 33] }
    }

    #[test]
    fn test_add_and_get() {
        let mut set = UtxoSet::new();
        set.add(outpoint(1), output(10));
        assert!(set.contains(&outpoint(1)));
        assert_eq!(set.get(&outpoint(1)).unwrap().value, 10);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_get_absent_is_none() {
        let set = UtxoSet::new();
        assert!(set.get(&outpoint(1)).is_none());
        assert!(!set.contains(&outpoint(1)));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set = UtxoSet::new();
        set.remove(&outpoint(1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut set = UtxoSet::new();
        set.add(outpoint(1), output(10));
        set.remove(&outpoint(1));
        assert!(!set.contains(&outpoint(1)));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut set = UtxoSet::new();
        set.add(outpoint(1), output(10));
        let snapshot = set.clone();
        set.remove(&outpoint(1));
        set.add(outpoint(2), output(20));
        assert!(snapshot.contains(&outpoint(1)));
        assert!(!snapshot.contains(&outpoint(2)));
    }
}
