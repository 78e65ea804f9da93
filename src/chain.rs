//! Multi-branch chain store with per-block UTXO snapshots.
//!
//! Every accepted block owns one snapshot derived copy-on-write from its
//! parent's. Competing branches are retained side by side; the canonical tip
//! is the earliest-accepted block at the maximum height. A block attaching
//! more than [`CUTOFF_AGE`] below the best height is too stale to reorganize
//! onto and is rejected. Snapshots are retained for the lifetime of the
//! store, including those on branches below the cutoff.

use std::collections::HashMap;

use tracing::debug;

use crate::constants::CUTOFF_AGE;
use crate::error::RejectReason;
use crate::mempool::TransactionPool;
use crate::types::{Block, Hash, OutPoint, Parent, Transaction};
use crate::utxo::UtxoSet;
use crate::validator::TxValidator;

pub struct ChainStore {
    /// Block identity -> height.
    heights: HashMap<Hash, u64>,
    /// Accepted blocks per height level; index = height.
    levels: Vec<Vec<Block>>,
    /// Block identity -> that block's committed snapshot.
    snapshots: HashMap<Hash, UtxoSet>,
    max_height: u64,
    pool: TransactionPool,
}

impl ChainStore {
    /// Seed the store with `genesis` at height 0. The genesis snapshot holds
    /// only the coinbase outputs.
    ///
    /// # Panics
    ///
    /// Panics if `genesis` declares a parent; constructing the store from a
    /// non-genesis block is a programming error, not a rejection.
    pub fn new(genesis: Block) -> Self {
        assert!(
            matches!(genesis.parent, Parent::Genesis),
            "chain store must be constructed from a genesis block"
        );
        let id = genesis.id();
        let mut snapshot = UtxoSet::new();
        add_coinbase_outputs(&mut snapshot, &genesis.coinbase);
        let mut heights = HashMap::new();
        heights.insert(id, 0);
        let mut snapshots = HashMap::new();
        snapshots.insert(id, snapshot);
        Self {
            heights,
            levels: vec![vec![genesis]],
            snapshots,
            max_height: 0,
            pool: TransactionPool::new(),
        }
    }

    /// Validate `block` against its parent's snapshot and commit it. Returns
    /// `false` with no state change on any rejection: unknown or absent
    /// parent, already-recorded identity, stale height, or any proposed
    /// transaction failing resolution (a block is valid only if every listed
    /// transaction is individually accepted).
    pub fn add_block(&mut self, block: &Block) -> bool {
        match self.try_add_block(block) {
            Ok(height) => {
                debug!(height, max_height = self.max_height, "accepted block");
                true
            }
            Err(reason) => {
                debug!(%reason, "rejected block");
                false
            }
        }
    }

    fn try_add_block(&mut self, block: &Block) -> Result<u64, RejectReason> {
        let parent_hash = match &block.parent {
            Parent::Genesis => return Err(RejectReason::SecondGenesis),
            Parent::ChildOf(hash) => hash,
        };
        let id = block.id();
        if self.heights.contains_key(&id) {
            return Err(RejectReason::DuplicateBlock);
        }
        let parent_height =
            *self.heights.get(parent_hash).ok_or(RejectReason::UnknownParent)?;
        let height = parent_height + 1;
        // height <= max_height - CUTOFF_AGE, without underflow.
        if height + CUTOFF_AGE <= self.max_height {
            return Err(RejectReason::StaleHeight {
                height,
                cutoff: self.max_height - CUTOFF_AGE,
            });
        }

        let parent_snapshot = &self.snapshots[parent_hash];
        let mut validator = TxValidator::new(parent_snapshot);
        let accepted = validator.resolve(&block.transactions);
        if accepted.len() < block.transactions.len() {
            return Err(RejectReason::InvalidTransactions {
                accepted: accepted.len(),
                proposed: block.transactions.len(),
            });
        }

        let mut snapshot = validator.into_utxo_set();
        add_coinbase_outputs(&mut snapshot, &block.coinbase);

        if height > self.max_height {
            self.levels.push(vec![block.clone()]);
            self.max_height = height;
        } else {
            self.levels[height as usize].push(block.clone());
        }
        self.heights.insert(id, height);
        self.snapshots.insert(id, snapshot);
        Ok(height)
    }

    /// The canonical tip: the earliest-accepted block at the current maximum
    /// height. Ties at equal height are never re-broken.
    pub fn best_block(&self) -> &Block {
        &self.levels[self.max_height as usize][0]
    }

    /// The snapshot owned by the current best block.
    pub fn best_snapshot(&self) -> &UtxoSet {
        &self.snapshots[&self.best_block().id()]
    }

    /// Stage a transaction for future inclusion. No validation is performed.
    pub fn add_transaction(&mut self, tx: Transaction) {
        self.pool.add(tx);
    }

    pub fn transaction_pool(&self) -> &TransactionPool {
        &self.pool
    }

    pub fn max_height(&self) -> u64 {
        self.max_height
    }

    /// Height of a recorded block, or `None` if the identity is unknown.
    pub fn block_height(&self, id: &Hash) -> Option<u64> {
        self.heights.get(id).copied()
    }
}

fn add_coinbase_outputs(snapshot: &mut UtxoSet, coinbase: &Transaction) {
    let id = coinbase.id();
    for (i, output) in coinbase.outputs.iter().enumerate() {
        snapshot.add(OutPoint { hash: id, index: i as u32 }, output.clone());
    }
}
