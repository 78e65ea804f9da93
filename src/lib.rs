//! # utxo-ledger
//!
//! Validation and fork-resolution core of a simplified UTXO ledger.
//!
//! Given a stream of proposed transactions and blocks, this crate decides
//! which transactions are mutually consistent (no double-spend, signatures
//! valid, value conserved) and which block extends which branch:
//!
//! - [`UtxoSet`]: the unspent-output set, one independent snapshot per
//!   accepted block.
//! - [`TxValidator`]: validates a single transaction against a snapshot and
//!   resolves an unordered batch into a maximal mutually-valid subset.
//! - [`ChainStore`]: tracks competing branches with a snapshot per block,
//!   enforces a maximum reorganization depth ([`CUTOFF_AGE`]), and exposes
//!   the current best block and snapshot.
//! - [`TransactionPool`]: staging area for not-yet-included transactions.
//!
//! Network transport, proof-of-work, persistence and wallet key management
//! are out of scope; signature verification and content hashing live in
//! [`crypto`]. All operations are synchronous and single-threaded; `&mut`
//! receivers serialize mutation at the type level.
//!
//! ## Usage
//!
//! ```rust
//! use utxo_ledger::{Block, ChainStore, Output, Parent, Transaction};
//!
//! let coinbase = Transaction {
//!     inputs: vec![],
//!     outputs: vec![Output { value: 10, owner: vec![0x02; 33] }],
//! };
//! let genesis = Block {
//!     parent: Parent::Genesis,
//!     coinbase,
//!     transactions: vec![],
//! };
//! let store = ChainStore::new(genesis);
//! assert_eq!(store.max_height(), 0);
//! assert_eq!(store.best_snapshot().len(), 1);
//! ```

pub mod chain;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod mempool;
pub mod types;
pub mod utxo;
pub mod validator;

// Re-export commonly used types
pub use chain::ChainStore;
pub use constants::CUTOFF_AGE;
pub use error::RejectReason;
pub use mempool::TransactionPool;
pub use types::{Block, ByteString, Hash, Input, OutPoint, Output, Parent, Transaction, Value};
pub use utxo::UtxoSet;
pub use validator::TxValidator;
