//! Rejection reasons behind the boolean accept/reject contract.
//!
//! Callers of `add_block` and `is_valid` only ever observe accept or reject;
//! these reasons exist for tracing and tests and never cross the public API.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error("input {index} references no unspent output")]
    MissingInput { index: usize },

    #[error("input {index} carries an invalid signature")]
    BadSignature { index: usize },

    #[error("input {index} claims an output already claimed by this transaction")]
    DuplicateInput { index: usize },

    #[error("output {index} has a negative value")]
    NegativeOutput { index: usize },

    #[error("output sum {output_sum} exceeds input sum {input_sum}")]
    ValueNotConserved { input_sum: i64, output_sum: i64 },

    #[error("value sum overflows")]
    ValueOverflow,

    #[error("block declares no parent; a second genesis is never accepted")]
    SecondGenesis,

    #[error("parent block is not known to the chain store")]
    UnknownParent,

    #[error("block identity is already recorded")]
    DuplicateBlock,

    #[error("block height {height} is at or below the reorganization cutoff {cutoff}")]
    StaleHeight { height: u64, cutoff: u64 },

    #[error("only {accepted} of {proposed} block transactions are mutually valid")]
    InvalidTransactions { accepted: usize, proposed: usize },
}
