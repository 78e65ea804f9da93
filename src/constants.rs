//! Ledger protocol constants.

/// Maximum height difference behind the current best height at which a new
/// block may still be attached. Bounds how deep a competing branch can still
/// reorganize onto the chain: a block whose height would be at or below
/// `max_height - CUTOFF_AGE` is rejected outright.
pub const CUTOFF_AGE: u64 = 10;
