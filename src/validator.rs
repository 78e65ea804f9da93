//! Transaction validation and fixed-point batch resolution.
//!
//! A validator owns one [`UtxoSet`] snapshot, cloned from the caller's, and
//! mutates only that copy as transactions are accepted. `is_valid` is a pure
//! read; `resolve` commits acceptances to the owned snapshot.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::crypto;
use crate::error::RejectReason;
use crate::types::{Hash, OutPoint, Transaction, Value};
use crate::utxo::UtxoSet;

#[derive(Debug, Clone)]
pub struct TxValidator {
    utxo_set: UtxoSet,
}

impl TxValidator {
    /// Build a validator over an independent copy of `snapshot`. The caller's
    /// set is never mutated by validation.
    pub fn new(snapshot: &UtxoSet) -> Self {
        Self { utxo_set: snapshot.clone() }
    }

    pub fn utxo_set(&self) -> &UtxoSet {
        &self.utxo_set
    }

    /// The post-resolution snapshot, for committing as a block's state.
    pub fn into_utxo_set(self) -> UtxoSet {
        self.utxo_set
    }

    /// A transaction is valid iff every input references an unspent output,
    /// every present signature verifies against the referenced output's owner,
    /// no output is claimed twice within the transaction, every output value
    /// is non-negative, and the input sum covers the output sum. Surplus is
    /// implicitly burned. Sums use checked arithmetic: a transaction whose
    /// value totals overflow is rejected.
    ///
    /// Read-only: repeated calls against an unchanged snapshot return the
    /// same result.
    pub fn is_valid(&self, tx: &Transaction) -> bool {
        self.check(tx).is_ok()
    }

    pub(crate) fn check(&self, tx: &Transaction) -> Result<(), RejectReason> {
        let mut input_sum: Value = 0;
        let mut claimed: HashSet<&OutPoint> = HashSet::new();
        for (i, input) in tx.inputs.iter().enumerate() {
            let output = self
                .utxo_set
                .get(&input.prevout)
                .ok_or(RejectReason::MissingInput { index: i })?;
            if let Some(signature) = &input.signature {
                if !crypto::verify(&output.owner, &tx.signing_payload(i), signature) {
                    return Err(RejectReason::BadSignature { index: i });
                }
            }
            if !claimed.insert(&input.prevout) {
                return Err(RejectReason::DuplicateInput { index: i });
            }
            // Checked: a wrapped sum would defeat the conservation rule.
            input_sum = input_sum
                .checked_add(output.value)
                .ok_or(RejectReason::ValueOverflow)?;
        }

        let mut output_sum: Value = 0;
        for (i, output) in tx.outputs.iter().enumerate() {
            if output.value < 0 {
                return Err(RejectReason::NegativeOutput { index: i });
            }
            output_sum = output_sum
                .checked_add(output.value)
                .ok_or(RejectReason::ValueOverflow)?;
        }

        if input_sum < output_sum {
            return Err(RejectReason::ValueNotConserved { input_sum, output_sum });
        }
        Ok(())
    }

    /// Resolve an unordered batch into the maximal mutually-valid subset,
    /// committing each acceptance to the owned snapshot immediately.
    ///
    /// Repeated full passes over `candidates` run until a pass commits
    /// nothing new: a transaction spending the output of a candidate listed
    /// after it becomes acceptable in a later pass, once its dependency has
    /// been applied. The final accepted set is independent of candidate
    /// order; only the pass a transaction lands in (and hence the returned
    /// first-acceptance order) depends on it. Rejected candidates are
    /// silently dropped.
    pub fn resolve(&mut self, candidates: &[Transaction]) -> Vec<Transaction> {
        let mut accepted = Vec::new();
        let mut accepted_ids: HashSet<Hash> = HashSet::new();
        loop {
            let mut progressed = false;
            for tx in candidates {
                let id = tx.id();
                // Skipping already-accepted identities keeps the loop finite
                // for duplicate or zero-input candidates.
                if accepted_ids.contains(&id) {
                    continue;
                }
                match self.check(tx) {
                    Ok(()) => {
                        self.apply(tx, id);
                        accepted_ids.insert(id);
                        accepted.push(tx.clone());
                        progressed = true;
                    }
                    Err(reason) => trace!(%reason, "candidate not yet acceptable"),
                }
            }
            if !progressed {
                break;
            }
        }
        debug!(
            accepted = accepted.len(),
            candidates = candidates.len(),
            "resolved transaction batch"
        );
        accepted
    }

    fn apply(&mut self, tx: &Transaction, id: Hash) {
        for input in &tx.inputs {
            self.utxo_set.remove(&input.prevout);
        }
        for (i, output) in tx.outputs.iter().enumerate() {
            self.utxo_set.add(OutPoint { hash: id, index: i as u32 }, output.clone());
        }
    }
}
