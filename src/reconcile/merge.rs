//! Merge of local and relayer records keyed on `srcTxHash`

use crate::types::SourceKeyed;

use serde::Serialize;
use std::collections::HashSet;

/// Output of one reconciliation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeResult<T> {
    /// Local-only records followed by de-duplicated relayer records
    pub merged: Vec<T>,
    /// Local records the relayer has a record for
    pub outdated: Vec<T>,
}

impl<T> MergeResult<T> {
    /// True when no local record was superseded
    pub fn is_current(&self) -> bool {
        self.outdated.is_empty()
    }
}

impl<T> Default for MergeResult<T> {
    fn default() -> Self {
        Self {
            merged: Vec::new(),
            outdated: Vec::new(),
        }
    }
}

/// Merge `local` with the authoritative `relayer` list.
///
/// A key present in `relayer` always wins: the local copy goes to `outdated`
/// and the relayer copy goes to `merged`. Local records are never
/// de-duplicated against each other. Repeated relayer keys keep their first
/// occurrence only; later repeats are dropped without being reported.
pub fn merge_and_capture_outdated<T>(local: &[T], relayer: &[T]) -> MergeResult<T>
where
    T: SourceKeyed + Clone,
{
    let relayer_hashes: HashSet<&str> = relayer.iter().map(|tx| tx.src_tx_hash()).collect();

    let (outdated, mut merged): (Vec<T>, Vec<T>) = local
        .iter()
        .cloned()
        .partition(|tx| relayer_hashes.contains(tx.src_tx_hash()));

    merged.reserve(relayer_hashes.len());
    let mut added: HashSet<&str> = HashSet::with_capacity(relayer_hashes.len());
    for tx in relayer {
        if added.insert(tx.src_tx_hash()) {
            merged.push(tx.clone());
        }
    }

    MergeResult { merged, outdated }
}
