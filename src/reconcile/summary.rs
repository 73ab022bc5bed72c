//! Counts describing one reconciliation

use super::merge::MergeResult;

use serde::Serialize;
use std::fmt;

/// Record counts for a single merge, derived from input and output lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileSummary {
    pub local: usize,
    pub relayer: usize,
    pub merged: usize,
    pub outdated: usize,
    /// Local records kept because the relayer has no record for them
    pub local_retained: usize,
    /// First-occurrence relayer records placed in `merged`
    pub relayer_retained: usize,
    /// Repeated relayer keys that were collapsed away
    pub relayer_duplicates: usize,
}

impl ReconcileSummary {
    pub fn new<T>(local: usize, relayer: usize, result: &MergeResult<T>) -> Self {
        let merged = result.merged.len();
        let outdated = result.outdated.len();
        let local_retained = local.saturating_sub(outdated);
        let relayer_retained = merged.saturating_sub(local_retained);

        Self {
            local,
            relayer,
            merged,
            outdated,
            local_retained,
            relayer_retained,
            relayer_duplicates: relayer.saturating_sub(relayer_retained),
        }
    }
}

impl fmt::Display for ReconcileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "local={} relayer={} merged={} outdated={} relayer_duplicates={}",
            self.local, self.relayer, self.merged, self.outdated, self.relayer_duplicates
        )
    }
}
