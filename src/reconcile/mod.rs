//! Reconciliation of local and relayer transaction histories
//!
//! The reconciler:
//! 1. Keeps local records the relayer does not know about, in local order
//! 2. Moves local records the relayer has superseded into `outdated`
//! 3. Appends relayer records in relayer order, first occurrence per key
//!
//! Everything in here is pure: no I/O, no logging, no shared state.

pub mod merge;
pub mod summary;

pub use merge::{merge_and_capture_outdated, MergeResult};
pub use summary::ReconcileSummary;
