//! Bridge transaction reconciler
//!
//! Merges a client's locally-recorded bridge transactions with the relayer's
//! authoritative list. Relayer records win on a shared `srcTxHash`; the local
//! copies they replace are returned separately so the caller can prune them.

pub mod config;
pub mod error;
pub mod metrics;
pub mod reconcile;
pub mod report;
pub mod service;
pub mod source;
pub mod types;

pub use error::{ReconcilerError, ReconcilerResult};
pub use reconcile::{merge_and_capture_outdated, MergeResult, ReconcileSummary};
pub use report::{OutputFormat, ReconcileReport};
pub use service::Reconciler;
pub use source::{FileSource, StaticSource, TransactionSource};
pub use types::{BridgeTransaction, SourceKeyed, SourceKind};
