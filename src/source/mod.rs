//! Transaction sources feeding the reconciler
//!
//! The local history store and the relayer query client live outside this
//! crate. They hand over their lists through [`TransactionSource`]; this module
//! ships a JSON snapshot reader and an in-memory source.

mod file;

pub use file::FileSource;

use crate::error::ReconcilerResult;
use crate::types::{BridgeTransaction, SourceKind};

use async_trait::async_trait;
use std::fmt::Debug;

/// A provider of one side of the reconciliation
#[async_trait]
pub trait TransactionSource: Send + Sync + Debug {
    /// Which side this source represents
    fn kind(&self) -> SourceKind;

    /// Fetch a consistent snapshot of transactions in display order
    async fn fetch(&self) -> ReconcilerResult<Vec<BridgeTransaction>>;
}

/// Source backed by a list already held in memory
#[derive(Debug, Clone)]
pub struct StaticSource {
    kind: SourceKind,
    transactions: Vec<BridgeTransaction>,
}

impl StaticSource {
    pub fn new(kind: SourceKind, transactions: Vec<BridgeTransaction>) -> Self {
        Self { kind, transactions }
    }

    pub fn local(transactions: Vec<BridgeTransaction>) -> Self {
        Self::new(SourceKind::Local, transactions)
    }

    pub fn relayer(transactions: Vec<BridgeTransaction>) -> Self {
        Self::new(SourceKind::Relayer, transactions)
    }
}

#[async_trait]
impl TransactionSource for StaticSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    async fn fetch(&self) -> ReconcilerResult<Vec<BridgeTransaction>> {
        Ok(self.transactions.clone())
    }
}
