//! JSON snapshot files

use super::TransactionSource;
use crate::error::{ReconcilerError, ReconcilerResult};
use crate::types::{BridgeTransaction, SourceKind};

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a JSON array of transactions from disk on every fetch
#[derive(Debug, Clone)]
pub struct FileSource {
    kind: SourceKind,
    path: PathBuf,
    allow_missing: bool,
}

impl FileSource {
    pub fn new(kind: SourceKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            allow_missing: false,
        }
    }

    /// Yield an empty list instead of failing when the file does not exist
    pub fn allow_missing(mut self, allow: bool) -> Self {
        self.allow_missing = allow;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TransactionSource for FileSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    async fn fetch(&self) -> ReconcilerResult<Vec<BridgeTransaction>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound && self.allow_missing => {
                debug!(
                    "No {} snapshot at {:?}, treating as empty",
                    self.kind, self.path
                );
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(ReconcilerError::SnapshotRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let transactions: Vec<BridgeTransaction> =
            serde_json::from_slice(&bytes).map_err(|source| ReconcilerError::SnapshotParse {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "Loaded {} {} transactions from {:?}",
            transactions.len(),
            self.kind,
            self.path
        );
        Ok(transactions)
    }
}
