//! Bridge transaction record and the key it is reconciled on
//!
//! Only `srcTxHash` is interpreted. Every other field travels through the
//! reconciler untouched as an opaque JSON payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Anything that can be identified by its originating-chain transaction hash
pub trait SourceKeyed {
    /// Business key shared by the local and relayer views of one bridge event
    fn src_tx_hash(&self) -> &str;
}

/// A cross-chain bridge transaction as seen by the client or the relayer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeTransaction {
    /// Hash of the transaction that emitted the bridge message on the source chain
    #[serde(rename = "srcTxHash")]
    pub src_tx_hash: String,

    /// Status, amounts, addresses and whatever else the producer attached
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl BridgeTransaction {
    /// Create a record with an empty payload
    pub fn new(src_tx_hash: impl Into<String>) -> Self {
        Self {
            src_tx_hash: src_tx_hash.into(),
            payload: Map::new(),
        }
    }

    /// Attach a payload field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Look up a payload field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}

impl SourceKeyed for BridgeTransaction {
    fn src_tx_hash(&self) -> &str {
        &self.src_tx_hash
    }
}

impl<T: SourceKeyed + ?Sized> SourceKeyed for &T {
    fn src_tx_hash(&self) -> &str {
        (**self).src_tx_hash()
    }
}

/// Which side of the reconciliation a set of records came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Client-side transaction history
    Local,
    /// Authoritative relayer service
    Relayer,
}

impl SourceKind {
    /// Get source name for logs and metric labels
    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::Local => "local",
            SourceKind::Relayer => "relayer",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
