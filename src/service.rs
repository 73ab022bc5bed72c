//! Reconciliation service: fetch both sides, merge, report

use crate::config::SourcesConfig;
use crate::error::ReconcilerResult;
use crate::metrics;
use crate::reconcile::{merge_and_capture_outdated, ReconcileSummary};
use crate::report::ReconcileReport;
use crate::source::{FileSource, TransactionSource};
use crate::types::{BridgeTransaction, SourceKind};

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Runs the merge over a local and a relayer source
pub struct Reconciler {
    /// Client-side history
    local: Arc<dyn TransactionSource>,
    /// Authoritative relayer view
    relayer: Arc<dyn TransactionSource>,
    /// Record Prometheus metrics for each run
    record_metrics: bool,
}

impl Reconciler {
    /// Create a reconciler over two sources
    pub fn new(local: Arc<dyn TransactionSource>, relayer: Arc<dyn TransactionSource>) -> Self {
        Self {
            local,
            relayer,
            record_metrics: false,
        }
    }

    /// Create a reconciler reading the snapshot files named in config
    pub fn from_config(config: &SourcesConfig) -> Self {
        let local = FileSource::new(SourceKind::Local, &config.local_path)
            .allow_missing(config.allow_missing_local);
        let relayer = FileSource::new(SourceKind::Relayer, &config.relayer_path);

        Self::new(Arc::new(local), Arc::new(relayer))
    }

    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.record_metrics = enabled;
        self
    }

    /// Fetch both snapshots concurrently and reconcile them
    pub async fn run(&self) -> ReconcilerResult<ReconcileReport> {
        let started = Instant::now();

        let fetched = tokio::try_join!(
            self.fetch(self.local.as_ref()),
            self.fetch(self.relayer.as_ref())
        );
        let (local, relayer) = match fetched {
            Ok(snapshots) => snapshots,
            Err(e) => {
                if self.record_metrics {
                    metrics::record_reconcile_failure();
                }
                return Err(e);
            }
        };

        let result = merge_and_capture_outdated(&local, &relayer);
        let summary = ReconcileSummary::new(local.len(), relayer.len(), &result);

        info!("Reconciled bridge transactions: {}", summary);

        for tx in &result.outdated {
            debug!("Local transaction {} superseded by relayer", tx.src_tx_hash);
        }

        if summary.relayer_duplicates > 0 {
            warn!(
                "Relayer returned {} repeated srcTxHash entries; kept first occurrence of each",
                summary.relayer_duplicates
            );
        }

        if self.record_metrics {
            metrics::record_reconcile(&summary, started.elapsed().as_secs_f64());
        }

        Ok(ReconcileReport::new(summary, result))
    }

    async fn fetch(
        &self,
        source: &dyn TransactionSource,
    ) -> ReconcilerResult<Vec<BridgeTransaction>> {
        let kind = source.kind();

        match source.fetch().await {
            Ok(transactions) => {
                if self.record_metrics {
                    metrics::record_source_fetch(kind, transactions.len());
                }
                Ok(transactions)
            }
            Err(e) => {
                error!("Failed to fetch {} transactions: {}", kind, e);
                if self.record_metrics {
                    metrics::record_source_error(kind);
                }
                Err(e)
            }
        }
    }
}
