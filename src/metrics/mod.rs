//! Prometheus metrics for monitoring
//!
//! Exposes metrics for:
//! - Reconciliation runs and latency
//! - Records merged, outdated and collapsed
//! - Snapshot fetches per source

use crate::error::ReconcilerResult;
use crate::reconcile::ReconcileSummary;
use crate::types::SourceKind;

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, register_int_gauge_vec,
    Encoder, Histogram, IntCounter, IntCounterVec, IntGaugeVec, TextEncoder,
};

lazy_static! {
    // Run metrics
    pub static ref RECONCILE_RUNS: IntCounter = register_int_counter!(
        "bridge_reconciler_runs_total",
        "Total reconciliation runs"
    ).unwrap();

    pub static ref RECONCILE_FAILURES: IntCounter = register_int_counter!(
        "bridge_reconciler_failures_total",
        "Total reconciliation runs that failed before merging"
    ).unwrap();

    pub static ref RECONCILE_LATENCY: Histogram = register_histogram!(
        "bridge_reconciler_latency_seconds",
        "Time spent fetching and merging both snapshots",
        vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]
    ).unwrap();

    // Record metrics
    pub static ref RECORDS: IntCounterVec = register_int_counter_vec!(
        "bridge_reconciler_records_total",
        "Records by reconciliation outcome",
        &["outcome"]
    ).unwrap();

    // Source metrics
    pub static ref SOURCE_RECORDS: IntGaugeVec = register_int_gauge_vec!(
        "bridge_reconciler_source_records",
        "Records in the last snapshot fetched per source",
        &["source"]
    ).unwrap();

    pub static ref SOURCE_ERRORS: IntCounterVec = register_int_counter_vec!(
        "bridge_reconciler_source_errors_total",
        "Snapshot fetch failures per source",
        &["source"]
    ).unwrap();
}

/// Render every registered metric in the Prometheus text format
pub fn render() -> ReconcilerResult<String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| crate::error::ReconcilerError::Metrics(e.to_string()))
}

// Helper functions to record metrics

pub fn record_reconcile(summary: &ReconcileSummary, latency_secs: f64) {
    RECONCILE_RUNS.inc();
    RECONCILE_LATENCY.observe(latency_secs);

    RECORDS
        .with_label_values(&["local_retained"])
        .inc_by(summary.local_retained as u64);
    RECORDS
        .with_label_values(&["relayer_retained"])
        .inc_by(summary.relayer_retained as u64);
    RECORDS
        .with_label_values(&["outdated"])
        .inc_by(summary.outdated as u64);
    RECORDS
        .with_label_values(&["relayer_duplicate"])
        .inc_by(summary.relayer_duplicates as u64);
}

pub fn record_reconcile_failure() {
    RECONCILE_FAILURES.inc();
}

pub fn record_source_fetch(source: SourceKind, records: usize) {
    SOURCE_RECORDS
        .with_label_values(&[source.name()])
        .set(records as i64);
}

pub fn record_source_error(source: SourceKind) {
    SOURCE_ERRORS.with_label_values(&[source.name()]).inc();
}
