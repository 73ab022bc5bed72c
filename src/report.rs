//! Reconciliation report and its textual renderings

use crate::error::{ReconcilerError, ReconcilerResult};
use crate::reconcile::{MergeResult, ReconcileSummary};
use crate::types::BridgeTransaction;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Indented JSON
    #[default]
    Pretty,
    /// One line of counts
    Summary,
}

/// Result of one reconciliation run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileReport {
    pub generated_at: DateTime<Utc>,
    pub summary: ReconcileSummary,
    pub merged: Vec<BridgeTransaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdated: Option<Vec<BridgeTransaction>>,
}

impl ReconcileReport {
    pub fn new(summary: ReconcileSummary, result: MergeResult<BridgeTransaction>) -> Self {
        Self {
            generated_at: Utc::now(),
            summary,
            merged: result.merged,
            outdated: Some(result.outdated),
        }
    }

    /// Drop the outdated records, keeping only their count in the summary
    pub fn without_outdated(mut self) -> Self {
        self.outdated = None;
        self
    }

    /// Render the report in the requested format
    pub fn render(&self, format: OutputFormat) -> ReconcilerResult<String> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string(self).map_err(|e| ReconcilerError::Render(e.to_string()))
            }
            OutputFormat::Pretty => serde_json::to_string_pretty(self)
                .map_err(|e| ReconcilerError::Render(e.to_string())),
            OutputFormat::Summary => Ok(format!(
                "{} {}",
                self.generated_at.to_rfc3339(),
                self.summary
            )),
        }
    }
}
