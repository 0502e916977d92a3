//! Batch detection reports.
//!
//! A report holds one entry per asset: either the colours found or the
//! reason the asset could not be read. Failed assets never abort a batch.
//! Serializes as `{"results": [...]}`.

use serde::Serialize;

use crate::error::{Result, SwatchError};
use crate::types::ExtractionResult;

/// Outcome of processing one asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Detected(ExtractionResult),
    Failed { error: String },
}

/// One asset's entry in a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub filename: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl ReportEntry {
    /// The extraction result, if the asset was read successfully.
    pub fn result(&self) -> Option<&ExtractionResult> {
        match &self.outcome {
            Outcome::Detected(result) => Some(result),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Detected(_) => None,
            Outcome::Failed { error } => Some(error),
        }
    }
}

/// Results for a batch of assets, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    results: Vec<ReportEntry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_detected(&mut self, filename: impl Into<String>, result: ExtractionResult) {
        self.results.push(ReportEntry {
            filename: filename.into(),
            outcome: Outcome::Detected(result),
        });
    }

    pub fn push_failed(&mut self, filename: impl Into<String>, error: &SwatchError) {
        self.results.push(ReportEntry {
            filename: filename.into(),
            outcome: Outcome::Failed {
                error: error.to_string(),
            },
        });
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of assets that failed to decode.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|e| e.error().is_some()).count()
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SwatchError::Parse {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })
    }
}
