use std::path::PathBuf;

use serde::Serialize;

use super::ActionItem;

/// Placeholder shown when the summary call fails.
pub const SUMMARY_FAILED: &str = "Summarization failed.";

/// A report written to disk for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportArtifact {
    /// Bare file name inside the report directory, used in download URLs.
    pub file_name: String,
    pub path: PathBuf,
}

/// Everything produced by one press of the analyze button.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingAnalysis {
    pub summary: String,
    pub action_items: Vec<ActionItem>,
    /// User-facing messages for the stages that failed.
    pub errors: Vec<String>,
    pub report: Option<ReportArtifact>,
}

impl MeetingAnalysis {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}
