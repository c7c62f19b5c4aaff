//! PDF report generation and retrieval.
//!
//! Reports are written once per analysis into the report directory under a
//! random `recap-*.pdf` name and read back only through
//! [`ReportBuilder::read`], which refuses anything that is not such a name.

mod layout;
mod pdf;

use std::io::Write;
use std::path::{Path, PathBuf};

pub use layout::{
    wrap_text, Block, ReportLayout, ACTION_ITEMS_HEADING, REPORT_TITLE, SUMMARY_HEADING,
};
pub use pdf::{chars_per_line, render, to_latin1};

use crate::error::{RecapError, Result};
use crate::models::{ActionItem, ReportArtifact};

pub const REPORT_FILE_PREFIX: &str = "recap-";
pub const REPORT_FILE_SUFFIX: &str = ".pdf";
/// Name offered to the browser for every download.
pub const DOWNLOAD_FILE_NAME: &str = "Meeting_Summary.pdf";
pub const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Clone)]
pub struct ReportBuilder {
    output_dir: PathBuf,
}

impl ReportBuilder {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Lay out, render and persist a report.
    pub fn build(&self, summary: &str, action_items: &[ActionItem]) -> Result<ReportArtifact> {
        let layout = ReportLayout::build(summary, action_items);
        let (bytes, pages) = render(&layout)?;

        std::fs::create_dir_all(&self.output_dir)?;
        let mut file = tempfile::Builder::new()
            .prefix(REPORT_FILE_PREFIX)
            .suffix(REPORT_FILE_SUFFIX)
            .tempfile_in(&self.output_dir)?;
        file.write_all(&bytes)?;
        file.flush()?;

        let (_, path) = file.keep().map_err(|e| RecapError::Io(e.error))?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| RecapError::Report("Report path has no file name".to_string()))?;

        tracing::info!(
            path = %path.display(),
            pages,
            bytes = bytes.len(),
            action_items = action_items.len(),
            "Report written"
        );

        Ok(ReportArtifact { file_name, path })
    }

    /// [`ReportBuilder::build`] on a blocking worker thread.
    pub async fn build_async(
        &self,
        summary: String,
        action_items: Vec<ActionItem>,
    ) -> Result<ReportArtifact> {
        let builder = self.clone();
        tokio::task::spawn_blocking(move || builder.build(&summary, &action_items))
            .await
            .map_err(|e| RecapError::Internal(format!("Report task failed: {e}")))?
    }

    /// Map a download name back to a path inside the report directory.
    pub fn resolve(&self, file_name: &str) -> Result<PathBuf> {
        if !is_report_file_name(file_name) {
            return Err(RecapError::Validation(format!(
                "Invalid report name: {file_name}"
            )));
        }
        Ok(self.output_dir.join(file_name))
    }

    pub async fn read(&self, file_name: &str) -> Result<Vec<u8>> {
        let path = self.resolve(file_name)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(RecapError::NotFound(
                format!("Report {file_name} not found"),
            )),
            Err(e) => Err(RecapError::Io(e)),
        }
    }
}

fn is_report_file_name(file_name: &str) -> bool {
    let Some(stem) = file_name
        .strip_prefix(REPORT_FILE_PREFIX)
        .and_then(|rest| rest.strip_suffix(REPORT_FILE_SUFFIX))
    else {
        return false;
    };

    !stem.is_empty()
        && stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_name_validation() {
        assert!(is_report_file_name("recap-a1B2c3.pdf"));
        assert!(!is_report_file_name("recap-.pdf"));
        assert!(!is_report_file_name("other-a1B2c3.pdf"));
        assert!(!is_report_file_name("recap-a1B2c3.txt"));
        assert!(!is_report_file_name("recap-../../etc/passwd.pdf"));
        assert!(!is_report_file_name("recap-a/b.pdf"));
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let builder = ReportBuilder::new("/tmp/reports");
        assert!(matches!(
            builder.resolve("../secret.pdf"),
            Err(RecapError::Validation(_))
        ));
        assert_eq!(
            builder.resolve("recap-xyz.pdf").unwrap(),
            PathBuf::from("/tmp/reports/recap-xyz.pdf")
        );
    }
}
