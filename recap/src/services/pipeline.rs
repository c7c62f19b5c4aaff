use crate::intelligence::{ActionItemExtractor, Summarizer};
use crate::llm::LlmProvider;
use crate::models::{MeetingAnalysis, SUMMARY_FAILED};
use crate::report::ReportBuilder;

/// Runs one analysis: summary, then action items, then the report.
///
/// Stages never abort the run. A failed stage contributes its fallback value
/// and a user-facing message in [`MeetingAnalysis::errors`].
#[derive(Debug, Clone)]
pub struct MeetingPipeline {
    summarizer: Summarizer,
    action_items: ActionItemExtractor,
    reports: ReportBuilder,
}

impl MeetingPipeline {
    pub fn new(llm: LlmProvider, reports: ReportBuilder) -> Self {
        Self {
            summarizer: Summarizer::new(llm.clone()),
            action_items: ActionItemExtractor::new(llm),
            reports,
        }
    }

    pub fn reports(&self) -> &ReportBuilder {
        &self.reports
    }

    pub async fn run(&self, transcript: &str) -> MeetingAnalysis {
        let mut errors = Vec::new();

        tracing::info!(transcript_len = transcript.len(), "Analyzing meeting transcript");

        let summary = match self.summarizer.summarize(transcript).await {
            Ok(summary) => summary,
            Err(error) => {
                tracing::error!(error = %error, "Summarization failed");
                errors.push(format!("Error summarizing transcript: {error}"));
                SUMMARY_FAILED.to_string()
            }
        };

        let action_items = match self.action_items.extract(transcript).await {
            Ok(items) => items,
            Err(error) => {
                tracing::error!(error = %error, "Action item extraction failed");
                errors.push(format!("Error extracting action items: {error}"));
                Vec::new()
            }
        };

        let report = match self
            .reports
            .build_async(summary.clone(), action_items.clone())
            .await
        {
            Ok(report) => Some(report),
            Err(error) => {
                tracing::error!(error = %error, "Report generation failed");
                errors.push(format!("Error generating report: {error}"));
                None
            }
        };

        tracing::info!(
            action_items = action_items.len(),
            failed_stages = errors.len(),
            "Meeting analysis finished"
        );

        MeetingAnalysis {
            summary,
            action_items,
            errors,
            report,
        }
    }
}
