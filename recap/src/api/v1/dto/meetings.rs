use serde::{Deserialize, Serialize};

use crate::models::{ActionItem, MeetingAnalysis};

/// Request body for `POST /v1/meetings:analyze`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMeetingRequest {
    /// Full transcript text. May be empty; the model is still called.
    pub transcript: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionItemResponse {
    pub person: String,
    pub action: String,
    /// `YYYY-MM-DD`, `"Unclear deadline"`, or empty.
    pub deadline: String,
}

impl From<ActionItem> for ActionItemResponse {
    fn from(item: ActionItem) -> Self {
        Self {
            person: item.person,
            action: item.action,
            deadline: item.deadline,
        }
    }
}

/// Response body for `POST /v1/meetings:analyze`.
///
/// Stage failures do not fail the request: they are listed in `errors` and
/// the affected fields carry their fallback values.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMeetingResponse {
    pub summary: String,
    pub action_items: Vec<ActionItemResponse>,
    pub errors: Vec<String>,
    /// Download path of the PDF report; absent when it could not be built.
    pub report_url: Option<String>,
}

impl From<MeetingAnalysis> for AnalyzeMeetingResponse {
    fn from(analysis: MeetingAnalysis) -> Self {
        Self {
            report_url: analysis
                .report
                .map(|report| format!("/api/v1/reports/{}", report.file_name)),
            summary: analysis.summary,
            action_items: analysis.action_items.into_iter().map(Into::into).collect(),
            errors: analysis.errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportArtifact;

    #[test]
    fn analysis_maps_to_camel_case_wire_format() {
        let analysis = MeetingAnalysis {
            summary: "Shipped.".to_string(),
            action_items: vec![ActionItem::new("Alice", "Send report", "")],
            errors: Vec::new(),
            report: Some(ReportArtifact {
                file_name: "recap-x1.pdf".to_string(),
                path: "/tmp/recap-x1.pdf".into(),
            }),
        };

        let json = serde_json::to_value(AnalyzeMeetingResponse::from(analysis)).unwrap();
        assert_eq!(json["summary"], "Shipped.");
        assert_eq!(json["actionItems"][0]["person"], "Alice");
        assert_eq!(json["actionItems"][0]["deadline"], "");
        assert_eq!(json["reportUrl"], "/api/v1/reports/recap-x1.pdf");
        assert_eq!(json["errors"], serde_json::json!([]));
    }

    #[test]
    fn missing_report_serializes_null_url() {
        let analysis = MeetingAnalysis {
            summary: "Summarization failed.".to_string(),
            action_items: Vec::new(),
            errors: vec!["Error generating report: disk full".to_string()],
            report: None,
        };

        let json = serde_json::to_value(AnalyzeMeetingResponse::from(analysis)).unwrap();
        assert!(json["reportUrl"].is_null());
        assert_eq!(json["errors"][0], "Error generating report: disk full");
    }
}
