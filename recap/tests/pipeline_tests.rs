use pretty_assertions::assert_eq;
use wiremock::{MockServer, ResponseTemplate};

mod common;
use common::{
    api_error_body, completion_body, mock_action_items, mock_summary, ok_completion, provider_for,
};

use recap::models::{ActionItem, SUMMARY_FAILED};
use recap::processing::DocumentExtractor;
use recap::report::{ReportBuilder, ReportLayout, REPORT_TITLE};
use recap::services::MeetingPipeline;

const ITEMS_JSON: &str = r#"[
    {"person": "Alice", "action": "Send the slides", "deadline": ""},
    {"person": "Bob", "action": "Book the venue", "deadline": "2026-11-02"}
]"#;

fn pipeline(server: &MockServer, report_dir: &std::path::Path) -> MeetingPipeline {
    MeetingPipeline::new(provider_for(server), ReportBuilder::new(report_dir))
}

fn server_error() -> ResponseTemplate {
    ResponseTemplate::new(500).set_body_json(api_error_body(
        "The server had an error while processing your request",
        "server_error",
        "server_error",
    ))
}

#[tokio::test]
async fn test_successful_run_produces_summary_items_and_report() {
    let server = MockServer::start().await;
    mock_summary(&server, ok_completion("The launch moves to November.")).await;
    mock_action_items(&server, ok_completion(ITEMS_JSON)).await;
    let dir = tempfile::tempdir().unwrap();

    let analysis = pipeline(&server, dir.path())
        .run("Alice: slides. Bob: venue by Nov 2.")
        .await;

    assert!(analysis.is_complete(), "errors: {:?}", analysis.errors);
    assert_eq!(analysis.summary, "The launch moves to November.");
    assert_eq!(
        analysis.action_items,
        vec![
            ActionItem::new("Alice", "Send the slides", ""),
            ActionItem::new("Bob", "Book the venue", "2026-11-02"),
        ]
    );

    let report = analysis.report.expect("report should be written");
    assert!(report.file_name.starts_with("recap-"));
    assert!(report.file_name.ends_with(".pdf"));
    assert_eq!(report.path.parent(), Some(dir.path()));

    let bytes = std::fs::read(&report.path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    let text = DocumentExtractor::new()
        .extract(&bytes, Some("application/pdf"), None)
        .expect("report should decode")
        .expect("pdf is supported")
        .text;
    let summary_at = text.find("The launch moves to November.").expect("summary in report");
    let alice_at = text
        .find("- Alice: Send the slides (Deadline:")
        .expect("first item in report");
    let bob_at = text
        .find("- Bob: Book the venue (Deadline: 2026-11-02)")
        .expect("second item in report");
    assert!(text.starts_with(REPORT_TITLE), "got {text:?}");
    assert!(summary_at < alice_at && alice_at < bob_at, "got {text:?}");
}

#[tokio::test]
async fn test_summary_without_content_uses_placeholder() {
    let server = MockServer::start().await;
    let mut body = completion_body("");
    body["choices"][0]["message"]["content"] = serde_json::Value::Null;
    mock_summary(&server, ResponseTemplate::new(200).set_body_json(body)).await;
    mock_action_items(&server, ok_completion("[]")).await;
    let dir = tempfile::tempdir().unwrap();

    let analysis = pipeline(&server, dir.path()).run("transcript").await;

    assert_eq!(analysis.summary, SUMMARY_FAILED);
    assert_eq!(analysis.errors.len(), 1);
    assert!(analysis.errors[0].starts_with("Error summarizing transcript: "));
}

#[tokio::test]
async fn test_summary_failure_uses_placeholder_and_continues() {
    let server = MockServer::start().await;
    mock_summary(&server, server_error()).await;
    mock_action_items(&server, ok_completion(ITEMS_JSON)).await;
    let dir = tempfile::tempdir().unwrap();

    let analysis = pipeline(&server, dir.path()).run("transcript").await;

    assert_eq!(analysis.summary, SUMMARY_FAILED);
    assert_eq!(analysis.action_items.len(), 2);
    assert_eq!(analysis.errors.len(), 1);
    assert!(analysis.errors[0].starts_with("Error summarizing transcript: "));
    assert!(analysis.report.is_some());
}

#[tokio::test]
async fn test_malformed_action_items_yield_empty_list_and_error() {
    let server = MockServer::start().await;
    mock_summary(&server, ok_completion("Short meeting.")).await;
    mock_action_items(&server, ok_completion("Alice will send the slides.")).await;
    let dir = tempfile::tempdir().unwrap();

    let analysis = pipeline(&server, dir.path()).run("transcript").await;

    assert_eq!(analysis.summary, "Short meeting.");
    assert!(analysis.action_items.is_empty());
    assert_eq!(analysis.errors.len(), 1);
    assert!(analysis.errors[0].starts_with("Error extracting action items: "));
    assert!(analysis.report.is_some());
}

#[tokio::test]
async fn test_both_remote_failures_still_produce_a_report() {
    let server = MockServer::start().await;
    mock_summary(&server, server_error()).await;
    mock_action_items(&server, server_error()).await;
    let dir = tempfile::tempdir().unwrap();

    let analysis = pipeline(&server, dir.path()).run("transcript").await;

    assert_eq!(analysis.summary, SUMMARY_FAILED);
    assert!(analysis.action_items.is_empty());
    assert_eq!(analysis.errors.len(), 2);
    assert!(analysis.report.is_some());
}

#[tokio::test]
async fn test_empty_transcript_still_calls_the_model_twice() {
    let server = MockServer::start().await;
    mock_summary(&server, ok_completion("No content.")).await;
    mock_action_items(&server, ok_completion("[]")).await;
    let dir = tempfile::tempdir().unwrap();

    let analysis = pipeline(&server, dir.path()).run("").await;

    assert_eq!(analysis.summary, "No content.");
    assert!(analysis.action_items.is_empty());
    assert!(analysis.is_complete());
}

#[tokio::test]
async fn test_report_failure_is_surfaced() {
    let server = MockServer::start().await;
    mock_summary(&server, ok_completion("Summary.")).await;
    mock_action_items(&server, ok_completion("[]")).await;
    let dir = tempfile::tempdir().unwrap();
    let not_a_dir = dir.path().join("occupied");
    std::fs::write(&not_a_dir, b"file in the way").unwrap();

    let analysis = pipeline(&server, &not_a_dir).run("transcript").await;

    assert_eq!(analysis.summary, "Summary.");
    assert!(analysis.report.is_none());
    assert_eq!(analysis.errors.len(), 1);
    assert!(analysis.errors[0].starts_with("Error generating report: "));
}

#[test]
fn test_report_layout_contains_title_summary_and_item_lines() {
    let items = vec![
        ActionItem::new("Alice", "Send the slides", "2026-10-23"),
        ActionItem::new("Bob", "Book the venue", ""),
    ];

    let text = ReportLayout::build("Launch moves to November.", &items).to_text();

    assert_eq!(
        text,
        format!(
            "{REPORT_TITLE}\n\nSummary:\nLaunch moves to November.\n\nKey Action Items:\n\
             - Alice: Send the slides (Deadline: 2026-10-23)\n\
             - Bob: Book the venue (Deadline: )"
        )
    );
}

#[test]
fn test_report_builder_writes_unique_files() {
    let dir = tempfile::tempdir().unwrap();
    let builder = ReportBuilder::new(dir.path());

    let first = builder.build("One", &[]).unwrap();
    let second = builder.build("Two", &[]).unwrap();

    assert_ne!(first.file_name, second.file_name);
    assert!(first.path.exists());
    assert!(second.path.exists());
}

#[tokio::test]
async fn test_report_read_back_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let builder = ReportBuilder::new(dir.path());
    let report = builder.build("Summary", &[]).unwrap();

    let bytes = builder.read(&report.file_name).await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    assert!(builder.read("../etc/passwd").await.is_err());
}
