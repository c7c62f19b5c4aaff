//! Server-rendered browser UI.
//!
//! The page is a three-state machine: [`ShellState::Idle`] before any
//! upload, [`ShellState::Loaded`] once a transcript has been extracted and
//! [`ShellState::Processed`] after analysis. Nothing is kept on the server
//! between requests; the transcript travels back with the form.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use super::AppState;
use crate::models::MeetingAnalysis;
use crate::report::{DOWNLOAD_FILE_NAME, PDF_MIME};

pub const PAGE_TITLE: &str = "AI Meeting Summarizer";
pub const PAGE_SUBTITLE: &str = "Upload a meeting transcript";
pub const UPLOAD_LABEL: &str = "Upload a transcript (TXT, PDF, DOCX)";
pub const PREVIEW_LABEL: &str = "Transcript Preview";
pub const PROCESS_BUTTON: &str = "Generate Summary & Action Items";
pub const SUMMARY_LABEL: &str = "Summary";
pub const ACTION_ITEMS_LABEL: &str = "Key Action Items";
pub const NO_ACTION_ITEMS: &str = "No clear action items detected.";
pub const DOWNLOAD_LABEL: &str = "Download Summary (PDF)";

#[derive(Debug, Clone)]
pub enum ShellState {
    Idle {
        error: Option<String>,
    },
    Loaded {
        file_name: String,
        transcript: String,
        error: Option<String>,
    },
    Processed {
        transcript: String,
        analysis: MeetingAnalysis,
    },
}

impl ShellState {
    pub fn render(&self) -> String {
        let mut body = String::new();
        body.push_str(&upload_form());

        match self {
            ShellState::Idle { error } => {
                if let Some(error) = error {
                    body.push_str(&error_banner(error));
                }
            }
            ShellState::Loaded {
                file_name,
                transcript,
                error,
            } => {
                if let Some(error) = error {
                    body.push_str(&error_banner(error));
                }
                if !file_name.is_empty() {
                    body.push_str(&format!(
                        "<p class=\"file\">{}</p>\n",
                        escape_html(file_name)
                    ));
                }
                body.push_str(&transcript_form(transcript));
            }
            ShellState::Processed {
                transcript,
                analysis,
            } => {
                body.push_str(&transcript_form(transcript));
                for error in &analysis.errors {
                    body.push_str(&error_banner(error));
                }
                body.push_str(&results(analysis));
            }
        }

        page(&body)
    }
}

fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 60rem; margin: 2rem auto; padding: 0 1rem; }}
textarea {{ width: 100%; min-height: 18rem; font-family: monospace; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ccc; padding: 0.4rem; text-align: left; }}
.error {{ background: #fde8e8; border: 1px solid #f5a3a3; padding: 0.6rem; margin: 0.6rem 0; }}
.info {{ background: #e8f0fd; border: 1px solid #a3bff5; padding: 0.6rem; }}
</style>
</head>
<body>
<h1>{title}</h1>
<h3>{subtitle}</h3>
{body}</body>
</html>
"#,
        title = PAGE_TITLE,
        subtitle = PAGE_SUBTITLE,
        body = body,
    )
}

fn upload_form() -> String {
    format!(
        r#"<form action="/upload" method="post" enctype="multipart/form-data">
<label for="file">{UPLOAD_LABEL}</label>
<input id="file" type="file" name="file" accept=".txt,.pdf,.docx">
<button type="submit">Upload</button>
</form>
"#
    )
}

fn transcript_form(transcript: &str) -> String {
    format!(
        r#"<form action="/process" method="post">
<label for="transcript">{PREVIEW_LABEL}</label>
<textarea id="transcript" name="transcript" readonly>{}</textarea>
<button type="submit">{PROCESS_BUTTON}</button>
</form>
"#,
        escape_html(transcript)
    )
}

fn error_banner(message: &str) -> String {
    format!("<div class=\"error\">{}</div>\n", escape_html(message))
}

fn results(analysis: &MeetingAnalysis) -> String {
    let mut html = format!(
        "<h2>{SUMMARY_LABEL}</h2>\n<p class=\"summary\">{}</p>\n<h2>{ACTION_ITEMS_LABEL}</h2>\n",
        escape_html(&analysis.summary).replace('\n', "<br>\n")
    );

    if analysis.action_items.is_empty() {
        html.push_str(&format!("<p class=\"info\">{NO_ACTION_ITEMS}</p>\n"));
    } else {
        html.push_str("<table>\n<tr><th>Person</th><th>Action</th><th>Deadline</th></tr>\n");
        for item in &analysis.action_items {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&item.person),
                escape_html(&item.action),
                escape_html(&item.deadline)
            ));
        }
        html.push_str("</table>\n");
    }

    if let Some(report) = &analysis.report {
        html.push_str(&format!(
            "<p><a href=\"/reports/{}\" download=\"{DOWNLOAD_FILE_NAME}\">{DOWNLOAD_LABEL}</a></p>\n",
            escape_html(&report.file_name)
        ));
    }

    html
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub async fn index() -> Html<String> {
    Html(ShellState::Idle { error: None }.render())
}

pub async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut upload = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        match field.bytes().await {
            Ok(bytes) => upload = Some((file_name, content_type, bytes.to_vec())),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read uploaded file");
                let page = ShellState::Idle {
                    error: Some(format!("Failed to read uploaded file: {}", e.body_text())),
                };
                return (StatusCode::BAD_REQUEST, Html(page.render())).into_response();
            }
        }
        break;
    }

    // Browsers submit an empty, unnamed part when no file was chosen.
    let upload = upload.filter(|(file_name, _, bytes)| {
        !bytes.is_empty() || file_name.as_deref().is_some_and(|name| !name.is_empty())
    });

    let Some((file_name, content_type, bytes)) = upload else {
        let page = ShellState::Idle {
            error: Some("No file uploaded.".to_string()),
        };
        return (StatusCode::BAD_REQUEST, Html(page.render())).into_response();
    };

    let display_name = file_name.clone().unwrap_or_default();
    let result = state
        .extractor
        .extract_upload(bytes, content_type, file_name)
        .await;

    let page = match result {
        Ok(Some(content)) => ShellState::Loaded {
            file_name: display_name,
            transcript: content.text,
            error: None,
        },
        Ok(None) => ShellState::Loaded {
            file_name: display_name,
            transcript: String::new(),
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, file_name = %display_name, "Transcript extraction failed");
            ShellState::Loaded {
                error: Some(format!("Error extracting text from {display_name}: {e}")),
                file_name: display_name,
                transcript: String::new(),
            }
        }
    };

    Html(page.render()).into_response()
}

#[derive(Debug, Deserialize)]
pub struct ProcessForm {
    #[serde(default)]
    pub transcript: String,
}

pub async fn process(State(state): State<AppState>, Form(form): Form<ProcessForm>) -> Html<String> {
    let analysis = state.pipeline.run(&form.transcript).await;

    Html(
        ShellState::Processed {
            transcript: form.transcript,
            analysis,
        }
        .render(),
    )
}

pub async fn download_report(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Response {
    match state.reports().read(&file_name).await {
        Ok(bytes) => report_response(bytes),
        Err(e) => {
            tracing::warn!(error = %e, file_name = %file_name, "Report download failed");
            e.into_response()
        }
    }
}

/// PDF body with the fixed attachment name.
pub fn report_response(bytes: Vec<u8>) -> Response {
    let disposition = format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\"");
    let mut response = bytes.into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(PDF_MIME));
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionItem, ReportArtifact};

    fn analysis(items: Vec<ActionItem>, errors: Vec<String>) -> MeetingAnalysis {
        MeetingAnalysis {
            summary: "Budget approved.".to_string(),
            action_items: items,
            errors,
            report: Some(ReportArtifact {
                file_name: "recap-abc123.pdf".to_string(),
                path: std::env::temp_dir().join("recap-abc123.pdf"),
            }),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_idle_page_has_upload_form_only() {
        let html = ShellState::Idle { error: None }.render();
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains(PAGE_SUBTITLE));
        assert!(html.contains(UPLOAD_LABEL));
        assert!(!html.contains(PREVIEW_LABEL));
        assert!(!html.contains(PROCESS_BUTTON));
    }

    #[test]
    fn test_loaded_page_escapes_transcript() {
        let html = ShellState::Loaded {
            file_name: "notes.txt".to_string(),
            transcript: "Bob: </textarea><script>".to_string(),
            error: None,
        }
        .render();
        assert!(html.contains(PREVIEW_LABEL));
        assert!(html.contains(PROCESS_BUTTON));
        assert!(html.contains("Bob: &lt;/textarea&gt;&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_processed_page_lists_items_and_link() {
        let items = vec![ActionItem::new("Alice", "Send report", "2026-10-23")];
        let html = ShellState::Processed {
            transcript: "Alice will send the report.".to_string(),
            analysis: analysis(items, Vec::new()),
        }
        .render();

        assert!(html.contains("<td>Alice</td><td>Send report</td><td>2026-10-23</td>"));
        assert!(html.contains("href=\"/reports/recap-abc123.pdf\""));
        assert!(html.contains(DOWNLOAD_LABEL));
        assert!(!html.contains(NO_ACTION_ITEMS));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_processed_page_without_items_shows_message_and_errors() {
        let html = ShellState::Processed {
            transcript: String::new(),
            analysis: analysis(
                Vec::new(),
                vec!["Error extracting action items: boom".to_string()],
            ),
        }
        .render();

        assert!(html.contains(NO_ACTION_ITEMS));
        assert!(html.contains("<div class=\"error\">Error extracting action items: boom</div>"));
    }

    #[test]
    fn test_report_response_headers() {
        let response = report_response(b"%PDF-1.3".to_vec());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], PDF_MIME);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Meeting_Summary.pdf\""
        );
    }
}
