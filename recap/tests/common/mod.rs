#![allow(dead_code)]

use std::io::Cursor;
use std::path::Path;

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use recap::api::AppState;
use recap::config::{Config, LlmConfig, ReportConfig, ServerConfig};
use recap::llm::LlmProvider;

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";
/// Fragment unique to the summary prompt.
pub const SUMMARY_MARKER: &str = "Summarize the following meeting transcript";
/// Fragment unique to the action-item prompt.
pub const ACTION_ITEMS_MARKER: &str = "extracts structured action items";

pub fn llm_config_with_base_url(model: &str, base_url: String) -> LlmConfig {
    LlmConfig {
        model: model.to_string(),
        api_key: "test-key".to_string(),
        base_url: Some(base_url),
        timeout_secs: Some(5),
        temperature: 0.3,
        max_tokens: None,
    }
}

pub fn provider_for(server: &MockServer) -> LlmProvider {
    let config = llm_config_with_base_url("groq/llama3-70b-8192", format!("{}/v1", server.uri()));
    LlmProvider::new(&config).expect("provider should build")
}

pub fn test_state(server: &MockServer, report_dir: &Path) -> AppState {
    let config = Config {
        server: ServerConfig::default(),
        llm: llm_config_with_base_url("groq/llama3-70b-8192", format!("{}/v1", server.uri())),
        report: ReportConfig {
            output_dir: report_dir.to_path_buf(),
        },
    };
    let llm = LlmProvider::new(&config.llm).expect("provider should build");
    AppState::new(config, llm)
}

pub fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1,
        "model": "llama3-70b-8192",
        "choices": [
            {
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "finish_reason": "stop"
            }
        ],
        "usage": {
            "prompt_tokens": 1,
            "completion_tokens": 1,
            "total_tokens": 2
        }
    })
}

pub fn api_error_body(message: &str, error_type: &str, code: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "type": error_type,
            "param": serde_json::Value::Null,
            "code": code
        }
    })
}

/// Answer the summary prompt with `response`.
pub async fn mock_summary(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(body_string_contains(SUMMARY_MARKER))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Answer the action-item prompt with `response`.
pub async fn mock_action_items(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(body_string_contains(ACTION_ITEMS_MARKER))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

pub fn ok_completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(completion_body(content))
}

pub fn create_test_docx<F>(builder_fn: F) -> Vec<u8>
where
    F: FnOnce(docx_rs::Docx) -> docx_rs::Docx,
{
    let docx = builder_fn(docx_rs::Docx::new());
    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).expect("Failed to pack DOCX");
    buffer.into_inner()
}

pub fn docx_from_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    use docx_rs::{Paragraph, Run};

    create_test_docx(|mut docx| {
        for text in paragraphs {
            let paragraph = if text.is_empty() {
                Paragraph::new()
            } else {
                Paragraph::new().add_run(Run::new().add_text(*text))
            };
            docx = docx.add_paragraph(paragraph);
        }
        docx
    })
}

pub const BOUNDARY: &str = "recap-test-boundary";

pub fn multipart_file(file_name: &str, content_type: &str, content: &[u8]) -> Vec<u8> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
