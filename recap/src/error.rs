use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Shape violations in the action-item JSON returned by the model.
#[derive(Error, Debug)]
pub enum ActionItemParseError {
    #[error("response is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("expected a JSON array of action items, got {found}")]
    NotAnArray { found: &'static str },

    #[error("action item {index} is invalid: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Invalid action items: {0}")]
    ActionItems(#[from] ActionItemParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("LLM rate limit exceeded, retry after {retry_after:?} seconds")]
    LlmRateLimit { retry_after: Option<u64> },
}

impl IntoResponse for RecapError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RecapError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            RecapError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            RecapError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            RecapError::Extraction(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            RecapError::Report(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            RecapError::ActionItems(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            RecapError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            RecapError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            RecapError::Llm(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            RecapError::LlmRateLimit { .. } => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RecapError>;
