use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::RecapError;

/// `Json` extractor whose rejections are [`RecapError`]s instead of plain text.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(RecapError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for RecapError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

fn map_json_rejection(rejection: JsonRejection) -> RecapError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            if let Some(field) = extract_missing_field(&message) {
                RecapError::Validation(format!("Missing required field: {field}"))
            } else {
                RecapError::Validation(format!("Invalid JSON: {message}"))
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            RecapError::Validation(format!("JSON syntax error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            RecapError::Validation("Missing `Content-Type: application/json` header".to_string())
        }
        JsonRejection::BytesRejection(_) => {
            RecapError::Validation("Failed to read request body".to_string())
        }
        _ => RecapError::Validation(rejection.body_text()),
    }
}

fn extract_missing_field(message: &str) -> Option<&str> {
    let prefix = "missing field `";
    let start = message.find(prefix)? + prefix.len();
    let remaining = message.get(start..)?;
    let end = remaining.find('`')?;
    remaining.get(..end)
}
