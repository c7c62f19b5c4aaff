//! # V1 API Response Envelope & Error Contract
//!
//! Every v1 endpoint returns an [`ApiResponse<T>`] envelope:
//!
//! ```json
//! {
//!   "data": { ... },                                      // present on success
//!   "error": { "code": "not_found", "message": "..." }    // present on error
//! }
//! ```
//!
//! Report downloads are the only exception: they stream the PDF bytes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::RecapError;

/// Machine-readable error code included in every error response.
///
/// Serialized as a snake_case string on the wire (e.g. `"invalid_request"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed request or failed validation. HTTP 400.
    InvalidRequest,
    /// The requested report does not exist. HTTP 404.
    NotFound,
    /// The upload could not be decoded. HTTP 422.
    UnprocessableContent,
    /// The model provider is throttling requests. HTTP 429.
    RateLimited,
    /// The model provider failed or answered with unusable output. HTTP 502.
    UpstreamError,
    /// An unexpected server-side error occurred. Internal details are never
    /// leaked to the client. HTTP 500.
    InternalError,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UnprocessableContent => StatusCode::UNPROCESSABLE_ENTITY,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::UpstreamError => StatusCode::BAD_GATEWAY,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::NotFound => write!(f, "not_found"),
            Self::UnprocessableContent => write!(f, "unprocessable_content"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::UpstreamError => write!(f, "upstream_error"),
            Self::InternalError => write!(f, "internal_error"),
        }
    }
}

/// Structured error payload within the API envelope.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiError {
    pub code: ErrorCode,
    /// Human-readable description safe to display to end users.
    pub message: String,
}

/// Canonical v1 API response envelope.
///
/// On success `data` is present and `error` is absent; on error the reverse.
/// The HTTP status is derived from the error code or set by the constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,

    /// HTTP status to use in the response. Not serialized on the wire.
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success response with data (HTTP 200).
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            status: StatusCode::OK,
        }
    }

    /// Error response. HTTP status is derived from the [`ErrorCode`].
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        let status = code.status();
        Self {
            data: None,
            error: Some(ApiError {
                code,
                message: message.into(),
            }),
            status,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        match serde_json::to_value(&self) {
            Ok(body) => (status, Json(body)).into_response(),
            Err(_) => {
                let body = serde_json::json!({
                    "error": {
                        "code": "internal_error",
                        "message": "An internal error occurred"
                    }
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl<T: Serialize> From<RecapError> for ApiResponse<T> {
    /// Convert a [`RecapError`] into a v1 [`ApiResponse`].
    ///
    /// Upstream failures keep their message, since it is the same text the
    /// HTML shell shows. Internal classes return a generic message and the
    /// real error is logged via `tracing::error!`.
    fn from(err: RecapError) -> Self {
        match err {
            RecapError::NotFound(msg) => ApiResponse::error(ErrorCode::NotFound, msg),

            RecapError::Validation(msg) => ApiResponse::error(ErrorCode::InvalidRequest, msg),

            RecapError::Extraction(msg) => {
                ApiResponse::error(ErrorCode::UnprocessableContent, msg)
            }

            RecapError::LlmRateLimit { retry_after } => {
                let msg = match retry_after {
                    Some(secs) => format!("Rate limit exceeded, retry after {secs} seconds"),
                    None => "Rate limit exceeded".to_string(),
                };
                ApiResponse::error(ErrorCode::RateLimited, msg)
            }

            ref upstream @ (RecapError::Llm(_) | RecapError::ActionItems(_)) => {
                tracing::warn!(error = %upstream, "Upstream error mapped to v1 response");
                ApiResponse::error(ErrorCode::UpstreamError, upstream.to_string())
            }

            ref internal @ (RecapError::Config(_)
            | RecapError::Report(_)
            | RecapError::Io(_)
            | RecapError::Internal(_)) => {
                tracing::error!(error = %internal, "Internal error mapped to v1 response");
                ApiResponse::error(ErrorCode::InternalError, "An internal error occurred")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ActionItemParseError;

    #[test]
    fn success_response_serializes_without_error() {
        let resp = ApiResponse::success("hello");
        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(json["data"], "hello");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn error_response_serializes_without_data() {
        let resp = ApiResponse::<()>::error(ErrorCode::NotFound, "gone");
        let json = serde_json::to_value(&resp).expect("serialize");
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["code"], "not_found");
        assert_eq!(json["error"]["message"], "gone");
    }

    #[test]
    fn error_code_status_mapping() {
        assert_eq!(ErrorCode::InvalidRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::UnprocessableContent.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::RateLimited.status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(ErrorCode::UpstreamError.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            ErrorCode::InternalError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_code_serializes_snake_case() {
        let json = serde_json::to_value(&ErrorCode::UnprocessableContent).expect("serialize");
        assert_eq!(json, "unprocessable_content");

        let code: ErrorCode = serde_json::from_str("\"upstream_error\"").expect("deserialize");
        assert_eq!(code, ErrorCode::UpstreamError);
    }

    #[test]
    fn internal_error_does_not_leak() {
        let resp: ApiResponse<()> = RecapError::Internal("secret debug info".into()).into();
        let err = resp.error.as_ref().expect("error");
        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(err.message, "An internal error occurred");
    }

    #[test]
    fn malformed_model_output_maps_to_upstream_error() {
        let source = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let resp: ApiResponse<()> =
            RecapError::ActionItems(ActionItemParseError::MalformedJson(source)).into();
        let err = resp.error.as_ref().expect("error");
        assert_eq!(err.code, ErrorCode::UpstreamError);
        assert!(err.message.contains("not valid JSON"));
    }

    #[test]
    fn rate_limit_keeps_retry_hint() {
        let resp: ApiResponse<()> = RecapError::LlmRateLimit {
            retry_after: Some(30),
        }
        .into();
        let err = resp.error.as_ref().expect("error");
        assert_eq!(err.code, ErrorCode::RateLimited);
        assert!(err.message.contains("30"));
    }
}
