use axum::extract::{Multipart, State};

use crate::api::state::AppState;
use crate::api::v1::dto::ExtractTranscriptResponse;
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};

/// `POST /api/v1/transcripts:extract`
///
/// Decodes an uploaded transcript. Unsupported types succeed with
/// `supported: false` and an empty transcript.
#[utoipa::path(
    post,
    path = "/api/v1/transcripts:extract",
    tag = "transcripts",
    operation_id = "transcripts.extract",
    request_body(content_type = "multipart/form-data", content = String, description = "Transcript file in the `file` field (TXT, PDF or DOCX)"),
    responses(
        (status = 200, description = "Transcript extracted", body = ExtractTranscriptResponse),
        (status = 400, description = "No file in the request", body = ApiError),
        (status = 422, description = "The file could not be decoded", body = ApiError),
    )
)]
pub async fn extract_transcript(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResponse<ExtractTranscriptResponse> {
    let mut upload = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = match field.bytes().await {
            Ok(b) => b,
            Err(e) => {
                return ApiResponse::error(
                    ErrorCode::InvalidRequest,
                    format!("Failed to read file: {}", e.body_text()),
                );
            }
        };

        upload = Some((file_name, content_type, bytes.to_vec()));
        break;
    }

    let Some((file_name, content_type, bytes)) = upload else {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Missing `file` field");
    };

    match state
        .extractor
        .extract_upload(bytes, content_type, file_name.clone())
        .await
    {
        Ok(content) => {
            ApiResponse::success(ExtractTranscriptResponse::from_content(file_name, content))
        }
        Err(e) => e.into(),
    }
}
