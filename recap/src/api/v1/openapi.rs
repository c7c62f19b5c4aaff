use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recap API",
        version = "1.0.0",
        description = "Meeting transcript summarizer. Extract transcripts, generate summaries and action items, download PDF reports.",
    ),
    paths(
        handlers::health::health_check,
        handlers::transcripts::extract_transcript,
        handlers::meetings::analyze_meeting,
        handlers::reports::download_report,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Transcripts
        dto::transcripts::ExtractTranscriptResponse,
        // Meetings
        dto::meetings::AnalyzeMeetingRequest,
        dto::meetings::AnalyzeMeetingResponse,
        dto::meetings::ActionItemResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::LlmStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "transcripts", description = "Transcript text extraction"),
        (name = "meetings", description = "Summary and action item generation"),
        (name = "reports", description = "PDF report download"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
