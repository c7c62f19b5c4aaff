use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/transcripts:extract",
            post(handlers::transcripts::extract_transcript),
        )
        .route(
            "/meetings:analyze",
            post(handlers::meetings::analyze_meeting),
        )
        .route(
            "/reports/{file}",
            get(handlers::reports::download_report),
        )
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
}
