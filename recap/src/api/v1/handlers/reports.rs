use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use crate::api::frontend::report_response;
use crate::api::state::AppState;
use crate::api::v1::response::{ApiError, ApiResponse};

/// `GET /api/v1/reports/{file}`
#[utoipa::path(
    get,
    path = "/api/v1/reports/{file}",
    tag = "reports",
    operation_id = "reports.download",
    params(("file" = String, Path, description = "Report file name from `reportUrl`")),
    responses(
        (status = 200, description = "PDF report", content_type = "application/pdf", body = String),
        (status = 400, description = "Invalid report name", body = ApiError),
        (status = 404, description = "Report not found", body = ApiError),
    )
)]
pub async fn download_report(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Response {
    match state.reports().read(&file).await {
        Ok(bytes) => report_response(bytes),
        Err(e) => ApiResponse::<()>::from(e).into_response(),
    }
}
