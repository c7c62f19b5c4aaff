use axum::extract::State;

use crate::api::extractors::AppJson;
use crate::api::state::AppState;
use crate::api::v1::dto::{AnalyzeMeetingRequest, AnalyzeMeetingResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::error::RecapError;

/// `POST /api/v1/meetings:analyze`
///
/// Summarizes the transcript, extracts action items and writes the PDF
/// report, in that order. Stage failures are reported in `errors` with a
/// 200 status, matching what the browser UI shows.
#[utoipa::path(
    post,
    path = "/api/v1/meetings:analyze",
    tag = "meetings",
    operation_id = "meetings.analyze",
    request_body = AnalyzeMeetingRequest,
    responses(
        (status = 200, description = "Analysis finished, possibly with stage errors", body = AnalyzeMeetingResponse),
        (status = 400, description = "Invalid request body", body = ApiError),
    )
)]
pub async fn analyze_meeting(
    State(state): State<AppState>,
    payload: Result<AppJson<AnalyzeMeetingRequest>, RecapError>,
) -> ApiResponse<AnalyzeMeetingResponse> {
    let AppJson(request) = match payload {
        Ok(payload) => payload,
        Err(e) => return e.into(),
    };

    let analysis = state.pipeline.run(&request.transcript).await;
    ApiResponse::success(analysis.into())
}
