//! Feedback handlers

use axum::{extract::State, Json};
use skillswap_service::dto::{FeedbackResponse, SubmitFeedbackRequest};
use skillswap_service::FeedbackService;

use crate::extractors::{AuthUser, PathParams, SwapIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Rate the other party of an accepted swap
///
/// POST /api/swaps/{swap_id}/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(path): PathParams<SwapIdPath>,
    ValidatedJson(request): ValidatedJson<SubmitFeedbackRequest>,
) -> ApiResult<Created<Json<FeedbackResponse>>> {
    let swap_id = path.swap_id()?;

    let service = FeedbackService::new(state.service_context());
    let response = service.submit(swap_id, auth.user_id, request).await?;
    Ok(Created(Json(response)))
}
