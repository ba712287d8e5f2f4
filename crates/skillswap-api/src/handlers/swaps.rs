//! Swap handlers
//!
//! Endpoints for proposing, listing, answering and withdrawing swaps.

use axum::{extract::State, Json};
use skillswap_service::dto::{CreateSwapRequest, RespondSwapRequest, SwapListResponse, SwapResponse};
use skillswap_service::SwapService;

use crate::extractors::{AuthUser, PathParams, SwapIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Propose a swap
///
/// POST /api/swaps
pub async fn create_swap(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSwapRequest>,
) -> ApiResult<Created<Json<SwapResponse>>> {
    let service = SwapService::new(state.service_context());
    let response = service.create_swap(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Swaps the caller received and sent
///
/// GET /api/swaps/me
pub async fn get_my_swaps(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<SwapListResponse>> {
    let service = SwapService::new(state.service_context());
    let response = service.list_for_user(auth.user_id).await?;
    Ok(Json(response))
}

/// Accept or reject a swap
///
/// PUT /api/swaps/{swap_id}
pub async fn respond_to_swap(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(path): PathParams<SwapIdPath>,
    ValidatedJson(request): ValidatedJson<RespondSwapRequest>,
) -> ApiResult<Json<SwapResponse>> {
    let swap_id = path.swap_id()?;

    let service = SwapService::new(state.service_context());
    let response = service.respond(swap_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// Withdraw a pending swap
///
/// DELETE /api/swaps/{swap_id}
pub async fn delete_swap(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(path): PathParams<SwapIdPath>,
) -> ApiResult<NoContent> {
    let swap_id = path.swap_id()?;

    let service = SwapService::new(state.service_context());
    service.cancel(swap_id, auth.user_id).await?;
    Ok(NoContent)
}
