//! User handlers
//!
//! Endpoints for the caller's profile, the public directory and ratings.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use skillswap_service::dto::{
    DirectoryQuery, ProfileResponse, PublicProfileResponse, RatingResponse, UpdateProfileRequest,
};
use skillswap_service::{DirectoryService, FeedbackService, UserService};

use crate::extractors::{AuthUser, PathParams, UserIdPath, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Get current user
///
/// GET /api/users/me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_profile(auth.user_id).await?;
    Ok(Json(response))
}

/// Update current user
///
/// PUT /api/users/me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// List public users, optionally filtered by an offered skill
///
/// GET /api/users?skill=
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<DirectoryQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<PublicProfileResponse>>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;

    let service = DirectoryService::new(state.service_context());
    let response = service.list_public(query).await?;
    Ok(Json(response))
}

/// Average rating of a public user
///
/// GET /api/users/{user_id}/rating
pub async fn get_user_rating(
    State(state): State<AppState>,
    PathParams(path): PathParams<UserIdPath>,
) -> ApiResult<Json<RatingResponse>> {
    let user_id = path.user_id()?;

    let service = FeedbackService::new(state.service_context());
    let response = service.rating_for(user_id).await?;
    Ok(Json(response))
}
