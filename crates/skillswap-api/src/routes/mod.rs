//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{auth, feedback, health, swaps, users};
use crate::state::AppState;

/// Create the main router: health checks plus the /api tree
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api", api_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(swap_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route(
            "/users/me",
            get(users::get_current_user).put(users::update_current_user),
        )
        .route("/users/:user_id/rating", get(users::get_user_rating))
}

/// Swap routes
fn swap_routes() -> Router<AppState> {
    Router::new()
        .route("/swaps", post(swaps::create_swap))
        .route("/swaps/me", get(swaps::get_my_swaps))
        .route(
            "/swaps/:swap_id",
            put(swaps::respond_to_swap).delete(swaps::delete_swap),
        )
        .route("/swaps/:swap_id/feedback", post(feedback::submit_feedback))
}
