//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        Self::named("Test User")
    }

    pub fn named(name: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            name: name.to_string(),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Own profile response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
    pub availability: Option<String>,
    pub location: Option<String>,
    pub photo_url: Option<String>,
    pub is_public: bool,
}

/// Directory entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfileResponse {
    pub id: i64,
    pub name: String,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
    pub email: Option<String>,
    pub average_rating: f64,
    pub rating_count: i64,
}

/// Create swap request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSwapRequest {
    pub receiver_id: i64,
    pub skill_offered_by_requester: String,
    pub skill_wanted_by_requester: String,
}

impl CreateSwapRequest {
    pub fn to(receiver_id: i64) -> Self {
        Self {
            receiver_id,
            skill_offered_by_requester: "Piano".to_string(),
            skill_wanted_by_requester: "Guitar".to_string(),
        }
    }
}

/// Swap party summary
#[derive(Debug, Deserialize)]
pub struct PartyResponse {
    pub id: i64,
    pub name: String,
}

/// Swap response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    pub id: i64,
    pub requester_id: i64,
    pub receiver_id: i64,
    pub skill_offered_by_requester: String,
    pub skill_wanted_by_requester: String,
    pub status: String,
    pub requester: Option<PartyResponse>,
    pub receiver: Option<PartyResponse>,
}

/// Swaps of the caller, split by direction
#[derive(Debug, Deserialize)]
pub struct SwapListResponse {
    pub incoming: Vec<SwapResponse>,
    pub outgoing: Vec<SwapResponse>,
}

/// Feedback submission
#[derive(Debug, Serialize)]
pub struct FeedbackRequest {
    pub score: i32,
    pub comment: Option<String>,
}

/// Recorded feedback
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: i64,
    pub swap_id: i64,
    pub rater_id: i64,
    pub ratee_id: i64,
    pub score: u8,
    pub comment: Option<String>,
}

/// Aggregate rating
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub user_id: i64,
    pub average_rating: f64,
    pub rating_count: i64,
}

/// Error envelope returned by every failing endpoint
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Readiness check body
#[derive(Debug, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: ReadinessChecks,
}

/// Per-dependency readiness
#[derive(Debug, Deserialize)]
pub struct ReadinessChecks {
    pub store: String,
}
