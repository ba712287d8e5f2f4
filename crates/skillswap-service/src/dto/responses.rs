//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Ids are plain JSON numbers; field names are camelCase.

use chrono::{DateTime, Utc};
use serde::Serialize;
use skillswap_core::{FeedbackId, SwapId, SwapStatus, UserId};

// ============================================================================
// Authentication Responses
// ============================================================================

/// Bearer token returned by registration and login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}

// ============================================================================
// User Responses
// ============================================================================

/// The caller's own profile, email included
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
    pub availability: Option<String>,
    pub location: Option<String>,
    pub photo_url: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Directory entry for a public user (no email)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfileResponse {
    pub id: UserId,
    pub name: String,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
    pub availability: Option<String>,
    pub location: Option<String>,
    pub photo_url: Option<String>,
    pub is_public: bool,
    pub average_rating: f64,
    pub rating_count: i64,
}

// ============================================================================
// Swap Responses
// ============================================================================

/// One side of a swap as shown in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyResponse {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    pub id: SwapId,
    pub requester_id: UserId,
    pub receiver_id: UserId,
    pub skill_offered_by_requester: String,
    pub skill_wanted_by_requester: String,
    pub status: SwapStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present in listings only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<PartyResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<PartyResponse>,
}

/// Swaps addressed to the caller and swaps the caller proposed
#[derive(Debug, Clone, Serialize)]
pub struct SwapListResponse {
    pub incoming: Vec<SwapResponse>,
    pub outgoing: Vec<SwapResponse>,
}

// ============================================================================
// Feedback Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: FeedbackId,
    pub swap_id: SwapId,
    pub rater_id: UserId,
    pub ratee_id: UserId,
    pub score: u8,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Mean score of a user, 0 when nobody rated them yet
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub user_id: UserId,
    pub average_rating: f64,
    pub rating_count: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
