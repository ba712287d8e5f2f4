//! Feedback database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for feedback table
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackModel {
    pub id: i64,
    pub swap_id: i64,
    pub rater_id: i64,
    pub ratee_id: i64,
    pub score: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Aggregated scores for one user
#[derive(Debug, Clone, Copy, FromRow)]
pub struct RatingSummaryModel {
    pub count: i64,
    pub total: i64,
}
