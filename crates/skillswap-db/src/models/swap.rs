//! Swap database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for swaps table
#[derive(Debug, Clone, FromRow)]
pub struct SwapModel {
    pub id: i64,
    pub requester_id: i64,
    pub receiver_id: i64,
    pub skill_offered_by_requester: String,
    pub skill_wanted_by_requester: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Swap row joined with both parties' names
#[derive(Debug, Clone, FromRow)]
pub struct SwapWithPartiesModel {
    #[sqlx(flatten)]
    pub swap: SwapModel,
    pub requester_name: String,
    pub receiver_name: String,
}
