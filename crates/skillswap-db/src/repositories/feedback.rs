//! PostgreSQL implementation of FeedbackRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use skillswap_core::entities::{Feedback, NewFeedback, RatingSummary};
use skillswap_core::error::DomainError;
use skillswap_core::traits::{FeedbackRepository, RepoResult};
use skillswap_core::value_objects::UserId;

use crate::models::{FeedbackModel, RatingSummaryModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FeedbackRepository
#[derive(Clone)]
pub struct PgFeedbackRepository {
    pool: PgPool,
}

impl PgFeedbackRepository {
    /// Create a new PgFeedbackRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    #[instrument(skip(self, feedback), fields(swap_id = %feedback.swap_id, rater_id = %feedback.rater_id))]
    async fn create(&self, feedback: &NewFeedback) -> RepoResult<Feedback> {
        let model = sqlx::query_as::<_, FeedbackModel>(
            r"
            INSERT INTO feedback (swap_id, rater_id, ratee_id, score, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, swap_id, rater_id, ratee_id, score, comment, created_at
            ",
        )
        .bind(feedback.swap_id.into_inner())
        .bind(feedback.rater_id.into_inner())
        .bind(feedback.ratee_id.into_inner())
        .bind(i16::from(feedback.score.value()))
        .bind(&feedback.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::FeedbackAlreadySubmitted))?;

        Feedback::try_from(model)
    }

    #[instrument(skip(self))]
    async fn rating_summary(&self, user_id: UserId) -> RepoResult<RatingSummary> {
        let model = sqlx::query_as::<_, RatingSummaryModel>(
            r"
            SELECT COUNT(*) AS count, COALESCE(SUM(score), 0)::BIGINT AS total
            FROM feedback
            WHERE ratee_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(RatingSummary::from(model))
    }
}
