//! In-memory implementation of FeedbackRepository

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use skillswap_core::entities::{Feedback, NewFeedback, RatingSummary};
use skillswap_core::error::DomainError;
use skillswap_core::traits::{FeedbackRepository, RepoResult};
use skillswap_core::value_objects::{FeedbackId, UserId};

use super::{take_id, MemoryStore};

/// In-memory implementation of FeedbackRepository
#[derive(Debug, Clone)]
pub struct MemoryFeedbackRepository {
    store: MemoryStore,
}

impl MemoryFeedbackRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FeedbackRepository for MemoryFeedbackRepository {
    #[instrument(skip(self, feedback), fields(swap_id = %feedback.swap_id, rater_id = %feedback.rater_id))]
    async fn create(&self, feedback: &NewFeedback) -> RepoResult<Feedback> {
        let mut tables = self.store.tables.write();

        if !tables.swaps.contains_key(&feedback.swap_id.into_inner()) {
            return Err(DomainError::SwapNotFound(feedback.swap_id));
        }
        let duplicate = tables
            .feedback
            .values()
            .any(|f| f.swap_id == feedback.swap_id && f.rater_id == feedback.rater_id);
        if duplicate {
            return Err(DomainError::FeedbackAlreadySubmitted);
        }

        let id = take_id(&mut tables.next_feedback_id);
        let created = Feedback {
            id: FeedbackId::new(id),
            swap_id: feedback.swap_id,
            rater_id: feedback.rater_id,
            ratee_id: feedback.ratee_id,
            score: feedback.score,
            comment: feedback.comment.clone(),
            created_at: Utc::now(),
        };
        tables.feedback.insert(id, created.clone());

        Ok(created)
    }

    async fn rating_summary(&self, user_id: UserId) -> RepoResult<RatingSummary> {
        let tables = self.store.tables.read();
        Ok(RatingSummary::from_scores(
            tables
                .feedback
                .values()
                .filter(|f| f.ratee_id == user_id)
                .map(|f| f.score),
        ))
    }
}
