//! Feedback entity <-> model mapper

use skillswap_core::entities::{Feedback, RatingSummary};
use skillswap_core::error::DomainError;
use skillswap_core::value_objects::{FeedbackId, Score, SwapId, UserId};

use crate::models::{FeedbackModel, RatingSummaryModel};

impl TryFrom<FeedbackModel> for Feedback {
    type Error = DomainError;

    fn try_from(model: FeedbackModel) -> Result<Self, Self::Error> {
        let score = Score::try_from(i32::from(model.score)).map_err(|_| {
            DomainError::DatabaseError(format!(
                "feedback {} has out-of-range score {}",
                model.id, model.score
            ))
        })?;

        Ok(Feedback {
            id: FeedbackId::new(model.id),
            swap_id: SwapId::new(model.swap_id),
            rater_id: UserId::new(model.rater_id),
            ratee_id: UserId::new(model.ratee_id),
            score,
            comment: model.comment,
            created_at: model.created_at,
        })
    }
}

impl From<RatingSummaryModel> for RatingSummary {
    fn from(model: RatingSummaryModel) -> Self {
        RatingSummary {
            count: model.count,
            total: model.total,
        }
    }
}
