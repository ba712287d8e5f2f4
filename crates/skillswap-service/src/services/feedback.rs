//! Feedback service
//!
//! Ratings left by the parties of an accepted swap.

use skillswap_core::entities::NewFeedback;
use skillswap_core::{DomainError, Score, SwapId, UserId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{FeedbackResponse, RatingResponse, SubmitFeedbackRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Feedback service
pub struct FeedbackService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedbackService<'a> {
    /// Create a new FeedbackService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Rate the counterparty of an accepted swap, once per rater
    #[instrument(skip(self, request), fields(score = request.score))]
    pub async fn submit(
        &self,
        swap_id: SwapId,
        rater_id: UserId,
        request: SubmitFeedbackRequest,
    ) -> ServiceResult<FeedbackResponse> {
        let swap = self
            .ctx
            .swap_repo()
            .find_by_id(swap_id)
            .await?
            .ok_or(DomainError::NotSwapParticipant)?;
        swap.ensure_can_review(rater_id)?;

        // Body checks only once the caller is known to be a party
        request.validate()?;
        let score = Score::try_from(request.score)?;
        let ratee_id = swap
            .counterparty(rater_id)
            .ok_or(DomainError::NotSwapParticipant)?;

        let feedback = self
            .ctx
            .feedback_repo()
            .create(&NewFeedback {
                swap_id,
                rater_id,
                ratee_id,
                score,
                comment: request.comment.filter(|comment| !comment.trim().is_empty()),
            })
            .await?;

        info!(feedback_id = %feedback.id, ratee_id = %ratee_id, "Feedback recorded");

        Ok(FeedbackResponse::from(feedback))
    }

    /// Mean score of a public user
    #[instrument(skip(self))]
    pub async fn rating_for(&self, user_id: UserId) -> ServiceResult<RatingResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .filter(|user| user.is_public)
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        let summary = self.ctx.feedback_repo().rating_summary(user.id).await?;

        Ok(RatingResponse::new(user.id, summary))
    }
}
