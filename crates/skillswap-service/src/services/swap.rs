//! Swap service
//!
//! Creates, lists, answers and withdraws swap requests.
//!
//! Every mutation re-reads the swap, checks who is acting before looking at
//! the status, then writes through a conditional update keyed on
//! `status = pending`. If that write loses a race the swap is read again and
//! the error is derived from its fresh state, so concurrent callers see
//! exactly one success.

use skillswap_core::entities::{NewSwapRequest, SwapRequest, SwapStatus};
use skillswap_core::{DomainError, SwapId, UserId};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{CreateSwapRequest, RespondSwapRequest, SwapListResponse, SwapResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Swap service
pub struct SwapService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SwapService<'a> {
    /// Create a new SwapService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Propose a swap to another user; the new swap is pending
    #[instrument(skip(self, request), fields(receiver_id = %request.receiver_id))]
    pub async fn create_swap(
        &self,
        requester_id: UserId,
        request: CreateSwapRequest,
    ) -> ServiceResult<SwapResponse> {
        request.validate()?;

        let new_swap = NewSwapRequest::new(
            requester_id,
            request.receiver_id,
            request.skill_offered_by_requester,
            request.skill_wanted_by_requester,
        )?;

        if self.ctx.swap_policy().require_published_skills {
            self.ensure_skills_published(&new_swap).await?;
        }

        let swap = self.ctx.swap_repo().create(&new_swap).await?;

        info!(swap_id = %swap.id, requester_id = %requester_id, "Swap proposed");

        Ok(SwapResponse::from(swap))
    }

    /// Swaps addressed to and proposed by `user_id`, with both parties' names
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: UserId) -> ServiceResult<SwapListResponse> {
        let incoming = self.ctx.swap_repo().list_incoming(user_id).await?;
        let outgoing = self.ctx.swap_repo().list_outgoing(user_id).await?;

        Ok(SwapListResponse {
            incoming: incoming.into_iter().map(SwapResponse::from).collect(),
            outgoing: outgoing.into_iter().map(SwapResponse::from).collect(),
        })
    }

    /// Accept or reject a pending swap as its receiver
    #[instrument(skip(self, request), fields(decision = ?request.status))]
    pub async fn respond(
        &self,
        swap_id: SwapId,
        actor: UserId,
        request: RespondSwapRequest,
    ) -> ServiceResult<SwapResponse> {
        let rule = move |swap: &SwapRequest| swap.ensure_can_respond(actor);

        let swap = self.load(swap_id, DomainError::NotSwapReceiver).await?;
        rule(&swap)?;

        let status = SwapStatus::from(request.status);
        match self.ctx.swap_repo().transition_if_pending(swap_id, status).await? {
            Some(updated) => {
                info!(swap_id = %swap_id, status = %updated.status, "Swap answered");
                Ok(SwapResponse::from(updated))
            }
            None => Err(self.after_lost_race(swap_id, rule, DomainError::NotSwapReceiver).await),
        }
    }

    /// Withdraw a pending swap as its requester
    #[instrument(skip(self))]
    pub async fn cancel(&self, swap_id: SwapId, actor: UserId) -> ServiceResult<()> {
        let rule = move |swap: &SwapRequest| swap.ensure_can_cancel(actor);

        let swap = self.load(swap_id, DomainError::NotSwapRequester).await?;
        rule(&swap)?;

        if self.ctx.swap_repo().delete_if_pending(swap_id).await? {
            info!(swap_id = %swap_id, "Swap withdrawn");
            Ok(())
        } else {
            Err(self.after_lost_race(swap_id, rule, DomainError::NotSwapRequester).await)
        }
    }

    /// Read a swap; a missing swap is reported as `missing` so callers cannot
    /// fish for ids they are not party to
    async fn load(&self, swap_id: SwapId, missing: DomainError) -> ServiceResult<SwapRequest> {
        self.ctx
            .swap_repo()
            .find_by_id(swap_id)
            .await?
            .ok_or(ServiceError::Domain(missing))
    }

    /// Explain why a conditional write matched no row
    async fn after_lost_race<F>(&self, swap_id: SwapId, rule: F, missing: DomainError) -> ServiceError
    where
        F: Fn(&SwapRequest) -> Result<(), DomainError>,
    {
        let fresh = match self.load(swap_id, missing).await {
            Ok(swap) => swap,
            Err(err) => return err,
        };

        match rule(&fresh) {
            Err(err) => {
                warn!(swap_id = %swap_id, status = %fresh.status, "Swap changed concurrently");
                err.into()
            }
            Ok(()) => ServiceError::internal(format!(
                "conditional write on swap {swap_id} matched nothing while it is still {}",
                fresh.status
            )),
        }
    }

    async fn ensure_skills_published(&self, swap: &NewSwapRequest) -> ServiceResult<()> {
        let users = self.ctx.user_repo();

        let requester = users
            .find_by_id(swap.requester_id)
            .await?
            .ok_or(DomainError::UserNotFound(swap.requester_id))?;
        let receiver = users
            .find_by_id(swap.receiver_id)
            .await?
            .ok_or(DomainError::UserNotFound(swap.receiver_id))?;

        if !requester.offers(&swap.skill_offered_by_requester) {
            return Err(DomainError::SkillNotPublished {
                skill: swap.skill_offered_by_requester.clone(),
                owner: "requester",
            }
            .into());
        }
        if !receiver.offers(&swap.skill_wanted_by_requester) {
            return Err(DomainError::SkillNotPublished {
                skill: swap.skill_wanted_by_requester.clone(),
                owner: "receiver",
            }
            .into());
        }

        Ok(())
    }
}
