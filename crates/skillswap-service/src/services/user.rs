//! User service
//!
//! Handles the caller's own profile.

use skillswap_core::entities::{ProfilePatch, User};
use skillswap_core::UserId;
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{ProfileResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the caller's full profile
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: UserId) -> ServiceResult<ProfileResponse> {
        let user = self.get_user_entity(user_id).await?;
        Ok(ProfileResponse::from(&user))
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))
    }

    /// Apply a partial update to the caller's profile
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: UserId,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        request.validate()?;

        let patch = ProfilePatch::from(request);
        if patch.is_empty() {
            debug!(user_id = %user_id, "Empty profile patch");
            return self.get_profile(user_id).await;
        }

        // The store applies the patch atomically; omitted fields are never rewritten
        let user = self.ctx.user_repo().update_profile(user_id, &patch).await?;
        info!(user_id = %user_id, "User profile updated");

        Ok(ProfileResponse::from(&user))
    }
}
