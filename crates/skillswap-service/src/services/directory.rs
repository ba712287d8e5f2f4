//! Directory service
//!
//! Read path over public profiles.

use tracing::{debug, instrument};

use crate::dto::{DirectoryQuery, PublicProfileResponse, RatedUser};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Directory service
pub struct DirectoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DirectoryService<'a> {
    /// Create a new DirectoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List public users in id order, optionally only those offering a skill
    /// whose name contains `query.skill`
    ///
    /// An empty filter matches everyone.
    #[instrument(skip(self))]
    pub async fn list_public(&self, query: DirectoryQuery) -> ServiceResult<Vec<PublicProfileResponse>> {
        let filter = query.skill.as_deref().filter(|skill| !skill.is_empty());

        let users = self.ctx.user_repo().list_public(filter).await?;
        debug!(count = users.len(), "Listed public users");

        let mut entries = Vec::with_capacity(users.len());
        for user in users {
            let rating = self.ctx.feedback_repo().rating_summary(user.id).await?;
            entries.push(PublicProfileResponse::from(RatedUser { user, rating }));
        }

        Ok(entries)
    }
}
