//! Service context - dependency container for services
//!
//! Holds the repositories, the store health check, the credential services and
//! the swap policy. Built once at startup and shared through application state.

use std::sync::Arc;

use skillswap_common::auth::{JwtService, PasswordService};
use skillswap_core::traits::{FeedbackRepository, StoreHealth, SwapRepository, UserRepository};
use skillswap_db::{
    MemoryStore, PgFeedbackRepository, PgPool, PgStoreHealth, PgSwapRepository, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Rules applied when a swap is proposed
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapPolicy {
    /// Require both skills to appear in the respective parties' offered lists
    pub require_published_skills: bool,
}

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    swap_repo: Arc<dyn SwapRepository>,
    feedback_repo: Arc<dyn FeedbackRepository>,
    store_health: Arc<dyn StoreHealth>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: Arc<PasswordService>,

    swap_policy: SwapPolicy,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the swap repository
    pub fn swap_repo(&self) -> &dyn SwapRepository {
        self.swap_repo.as_ref()
    }

    /// Get the feedback repository
    pub fn feedback_repo(&self) -> &dyn FeedbackRepository {
        self.feedback_repo.as_ref()
    }

    /// Get the store health check
    pub fn store_health(&self) -> &dyn StoreHealth {
        self.store_health.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        self.password_service.as_ref()
    }

    pub fn swap_policy(&self) -> SwapPolicy {
        self.swap_policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .field("swap_policy", &self.swap_policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    swap_repo: Option<Arc<dyn SwapRepository>>,
    feedback_repo: Option<Arc<dyn FeedbackRepository>>,
    store_health: Option<Arc<dyn StoreHealth>>,
    jwt_service: Option<Arc<JwtService>>,
    password_service: Option<Arc<PasswordService>>,
    swap_policy: SwapPolicy,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire every repository to one in-memory store
    pub fn memory_store(self, store: &MemoryStore) -> Self {
        self.user_repo(Arc::new(store.users()))
            .swap_repo(Arc::new(store.swaps()))
            .feedback_repo(Arc::new(store.feedback()))
            .store_health(Arc::new(store.clone()))
    }

    /// Wire every repository to a PostgreSQL pool
    pub fn postgres(self, pool: PgPool) -> Self {
        self.user_repo(Arc::new(PgUserRepository::new(pool.clone())))
            .swap_repo(Arc::new(PgSwapRepository::new(pool.clone())))
            .feedback_repo(Arc::new(PgFeedbackRepository::new(pool.clone())))
            .store_health(Arc::new(PgStoreHealth::new(pool)))
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn swap_repo(mut self, repo: Arc<dyn SwapRepository>) -> Self {
        self.swap_repo = Some(repo);
        self
    }

    pub fn feedback_repo(mut self, repo: Arc<dyn FeedbackRepository>) -> Self {
        self.feedback_repo = Some(repo);
        self
    }

    pub fn store_health(mut self, check: Arc<dyn StoreHealth>) -> Self {
        self.store_health = Some(check);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn password_service(mut self, service: Arc<PasswordService>) -> Self {
        self.password_service = Some(service);
        self
    }

    pub fn swap_policy(mut self, policy: SwapPolicy) -> Self {
        self.swap_policy = policy;
        self
    }

    /// Build the ServiceContext
    ///
    /// The password service falls back to the permissive default.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            user_repo: self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            swap_repo: self.swap_repo.ok_or_else(|| ServiceError::validation("swap_repo is required"))?,
            feedback_repo: self
                .feedback_repo
                .ok_or_else(|| ServiceError::validation("feedback_repo is required"))?,
            store_health: self
                .store_health
                .ok_or_else(|| ServiceError::validation("store_health is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            password_service: self.password_service.unwrap_or_default(),
            swap_policy: self.swap_policy,
        })
    }
}
