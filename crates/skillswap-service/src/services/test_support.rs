//! Shared fixtures for service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use skillswap_common::auth::JwtService;
use skillswap_core::entities::{NewSwapRequest, SwapRequest, SwapStatus, SwapWithParties};
use skillswap_core::traits::{RepoResult, SwapRepository};
use skillswap_core::{SwapId, UserId};
use skillswap_db::MemoryStore;

use crate::dto::{RegisterRequest, UpdateProfileRequest};

use super::{AuthService, ServiceContext, SwapPolicy, UserService};

fn jwt() -> Arc<JwtService> {
    Arc::new(JwtService::new("test-secret", 86_400))
}

pub(crate) fn context_with(policy: SwapPolicy) -> ServiceContext {
    ServiceContext::builder()
        .memory_store(&MemoryStore::new())
        .jwt_service(jwt())
        .swap_policy(policy)
        .build()
        .unwrap()
}

pub(crate) fn context() -> ServiceContext {
    context_with(SwapPolicy::default())
}

/// Context over an existing store
pub(crate) fn context_on(store: &MemoryStore) -> ServiceContext {
    ServiceContext::builder()
        .memory_store(store)
        .jwt_service(jwt())
        .build()
        .unwrap()
}

/// Context over `store` whose swap reads and writes go through `swaps`
pub(crate) fn context_with_swaps(store: &MemoryStore, swaps: Arc<dyn SwapRepository>) -> ServiceContext {
    ServiceContext::builder()
        .memory_store(store)
        .swap_repo(swaps)
        .jwt_service(jwt())
        .build()
        .unwrap()
}

/// Register a user named `name` and return their id
pub(crate) async fn register(ctx: &ServiceContext, name: &str) -> UserId {
    let auth = AuthService::new(ctx);
    let token = auth
        .register(RegisterRequest {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: "password".to_string(),
        })
        .await
        .unwrap();
    auth.authenticate(&token.token).unwrap()
}

/// Register a user and publish the given offered skills
pub(crate) async fn register_offering(ctx: &ServiceContext, name: &str, skills: &[&str]) -> UserId {
    let id = register(ctx, name).await;
    UserService::new(ctx)
        .update_profile(
            id,
            UpdateProfileRequest {
                skills_offered: Some(skills.iter().map(ToString::to_string).collect()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    id
}

/// Swap repository that answers the first read of a swap with an outdated
/// copy, as a caller would see it if another request changed the swap right
/// after that read. Everything else goes to the real store.
pub(crate) struct StaleSwapRepository {
    inner: Arc<dyn SwapRepository>,
    stale: Mutex<Option<SwapRequest>>,
    conditional_writes: AtomicUsize,
}

impl StaleSwapRepository {
    pub(crate) fn new(inner: Arc<dyn SwapRepository>, stale: SwapRequest) -> Arc<Self> {
        Arc::new(Self {
            inner,
            stale: Mutex::new(Some(stale)),
            conditional_writes: AtomicUsize::new(0),
        })
    }

    /// Number of `*_if_pending` calls that reached the store
    pub(crate) fn conditional_writes(&self) -> usize {
        self.conditional_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SwapRepository for StaleSwapRepository {
    async fn find_by_id(&self, id: SwapId) -> RepoResult<Option<SwapRequest>> {
        let stale = self.stale.lock().take();
        match stale {
            Some(swap) if swap.id == id => Ok(Some(swap)),
            _ => self.inner.find_by_id(id).await,
        }
    }

    async fn create(&self, swap: &NewSwapRequest) -> RepoResult<SwapRequest> {
        self.inner.create(swap).await
    }

    async fn list_incoming(&self, user_id: UserId) -> RepoResult<Vec<SwapWithParties>> {
        self.inner.list_incoming(user_id).await
    }

    async fn list_outgoing(&self, user_id: UserId) -> RepoResult<Vec<SwapWithParties>> {
        self.inner.list_outgoing(user_id).await
    }

    async fn transition_if_pending(
        &self,
        id: SwapId,
        status: SwapStatus,
    ) -> RepoResult<Option<SwapRequest>> {
        self.conditional_writes.fetch_add(1, Ordering::SeqCst);
        self.inner.transition_if_pending(id, status).await
    }

    async fn delete_if_pending(&self, id: SwapId) -> RepoResult<bool> {
        self.conditional_writes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_if_pending(id).await
    }
}
