//! In-memory implementation of SwapRepository

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use skillswap_core::entities::{
    NewSwapRequest, SwapParty, SwapRequest, SwapStatus, SwapWithParties,
};
use skillswap_core::error::DomainError;
use skillswap_core::traits::{RepoResult, SwapRepository};
use skillswap_core::value_objects::{SwapId, UserId};

use super::{take_id, MemoryStore, Tables};

/// In-memory implementation of SwapRepository
#[derive(Debug, Clone)]
pub struct MemorySwapRepository {
    store: MemoryStore,
}

impl MemorySwapRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    fn list_where<F>(&self, keep: F) -> RepoResult<Vec<SwapWithParties>>
    where
        F: Fn(&SwapRequest) -> bool,
    {
        let tables = self.store.tables.read();
        tables
            .swaps
            .values()
            .filter(|swap| keep(swap))
            .map(|swap| with_parties(&tables, swap))
            .collect()
    }
}

fn party(tables: &Tables, id: UserId) -> RepoResult<SwapParty> {
    let name = tables
        .user_name(id.into_inner())
        .ok_or(DomainError::UserNotFound(id))?;
    Ok(SwapParty {
        id,
        name: name.to_string(),
    })
}

fn with_parties(tables: &Tables, swap: &SwapRequest) -> RepoResult<SwapWithParties> {
    Ok(SwapWithParties {
        requester: party(tables, swap.requester_id)?,
        receiver: party(tables, swap.receiver_id)?,
        swap: swap.clone(),
    })
}

#[async_trait]
impl SwapRepository for MemorySwapRepository {
    async fn find_by_id(&self, id: SwapId) -> RepoResult<Option<SwapRequest>> {
        let tables = self.store.tables.read();
        Ok(tables.swaps.get(&id.into_inner()).cloned())
    }

    #[instrument(skip(self))]
    async fn create(&self, swap: &NewSwapRequest) -> RepoResult<SwapRequest> {
        let mut tables = self.store.tables.write();

        for party_id in [swap.requester_id, swap.receiver_id] {
            if !tables.users.contains_key(&party_id.into_inner()) {
                return Err(DomainError::UserNotFound(party_id));
            }
        }

        let now = Utc::now();
        let id = take_id(&mut tables.next_swap_id);
        let created = SwapRequest {
            id: SwapId::new(id),
            requester_id: swap.requester_id,
            receiver_id: swap.receiver_id,
            skill_offered_by_requester: swap.skill_offered_by_requester.clone(),
            skill_wanted_by_requester: swap.skill_wanted_by_requester.clone(),
            status: SwapStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        tables.swaps.insert(id, created.clone());

        Ok(created)
    }

    async fn list_incoming(&self, user_id: UserId) -> RepoResult<Vec<SwapWithParties>> {
        self.list_where(|swap| swap.receiver_id == user_id)
    }

    async fn list_outgoing(&self, user_id: UserId) -> RepoResult<Vec<SwapWithParties>> {
        self.list_where(|swap| swap.requester_id == user_id)
    }

    #[instrument(skip(self))]
    async fn transition_if_pending(
        &self,
        id: SwapId,
        status: SwapStatus,
    ) -> RepoResult<Option<SwapRequest>> {
        let mut tables = self.store.tables.write();

        match tables.swaps.get_mut(&id.into_inner()) {
            Some(swap) if swap.is_pending() => {
                swap.status = status;
                swap.updated_at = Utc::now();
                Ok(Some(swap.clone()))
            }
            _ => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn delete_if_pending(&self, id: SwapId) -> RepoResult<bool> {
        let mut tables = self.store.tables.write();

        let pending = tables
            .swaps
            .get(&id.into_inner())
            .is_some_and(SwapRequest::is_pending);
        if pending {
            tables.swaps.remove(&id.into_inner());
        }

        Ok(pending)
    }
}
