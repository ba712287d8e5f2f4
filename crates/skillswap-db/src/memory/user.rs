//! In-memory implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use skillswap_core::entities::{NewUser, ProfilePatch, User};
use skillswap_core::error::DomainError;
use skillswap_core::traits::{RepoResult, UserRepository};
use skillswap_core::value_objects::UserId;

use super::{take_id, MemoryStore, UserRecord};

/// In-memory implementation of UserRepository
#[derive(Debug, Clone)]
pub struct MemoryUserRepository {
    store: MemoryStore,
}

impl MemoryUserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let tables = self.store.tables.read();
        Ok(tables
            .users
            .get(&id.into_inner())
            .map(|record| record.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let tables = self.store.tables.read();
        Ok(tables
            .users
            .values()
            .find(|record| record.user.email == email)
            .map(|record| record.user.clone()))
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut tables = self.store.tables.write();

        if tables.users.values().any(|record| record.user.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let now = Utc::now();
        let id = take_id(&mut tables.next_user_id);
        let created = User {
            id: UserId::new(id),
            name: user.name.clone(),
            email: user.email.clone(),
            skills_offered: Vec::new(),
            skills_wanted: Vec::new(),
            availability: None,
            location: None,
            photo_url: None,
            is_public: user.is_public,
            created_at: now,
            updated_at: now,
        };

        tables.users.insert(
            id,
            UserRecord {
                user: created.clone(),
                password_hash: password_hash.to_string(),
            },
        );

        Ok(created)
    }

    #[instrument(skip(self, patch))]
    async fn update_profile(&self, id: UserId, patch: &ProfilePatch) -> RepoResult<User> {
        let mut tables = self.store.tables.write();

        let record = tables
            .users
            .get_mut(&id.into_inner())
            .ok_or(DomainError::UserNotFound(id))?;

        // Read and write happen under the same lock
        record.user.apply_patch(patch.clone());

        Ok(record.user.clone())
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        let tables = self.store.tables.read();
        Ok(tables
            .users
            .get(&id.into_inner())
            .map(|record| record.password_hash.clone()))
    }

    async fn list_public(&self, skill_filter: Option<&str>) -> RepoResult<Vec<User>> {
        let tables = self.store.tables.read();
        Ok(tables
            .users
            .values()
            .map(|record| &record.user)
            .filter(|user| user.is_public)
            .filter(|user| skill_filter.map_or(true, |f| user.offers_skill_matching(f)))
            .cloned()
            .collect())
    }
}
