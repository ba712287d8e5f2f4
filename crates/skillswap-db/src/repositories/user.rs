//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use skillswap_core::entities::{NewUser, ProfilePatch, User};
use skillswap_core::error::DomainError;
use skillswap_core::traits::{RepoResult, UserRepository};
use skillswap_core::value_objects::UserId;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

const USER_COLUMNS: &str = "id, name, email, skills_offered, skills_wanted, availability, \
     location, photo_url, is_public, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        // The unique index on email decides concurrent registrations
        let model = sqlx::query_as::<_, UserModel>(&format!(
            "INSERT INTO users (name, email, password_hash, is_public) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.name)
        .bind(&user.email)
        .bind(password_hash)
        .bind(user.is_public)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(User::from(model))
    }

    #[instrument(skip(self, patch))]
    async fn update_profile(&self, id: UserId, patch: &ProfilePatch) -> RepoResult<User> {
        let patch = patch.clone().normalized();

        // NULL keeps the column; an empty string clears an optional text field
        let model = sqlx::query_as::<_, UserModel>(&format!(
            "UPDATE users \
             SET name = COALESCE($2, name), \
                 skills_offered = COALESCE($3, skills_offered), \
                 skills_wanted = COALESCE($4, skills_wanted), \
                 availability = CASE WHEN $5::TEXT IS NULL THEN availability ELSE NULLIF($5, '') END, \
                 location = CASE WHEN $6::TEXT IS NULL THEN location ELSE NULLIF($6, '') END, \
                 photo_url = CASE WHEN $7::TEXT IS NULL THEN photo_url ELSE NULLIF($7, '') END, \
                 is_public = COALESCE($8, is_public), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id.into_inner())
        .bind(patch.name)
        .bind(patch.skills_offered)
        .bind(patch.skills_wanted)
        .bind(patch.availability)
        .bind(patch.location)
        .bind(patch.photo_url)
        .bind(patch.is_public)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(User::from).ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn list_public(&self, skill_filter: Option<&str>) -> RepoResult<Vec<User>> {
        // strpos keeps the match literal: no LIKE wildcards, case-sensitive,
        // and never spanning two array entries
        let results = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE is_public \
               AND ($1::TEXT IS NULL \
                    OR EXISTS (SELECT 1 FROM unnest(skills_offered) AS s(skill) \
                               WHERE strpos(s.skill, $1) > 0)) \
             ORDER BY id"
        ))
        .bind(skill_filter)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }
}
