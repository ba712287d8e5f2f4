//! PostgreSQL implementation of SwapRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use skillswap_core::entities::{NewSwapRequest, SwapRequest, SwapStatus, SwapWithParties};
use skillswap_core::traits::{RepoResult, SwapRepository};
use skillswap_core::value_objects::{SwapId, UserId};

use crate::models::{SwapModel, SwapWithPartiesModel};

use super::error::{map_db_error, map_foreign_key_violation, user_not_found};

const SWAP_COLUMNS: &str = "id, requester_id, receiver_id, skill_offered_by_requester, \
     skill_wanted_by_requester, status, created_at, updated_at";

/// Joined listing; `$1` is the party the listing is for
fn parties_query(party_column: &str) -> String {
    format!(
        "SELECT s.id, s.requester_id, s.receiver_id, s.skill_offered_by_requester, \
                s.skill_wanted_by_requester, s.status, s.created_at, s.updated_at, \
                rq.name AS requester_name, rc.name AS receiver_name \
         FROM swaps s \
         JOIN users rq ON rq.id = s.requester_id \
         JOIN users rc ON rc.id = s.receiver_id \
         WHERE s.{party_column} = $1 \
         ORDER BY s.id"
    )
}

/// PostgreSQL implementation of SwapRepository
#[derive(Clone)]
pub struct PgSwapRepository {
    pool: PgPool,
}

impl PgSwapRepository {
    /// Create a new PgSwapRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn list_by_party(
        &self,
        party_column: &str,
        user_id: UserId,
    ) -> RepoResult<Vec<SwapWithParties>> {
        let rows = sqlx::query_as::<_, SwapWithPartiesModel>(&parties_query(party_column))
            .bind(user_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(SwapWithParties::try_from).collect()
    }
}

#[async_trait]
impl SwapRepository for PgSwapRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: SwapId) -> RepoResult<Option<SwapRequest>> {
        let result = sqlx::query_as::<_, SwapModel>(&format!(
            "SELECT {SWAP_COLUMNS} FROM swaps WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(SwapRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create(&self, swap: &NewSwapRequest) -> RepoResult<SwapRequest> {
        // The requester is the authenticated caller, so a dangling
        // reference can only be the receiver
        let model = sqlx::query_as::<_, SwapModel>(&format!(
            "INSERT INTO swaps (requester_id, receiver_id, skill_offered_by_requester, \
                                skill_wanted_by_requester, status) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {SWAP_COLUMNS}"
        ))
        .bind(swap.requester_id.into_inner())
        .bind(swap.receiver_id.into_inner())
        .bind(&swap.skill_offered_by_requester)
        .bind(&swap.skill_wanted_by_requester)
        .bind(SwapStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || user_not_found(swap.receiver_id)))?;

        SwapRequest::try_from(model)
    }

    #[instrument(skip(self))]
    async fn list_incoming(&self, user_id: UserId) -> RepoResult<Vec<SwapWithParties>> {
        self.list_by_party("receiver_id", user_id).await
    }

    #[instrument(skip(self))]
    async fn list_outgoing(&self, user_id: UserId) -> RepoResult<Vec<SwapWithParties>> {
        self.list_by_party("requester_id", user_id).await
    }

    #[instrument(skip(self))]
    async fn transition_if_pending(
        &self,
        id: SwapId,
        status: SwapStatus,
    ) -> RepoResult<Option<SwapRequest>> {
        let result = sqlx::query_as::<_, SwapModel>(&format!(
            "UPDATE swaps SET status = $2, updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' \
             RETURNING {SWAP_COLUMNS}"
        ))
        .bind(id.into_inner())
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(SwapRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn delete_if_pending(&self, id: SwapId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM swaps WHERE id = $1 AND status = 'pending'
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
