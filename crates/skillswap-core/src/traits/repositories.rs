//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL or in-memory).

use async_trait::async_trait;

use crate::entities::{
    Feedback, NewFeedback, NewSwapRequest, NewUser, ProfilePatch, RatingSummary, SwapRequest,
    SwapStatus, SwapWithParties, User,
};
use crate::error::DomainError;
use crate::value_objects::{SwapId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email (exact match)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Create a new user with empty skill lists
    ///
    /// Fails with `EmailAlreadyExists` when the email is taken, even under
    /// concurrent registrations.
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Apply a profile patch in one atomic write and return the stored user
    ///
    /// Only the fields named by the patch are written, so concurrent patches
    /// touching different fields never undo each other.
    async fn update_profile(&self, id: UserId, patch: &ProfilePatch) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;

    /// List public users in id order, optionally keeping only those with an
    /// offered skill containing `skill_filter` (case-sensitive)
    async fn list_public(&self, skill_filter: Option<&str>) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Swap Repository
// ============================================================================

#[async_trait]
pub trait SwapRepository: Send + Sync {
    /// Find swap by ID
    async fn find_by_id(&self, id: SwapId) -> RepoResult<Option<SwapRequest>>;

    /// Create a pending swap
    ///
    /// Fails with `UserNotFound` when either party does not exist.
    async fn create(&self, swap: &NewSwapRequest) -> RepoResult<SwapRequest>;

    /// Swaps where the user is the receiver, in id order
    async fn list_incoming(&self, user_id: UserId) -> RepoResult<Vec<SwapWithParties>>;

    /// Swaps where the user is the requester, in id order
    async fn list_outgoing(&self, user_id: UserId) -> RepoResult<Vec<SwapWithParties>>;

    /// Atomically move a swap out of `pending`
    ///
    /// Returns `None` when the swap is missing or no longer pending.
    async fn transition_if_pending(
        &self,
        id: SwapId,
        status: SwapStatus,
    ) -> RepoResult<Option<SwapRequest>>;

    /// Atomically delete a swap that is still pending
    ///
    /// Returns `false` when the swap is missing or no longer pending.
    async fn delete_if_pending(&self, id: SwapId) -> RepoResult<bool>;
}

// ============================================================================
// Feedback Repository
// ============================================================================

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Store feedback
    ///
    /// Fails with `FeedbackAlreadySubmitted` when the rater already reviewed
    /// this swap.
    async fn create(&self, feedback: &NewFeedback) -> RepoResult<Feedback>;

    /// Count and sum of all scores received by a user
    async fn rating_summary(&self, user_id: UserId) -> RepoResult<RatingSummary>;
}

// ============================================================================
// Health
// ============================================================================

#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Check that the backing store answers
    async fn ping(&self) -> RepoResult<()>;
}
