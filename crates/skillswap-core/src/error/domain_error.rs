//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::SwapStatus;
use crate::value_objects::{SwapId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Swap not found: {0}")]
    SwapNotFound(SwapId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Cannot create a swap with yourself")]
    SelfSwap,

    #[error("Skill '{skill}' is not listed in the {owner}'s offered skills")]
    SkillNotPublished { skill: String, owner: &'static str },

    #[error("Invalid swap status: {0}")]
    InvalidSwapStatus(String),

    #[error("Score must be between 1 and 5, got {0}")]
    InvalidScore(i32),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the receiver can respond to this swap")]
    NotSwapReceiver,

    #[error("Only the requester can delete this swap")]
    NotSwapRequester,

    #[error("Only participants of this swap can leave feedback")]
    NotSwapParticipant,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Feedback already submitted for this swap")]
    FeedbackAlreadySubmitted,

    // =========================================================================
    // State Errors
    // =========================================================================
    #[error("This swap is already {0}")]
    SwapAlreadyResolved(SwapStatus),

    #[error("Cannot delete a swap that is already {0}")]
    SwapNotCancellable(SwapStatus),

    #[error("Feedback requires an accepted swap, this one is {0}")]
    SwapNotAccepted(SwapStatus),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::SwapNotFound(_) => "UNKNOWN_SWAP",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::SelfSwap => "SELF_SWAP",
            Self::SkillNotPublished { .. } => "SKILL_NOT_PUBLISHED",
            Self::InvalidSwapStatus(_) => "INVALID_SWAP_STATUS",
            Self::InvalidScore(_) => "INVALID_SCORE",

            // Authorization
            Self::NotSwapReceiver => "NOT_SWAP_RECEIVER",
            Self::NotSwapRequester => "NOT_SWAP_REQUESTER",
            Self::NotSwapParticipant => "NOT_SWAP_PARTICIPANT",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::FeedbackAlreadySubmitted => "FEEDBACK_ALREADY_SUBMITTED",

            // State
            Self::SwapAlreadyResolved(_) => "SWAP_ALREADY_RESOLVED",
            Self::SwapNotCancellable(_) => "SWAP_NOT_CANCELLABLE",
            Self::SwapNotAccepted(_) => "SWAP_NOT_ACCEPTED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::SwapNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::WeakPassword(_)
                | Self::SelfSwap
                | Self::SkillNotPublished { .. }
                | Self::InvalidSwapStatus(_)
                | Self::InvalidScore(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotSwapReceiver | Self::NotSwapRequester | Self::NotSwapParticipant
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::FeedbackAlreadySubmitted)
    }

    /// Check if the operation is not allowed in the record's current state
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Self::SwapAlreadyResolved(_) | Self::SwapNotCancellable(_) | Self::SwapNotAccepted(_)
        )
    }
}
