//! Swap request entity and its lifecycle rules
//!
//! A swap starts `pending` and moves exactly once to `accepted` or
//! `rejected`. Only the receiver may decide, only the requester may withdraw
//! a pending request, and the actor is always checked before the status.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{SwapId, UserId};

// ============================================================================
// Status
// ============================================================================

/// Lifecycle status of a swap request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Rejected,
}

impl SwapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// `accepted` and `rejected` never change again
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwapStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            other => Err(DomainError::InvalidSwapStatus(other.to_string())),
        }
    }
}

/// The receiver's answer to a pending swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapDecision {
    Accepted,
    Rejected,
}

impl From<SwapDecision> for SwapStatus {
    fn from(decision: SwapDecision) -> Self {
        match decision {
            SwapDecision::Accepted => Self::Accepted,
            SwapDecision::Rejected => Self::Rejected,
        }
    }
}

impl TryFrom<SwapStatus> for SwapDecision {
    type Error = DomainError;

    fn try_from(status: SwapStatus) -> Result<Self, Self::Error> {
        match status {
            SwapStatus::Accepted => Ok(Self::Accepted),
            SwapStatus::Rejected => Ok(Self::Rejected),
            SwapStatus::Pending => Err(DomainError::InvalidSwapStatus(status.to_string())),
        }
    }
}

// ============================================================================
// Swap request
// ============================================================================

/// A bilateral proposal: the requester offers one skill in exchange for another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub id: SwapId,
    pub requester_id: UserId,
    pub receiver_id: UserId,
    pub skill_offered_by_requester: String,
    pub skill_wanted_by_requester: String,
    pub status: SwapStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SwapRequest {
    pub fn is_pending(&self) -> bool {
        self.status == SwapStatus::Pending
    }

    /// Check if the user is the requester or the receiver
    pub fn involves(&self, user_id: UserId) -> bool {
        self.requester_id == user_id || self.receiver_id == user_id
    }

    /// The other party of the swap, if `user_id` takes part in it
    pub fn counterparty(&self, user_id: UserId) -> Option<UserId> {
        if self.requester_id == user_id {
            Some(self.receiver_id)
        } else if self.receiver_id == user_id {
            Some(self.requester_id)
        } else {
            None
        }
    }

    /// Receiver may accept or reject while the swap is pending
    pub fn ensure_can_respond(&self, actor: UserId) -> Result<(), DomainError> {
        if self.receiver_id != actor {
            return Err(DomainError::NotSwapReceiver);
        }
        if !self.is_pending() {
            return Err(DomainError::SwapAlreadyResolved(self.status));
        }
        Ok(())
    }

    /// Requester may withdraw while the swap is pending
    pub fn ensure_can_cancel(&self, actor: UserId) -> Result<(), DomainError> {
        if self.requester_id != actor {
            return Err(DomainError::NotSwapRequester);
        }
        if !self.is_pending() {
            return Err(DomainError::SwapNotCancellable(self.status));
        }
        Ok(())
    }

    /// Either party may leave feedback once the swap was accepted
    pub fn ensure_can_review(&self, actor: UserId) -> Result<(), DomainError> {
        if !self.involves(actor) {
            return Err(DomainError::NotSwapParticipant);
        }
        if self.status != SwapStatus::Accepted {
            return Err(DomainError::SwapNotAccepted(self.status));
        }
        Ok(())
    }
}

/// Data needed to create a swap; the store assigns id, status and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSwapRequest {
    pub requester_id: UserId,
    pub receiver_id: UserId,
    pub skill_offered_by_requester: String,
    pub skill_wanted_by_requester: String,
}

impl NewSwapRequest {
    /// Build a new request, rejecting self-swaps and empty skills
    pub fn new(
        requester_id: UserId,
        receiver_id: UserId,
        skill_offered_by_requester: String,
        skill_wanted_by_requester: String,
    ) -> Result<Self, DomainError> {
        if requester_id == receiver_id {
            return Err(DomainError::SelfSwap);
        }
        // Skill names are kept verbatim; only empty strings are refused
        if skill_offered_by_requester.is_empty() || skill_wanted_by_requester.is_empty() {
            return Err(DomainError::ValidationError(
                "Both skills of a swap must be provided".to_string(),
            ));
        }

        Ok(Self {
            requester_id,
            receiver_id,
            skill_offered_by_requester,
            skill_wanted_by_requester,
        })
    }
}

/// Minimal view of a party shown next to a swap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapParty {
    pub id: UserId,
    pub name: String,
}

/// A swap joined with both parties' names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapWithParties {
    pub swap: SwapRequest,
    pub requester: SwapParty,
    pub receiver: SwapParty,
}
