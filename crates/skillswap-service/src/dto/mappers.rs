//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use skillswap_core::entities::{Feedback, RatingSummary, SwapParty, SwapRequest, SwapWithParties, User};
use skillswap_core::UserId;

use super::responses::{
    FeedbackResponse, PartyResponse, ProfileResponse, PublicProfileResponse, RatingResponse,
    SwapResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            skills_offered: user.skills_offered.clone(),
            skills_wanted: user.skills_wanted.clone(),
            availability: user.availability.clone(),
            location: user.location.clone(),
            photo_url: user.photo_url.clone(),
            is_public: user.is_public,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// A directory entry needs the user's rating next to the profile
pub struct RatedUser {
    pub user: User,
    pub rating: RatingSummary,
}

impl From<RatedUser> for PublicProfileResponse {
    fn from(RatedUser { user, rating }: RatedUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            skills_offered: user.skills_offered,
            skills_wanted: user.skills_wanted,
            availability: user.availability,
            location: user.location,
            photo_url: user.photo_url,
            is_public: user.is_public,
            average_rating: rating.average(),
            rating_count: rating.count,
        }
    }
}

impl RatingResponse {
    pub fn new(user_id: UserId, summary: RatingSummary) -> Self {
        Self {
            user_id,
            average_rating: summary.average(),
            rating_count: summary.count,
        }
    }
}

// ============================================================================
// Swap Mappers
// ============================================================================

impl From<SwapParty> for PartyResponse {
    fn from(party: SwapParty) -> Self {
        Self {
            id: party.id,
            name: party.name,
        }
    }
}

impl From<SwapRequest> for SwapResponse {
    fn from(swap: SwapRequest) -> Self {
        Self {
            id: swap.id,
            requester_id: swap.requester_id,
            receiver_id: swap.receiver_id,
            skill_offered_by_requester: swap.skill_offered_by_requester,
            skill_wanted_by_requester: swap.skill_wanted_by_requester,
            status: swap.status,
            created_at: swap.created_at,
            updated_at: swap.updated_at,
            requester: None,
            receiver: None,
        }
    }
}

impl From<SwapWithParties> for SwapResponse {
    fn from(listed: SwapWithParties) -> Self {
        Self {
            requester: Some(listed.requester.into()),
            receiver: Some(listed.receiver.into()),
            ..Self::from(listed.swap)
        }
    }
}

// ============================================================================
// Feedback Mappers
// ============================================================================

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id,
            swap_id: feedback.swap_id,
            rater_id: feedback.rater_id,
            ratee_id: feedback.ratee_id,
            score: feedback.score.value(),
            comment: feedback.comment,
            created_at: feedback.created_at,
        }
    }
}
