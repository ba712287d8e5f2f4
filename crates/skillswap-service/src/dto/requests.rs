//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names travel as camelCase.

use serde::Deserialize;
use skillswap_core::{ProfilePatch, SwapDecision, UserId};
use validator::Validate;

// ============================================================================
// Authentication Requests
// ============================================================================

/// Request body for user registration
///
/// Missing fields deserialize as empty strings so they surface as validation
/// errors rather than JSON errors.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 254, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "Password is required"))]
    pub password: String,
}

/// Request body for user login
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Request body for updating the caller's profile; absent fields stay as they are
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(length(max = 500))]
    pub availability: Option<String>,

    #[validate(length(max = 200))]
    pub location: Option<String>,

    #[validate(length(max = 2048))]
    pub photo_url: Option<String>,

    pub is_public: Option<bool>,

    #[validate(length(max = 50, message = "Too many offered skills"))]
    pub skills_offered: Option<Vec<String>>,

    #[validate(length(max = 50, message = "Too many wanted skills"))]
    pub skills_wanted: Option<Vec<String>>,
}

impl From<UpdateProfileRequest> for ProfilePatch {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            name: request.name,
            availability: request.availability,
            location: request.location,
            photo_url: request.photo_url,
            is_public: request.is_public,
            skills_offered: request.skills_offered,
            skills_wanted: request.skills_wanted,
        }
    }
}

/// Query string for the public directory
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    /// Case-sensitive fragment matched against offered skills
    pub skill: Option<String>,
}

// ============================================================================
// Swap Requests
// ============================================================================

/// Request body for proposing a swap
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSwapRequest {
    pub receiver_id: UserId,

    #[validate(length(min = 1, max = 100, message = "Offered skill is required"))]
    pub skill_offered_by_requester: String,

    #[validate(length(min = 1, max = 100, message = "Wanted skill is required"))]
    pub skill_wanted_by_requester: String,
}

/// Request body for accepting or rejecting a swap
///
/// Anything other than `accepted` or `rejected` fails to deserialize.
#[derive(Debug, Deserialize, Validate)]
pub struct RespondSwapRequest {
    pub status: SwapDecision,
}

// ============================================================================
// Feedback Requests
// ============================================================================

/// Request body for rating the counterparty of an accepted swap
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitFeedbackRequest {
    #[validate(range(min = 1, max = 5, message = "Score must be between 1 and 5"))]
    pub score: i32,

    #[validate(length(max = 1000))]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
        };
        assert!(valid.validate().is_ok());

        let missing: RegisterRequest = serde_json::from_str(r#"{"email":"ada@example.com"}"#).unwrap();
        let errors = missing.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("email"));
    }

    #[test]
    fn test_update_profile_accepts_partial_camel_case() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"skillsOffered":["Piano","Guitar"],"isPublic":false}"#).unwrap();
        assert!(request.validate().is_ok());
        assert!(request.name.is_none());

        let patch = ProfilePatch::from(request);
        assert_eq!(patch.skills_offered, Some(vec!["Piano".to_string(), "Guitar".to_string()]));
        assert_eq!(patch.is_public, Some(false));
    }

    #[test]
    fn test_update_profile_rejects_non_array_skills() {
        let result: Result<UpdateProfileRequest, _> =
            serde_json::from_str(r#"{"skillsOffered":"Piano,Guitar"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_profile_rejects_empty_name() {
        let request: UpdateProfileRequest = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_respond_only_accepts_terminal_decisions() {
        let ok: RespondSwapRequest = serde_json::from_str(r#"{"status":"accepted"}"#).unwrap();
        assert_eq!(ok.status, SwapDecision::Accepted);

        assert!(serde_json::from_str::<RespondSwapRequest>(r#"{"status":"pending"}"#).is_err());
        assert!(serde_json::from_str::<RespondSwapRequest>(r#"{"status":"done"}"#).is_err());
    }

    #[test]
    fn test_create_swap_request_shape() {
        let request: CreateSwapRequest = serde_json::from_str(
            r#"{"receiverId":2,"skillOfferedByRequester":"Piano","skillWantedByRequester":"Guitar"}"#,
        )
        .unwrap();
        assert_eq!(request.receiver_id, UserId::new(2));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_feedback_score_range() {
        let low = SubmitFeedbackRequest {
            score: 0,
            comment: None,
        };
        assert!(low.validate().is_err());

        let ok = SubmitFeedbackRequest {
            score: 5,
            comment: Some("Great lesson".to_string()),
        };
        assert!(ok.validate().is_ok());
    }
}
