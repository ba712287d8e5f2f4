//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateSwapRequest, DirectoryQuery, LoginRequest, RegisterRequest, RespondSwapRequest,
    SubmitFeedbackRequest, UpdateProfileRequest,
};

pub use responses::{
    FeedbackResponse, HealthChecks, HealthResponse, PartyResponse, ProfileResponse,
    PublicProfileResponse, RatingResponse, ReadinessResponse, SwapListResponse, SwapResponse,
    TokenResponse,
};

pub use mappers::RatedUser;
