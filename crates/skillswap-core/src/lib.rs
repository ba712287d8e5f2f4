//! # skillswap-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! swap lifecycle rules. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Feedback, NewFeedback, NewSwapRequest, NewUser, ProfilePatch, RatingSummary, SwapDecision,
    SwapParty, SwapRequest, SwapStatus, SwapWithParties, User, normalize_skills,
};
pub use error::DomainError;
pub use traits::{
    FeedbackRepository, RepoResult, StoreHealth, SwapRepository, UserRepository,
};
pub use value_objects::{FeedbackId, IdParseError, Score, SwapId, UserId};
