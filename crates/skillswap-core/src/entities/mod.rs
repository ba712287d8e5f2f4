//! Domain entities - core business objects

mod feedback;
mod swap;
mod user;

pub use feedback::{Feedback, NewFeedback, RatingSummary};
pub use swap::{NewSwapRequest, SwapDecision, SwapParty, SwapRequest, SwapStatus, SwapWithParties};
pub use user::{normalize_skills, NewUser, ProfilePatch, User};
