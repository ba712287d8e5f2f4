//! Database models - SQLx-compatible structs for PostgreSQL tables

mod feedback;
mod swap;
mod user;

pub use feedback::{FeedbackModel, RatingSummaryModel};
pub use swap::{SwapModel, SwapWithPartiesModel};
pub use user::UserModel;
