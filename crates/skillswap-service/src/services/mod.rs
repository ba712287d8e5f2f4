//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod directory;
pub mod error;
pub mod feedback;
pub mod swap;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder, SwapPolicy};
pub use directory::DirectoryService;
pub use error::{ServiceError, ServiceResult};
pub use feedback::FeedbackService;
pub use swap::SwapService;
pub use user::UserService;
