//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in skillswap-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod feedback;
mod health;
mod swap;
mod user;

pub use feedback::PgFeedbackRepository;
pub use health::PgStoreHealth;
pub use swap::PgSwapRepository;
pub use user::PgUserRepository;
