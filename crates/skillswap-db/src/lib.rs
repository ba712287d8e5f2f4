//! # skillswap-db
//!
//! Storage layer implementing the repository traits from `skillswap-core`.
//!
//! ## Overview
//!
//! Two interchangeable backends:
//!
//! - PostgreSQL via SQLx: connection pool, embedded schema, `FromRow` models,
//!   model to entity mappers and the `Pg*` repositories
//! - An in-memory [`MemoryStore`] for local demos and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use skillswap_db::{create_pool, run_migrations, PgUserRepository};
//!
//! async fn example(config: &skillswap_common::DatabaseConfig) -> Result<(), sqlx::Error> {
//!     let pool = create_pool(config).await?;
//!     run_migrations(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryFeedbackRepository, MemoryStore, MemorySwapRepository, MemoryUserRepository};
pub use pool::{create_pool, run_migrations, PgPool, PoolTimeouts};
pub use repositories::{PgFeedbackRepository, PgStoreHealth, PgSwapRepository, PgUserRepository};
