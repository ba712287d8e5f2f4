//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod feedback;
pub mod health;
pub mod swaps;
pub mod users;
