//! Integration test utilities for the SkillSwap server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API, served from the in-memory backend.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
