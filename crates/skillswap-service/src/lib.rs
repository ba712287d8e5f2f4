//! # skillswap-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services are short-lived views over a shared [`ServiceContext`]:
//!
//! ```rust,ignore
//! let swap = SwapService::new(&ctx).create_swap(user_id, request).await?;
//! ```

pub mod dto;
pub mod services;

pub use services::{
    AuthService, DirectoryService, FeedbackService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SwapPolicy, SwapService, UserService,
};
