//! Error types

mod app_error;

pub use app_error::{AppError, AppResult, ErrorResponse, GENERIC_SERVER_ERROR};
