//! # skillswap-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, validate_password_strength, verify_password, Claims, IssuedToken, JwtService,
    PasswordService,
};
pub use config::{
    AppConfig, AppSettings, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, ServerConfig, StorageBackend, StorageConfig, SwapConfig,
};
pub use error::{AppError, AppResult, ErrorResponse, GENERIC_SERVER_ERROR};
pub use telemetry::{try_init_tracing, TracingConfig, TracingError};
