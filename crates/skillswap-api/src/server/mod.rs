//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use skillswap_common::{AppConfig, AppError, JwtService, PasswordService, StorageBackend};
use skillswap_db::{create_pool, run_migrations, MemoryStore};
use skillswap_service::{ServiceContextBuilder, SwapPolicy};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let cors = state.config().cors.clone();
    let is_production = state.config().app.env.is_production();

    let router = create_router();
    let router = apply_middleware(router, &cors, is_production);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));
    let password_service = Arc::new(PasswordService::new(config.auth.enforce_password_strength));

    let builder = ServiceContextBuilder::new()
        .jwt_service(jwt_service)
        .password_service(password_service)
        .swap_policy(SwapPolicy {
            require_published_skills: config.swap.require_published_skills,
        });

    let builder = match config.storage.backend {
        StorageBackend::Postgres => {
            let db_config = config
                .storage
                .database
                .as_ref()
                .ok_or_else(|| AppError::Config("DATABASE_URL is required for postgres storage".to_string()))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(db_config)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            if db_config.run_migrations {
                run_migrations(&pool)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                info!("Database schema is up to date");
            }

            builder.postgres(pool)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; all data is lost on shutdown");
            builder.memory_store(&MemoryStore::new())
        }
    };

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address {}: {e}", config.api.address())))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
