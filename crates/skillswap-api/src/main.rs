//! SkillSwap API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p skillswap-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use skillswap_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // The log format depends on APP_ENV, so configuration comes first
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        storage = ?config.storage.backend,
        "Starting SkillSwap API Server..."
    );

    if let Err(e) = skillswap_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
