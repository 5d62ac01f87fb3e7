//! Hours API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p hours-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use hours_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        eprintln!("Server failed to start: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!("Starting Hours API Server...");
    info!(
        env = ?config.app.env,
        port = config.api.port,
        storage = ?config.storage.backend,
        "Configuration loaded"
    );

    // Run the server
    hours_api::run(config).await?;

    Ok(())
}
