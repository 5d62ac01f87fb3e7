//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use hours_common::{AppConfig, AppError, JwtService, StorageBackend};
use hours_core::{GoalDefaults, Hours};
use hours_db::{
    create_pool, run_migrations, PgClinicalLogRepository, PgGoalRepository,
    PgSuperviseeRepository, PgSupervisionLogRepository, PgUserProfileRepository,
};
use hours_notify::notifier_from_config;
use hours_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns an error if the rate limiter cannot be configured
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_rate_limit(create_router(), &config.rate_limit)?;
    let router = apply_middleware(
        api.merge(health_routes()),
        &config.cors,
        config.app.env.is_production(),
    );
    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let builder = match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory record store");
            ServiceContextBuilder::new().memory_store()
        }
        StorageBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or_else(|| AppError::Config("DATABASE_URL is required".to_string()))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&hours_db::DatabaseConfig::from_app_config(database))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            if database.run_migrations {
                run_migrations(&pool)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                info!("Database migrations applied");
            }

            ServiceContextBuilder::new()
                .clinical_log_repo(Arc::new(PgClinicalLogRepository::new(pool.clone())))
                .supervision_log_repo(Arc::new(PgSupervisionLogRepository::new(pool.clone())))
                .goal_repo(Arc::new(PgGoalRepository::new(pool.clone())))
                .profile_repo(Arc::new(PgUserProfileRepository::new(pool.clone())))
                .supervisee_repo(Arc::new(PgSuperviseeRepository::new(pool)))
        }
    };

    let notifier =
        notifier_from_config(&config.mail).map_err(|e| AppError::Config(e.to_string()))?;

    let service_context = builder
        .notifier(notifier)
        .goal_defaults(GoalDefaults {
            clinical: Hours::new(config.goals.default_clinical_hours),
            supervision: Hours::new(config.goals.default_supervision_hours),
        })
        .notify_timeout(Duration::from_secs(config.mail.timeout_secs))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);

    Ok(AppState::new(service_context, jwt_service, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!(%addr, "Starting HTTP server");

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
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state)?;

    // Run server
    run_server(app, addr).await
}
