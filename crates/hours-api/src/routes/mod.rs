//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::handlers::{
    clinical_logs, export, goals, health, profiles, progress, supervision_logs, supervisors,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(profile_routes())
        .merge(clinical_log_routes())
        .merge(supervision_log_routes())
        .merge(user_routes())
}

/// Profile and supervisor routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles", post(profiles::provision_profile))
        .route("/profiles/@me", get(profiles::get_current_profile))
        .route("/profiles/:user_id/role", patch(profiles::update_role))
        .route(
            "/supervisors/:supervisor_id/supervisees",
            get(supervisors::list_supervisees).post(supervisors::link_supervisee),
        )
}

/// Clinical log workflow routes
fn clinical_log_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clinical-logs",
            get(clinical_logs::list_own_logs).post(clinical_logs::submit_log),
        )
        .route("/clinical-logs/review", get(clinical_logs::review_queue))
        .route(
            "/clinical-logs/:log_id",
            get(clinical_logs::get_log).delete(clinical_logs::delete_log),
        )
        .route("/clinical-logs/:log_id/status", patch(clinical_logs::resolve_log))
}

/// Supervision log routes
fn supervision_log_routes() -> Router<AppState> {
    Router::new().route(
        "/supervision-logs",
        get(supervision_logs::list_logs).post(supervision_logs::create_log),
    )
}

/// Per-user goal, progress and export routes
fn user_routes() -> Router<AppState> {
    Router::new()
        // Goals
        .route("/goals", post(goals::create_goal))
        .route(
            "/users/:user_id/goals",
            get(goals::list_goals).patch(goals::update_goal),
        )
        .route("/users/:user_id/goals/:week", put(goals::set_goal))
        // Progress
        .route("/users/:user_id/progress", get(progress::get_overview))
        .route("/users/:user_id/progress/weekly", get(progress::get_weekly_breakdown))
        // Export
        .route("/users/:user_id/export", get(export::get_workbook))
        .route("/users/:user_id/export/:sheet", get(export::get_sheet_csv))
}
