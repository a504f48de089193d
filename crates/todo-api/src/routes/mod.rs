//! Route definitions
//!
//! Task routes are mounted under /api/v1; the health probe lives outside
//! the scoped router and requires no credential.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{health, tasks};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately, unauthenticated)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().nest("/tasks", task_routes())
}

/// Task routes
fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::get_all_tasks))
        .route("/", post(tasks::create_task))
        .route("/:id", get(tasks::get_task_by_id))
        .route("/:id", put(tasks::update_task))
        .route("/:id", delete(tasks::delete_task))
}
