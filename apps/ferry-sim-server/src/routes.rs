//! Route configuration for the HTTP API.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::*;
use crate::state::AppState;

/// Create the full router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/simulate", post(simulate_handler))
        .route("/simulate/report", post(report_handler))
        .route("/scenarios", post(scenario_handler))
        .route("/scenarios/compare", post(compare_handler))
        .with_state(state)
}
