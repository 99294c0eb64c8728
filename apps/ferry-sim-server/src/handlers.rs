//! HTTP request handlers.
//!
//! Every endpoint answers `200` with a JSON body or `400` with the structured
//! error payload from [`ApiError`].  Simulations are CPU-bound and run on the
//! blocking pool via `spawn_blocking`, never on the async workers.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderName, HeaderValue},
    response::IntoResponse,
};
use ferry_core::{SimRng, SimulationConfig};
use ferry_scenario::{ScenarioComparison, compare_scenarios, run_scenario, snapshot_warnings};
use ferry_sim::simulate;
use tokio::task::spawn_blocking;
use tracing::{debug, info};

use crate::state::AppState;
use crate::types::{
    ApiError, CompareRequest, HealthResponse, RunReport, ScenarioRequest, ScenarioResponse,
    SeedQuery,
};

/// Response header carrying the seed a run used.
pub const SEED_HEADER: HeaderName = HeaderName::from_static("x-simulation-seed");

/// Handler for `GET /health` - liveness check.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

/// Handler for `POST /simulate` - one run of a raw config.
///
/// The body is returned verbatim as a `SimulationResult`; the seed used is
/// echoed in the `x-simulation-seed` header.
pub async fn simulate_handler(
    State(state): State<AppState>,
    query: Result<Query<SeedQuery>, QueryRejection>,
    body: Result<Json<SimulationConfig>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let Json(config) = body?;
    let seed = state.seed(query.seed);

    let result = spawn_blocking(move || simulate(&config, SimRng::new(seed))).await??;
    info!(
        seed,
        avg_wait = result.avg_wait_time,
        max_queue = result.max_queue_size,
        vehicles = result.total_vehicles,
        "simulation served"
    );
    Ok(([(SEED_HEADER, HeaderValue::from(seed))], Json(result)))
}

/// Handler for `POST /simulate/report` - KPIs, histogram, and sampled chart.
pub async fn report_handler(
    State(state): State<AppState>,
    query: Result<Query<SeedQuery>, QueryRejection>,
    body: Result<Json<SimulationConfig>, JsonRejection>,
) -> Result<Json<RunReport>, ApiError> {
    let Query(query) = query?;
    let Json(config) = body?;
    let seed = state.seed(query.seed);

    let report = spawn_blocking(move || {
        simulate(&config, SimRng::new(seed)).map(|result| RunReport::new(seed, &config, &result))
    })
    .await??;
    Ok(Json(report))
}

/// Handler for `POST /scenarios` - configure and run one scenario.
pub async fn scenario_handler(
    State(state): State<AppState>,
    body: Result<Json<ScenarioRequest>, JsonRejection>,
) -> Result<Json<ScenarioResponse>, ApiError> {
    let Json(request) = body?;
    let seed = state.seed(request.seed);

    let scenario = request.scenario;
    let defaults = state.defaults.clone();
    let response = spawn_blocking(move || {
        run_scenario(&request.snapshot, scenario, &defaults, seed).map(|outcome| ScenarioResponse {
            seed,
            warnings: snapshot_warnings(&request.snapshot),
            outcome,
        })
    })
    .await??;
    debug!(%scenario, seed, "scenario served");
    Ok(Json(response))
}

/// Handler for `POST /scenarios/compare` - every scenario with one seed.
pub async fn compare_handler(
    State(state): State<AppState>,
    body: Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<ScenarioComparison>, ApiError> {
    let Json(request) = body?;
    let seed = state.seed(request.seed);

    let defaults = state.defaults.clone();
    let comparison =
        spawn_blocking(move || compare_scenarios(&request.snapshot, &defaults, seed)).await??;
    debug!(seed, scenarios = comparison.outcomes.len(), "comparison served");
    Ok(Json(comparison))
}
