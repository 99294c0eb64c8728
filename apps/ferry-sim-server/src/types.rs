//! Request, response, and error payloads for the HTTP API and CLI output.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ferry_core::{ConfigError, Minute, SimulationConfig};
use ferry_scenario::{OperationalSnapshot, Scenario, ScenarioError, ScenarioOutcome, SnapshotWarning};
use ferry_sim::{DEFAULT_HISTOGRAM_BINS, SimulationResult, WaitHistogram};
use serde::{Deserialize, Serialize};
use tokio::task::JoinError;

/// Queue chart keeps one point every this many minutes.
pub const CHART_SAMPLE_MINUTES: usize = 10;

// ── Requests ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SeedQuery {
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRequest {
    pub snapshot: OperationalSnapshot,
    #[serde(default = "default_scenario")]
    pub scenario: Scenario,
    #[serde(default)]
    pub seed:     Option<u64>,
}

fn default_scenario() -> Scenario {
    Scenario::Base
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub snapshot: OperationalSnapshot,
    #[serde(default)]
    pub seed:     Option<u64>,
}

// ── Responses ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status:  String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok".to_owned(), version: env!("CARGO_PKG_VERSION").to_owned() }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResponse {
    pub seed:     u64,
    pub warnings: Vec<SnapshotWarning>,
    #[serde(flatten)]
    pub outcome:  ScenarioOutcome,
}

/// One point of the down-sampled queue chart.
#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub minute: u32,
    pub clock:  String,
    pub size:   u64,
}

/// Summary KPIs plus chart-ready series for one run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub seed:           u64,
    pub avg_wait_time:  f64,
    pub max_queue_size: u64,
    pub total_vehicles: u64,
    pub wait_histogram: WaitHistogram,
    pub queue_chart:    Vec<ChartPoint>,
}

impl RunReport {
    pub fn new(seed: u64, config: &SimulationConfig, result: &SimulationResult) -> Self {
        let day = config.operating_day();
        let queue_chart = result
            .sampled_series(CHART_SAMPLE_MINUTES)
            .into_iter()
            .map(|s| ChartPoint {
                minute: s.minute,
                clock:  day.label(Minute(s.minute)),
                size:   s.size,
            })
            .collect();
        Self {
            seed,
            avg_wait_time: result.avg_wait_time,
            max_queue_size: result.max_queue_size,
            total_vehicles: result.total_vehicles,
            wait_histogram: result.wait_histogram(DEFAULT_HISTOGRAM_BINS),
            queue_chart,
        }
    }
}

// ── ApiError ──────────────────────────────────────────────────────────────────

/// An error response with body `{"error": {"code": "...", "message": "..."}}`.
///
/// Request problems are `400`; only a failed simulation task is `500`.
#[derive(Debug)]
pub struct ApiError {
    pub status:  StatusCode,
    pub code:    &'static str,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, code, message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status:  StatusCode::INTERNAL_SERVER_ERROR,
            code:    "internal_error",
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    code:    &'a str,
    message: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: ErrorDetail { code: self.code, message: &self.message } };
        (self.status, Json(body)).into_response()
    }
}

impl From<ConfigError> for ApiError {
    fn from(e: ConfigError) -> Self {
        Self::bad_request(e.code(), e.to_string())
    }
}

impl From<ScenarioError> for ApiError {
    fn from(e: ScenarioError) -> Self {
        Self::bad_request(e.code(), e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self::bad_request("invalid_body", format!("invalid request body: {}", e.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        Self::bad_request("invalid_query", e.body_text())
    }
}

impl From<JoinError> for ApiError {
    fn from(e: JoinError) -> Self {
        tracing::error!(error = %e, "simulation task failed");
        Self::internal("simulation task failed")
    }
}
