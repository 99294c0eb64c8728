//! Scenario configuration errors.

use ferry_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("scheduled trip {index} has an unparseable departure timestamp {value:?}")]
    InvalidTimestamp { index: usize, value: String },

    #[error("operation window {start_hour}:00-{end_hour}:00 is not within one day (start 0-23, end at most {max_end_hour})")]
    InvalidWindow { start_hour: u32, end_hour: u32, max_end_hour: u32 },

    #[error("unknown scenario {0:?} (expected base, reducedFleet or reservationSmoothed)")]
    UnknownScenario(String),
}

impl ScenarioError {
    /// Stable machine-readable error code for API payloads.
    pub fn code(&self) -> &'static str {
        match self {
            ScenarioError::Config(e) => e.code(),
            ScenarioError::InvalidTimestamp { .. } => "invalid_timestamp",
            ScenarioError::InvalidWindow { .. } => "invalid_operation_window",
            ScenarioError::UnknownScenario(_) => "unknown_scenario",
        }
    }
}

/// Shorthand result type for scenario configuration.
pub type ScenarioResult<T> = Result<T, ScenarioError>;
