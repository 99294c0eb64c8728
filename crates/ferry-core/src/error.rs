//! Configuration error type.
//!
//! `ConfigError` is the only failure the simulator can report: it is raised
//! by [`SimulationConfig::validate`][crate::SimulationConfig::validate] before
//! any simulation work begins.  Degenerate-but-valid inputs (zero fleet
//! capacity, zero arrivals) are not errors.

use thiserror::Error;

/// A structurally invalid simulation request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("operationMinutes must be positive")]
    NonPositiveOperationMinutes,

    #[error("ferryCapacity must be positive")]
    NonPositiveFerryCapacity,

    #[error("departure {index} has non-positive capacity")]
    NonPositiveDepartureCapacity { index: usize },

    #[error("departure {index} at minute {minute} is outside the operating window of {operation_minutes} minutes")]
    DepartureOutsideWindow {
        index:             usize,
        minute:            u32,
        operation_minutes: u32,
    },

    #[error("avgArrivalsPerDay must be a finite non-negative number, got {0}")]
    InvalidArrivals(f64),

    #[error("peak window [{start}, {end}) is empty")]
    EmptyPeakWindow { start: u32, end: u32 },

    #[error("peak window [{start}, {end}) extends past the operating window of {operation_minutes} minutes")]
    PeakWindowOutsideWindow {
        start:             u32,
        end:               u32,
        operation_minutes: u32,
    },

    #[error("peak windows [{first_start}, {first_end}) and [{second_start}, {second_end}) overlap")]
    OverlappingPeakWindows {
        first_start:  u32,
        first_end:    u32,
        second_start: u32,
        second_end:   u32,
    },

    #[error("operationStartHour must be a wall-clock hour (0-23), got {0}")]
    InvalidStartHour(u32),

    #[error("operationMinutes is {minutes}; at most {max} minutes can be simulated")]
    WindowTooLong { minutes: u32, max: u32 },

    #[error("ferryCount is {count}; at most {max} ferries can be synthesized")]
    TooManyFerries { count: u32, max: u32 },

    #[error("avgArrivalsPerDay is {0}; at most {max} arrivals per day can be simulated", max = crate::MAX_VEHICLES_PER_DAY)]
    ArrivalsTooLarge(f64),

    #[error("{0} confirmed reservations; at most {max} per day can be simulated", max = crate::MAX_VEHICLES_PER_DAY)]
    ReservationsTooLarge(u64),
}

impl ConfigError {
    /// Stable machine-readable code for structured error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::NonPositiveOperationMinutes => "non_positive_operation_minutes",
            ConfigError::NonPositiveFerryCapacity => "non_positive_ferry_capacity",
            ConfigError::NonPositiveDepartureCapacity { .. } => "non_positive_departure_capacity",
            ConfigError::DepartureOutsideWindow { .. } => "departure_outside_window",
            ConfigError::InvalidArrivals(_) => "invalid_arrivals",
            ConfigError::EmptyPeakWindow { .. } => "empty_peak_window",
            ConfigError::PeakWindowOutsideWindow { .. } => "peak_window_outside_window",
            ConfigError::OverlappingPeakWindows { .. } => "overlapping_peak_windows",
            ConfigError::InvalidStartHour(_) => "invalid_start_hour",
            ConfigError::WindowTooLong { .. } => "operation_window_too_long",
            ConfigError::TooManyFerries { .. } => "too_many_ferries",
            ConfigError::ArrivalsTooLarge(_) => "arrivals_too_large",
            ConfigError::ReservationsTooLarge(_) => "reservations_too_large",
        }
    }
}

/// Shorthand result type for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
