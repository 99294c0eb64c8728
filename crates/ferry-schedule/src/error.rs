//! Errors raised while loading sailings and booking histograms.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A row that does not match the expected columns or types.
    #[error("malformed schedule CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("booking hour {hour} is not a wall-clock hour (0-23)")]
    InvalidHour { hour: u32 },

    #[error("cannot read schedule file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a schedule or histogram load.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
