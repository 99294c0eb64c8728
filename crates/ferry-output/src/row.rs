//! Plain data rows written by output backends.

use ferry_sim::{Disposition, Origin};

/// Queue occupancy at the end of one minute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueSampleRow {
    pub minute:    u32,
    /// Wall-clock `HH:MM`.
    pub clock:     String,
    pub queue_len: u64,
    /// Walk-ins generated during the minute.
    pub arrivals:  u64,
}

/// One departure's boarding outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardingRow {
    pub minute:      u32,
    pub clock:       String,
    pub capacity:    u32,
    pub boarded:     u64,
    pub left_behind: u64,
    /// Booking-system trip id, when the departure came from a real sailing.
    pub trip_id:     Option<u64>,
}

/// One vehicle leaving the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitRow {
    pub arrival_minute: u32,
    pub left_minute:    u32,
    pub wait:           u32,
    pub origin:         Origin,
    pub disposition:    Disposition,
}
