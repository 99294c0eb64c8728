//! Simulation observer trait for progress reporting and data collection.

use ferry_core::{DepartureEvent, Minute};

use crate::{RunRecord, Vehicle};

/// How a vehicle left the queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Boarded a departure.
    Boarded,
    /// Still queued at closing time and force-removed.
    Drained,
}

/// Callbacks invoked by [`QueueEngine`][crate::QueueEngine] at key points in
/// the minute loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: congestion alarm
///
/// ```rust,ignore
/// struct Alarm { threshold: u64, first_breach: Option<Minute> }
///
/// impl SimObserver for Alarm {
///     fn on_minute_end(&mut self, minute: Minute, queue_len: u64, _arrivals: u64) {
///         if queue_len > self.threshold && self.first_breach.is_none() {
///             self.first_breach = Some(minute);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once when the run starts, after reservations are preloaded.
    fn on_start(&mut self, _preloaded: u64, _walk_in_budget: f64) {}

    /// Called for each departure after it has boarded.
    ///
    /// `left_behind` is the queue length immediately after this departure.
    fn on_boarding(
        &mut self,
        _minute:      Minute,
        _departure:   &DepartureEvent,
        _boarded:     u64,
        _left_behind: u64,
    ) {}

    /// Called for every vehicle as it leaves the queue.
    fn on_vehicle_processed(
        &mut self,
        _vehicle:     &Vehicle,
        _at:          Minute,
        _wait:        u32,
        _disposition: Disposition,
    ) {}

    /// Called at the end of each minute with the occupancy just recorded.
    fn on_minute_end(&mut self, _minute: Minute, _queue_len: u64, _arrivals: u64) {}

    /// Called once after the residual queue has been drained.
    fn on_run_end(&mut self, _record: &RunRecord) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
