//! `DepartureSchedule` — the ordered, immutable list of boarding events.
//!
//! # Ordering
//!
//! Events are stable-sorted by `minute_offset`, so departures sharing a
//! minute keep the order in which they were supplied.  The engine boards
//! them in that order, each bounded by its own capacity.
//!
//! Lookups are O(log n) binary searches; the schedule is never mutated once
//! built.

use ferry_core::{DepartureEvent, Minute, SimulationConfig};

/// Read-only departure list for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DepartureSchedule {
    /// Events, sorted ascending by `minute_offset` (stable).
    events: Vec<DepartureEvent>,
}

impl DepartureSchedule {
    /// Build from explicit events, stable-sorting by minute.
    pub fn new(mut events: Vec<DepartureEvent>) -> Self {
        events.sort_by_key(|e| e.minute_offset);
        Self { events }
    }

    /// Spread `ferry_count` departures of `capacity` evenly across the window.
    ///
    /// Event `i` sits at `floor(i * operation_minutes / ferry_count)`, so the
    /// first ferry always leaves at minute 0 and every event lands on an
    /// integer minute inside the window.
    pub fn evenly_spaced(ferry_count: u32, capacity: u32, operation_minutes: u32) -> Self {
        let events = (0..ferry_count as u64)
            .map(|i| {
                let minute = i * operation_minutes as u64 / ferry_count as u64;
                DepartureEvent::new(minute as u32, capacity)
            })
            .collect();
        Self { events }
    }

    /// The schedule a run of `config` uses: explicit departures if any,
    /// otherwise the evenly spaced fallback.
    pub fn from_config(config: &SimulationConfig) -> Self {
        if config.departures.is_empty() {
            Self::evenly_spaced(config.ferry_count, config.ferry_capacity, config.operation_minutes)
        } else {
            Self::new(config.departures.clone())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// All events in boarding order.
    pub fn events(&self) -> &[DepartureEvent] {
        &self.events
    }

    /// Events departing at exactly `minute`, in schedule order.  Usually empty.
    pub fn at(&self, minute: Minute) -> &[DepartureEvent] {
        let lo = self.events.partition_point(|e| e.minute_offset < minute.0);
        let hi = self.events.partition_point(|e| e.minute_offset <= minute.0);
        &self.events[lo..hi]
    }

    /// Combined capacity of every departure in the schedule.
    pub fn total_capacity(&self) -> u64 {
        self.events.iter().map(|e| e.capacity as u64).sum()
    }
}
