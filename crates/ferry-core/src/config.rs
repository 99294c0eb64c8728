//! `SimulationConfig` — the single input shape the queue engine accepts.
//!
//! Scenario variants (base, reduced fleet, reservation smoothing) are all
//! resolved into one of these before a run starts; the engine never branches
//! on a scenario tag.

use std::collections::BTreeMap;

use crate::{ConfigError, ConfigResult, Minute, OperatingDay, TripId};

/// Longest operating window a run may cover: one week.
pub const MAX_OPERATION_MINUTES: u32 = 7 * 24 * 60;

/// Upper bound on daily arrivals, and separately on confirmed reservations.
pub const MAX_VEHICLES_PER_DAY: u64 = 1_000_000;

/// Upper bound on synthesized ferries: one per minute of the longest window.
pub const MAX_FERRY_COUNT: u32 = MAX_OPERATION_MINUTES;

// ── PeakWindow ────────────────────────────────────────────────────────────────

/// A half-open `[start, end)` range of window minutes with elevated demand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakWindow {
    pub start: u32,
    pub end:   u32,
}

impl PeakWindow {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, minute: Minute) -> bool {
        minute.0 >= self.start && minute.0 < self.end
    }

    /// Number of minutes covered.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── DepartureEvent ────────────────────────────────────────────────────────────

/// One boarding moment: a ferry leaves at `minute_offset` carrying at most
/// `capacity` vehicles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DepartureEvent {
    pub minute_offset: u32,
    pub capacity:      u32,
    /// The sailing this event was derived from, if it came from a real schedule.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub source_id:     Option<TripId>,
}

impl DepartureEvent {
    pub fn new(minute_offset: u32, capacity: u32) -> Self {
        Self { minute_offset, capacity, source_id: None }
    }

    pub fn with_source(mut self, id: TripId) -> Self {
        self.source_id = Some(id);
        self
    }

    #[inline]
    pub fn minute(&self) -> Minute {
        Minute(self.minute_offset)
    }
}

// ── SimulationConfig ──────────────────────────────────────────────────────────

/// Immutable input for one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SimulationConfig {
    /// Number of ferries to spread evenly across the window.  Only used when
    /// `departures` is empty; zero yields a schedule with no sailings.
    pub ferry_count: u32,

    /// Capacity of each synthesized departure.
    pub ferry_capacity: u32,

    /// Expected vehicles per operating day (reservations included).
    pub avg_arrivals_per_day: f64,

    /// Length of the operating window in minutes.
    pub operation_minutes: u32,

    /// Wall-clock hour of minute 0.  Used only to align reservation hours.
    pub operation_start_hour: u32,

    /// Spread walk-ins uniformly and pre-place confirmed reservations.
    #[cfg_attr(feature = "serde", serde(default))]
    pub use_reservation_smoothing: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub peak_windows: Vec<PeakWindow>,

    /// Explicit sailings.  Empty means "synthesize from `ferry_count`".
    #[cfg_attr(feature = "serde", serde(default))]
    pub departures: Vec<DepartureEvent>,

    /// Wall-clock hour → confirmed bookings for sailings in that hour.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reservation_histogram: BTreeMap<u32, u32>,
}

impl Default for SimulationConfig {
    /// A 06:00–22:00 day with four 50-vehicle ferries, 1200 arrivals, and
    /// rush hours at 07–09 and 17–19.
    fn default() -> Self {
        Self {
            ferry_count:               4,
            ferry_capacity:            50,
            avg_arrivals_per_day:      1200.0,
            operation_minutes:         16 * 60,
            operation_start_hour:      6,
            use_reservation_smoothing: false,
            peak_windows:              vec![PeakWindow::new(60, 180), PeakWindow::new(660, 780)],
            departures:                Vec::new(),
            reservation_histogram:     BTreeMap::new(),
        }
    }
}

impl SimulationConfig {
    /// The wall-clock mapping for this run.
    pub fn operating_day(&self) -> OperatingDay {
        OperatingDay::new(self.operation_start_hour, self.operation_minutes)
    }

    /// Total number of minutes covered by peak windows.
    pub fn peak_minutes(&self) -> u32 {
        self.peak_windows.iter().map(PeakWindow::len).sum()
    }

    /// `true` if `minute` falls inside any peak window.
    pub fn is_peak(&self, minute: Minute) -> bool {
        self.peak_windows.iter().any(|w| w.contains(minute))
    }

    /// Sum of all confirmed reservations in the histogram.
    pub fn total_reservations(&self) -> u64 {
        self.reservation_histogram.values().map(|&c| c as u64).sum()
    }

    /// Check every structural constraint.  Called before any run starts.
    ///
    /// Besides the structural checks, the horizon, fleet size, and demand are
    /// bounded so a run's memory and step count stay bounded.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.operation_minutes == 0 {
            return Err(ConfigError::NonPositiveOperationMinutes);
        }
        if self.operation_minutes > MAX_OPERATION_MINUTES {
            return Err(ConfigError::WindowTooLong {
                minutes: self.operation_minutes,
                max:     MAX_OPERATION_MINUTES,
            });
        }
        if self.operation_start_hour > 23 {
            return Err(ConfigError::InvalidStartHour(self.operation_start_hour));
        }
        if self.ferry_capacity == 0 {
            return Err(ConfigError::NonPositiveFerryCapacity);
        }
        if self.ferry_count > MAX_FERRY_COUNT {
            return Err(ConfigError::TooManyFerries { count: self.ferry_count, max: MAX_FERRY_COUNT });
        }
        if !self.avg_arrivals_per_day.is_finite() || self.avg_arrivals_per_day < 0.0 {
            return Err(ConfigError::InvalidArrivals(self.avg_arrivals_per_day));
        }
        if self.avg_arrivals_per_day > MAX_VEHICLES_PER_DAY as f64 {
            return Err(ConfigError::ArrivalsTooLarge(self.avg_arrivals_per_day));
        }
        let reservations = self.total_reservations();
        if reservations > MAX_VEHICLES_PER_DAY {
            return Err(ConfigError::ReservationsTooLarge(reservations));
        }

        for (index, dep) in self.departures.iter().enumerate() {
            if dep.capacity == 0 {
                return Err(ConfigError::NonPositiveDepartureCapacity { index });
            }
            if dep.minute_offset >= self.operation_minutes {
                return Err(ConfigError::DepartureOutsideWindow {
                    index,
                    minute:            dep.minute_offset,
                    operation_minutes: self.operation_minutes,
                });
            }
        }

        self.validate_peak_windows()
    }

    fn validate_peak_windows(&self) -> ConfigResult<()> {
        for w in &self.peak_windows {
            if w.is_empty() {
                return Err(ConfigError::EmptyPeakWindow { start: w.start, end: w.end });
            }
            if w.end > self.operation_minutes {
                return Err(ConfigError::PeakWindowOutsideWindow {
                    start:             w.start,
                    end:               w.end,
                    operation_minutes: self.operation_minutes,
                });
            }
        }

        let mut sorted = self.peak_windows.clone();
        sorted.sort_by_key(|w| (w.start, w.end));
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if b.start < a.end {
                return Err(ConfigError::OverlappingPeakWindows {
                    first_start:  a.start,
                    first_end:    a.end,
                    second_start: b.start,
                    second_end:   b.end,
                });
            }
        }
        Ok(())
    }
}
