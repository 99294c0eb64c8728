//! Snapshot + scenario tag → validated [`SimulationConfig`].
//!
//! Every what-if variant is resolved here.  The engine only ever sees a plain
//! config and never branches on the scenario.

use std::fmt;
use std::str::FromStr;

use ferry_core::{DepartureEvent, OperatingDay, PeakWindow, SimulationConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{OperationalSnapshot, ScenarioDefaults, ScenarioError, ScenarioResult};

// ── Scenario ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scenario {
    /// The snapshot as it stands.
    Base,
    /// One operational vessel out of service.
    #[serde(alias = "maintenance")]
    ReducedFleet,
    /// Confirmed bookings pre-placed, walk-ins spread uniformly.
    #[serde(alias = "reservations")]
    ReservationSmoothed,
}

impl Scenario {
    pub const ALL: [Scenario; 3] =
        [Scenario::Base, Scenario::ReducedFleet, Scenario::ReservationSmoothed];

    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::Base => "base",
            Scenario::ReducedFleet => "reducedFleet",
            Scenario::ReservationSmoothed => "reservationSmoothed",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Scenario::Base),
            "reducedFleet" | "reduced-fleet" | "maintenance" => Ok(Scenario::ReducedFleet),
            "reservationSmoothed" | "reservation-smoothed" | "reservations" => {
                Ok(Scenario::ReservationSmoothed)
            }
            other => Err(ScenarioError::UnknownScenario(other.to_owned())),
        }
    }
}

// ── configure ─────────────────────────────────────────────────────────────────

/// Build and validate the config for one scenario.
///
/// # Rules
///
/// - `ferry_capacity` is the rounded mean capacity of operational vessels.
/// - Each sailing becomes a departure at its minute offset from the window's
///   opening hour; sailings outside the window are dropped with a warning.
/// - Default rush hours are converted to minute offsets and clipped to the
///   window.
/// - `ReducedFleet` lowers the synthesized ferry count by one (never below
///   one) or, with real sailings, scales every sailing's capacity by the
///   share of fleet capacity left after removing the smallest vessel.
/// - `ReservationSmoothed` enables smoothing and feeds in the bookings.
pub fn configure(
    snapshot: &OperationalSnapshot,
    scenario: Scenario,
    defaults: &ScenarioDefaults,
) -> ScenarioResult<SimulationConfig> {
    let trips = snapshot.parsed_trips()?;
    let window = snapshot.operation_window(&trips, defaults)?;
    let operation_minutes = window.minutes();
    let ferry_capacity = snapshot.average_capacity(defaults);
    let day = OperatingDay::new(window.start_hour, operation_minutes);

    let mut departures = Vec::with_capacity(trips.len());
    for parsed in &trips {
        let Some(minute) = day.minute_at(parsed.hour(), parsed.minute()) else {
            warn!(
                index = parsed.index,
                departure = %parsed.departure,
                start_hour = window.start_hour,
                end_hour = window.end_hour,
                "sailing outside operating window; dropped"
            );
            continue;
        };
        let capacity = parsed.trip.capacity.unwrap_or(ferry_capacity);
        let mut event = DepartureEvent::new(minute.0, capacity);
        if let Some(id) = parsed.trip.id {
            event = event.with_source(id);
        }
        departures.push(event);
    }

    let mut config = SimulationConfig {
        ferry_count: snapshot.operational_vessels().count() as u32,
        ferry_capacity,
        avg_arrivals_per_day: snapshot.estimated_arrivals(defaults),
        operation_minutes,
        operation_start_hour: window.start_hour,
        use_reservation_smoothing: false,
        peak_windows: peak_windows(&defaults.peak_hours, window.start_hour, operation_minutes),
        departures,
        reservation_histogram: Default::default(),
    };

    match scenario {
        Scenario::Base => {}
        Scenario::ReducedFleet => reduce_fleet(&mut config, snapshot),
        Scenario::ReservationSmoothed => {
            config.use_reservation_smoothing = true;
            config.reservation_histogram = snapshot.confirmed_bookings_by_hour.clone();
        }
    }

    config.validate()?;

    debug!(
        %scenario,
        ferries = config.ferry_count,
        capacity = config.ferry_capacity,
        departures = config.departures.len(),
        arrivals = config.avg_arrivals_per_day,
        minutes = config.operation_minutes,
        "scenario configured"
    );
    Ok(config)
}

/// Wall-clock `[start, end)` hours → minute windows clipped to `[0, minutes)`.
/// Windows that clip to nothing are dropped.
fn peak_windows(hours: &[(u32, u32)], start_hour: u32, minutes: u32) -> Vec<PeakWindow> {
    let clip = |hour: u32| ((hour as i64 - start_hour as i64) * 60).clamp(0, minutes as i64) as u32;
    hours
        .iter()
        .map(|&(from, to)| PeakWindow::new(clip(from), clip(to)))
        .filter(|w| !w.is_empty())
        .collect()
}

fn reduce_fleet(config: &mut SimulationConfig, snapshot: &OperationalSnapshot) {
    if config.departures.is_empty() {
        if config.ferry_count > 0 {
            config.ferry_count = (config.ferry_count - 1).max(1);
        }
        return;
    }

    let capacities: Vec<u64> = snapshot.operational_vessels().map(|v| v.capacity as u64).collect();
    if capacities.len() < 2 {
        return;
    }
    let total: u64 = capacities.iter().sum();
    let smallest = capacities.iter().copied().min().unwrap_or(0);
    if total == 0 {
        return;
    }
    let remaining = total - smallest;
    // Zero-capacity sailings are left for validation to reject.
    for departure in config.departures.iter_mut().filter(|d| d.capacity > 0) {
        let scaled = departure.capacity as u64 * remaining / total;
        departure.capacity = scaled.max(1) as u32;
    }
}
