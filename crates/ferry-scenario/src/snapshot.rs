//! The operational snapshot supplied by the booking system.
//!
//! A snapshot is a read-only picture of one operating day: the fleet, the
//! sailings scheduled for that day, and how many confirmed bookings fall in
//! each wall-clock hour.  Field names are camelCase on the wire.
//!
//! Vessel statuses accept both the canonical `operational` / `maintenance`
//! and the labels the booking system stores (`Operacional`,
//! `Em Manutenção`).

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Timelike};
use ferry_core::{TripId, VesselId};
use serde::{Deserialize, Serialize};

use crate::{ScenarioDefaults, ScenarioError, ScenarioResult};

// ── Vessels ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VesselStatus {
    #[serde(rename = "operational", alias = "Operacional")]
    Operational,
    #[serde(rename = "maintenance", alias = "Em Manutenção")]
    Maintenance,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id:       Option<VesselId>,
    #[serde(default)]
    pub name:     String,
    pub status:   VesselStatus,
    pub capacity: u32,
}

impl Vessel {
    #[inline]
    pub fn is_operational(&self) -> bool {
        self.status == VesselStatus::Operational
    }
}

// ── Sailings ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTrip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TripId>,
    /// RFC 3339, or `YYYY-MM-DD HH:MM[:SS]` in local wall-clock time.
    pub departure_timestamp: String,
    /// Overrides the fleet-average capacity for this sailing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl ScheduledTrip {
    /// Wall-clock departure time as written (offsets are not normalised).
    pub fn departure(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.departure_timestamp)
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// A sailing whose timestamp parsed, with its position in the snapshot.
#[derive(Clone, Debug)]
pub struct ParsedTrip<'a> {
    pub index:     usize,
    pub departure: NaiveDateTime,
    pub trip:      &'a ScheduledTrip,
}

impl ParsedTrip<'_> {
    pub fn hour(&self) -> u32 {
        self.departure.hour()
    }

    pub fn minute(&self) -> u32 {
        self.departure.minute()
    }
}

// ── OperationWindow ───────────────────────────────────────────────────────────

/// Wall-clock `[start_hour, end_hour)` operating window.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationWindow {
    pub start_hour: u32,
    pub end_hour:   u32,
}

impl OperationWindow {
    /// Window length in minutes; zero when `end_hour <= start_hour`.
    /// Saturates at `u32::MAX`.
    pub fn minutes(&self) -> u32 {
        let minutes = self.end_hour.saturating_sub(self.start_hour) as u64 * 60;
        u32::try_from(minutes).unwrap_or(u32::MAX)
    }
}

// ── OperationalSnapshot ───────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalSnapshot {
    #[serde(default)]
    pub vessels: Vec<Vessel>,
    #[serde(default)]
    pub scheduled_trips: Vec<ScheduledTrip>,
    /// Wall-clock hour → confirmed bookings on sailings in that hour.
    #[serde(default)]
    pub confirmed_bookings_by_hour: BTreeMap<u32, u32>,
    /// Explicit window; derived from the sailings when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_window: Option<OperationWindow>,
    /// Explicit demand figure; estimated from bookings and sailings when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_arrivals_per_day: Option<f64>,
}

impl OperationalSnapshot {
    pub fn operational_vessels(&self) -> impl Iterator<Item = &Vessel> + '_ {
        self.vessels.iter().filter(|v| v.is_operational())
    }

    pub fn maintenance_vessels(&self) -> impl Iterator<Item = &Vessel> + '_ {
        self.vessels.iter().filter(|v| !v.is_operational())
    }

    pub fn total_reservations(&self) -> u64 {
        self.confirmed_bookings_by_hour.values().map(|&c| c as u64).sum()
    }

    /// Rounded mean capacity of the operational fleet, or the fallback when
    /// nothing is operational.
    pub fn average_capacity(&self, defaults: &ScenarioDefaults) -> u32 {
        let (count, total) = self
            .operational_vessels()
            .fold((0u64, 0u64), |(n, sum), v| (n + 1, sum + v.capacity as u64));
        if count == 0 {
            defaults.fallback_ferry_capacity
        } else {
            (total as f64 / count as f64).round() as u32
        }
    }

    /// Every sailing with its parsed departure time, in snapshot order.
    ///
    /// Fails on the first timestamp that does not parse.
    pub fn parsed_trips(&self) -> ScenarioResult<Vec<ParsedTrip<'_>>> {
        self.scheduled_trips
            .iter()
            .enumerate()
            .map(|(index, trip)| {
                trip.departure()
                    .map(|departure| ParsedTrip { index, departure, trip })
                    .ok_or_else(|| ScenarioError::InvalidTimestamp {
                        index,
                        value: trip.departure_timestamp.clone(),
                    })
            })
            .collect()
    }

    /// The explicit window, else first sailing hour to last sailing hour plus
    /// the trailing allowance, else the default day.
    ///
    /// An explicit window must open at a wall-clock hour and close no later
    /// than midnight plus the trailing allowance.
    pub fn operation_window(
        &self,
        trips:    &[ParsedTrip<'_>],
        defaults: &ScenarioDefaults,
    ) -> ScenarioResult<OperationWindow> {
        if let Some(window) = self.operation_window {
            let max_end_hour = 24 + defaults.trailing_hours;
            if window.start_hour > 23 || window.end_hour > max_end_hour {
                return Err(ScenarioError::InvalidWindow {
                    start_hour: window.start_hour,
                    end_hour: window.end_hour,
                    max_end_hour,
                });
            }
            return Ok(window);
        }
        let first = trips.iter().map(|t| t.departure).min();
        let last = trips.iter().map(|t| t.departure).max();
        Ok(match (first, last) {
            (Some(first), Some(last)) => OperationWindow {
                start_hour: first.hour(),
                end_hour:   last.hour() + defaults.trailing_hours,
            },
            _ => OperationWindow { start_hour: defaults.start_hour, end_hour: defaults.end_hour },
        })
    }

    /// The explicit figure, else `reservations + walk_ins_per_sailing × sailings`,
    /// falling back when that comes to zero.
    pub fn estimated_arrivals(&self, defaults: &ScenarioDefaults) -> f64 {
        if let Some(explicit) = self.avg_arrivals_per_day {
            return explicit;
        }
        let walk_ins = defaults.walk_ins_per_sailing as u64 * self.scheduled_trips.len() as u64;
        let estimate = self.total_reservations() + walk_ins;
        if estimate == 0 { defaults.fallback_arrivals_per_day } else { estimate as f64 }
    }
}
