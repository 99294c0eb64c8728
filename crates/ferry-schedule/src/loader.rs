//! CSV loaders for departure lists and reservation histograms.
//!
//! # Departure CSV
//!
//! One row per sailing.  `source_id` may be left empty.
//!
//! ```csv
//! minute_offset,capacity,source_id
//! 0,50,101
//! 120,50,102
//! 240,35,
//! ```
//!
//! # Histogram CSV
//!
//! One row per wall-clock hour.  Repeated hours are summed.
//!
//! ```csv
//! hour,confirmed
//! 8,12
//! 17,30
//! ```

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ferry_core::{DepartureEvent, TripId};

use crate::{ScheduleError, ScheduleResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DepartureRecord {
    minute_offset: u32,
    capacity:      u32,
    source_id:     Option<u64>,
}

#[derive(Deserialize)]
struct HistogramRecord {
    hour:      u32,
    confirmed: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load departure events from a CSV file, in file order.
pub fn load_departures_csv(path: &Path) -> ScheduleResult<Vec<DepartureEvent>> {
    let file = std::fs::File::open(path)?;
    load_departures_reader(file)
}

/// Like [`load_departures_csv`] but accepts any `Read` source.
pub fn load_departures_reader<R: Read>(reader: R) -> ScheduleResult<Vec<DepartureEvent>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<DepartureRecord>()
        .map(|result| {
            let row = result?;
            Ok(DepartureEvent {
                minute_offset: row.minute_offset,
                capacity:      row.capacity,
                source_id:     row.source_id.map(TripId),
            })
        })
        .collect()
}

/// Load an hour → confirmed-bookings histogram from a CSV file.
pub fn load_histogram_csv(path: &Path) -> ScheduleResult<BTreeMap<u32, u32>> {
    let file = std::fs::File::open(path)?;
    load_histogram_reader(file)
}

/// Like [`load_histogram_csv`] but accepts any `Read` source.
pub fn load_histogram_reader<R: Read>(reader: R) -> ScheduleResult<BTreeMap<u32, u32>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut histogram: BTreeMap<u32, u32> = BTreeMap::new();

    for result in csv_reader.deserialize::<HistogramRecord>() {
        let row = result?;
        if row.hour > 23 {
            return Err(ScheduleError::InvalidHour { hour: row.hour });
        }
        let slot = histogram.entry(row.hour).or_default();
        *slot = slot.saturating_add(row.confirmed);
    }

    Ok(histogram)
}
