//! Reservation preloading.
//!
//! Confirmed bookings arrive as a histogram keyed by the wall-clock hour of
//! the booked sailing.  Before the minute loop starts, each booking becomes
//! one queued vehicle that shows up a random `0..RESERVATION_LEAD_MINUTES`
//! minutes before the top of its hour:
//!
//! ```text
//! base    = (hour - operation_start_hour) * 60
//! arrival = clamp(base - offset, 0, operation_minutes - 1)
//! ```
//!
//! Hours are visited in ascending order and bookings within an hour in draw
//! order; the returned arrival list preserves that insertion order, which is
//! also the order in which the vehicles enter the FIFO queue.

use std::collections::BTreeMap;

use ferry_core::{Minute, OperatingDay, RandomSource};
use tracing::{debug, warn};

/// Reservations arrive up to this many minutes before their hour.
pub const RESERVATION_LEAD_MINUTES: u32 = 30;

/// Output of [`preload_reservations`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationPreload {
    /// Arrival minute of each preloaded vehicle, in insertion order.
    pub arrivals: Vec<Minute>,
}

impl ReservationPreload {
    /// Number of preloaded vehicles (the sum of all histogram counts).
    pub fn total(&self) -> u64 {
        self.arrivals.len() as u64
    }
}

/// Convert an hour → confirmed-count histogram into jittered arrival minutes.
///
/// Draws exactly one `next_below(RESERVATION_LEAD_MINUTES)` per booking.
/// Hours outside the operating window are kept (their vehicles are clamped
/// to the nearest window edge) but logged.
pub fn preload_reservations<R: RandomSource>(
    histogram: &BTreeMap<u32, u32>,
    day:       OperatingDay,
    rng:       &mut R,
) -> ReservationPreload {
    let total: usize = histogram.values().map(|&c| c as usize).sum();
    let mut arrivals = Vec::with_capacity(total);

    for (&hour, &count) in histogram {
        let base = day.offset_of(hour, 0);
        if count > 0 && (base < 0 || base >= day.operation_minutes as i64) {
            warn!(hour, count, %day, "reservation hour outside operating window; clamping arrivals");
        }
        for _ in 0..count {
            let offset = rng.next_below(RESERVATION_LEAD_MINUTES) as i64;
            arrivals.push(day.clamp(base - offset));
        }
    }

    debug!(reservations = arrivals.len(), hours = histogram.len(), "preloaded reservations");
    ReservationPreload { arrivals }
}
