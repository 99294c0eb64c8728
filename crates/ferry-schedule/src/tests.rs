//! Unit tests for ferry-schedule.

use std::collections::BTreeMap;

use ferry_core::{DepartureEvent, Minute, OperatingDay, SequenceSource, SimulationConfig, TripId};

use crate::{DepartureSchedule, RESERVATION_LEAD_MINUTES, preload_reservations};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn dep(minute: u32, capacity: u32, id: u64) -> DepartureEvent {
    DepartureEvent::new(minute, capacity).with_source(TripId(id))
}

// ── DepartureSchedule ─────────────────────────────────────────────────────────

#[cfg(test)]
mod departure_schedule {
    use super::*;

    #[test]
    fn new_sorts_by_minute_stably() {
        let schedule = DepartureSchedule::new(vec![dep(30, 5, 1), dep(10, 5, 2), dep(30, 7, 3)]);
        let ids: Vec<u64> = schedule
            .events()
            .iter()
            .map(|e| e.source_id.unwrap().0)
            .collect();
        assert_eq!(ids, vec![2, 1, 3], "ties keep insertion order");
    }

    #[test]
    fn at_returns_all_events_sharing_a_minute() {
        let schedule = DepartureSchedule::new(vec![dep(30, 5, 1), dep(10, 5, 2), dep(30, 7, 3)]);
        let at30 = schedule.at(Minute(30));
        assert_eq!(at30.len(), 2);
        assert_eq!(at30[0].capacity, 5);
        assert_eq!(at30[1].capacity, 7);
        assert!(schedule.at(Minute(11)).is_empty());
        assert_eq!(schedule.at(Minute(10)).len(), 1);
    }

    #[test]
    fn evenly_spaced_lands_on_integer_minutes() {
        let schedule = DepartureSchedule::evenly_spaced(4, 50, 960);
        let minutes: Vec<u32> = schedule.events().iter().map(|e| e.minute_offset).collect();
        assert_eq!(minutes, vec![0, 240, 480, 720]);

        // 100 / 3 is fractional; every event must still be reachable.
        let odd = DepartureSchedule::evenly_spaced(3, 10, 100);
        let minutes: Vec<u32> = odd.events().iter().map(|e| e.minute_offset).collect();
        assert_eq!(minutes, vec![0, 33, 66]);
    }

    #[test]
    fn zero_ferries_yields_empty_schedule() {
        let schedule = DepartureSchedule::evenly_spaced(0, 50, 960);
        assert!(schedule.is_empty());
        assert_eq!(schedule.total_capacity(), 0);
    }

    #[test]
    fn from_config_prefers_explicit_departures() {
        let cfg = SimulationConfig {
            departures: vec![dep(45, 12, 9)],
            ..Default::default()
        };
        let schedule = DepartureSchedule::from_config(&cfg);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.total_capacity(), 12);

        let synthesized = DepartureSchedule::from_config(&SimulationConfig::default());
        assert_eq!(synthesized.len(), 4);
        assert_eq!(synthesized.total_capacity(), 200);
    }
}

// ── Reservation preloading ────────────────────────────────────────────────────

#[cfg(test)]
mod reservations {
    use super::*;

    fn histogram(entries: &[(u32, u32)]) -> BTreeMap<u32, u32> {
        entries.iter().copied().collect()
    }

    #[test]
    fn one_draw_per_booking_in_hour_order() {
        let day = OperatingDay::new(6, 960);
        // offsets: 0.5 → 15, 0.0 → 0, 0.9 → 27
        let mut rng = SequenceSource::new(vec![0.5, 0.0, 0.9]);
        let pre = preload_reservations(&histogram(&[(9, 1), (8, 2)]), day, &mut rng);

        assert_eq!(rng.draws(), 3);
        assert_eq!(pre.total(), 3);
        // Hour 8 (base 120) first, then hour 9 (base 180).
        assert_eq!(pre.arrivals, vec![Minute(105), Minute(120), Minute(153)]);
    }

    #[test]
    fn arrivals_stay_within_lead_window() {
        let day = OperatingDay::new(6, 960);
        let mut rng = ferry_core::SimRng::new(7);
        let pre = preload_reservations(&histogram(&[(10, 200)]), day, &mut rng);
        let base = 240;
        for m in &pre.arrivals {
            assert!(m.0 <= base && m.0 > base - RESERVATION_LEAD_MINUTES, "got {m}");
        }
    }

    #[test]
    fn early_hours_clamp_to_opening() {
        let day = OperatingDay::new(6, 960);
        let mut rng = SequenceSource::constant(0.5);
        let pre = preload_reservations(&histogram(&[(6, 1), (4, 1)]), day, &mut rng);
        assert_eq!(pre.arrivals, vec![Minute(0), Minute(0)]);
    }

    #[test]
    fn late_hours_clamp_to_last_minute() {
        let day = OperatingDay::new(6, 60);
        let mut rng = SequenceSource::constant(0.0);
        let pre = preload_reservations(&histogram(&[(9, 2)]), day, &mut rng);
        assert_eq!(pre.arrivals, vec![Minute(59), Minute(59)]);
    }

    #[test]
    fn empty_histogram_draws_nothing() {
        let mut rng = SequenceSource::constant(0.5);
        let pre = preload_reservations(&BTreeMap::new(), OperatingDay::new(6, 60), &mut rng);
        assert_eq!(pre.total(), 0);
        assert_eq!(rng.draws(), 0);
    }
}

// ── CSV loaders ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{ScheduleError, load_departures_reader, load_histogram_reader};

    #[test]
    fn departures_with_optional_source() {
        let csv = "minute_offset,capacity,source_id\n0,50,101\n240,35,\n";
        let events = load_departures_reader(Cursor::new(csv)).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].source_id, Some(ferry_core::TripId(101)));
        assert_eq!(events[1].minute_offset, 240);
        assert_eq!(events[1].source_id, None);
    }

    #[test]
    fn departures_bad_row_is_parse_error() {
        let csv = "minute_offset,capacity,source_id\nnoon,50,1\n";
        assert!(matches!(
            load_departures_reader(Cursor::new(csv)),
            Err(ScheduleError::Csv(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_departures_csv(std::path::Path::new("/nonexistent/sailings.csv"))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Io(_)));
    }

    #[test]
    fn histogram_sums_repeated_hours() {
        let csv = "hour,confirmed\n8,12\n17,30\n8,3\n";
        let h = load_histogram_reader(Cursor::new(csv)).unwrap();
        assert_eq!(h.get(&8), Some(&15));
        assert_eq!(h.get(&17), Some(&30));
    }

    #[test]
    fn histogram_rejects_negative_counts_and_bad_hours() {
        let negative = "hour,confirmed\n8,-2\n";
        assert!(matches!(
            load_histogram_reader(Cursor::new(negative)),
            Err(ScheduleError::Csv(_))
        ));
        let bad_hour = "hour,confirmed\n24,1\n";
        assert!(matches!(
            load_histogram_reader(Cursor::new(bad_hour)),
            Err(ScheduleError::InvalidHour { hour: 24 })
        ));
    }
}
