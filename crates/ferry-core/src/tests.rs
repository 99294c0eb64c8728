//! Unit tests for ferry-core primitives.

#[cfg(test)]
mod ids {
    use crate::{TripId, VesselId};

    #[test]
    fn ordering() {
        assert!(TripId(1) < TripId(2));
        assert!(VesselId(100) > VesselId(99));
    }

    #[test]
    fn display() {
        assert_eq!(TripId(7).to_string(), "TripId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{Minute, OperatingDay};

    #[test]
    fn minute_arithmetic() {
        assert_eq!(Minute(10) + 5, Minute(15));
        assert_eq!(Minute(15).since(Minute(10)), 5);
        assert_eq!(Minute(3).since(Minute(10)), 0, "since saturates");
    }

    #[test]
    fn offset_of_wall_clock() {
        let day = OperatingDay::new(6, 960);
        assert_eq!(day.offset_of(6, 0), 0);
        assert_eq!(day.offset_of(8, 30), 150);
        assert_eq!(day.offset_of(5, 0), -60);
    }

    #[test]
    fn minute_at_respects_window() {
        let day = OperatingDay::new(6, 960);
        assert_eq!(day.minute_at(7, 15), Some(Minute(75)));
        assert_eq!(day.minute_at(5, 59), None);
        assert_eq!(day.minute_at(22, 0), None, "end is exclusive");
        assert_eq!(day.minute_at(21, 59), Some(Minute(959)));
    }

    #[test]
    fn clamp_into_window() {
        let day = OperatingDay::new(6, 60);
        assert_eq!(day.clamp(-25), Minute(0));
        assert_eq!(day.clamp(30), Minute(30));
        assert_eq!(day.clamp(500), Minute(59));
    }

    #[test]
    fn labels() {
        let day = OperatingDay::new(6, 960);
        assert_eq!(day.label(Minute(0)), "06:00");
        assert_eq!(day.label(Minute(135)), "08:15");
        let late = OperatingDay::new(22, 240);
        assert_eq!(late.label(Minute(150)), "00:30");
    }

    #[test]
    fn label_wraps_without_overflow() {
        let day = OperatingDay::new(u32::MAX, 60);
        assert_eq!(day.label(Minute(120)), "01:00");
        assert_eq!(day.label(Minute(u32::MAX)).len(), 5);
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, SequenceSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.next_unit(), r2.next_unit());
            assert_eq!(r1.next_below(30), r2.next_below(30));
        }
    }

    #[test]
    fn unit_and_below_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u));
            assert!(rng.next_below(30) < 30);
        }
        assert_eq!(rng.next_below(0), 0);
    }

    #[test]
    fn sequence_cycles() {
        let mut seq = SequenceSource::new(vec![0.1, 0.9]);
        assert_eq!(seq.next_unit(), 0.1);
        assert_eq!(seq.next_unit(), 0.9);
        assert_eq!(seq.next_unit(), 0.1);
        assert_eq!(seq.draws(), 3);
    }

    #[test]
    fn sequence_next_below_floors() {
        let mut seq = SequenceSource::new(vec![0.0, 0.5, 0.999, 1.0]);
        assert_eq!(seq.next_below(30), 0);
        assert_eq!(seq.next_below(30), 15);
        assert_eq!(seq.next_below(30), 29);
        assert_eq!(seq.next_below(30), 29, "1.0 is clamped below the bound");
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let mut seq = SequenceSource::default();
        assert_eq!(seq.next_unit(), 0.0);
    }

    #[test]
    fn mut_ref_forwards() {
        fn draw<R: RandomSource>(mut source: R) -> f64 {
            source.next_unit()
        }

        let mut seq = SequenceSource::constant(0.25);
        assert_eq!(draw(&mut seq), 0.25);
        assert_eq!(seq.draws(), 1);
    }
}

#[cfg(test)]
mod config {
    use crate::{
        ConfigError, DepartureEvent, MAX_FERRY_COUNT, MAX_OPERATION_MINUTES, MAX_VEHICLES_PER_DAY,
        PeakWindow, SimulationConfig,
    };

    fn base() -> SimulationConfig {
        SimulationConfig {
            operation_minutes: 60,
            peak_windows: vec![],
            ..Default::default()
        }
    }

    #[test]
    fn default_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
        assert_eq!(SimulationConfig::default().peak_minutes(), 240);
    }

    #[test]
    fn zero_operation_minutes_rejected() {
        let cfg = SimulationConfig { operation_minutes: 0, ..base() };
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveOperationMinutes));
    }

    #[test]
    fn zero_ferry_capacity_rejected() {
        let cfg = SimulationConfig { ferry_capacity: 0, ..base() };
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveFerryCapacity));
    }

    #[test]
    fn zero_ferry_count_is_degenerate_not_invalid() {
        let cfg = SimulationConfig { ferry_count: 0, ..base() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn departure_capacity_rejected() {
        let cfg = SimulationConfig {
            departures: vec![DepartureEvent::new(10, 5), DepartureEvent::new(20, 0)],
            ..base()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveDepartureCapacity { index: 1 }));
    }

    #[test]
    fn departure_outside_window_rejected() {
        let cfg = SimulationConfig { departures: vec![DepartureEvent::new(60, 5)], ..base() };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DepartureOutsideWindow { index: 0, minute: 60, .. })
        ));
    }

    #[test]
    fn negative_or_nan_arrivals_rejected() {
        let cfg = SimulationConfig { avg_arrivals_per_day: -1.0, ..base() };
        assert_eq!(cfg.validate().unwrap_err().code(), "invalid_arrivals");
        let cfg = SimulationConfig { avg_arrivals_per_day: f64::NAN, ..base() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn overlapping_peaks_rejected_regardless_of_order() {
        let cfg = SimulationConfig {
            peak_windows: vec![PeakWindow::new(30, 50), PeakWindow::new(10, 31)],
            ..base()
        };
        assert_eq!(cfg.validate().unwrap_err().code(), "overlapping_peak_windows");
    }

    #[test]
    fn adjacent_peaks_allowed() {
        let cfg = SimulationConfig {
            peak_windows: vec![PeakWindow::new(0, 30), PeakWindow::new(30, 60)],
            ..base()
        };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.peak_minutes(), 60);
    }

    #[test]
    fn empty_and_out_of_window_peaks_rejected() {
        let cfg = SimulationConfig { peak_windows: vec![PeakWindow::new(20, 20)], ..base() };
        assert_eq!(cfg.validate().unwrap_err().code(), "empty_peak_window");
        let cfg = SimulationConfig { peak_windows: vec![PeakWindow::new(50, 61)], ..base() };
        assert_eq!(cfg.validate().unwrap_err().code(), "peak_window_outside_window");
    }

    #[test]
    fn start_hour_must_be_wall_clock() {
        let cfg = SimulationConfig { operation_start_hour: 23, ..base() };
        assert!(cfg.validate().is_ok());
        let cfg = SimulationConfig { operation_start_hour: 24, ..base() };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidStartHour(24)));
        let cfg = SimulationConfig { operation_start_hour: u32::MAX, ..base() };
        assert_eq!(cfg.validate().unwrap_err().code(), "invalid_start_hour");
    }

    #[test]
    fn horizon_is_bounded() {
        let cfg = SimulationConfig { operation_minutes: MAX_OPERATION_MINUTES, ..base() };
        assert!(cfg.validate().is_ok());
        let cfg = SimulationConfig { operation_minutes: u32::MAX, ..base() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::WindowTooLong { minutes: u32::MAX, max: MAX_OPERATION_MINUTES })
        );
        assert_eq!(cfg.validate().unwrap_err().code(), "operation_window_too_long");
    }

    #[test]
    fn fleet_size_is_bounded() {
        let cfg = SimulationConfig { ferry_count: MAX_FERRY_COUNT, ..base() };
        assert!(cfg.validate().is_ok());
        let cfg = SimulationConfig { ferry_count: u32::MAX, ..base() };
        assert_eq!(cfg.validate().unwrap_err().code(), "too_many_ferries");
    }

    #[test]
    fn demand_is_bounded() {
        let cfg = SimulationConfig { avg_arrivals_per_day: MAX_VEHICLES_PER_DAY as f64, ..base() };
        assert!(cfg.validate().is_ok());
        let cfg = SimulationConfig { avg_arrivals_per_day: 5.0e9, ..base() };
        assert_eq!(cfg.validate(), Err(ConfigError::ArrivalsTooLarge(5.0e9)));

        let mut cfg = base();
        for hour in 0..3 {
            cfg.reservation_histogram.insert(hour, u32::MAX);
        }
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ReservationsTooLarge(3 * u32::MAX as u64))
        );
    }

    #[test]
    fn total_reservations_sums_histogram() {
        let mut cfg = base();
        cfg.reservation_histogram.insert(8, 12);
        cfg.reservation_histogram.insert(17, 3);
        assert_eq!(cfg.total_reservations(), 15);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_uses_camel_case() {
        let json = r#"{
            "ferryCount": 2,
            "ferryCapacity": 5,
            "avgArrivalsPerDay": 30,
            "operationMinutes": 60,
            "operationStartHour": 6,
            "departures": [{"minuteOffset": 30, "capacity": 5, "sourceId": 9}],
            "reservationHistogram": {"7": 4}
        }"#;
        let cfg: SimulationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.departures[0].source_id, Some(crate::TripId(9)));
        assert_eq!(cfg.reservation_histogram.get(&7), Some(&4));
        assert!(!cfg.use_reservation_smoothing);
        assert!(cfg.peak_windows.is_empty());
    }
}
