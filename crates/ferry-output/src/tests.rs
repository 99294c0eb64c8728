//! Tests for ferry-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use ferry_sim::{Disposition, Origin};

    use crate::csv::{BOARDINGS_FILE, CsvWriter, QUEUE_SERIES_FILE, WAIT_TIMES_FILE};
    use crate::row::{BoardingRow, QueueSampleRow, WaitRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn files_created_in_missing_dir() {
        let dir = tmp();
        let out = dir.path().join("runs").join("today");
        let _w = CsvWriter::new(&out).unwrap();
        assert!(out.join(QUEUE_SERIES_FILE).exists());
        assert!(out.join(BOARDINGS_FILE).exists());
        assert!(out.join(WAIT_TIMES_FILE).exists());
    }

    #[test]
    fn headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(dir.path().join(QUEUE_SERIES_FILE)), ["minute", "clock", "queue_len", "arrivals"]);
        assert_eq!(
            headers(dir.path().join(BOARDINGS_FILE)),
            ["minute", "clock", "capacity", "boarded", "left_behind", "trip_id"]
        );
        assert_eq!(
            headers(dir.path().join(WAIT_TIMES_FILE)),
            ["arrival_minute", "left_minute", "wait", "origin", "disposition"]
        );
    }

    #[test]
    fn boarding_rows_with_and_without_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = |trip_id| BoardingRow {
            minute: 30,
            clock: "06:30".to_owned(),
            capacity: 5,
            boarded: 5,
            left_behind: 11,
            trip_id,
        };
        w.write_boarding(&row(Some(17))).unwrap();
        w.write_boarding(&row(None)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(BOARDINGS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "06:30");
        assert_eq!(&rows[0][5], "17");
        assert_eq!(&rows[1][5], "");
    }

    #[test]
    fn wait_rows_label_origin_and_disposition() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_waits(&[
            WaitRow {
                arrival_minute: 2,
                left_minute:    30,
                wait:           28,
                origin:         Origin::WalkIn,
                disposition:    Disposition::Boarded,
            },
            WaitRow {
                arrival_minute: 45,
                left_minute:    60,
                wait:           15,
                origin:         Origin::Reservation,
                disposition:    Disposition::Drained,
            },
        ])
        .unwrap();
        w.write_queue_sample(&QueueSampleRow {
            minute:    0,
            clock:     "06:00".to_owned(),
            queue_len: 1,
            arrivals:  1,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(WAIT_TIMES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][3], "walk-in");
        assert_eq!(&rows[0][4], "boarded");
        assert_eq!(&rows[1][3], "reservation");
        assert_eq!(&rows[1][4], "drained");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use std::collections::BTreeMap;

    use ferry_core::{DepartureEvent, SequenceSource, SimulationConfig, TripId};
    use ferry_sim::simulate_with_observer;

    use crate::csv::{BOARDINGS_FILE, CsvWriter, QUEUE_SERIES_FILE, WAIT_TIMES_FILE};
    use crate::row::{BoardingRow, QueueSampleRow, WaitRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, SimOutputObserver};

    fn one_sailing_hour() -> SimulationConfig {
        SimulationConfig {
            ferry_count:               1,
            ferry_capacity:            5,
            avg_arrivals_per_day:      30.0,
            operation_minutes:         60,
            operation_start_hour:      6,
            use_reservation_smoothing: false,
            peak_windows:              vec![],
            departures:                vec![DepartureEvent::new(30, 5).with_source(TripId(9))],
            reservation_histogram:     BTreeMap::new(),
        }
    }

    fn count_rows(path: std::path::PathBuf) -> usize {
        csv::Reader::from_path(path).unwrap().records().count()
    }

    #[test]
    fn full_run_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let config = one_sailing_hour();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config);

        let result =
            simulate_with_observer(&config, SequenceSource::new(vec![0.25, 0.75]), &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        assert_eq!(count_rows(dir.path().join(QUEUE_SERIES_FILE)), 60);
        assert_eq!(count_rows(dir.path().join(WAIT_TIMES_FILE)), result.total_vehicles as usize);

        let mut rdr = csv::Reader::from_path(dir.path().join(BOARDINGS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "06:30");
        assert_eq!(&rows[0][3], "5");
        assert_eq!(&rows[0][4], "11");
        assert_eq!(&rows[0][5], "9");

        let mut rdr = csv::Reader::from_path(dir.path().join(QUEUE_SERIES_FILE)).unwrap();
        let last = rdr.records().map(|r| r.unwrap()).last().unwrap();
        assert_eq!(&last[1], "06:59");
    }

    /// Fails every queue-sample write with a distinct message.
    struct Failing {
        attempts: u32,
        finished: bool,
    }

    impl OutputWriter for Failing {
        fn write_queue_sample(&mut self, _row: &QueueSampleRow) -> OutputResult<()> {
            self.attempts += 1;
            Err(OutputError::Io(std::io::Error::other(format!("disk full #{}", self.attempts))))
        }
        fn write_boarding(&mut self, _row: &BoardingRow) -> OutputResult<()> {
            Ok(())
        }
        fn write_waits(&mut self, _rows: &[WaitRow]) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn first_error_kept_and_run_completes() {
        let config = one_sailing_hour();
        let mut obs = SimOutputObserver::new(Failing { attempts: 0, finished: false }, &config);
        let result = simulate_with_observer(&config, SequenceSource::constant(0.9), &mut obs);
        assert!(result.is_ok());

        let err = obs.take_error().expect("stored error");
        assert!(err.to_string().contains("disk full #1"));
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.attempts, 60);
        assert!(writer.finished);
    }
}
