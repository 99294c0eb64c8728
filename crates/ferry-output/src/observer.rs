//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ferry_core::{DepartureEvent, Minute, OperatingDay, SimulationConfig};
use ferry_sim::{Disposition, RunRecord, SimObserver, Vehicle};

use crate::row::{BoardingRow, QueueSampleRow, WaitRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes queue samples, boardings, and per-vehicle
/// waits to any [`OutputWriter`].
///
/// Wait rows are buffered and written once per minute (and once more for the
/// closing drain).  Writer errors are stored because observer methods have no
/// return value; check [`take_error`][Self::take_error] after the run.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    day:        OperatingDay,
    waits:      Vec<WaitRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, labelling minutes with the
    /// wall-clock window of `config`.
    pub fn new(writer: W, config: &SimulationConfig) -> Self {
        Self {
            writer,
            day:        config.operating_day(),
            waits:      Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error, if any.  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_waits(&mut self) {
        if self.waits.is_empty() {
            return;
        }
        let result = self.writer.write_waits(&self.waits);
        self.waits.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_boarding(
        &mut self,
        minute:      Minute,
        departure:   &DepartureEvent,
        boarded:     u64,
        left_behind: u64,
    ) {
        let row = BoardingRow {
            minute: minute.0,
            clock: self.day.label(minute),
            capacity: departure.capacity,
            boarded,
            left_behind,
            trip_id: departure.source_id.map(|id| id.0),
        };
        let result = self.writer.write_boarding(&row);
        self.store_err(result);
    }

    fn on_vehicle_processed(
        &mut self,
        vehicle:     &Vehicle,
        at:          Minute,
        wait:        u32,
        disposition: Disposition,
    ) {
        self.waits.push(WaitRow {
            arrival_minute: vehicle.arrival_minute.0,
            left_minute: at.0,
            wait,
            origin: vehicle.origin,
            disposition,
        });
    }

    fn on_minute_end(&mut self, minute: Minute, queue_len: u64, arrivals: u64) {
        self.flush_waits();
        let row = QueueSampleRow {
            minute: minute.0,
            clock: self.day.label(minute),
            queue_len,
            arrivals,
        };
        let result = self.writer.write_queue_sample(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _record: &RunRecord) {
        self.flush_waits();
        let result = self.writer.finish();
        self.store_err(result);
    }
}
