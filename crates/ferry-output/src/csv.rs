//! CSV output backend.
//!
//! Creates three files in the output directory:
//! - `queue_series.csv`
//! - `boardings.csv`
//! - `wait_times.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use ferry_sim::Disposition;

use crate::writer::OutputWriter;
use crate::{BoardingRow, OutputResult, QueueSampleRow, WaitRow};

pub const QUEUE_SERIES_FILE: &str = "queue_series.csv";
pub const BOARDINGS_FILE: &str = "boardings.csv";
pub const WAIT_TIMES_FILE: &str = "wait_times.csv";

/// Writes a run to three CSV files.
pub struct CsvWriter {
    queue:     Writer<File>,
    boardings: Writer<File>,
    waits:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the directory if needed, open the three files, and write headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut queue = Writer::from_path(dir.join(QUEUE_SERIES_FILE))?;
        queue.write_record(["minute", "clock", "queue_len", "arrivals"])?;

        let mut boardings = Writer::from_path(dir.join(BOARDINGS_FILE))?;
        boardings.write_record(["minute", "clock", "capacity", "boarded", "left_behind", "trip_id"])?;

        let mut waits = Writer::from_path(dir.join(WAIT_TIMES_FILE))?;
        waits.write_record(["arrival_minute", "left_minute", "wait", "origin", "disposition"])?;

        Ok(Self { queue, boardings, waits, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_queue_sample(&mut self, row: &QueueSampleRow) -> OutputResult<()> {
        self.queue.write_record(&[
            row.minute.to_string(),
            row.clock.clone(),
            row.queue_len.to_string(),
            row.arrivals.to_string(),
        ])?;
        Ok(())
    }

    fn write_boarding(&mut self, row: &BoardingRow) -> OutputResult<()> {
        self.boardings.write_record(&[
            row.minute.to_string(),
            row.clock.clone(),
            row.capacity.to_string(),
            row.boarded.to_string(),
            row.left_behind.to_string(),
            row.trip_id.map(|id| id.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn write_waits(&mut self, rows: &[WaitRow]) -> OutputResult<()> {
        for row in rows {
            let disposition = match row.disposition {
                Disposition::Boarded => "boarded",
                Disposition::Drained => "drained",
            };
            self.waits.write_record(&[
                row.arrival_minute.to_string(),
                row.left_minute.to_string(),
                row.wait.to_string(),
                row.origin.to_string(),
                disposition.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.queue.flush()?;
        self.boardings.flush()?;
        self.waits.flush()?;
        Ok(())
    }
}
