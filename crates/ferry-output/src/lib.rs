//! `ferry-output` — writes simulation runs to disk.
//!
//! | File               | One row per                              |
//! |--------------------|------------------------------------------|
//! | `queue_series.csv` | stepped minute (queue length, arrivals)  |
//! | `boardings.csv`    | departure (boarded, left behind)         |
//! | `wait_times.csv`   | vehicle (arrival, exit, wait, origin)    |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `ferry_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ferry_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! let result = ferry_sim::simulate_with_observer(&config, SimRng::new(seed), &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{BoardingRow, QueueSampleRow, WaitRow};
pub use writer::OutputWriter;
