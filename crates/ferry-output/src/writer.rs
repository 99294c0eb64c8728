//! The `OutputWriter` trait implemented by backend writers.

use crate::{BoardingRow, OutputResult, QueueSampleRow, WaitRow};

/// Sink for rows produced during a run.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with `take_error` once the run returns.
pub trait OutputWriter {
    fn write_queue_sample(&mut self, row: &QueueSampleRow) -> OutputResult<()>;

    fn write_boarding(&mut self, row: &BoardingRow) -> OutputResult<()>;

    /// Write a batch of per-vehicle wait rows.
    fn write_waits(&mut self, rows: &[WaitRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
