//! Reduce a [`RunRecord`] into summary statistics and chart-ready series.

use crate::RunRecord;

/// Queue occupancy at the end of one minute.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueSample {
    pub minute: u32,
    pub size:   u64,
}

/// The result handed to the presentation layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SimulationResult {
    /// Mean wait in minutes, rounded to one decimal place.
    pub avg_wait_time:       f64,
    pub max_queue_size:      u64,
    pub wait_time_samples:   Vec<u32>,
    pub queue_length_series: Vec<QueueSample>,
    pub total_vehicles:      u64,
}

impl SimulationResult {
    /// Reduce a finished run.  Samples and series pass through unmodified.
    pub fn from_record(record: RunRecord) -> Self {
        let total_vehicles = record.wait_times.len() as u64;
        let avg_wait_time = if record.wait_times.is_empty() {
            0.0
        } else {
            let sum: u64 = record.wait_times.iter().map(|&w| w as u64).sum();
            round_one_decimal(sum as f64 / total_vehicles as f64)
        };
        let max_queue_size = record.queue_series.iter().map(|s| s.size).max().unwrap_or(0);

        Self {
            avg_wait_time,
            max_queue_size,
            wait_time_samples: record.wait_times,
            queue_length_series: record.queue_series,
            total_vehicles,
        }
    }

    /// Bucket wait times into `bins` equal-width bins for a histogram.
    pub fn wait_histogram(&self, bins: usize) -> WaitHistogram {
        WaitHistogram::build(&self.wait_time_samples, bins)
    }

    /// Every `every`-th queue sample, starting at the first.  `every == 0`
    /// is treated as 1.
    pub fn sampled_series(&self, every: usize) -> Vec<QueueSample> {
        self.queue_length_series
            .iter()
            .step_by(every.max(1))
            .copied()
            .collect()
    }
}

/// Round half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ── WaitHistogram ─────────────────────────────────────────────────────────────

/// Default bin count used by the dashboard's wait-time chart.
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Equal-width histogram of wait times.
///
/// Bin `i` covers `[i * bin_width, (i + 1) * bin_width)`; the last bin also
/// absorbs everything beyond its upper edge.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WaitHistogram {
    pub bin_width: u32,
    pub counts:    Vec<u64>,
}

impl WaitHistogram {
    /// `bin_width = max(1, ceil(max_wait / bins))`.  `bins == 0` is treated as 1.
    pub fn build(samples: &[u32], bins: usize) -> Self {
        let bins = bins.max(1);
        let max_wait = samples.iter().copied().max().unwrap_or(0);
        let bin_width = max_wait.div_ceil(bins as u32).max(1);

        let mut counts = vec![0u64; bins];
        for &wait in samples {
            let idx = ((wait / bin_width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Self { bin_width, counts }
    }

    /// `[start, end)` minutes covered by bin `index`.
    pub fn bin_range(&self, index: usize) -> (u32, u32) {
        let start = index as u32 * self.bin_width;
        (start, start + self.bin_width)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
