//! Walk-in arrival generator.
//!
//! # Rate model
//!
//! The daily walk-in budget is turned into a flat per-minute rate:
//!
//! - **Smoothed** (reservations enabled): `budget / operation_minutes` for
//!   every minute.
//! - **Peaked**: `floor(PEAK_SHARE * budget)` is spread over all peak minutes
//!   and the remainder over all off-peak minutes.  If there are no peak
//!   minutes the whole budget is off-peak, and vice versa.
//!
//! # Sampling
//!
//! A rate of `2.3` yields 2 arrivals plus one more with probability 0.3.
//! Exactly one unit draw is consumed per sampled minute, whatever the rate,
//! so the draw sequence depends only on the number of minutes stepped.

use ferry_core::{Minute, PeakWindow, RandomSource, SimulationConfig};

/// Share of the walk-in budget that arrives during peak windows.
pub const PEAK_SHARE: f64 = 0.4;

#[derive(Clone, Debug, PartialEq)]
enum RateMode {
    Uniform(f64),
    Peaked { peak: f64, off_peak: f64 },
}

/// Per-minute arrival rates for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrivalGenerator {
    mode:         RateMode,
    peak_windows: Vec<PeakWindow>,
}

impl ArrivalGenerator {
    /// The same rate for every minute.
    pub fn uniform(walk_in_budget: f64, operation_minutes: u32) -> Self {
        let rate = per_minute(walk_in_budget, operation_minutes);
        Self { mode: RateMode::Uniform(rate), peak_windows: Vec::new() }
    }

    /// Two-regime rates split by `peak_windows`.
    pub fn peaked(walk_in_budget: f64, operation_minutes: u32, peak_windows: &[PeakWindow]) -> Self {
        let peak_minutes: u32 = peak_windows.iter().map(PeakWindow::len).sum();
        let off_peak_minutes = operation_minutes.saturating_sub(peak_minutes);

        if peak_minutes == 0 || off_peak_minutes == 0 {
            return Self::uniform(walk_in_budget, operation_minutes);
        }

        let peak_arrivals = (walk_in_budget * PEAK_SHARE).floor();
        Self {
            mode: RateMode::Peaked {
                peak:     per_minute(peak_arrivals, peak_minutes),
                off_peak: per_minute(walk_in_budget - peak_arrivals, off_peak_minutes),
            },
            peak_windows: peak_windows.to_vec(),
        }
    }

    /// The generator a run of `config` uses for the given walk-in budget.
    pub fn for_config(config: &SimulationConfig, walk_in_budget: f64) -> Self {
        if config.use_reservation_smoothing {
            Self::uniform(walk_in_budget, config.operation_minutes)
        } else {
            Self::peaked(walk_in_budget, config.operation_minutes, &config.peak_windows)
        }
    }

    /// Expected arrivals during `minute` (may be fractional).
    pub fn rate(&self, minute: Minute) -> f64 {
        match self.mode {
            RateMode::Uniform(rate) => rate,
            RateMode::Peaked { peak, off_peak } => {
                if self.peak_windows.iter().any(|w| w.contains(minute)) {
                    peak
                } else {
                    off_peak
                }
            }
        }
    }

    /// Integer arrivals for one minute at `rate`.  Consumes one draw.
    ///
    /// Saturates at `u64::MAX`; validated configs stay far below it.
    pub fn sample<R: RandomSource>(rate: f64, rng: &mut R) -> u64 {
        let rate = rate.max(0.0);
        let whole = rate.floor();
        let fractional = rate - whole;
        let extra = rng.next_unit() < fractional;
        (whole as u64).saturating_add(extra as u64)
    }

    /// Shorthand for `sample(rate(minute), rng)`.
    #[inline]
    pub fn arrivals_at<R: RandomSource>(&self, minute: Minute, rng: &mut R) -> u64 {
        Self::sample(self.rate(minute), rng)
    }
}

fn per_minute(arrivals: f64, minutes: u32) -> f64 {
    if minutes == 0 { 0.0 } else { arrivals / minutes as f64 }
}
