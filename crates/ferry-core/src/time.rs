//! Simulation time model.
//!
//! # Design
//!
//! Time is a `Minute` offset from the opening of the operating window.  The
//! mapping to wall-clock time is held in `OperatingDay`:
//!
//!   wall_clock = start_hour:00 + minute
//!
//! Integer minutes keep all schedule arithmetic exact and match the
//! granularity of the source data (hourly booking histograms, minute-level
//! sailing times).

use std::fmt;

// ── Minute ────────────────────────────────────────────────────────────────────

/// A minute offset from the start of the operating window.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Minute(pub u32);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// Minutes elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Minute) -> u32 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u32> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u32) -> Minute {
        Minute(self.0 + rhs)
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

// ── OperatingDay ──────────────────────────────────────────────────────────────

/// The operating window: a wall-clock opening hour plus a length in minutes.
///
/// `OperatingDay` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OperatingDay {
    /// Wall-clock hour (0–23) at which minute 0 starts.
    pub start_hour: u32,
    /// Length of the window; valid minutes are `0..operation_minutes`.
    pub operation_minutes: u32,
}

impl OperatingDay {
    pub fn new(start_hour: u32, operation_minutes: u32) -> Self {
        Self { start_hour, operation_minutes }
    }

    /// Exclusive end of the window.
    #[inline]
    pub fn end(&self) -> Minute {
        Minute(self.operation_minutes)
    }

    #[inline]
    pub fn contains(&self, minute: Minute) -> bool {
        minute.0 < self.operation_minutes
    }

    /// Signed offset of a wall-clock `hour:minute` from the window opening.
    /// Negative for times before opening.
    #[inline]
    pub fn offset_of(&self, hour: u32, minute: u32) -> i64 {
        (hour as i64 - self.start_hour as i64) * 60 + minute as i64
    }

    /// The window minute at wall-clock `hour:minute`, or `None` if that time
    /// falls outside `[0, operation_minutes)`.
    pub fn minute_at(&self, hour: u32, minute: u32) -> Option<Minute> {
        let offset = self.offset_of(hour, minute);
        (offset >= 0 && offset < self.operation_minutes as i64).then_some(Minute(offset as u32))
    }

    /// Clamp a signed offset into the window (`0..=operation_minutes - 1`).
    pub fn clamp(&self, offset: i64) -> Minute {
        let last = self.operation_minutes.saturating_sub(1) as i64;
        Minute(offset.clamp(0, last) as u32)
    }

    /// `HH:MM` wall-clock label for a window minute.  Hours wrap past midnight.
    pub fn label(&self, minute: Minute) -> String {
        let hours = (self.start_hour as u64 + (minute.0 / 60) as u64) % 24;
        format!("{:02}:{:02}", hours, minute.0 % 60)
    }
}

impl fmt::Display for OperatingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00 +{} min", self.start_hour, self.operation_minutes)
    }
}
