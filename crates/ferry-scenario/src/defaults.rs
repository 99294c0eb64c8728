//! Constants used when a snapshot leaves a figure unspecified.

/// Fallbacks and estimation constants for turning a snapshot into a config.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioDefaults {
    /// Per-departure capacity when no vessel is operational.
    pub fallback_ferry_capacity: u32,
    /// Operating window used when the snapshot has no sailings.
    pub start_hour: u32,
    pub end_hour:   u32,
    /// Hours added after the last sailing's hour to close the window.
    pub trailing_hours: u32,
    /// Walk-ins expected per scheduled sailing when estimating demand.
    pub walk_ins_per_sailing: u32,
    /// Daily arrivals used when the estimate comes out as zero.
    pub fallback_arrivals_per_day: f64,
    /// Wall-clock `[start, end)` rush hours.
    pub peak_hours: Vec<(u32, u32)>,
}

impl Default for ScenarioDefaults {
    fn default() -> Self {
        Self {
            fallback_ferry_capacity:   50,
            start_hour:                6,
            end_hour:                  22,
            trailing_hours:            2,
            walk_ins_per_sailing:      10,
            fallback_arrivals_per_day: 1200.0,
            peak_hours:                vec![(7, 9), (17, 19)],
        }
    }
}
