//! `ferry-scenario` — turns an operational snapshot into simulation configs.
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`snapshot`]    | `OperationalSnapshot`, vessels, sailings, operating window  |
//! | [`defaults`]    | `ScenarioDefaults` (fallback capacity, window, rush hours)  |
//! | [`configure`]   | `Scenario` tag and `configure()`                            |
//! | [`warning`]     | Snapshot warnings shown next to results                     |
//! | [`compare`]     | `run_scenario()`, `compare_scenarios()`                     |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Run compared scenarios on the Rayon thread pool.       |

pub mod compare;
pub mod configure;
pub mod defaults;
pub mod error;
pub mod snapshot;
pub mod warning;


pub use compare::{ScenarioComparison, ScenarioOutcome, compare_scenarios, run_scenario};
pub use configure::{Scenario, configure};
pub use defaults::ScenarioDefaults;
pub use error::{ScenarioError, ScenarioResult};
pub use snapshot::{
    OperationWindow, OperationalSnapshot, ParsedTrip, ScheduledTrip, Vessel, VesselStatus,
};
pub use warning::{Severity, SnapshotWarning, WarningKind, snapshot_warnings};
