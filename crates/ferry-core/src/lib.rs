//! `ferry-core` — foundational types for the ferry queueing simulator.
//!
//! This crate is a dependency of every other `ferry-*` crate.  It has no
//! `ferry-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `TripId`, `VesselId`                                       |
//! | [`time`]        | `Minute`, `OperatingDay`                                   |
//! | [`rng`]         | `RandomSource` trait, `SimRng` (seeded), `SequenceSource`  |
//! | [`config`]      | `SimulationConfig`, `PeakWindow`, `DepartureEvent`         |
//! | [`error`]       | `ConfigError`, `ConfigResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types, using  |
//! |         | camelCase field names on the wire.                         |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    DepartureEvent, MAX_FERRY_COUNT, MAX_OPERATION_MINUTES, MAX_VEHICLES_PER_DAY, PeakWindow,
    SimulationConfig,
};
pub use error::{ConfigError, ConfigResult};
pub use ids::{TripId, VesselId};
pub use rng::{RandomSource, SequenceSource, SimRng};
pub use time::{Minute, OperatingDay};
