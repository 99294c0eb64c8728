//! `ferry-schedule` — departure schedules, reservation preloading, and CSV loading.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`departure`]   | `DepartureSchedule` (read-only, ordered by minute)        |
//! | [`reservation`] | `preload_reservations`, `ReservationPreload`              |
//! | [`loader`]      | `load_departures_csv`, `load_histogram_csv`, reader forms |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Schedule model (summary)
//!
//! Every run has exactly one `DepartureSchedule`.  It is either taken from
//! the config's explicit sailings or synthesized by spacing `ferry_count`
//! events evenly across the window:
//!
//! ```text
//! minute_i = floor(i * operation_minutes / ferry_count)   for i in 0..ferry_count
//! ```
//!
//! The engine asks the schedule once per minute for the events at that
//! minute; several ferries may share a minute.

pub mod departure;
pub mod error;
pub mod loader;
pub mod reservation;

#[cfg(test)]
mod tests;

pub use departure::DepartureSchedule;
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_departures_csv, load_departures_reader, load_histogram_csv, load_histogram_reader};
pub use reservation::{RESERVATION_LEAD_MINUTES, ReservationPreload, preload_reservations};
