//! `ferry-sim` — minute-stepped queue engine for the ferry simulator.
//!
//! # Minute loop
//!
//! ```text
//! preload reservations (smoothing runs only)
//! for minute in 0..config.operation_minutes:
//!   ① Arrivals: sample walk-ins from the two-regime (or uniform) rate.
//!   ② Boarding: each departure at this minute takes up to its capacity
//!                 from the front of the FIFO queue.
//!   ③ Record  : push {minute, queue length} onto the series.
//! drain: everyone left waits until closing (wait = operation_minutes - arrival).
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ferry_core::{SimRng, SimulationConfig};
//!
//! let config = SimulationConfig::default();
//! let result = ferry_sim::simulate(&config, SimRng::new(42))?;
//! println!("avg wait {} min, peak queue {}", result.avg_wait_time, result.max_queue_size);
//! ```

pub mod arrival;
pub mod engine;
pub mod metrics;
pub mod observer;
pub mod queue;


use ferry_core::{ConfigResult, RandomSource, SimulationConfig};

pub use arrival::{ArrivalGenerator, PEAK_SHARE};
pub use engine::{EngineState, QueueEngine, RunRecord};
pub use metrics::{
    DEFAULT_HISTOGRAM_BINS, QueueSample, SimulationResult, WaitHistogram, round_one_decimal,
};
pub use observer::{Disposition, NoopObserver, SimObserver};
pub use queue::{Origin, Vehicle, VehicleQueue};

/// Validate `config` and run it to completion.
///
/// Fails only with a configuration error, before any simulation work.
pub fn simulate<R: RandomSource>(config: &SimulationConfig, rng: R) -> ConfigResult<SimulationResult> {
    simulate_with_observer(config, rng, &mut NoopObserver)
}

/// Like [`simulate`] but reports progress to `observer`.
pub fn simulate_with_observer<R: RandomSource, O: SimObserver>(
    config:   &SimulationConfig,
    rng:      R,
    observer: &mut O,
) -> ConfigResult<SimulationResult> {
    let engine = QueueEngine::new(config, rng)?;
    Ok(SimulationResult::from_record(engine.run(observer)))
}
