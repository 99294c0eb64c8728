//! The `QueueEngine` state machine and its minute loop.

use ferry_core::{ConfigResult, DepartureEvent, Minute, RandomSource, SimulationConfig};
use ferry_schedule::{DepartureSchedule, preload_reservations};
use tracing::debug;

use crate::observer::{Disposition, SimObserver};
use crate::{ArrivalGenerator, QueueSample, Vehicle, VehicleQueue};

// ── EngineState ───────────────────────────────────────────────────────────────

/// Lifecycle of one run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Built and validated; reservations not yet preloaded.
    NotStarted,
    /// Stepping through the operating window.
    Running,
    /// Residual queue removed; terminal.
    Drained,
}

// ── RunRecord ─────────────────────────────────────────────────────────────────

/// Raw output of a run, before aggregation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunRecord {
    /// One entry per vehicle, in the order vehicles left the queue.
    pub wait_times: Vec<u32>,
    /// Queue length at the end of every stepped minute.
    pub queue_series: Vec<QueueSample>,
    /// Reservation vehicles inserted before the first minute.
    pub preloaded: u64,
    /// Walk-in vehicles generated across all stepped minutes.
    pub walk_ins: u64,
    /// Vehicles removed by departures.
    pub boarded: u64,
    /// Vehicles force-removed at closing time.
    pub drained: u64,
    /// Walk-ins the arrival generator was sized for.
    pub walk_in_budget: f64,
}

// ── QueueEngine ───────────────────────────────────────────────────────────────

/// Discrete-time queue simulator.
///
/// Each stepped minute runs three phases in fixed order:
///
/// 1. **Arrivals**: sample walk-ins for the minute and enqueue them.
/// 2. **Boarding**: every departure at this minute takes up to its capacity
///    from the front of the queue, in schedule order.
/// 3. **Record**: append the queue length to the series.
///
/// The first step preloads confirmed reservations (smoothing runs only).
/// After the last minute, [`drain`][Self::drain] removes everyone still
/// waiting with `wait = operation_minutes - arrival_minute`.
///
/// The engine owns its random source; nothing outside the run can observe or
/// disturb the draw sequence.
pub struct QueueEngine<'c, R: RandomSource> {
    config:    &'c SimulationConfig,
    schedule:  DepartureSchedule,
    generator: ArrivalGenerator,
    rng:       R,
    state:     EngineState,
    queue:     VehicleQueue,
    /// The next minute to step.
    clock:     Minute,
    record:    RunRecord,
}

impl<'c, R: RandomSource> QueueEngine<'c, R> {
    /// Validate `config` and build an engine ready to step.
    ///
    /// This is the only fallible point: once built, a run always completes.
    pub fn new(config: &'c SimulationConfig, rng: R) -> ConfigResult<Self> {
        config.validate()?;

        let walk_in_budget = if config.use_reservation_smoothing {
            (config.avg_arrivals_per_day - config.total_reservations() as f64).max(0.0)
        } else {
            config.avg_arrivals_per_day
        };

        Ok(Self {
            config,
            schedule: DepartureSchedule::from_config(config),
            generator: ArrivalGenerator::for_config(config, walk_in_budget),
            rng,
            state: EngineState::NotStarted,
            queue: VehicleQueue::new(),
            clock: Minute::ZERO,
            record: RunRecord {
                walk_in_budget,
                queue_series: Vec::with_capacity(config.operation_minutes as usize),
                ..Default::default()
            },
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The next minute `step` will process.
    pub fn clock(&self) -> Minute {
        self.clock
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn schedule(&self) -> &DepartureSchedule {
        &self.schedule
    }

    /// The data recorded so far.
    pub fn record(&self) -> &RunRecord {
        &self.record
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Step every remaining minute, drain, and return the raw record.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> RunRecord {
        while self.step(observer) {}
        self.drain(observer);
        self.record
    }

    /// Advance exactly one minute.
    ///
    /// Returns `false` without doing anything once the window is exhausted or
    /// the engine has been drained.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> bool {
        match self.state {
            EngineState::Drained => return false,
            EngineState::NotStarted => self.start(observer),
            EngineState::Running => {}
        }
        if self.clock.0 >= self.config.operation_minutes {
            return false;
        }

        let minute = self.clock;

        // ── Phase 1: walk-in arrivals ─────────────────────────────────────
        let arrivals = self.generator.arrivals_at(minute, &mut self.rng);
        for _ in 0..arrivals {
            self.queue.push(Vehicle::walk_in(minute));
        }
        self.record.walk_ins += arrivals;

        // ── Phase 2: boarding ─────────────────────────────────────────────
        //
        // Explicit field borrows so the borrow checker sees disjoint access.
        let queue  = &mut self.queue;
        let record = &mut self.record;
        for departure in self.schedule.at(minute) {
            board(queue, record, departure, minute, observer);
        }

        // ── Phase 3: record occupancy ─────────────────────────────────────
        let size = self.queue.len() as u64;
        self.record.queue_series.push(QueueSample { minute: minute.0, size });
        observer.on_minute_end(minute, size, arrivals);

        self.clock = minute + 1;
        true
    }

    /// Force-remove every queued vehicle at closing time and end the run.
    ///
    /// Calling this before the window is exhausted abandons the remaining
    /// minutes.  Idempotent once drained.
    pub fn drain<O: SimObserver>(&mut self, observer: &mut O) {
        match self.state {
            EngineState::Drained => return,
            EngineState::NotStarted => self.start(observer),
            EngineState::Running => {}
        }

        let closing = Minute(self.config.operation_minutes);
        let mut drained = 0u64;
        for vehicle in self.queue.take_all() {
            let wait = vehicle.wait_until(closing);
            self.record.wait_times.push(wait);
            observer.on_vehicle_processed(&vehicle, closing, wait, Disposition::Drained);
            drained += 1;
        }
        self.record.drained = drained;
        self.state = EngineState::Drained;

        debug!(
            drained,
            boarded = self.record.boarded,
            total = self.record.wait_times.len(),
            "run drained"
        );
        observer.on_run_end(&self.record);
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// `NotStarted → Running`: preload reservations when smoothing is on.
    fn start<O: SimObserver>(&mut self, observer: &mut O) {
        if self.config.use_reservation_smoothing {
            let preload = preload_reservations(
                &self.config.reservation_histogram,
                self.config.operating_day(),
                &mut self.rng,
            );
            for &arrival in &preload.arrivals {
                self.queue.push(Vehicle::reservation(arrival));
            }
            self.record.preloaded = preload.total();
        }

        debug!(
            preloaded = self.record.preloaded,
            walk_in_budget = self.record.walk_in_budget,
            departures = self.schedule.len(),
            minutes = self.config.operation_minutes,
            "run started"
        );
        observer.on_start(self.record.preloaded, self.record.walk_in_budget);
        self.state = EngineState::Running;
    }
}

/// Board one departure from the front of the queue.
fn board<O: SimObserver>(
    queue:     &mut VehicleQueue,
    record:    &mut RunRecord,
    departure: &DepartureEvent,
    minute:    Minute,
    observer:  &mut O,
) {
    let mut boarded = 0u64;
    for vehicle in queue.take_front(departure.capacity as usize) {
        let wait = vehicle.wait_until(minute);
        record.wait_times.push(wait);
        observer.on_vehicle_processed(&vehicle, minute, wait, Disposition::Boarded);
        boarded += 1;
    }
    record.boarded += boarded;
    observer.on_boarding(minute, departure, boarded, queue.len() as u64);
}
