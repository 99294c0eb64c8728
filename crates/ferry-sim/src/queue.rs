//! Vehicles and the boarding queue.
//!
//! The queue is strictly FIFO by *insertion*.  Preloaded reservations are
//! inserted before the first minute even when their jittered arrival minute
//! is later than a walk-in's, so they board first.  Wait times are still
//! measured from each vehicle's own `arrival_minute`.

use std::collections::VecDeque;

use ferry_core::Minute;

/// How a vehicle entered the queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    Reservation,
    WalkIn,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Origin::Reservation => "reservation",
            Origin::WalkIn => "walk-in",
        })
    }
}

/// One queued vehicle.  Removed the instant it boards or is drained.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Vehicle {
    pub arrival_minute: Minute,
    pub origin:         Origin,
}

impl Vehicle {
    pub fn walk_in(arrival_minute: Minute) -> Self {
        Self { arrival_minute, origin: Origin::WalkIn }
    }

    pub fn reservation(arrival_minute: Minute) -> Self {
        Self { arrival_minute, origin: Origin::Reservation }
    }

    /// Minutes waited if the vehicle leaves the queue at `at`.  Never negative.
    #[inline]
    pub fn wait_until(&self, at: Minute) -> u32 {
        at.since(self.arrival_minute)
    }
}

/// Insertion-ordered FIFO of waiting vehicles.
#[derive(Clone, Debug, Default)]
pub struct VehicleQueue {
    inner: VecDeque<Vehicle>,
}

impl VehicleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, vehicle: Vehicle) {
        self.inner.push_back(vehicle);
    }

    /// Remove up to `n` vehicles from the front, in boarding order.
    pub fn take_front(&mut self, n: usize) -> impl Iterator<Item = Vehicle> + '_ {
        let n = n.min(self.inner.len());
        self.inner.drain(..n)
    }

    /// Remove every vehicle, front first.
    pub fn take_all(&mut self) -> impl Iterator<Item = Vehicle> + '_ {
        self.inner.drain(..)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn front(&self) -> Option<&Vehicle> {
        self.inner.front()
    }
}
