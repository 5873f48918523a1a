//! Frame clock for hosts driving the simulation from an animation callback.

use crate::float::Float;

/// Turns monotonic timestamps (milliseconds) into clamped step deltas (seconds).
///
/// `start` always resets the reference timestamp, so a restart never produces
/// a catch-up delta. `stop` is idempotent.
#[derive(Clone, Debug)]
pub struct FrameClock<F: Float> {
    max_dt: F,
    last_ms: Option<f64>,
}

impl<F: Float> FrameClock<F> {
    pub fn new(max_dt: F) -> Self {
        FrameClock { max_dt, last_ms: None }
    }

    pub fn start(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    pub fn stop(&mut self) {
        self.last_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.last_ms.is_some()
    }

    pub fn max_dt(&self) -> F {
        self.max_dt
    }

    /// Delta since the previous tick in seconds, clamped to `[0, max_dt]`.
    /// Returns `None` while stopped.
    pub fn tick(&mut self, now_ms: f64) -> Option<F> {
        let last = self.last_ms?;
        self.last_ms = Some(now_ms);
        Some(clamp_dt(F::from_f64((now_ms - last) / 1000.0), self.max_dt))
    }
}

/// Clamp a time delta into `[0, max_dt]`; non-finite deltas become zero.
pub fn clamp_dt<F: Float>(dt: F, max_dt: F) -> F {
    if !dt.is_finite() {
        return F::zero();
    }
    dt.clamp(F::zero(), max_dt)
}
