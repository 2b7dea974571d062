//! # Delay Primitive
//!
//! The printer has no acknowledgment channel, so the driver paces itself by
//! blocking before each transport write. That block goes through [`Delay`]
//! so it can be swapped for a recorder in tests and dry runs.

use std::thread;
use std::time::Duration;

/// Blocks the calling thread for a given duration.
pub trait Delay {
    fn delay(&mut self, duration: Duration);
}

/// Real blocking sleep via [`thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepDelay;

impl Delay for SleepDelay {
    fn delay(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Records every requested delay without sleeping.
#[derive(Debug, Clone, Default)]
pub struct SimulatedDelay {
    requests: Vec<Duration>,
}

impl SimulatedDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every delay requested so far, in order (zero delays included).
    pub fn requests(&self) -> &[Duration] {
        &self.requests
    }

    /// Total time a real printer would have spent waiting.
    pub fn total(&self) -> Duration {
        self.requests.iter().sum()
    }
}

impl Delay for SimulatedDelay {
    fn delay(&mut self, duration: Duration) {
        self.requests.push(duration);
    }
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn delay(&mut self, duration: Duration) {
        (**self).delay(duration);
    }
}
