use std::time::Duration;

use crate::constants::TICKS_PER_SECOND;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// # Scheduler
/// Turns wall-clock time handed over by the host into whole 60Hz ticks.
///
/// Elapsed time is accumulated as nanoseconds multiplied by the tick rate, so a
/// period is exactly one second's worth of nanoseconds and no rounding error
/// builds up however the host slices its calls. Pending ticks are always
/// drained, never dropped, so a long pause is caught up on the next call.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    accumulator: u128,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler { accumulator: 0 }
    }

    /// Adds time that passed since the previous call
    ///
    /// # Arguments
    /// * `elapsed` wall-clock time as measured by the host
    pub fn accumulate(&mut self, elapsed: Duration) {
        self.accumulator += elapsed.as_nanos() * u128::from(TICKS_PER_SECOND);
    }

    /// Consumes one period if enough time has accumulated for it
    pub fn take_tick(&mut self) -> bool {
        if self.accumulator >= NANOS_PER_SECOND {
            self.accumulator -= NANOS_PER_SECOND;
            true
        } else {
            false
        }
    }

    /// Forgets any accumulated time
    pub fn reset(&mut self) {
        self.accumulator = 0;
    }

    /// Time accumulated towards the next tick
    #[cfg(test)]
    pub fn pending(&self) -> Duration {
        let nanos = self.accumulator / u128::from(TICKS_PER_SECOND);
        Duration::from_nanos(nanos as u64)
    }
}
