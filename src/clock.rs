//! Wall-clock to tick conversion for the runner loop.
//!
//! The core counts its level timer in whole milliseconds of elapsed time.
//! [`FrameClock`] hands out exactly the milliseconds that passed since the
//! previous tick and carries the sub-millisecond rest into the next one.

use std::time::{Duration, Instant};

const MILLI: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    /// Instant up to which time has already been handed out.
    last: Instant,
}

impl FrameClock {
    pub fn new(start: Instant) -> Self {
        Self { last: start }
    }

    /// Time not yet handed out as of `now`.
    pub fn pending(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last)
    }

    /// Whole milliseconds elapsed since the previous call.
    ///
    /// The fraction of a millisecond stays pending for the next call.
    pub fn take_elapsed_ms(&mut self, now: Instant) -> u32 {
        let ms = self.pending(now).as_millis().min(u32::MAX as u128) as u32;
        self.last += MILLI * ms;
        ms
    }
}
