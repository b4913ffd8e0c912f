use std::time::Duration;

/// Converts elapsed wall time into a count of fixed-interval ticks.
///
/// Leftover time below one interval carries over to the next call.
#[derive(Clone, Debug)]
pub struct Cadence {
    interval: Duration,
    carry: Duration,
}

impl Cadence {
    /// Cadence firing once per `interval`. A zero interval is bumped to 1ns.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_nanos(1)),
            carry: Duration::ZERO,
        }
    }

    /// Tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Feed `elapsed` wall time; returns how many ticks are now due.
    pub fn due(&mut self, elapsed: Duration) -> u64 {
        let total = self.carry.saturating_add(elapsed);
        let step = self.interval.as_nanos();
        let n = total.as_nanos() / step;
        let rem = total.as_nanos() % step;
        // rem < interval, which itself fits in a Duration.
        self.carry = Duration::from_nanos(u64::try_from(rem).unwrap_or(u64::MAX));
        u64::try_from(n).unwrap_or(u64::MAX)
    }

    /// Forget any partial interval.
    pub fn reset(&mut self) {
        self.carry = Duration::ZERO;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/cadence.rs"]
mod tests;
