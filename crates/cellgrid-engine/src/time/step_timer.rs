use std::time::{Duration, Instant};

/// Fixed-interval timer polled from the event loop.
///
/// Behaves like a repeating interval timer: it fires once per elapsed
/// `interval`. After a stall longer than one interval (debugger pause, window
/// minimized) the missed firings collapse into a single one and the schedule is
/// re-anchored at the current instant, so the caller never receives a burst.
#[derive(Debug, Clone)]
pub struct StepTimer {
    interval: Duration,
    next: Instant,
    fired: u64,
}

impl StepTimer {
    /// Arms a timer whose first firing is one `interval` after `now`.
    ///
    /// `interval` must be non-zero.
    pub fn new(interval: Duration, now: Instant) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            interval,
            next: now + interval,
            fired: 0,
        }
    }

    /// Instant at which the next firing is due.
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Total number of firings reported so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Returns `true` if the timer fired since the previous poll.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }

        let late = now.saturating_duration_since(self.next);
        self.next = if late >= self.interval {
            now + self.interval
        } else {
            self.next + self.interval
        };

        self.fired = self.fired.wrapping_add(1);
        true
    }
}
