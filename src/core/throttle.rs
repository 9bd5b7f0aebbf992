//! Rate-limited publication of the raw pull distance.
//!
//! Every change re-arms a single 16 ms timer; only when it fires does the
//! render surface see the current raw value.  A burst of changes inside one
//! window therefore produces one publication, and the last change is never
//! lost because the timer is re-armed rather than dropped.

use std::time::Duration;

use super::timer::Timer;

/// ~60 Hz.
pub const THROTTLE_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Default)]
pub struct ThrottledPublisher {
    timer: Timer,
    published: f64,
    publications: u64,
}

impl ThrottledPublisher {
    /// The raw value changed at `now`; (re)schedule publication.
    pub fn schedule(&mut self, now: Duration) {
        self.timer.arm(now, THROTTLE_INTERVAL);
    }

    /// Publish `raw` if the timer is due.  Returns `true` if it fired.
    pub fn fire_if_due(&mut self, now: Duration, raw: f64) -> bool {
        if self.timer.take_due(now).is_none() {
            return false;
        }
        self.published = raw;
        self.publications += 1;
        true
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.timer.deadline()
    }

    /// Last published distance.
    pub fn value(&self) -> f64 {
        self.published
    }

    /// Total publications so far.
    pub fn publications(&self) -> u64 {
        self.publications
    }
}
