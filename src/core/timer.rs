//! Cancellable one-shot timers with explicit handles.
//!
//! Timestamps are `Duration`s since an epoch the host picks; nothing here
//! reads a clock.  A [`Timer`] holds at most one pending deadline, and arming
//! it always replaces (cancels) whatever it held, so a slot can never have two
//! callbacks in flight.

use std::time::Duration;

/// Identifies one arming of a [`Timer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    handle: TimerHandle,
    deadline: Duration,
}

#[derive(Debug, Default)]
pub struct Timer {
    pending: Option<Pending>,
    armed_count: u64,
}

impl Timer {
    /// Cancel any pending deadline and arm a new one at `now + delay`.
    pub fn arm(&mut self, now: Duration, delay: Duration) -> TimerHandle {
        self.armed_count += 1;
        let handle = TimerHandle(self.armed_count);
        self.pending = Some(Pending {
            handle,
            deadline: now + delay,
        });
        handle
    }

    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.pending.take().map(|p| p.handle)
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.pending.map(|p| p.deadline)
    }

    /// Disarm and return the handle if the deadline has been reached.
    pub fn take_due(&mut self, now: Duration) -> Option<TimerHandle> {
        match self.pending {
            Some(p) if p.deadline <= now => {
                self.pending = None;
                Some(p.handle)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_once_at_deadline() {
        let mut t = Timer::default();
        let h = t.arm(ms(100), ms(16));
        assert_eq!(t.deadline(), Some(ms(116)));
        assert_eq!(t.take_due(ms(115)), None);
        assert_eq!(t.take_due(ms(116)), Some(h));
        assert_eq!(t.take_due(ms(200)), None);
        assert_eq!(t.deadline(), None);
    }

    #[test]
    fn rearming_replaces_pending_deadline() {
        let mut t = Timer::default();
        let first = t.arm(ms(0), ms(120));
        let second = t.arm(ms(50), ms(120));
        assert_ne!(first, second);
        assert_eq!(t.take_due(ms(120)), None);
        assert_eq!(t.take_due(ms(170)), Some(second));
    }

    #[test]
    fn cancel_returns_handle_and_disarms() {
        let mut t = Timer::default();
        let h = t.arm(ms(0), ms(10));
        assert_eq!(t.cancel(), Some(h));
        assert_eq!(t.cancel(), None);
        assert_eq!(t.take_due(ms(1_000)), None);
    }
}
