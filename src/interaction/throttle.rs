use std::time::{Duration, Instant};

pub const DEFAULT_THROTTLE_INTERVAL: Duration = Duration::from_millis(50);

/// Fixed-interval rate limiter driven by an explicit clock.
///
/// Changes arm at most one pending resolve; the host calls `poll` from its
/// timer or frame callback and resolves the accumulated work when it is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    interval: Duration,
    due_at: Option<Instant>,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_INTERVAL)
    }
}

impl Throttle {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            due_at: None,
        }
    }

    #[must_use]
    pub fn interval(self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.due_at.is_some()
    }

    #[must_use]
    pub fn due_at(self) -> Option<Instant> {
        self.due_at
    }

    /// Schedules a resolve at `now + interval` unless one is already pending.
    ///
    /// Returns `true` when a new resolve was scheduled.
    pub fn arm(&mut self, now: Instant) -> bool {
        if self.due_at.is_some() {
            return false;
        }
        self.due_at = Some(now + self.interval);
        true
    }

    /// Returns `true` (and clears the pending resolve) once it is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due_at {
            Some(due_at) if now >= due_at => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.due_at = None;
    }
}
