// Tick clock and deadlines for deferred clicks and debounce windows

use std::time::Duration;

/// Monotonic navigation time advanced by the host each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    now: Duration,
    tick: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, delta: Duration) {
        self.now += delta;
        self.tick += 1;
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }
}

/// A point in navigation time that only counts as reached on a tick after
/// the one it was armed on, even with a zero window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    due: Duration,
    armed_tick: u64,
}

impl Deadline {
    pub fn after(clock: &Clock, window: Duration) -> Self {
        Self {
            due: clock.now() + window,
            armed_tick: clock.tick(),
        }
    }

    pub fn is_due(&self, clock: &Clock) -> bool {
        clock.tick() > self.armed_tick && clock.now() >= self.due
    }

    pub fn remaining(&self, clock: &Clock) -> Duration {
        self.due.saturating_sub(clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_waits_for_window() {
        let mut clock = Clock::new();
        let deadline = Deadline::after(&clock, Duration::from_millis(100));
        clock.advance(Duration::from_millis(60));
        assert!(!deadline.is_due(&clock));
        assert_eq!(deadline.remaining(&clock), Duration::from_millis(40));
        clock.advance(Duration::from_millis(40));
        assert!(deadline.is_due(&clock));
    }

    #[test]
    fn test_zero_window_never_due_same_tick() {
        let mut clock = Clock::new();
        clock.advance(Duration::from_millis(16));
        let deadline = Deadline::after(&clock, Duration::ZERO);
        assert!(!deadline.is_due(&clock));
        clock.advance(Duration::ZERO);
        assert!(deadline.is_due(&clock));
    }
}
