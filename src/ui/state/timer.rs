// SPDX-License-Identifier: MPL-2.0
//! One-shot timer slot.
//!
//! A [`Timer`] is a deadline owned by the state it belongs to. Nothing runs in
//! the background: the owner polls it from its `tick(now)` and the timer fires
//! at most once per schedule. Dropping or cancelling the owner's slot is the
//! whole of cancellation, so a timer can never outlive its owner.

use std::time::{Duration, Instant};

/// A cancellable one-shot deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// A timer with nothing scheduled.
    #[must_use]
    pub const fn idle() -> Self {
        Self { deadline: None }
    }

    /// Schedules the timer to fire `delay` after `now`, replacing any
    /// pending deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.schedule_at(now + delay);
    }

    /// Schedules the timer to fire at `deadline`, replacing any pending one.
    pub fn schedule_at(&mut self, deadline: Instant) {
        self.deadline = Some(deadline);
    }

    /// Cancels the pending deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns whether the timer would fire at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= now)
    }

    /// Fires the timer if it is due, returning the deadline it was scheduled
    /// for. The slot is idle afterwards.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        if self.is_due(now) {
            self.deadline.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timer_never_fires() {
        let mut timer = Timer::idle();
        assert!(!timer.is_pending());
        assert_eq!(timer.fire(Instant::now() + Duration::from_secs(60)), None);
    }

    #[test]
    fn fires_once_at_deadline() {
        let t0 = Instant::now();
        let mut timer = Timer::idle();
        timer.schedule(t0, Duration::from_millis(170));

        assert_eq!(timer.fire(t0 + Duration::from_millis(169)), None);
        assert_eq!(
            timer.fire(t0 + Duration::from_millis(170)),
            Some(t0 + Duration::from_millis(170))
        );
        assert_eq!(timer.fire(t0 + Duration::from_millis(500)), None);
    }

    #[test]
    fn cancelled_timer_does_not_fire() {
        let t0 = Instant::now();
        let mut timer = Timer::idle();
        timer.schedule(t0, Duration::ZERO);

        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.fire(t0 + Duration::from_secs(1)), None);
    }

    #[test]
    fn reschedule_replaces_previous_deadline() {
        let t0 = Instant::now();
        let mut timer = Timer::idle();
        timer.schedule(t0, Duration::from_millis(10));
        timer.schedule(t0, Duration::from_millis(100));

        assert!(!timer.is_due(t0 + Duration::from_millis(50)));
        assert_eq!(timer.deadline(), Some(t0 + Duration::from_millis(100)));
    }
}
