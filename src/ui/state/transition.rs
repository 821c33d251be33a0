// SPDX-License-Identifier: MPL-2.0
//! Open/close lifecycle shared by every overlay.
//!
//! [`Transition`] turns an external "requested open" boolean into a
//! mount lifecycle with an exit grace period:
//!
//! ```text
//!            open=true                open=false
//!  Closed ──────────────▶ Rendered ──────────────▶ Closing
//!    ▲                       ▲      open=true         │
//!    │                       └────────────────────────┤
//!    └────────────────── grace timer fires ───────────┘
//! ```
//!
//! Reopening while `Closing` cancels the pending timer, so a fast
//! close→open sequence can never land in `Closed` while the host believes the
//! overlay is open.

use super::grace_period::GracePeriod;
use super::timer::Timer;
use std::time::Instant;

/// Render lifecycle of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// Not mounted.
    #[default]
    Closed,
    /// Mounted and interactive.
    Rendered,
    /// Mounted, playing its exit transition.
    Closing,
}

impl OverlayState {
    #[must_use]
    pub fn is_mounted(self) -> bool {
        !matches!(self, OverlayState::Closed)
    }
}

/// State changes reported back to the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// Closed → Rendered.
    Opened,
    /// Closing → Rendered; the pending close was cancelled.
    Reopened,
    /// Rendered → Closing; the grace timer is running.
    CloseStarted,
    /// Closing → Closed; the grace timer fired.
    Closed,
}

/// The transition timer primitive.
#[derive(Debug, Clone, Default)]
pub struct Transition {
    state: OverlayState,
    grace: GracePeriod,
    close_timer: Timer,
}

impl Transition {
    #[must_use]
    pub fn new(grace: GracePeriod) -> Self {
        Self {
            state: OverlayState::Closed,
            grace,
            close_timer: Timer::idle(),
        }
    }

    /// Applies the host's requested visibility.
    ///
    /// Redundant requests (open while mounted and not closing, close while
    /// closed or already closing) are no-ops and never create a timer.
    pub fn set_open(&mut self, open: bool, now: Instant) -> Option<TransitionEvent> {
        match (open, self.state) {
            (true, OverlayState::Closed) => {
                self.state = OverlayState::Rendered;
                Some(TransitionEvent::Opened)
            }
            (true, OverlayState::Closing) => {
                self.close_timer.cancel();
                self.state = OverlayState::Rendered;
                Some(TransitionEvent::Reopened)
            }
            (false, OverlayState::Rendered) => {
                self.state = OverlayState::Closing;
                self.close_timer.schedule(now, self.grace.as_duration());
                Some(TransitionEvent::CloseStarted)
            }
            (true, OverlayState::Rendered)
            | (false, OverlayState::Closed | OverlayState::Closing) => None,
        }
    }

    /// Fires the close timer if it is due.
    pub fn tick(&mut self, now: Instant) -> Option<TransitionEvent> {
        self.close_timer.fire(now)?;
        self.state = OverlayState::Closed;
        Some(TransitionEvent::Closed)
    }

    /// Unmounts immediately and cancels any pending timer.
    ///
    /// No [`TransitionEvent::Closed`] is produced: teardown means the owner
    /// itself is going away.
    pub fn teardown(&mut self) {
        self.close_timer.cancel();
        self.state = OverlayState::Closed;
    }

    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.state.is_mounted()
    }

    /// Whether the exit transition is playing (styling hook).
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.state == OverlayState::Closing
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.close_timer.deadline()
    }

    #[must_use]
    pub fn grace(&self) -> GracePeriod {
        self.grace
    }
}
