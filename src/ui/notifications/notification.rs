// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the queue entry, its identifier and kind, and the
//! request hosts submit to enqueue one.

use crate::ui::design_tokens::palette;
use crate::ui::state::Timer;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Identifier of a queue entry, `t_<unix millis>_<random hex>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationId(String);

impl NotificationId {
    /// Creates a fresh identifier from the wall clock and a random suffix.
    #[must_use]
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let suffix: u32 = rand::random();
        Self(format!("t_{millis}_{suffix:x}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind determines the default lifetime and the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Operation completed (green).
    #[default]
    Success,
    /// Failure the user should notice (red, stays longer).
    Error,
    /// Neutral information (blue).
    Info,
}

impl NotificationKind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            NotificationKind::Success => palette::SUCCESS_500,
            NotificationKind::Error => palette::ERROR_500,
            NotificationKind::Info => palette::INFO_500,
        }
    }

    /// Short glyph shown in front of the title.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "!",
            NotificationKind::Info => "i",
        }
    }
}

/// What a caller asks the queue to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub kind: NotificationKind,
    pub title: String,
    pub detail: Option<String>,
    /// Overrides the kind's default lifetime.
    pub ttl: Option<Duration>,
}

impl NotificationRequest {
    pub fn new(kind: NotificationKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            detail: None,
            ttl: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

/// One toast in the queue.
///
/// An entry owns exactly one timer: the auto-dismiss timer while it is
/// visible, the removal timer once it is leaving.
#[derive(Debug, Clone)]
pub struct NotificationEntry {
    id: NotificationId,
    kind: NotificationKind,
    title: String,
    detail: Option<String>,
    ttl: Duration,
    leaving: bool,
    timer: Timer,
}

impl NotificationEntry {
    pub(super) fn new(id: NotificationId, request: NotificationRequest, ttl: Duration) -> Self {
        Self {
            id,
            kind: request.kind,
            title: request.title,
            detail: request.detail,
            ttl,
            leaving: false,
            timer: Timer::idle(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Lifetime before auto-dismiss.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Dismissed and animating out; removal is scheduled.
    #[must_use]
    pub fn is_leaving(&self) -> bool {
        self.leaving
    }

    /// When this entry's pending timer fires, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub(super) fn timer_mut(&mut self) -> &mut Timer {
        &mut self.timer
    }

    /// Switches to the leaving phase: the auto-dismiss timer is replaced by
    /// the removal timer.
    pub(super) fn start_leaving(&mut self, remove_at: Instant) {
        self.leaving = true;
        self.timer.cancel();
        self.timer.schedule_at(remove_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_have_expected_shape() {
        let id = NotificationId::generate();
        let mut parts = id.as_str().splitn(3, '_');
        assert_eq!(parts.next(), Some("t"));
        assert!(parts
            .next()
            .is_some_and(|millis| millis.parse::<i64>().is_ok()));
        assert!(parts
            .next()
            .is_some_and(|hex| u32::from_str_radix(hex, 16).is_ok()));
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(NotificationId::generate(), NotificationId::generate());
    }

    #[test]
    fn kinds_have_distinct_colors() {
        assert_ne!(
            NotificationKind::Success.color(),
            NotificationKind::Error.color()
        );
        assert_ne!(NotificationKind::Info.color(), NotificationKind::Error.color());
    }

    #[test]
    fn request_builder() {
        let request = NotificationRequest::new(NotificationKind::Info, "Saved")
            .with_detail("72.4 kg")
            .with_ttl(Duration::ZERO);
        assert_eq!(request.detail.as_deref(), Some("72.4 kg"));
        assert_eq!(request.ttl, Some(Duration::ZERO));
    }

    #[test]
    fn leaving_replaces_timer() {
        let t0 = Instant::now();
        let request = NotificationRequest::new(NotificationKind::Success, "Done");
        let mut entry =
            NotificationEntry::new(NotificationId::generate(), request, Duration::from_secs(1));
        let ttl = entry.ttl();
        entry.timer_mut().schedule(t0, ttl);

        let remove_at = t0 + Duration::from_millis(170);
        entry.start_leaving(remove_at);
        assert!(entry.is_leaving());
        assert_eq!(entry.deadline(), Some(remove_at));
    }
}
