// SPDX-License-Identifier: MPL-2.0
//! Notification queue lifecycle.
//!
//! The queue keeps at most `capacity` entries, newest first. Each entry
//! auto-dismisses after its TTL; a dismissed entry stays visible with
//! `leaving` set for the removal grace period, then disappears. Timers are
//! plain deadlines advanced by [`NotificationQueue::tick`], so dropping an
//! entry (truncation, removal, teardown) drops its timer with it.

use super::notification::{NotificationEntry, NotificationId, NotificationKind, NotificationRequest};
use crate::config::{
    DEFAULT_ERROR_TTL_MS, DEFAULT_INFO_TTL_MS, DEFAULT_MAX_NOTIFICATIONS, DEFAULT_SUCCESS_TTL_MS,
};
use crate::ui::state::GracePeriod;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Advance timers to the given instant.
    Tick(Instant),
}

/// Tunables, normally derived from the user's config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueSettings {
    /// Entries kept at once; older ones are dropped.
    pub capacity: usize,
    /// How long a dismissed entry stays before removal.
    pub removal_grace: GracePeriod,
    pub success_ttl: Duration,
    pub info_ttl: Duration,
    pub error_ttl: Duration,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_MAX_NOTIFICATIONS,
            removal_grace: GracePeriod::default(),
            success_ttl: Duration::from_millis(DEFAULT_SUCCESS_TTL_MS),
            info_ttl: Duration::from_millis(DEFAULT_INFO_TTL_MS),
            error_ttl: Duration::from_millis(DEFAULT_ERROR_TTL_MS),
        }
    }
}

impl QueueSettings {
    /// Default lifetime for `kind`.
    #[must_use]
    pub fn ttl_for(&self, kind: NotificationKind) -> Duration {
        match kind {
            NotificationKind::Success => self.success_ttl,
            NotificationKind::Error => self.error_ttl,
            NotificationKind::Info => self.info_ttl,
        }
    }
}

/// Bounded, newest-first queue of toasts.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    entries: Vec<NotificationEntry>,
    settings: QueueSettings,
}

impl NotificationQueue {
    /// Creates an empty queue with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: QueueSettings) -> Self {
        Self {
            entries: Vec::new(),
            settings: QueueSettings {
                capacity: settings.capacity.max(1),
                ..settings
            },
        }
    }

    #[must_use]
    pub fn settings(&self) -> &QueueSettings {
        &self.settings
    }

    /// Adds a toast at the front and starts its auto-dismiss timer.
    ///
    /// Entries pushed past capacity are dropped from the back, together with
    /// their timers. The returned id may be ignored.
    pub fn push(&mut self, request: NotificationRequest, now: Instant) -> NotificationId {
        let id = self.fresh_id();
        let ttl = request.ttl.unwrap_or_else(|| self.settings.ttl_for(request.kind));

        let mut entry = NotificationEntry::new(id.clone(), request, ttl);
        entry.timer_mut().schedule(now, ttl);
        log::debug!("Notification {id} enqueued ({:?}, ttl {ttl:?})", entry.kind());
        self.entries.insert(0, entry);

        if self.entries.len() > self.settings.capacity {
            let dropped = self.entries.len() - self.settings.capacity;
            self.entries.truncate(self.settings.capacity);
            log::debug!("Notification queue full, dropped {dropped} oldest");
        }
        id
    }

    /// Positional form of [`push`](Self::push).
    pub fn enqueue(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        detail: Option<String>,
        ttl: Option<Duration>,
        now: Instant,
    ) -> NotificationId {
        self.push(
            NotificationRequest {
                kind,
                title: title.into(),
                detail,
                ttl,
            },
            now,
        )
    }

    pub fn success(
        &mut self,
        title: impl Into<String>,
        detail: Option<String>,
        now: Instant,
    ) -> NotificationId {
        self.enqueue(NotificationKind::Success, title, detail, None, now)
    }

    pub fn error(
        &mut self,
        title: impl Into<String>,
        detail: Option<String>,
        now: Instant,
    ) -> NotificationId {
        self.enqueue(NotificationKind::Error, title, detail, None, now)
    }

    pub fn info(
        &mut self,
        title: impl Into<String>,
        detail: Option<String>,
        now: Instant,
    ) -> NotificationId {
        self.enqueue(NotificationKind::Info, title, detail, None, now)
    }

    /// Starts the exit of `id`: marks it leaving, cancels its auto-dismiss
    /// timer and schedules removal after the grace period.
    ///
    /// Returns `false` (and does nothing) if the entry is gone or already
    /// leaving.
    pub fn dismiss(&mut self, id: &NotificationId, now: Instant) -> bool {
        let grace = self.settings.removal_grace.as_duration();
        match self.entries.iter_mut().find(|entry| entry.id() == id) {
            Some(entry) if !entry.is_leaving() => {
                entry.start_leaving(now + grace);
                log::debug!("Notification {id} leaving");
                true
            }
            _ => false,
        }
    }

    /// Fires every timer due at `now`, earliest deadline first.
    ///
    /// An auto-dismiss firing behaves like [`dismiss`](Self::dismiss) at its
    /// deadline, so a removal that is already due in the same tick fires too.
    /// Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let grace = self.settings.removal_grace.as_duration();
        let mut changed = false;

        while let Some(index) = self.earliest_due(now) {
            let entry = &mut self.entries[index];
            let Some(deadline) = entry.timer_mut().fire(now) else {
                break;
            };
            changed = true;

            if entry.is_leaving() {
                let removed = self.entries.remove(index);
                log::debug!("Notification {} removed", removed.id());
            } else {
                entry.start_leaving(deadline + grace);
                log::debug!("Notification {} expired", entry.id());
            }
        }
        changed
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id, now);
            }
            Message::Tick(at) => {
                self.tick(*at);
            }
        }
    }

    /// Drops every entry and its pending timer.
    pub fn teardown(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("Notification queue torn down with {} entries", self.len());
        }
        self.entries.clear();
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &NotificationEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<&NotificationEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest pending deadline. `None` means no tick is needed.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().filter_map(NotificationEntry::deadline).min()
    }

    fn earliest_due(&self, now: Instant) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.deadline().map(|deadline| (index, deadline)))
            .filter(|&(_, deadline)| deadline <= now)
            .min_by_key(|&(_, deadline)| deadline)
            .map(|(index, _)| index)
    }

    fn fresh_id(&self) -> NotificationId {
        loop {
            let id = NotificationId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn titles(queue: &NotificationQueue) -> Vec<&str> {
        queue.entries().map(NotificationEntry::title).collect()
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = NotificationQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.next_deadline(), None);
    }

    #[test]
    fn sixth_entry_drops_the_oldest() {
        let t0 = Instant::now();
        let mut queue = NotificationQueue::new();
        for i in 1..=5 {
            queue.success(format!("E{i}"), None, t0);
        }
        assert_eq!(titles(&queue), ["E5", "E4", "E3", "E2", "E1"]);

        queue.success("E6", None, t0);
        assert_eq!(titles(&queue), ["E6", "E5", "E4", "E3", "E2"]);
        assert_eq!(queue.len(), 5);
    }

    #[test]
    fn default_ttl_depends_on_kind() {
        let t0 = Instant::now();
        let mut queue = NotificationQueue::new();
        let ok = queue.success("Saved", None, t0);
        let info = queue.info("Heads up", None, t0);
        let err = queue.error("Failed", Some("try again".into()), t0);

        assert_eq!(queue.get(&ok).map(NotificationEntry::ttl), Some(ms(3800)));
        assert_eq!(queue.get(&info).map(NotificationEntry::ttl), Some(ms(3800)));
        assert_eq!(queue.get(&err).map(NotificationEntry::ttl), Some(ms(5200)));
        assert_eq!(queue.next_deadline(), Some(t0 + ms(3800)));
    }

    #[test]
    fn dismiss_marks_leaving_then_removes_after_grace() {
        let t0 = Instant::now();
        let mut queue = NotificationQueue::new();
        let id = queue.info("Hello", None, t0);

        assert!(queue.dismiss(&id, t0 + ms(100)));
        assert!(queue.get(&id).is_some_and(NotificationEntry::is_leaving));

        queue.tick(t0 + ms(269));
        assert!(queue.get(&id).is_some());
        queue.tick(t0 + ms(270));
        assert!(queue.get(&id).is_none());
    }

    #[test]
    fn dismissing_a_leaving_entry_is_a_no_op() {
        let t0 = Instant::now();
        let mut queue = NotificationQueue::new();
        let id = queue.info("Hello", None, t0);

        assert!(queue.dismiss(&id, t0));
        assert!(!queue.dismiss(&id, t0 + ms(100)));
        assert_eq!(queue.next_deadline(), Some(t0 + ms(170)));
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let t0 = Instant::now();
        let mut queue = NotificationQueue::new();
        let id = queue.info("Hello", None, t0);
        queue.dismiss(&id, t0);
        queue.tick(t0 + ms(170));

        assert!(!queue.dismiss(&id, t0 + ms(200)));
        assert!(queue.is_empty());
    }

    #[test]
    fn zero_ttl_is_removed_exactly_after_grace() {
        let t0 = Instant::now();
        let mut queue = NotificationQueue::new();
        let id = queue.push(
            NotificationRequest::new(NotificationKind::Info, "Flash").with_ttl(Duration::ZERO),
            t0,
        );
        assert!(!queue.get(&id).is_some_and(NotificationEntry::is_leaving));

        assert!(queue.tick(t0));
        assert!(queue.get(&id).is_some_and(NotificationEntry::is_leaving));

        assert!(!queue.tick(t0 + ms(169)));
        assert!(queue.get(&id).is_some());

        assert!(queue.tick(t0 + ms(170)));
        assert!(queue.get(&id).is_none());
    }

    #[test]
    fn late_tick_runs_expiry_and_removal_in_order() {
        let t0 = Instant::now();
        let mut queue = NotificationQueue::new();
        queue.success("A", None, t0);
        queue.error("B", None, t0);

        queue.tick(t0 + ms(4_000));
        assert_eq!(titles(&queue), ["B"]);
        assert!(!queue.entries().any(NotificationEntry::is_leaving));

        queue.tick(t0 + ms(10_000));
        assert!(queue.is_empty());
    }

    #[test]
    fn teardown_cancels_everything() {
        let t0 = Instant::now();
        let mut queue = NotificationQueue::new();
        let id = queue.success("A", None, t0);
        queue.dismiss(&id, t0);
        queue.info("B", None, t0);

        queue.teardown();
        assert!(queue.is_empty());
        assert_eq!(queue.next_deadline(), None);
        assert!(!queue.tick(t0 + ms(60_000)));
    }

    #[test]
    fn handle_message_routes_dismiss_and_tick() {
        let t0 = Instant::now();
        let mut queue = NotificationQueue::new();
        let id = queue.success("A", None, t0);

        queue.handle_message(&Message::Dismiss(id.clone()), t0);
        assert!(queue.get(&id).is_some_and(NotificationEntry::is_leaving));

        queue.handle_message(&Message::Tick(t0 + ms(170)), t0 + ms(170));
        assert!(queue.is_empty());
    }

    #[test]
    fn custom_capacity_and_grace() {
        let t0 = Instant::now();
        let mut queue = NotificationQueue::with_settings(QueueSettings {
            capacity: 2,
            removal_grace: GracePeriod::from_millis(0),
            ..QueueSettings::default()
        });
        queue.info("1", None, t0);
        queue.info("2", None, t0);
        let newest = queue.info("3", None, t0);
        assert_eq!(titles(&queue), ["3", "2"]);

        queue.dismiss(&newest, t0);
        queue.tick(t0);
        assert_eq!(titles(&queue), ["2"]);
    }
}
