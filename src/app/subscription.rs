// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events are always routed: the update loop decides whether an open
//! dialog or the page gets them. The tick only runs while some timer is
//! pending, so an idle shell does not wake up.

use super::Message;
use crate::ui::focus::{Key, KeyPress};
use iced::{event, keyboard, time, Subscription};
use std::time::{Duration, Instant};

/// Tick period while timers are pending (~60 Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Maps Tab, Shift+Tab, Escape and Enter to [`Message::Key`].
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modifiers,
            ..
        }) => route_key(map_named_key(named)?, status)
            .map(|key| Message::Key(KeyPress::new(key, modifiers.shift()))),
        _ => None,
    })
}

/// Enter captured by a text input is already its `on_submit`.
fn route_key(key: Key, status: event::Status) -> Option<Key> {
    match (key, status) {
        (Key::Enter, event::Status::Captured) => None,
        _ => Some(key),
    }
}

fn map_named_key(named: keyboard::key::Named) -> Option<Key> {
    match named {
        keyboard::key::Named::Tab => Some(Key::Tab),
        keyboard::key::Named::Escape => Some(Key::Escape),
        keyboard::key::Named::Enter => Some(Key::Enter),
        _ => None,
    }
}

/// Creates a periodic tick for dialog exit transitions and toast timers.
pub fn create_tick_subscription(next_deadline: Option<Instant>) -> Subscription<Message> {
    if next_deadline.is_some() {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
