// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! Non-blocking feedback in the toast/snackbar style: entries appear newest
//! first, expire on their own and animate out before they are removed.
//!
//! # Components
//!
//! - [`notification`] - `NotificationEntry`, its id and kind
//! - [`manager`] - `NotificationQueue`: capacity, TTL and removal timers
//! - [`toast`] - Toast widget component for rendering entries
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use weightlog::ui::notifications::NotificationQueue;
//!
//! let t0 = Instant::now();
//! let mut queue = NotificationQueue::new();
//! let id = queue.success("Entry saved", None, t0);
//!
//! queue.dismiss(&id, t0);
//! assert!(queue.get(&id).is_some_and(|entry| entry.is_leaving()));
//!
//! queue.tick(t0 + Duration::from_millis(170));
//! assert!(queue.is_empty());
//! ```
//!
//! # Design Considerations
//!
//! - Lifetime: 3.8s for success/info, 5.2s for errors, overridable per toast
//! - At most 5 entries; the oldest is dropped when a sixth arrives
//! - Position: bottom-right corner

pub mod manager;
pub mod notification;
mod toast;

pub use manager::{Message as NotificationMessage, NotificationQueue, QueueSettings};
pub use notification::{NotificationEntry, NotificationId, NotificationKind, NotificationRequest};
pub use toast::Toast;
