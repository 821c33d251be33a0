// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the overlay runtime. Constants are organized by category.
//!
//! # Categories
//!
//! - **Overlay**: Exit-transition grace period shared by dialogs and toasts
//! - **Notifications**: Queue capacity and per-kind time-to-live

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Default grace period between a close request and unmount (in milliseconds).
pub const DEFAULT_EXIT_GRACE_MS: u64 = 170;

/// Minimum exit grace period (in milliseconds). Zero disables the animation.
pub const MIN_EXIT_GRACE_MS: u64 = 0;

/// Maximum exit grace period (in milliseconds).
pub const MAX_EXIT_GRACE_MS: u64 = 2_000;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of notifications retained by the queue.
pub const DEFAULT_MAX_NOTIFICATIONS: usize = 5;

/// Minimum queue capacity.
pub const MIN_MAX_NOTIFICATIONS: usize = 1;

/// Maximum queue capacity.
pub const MAX_MAX_NOTIFICATIONS: usize = 20;

/// Default time-to-live for success notifications (in milliseconds).
pub const DEFAULT_SUCCESS_TTL_MS: u64 = 3_800;

/// Default time-to-live for info notifications (in milliseconds).
pub const DEFAULT_INFO_TTL_MS: u64 = 3_800;

/// Default time-to-live for error notifications (in milliseconds).
/// Errors stay longer so they can be read.
pub const DEFAULT_ERROR_TTL_MS: u64 = 5_200;

/// Upper bound for any configured time-to-live (in milliseconds).
pub const MAX_TTL_MS: u64 = 60_000;
