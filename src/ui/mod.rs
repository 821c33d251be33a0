// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code with the Elm-style "state down,
//! messages up" pattern. State machines here never read the clock; callers
//! pass `now` and render from the resulting snapshots.
//!
//! # Overlay runtime
//!
//! - [`state`] - Timers, grace periods and the open/closing/unmounted transition
//! - [`focus`] - Focus host contract, focus memory and the Tab trap
//! - [`dialog`] - Modal lifecycle controller and the confirm/terms/auth dialogs
//! - [`notifications`] - Bounded toast queue with auto-dismiss
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod dialog;
pub mod focus;
pub mod notifications;
pub mod state;
pub mod styles;
