// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Renderer-independent building blocks shared by dialogs and notifications:
//! the exit grace period, one-shot timers and the open/close transition.

pub mod grace_period;
pub mod timer;
pub mod transition;

// Re-export commonly used types for convenience
pub use grace_period::GracePeriod;
pub use timer::Timer;
pub use transition::{OverlayState, Transition, TransitionEvent};
