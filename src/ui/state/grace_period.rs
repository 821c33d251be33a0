// SPDX-License-Identifier: MPL-2.0
//! Exit-transition grace period domain type.
//!
//! This module provides a type-safe wrapper for the delay between a "close
//! requested" signal and the actual unmount/removal of an overlay.

use crate::config::{DEFAULT_EXIT_GRACE_MS, MAX_EXIT_GRACE_MS, MIN_EXIT_GRACE_MS};
use std::time::Duration;

/// Grace period in milliseconds reserved for an exit animation.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0–2000 ms).
///
/// # Example
///
/// ```
/// use weightlog::ui::state::GracePeriod;
///
/// let grace = GracePeriod::from_millis(170);
/// assert_eq!(grace.as_millis(), 170);
///
/// // Values outside range are clamped
/// let too_long = GracePeriod::from_millis(10_000);
/// assert_eq!(too_long.as_millis(), 2_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GracePeriod(u64);

impl GracePeriod {
    /// Creates a new grace period, clamping to valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(MIN_EXIT_GRACE_MS, MAX_EXIT_GRACE_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the grace period as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if overlays unmount on the next tick without animating.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for GracePeriod {
    fn default() -> Self {
        Self(DEFAULT_EXIT_GRACE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_millis_clamps_to_valid_range() {
        assert_eq!(GracePeriod::from_millis(5_000).as_millis(), MAX_EXIT_GRACE_MS);
        assert_eq!(GracePeriod::from_millis(0).as_millis(), MIN_EXIT_GRACE_MS);
    }

    #[test]
    fn default_matches_observed_animation_length() {
        assert_eq!(GracePeriod::default().as_millis(), 170);
    }

    #[test]
    fn as_duration_converts_correctly() {
        assert_eq!(
            GracePeriod::from_millis(170).as_duration(),
            Duration::from_millis(170)
        );
    }

    #[test]
    fn zero_is_instant() {
        assert!(GracePeriod::from_millis(0).is_instant());
        assert!(!GracePeriod::default().is_instant());
    }
}
