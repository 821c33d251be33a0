// SPDX-License-Identifier: MPL-2.0
//! Explicit provider slots.
//!
//! Shared services (notification queue, session) are built once at startup
//! and stored in a [`Provider`]. A consumer wired up without its provider is a
//! programming error, so access fails fast with a message naming the missing
//! provider instead of silently producing a default.

/// A named slot that must be filled before it is read.
#[derive(Debug, Clone)]
pub struct Provider<T> {
    name: &'static str,
    value: Option<T>,
}

impl<T> Provider<T> {
    /// An empty slot; reading it panics until [`provide`](Self::provide) runs.
    #[must_use]
    pub const fn vacant(name: &'static str) -> Self {
        Self { name, value: None }
    }

    /// A slot filled with `value`.
    pub const fn new(name: &'static str, value: T) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    pub fn provide(&mut self, value: T) {
        self.value = Some(value);
    }

    #[must_use]
    pub fn is_provided(&self) -> bool {
        self.value.is_some()
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// # Panics
    ///
    /// Panics if nothing was provided.
    #[track_caller]
    pub fn get(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => missing(self.name),
        }
    }

    /// # Panics
    ///
    /// Panics if nothing was provided.
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut T {
        let name = self.name;
        match &mut self.value {
            Some(value) => value,
            None => missing(name),
        }
    }

    /// Non-panicking access.
    #[must_use]
    pub fn try_get(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

#[cold]
#[track_caller]
fn missing(name: &str) -> ! {
    panic!("{name} must be used within its provider")
}
