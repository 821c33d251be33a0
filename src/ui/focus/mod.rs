// SPDX-License-Identifier: MPL-2.0
//! Keyboard focus containment for modal overlays.
//!
//! The dialog controller never touches a concrete widget tree. It talks to a
//! [`FocusHost`], which answers "what is focused", "what can take focus
//! inside this root" and performs focus moves. [`VirtualDocument`] is an
//! in-memory host with browser-like rules; renderers provide their own.

mod document;

pub use document::{Element, ElementKind, VirtualDocument};

/// Opaque handle to a focusable (or container) element owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// The environment's global focus state.
pub trait FocusHost {
    /// Element currently holding input focus, if any.
    fn active_element(&self) -> Option<ElementId>;

    /// Moves focus to `id`. Returns `false` if the element cannot take focus.
    fn focus(&mut self, id: ElementId) -> bool;

    /// Whether `id` is still attached and may receive focus.
    fn can_focus(&self, id: ElementId) -> bool;

    /// Tabbable descendants of `root` in traversal order: interactive, not
    /// disabled, not hidden, not removed from the tab order.
    fn focusable_within(&self, root: ElementId) -> Vec<ElementId>;
}

/// Keys the focus trap cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Escape,
    Enter,
    Other,
}

/// A key press with the only modifier that matters here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    #[must_use]
    pub const fn new(key: Key, shift: bool) -> Self {
        Self { key, shift }
    }

    #[must_use]
    pub const fn tab() -> Self {
        Self::new(Key::Tab, false)
    }

    #[must_use]
    pub const fn shift_tab() -> Self {
        Self::new(Key::Tab, true)
    }

    #[must_use]
    pub const fn escape() -> Self {
        Self::new(Key::Escape, false)
    }
}

/// The element that had focus before a dialog opened.
///
/// Filled once when the dialog mounts and consumed exactly once when it has
/// fully closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusMemory(Option<ElementId>);

impl FocusMemory {
    /// Records the currently focused element.
    pub fn capture(&mut self, host: &impl FocusHost) {
        self.0 = host.active_element();
    }

    /// Refocuses the remembered element if it is still a valid target, then
    /// forgets it. Returns whether focus was restored.
    pub fn restore(&mut self, host: &mut impl FocusHost) -> bool {
        match self.0.take() {
            Some(id) if host.can_focus(id) => host.focus(id),
            _ => false,
        }
    }

    /// Forgets the remembered element without refocusing it.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    #[must_use]
    pub fn get(&self) -> Option<ElementId> {
        self.0
    }
}

/// Focuses the first tabbable element inside `root`, or `root` itself when
/// there is none. Returns the element that received focus.
pub fn focus_first(host: &mut impl FocusHost, root: ElementId) -> ElementId {
    let target = host
        .focusable_within(root)
        .first()
        .copied()
        .unwrap_or(root);
    host.focus(target);
    target
}

/// Moves focus one step through the tabbable set of `root`, wrapping at both
/// ends. The set is recomputed on every call.
///
/// Focus outside the set (on the root, or escaped elsewhere) enters at the
/// first element going forward and at the last going backward. An empty set
/// pins focus on the root.
pub fn cycle(host: &mut impl FocusHost, root: ElementId, backwards: bool) -> ElementId {
    let focusables = host.focusable_within(root);
    let (Some(&first), Some(&last)) = (focusables.first(), focusables.last()) else {
        host.focus(root);
        return root;
    };

    let position = host
        .active_element()
        .and_then(|active| focusables.iter().position(|&id| id == active));

    let target = match (position, backwards) {
        (Some(index), false) if index + 1 < focusables.len() => focusables[index + 1],
        (_, false) => first,
        (Some(index), true) if index > 0 => focusables[index - 1],
        (_, true) => last,
    };

    host.focus(target);
    target
}
