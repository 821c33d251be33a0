// SPDX-License-Identifier: MPL-2.0
//! Modal dialog lifecycle.
//!
//! Every modal in the application (confirmation, terms, authentication) runs
//! on one [`DialogController`]: the shared open/closing/unmount state machine
//! plus focus capture, focus trap and focus restore. The call sites only add
//! their own content and action handling through the [`Modal`] trait.
//!
//! # Components
//!
//! - [`DialogController`] - transition + focus containment for one modal
//! - [`confirm`] - confirmation dialog with an at-most-one in-flight action
//! - [`auth`] - login/signup dialog gated by field validation
//! - [`terms`] - read-only terms dialog
//! - [`view`] - Iced rendering of a dialog descriptor
//!
//! # Host contract
//!
//! The host owns `open`. It flips it on user intent and when a dialog reports
//! [`KeyOutcome::CancelRequested`] or a successful action. Time advances
//! through `tick(now)`; while [`Modal::next_deadline`] is `Some`, the host
//! must keep ticking.

pub mod auth;
pub mod confirm;
pub mod terms;
pub mod view;

pub use auth::{AuthDialog, AuthForm, AuthMode, AuthOutcome, AuthRequest, Field};
pub use confirm::{ConfirmDialog, ConfirmOptions, ConfirmOutcome, Tone};
pub use terms::{TermsDialog, TermsSection};

use crate::ui::focus::{self, ElementId, FocusHost, FocusMemory, Key, KeyPress};
use crate::ui::state::{GracePeriod, OverlayState, Transition, TransitionEvent};
use std::time::Instant;

/// Generic message shown when a dialog's action fails. Raw error details are
/// logged, never rendered.
pub const ACTION_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Render-ready snapshot of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogDescriptor<'a> {
    pub mounted: bool,
    pub closing: bool,
    pub title_id: &'a str,
}

/// What a key press meant to the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not for us; the host may process it normally.
    Ignored,
    /// Consumed; the host must suppress its default action.
    Handled,
    /// Escape was pressed: the host should run its cancel path (usually
    /// setting `open` to false). Also consumed.
    CancelRequested,
}

impl KeyOutcome {
    /// Whether the host should suppress the default action for the key.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

/// Identifies one run of a dialog's asynchronous action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionTicket(u64);

/// Re-entrancy guard for a dialog action: at most one run in flight.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    issued: u64,
    current: Option<ActionTicket>,
}

impl InFlight {
    /// Starts a run unless one is already pending.
    pub fn begin(&mut self) -> Option<ActionTicket> {
        if self.current.is_some() {
            return None;
        }
        self.issued += 1;
        let ticket = ActionTicket(self.issued);
        self.current = Some(ticket);
        Some(ticket)
    }

    /// Ends the run identified by `ticket`. Returns `false` for a ticket that
    /// is not the pending one (stale or foreign), leaving state untouched.
    pub fn settle(&mut self, ticket: ActionTicket) -> bool {
        if self.current == Some(ticket) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Forgets any pending run; its ticket becomes stale.
    pub fn reset(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

/// Transition, focus memory and focus trap for a single modal.
#[derive(Debug, Clone)]
pub struct DialogController {
    title_id: String,
    root: ElementId,
    transition: Transition,
    focus_memory: FocusMemory,
}

impl DialogController {
    /// Creates a closed dialog whose container is `root` in the focus host.
    pub fn new(title_id: impl Into<String>, root: ElementId, grace: GracePeriod) -> Self {
        Self {
            title_id: title_id.into(),
            root,
            transition: Transition::new(grace),
            focus_memory: FocusMemory::default(),
        }
    }

    /// Applies the host's `open` signal.
    ///
    /// On mount the previously focused element is remembered and focus moves
    /// to the first focusable control (or the root when there is none).
    pub fn set_open(
        &mut self,
        open: bool,
        now: Instant,
        host: &mut impl FocusHost,
    ) -> Option<TransitionEvent> {
        let event = self.transition.set_open(open, now)?;
        match event {
            TransitionEvent::Opened => {
                self.focus_memory.capture(host);
                let focused = focus::focus_first(host, self.root);
                log::debug!("Dialog '{}' opened, focus on {focused:?}", self.title_id);
            }
            TransitionEvent::CloseStarted => {
                log::debug!("Dialog '{}' closing", self.title_id);
            }
            TransitionEvent::Reopened | TransitionEvent::Closed => {}
        }
        Some(event)
    }

    /// Advances time; on full close, focus returns to where it was before the
    /// dialog opened if that element is still focusable.
    pub fn tick(&mut self, now: Instant, host: &mut impl FocusHost) -> Option<TransitionEvent> {
        let event = self.transition.tick(now)?;
        let restored = self.focus_memory.restore(host);
        log::debug!(
            "Dialog '{}' closed (focus restored: {restored})",
            self.title_id
        );
        Some(event)
    }

    /// Routes a key press while the dialog is interactive.
    ///
    /// Tab and Shift+Tab cycle through the dialog's focusable controls,
    /// recomputed on every press. Escape requests cancellation without
    /// changing state.
    pub fn handle_key(&mut self, key: KeyPress, host: &mut impl FocusHost) -> KeyOutcome {
        if !self.is_interactive() {
            return KeyOutcome::Ignored;
        }
        match key.key {
            Key::Escape => KeyOutcome::CancelRequested,
            Key::Tab => {
                focus::cycle(host, self.root, key.shift);
                KeyOutcome::Handled
            }
            Key::Enter | Key::Other => KeyOutcome::Ignored,
        }
    }

    /// A pointer press on the backdrop. Returns whether the host should
    /// cancel, which is only while the dialog is interactive.
    #[must_use]
    pub fn backdrop_pressed(&self) -> bool {
        self.is_interactive()
    }

    /// Unmounts immediately, cancelling any pending close timer. Focus is not
    /// restored.
    pub fn teardown(&mut self) {
        self.transition.teardown();
        self.focus_memory.clear();
    }

    #[must_use]
    pub fn descriptor(&self) -> DialogDescriptor<'_> {
        DialogDescriptor {
            mounted: self.transition.is_mounted(),
            closing: self.transition.is_closing(),
            title_id: &self.title_id,
        }
    }

    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.transition.state()
    }

    /// Mounted and not closing.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.transition.state() == OverlayState::Rendered
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.transition.is_mounted()
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.transition.is_closing()
    }

    #[must_use]
    pub fn root(&self) -> ElementId {
        self.root
    }

    #[must_use]
    pub fn title_id(&self) -> &str {
        &self.title_id
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.transition.next_deadline()
    }

    /// Element that will be refocused on close, if any.
    #[must_use]
    pub fn remembered_focus(&self) -> Option<ElementId> {
        self.focus_memory.get()
    }
}

/// Shared behavior of every modal, provided on top of its controller.
///
/// Implementors supply access to their [`DialogController`] and may react to
/// transitions. Escape and the backdrop always request cancellation while the
/// dialog is interactive; only a dialog's own cancel button is gated by its
/// in-flight action.
pub trait Modal {
    fn controller(&self) -> &DialogController;

    fn controller_mut(&mut self) -> &mut DialogController;

    /// Called after every state change of the underlying transition.
    fn on_transition(&mut self, _event: TransitionEvent) {}

    fn set_open(
        &mut self,
        open: bool,
        now: Instant,
        host: &mut impl FocusHost,
    ) -> Option<TransitionEvent> {
        let event = self.controller_mut().set_open(open, now, host)?;
        self.on_transition(event);
        Some(event)
    }

    fn tick(&mut self, now: Instant, host: &mut impl FocusHost) -> Option<TransitionEvent> {
        let event = self.controller_mut().tick(now, host)?;
        self.on_transition(event);
        Some(event)
    }

    fn handle_key(&mut self, key: KeyPress, host: &mut impl FocusHost) -> KeyOutcome {
        self.controller_mut().handle_key(key, host)
    }

    /// Whether the host should cancel after a backdrop press.
    fn backdrop_pressed(&self) -> bool {
        self.controller().backdrop_pressed()
    }

    fn teardown(&mut self) {
        self.controller_mut().teardown();
    }

    fn descriptor(&self) -> DialogDescriptor<'_> {
        self.controller().descriptor()
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.controller().next_deadline()
    }
}

impl Modal for DialogController {
    fn controller(&self) -> &DialogController {
        self
    }

    fn controller_mut(&mut self) -> &mut DialogController {
        self
    }
}
