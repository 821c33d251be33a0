// SPDX-License-Identifier: MPL-2.0
//! Confirmation dialog.
//!
//! The confirm action may be asynchronous. The dialog hands out an
//! [`ActionTicket`] from [`ConfirmDialog::request_confirm`]; the host runs the
//! action and reports back with [`ConfirmDialog::settle`]. While a ticket is
//! outstanding both buttons are disabled and further confirms are ignored.

use super::{ActionTicket, DialogController, InFlight, Modal, ACTION_FAILED_MESSAGE};
use crate::ui::focus::ElementId;
use crate::ui::state::{GracePeriod, TransitionEvent};
use std::fmt::Display;

/// Title element id used for `aria-labelledby`-style association.
pub const TITLE_ID: &str = "confirm-title";

/// Label shown on the confirm button while the action runs.
pub const BUSY_LABEL: &str = "Working…";

/// Visual weight of the confirm button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Primary,
    /// Destructive action.
    Danger,
}

/// Content of a confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub title: String,
    pub description: Option<String>,
    pub confirm_text: String,
    pub cancel_text: String,
    pub tone: Tone,
}

impl ConfirmOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            confirm_text: "Confirm".to_string(),
            cancel_text: "Cancel".to_string(),
            tone: Tone::Primary,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    #[must_use]
    pub fn with_cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = text.into();
        self
    }

    #[must_use]
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

/// Result of settling a confirm run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The action succeeded; the host should close the dialog.
    Confirmed,
    /// The action failed; the dialog stays open showing a generic message.
    Failed,
    /// The ticket belongs to an earlier open cycle and was ignored.
    Stale,
}

#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    controller: DialogController,
    options: ConfirmOptions,
    in_flight: InFlight,
    error: Option<&'static str>,
}

impl ConfirmDialog {
    pub fn new(options: ConfirmOptions, root: ElementId, grace: GracePeriod) -> Self {
        Self {
            controller: DialogController::new(TITLE_ID, root, grace),
            options,
            in_flight: InFlight::default(),
            error: None,
        }
    }

    /// Replaces the content, e.g. before asking about a different entry.
    pub fn set_options(&mut self, options: ConfirmOptions) {
        self.options = options;
    }

    /// Starts the confirm action. Returns `None` if the dialog is not
    /// interactive or a previous confirm is still pending.
    pub fn request_confirm(&mut self) -> Option<ActionTicket> {
        if !self.controller.is_interactive() {
            return None;
        }
        let Some(ticket) = self.in_flight.begin() else {
            log::debug!("Confirm ignored: previous action still pending");
            return None;
        };
        self.error = None;
        Some(ticket)
    }

    /// Reports the end of a confirm run. The in-flight flag is cleared
    /// whatever the result.
    pub fn settle<E: Display>(
        &mut self,
        ticket: ActionTicket,
        result: Result<(), E>,
    ) -> ConfirmOutcome {
        if !self.in_flight.settle(ticket) {
            return ConfirmOutcome::Stale;
        }
        match result {
            Ok(()) => ConfirmOutcome::Confirmed,
            Err(err) => {
                log::warn!("Confirm action '{}' failed: {err}", self.options.title);
                self.error = Some(ACTION_FAILED_MESSAGE);
                ConfirmOutcome::Failed
            }
        }
    }

    /// Whether the cancel button may act. Returns `false` while the action is
    /// pending.
    #[must_use]
    pub fn request_cancel(&self) -> bool {
        self.controller.is_interactive() && !self.in_flight.is_active()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Confirm and cancel buttons are enabled.
    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        !self.in_flight.is_active()
    }

    #[must_use]
    pub fn confirm_label(&self) -> &str {
        if self.in_flight.is_active() {
            BUSY_LABEL
        } else {
            &self.options.confirm_text
        }
    }

    #[must_use]
    pub fn options(&self) -> &ConfirmOptions {
        &self.options
    }

    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }
}

impl Modal for ConfirmDialog {
    fn controller(&self) -> &DialogController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut DialogController {
        &mut self.controller
    }

    fn on_transition(&mut self, event: TransitionEvent) {
        match event {
            TransitionEvent::Opened | TransitionEvent::Closed => {
                self.in_flight.reset();
                self.error = None;
            }
            TransitionEvent::Reopened | TransitionEvent::CloseStarted => {}
        }
    }

    fn teardown(&mut self) {
        self.controller.teardown();
        self.in_flight.reset();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dialog::KeyOutcome;
    use crate::ui::focus::{Element, FocusHost, KeyPress, VirtualDocument};
    use std::time::Instant;

    fn open_dialog() -> (VirtualDocument, ConfirmDialog) {
        let mut doc = VirtualDocument::new();
        let root = doc.append(doc.body(), Element::container().with_tab_index(-1));
        doc.append(root, Element::button("Cancel"));
        doc.append(root, Element::button("Delete"));
        let mut dialog = ConfirmDialog::new(
            ConfirmOptions::new("Delete entry?")
                .with_confirm_text("Delete")
                .with_tone(Tone::Danger),
            root,
            GracePeriod::default(),
        );
        dialog.set_open(true, Instant::now(), &mut doc);
        (doc, dialog)
    }

    #[test]
    fn options_default_labels() {
        let options = ConfirmOptions::new("Sure?");
        assert_eq!(options.confirm_text, "Confirm");
        assert_eq!(options.cancel_text, "Cancel");
        assert_eq!(options.tone, Tone::Primary);
        assert!(options.description.is_none());
    }

    #[test]
    fn second_confirm_while_pending_is_ignored() {
        let (_doc, mut dialog) = open_dialog();

        let ticket = dialog.request_confirm().expect("first confirm runs");
        assert!(dialog.is_submitting());
        assert!(!dialog.controls_enabled());
        assert_eq!(dialog.confirm_label(), BUSY_LABEL);
        assert!(dialog.request_confirm().is_none());

        assert_eq!(
            dialog.settle::<String>(ticket, Ok(())),
            ConfirmOutcome::Confirmed
        );
        assert!(dialog.controls_enabled());
        assert_eq!(dialog.confirm_label(), "Delete");
    }

    #[test]
    fn failure_reenables_controls_and_shows_generic_message() {
        let (_doc, mut dialog) = open_dialog();
        let ticket = dialog.request_confirm().expect("confirm runs");

        let outcome = dialog.settle(ticket, Err("HTTP 500: stack trace..."));
        assert_eq!(outcome, ConfirmOutcome::Failed);
        assert!(dialog.controls_enabled());
        assert_eq!(dialog.error(), Some(ACTION_FAILED_MESSAGE));
        assert!(dialog.controller().is_mounted());

        // Retrying clears the message.
        dialog.request_confirm().expect("retry runs");
        assert_eq!(dialog.error(), None);
    }

    #[test]
    fn cancel_button_is_blocked_while_pending() {
        let (_doc, mut dialog) = open_dialog();
        assert!(dialog.request_cancel());

        let ticket = dialog.request_confirm().expect("confirm runs");
        assert!(!dialog.request_cancel());

        dialog.settle::<String>(ticket, Ok(()));
        assert!(dialog.request_cancel());
    }

    #[test]
    fn escape_and_backdrop_cancel_while_pending() {
        let (mut doc, mut dialog) = open_dialog();
        let _ticket = dialog.request_confirm().expect("confirm runs");

        assert!(dialog.backdrop_pressed());
        assert_eq!(
            dialog.handle_key(KeyPress::escape(), &mut doc),
            KeyOutcome::CancelRequested
        );
    }

    #[test]
    fn ticket_from_previous_open_cycle_is_stale() {
        let (mut doc, mut dialog) = open_dialog();
        let t0 = Instant::now();
        let ticket = dialog.request_confirm().expect("confirm runs");

        dialog.teardown();
        dialog.set_open(true, t0, &mut doc);
        assert!(!dialog.is_submitting());
        assert_eq!(
            dialog.settle::<String>(ticket, Ok(())),
            ConfirmOutcome::Stale
        );
    }

    #[test]
    fn confirm_requires_interactive_dialog() {
        let (mut doc, mut dialog) = open_dialog();
        dialog.set_open(false, Instant::now(), &mut doc);
        assert!(dialog.request_confirm().is_none());
        assert!(doc.active_element().is_some());
    }
}
