// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the dialog and toast lifecycles through the public API.

use std::time::{Duration, Instant};
use weightlog::ui::dialog::{
    AuthDialog, AuthMode, ConfirmDialog, ConfirmOptions, ConfirmOutcome, DialogController, Field,
    KeyOutcome, Modal,
};
use weightlog::ui::focus::{Element, ElementId, FocusHost, KeyPress, VirtualDocument};
use weightlog::ui::notifications::{NotificationKind, NotificationQueue, NotificationRequest};
use weightlog::ui::state::{GracePeriod, OverlayState, Transition};
use weightlog::validation;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Page with a trigger button and a hidden-until-opened dialog root holding
/// `buttons` controls.
struct Page {
    doc: VirtualDocument,
    trigger: ElementId,
    root: ElementId,
    buttons: Vec<ElementId>,
}

fn page(buttons: usize) -> Page {
    let mut doc = VirtualDocument::new();
    let body = doc.body();
    let trigger = doc.append(body, Element::button("Open"));
    let root = doc.append(body, Element::container().with_tab_index(-1));
    let buttons = (0..buttons)
        .map(|i| doc.append(root, Element::button(format!("Action {i}"))))
        .collect();
    doc.focus(trigger);
    Page {
        doc,
        trigger,
        root,
        buttons,
    }
}

mod transition {
    use super::*;

    #[test]
    fn fast_reopen_never_lands_closed() {
        let t0 = Instant::now();
        let mut transition = Transition::new(GracePeriod::default());

        transition.set_open(true, t0);
        transition.set_open(false, t0 + ms(10));
        transition.set_open(true, t0 + ms(20));

        for step in [100, 170, 190, 500, 5_000] {
            assert!(transition.tick(t0 + ms(step)).is_none());
            assert_eq!(transition.state(), OverlayState::Rendered);
        }
    }

    #[test]
    fn close_unmounts_exactly_at_grace() {
        let t0 = Instant::now();
        let mut transition = Transition::new(GracePeriod::from_millis(170));
        transition.set_open(true, t0);
        transition.set_open(false, t0);

        assert!(transition.tick(t0 + ms(169)).is_none());
        assert!(transition.is_mounted());
        assert!(transition.tick(t0 + ms(170)).is_some());
        assert!(!transition.is_mounted());
    }
}

mod dialog {
    use super::*;

    #[test]
    fn tab_trap_wraps_for_every_set_size() {
        for size in 1..=4 {
            let mut page = page(size);
            let t0 = Instant::now();
            let mut dialog = DialogController::new("title", page.root, GracePeriod::default());
            page.doc.set_display_none(page.root, false);
            dialog.set_open(true, t0, &mut page.doc);

            let first = page.buttons[0];
            let last = page.buttons[size - 1];
            assert_eq!(page.doc.active_element(), Some(first));

            page.doc.focus(last);
            assert_eq!(
                dialog.handle_key(KeyPress::tab(), &mut page.doc),
                KeyOutcome::Handled
            );
            assert_eq!(page.doc.active_element(), Some(first));

            dialog.handle_key(KeyPress::shift_tab(), &mut page.doc);
            assert_eq!(page.doc.active_element(), Some(last));
        }
    }

    #[test]
    fn full_close_restores_trigger_focus() {
        let mut page = page(2);
        let t0 = Instant::now();
        let mut dialog = DialogController::new("title", page.root, GracePeriod::default());
        page.doc.set_display_none(page.root, false);

        dialog.set_open(true, t0, &mut page.doc);
        assert_eq!(dialog.remembered_focus(), Some(page.trigger));

        dialog.set_open(false, t0 + ms(50), &mut page.doc);
        dialog.tick(t0 + ms(100), &mut page.doc);
        assert_ne!(page.doc.active_element(), Some(page.trigger));

        dialog.tick(t0 + ms(220), &mut page.doc);
        assert_eq!(page.doc.active_element(), Some(page.trigger));
        assert_eq!(dialog.remembered_focus(), None);
    }

    #[test]
    fn detached_trigger_is_not_refocused() {
        let mut page = page(1);
        let t0 = Instant::now();
        let mut dialog = DialogController::new("title", page.root, GracePeriod::default());
        page.doc.set_display_none(page.root, false);

        dialog.set_open(true, t0, &mut page.doc);
        page.doc.detach(page.trigger);
        dialog.set_open(false, t0, &mut page.doc);
        dialog.tick(t0 + ms(500), &mut page.doc);

        assert_ne!(page.doc.active_element(), Some(page.trigger));
    }

    #[test]
    fn pending_confirm_runs_once_and_reenables_after_failure() {
        let mut page = page(2);
        let t0 = Instant::now();
        let mut dialog = ConfirmDialog::new(
            ConfirmOptions::new("Delete?"),
            page.root,
            GracePeriod::default(),
        );
        page.doc.set_display_none(page.root, false);
        dialog.set_open(true, t0, &mut page.doc);

        let mut runs = 0;
        let mut tickets = Vec::new();
        for _ in 0..3 {
            if let Some(ticket) = dialog.request_confirm() {
                runs += 1;
                tickets.push(ticket);
            }
        }
        assert_eq!(runs, 1);
        assert!(!dialog.controls_enabled());
        assert!(!dialog.request_cancel());
        assert_eq!(
            dialog.handle_key(KeyPress::escape(), &mut page.doc),
            KeyOutcome::CancelRequested
        );

        let outcome = dialog.settle(tickets[0], Err("boom"));
        assert_eq!(outcome, ConfirmOutcome::Failed);
        assert!(dialog.controls_enabled());
        assert!(dialog.request_confirm().is_some());
    }

    #[test]
    fn auth_password_messages_and_submit_gate() {
        assert_eq!(
            validation::password_message("abc"),
            Some(validation::PASSWORD_TOO_SHORT)
        );
        assert_eq!(
            validation::password_message("abcdefgh"),
            Some(validation::PASSWORD_WEAK)
        );
        assert_eq!(validation::password_message("Abcdef1!"), None);

        let mut page = page(0);
        let t0 = Instant::now();
        let mut dialog = AuthDialog::new(AuthMode::Login, page.root, GracePeriod::default());
        page.doc.set_display_none(page.root, false);
        dialog.set_open(true, t0, &mut page.doc);

        dialog.form_mut().set(Field::Password, "Abcdef1!");
        assert!(!dialog.can_submit());
        dialog.form_mut().set(Field::Email, "me@example.com");
        assert!(dialog.can_submit());
    }
}

mod notifications {
    use super::*;

    #[test]
    fn sixth_entry_evicts_oldest() {
        let t0 = Instant::now();
        let mut queue = NotificationQueue::new();
        let ids: Vec<_> = (1..=5)
            .map(|i| queue.info(format!("E{i}"), None, t0))
            .collect();

        let newest = queue.push(NotificationRequest::new(NotificationKind::Error, "E6"), t0);

        let titles: Vec<_> = queue.entries().map(|entry| entry.title()).collect();
        assert_eq!(titles, ["E6", "E5", "E4", "E3", "E2"]);
        assert_eq!(queue.entries().next().map(|e| e.id()), Some(&newest));
        assert!(queue.get(&ids[0]).is_none());
    }

    #[test]
    fn second_dismiss_changes_nothing() {
        let t0 = Instant::now();
        let mut queue = NotificationQueue::new();
        let id = queue.success("Saved", None, t0);

        assert!(queue.dismiss(&id, t0));
        let deadline = queue.next_deadline();
        assert!(!queue.dismiss(&id, t0 + ms(100)));
        assert_eq!(queue.next_deadline(), deadline);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn zero_ttl_is_removed_after_exactly_the_grace() {
        let t0 = Instant::now();
        let mut queue = NotificationQueue::new();
        let id = queue.push(
            NotificationRequest::new(NotificationKind::Info, "Flash").with_ttl(Duration::ZERO),
            t0,
        );

        queue.tick(t0);
        assert!(queue.get(&id).is_some_and(|entry| entry.is_leaving()));

        queue.tick(t0 + ms(169));
        assert_eq!(queue.len(), 1);

        queue.tick(t0 + ms(170));
        assert!(queue.is_empty());
    }
}
