// SPDX-License-Identifier: MPL-2.0
//! Update loop: routes messages into dialogs, the toast queue and the session.

use super::controls::{self, Control};
use super::{App, DialogKind, Message, WeightEntry};
use crate::error::AuthError;
use crate::session::{AuthService, AuthUser};
use crate::ui::dialog::{
    ActionTicket, AuthMode, AuthOutcome, ConfirmOptions, ConfirmOutcome, Field, KeyOutcome, Modal,
    Tone,
};
use crate::ui::focus::{self, ElementId, Key, KeyPress};
use chrono::Local;
use iced::widget::operation;
use iced::Task;
use std::time::{Duration, Instant};

/// Simulated latency of the delete request.
const DELETE_LATENCY: Duration = Duration::from_millis(450);

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Pressed(control) => {
            if !reachable(app, control) {
                log::debug!("{control:?} is behind the open dialog");
                return Task::none();
            }
            let before = app.controls.focused();
            app.controls.focus(control);
            note_blur(app, before);
            let task = press(app, control);
            Task::batch([focus_widget(app, before), task])
        }
        Message::Key(key) => handle_key(app, key),
        Message::BackdropPressed => {
            if let Some(kind) = app.mounted_dialog() {
                let cancel = match kind {
                    DialogKind::Confirm => app.confirm.backdrop_pressed(),
                    DialogKind::Terms => app.terms.backdrop_pressed(),
                    DialogKind::Auth => app.auth.backdrop_pressed(),
                };
                if cancel {
                    close(app, kind, Instant::now());
                }
            }
            Task::none()
        }
        Message::Tick(now) => {
            tick(app, now);
            Task::none()
        }
        Message::Notification(message) => {
            app.notifications
                .get_mut()
                .handle_message(&message, Instant::now());
            Task::none()
        }
        Message::AuthInput(field, value) => {
            let control = match field {
                Field::Email => Control::AuthEmail,
                Field::Password => Control::AuthPassword,
                Field::ConfirmPassword => Control::AuthConfirmPassword,
            };
            let before = app.controls.focused();
            app.controls.focus(control);
            note_blur(app, before);
            app.auth.form_mut().set(field, value);
            Task::none()
        }
        Message::AuthRememberToggled(remember) => {
            app.controls.focus(Control::AuthRemember);
            app.auth.form_mut().set_remember(remember);
            Task::none()
        }
        Message::DeleteSettled(ticket, result) => {
            delete_settled(app, ticket, result);
            Task::none()
        }
        Message::AuthSettled(ticket, result) => {
            auth_settled(app, ticket, result);
            Task::none()
        }
        Message::SessionChecked(result) => {
            app.session.resolve(result);
            Task::none()
        }
        Message::LoggedOut(result) => {
            let now = Instant::now();
            match result {
                Ok(()) => {
                    app.session.signed_out();
                    app.notifications
                        .get_mut()
                        .info("Logged out", None, now);
                }
                Err(err) => {
                    log::warn!("Logout failed: {err}");
                    app.notifications.get_mut().error(
                        "Could not log out",
                        Some("Please try again.".into()),
                        now,
                    );
                }
            }
            Task::none()
        }
    }
}

fn handle_key(app: &mut App, key: KeyPress) -> Task<Message> {
    let before = app.controls.focused();
    let task = match app.mounted_dialog() {
        Some(kind) => {
            let doc = app.controls.doc_mut();
            let outcome = match kind {
                DialogKind::Confirm => app.confirm.handle_key(key, doc),
                DialogKind::Terms => app.terms.handle_key(key, doc),
                DialogKind::Auth => app.auth.handle_key(key, doc),
            };
            match outcome {
                KeyOutcome::CancelRequested => {
                    close(app, kind, Instant::now());
                    Task::none()
                }
                KeyOutcome::Ignored if key.key == Key::Enter && is_interactive(app, kind) => {
                    activate_focused(app)
                }
                KeyOutcome::Ignored | KeyOutcome::Handled => Task::none(),
            }
        }
        None => match key.key {
            Key::Tab => {
                let doc = app.controls.doc_mut();
                let body = doc.body();
                focus::cycle(doc, body, key.shift);
                Task::none()
            }
            Key::Enter => activate_focused(app),
            Key::Escape | Key::Other => Task::none(),
        },
    };
    note_blur(app, before);
    Task::batch([focus_widget(app, before), task])
}

/// Moves iced's keyboard focus along with the mirrored focus.
fn focus_widget(app: &App, before: Option<Control>) -> Task<Message> {
    controls::widget_focus(before, app.controls.focused()).map_or_else(Task::none, operation::focus)
}

fn root_of(app: &App, kind: DialogKind) -> ElementId {
    let roots = app.controls.roots();
    match kind {
        DialogKind::Confirm => roots.confirm,
        DialogKind::Terms => roots.terms,
        DialogKind::Auth => roots.auth,
    }
}

/// Page controls are inert while a dialog is mounted.
fn reachable(app: &App, control: Control) -> bool {
    match app.mounted_dialog() {
        Some(kind) => app
            .controls
            .doc()
            .contains(root_of(app, kind), app.controls.id(control)),
        None => true,
    }
}

fn is_interactive(app: &App, kind: DialogKind) -> bool {
    match kind {
        DialogKind::Confirm => app.confirm.controller().is_interactive(),
        DialogKind::Terms => app.terms.controller().is_interactive(),
        DialogKind::Auth => app.auth.controller().is_interactive(),
    }
}

/// Enter on the focused control. Enter inside a text field submits the form.
fn activate_focused(app: &mut App) -> Task<Message> {
    match app.controls.focused() {
        Some(control) if control.field().is_some() => submit_auth(app),
        Some(control) => press(app, control),
        None => Task::none(),
    }
}

/// Marks an auth field touched once focus has left it.
fn note_blur(app: &mut App, before: Option<Control>) {
    let Some(field) = before.and_then(Control::field) else {
        return;
    };
    if app.controls.focused() != before {
        app.auth.form_mut().blur(field);
    }
}

fn press(app: &mut App, control: Control) -> Task<Message> {
    let now = Instant::now();
    match control {
        Control::AddEntry => {
            add_entry(app, now);
            Task::none()
        }
        Control::DeleteEntry => {
            request_delete(app, now);
            Task::none()
        }
        Control::ShowTerms => {
            open(app, DialogKind::Terms, now);
            Task::none()
        }
        Control::LogIn => {
            open(app, DialogKind::Auth, now);
            Task::none()
        }
        Control::LogOut => Task::perform(app.auth_service.logout(), Message::LoggedOut),
        Control::ConfirmCancel => {
            if app.confirm.request_cancel() {
                close(app, DialogKind::Confirm, now);
            }
            Task::none()
        }
        Control::ConfirmAccept => start_delete(app),
        Control::TermsClose => {
            if app.terms.request_close() {
                close(app, DialogKind::Terms, now);
            }
            Task::none()
        }
        Control::AuthClose => {
            if app.auth.controller().is_interactive() {
                close(app, DialogKind::Auth, now);
            }
            Task::none()
        }
        Control::AuthRemember => {
            let remember = !app.auth.form().remember();
            app.auth.form_mut().set_remember(remember);
            Task::none()
        }
        Control::AuthSubmit => submit_auth(app),
        Control::AuthSwitchMode => {
            if !app.auth.is_submitting() {
                app.auth.toggle_mode();
            }
            Task::none()
        }
        Control::AuthEmail | Control::AuthPassword | Control::AuthConfirmPassword => Task::none(),
    }
}

/// Opens `kind` unless another dialog is mounted.
fn open(app: &mut App, kind: DialogKind, now: Instant) {
    if let Some(current) = app.mounted_dialog() {
        if current != kind {
            log::debug!("{kind:?} dialog not opened: {current:?} is still mounted");
            return;
        }
    }

    let root = root_of(app, kind);
    app.controls.set_root_shown(root, true);

    let doc = app.controls.doc_mut();
    match kind {
        DialogKind::Confirm => app.confirm.set_open(true, now, doc),
        DialogKind::Terms => app.terms.set_open(true, now, doc),
        DialogKind::Auth => app.auth.set_open(true, now, doc),
    };
}

fn close(app: &mut App, kind: DialogKind, now: Instant) {
    let doc = app.controls.doc_mut();
    match kind {
        DialogKind::Confirm => app.confirm.set_open(false, now, doc),
        DialogKind::Terms => app.terms.set_open(false, now, doc),
        DialogKind::Auth => app.auth.set_open(false, now, doc),
    };
}

fn tick(app: &mut App, now: Instant) {
    let roots = app.controls.roots();
    let doc = app.controls.doc_mut();
    let closed = [
        (roots.confirm, app.confirm.tick(now, doc)),
        (roots.terms, app.terms.tick(now, doc)),
        (roots.auth, app.auth.tick(now, doc)),
    ];
    for (root, event) in closed {
        if event.is_some() {
            app.controls.set_root_shown(root, false);
        }
    }
    app.notifications.get_mut().tick(now);
}

fn add_entry(app: &mut App, now: Instant) {
    let kg = app.entries.last().map_or(75.0, |entry| entry.kg - 0.2);
    let entry = WeightEntry {
        date: Local::now().date_naive(),
        kg,
    };
    app.entries.push(entry);
    app.notifications
        .get_mut()
        .success("Entry added", Some(format!("{kg:.1} kg")), now);
}

fn request_delete(app: &mut App, now: Instant) {
    let Some(entry) = app.entries.last().copied() else {
        app.notifications
            .get_mut()
            .info("Nothing to delete", None, now);
        return;
    };

    app.confirm.set_options(
        ConfirmOptions::new("Delete this entry?")
            .with_description(format!(
                "The {:.1} kg weigh-in from {} will be removed.",
                entry.kg, entry.date
            ))
            .with_confirm_text("Delete")
            .with_tone(Tone::Danger),
    );
    open(app, DialogKind::Confirm, now);
}

fn start_delete(app: &mut App) -> Task<Message> {
    let Some(ticket) = app.confirm.request_confirm() else {
        return Task::none();
    };
    let authorized = app
        .session
        .require_user()
        .map(|_| ())
        .map_err(|err| err.to_string());
    Task::perform(
        async move {
            tokio::time::sleep(DELETE_LATENCY).await;
            authorized
        },
        move |result| Message::DeleteSettled(ticket, result),
    )
}

fn delete_settled(app: &mut App, ticket: ActionTicket, result: Result<(), String>) {
    let now = Instant::now();
    match app.confirm.settle(ticket, result) {
        ConfirmOutcome::Confirmed => {
            app.entries.pop();
            close(app, DialogKind::Confirm, now);
            app.notifications
                .get_mut()
                .success("Entry deleted", None, now);
        }
        ConfirmOutcome::Failed | ConfirmOutcome::Stale => {}
    }
}

fn submit_auth(app: &mut App) -> Task<Message> {
    let Some(request) = app.auth.submit() else {
        return Task::none();
    };
    let ticket = request.ticket;
    let service = app.auth_service.clone();
    match request.mode {
        AuthMode::Login => Task::perform(service.login(request.credentials), move |result| {
            Message::AuthSettled(ticket, result)
        }),
        AuthMode::Signup => Task::perform(service.signup(request.credentials), move |result| {
            Message::AuthSettled(ticket, result)
        }),
    }
}

fn auth_settled(app: &mut App, ticket: ActionTicket, result: Result<AuthUser, AuthError>) {
    let now = Instant::now();
    let mode = app.auth.form().mode();
    if let AuthOutcome::Succeeded(user) = app.auth.settle(ticket, result) {
        let greeting = match mode {
            AuthMode::Login => "Welcome back",
            AuthMode::Signup => "Account created",
        };
        let detail = user.email.clone();
        app.session.signed_in(user);
        close(app, DialogKind::Auth, now);
        app.notifications
            .get_mut()
            .success(greeting, Some(detail), now);
    }
}
