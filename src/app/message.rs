// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::controls::Control;
use crate::error::AuthError;
use crate::session::AuthUser;
use crate::ui::dialog::{ActionTicket, Field};
use crate::ui::focus::KeyPress;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A page or dialog control was activated by pointer.
    Pressed(Control),
    /// A key the dialogs care about.
    Key(KeyPress),
    /// Pointer press on the dimmed area around the open dialog.
    BackdropPressed,
    /// Timer tick while any dialog or toast timer is pending.
    Tick(Instant),
    Notification(notifications::NotificationMessage),
    AuthInput(Field, String),
    AuthRememberToggled(bool),
    /// The deletion behind the confirm dialog finished.
    DeleteSettled(ActionTicket, Result<(), String>),
    AuthSettled(ActionTicket, Result<AuthUser, AuthError>),
    /// Answer to the startup `me` check.
    SessionChecked(Result<AuthUser, AuthError>),
    LoggedOut(Result<(), AuthError>),
}

/// Runtime flags passed from `main.rs` into the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config file path overriding the default location.
    pub config_path: Option<PathBuf>,
}
