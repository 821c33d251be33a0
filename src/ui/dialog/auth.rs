// SPDX-License-Identifier: MPL-2.0
//! Login / signup dialog.
//!
//! Submission is gated by client-side validation of the fields active in the
//! current mode. A field's message becomes visible once the field has been
//! touched (blurred, or a submit failed validation) or holds any text.

use super::{ActionTicket, DialogController, InFlight, Modal};
use crate::error::AuthError;
use crate::session::{AuthUser, Credentials};
use crate::ui::focus::ElementId;
use crate::ui::state::{GracePeriod, TransitionEvent};
use crate::validation;

pub const TITLE_ID: &str = "auth-title";

/// Shown for every failed login/signup, whatever the cause.
pub const AUTH_FAILED_MESSAGE: &str = "Authentication failed. Please check your details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    /// Fields validated in this mode.
    #[must_use]
    pub fn fields(self) -> &'static [Field] {
        match self {
            AuthMode::Login => &[Field::Email, Field::Password],
            AuthMode::Signup => &[Field::Email, Field::Password, Field::ConfirmPassword],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Touched {
    email: bool,
    password: bool,
    confirm_password: bool,
}

impl Touched {
    fn get(self, field: Field) -> bool {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
        }
    }

    fn set(&mut self, field: Field) {
        match field {
            Field::Email => self.email = true,
            Field::Password => self.password = true,
            Field::ConfirmPassword => self.confirm_password = true,
        }
    }
}

/// Field values and their touched state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthForm {
    mode: AuthMode,
    email: String,
    password: String,
    confirm_password: String,
    remember: bool,
    touched: Touched,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new(AuthMode::Login)
    }
}

impl AuthForm {
    #[must_use]
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            remember: true,
            touched: Touched::default(),
        }
    }

    /// Switches mode. Entered email and password are kept; the confirmation
    /// field starts untouched again since it may not have been validated.
    pub fn set_mode(&mut self, mode: AuthMode) {
        if self.mode != mode {
            self.mode = mode;
            self.touched.confirm_password = false;
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }

    pub fn set_remember(&mut self, remember: bool) {
        self.remember = remember;
    }

    /// Marks `field` touched when it loses focus.
    pub fn blur(&mut self, field: Field) {
        self.touched.set(field);
    }

    /// Marks every active field touched (failed submit).
    pub fn touch_all(&mut self) {
        for &field in self.mode.fields() {
            self.touched.set(field);
        }
    }

    #[must_use]
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    #[must_use]
    pub fn remember(&self) -> bool {
        self.remember
    }

    #[must_use]
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.get(field)
    }

    /// Validation message for `field`, regardless of visibility. Inactive
    /// fields never have a message.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&'static str> {
        if !self.mode.fields().contains(&field) {
            return None;
        }
        match field {
            Field::Email => validation::email_message(&self.email),
            Field::Password => validation::password_message(&self.password),
            Field::ConfirmPassword => {
                validation::confirm_password_message(&self.password, &self.confirm_password)
            }
        }
    }

    /// Message to render inline, once the field is touched or non-empty.
    #[must_use]
    pub fn visible_message(&self, field: Field) -> Option<&'static str> {
        if self.is_touched(field) || !self.value(field).is_empty() {
            self.message(field)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.mode
            .fields()
            .iter()
            .all(|&field| self.message(field).is_none())
    }

    /// Clears both password fields and their touched state; email and mode
    /// are kept.
    pub fn clear_passwords(&mut self) {
        self.password.clear();
        self.confirm_password.clear();
        self.touched.password = false;
        self.touched.confirm_password = false;
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            remember: self.remember,
        }
    }
}

/// A validated submission the host must run against its auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
    pub ticket: ActionTicket,
    pub mode: AuthMode,
    pub credentials: Credentials,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Signed in; the host should close the dialog.
    Succeeded(AuthUser),
    /// Rejected; the generic message is shown and the form re-enabled.
    Failed,
    /// Ticket from an earlier open cycle; ignored.
    Stale,
}

#[derive(Debug, Clone)]
pub struct AuthDialog {
    controller: DialogController,
    form: AuthForm,
    in_flight: InFlight,
    error: Option<&'static str>,
}

impl AuthDialog {
    pub fn new(initial_mode: AuthMode, root: ElementId, grace: GracePeriod) -> Self {
        Self {
            controller: DialogController::new(TITLE_ID, root, grace),
            form: AuthForm::new(initial_mode),
            in_flight: InFlight::default(),
            error: None,
        }
    }

    #[must_use]
    pub fn form(&self) -> &AuthForm {
        &self.form
    }

    /// Fields stay editable while a submit is pending.
    pub fn form_mut(&mut self) -> &mut AuthForm {
        &mut self.form
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        self.form.set_mode(mode);
        self.error = None;
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.form.mode().toggled());
    }

    /// Submit button enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.controller.is_interactive() && !self.in_flight.is_active() && self.form.is_valid()
    }

    /// Attempts a submission.
    ///
    /// Invalid input marks every active field touched and returns `None`, as
    /// does a submit while one is already pending.
    pub fn submit(&mut self) -> Option<AuthRequest> {
        if !self.controller.is_interactive() || self.in_flight.is_active() {
            return None;
        }
        if !self.form.is_valid() {
            self.form.touch_all();
            return None;
        }

        let ticket = self.in_flight.begin()?;
        self.error = None;
        Some(AuthRequest {
            ticket,
            mode: self.form.mode(),
            credentials: self.form.credentials(),
        })
    }

    /// Reports the auth service's answer.
    pub fn settle(
        &mut self,
        ticket: ActionTicket,
        result: Result<AuthUser, AuthError>,
    ) -> AuthOutcome {
        if !self.in_flight.settle(ticket) {
            return AuthOutcome::Stale;
        }
        match result {
            Ok(user) => {
                self.form.clear_passwords();
                AuthOutcome::Succeeded(user)
            }
            Err(err) => {
                log::warn!("{:?} failed: {err}", self.form.mode());
                self.error = Some(AUTH_FAILED_MESSAGE);
                AuthOutcome::Failed
            }
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_active()
    }

    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.form.mode() {
            AuthMode::Login => "Welcome back",
            AuthMode::Signup => "Create your account",
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match (self.in_flight.is_active(), self.form.mode()) {
            (true, _) => "Please wait…",
            (false, AuthMode::Login) => "Log in",
            (false, AuthMode::Signup) => "Sign up",
        }
    }
}

impl Modal for AuthDialog {
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
