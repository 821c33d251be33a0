// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the demo shell.
//!
//! The `App` owns the weight log, the three dialogs, the toast queue and the
//! session, and translates messages into dialog transitions and async
//! actions. Policy (which dialog may open, what a successful action does)
//! stays close to the update loop so user-facing behavior is easy to audit.

pub mod controls;
mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::context::Provider;
use crate::session::{AuthService, LocalAuthService, Session};
use crate::ui::dialog::{AuthDialog, AuthMode, ConfirmDialog, ConfirmOptions, Modal, TermsDialog};
use crate::ui::notifications::NotificationQueue;
use chrono::{Days, Local, NaiveDate};
use controls::Controls;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// One weigh-in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub kg: f32,
}

/// The dialogs the shell can show. At most one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Confirm,
    Terms,
    Auth,
}

/// Root Iced application state.
pub struct App {
    controls: Controls,
    confirm: ConfirmDialog,
    terms: TermsDialog,
    auth: AuthDialog,
    notifications: Provider<NotificationQueue>,
    session: Session,
    auth_service: LocalAuthService,
    entries: Vec<WeightEntry>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("entries", &self.entries.len())
            .field("open_dialog", &self.mounted_dialog())
            .field("signed_in", &self.session.user().is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// A few days of history so the page is not empty on first launch.
fn seed_entries(today: NaiveDate) -> Vec<WeightEntry> {
    [(3, 74.2), (2, 73.9), (1, 73.6)]
        .into_iter()
        .filter_map(|(days_ago, kg)| {
            today
                .checked_sub_days(Days::new(days_ago))
                .map(|date| WeightEntry { date, kg })
        })
        .collect()
}

impl App {
    /// Initializes application state and checks the session.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match flags.config_path.as_deref() {
            Some(path) => config::load_or_default(path),
            None => config::load(),
        };
        let app = Self::with_config(&config);
        let check = app.auth_service.me();
        (app, Task::perform(check, Message::SessionChecked))
    }

    fn with_config(config: &Config) -> Self {
        let grace = config.exit_grace();
        let controls = Controls::new();
        let roots = controls.roots();

        let mut app = Self {
            confirm: ConfirmDialog::new(ConfirmOptions::new("Delete entry?"), roots.confirm, grace),
            terms: TermsDialog::new(roots.terms, grace),
            auth: AuthDialog::new(AuthMode::Login, roots.auth, grace),
            notifications: Provider::new(
                "NotificationProvider",
                NotificationQueue::with_settings(config.queue_settings()),
            ),
            session: Session::new(),
            auth_service: LocalAuthService::new(),
            entries: seed_entries(Local::now().date_naive()),
            controls,
        };
        app.sync_controls();
        app
    }

    fn title(&self) -> String {
        match self.session.user() {
            Some(user) => format!("WeightLog - {}", user.email),
            None => "WeightLog".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.next_deadline()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = update::update(self, message);
        self.sync_controls();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Earliest pending timer across dialogs and toasts.
    fn next_deadline(&self) -> Option<Instant> {
        [
            self.confirm.next_deadline(),
            self.terms.next_deadline(),
            self.auth.next_deadline(),
            self.notifications.get().next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// The dialog currently mounted (open or closing), if any.
    fn mounted_dialog(&self) -> Option<DialogKind> {
        if self.confirm.controller().is_mounted() {
            Some(DialogKind::Confirm)
        } else if self.terms.controller().is_mounted() {
            Some(DialogKind::Terms)
        } else if self.auth.controller().is_mounted() {
            Some(DialogKind::Auth)
        } else {
            None
        }
    }

    /// Mirrors dialog state (disabled buttons, signup-only field) into the
    /// focus tree.
    fn sync_controls(&mut self) {
        use controls::Control;

        let confirm_locked = !self.confirm.controls_enabled();
        self.controls.set_disabled(Control::ConfirmCancel, confirm_locked);
        self.controls.set_disabled(Control::ConfirmAccept, confirm_locked);

        let signup = self.auth.form().mode() == AuthMode::Signup;
        self.controls.set_shown(Control::AuthConfirmPassword, signup);

        let auth_locked = self.auth.is_submitting();
        self.controls.set_disabled(Control::AuthSubmit, auth_locked);
        self.controls.set_disabled(Control::AuthSwitchMode, auth_locked);

        let signed_in = self.session.user().is_some();
        self.controls.set_shown(Control::LogIn, !signed_in);
        self.controls.set_shown(Control::LogOut, signed_in);
    }
}
