// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is drawn first; each mounted dialog is layered on top of it and
//! the toast overlay goes last so toasts stay visible above an open dialog.

use super::controls::Control;
use super::{App, Message};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::dialog::view::{self as dialog_view, Emphasis};
use crate::ui::dialog::{AuthMode, Field, Modal};
use crate::ui::notifications::Toast;
use iced::widget::{
    checkbox, mouse_area, scrollable, text, text_input, Column, Container, Row, Stack, Text,
};
use iced::{alignment, Element, Length};

/// Renders the page, the mounted dialog and the toasts.
pub fn view(app: &App) -> Element<'_, Message> {
    let mut content = page(app);

    content = dialog_view::modal(
        content,
        app.confirm.descriptor(),
        confirm_card(app),
        Message::BackdropPressed,
    );
    content = dialog_view::modal(
        content,
        app.terms.descriptor(),
        terms_card(app),
        Message::BackdropPressed,
    );
    content = dialog_view::modal(
        content,
        app.auth.descriptor(),
        auth_card(app),
        Message::BackdropPressed,
    );

    let toasts = Toast::view_overlay(app.notifications.get()).map(Message::Notification);

    Stack::new()
        .push(content)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn button_for<'a>(
    app: &App,
    label: &'a str,
    emphasis: Emphasis,
    control: Control,
    enabled: bool,
) -> Element<'a, Message> {
    dialog_view::action_button(
        label,
        emphasis,
        app.controls.is_focused(control),
        enabled.then_some(Message::Pressed(control)),
    )
}

fn page(app: &App) -> Element<'_, Message> {
    let session_line = match (app.session.is_loading(), app.session.user()) {
        (true, _) => "Checking session…".to_string(),
        (false, Some(user)) => format!("Signed in as {}", user.email),
        (false, None) => "Not signed in".to_string(),
    };

    let entries = app
        .entries
        .iter()
        .rev()
        .fold(Column::new().spacing(spacing::XXS), |column, entry| {
            column.push(
                Row::new()
                    .spacing(spacing::LG)
                    .push(
                        Text::new(entry.date.format("%Y-%m-%d").to_string())
                            .size(typography::BODY)
                            .width(Length::Fixed(120.0)),
                    )
                    .push(Text::new(format!("{:.1} kg", entry.kg)).size(typography::BODY)),
            )
        });

    let session_button = if app.session.user().is_some() {
        button_for(app, "Log out", Emphasis::Secondary, Control::LogOut, true)
    } else {
        button_for(app, "Log in", Emphasis::Secondary, Control::LogIn, true)
    };

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(button_for(app, "Add entry", Emphasis::Primary, Control::AddEntry, true))
        .push(button_for(app, "Delete entry", Emphasis::Danger, Control::DeleteEntry, true))
        .push(button_for(app, "Terms", Emphasis::Secondary, Control::ShowTerms, true))
        .push(session_button);

    let column = Column::new()
        .spacing(spacing::MD)
        .push(Text::new("WeightLog").size(typography::TITLE_LG))
        .push(Text::new(session_line).size(typography::BODY))
        .push(actions)
        .push(entries);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .into()
}

fn confirm_card(app: &App) -> Element<'_, Message> {
    let dialog = &app.confirm;
    let options = dialog.options();
    let enabled = dialog.controls_enabled();

    let mut body = Column::new().spacing(spacing::XS);
    if let Some(description) = &options.description {
        body = body.push(text(description.as_str()).size(typography::BODY));
    }
    if let Some(error) = dialog.error() {
        body = body.push(dialog_view::message_line(error));
    }

    let footer = dialog_view::footer(vec![
        button_for(
            app,
            &options.cancel_text,
            Emphasis::Secondary,
            Control::ConfirmCancel,
            enabled,
        ),
        button_for(
            app,
            dialog.confirm_label(),
            options.tone.into(),
            Control::ConfirmAccept,
            enabled,
        ),
    ]);

    dialog_view::card(
        &options.title,
        None,
        body.into(),
        Some(footer),
        dialog.controller().is_closing(),
    )
}

fn terms_card(app: &App) -> Element<'_, Message> {
    let dialog = &app.terms;

    let sections = dialog.sections().iter().fold(
        Column::new().spacing(spacing::SM),
        |column, section| {
            column.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(text(section.heading).size(typography::TITLE_SM))
                    .push(text(section.body).size(typography::BODY)),
            )
        },
    );

    let close = dialog_view::close_button(
        app.controls.is_focused(Control::TermsClose),
        dialog
            .request_close()
            .then_some(Message::Pressed(Control::TermsClose)),
    );

    dialog_view::card(
        crate::ui::dialog::terms::TITLE,
        Some(close),
        scrollable(sections)
            .height(Length::Fixed(sizing::MODAL_BODY_MAX_HEIGHT))
            .into(),
        None,
        dialog.controller().is_closing(),
    )
}

fn auth_field<'a>(app: &'a App, field: Field, control: Control, label: &'a str) -> Element<'a, Message> {
    let form = app.auth.form();
    let mut input = text_input(label, form.value(field))
        .on_input(move |value| Message::AuthInput(field, value))
        .on_submit(Message::Pressed(Control::AuthSubmit))
        .secure(field != Field::Email)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill);
    if let Some(id) = control.widget_id() {
        input = input.id(id);
    }
    // The input captures the press itself; the release moves the focus mirror.
    let input = mouse_area(input).on_release(Message::Pressed(control));

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY_SM))
        .push(dialog_view::focus_frame(
            input,
            app.controls.is_focused(control),
        ));
    if let Some(message) = form.visible_message(field) {
        column = column.push(dialog_view::message_line(message));
    }
    column.into()
}

fn auth_card(app: &App) -> Element<'_, Message> {
    let dialog = &app.auth;
    let form = dialog.form();
    let locked = dialog.is_submitting();

    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(auth_field(app, Field::Email, Control::AuthEmail, "Email"))
        .push(auth_field(app, Field::Password, Control::AuthPassword, "Password"));
    if form.mode() == AuthMode::Signup {
        body = body.push(auth_field(
            app,
            Field::ConfirmPassword,
            Control::AuthConfirmPassword,
            "Confirm password",
        ));
    }

    body = body.push(dialog_view::focus_frame(
        checkbox(form.remember())
            .label("Keep me logged in")
            .on_toggle(Message::AuthRememberToggled),
        app.controls.is_focused(Control::AuthRemember),
    ));
    if let Some(error) = dialog.error() {
        body = body.push(dialog_view::message_line(error));
    }

    let switch_label = match form.mode() {
        AuthMode::Login => "Need an account? Sign up",
        AuthMode::Signup => "Have an account? Log in",
    };
    let footer = dialog_view::footer(vec![
        button_for(
            app,
            switch_label,
            Emphasis::Secondary,
            Control::AuthSwitchMode,
            !locked,
        ),
        button_for(
            app,
            dialog.submit_label(),
            Emphasis::Primary,
            Control::AuthSubmit,
            dialog.can_submit(),
        ),
    ]);

    let close = dialog_view::close_button(
        app.controls.is_focused(Control::AuthClose),
        Some(Message::Pressed(Control::AuthClose)),
    );

    let header_note = Container::new(
        text("Your weigh-ins stay private to your account.").size(typography::BODY_SM),
    )
    .align_x(alignment::Horizontal::Left);

    dialog_view::card(
        dialog.title(),
        Some(close),
        Column::new()
            .spacing(spacing::MD)
            .push(header_note)
            .push(body)
            .into(),
        Some(footer),
        dialog.controller().is_closing(),
    )
}
