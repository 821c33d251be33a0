// SPDX-License-Identifier: MPL-2.0
//! Iced rendering helpers shared by every dialog.
//!
//! [`modal`] layers a dialog card over the page: a dimmed backdrop that
//! reports presses, and the card itself, which swallows pointer events so a
//! click inside never reaches the backdrop. Nothing is drawn unless the
//! descriptor says the dialog is mounted.

use super::{DialogDescriptor, Tone};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, container, mouse_area, opaque, text, Column, Row, Stack};
use iced::{alignment, Element, Length, Theme};

/// How loud an action button is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Primary,
    Danger,
    Secondary,
}

impl From<Tone> for Emphasis {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Primary => Emphasis::Primary,
            Tone::Danger => Emphasis::Danger,
        }
    }
}

/// Stacks `card` over `base` while the dialog is mounted.
pub fn modal<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    descriptor: DialogDescriptor<'_>,
    card: Element<'a, Message>,
    on_backdrop: Message,
) -> Element<'a, Message> {
    if !descriptor.mounted {
        return base;
    }

    let layer = mouse_area(
        center(opaque(card)).style(styles::overlay::backdrop(descriptor.closing)),
    )
    .on_press(on_backdrop);

    Stack::new().push(base).push(opaque(layer)).into()
}

/// Dialog card: title row (with an optional close control), body, footer.
pub fn card<'a, Message: 'a>(
    title: &'a str,
    close: Option<Element<'a, Message>>,
    body: Element<'a, Message>,
    footer: Option<Element<'a, Message>>,
    closing: bool,
) -> Element<'a, Message> {
    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            container(text(title).size(typography::TITLE_MD))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );
    if let Some(close) = close {
        header = header.push(close);
    }

    let mut content = Column::new().spacing(spacing::MD).push(header).push(body);
    if let Some(footer) = footer {
        content = content.push(footer);
    }

    container(content)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card(closing))
        .into()
}

/// Labelled action button. `on_press = None` renders it disabled.
pub fn action_button<'a, Message: Clone + 'a>(
    label: &'a str,
    emphasis: Emphasis,
    focused: bool,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let btn = button(
        container(text(label).size(typography::BODY))
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([0.0, spacing::MD])
    .on_press_maybe(on_press);

    match emphasis {
        Emphasis::Primary => btn.style(styles::button::primary(focused)).into(),
        Emphasis::Danger => btn.style(styles::button::danger(focused)).into(),
        Emphasis::Secondary => btn.style(styles::button::secondary(focused)).into(),
    }
}

/// Small "✕" control for the title row.
pub fn close_button<'a, Message: Clone + 'a>(
    focused: bool,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    button(text("✕").size(typography::BODY))
        .padding(spacing::XXS)
        .on_press_maybe(on_press)
        .style(styles::button::ghost(focused))
        .into()
}

/// Right-aligned row of action buttons.
pub fn footer<'a, Message: 'a>(buttons: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    container(Row::with_children(buttons).spacing(spacing::XS))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .into()
}

/// Draws the focus ring around `content` when it holds keyboard focus.
pub fn focus_frame<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    focused: bool,
) -> Element<'a, Message> {
    container(content)
        .padding(spacing::XXS / 2.0)
        .style(styles::container::field_frame(focused))
        .into()
}

/// Inline validation or action error text.
pub fn message_line<'a, Message: 'a>(message: &'a str) -> Element<'a, Message> {
    text(message)
        .size(typography::BODY_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ERROR_400),
        })
        .into()
}
