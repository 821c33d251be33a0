// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering queue entries.
//!
//! Toasts are small cards with a kind-colored accent and a dismiss button,
//! stacked in the bottom-right corner. Leaving entries are drawn faded and
//! lose their dismiss action.

use super::manager::{Message, NotificationQueue};
use super::notification::NotificationEntry;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(entry: &NotificationEntry) -> Element<'_, Message> {
        let kind = entry.kind();
        let accent = kind.color();
        let leaving = entry.is_leaving();

        let glyph = Text::new(kind.glyph())
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let mut body = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(entry.title()).size(typography::BODY));
        if let Some(detail) = entry.detail() {
            body = body.push(Text::new(detail).size(typography::BODY_SM));
        }

        let dismiss = button(Text::new("✕").size(typography::BODY_SM))
            .padding(spacing::XXS)
            .on_press_maybe((!leaving).then(|| Message::Dismiss(entry.id().clone())))
            .style(styles::button::ghost(false));

        // Layout: [glyph] [title/detail] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(styles::container::toast(accent, leaving))
            .into()
    }

    /// Renders every entry, newest at the top, in the bottom-right corner.
    pub fn view_overlay(queue: &NotificationQueue) -> Element<'_, Message> {
        if queue.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toasts: Vec<Element<'_, Message>> = queue.entries().map(Self::view).collect();
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}
