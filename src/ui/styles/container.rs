// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn fade(color: Color, exiting: bool) -> Color {
    if exiting {
        Color {
            a: color.a * opacity::EXITING,
            ..color
        }
    } else {
        color
    }
}

/// Dialog card surface. Fades while the dialog animates out.
///
/// The color is derived from the active Iced `Theme` background so cards stay
/// readable in both light and dark modes.
pub fn card(exiting: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base;
        container::Style {
            background: Some(Background::Color(fade(base.color, exiting))),
            text_color: Some(fade(base.text, exiting)),
            border: Border {
                color: fade(palette::GRAY_400, exiting),
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: if exiting { shadow::SM } else { shadow::LG },
            ..Default::default()
        }
    }
}

/// Toast card with a kind-colored accent border.
pub fn toast(accent: Color, leaving: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let bg_color = theme.extended_palette().background.base.color;
        container::Style {
            background: Some(Background::Color(fade(bg_color, leaving))),
            border: Border {
                color: fade(accent, leaving),
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            text_color: Some(fade(theme.palette().text, leaving)),
            ..Default::default()
        }
    }
}

/// Frame around a text field; the ring marks keyboard focus.
pub fn field_frame(focused: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: Border {
            color: if focused {
                palette::FOCUS_RING
            } else {
                Color::TRANSPARENT
            },
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
