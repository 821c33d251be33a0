// SPDX-License-Identifier: MPL-2.0
//! Backdrop behind modal dialogs.

use crate::ui::design_tokens::{opacity, palette::BLACK};
use iced::widget::container;
use iced::{Background, Color, Theme};

fn backdrop_color(exiting: bool) -> Color {
    let alpha = if exiting {
        opacity::BACKDROP * opacity::EXITING
    } else {
        opacity::BACKDROP
    };
    Color { a: alpha, ..BLACK }
}

/// Dimmed full-window layer. Lightens while the dialog closes.
pub fn backdrop(exiting: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(backdrop_color(exiting))),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_backdrop_is_lighter() {
        assert!(backdrop_color(true).a < backdrop_color(false).a);
    }
}
