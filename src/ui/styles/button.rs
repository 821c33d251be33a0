// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Every builder takes a `focused` flag: the dialog controller owns keyboard
//! focus, so the renderer draws the ring itself instead of relying on the
//! widget's own focus state.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn ring(focused: bool, fallback: Color) -> Border {
    if focused {
        Border {
            color: palette::FOCUS_RING,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        }
    } else {
        Border {
            color: fallback,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        }
    }
}

fn disabled_style(theme: &Theme, focused: bool) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: ring(focused, palette::GRAY_400),
        shadow: shadow::NONE,
        snap: true,
    }
}

fn filled(
    base: Color,
    hover: Color,
    edge: Color,
    focused: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(base)),
            text_color: WHITE,
            border: ring(focused, edge),
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover)),
            text_color: WHITE,
            border: ring(focused, base),
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(theme, focused),
    }
}

/// Main action of a dialog.
pub fn primary(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    filled(
        palette::PRIMARY_500,
        palette::PRIMARY_400,
        palette::PRIMARY_600,
        focused,
    )
}

/// Destructive confirm action.
pub fn danger(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    filled(
        palette::ERROR_500,
        palette::ERROR_400,
        palette::ERROR_600,
        focused,
    )
}

/// Cancel and other secondary actions. Adapts to light/dark theme.
pub fn secondary(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_light = matches!(theme, Theme::Light);
        let (bg_color, text_color) = if is_light {
            (palette::GRAY_100, palette::GRAY_900)
        } else {
            (palette::GRAY_700, WHITE)
        };

        match status {
            button::Status::Active | button::Status::Pressed => button::Style {
                background: Some(Background::Color(bg_color)),
                text_color,
                border: ring(focused, palette::GRAY_400),
                shadow: shadow::NONE,
                snap: true,
            },
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(if is_light {
                    palette::GRAY_200
                } else {
                    Color::from_rgb(0.35, 0.35, 0.35)
                })),
                text_color,
                border: ring(focused, palette::PRIMARY_500),
                shadow: shadow::SM,
                snap: true,
            },
            button::Status::Disabled => disabled_style(theme, focused),
        }
    }
}

/// Borderless icon button (toast dismiss, dialog close).
pub fn ghost(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text_color = theme.extended_palette().background.base.text;
        let hover_bg = |alpha: f32| {
            Some(Background::Color(Color {
                a: alpha,
                ..palette::GRAY_400
            }))
        };
        let border = if focused {
            ring(true, palette::FOCUS_RING)
        } else {
            Border {
                radius: radius::SM.into(),
                ..Default::default()
            }
        };

        match status {
            button::Status::Active => button::Style {
                background: None,
                text_color,
                border,
                shadow: shadow::NONE,
                snap: true,
            },
            button::Status::Hovered => button::Style {
                background: hover_bg(opacity::OVERLAY_SUBTLE),
                text_color,
                border,
                shadow: shadow::NONE,
                snap: true,
            },
            button::Status::Pressed => button::Style {
                background: hover_bg(opacity::OVERLAY_MEDIUM),
                text_color,
                border,
                shadow: shadow::NONE,
                snap: true,
            },
            button::Status::Disabled => button::Style {
                background: None,
                text_color: Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..text_color
                },
                border,
                shadow: shadow::NONE,
                snap: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(false)(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn focused_buttons_draw_ring() {
        let theme = Theme::Dark;
        let style = primary(true)(&theme, button::Status::Active);
        assert_eq!(style.border.color, palette::FOCUS_RING);
        let style = danger(true)(&theme, button::Status::Pressed);
        assert_eq!(style.border.color, palette::FOCUS_RING);
        let style = secondary(true)(&theme, button::Status::Hovered);
        assert_eq!(style.border.color, palette::FOCUS_RING);

        let unfocused = secondary(false)(&theme, button::Status::Active);
        assert_ne!(unfocused.border.color, palette::FOCUS_RING);
    }

    #[test]
    fn disabled_keeps_ring_when_focused() {
        let style = danger(true)(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
        assert_eq!(style.border.color, palette::FOCUS_RING);
    }
}
