// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Dark primary button (form submit). Uses a muted fill while disabled.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Disabled => (palette::GRAY_300, palette::GRAY_600),
        button::Status::Hovered | button::Status::Pressed => (palette::GRAY_900, WHITE),
        button::Status::Active => (BLACK, WHITE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Album group chip. The active chip is filled with the accent color.
pub fn chip(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match (active, status) {
            (true, _) => palette::ACCENT,
            (false, button::Status::Hovered) => palette::GRAY_100,
            (false, _) => WHITE,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: BLACK,
            border: Border {
                color: palette::GRAY_200,
                width: 1.0,
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

/// Neutral rounded button for third-party sign-in providers.
pub fn social(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_300,
        _ => palette::GRAY_150,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: BLACK,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Text-only button (links, back arrows, password visibility).
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_600,
        _ => palette::GRAY_900,
    };

    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Pill behind the star toggle.
pub fn pill(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        text_color: BLACK,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bare icon button whose glyph takes `color`.
pub fn icon(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: None,
        text_color: color,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_chip_uses_accent() {
        let style = chip(true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::ACCENT)));
    }

    #[test]
    fn inactive_chip_is_white_with_border() {
        let style = chip(false)(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(WHITE)));
        assert_eq!(style.border.color, palette::GRAY_200);
    }

    #[test]
    fn disabled_primary_is_muted() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_300)));
    }

    #[test]
    fn icon_style_carries_color() {
        let style = icon(palette::HEART_ON)(&Theme::Light, button::Status::Hovered);
        assert_eq!(style.text_color, palette::HEART_ON);
        assert!(style.background.is_none());
    }
}
