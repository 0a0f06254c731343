// SPDX-License-Identifier: MPL-2.0
//! Style functions for the default snackbar.
//!
//! The card uses the theme's inverse surface so it reads as a floating,
//! temporary layer above regular content; the action label gets the accent
//! color tuned for that surface.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::{button, container};
use iced::{Border, Color, Theme};

/// Container style for the default snackbar card.
pub fn snackbar_container(theme: &Theme) -> container::Style {
    let (background, text_color) = if theme.extended_palette().is_dark {
        (palette::INVERSE_SURFACE_LIGHT, palette::GRAY_900)
    } else {
        (palette::INVERSE_SURFACE_DARK, palette::GRAY_100)
    };

    container::Style {
        background: Some(iced::Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Style function for the snackbar's action text-button.
pub fn action_button(theme: &Theme, status: button::Status) -> button::Style {
    // The card surface is inverted relative to the theme, so the accent is
    // picked for the opposite brightness.
    let accent = if theme.extended_palette().is_dark {
        palette::ACTION_500
    } else {
        palette::ACTION_400
    };

    let base = button::Style {
        background: None,
        text_color: accent,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            })),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..accent
            })),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..accent
            },
            ..base
        },
    }
}

/// Style function for the snackbar's dismiss button.
pub fn dismiss_button(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = if theme.extended_palette().is_dark {
        palette::GRAY_900
    } else {
        palette::GRAY_100
    };

    let base = button::Style {
        background: None,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            ..base
        },
    }
}
