// SPDX-License-Identifier: MPL-2.0
//! Custom snackbar looks for the demo, each implementing [`SnackyContent`]
//! from scratch the way a host application would.

use crate::content::SnackyContent;
use crate::duration::SnackyDuration;
use crate::handle::SnackyHandle;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, spacing, typography};
use crate::ui::host::Message;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Border, Color, Element, Length, Theme};
use std::time::Duration;

const CARD_WIDTH: f32 = 360.0;

/// Accent used by the device-disconnected card's main action.
const RECONNECT_ACCENT: Color = Color::from_rgb8(0x00, 0x6C, 0xE0);

/// Background of the app-info card.
const APP_INFO_BACKGROUND: Color = Color::from_rgb8(0x24, 0x2C, 0x32);

/// How long the app-info card stays up. Compile-time positive, so the
/// `Custom` variant is used directly.
const APP_INFO_DURATION: Duration = Duration::from_secs(6);

/// A white warning card with a main ("Reconnect") and a secondary ("Ignore")
/// action.
#[derive(Debug)]
pub struct DeviceDisconnectedSnackbar {
    message: String,
}

impl DeviceDisconnectedSnackbar {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl SnackyContent for DeviceDisconnectedSnackbar {
    fn duration(&self) -> SnackyDuration {
        SnackyDuration::Long
    }

    fn on_main_action(&self) {
        tracing::info!("device disconnected snackbar: reconnect requested");
    }

    fn on_secondary_action(&self) {
        tracing::info!("device disconnected snackbar: ignored");
    }

    fn has_action(&self) -> bool {
        true
    }

    fn view(&self, handle: &SnackyHandle) -> Element<'static, Message> {
        let title = Text::new(self.message.clone())
            .size(typography::BODY)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            });

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(card_button(
                "Reconnect",
                RECONNECT_ACCENT,
                Message::MainAction(handle.clone()),
            ))
            .push(card_button(
                "Ignore",
                palette::GRAY_700,
                Message::SecondaryAction(handle.clone()),
            ));

        let body = Column::new()
            .spacing(spacing::XS)
            .push(title)
            .push(actions);

        Container::new(body)
            .width(Length::Fixed(CARD_WIDTH))
            .padding(spacing::SM)
            .style(|_theme: &Theme| card_style(palette::WHITE, palette::GRAY_900))
            .into()
    }
}

/// A dark card with a sender line, a message line, a "Reply" action and a
/// dismiss button. Stays up until resolved.
#[derive(Debug)]
pub struct PersonalMessageSnackbar {
    sender: String,
    message: String,
}

impl PersonalMessageSnackbar {
    pub fn new(sender: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            message: message.into(),
        }
    }
}

impl SnackyContent for PersonalMessageSnackbar {
    fn duration(&self) -> SnackyDuration {
        SnackyDuration::Indefinite
    }

    fn on_main_action(&self) {
        tracing::info!("personal message snackbar: reply requested");
    }

    fn has_action(&self) -> bool {
        true
    }

    fn view(&self, handle: &SnackyHandle) -> Element<'static, Message> {
        let sender = Text::new(self.sender.clone())
            .size(typography::BODY)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            });
        let message = Text::new(self.message.clone())
            .size(typography::BODY_SM)
            .style(|_theme: &Theme| iced::widget::text::Style {
                color: Some(Color {
                    a: opacity::SECONDARY_TEXT,
                    ..palette::GRAY_100
                }),
            });

        let lines = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(sender)
            .push(message);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(lines)
            .push(card_button(
                "Reply",
                palette::ACTION_400,
                Message::MainAction(handle.clone()),
            ))
            .push(card_button(
                "✕",
                palette::GRAY_100,
                Message::Dismiss(handle.clone()),
            ));

        Container::new(row)
            .width(Length::Fixed(CARD_WIDTH))
            .padding(spacing::SM)
            .style(|_theme: &Theme| card_style(palette::GRAY_700, palette::GRAY_100))
            .into()
    }
}

/// A dark info card with a leading glyph and a single action, shown for a
/// custom interval.
#[derive(Debug)]
pub struct AppInfoSnackbar {
    message: String,
    action_label: String,
}

impl AppInfoSnackbar {
    pub fn new(message: impl Into<String>, action_label: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action_label: action_label.into(),
        }
    }
}

impl SnackyContent for AppInfoSnackbar {
    fn duration(&self) -> SnackyDuration {
        SnackyDuration::Custom(APP_INFO_DURATION)
    }

    fn on_main_action(&self) {
        tracing::info!("app info snackbar: action requested");
    }

    fn has_action(&self) -> bool {
        true
    }

    fn view(&self, handle: &SnackyHandle) -> Element<'static, Message> {
        let glyph = Text::new("ℹ").size(typography::TITLE_MD);
        let message = Container::new(Text::new(self.message.clone()).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Left);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(message)
            .push(card_button(
                self.action_label.clone(),
                palette::ACTION_400,
                Message::MainAction(handle.clone()),
            ));

        Container::new(row)
            .width(Length::Fixed(CARD_WIDTH))
            .padding(spacing::SM)
            .style(|_theme: &Theme| card_style(APP_INFO_BACKGROUND, palette::WHITE))
            .into()
    }
}

fn card_style(background: Color, text_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}

fn card_button(
    label: impl Into<String>,
    accent: Color,
    message: Message,
) -> Element<'static, Message> {
    button(Text::new(label.into()).size(typography::BODY))
        .on_press(message)
        .padding(spacing::XXS)
        .style(move |_theme: &Theme, status| {
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
                button::Status::Hovered | button::Status::Pressed => button::Style {
                    background: Some(iced::Background::Color(Color {
                        a: opacity::OVERLAY_SUBTLE,
                        ..accent
                    })),
                    ..base
                },
                _ => base,
            }
        })
        .into()
}
