// SPDX-License-Identifier: MPL-2.0
//! Demo application: buttons that exercise every snackbar flavor.
//!
//! This mirrors how a real application hosts snacky: one [`SnackyHostState`]
//! in the app state, [`Task::perform`] for the awaited `show` calls, the host
//! subscription for re-renders, and the host view stacked over the regular
//! content.

mod snackbars;

use crate::config::{self, Config};
use crate::content::SnackyContent;
use crate::handle::SnackyOutcome;
use crate::host_state::SnackyHostState;
use crate::ui::default_snackbar::DefaultSnackbar;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::host;
use iced::widget::{button, stack, text, Column, Container};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use serde::{Deserialize, Serialize};

/// Theme preference for the demo window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the effective theme is dark. `System` asks the OS.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    fn cycled(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode: {other}")),
        }
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional theme override (`light`, `dark` or `system`).
    pub theme: Option<ThemeMode>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

/// Root application state for the demo.
#[derive(Debug)]
pub struct App {
    snacky: SnackyHostState,
    theme_mode: ThemeMode,
    last_outcome: Option<SnackyOutcome>,
    shown_count: u32,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    ShowDefault,
    ShowActionable,
    ShowDeviceDisconnected,
    ShowPersonalMessage,
    ShowAppInfo,
    /// Queue three snackbars at once to show FIFO serialization.
    ShowBurst,
    CycleTheme,
    Snacky(host::Message),
    /// A `show` call came back with its outcome.
    Resolved(SnackyOutcome),
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let theme_mode = flags.theme.or(config.theme).unwrap_or_default();

        let app = Self {
            snacky: SnackyHostState::new(),
            theme_mode,
            last_outcome: None,
            shown_count: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Snacky Demo")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        host::subscription(&self.snacky).map(Message::Snacky)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowDefault => {
                self.shown_count += 1;
                let count = self.shown_count;
                self.show(DefaultSnackbar::new(format!("Plain message #{count}")))
            }
            Message::ShowActionable => self.show(
                DefaultSnackbar::new("Connection lost")
                    .action_label("Retry")
                    .dismiss_action(true)
                    .on_action(|| tracing::info!("retry requested")),
            ),
            Message::ShowDeviceDisconnected => {
                self.show(snackbars::DeviceDisconnectedSnackbar::new(
                    "Device disconnected",
                ))
            }
            Message::ShowPersonalMessage => self.show(snackbars::PersonalMessageSnackbar::new(
                "Ana",
                "See you at nine?",
            )),
            Message::ShowAppInfo => self.show(snackbars::AppInfoSnackbar::new(
                "Action required",
                "Review",
            )),
            Message::ShowBurst => Task::batch([
                self.show(DefaultSnackbar::new("First in line")),
                self.show(DefaultSnackbar::new("Second in line")),
                self.show(DefaultSnackbar::new("Third in line")),
            ]),
            Message::CycleTheme => {
                self.theme_mode = self.theme_mode.cycled();
                let config = Config {
                    theme: Some(self.theme_mode),
                };
                if let Err(error) = config::save(&config) {
                    tracing::warn!(%error, "failed to persist theme preference");
                }
                Task::none()
            }
            Message::Snacky(message) => {
                host::update(message);
                Task::none()
            }
            Message::Resolved(outcome) => {
                self.last_outcome = Some(outcome);
                Task::none()
            }
        }
    }

    /// Queues `content` on the host and reports the outcome back as a
    /// message once the snackbar has disappeared again.
    fn show(&self, content: impl SnackyContent + 'static) -> Task<Message> {
        let host = self.snacky.clone();
        Task::perform(async move { host.show(content).await }, Message::Resolved)
    }

    fn view(&self) -> Element<'_, Message> {
        let status = match self.last_outcome {
            Some(SnackyOutcome::MainAction) => "Last snackbar: main action performed",
            Some(SnackyOutcome::SecondaryAction) => "Last snackbar: secondary action performed",
            Some(SnackyOutcome::Dismissed) => "Last snackbar: dismissed",
            None => "No snackbar resolved yet",
        };

        let buttons = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(text("Welcome to Snacky!").size(typography::TITLE_MD))
            .push(demo_button("Show default snackbar", Message::ShowDefault))
            .push(demo_button("Show actionable snackbar", Message::ShowActionable))
            .push(demo_button(
                "Show device disconnected snackbar",
                Message::ShowDeviceDisconnected,
            ))
            .push(demo_button(
                "Show personal message snackbar",
                Message::ShowPersonalMessage,
            ))
            .push(demo_button("Show app info snackbar", Message::ShowAppInfo))
            .push(demo_button("Queue three snackbars", Message::ShowBurst))
            .push(demo_button(
                &format!("Theme: {}", self.theme_mode.label()),
                Message::CycleTheme,
            ))
            .push(text(status).size(typography::BODY_SM));

        let content = Container::new(buttons)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::LG);

        stack([
            content.into(),
            host::view(&self.snacky).map(Message::Snacky),
        ])
        .into()
    }
}

fn demo_button(label: &str, message: Message) -> Element<'static, Message> {
    button(text(label.to_owned()).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_cycles_through_all_modes() {
        let mut mode = ThemeMode::System;
        mode = mode.cycled();
        assert_eq!(mode, ThemeMode::Light);
        mode = mode.cycled();
        assert_eq!(mode, ThemeMode::Dark);
        mode = mode.cycled();
        assert_eq!(mode, ThemeMode::System);
    }

    #[test]
    fn theme_mode_parses_cli_values() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("system".parse::<ThemeMode>().unwrap(), ThemeMode::System);
        assert!("solarized".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn explicit_theme_modes_do_not_consult_the_system() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }
}
