// SPDX-License-Identifier: MPL-2.0
//! The stock message/action/dismiss snackbar.
//!
//! Covers the widely applicable case: a short text message, an optional
//! action button, an optional dismiss button, with colors derived from the
//! active theme. Anything fancier implements [`SnackyContent`] directly.

use crate::content::SnackyContent;
use crate::duration::SnackyDuration;
use crate::handle::SnackyHandle;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::host::Message;
use crate::ui::style;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::fmt;
use std::sync::Arc;

/// Callback invoked when a snackbar outcome fires.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// A plain message snackbar with an optional action label and an optional
/// dismiss button, built with chained setters:
///
/// ```
/// use snacky::ui::default_snackbar::DefaultSnackbar;
///
/// let snackbar = DefaultSnackbar::new("Image saved")
///     .action_label("Undo")
///     .dismiss_action(true)
///     .on_action(|| println!("undo requested"));
/// ```
///
/// Unless a duration is set explicitly, a plain message shows for
/// [`SnackyDuration::Short`] while an actionable one stays until resolved
/// ([`SnackyDuration::Indefinite`]), so the user is never robbed of the
/// chance to act before the snackbar disappears.
pub struct DefaultSnackbar {
    message: String,
    action_label: Option<String>,
    with_dismiss_action: bool,
    duration: Option<SnackyDuration>,
    on_action: Option<Callback>,
    on_dismiss: Option<Callback>,
}

impl DefaultSnackbar {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action_label: None,
            with_dismiss_action: false,
            duration: None,
            on_action: None,
            on_dismiss: None,
        }
    }

    /// Adds an action button labeled `label`. Without an explicit duration
    /// this also switches the default duration to
    /// [`SnackyDuration::Indefinite`].
    #[must_use]
    pub fn action_label(mut self, label: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self
    }

    /// Shows a dismiss (`✕`) button. Recommended for snackbars with an
    /// [`SnackyDuration::Indefinite`] duration.
    #[must_use]
    pub fn dismiss_action(mut self, with_dismiss_action: bool) -> Self {
        self.with_dismiss_action = with_dismiss_action;
        self
    }

    /// Overrides the default duration.
    #[must_use]
    pub fn with_duration(mut self, duration: SnackyDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Callback invoked when the action button is pressed.
    #[must_use]
    pub fn on_action(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_action = Some(Arc::new(callback));
        self
    }

    /// Callback invoked when the snackbar is dismissed, explicitly or by
    /// timeout.
    #[must_use]
    pub fn on_dismiss(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_dismiss = Some(Arc::new(callback));
        self
    }

    /// The displayed message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl SnackyContent for DefaultSnackbar {
    fn duration(&self) -> SnackyDuration {
        self.duration.unwrap_or(if self.action_label.is_some() {
            SnackyDuration::Indefinite
        } else {
            SnackyDuration::Short
        })
    }

    fn on_main_action(&self) {
        if let Some(callback) = &self.on_action {
            callback();
        }
    }

    fn on_dismiss(&self) {
        if let Some(callback) = &self.on_dismiss {
            callback();
        }
    }

    fn has_action(&self) -> bool {
        self.action_label.is_some() || self.on_action.is_some()
    }

    fn view(&self, handle: &SnackyHandle) -> Element<'static, Message> {
        let message = Text::new(self.message.clone()).size(typography::BODY);

        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if let Some(label) = &self.action_label {
            row = row.push(
                button(Text::new(label.clone()).size(typography::BODY))
                    .on_press(Message::MainAction(handle.clone()))
                    .padding(spacing::XXS)
                    .style(style::action_button),
            );
        }

        if self.with_dismiss_action {
            row = row.push(
                button(Text::new("✕").size(typography::BODY_SM))
                    .on_press(Message::Dismiss(handle.clone()))
                    .padding(spacing::XXS)
                    .style(style::dismiss_button),
            );
        }

        Container::new(row)
            .width(Length::Fixed(sizing::SNACKBAR_WIDTH))
            .padding(spacing::SM)
            .style(style::snackbar_container)
            .into()
    }
}

impl fmt::Debug for DefaultSnackbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultSnackbar")
            .field("message", &self.message)
            .field("action_label", &self.action_label)
            .field("with_dismiss_action", &self.with_dismiss_action)
            .field("duration", &self.duration)
            .field("has_action_callback", &self.on_action.is_some())
            .field("has_dismiss_callback", &self.on_dismiss.is_some())
            .finish()
    }
}
