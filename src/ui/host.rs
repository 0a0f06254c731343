// SPDX-License-Identifier: MPL-2.0
//! Rendering host for the display slot.
//!
//! [`view`] renders whatever currently occupies the slot of a
//! [`SnackyHostState`], [`update`] routes affordance messages back into
//! handle operations, and [`subscription`] wakes the application whenever
//! the occupant changes. Auto-dismiss timing lives in the controller, not
//! here; the host is purely visual.

use crate::handle::SnackyHandle;
use crate::host_state::SnackyHostState;
use crate::ui::design_tokens::spacing;
use iced::futures::SinkExt;
use iced::widget::{text, Container};
use iced::{alignment, stream, Element, Length, Subscription};

/// Messages produced by snackbar affordances and the slot watcher.
///
/// Affordance messages carry the handle they were wired to, so an event that
/// arrives after the slot has moved on resolves nothing: the stale handle is
/// already resolved and the operation is a no-op.
#[derive(Debug, Clone)]
pub enum Message {
    /// The main action affordance was activated.
    MainAction(SnackyHandle),
    /// The secondary action affordance was activated.
    SecondaryAction(SnackyHandle),
    /// The dismiss affordance was activated.
    Dismiss(SnackyHandle),
    /// The display slot changed occupancy; re-render.
    SlotChanged,
}

/// Applies a host message to the handle it carries.
pub fn update(message: Message) {
    match message {
        Message::MainAction(handle) => handle.perform_main_action(),
        Message::SecondaryAction(handle) => handle.perform_secondary_action(),
        Message::Dismiss(handle) => handle.dismiss(),
        Message::SlotChanged => {}
    }
}

/// Renders the current slot occupant anchored to the bottom of the layout,
/// or nothing when the slot is empty.
pub fn view(state: &SnackyHostState) -> Element<'static, Message> {
    match state.current() {
        Some(handle) => Container::new(handle.content().view(&handle))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into(),
        // An empty container that takes no space.
        None => Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into(),
    }
}

/// Subscription identity and data for one snackbar host.
/// Every host gets its own, so several hosts in one application keep
/// independent subscriptions. Only the host id participates in identity;
/// the cloned state is carried so the stream builder can resubscribe.
#[derive(Clone)]
struct HostSubscriptionId {
    id: u64,
    state: SnackyHostState,
}

impl std::hash::Hash for HostSubscriptionId {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}

/// Emits [`Message::SlotChanged`] whenever the slot occupancy changes.
pub fn subscription(state: &SnackyHostState) -> Subscription<Message> {
    Subscription::run_with(
        HostSubscriptionId {
            id: state.host_id(),
            state: state.clone(),
        },
        |data: &HostSubscriptionId| {
            let mut slot = data.state.subscribe();
            stream::channel(4, move |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
                while slot.changed().await.is_ok() {
                    let _ = output.send(Message::SlotChanged).await;
                }
                // The host state is gone; park instead of ending the stream so
                // the runtime does not respawn it.
                iced::futures::future::pending::<()>().await;
            })
        },
    )
}
