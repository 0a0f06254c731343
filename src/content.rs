// SPDX-License-Identifier: MPL-2.0
//! The [`SnackyContent`] trait: what a single snackbar is made of.

use crate::duration::SnackyDuration;
use crate::handle::SnackyHandle;
use crate::ui::host;
use iced::Element;

/// Describes one snackbar: its display duration, its outcome callbacks, and
/// how it renders.
///
/// The controller only reads [`duration`] and invokes the callbacks; [`view`]
/// is consumed by [`crate::ui::host`] (or a custom rendering host) while the
/// snackbar occupies the display slot.
///
/// Callbacks default to no-ops and may be invoked even when nothing was
/// supplied for that action: performing an "inapplicable" action simply
/// resolves the snackbar. Whether an action was explicitly wired up is
/// reported by [`has_action`], not by inspecting the callbacks.
///
/// [`duration`]: SnackyContent::duration
/// [`view`]: SnackyContent::view
/// [`has_action`]: SnackyContent::has_action
pub trait SnackyContent: Send + Sync {
    /// How long the snackbar stays on screen before the controller dismisses
    /// it.
    fn duration(&self) -> SnackyDuration;

    /// Called when the main action is performed, before the handle resolves.
    fn on_main_action(&self) {}

    /// Called when the secondary action is performed, before the handle
    /// resolves.
    fn on_secondary_action(&self) {}

    /// Called when the snackbar is dismissed, explicitly or by the
    /// auto-dismiss timer, before the handle resolves.
    fn on_dismiss(&self) {}

    /// Whether an action was explicitly supplied for this snackbar.
    fn has_action(&self) -> bool {
        false
    }

    /// Renders the snackbar. `handle` is the live handle occupying the
    /// display slot; wire UI affordances to it through [`host::Message`].
    fn view(&self, handle: &SnackyHandle) -> Element<'static, host::Message>;
}
