// SPDX-License-Identifier: MPL-2.0
//! Presentation layer: the rendering host, the default snackbar look, and
//! the theming surface.
//!
//! The controller in [`crate::host_state`] is purely about queueing and
//! lifecycle; everything visual lives here. Custom snackbars implement
//! [`crate::SnackyContent`] and keep full control of their own look, while
//! [`default_snackbar::DefaultSnackbar`] covers the common
//! message/action/dismiss case with theme-derived colors.

pub mod default_snackbar;
pub mod design_tokens;
pub mod host;
pub mod style;
