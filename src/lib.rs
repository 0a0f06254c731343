// SPDX-License-Identifier: MPL-2.0
//! Snacky is a themable snackbar presentation library for the Iced GUI
//! toolkit.
//!
//! The heart of the crate is [`SnackyHostState`]: it guarantees at most one
//! snackbar is visible at a time, serializes concurrent [`show`] calls first
//! come first served, drives timed auto-dismissal, and resolves every call
//! with the [`SnackyOutcome`] describing how its snackbar went away. The
//! [`ui`] module holds the visual side: a rendering host for the display
//! slot, the default snackbar look, and the design tokens behind it. The
//! [`app`] module is a small demo application wired up by `main.rs`.
//!
//! [`show`]: SnackyHostState::show

#![doc(html_root_url = "https://docs.rs/snacky/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod duration;
pub mod error;
pub mod handle;
pub mod host_state;
mod queue;
pub mod ui;

pub use content::SnackyContent;
pub use duration::SnackyDuration;
pub use error::{Error, Result};
pub use handle::{SnackyHandle, SnackyId, SnackyOutcome};
pub use host_state::SnackyHostState;
