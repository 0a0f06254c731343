// SPDX-License-Identifier: MPL-2.0
//! Crate error types.
//!
//! The error surface is deliberately small: the only validation the core
//! performs is on custom durations, and the demo's config persistence adds
//! the usual I/O and parse failures. Cancellation of a `show()` call is not
//! an error, and resolving a handle twice is a silent no-op.

use std::time::Duration;
use thiserror::Error;

/// Errors produced by the library and the demo's config layer.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A custom snackbar duration was zero. Durations must be strictly
    /// positive; use [`crate::SnackyDuration::Indefinite`] to opt out of
    /// auto-dismissal instead.
    #[error("snackbar duration must be greater than zero, got {0:?}")]
    NonPositiveDuration(Duration),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_duration_names_the_offending_value() {
        let error = Error::NonPositiveDuration(Duration::ZERO);
        assert!(error.to_string().contains("greater than zero"));
    }
}
