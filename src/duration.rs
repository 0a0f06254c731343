// SPDX-License-Identifier: MPL-2.0
//! Snackbar display durations.
//!
//! A snackbar is shown for one of two fixed intervals, indefinitely (until
//! acted upon), or for a caller-supplied custom interval. Custom intervals
//! are validated at construction: zero is rejected immediately, before any
//! queue or display state is touched.

use crate::error::{Error, Result};
use std::time::Duration;

/// Fixed interval behind [`SnackyDuration::Short`].
pub const SHORT_DURATION: Duration = Duration::from_secs(4);

/// Fixed interval behind [`SnackyDuration::Long`].
pub const LONG_DURATION: Duration = Duration::from_secs(10);

/// How long a snackbar stays on screen before the controller dismisses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnackyDuration {
    /// Fixed short interval (4 s). The default for plain messages.
    Short,
    /// Fixed long interval (10 s).
    Long,
    /// No auto-dismissal; the snackbar stays until explicitly resolved.
    Indefinite,
    /// Caller-supplied interval. Construct through [`SnackyDuration::custom`],
    /// which enforces a strictly positive value.
    Custom(Duration),
}

impl SnackyDuration {
    /// Creates a validated custom duration.
    ///
    /// `std::time::Duration` cannot be negative, so rejecting zero is all
    /// that is needed to guarantee a strictly positive interval. Any positive
    /// interval, down to a single millisecond, is accepted.
    pub fn custom(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            Err(Error::NonPositiveDuration(interval))
        } else {
            Ok(Self::Custom(interval))
        }
    }

    /// The interval after which the controller auto-dismisses the snackbar,
    /// or `None` for [`SnackyDuration::Indefinite`].
    #[must_use]
    pub fn timeout(self) -> Option<Duration> {
        match self {
            Self::Short => Some(SHORT_DURATION),
            Self::Long => Some(LONG_DURATION),
            Self::Indefinite => None,
            Self::Custom(interval) => Some(interval),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_duration_is_four_seconds() {
        assert_eq!(
            SnackyDuration::Short.timeout(),
            Some(Duration::from_secs(4))
        );
    }

    #[test]
    fn long_duration_is_ten_seconds() {
        assert_eq!(
            SnackyDuration::Long.timeout(),
            Some(Duration::from_secs(10))
        );
    }

    #[test]
    fn indefinite_duration_has_no_timeout() {
        assert_eq!(SnackyDuration::Indefinite.timeout(), None);
    }

    #[test]
    fn custom_duration_with_valid_value_is_created_successfully() {
        let duration = SnackyDuration::custom(Duration::from_secs(6)).unwrap();
        assert_eq!(duration.timeout(), Some(Duration::from_secs(6)));
    }

    #[test]
    fn custom_duration_with_zero_value_fails_validation() {
        assert!(SnackyDuration::custom(Duration::ZERO).is_err());
    }

    #[test]
    fn custom_duration_with_one_millisecond_is_created_successfully() {
        let duration = SnackyDuration::custom(Duration::from_millis(1)).unwrap();
        assert_eq!(duration.timeout(), Some(Duration::from_millis(1)));
    }

    #[test]
    fn different_duration_kinds_are_not_equal() {
        assert_ne!(SnackyDuration::Short, SnackyDuration::Long);
        assert_ne!(SnackyDuration::Short.timeout(), SnackyDuration::Long.timeout());
    }

    #[test]
    fn custom_durations_compare_by_value() {
        let six_a = SnackyDuration::custom(Duration::from_secs(6)).unwrap();
        let six_b = SnackyDuration::custom(Duration::from_secs(6)).unwrap();
        let eight = SnackyDuration::custom(Duration::from_secs(8)).unwrap();

        assert_eq!(six_a, six_b);
        assert_ne!(six_a, eight);
    }
}
