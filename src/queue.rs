// SPDX-License-Identifier: MPL-2.0
//! Fair admission queue for the single display slot.
//!
//! Only one `show()` call may occupy the slot at a time. A suspending,
//! FIFO-fair mutex is the whole queueing story: waiters are admitted in
//! arrival order, and a waiter whose future is dropped leaves the queue
//! without disturbing the order of the rest.

use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Serializes access to the display slot, first come first served.
#[derive(Clone, Debug, Default)]
pub(crate) struct ShowQueue {
    inner: Arc<Mutex<()>>,
}

impl ShowQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Suspends until the caller is at the head of the queue and no other
    /// holder is active, then grants exclusive holder status until the
    /// returned permit is dropped.
    pub(crate) async fn acquire(&self) -> ShowPermit {
        ShowPermit {
            _guard: self.inner.clone().lock_owned().await,
        }
    }
}

/// Exclusive right to occupy the display slot.
///
/// Dropping the permit relinquishes holder status and admits the next queued
/// caller. Tying the release to `Drop` makes it happen exactly once on every
/// exit path out of `show()`, cancelled or not.
#[derive(Debug)]
pub(crate) struct ShowPermit {
    _guard: OwnedMutexGuard<()>,
}
