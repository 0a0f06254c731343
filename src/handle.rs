// SPDX-License-Identifier: MPL-2.0
//! The live, resolvable unit of work behind one displayed snackbar.

use crate::content::SnackyContent;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Unique identifier for a displayed snackbar.
///
/// Rendering hosts use it as the re-render key: same id, same visual
/// instance, which is what lets enter/exit transitions be driven externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnackyId(u64);

impl SnackyId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SnackyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a snackbar's display lifecycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackyOutcome {
    /// The main action was performed.
    MainAction,
    /// The secondary action was performed.
    SecondaryAction,
    /// Dismissed, either explicitly or by the auto-dismiss timer.
    Dismissed,
}

/// Handle to the snackbar currently occupying the display slot.
///
/// A handle resolves at most once. The first of [`perform_main_action`],
/// [`perform_secondary_action`] and [`dismiss`] (the controller's timeout
/// path goes through [`dismiss`]) wins, runs the matching
/// content callback, and wakes the `show()` caller. Every later call, on any
/// of the three operations, is a silent no-op, so a UI layer may wire several
/// affordances to the same handle without coordinating among them.
///
/// Handles are cheap to clone; clones share identity and resolution state.
///
/// [`perform_main_action`]: SnackyHandle::perform_main_action
/// [`perform_secondary_action`]: SnackyHandle::perform_secondary_action
/// [`dismiss`]: SnackyHandle::dismiss
#[derive(Clone)]
pub struct SnackyHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    id: SnackyId,
    content: Arc<dyn SnackyContent>,
    // Taken by the first resolution; `None` ever after.
    resolver: Mutex<Option<oneshot::Sender<SnackyOutcome>>>,
}

impl SnackyHandle {
    /// Creates a handle plus the receiver the controller awaits.
    pub(crate) fn new(
        content: Arc<dyn SnackyContent>,
    ) -> (Self, oneshot::Receiver<SnackyOutcome>) {
        let (sender, receiver) = oneshot::channel();
        let handle = Self {
            inner: Arc::new(HandleInner {
                id: SnackyId::next(),
                content,
                resolver: Mutex::new(Some(sender)),
            }),
        };
        (handle, receiver)
    }

    /// This snackbar's identity.
    #[must_use]
    pub fn id(&self) -> SnackyId {
        self.inner.id
    }

    /// The content this handle displays.
    #[must_use]
    pub fn content(&self) -> &Arc<dyn SnackyContent> {
        &self.inner.content
    }

    /// Performs the main action: runs the content's main-action callback and
    /// resolves the handle. No-op if already resolved.
    pub fn perform_main_action(&self) {
        self.resolve(SnackyOutcome::MainAction, |content| {
            content.on_main_action();
        });
    }

    /// Performs the secondary action: runs the content's secondary-action
    /// callback and resolves the handle. No-op if already resolved.
    pub fn perform_secondary_action(&self) {
        self.resolve(SnackyOutcome::SecondaryAction, |content| {
            content.on_secondary_action();
        });
    }

    /// Dismisses the snackbar: runs the content's dismiss callback and
    /// resolves the handle. No-op if already resolved.
    pub fn dismiss(&self) {
        self.resolve(SnackyOutcome::Dismissed, |content| {
            content.on_dismiss();
        });
    }

    /// Whether this handle has already resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.inner
            .resolver
            .lock()
            .map(|slot| slot.is_none())
            .unwrap_or(true)
    }

    // Resolution goes through a take-once slot: only the caller that takes
    // the sender runs the callback, so later calls from any of the three
    // operations have no observable effect.
    fn resolve(&self, outcome: SnackyOutcome, callback: fn(&dyn SnackyContent)) {
        let sender = self
            .inner
            .resolver
            .lock()
            .ok()
            .and_then(|mut slot| slot.take());

        if let Some(sender) = sender {
            callback(self.inner.content.as_ref());
            // The receiver is gone when the `show()` future was cancelled
            // while this handle was active; resolution is then moot.
            let _ = sender.send(outcome);
            tracing::trace!(id = %self.inner.id, ?outcome, "snackbar handle resolved");
        }
    }
}

impl PartialEq for SnackyHandle {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for SnackyHandle {}

impl std::hash::Hash for SnackyHandle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Debug for SnackyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnackyHandle")
            .field("id", &self.inner.id)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}
