// SPDX-License-Identifier: MPL-2.0
//! Queueing and lifecycle controller for snackbars.
//!
//! [`SnackyHostState`] guarantees at most one snackbar is visible at a time,
//! admits concurrent `show` calls in arrival order, drives timed
//! auto-dismissal, and exposes the current occupant of the display slot as a
//! watchable value for a rendering host.

use crate::content::SnackyContent;
use crate::duration::SnackyDuration;
use crate::handle::{SnackyHandle, SnackyOutcome};
use crate::queue::{ShowPermit, ShowQueue};
use crate::ui::default_snackbar::DefaultSnackbar;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{oneshot, watch};

/// Controller state for a snackbar host.
///
/// Cheap to clone; clones share the same queue and display slot. Typically
/// one instance lives in the application state, clones move into the async
/// `show` tasks, and the rendering host reads [`current`] / [`subscribe`].
///
/// [`current`]: SnackyHostState::current
/// [`subscribe`]: SnackyHostState::subscribe
#[derive(Clone)]
pub struct SnackyHostState {
    inner: Arc<HostInner>,
}

struct HostInner {
    id: u64,
    queue: ShowQueue,
    slot: watch::Sender<Option<SnackyHandle>>,
}

impl Default for SnackyHostState {
    fn default() -> Self {
        Self::new()
    }
}

impl SnackyHostState {
    #[must_use]
    pub fn new() -> Self {
        static HOST_COUNTER: AtomicU64 = AtomicU64::new(0);
        let (slot, _) = watch::channel(None);
        Self {
            inner: Arc::new(HostInner {
                id: HOST_COUNTER.fetch_add(1, Ordering::Relaxed),
                queue: ShowQueue::new(),
                slot,
            }),
        }
    }

    /// The snackbar currently occupying the display slot, if any.
    #[must_use]
    pub fn current(&self) -> Option<SnackyHandle> {
        self.inner.slot.borrow().clone()
    }

    /// Watches the display slot. The receiver yields on every occupancy
    /// change; rendering hosts use it to re-render.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<SnackyHandle>> {
        self.inner.slot.subscribe()
    }

    /// Identifies this host across clones. Rendering hosts key their event
    /// subscriptions on it.
    pub(crate) fn host_id(&self) -> u64 {
        self.inner.id
    }

    /// Shows `content`, or queues it behind whatever is already showing, and
    /// suspends until the snackbar has disappeared again.
    ///
    /// At most one snackbar is visible at a time; concurrent callers are
    /// admitted first come first served. Returns how the snackbar was
    /// resolved, and only after the display slot has been cleared and the
    /// next queued caller (if any) admitted.
    ///
    /// Dropping the returned future while still queued withdraws the request
    /// without side effects. Dropping it while the snackbar is showing
    /// clears the slot and admits the next caller all the same.
    pub async fn show<C>(&self, content: C) -> SnackyOutcome
    where
        C: SnackyContent + 'static,
    {
        self.show_content(Arc::new(content)).await
    }

    /// Trait-object form of [`show`](SnackyHostState::show) for content that
    /// is already shared.
    pub async fn show_content(&self, content: Arc<dyn SnackyContent>) -> SnackyOutcome {
        tracing::trace!(host = self.inner.id, "snackbar queued");
        let permit = self.inner.queue.acquire().await;

        let (handle, resolution) = SnackyHandle::new(Arc::clone(&content));
        let guard = ActiveGuard {
            inner: Arc::clone(&self.inner),
            _permit: permit,
        };
        self.inner.slot.send_replace(Some(handle.clone()));
        tracing::debug!(id = %handle.id(), "snackbar displayed");

        let outcome = Self::resolved(&handle, resolution, content.duration()).await;

        // Clear the slot, then admit the next caller.
        drop(guard);
        tracing::debug!(id = %handle.id(), ?outcome, "snackbar resolved");
        outcome
    }

    /// Shows a plain text message with the default look and a
    /// [`SnackyDuration::Short`] duration. For action labels, callbacks or
    /// custom durations, build a [`DefaultSnackbar`] and pass it to
    /// [`show`](SnackyHostState::show).
    pub async fn show_message(&self, message: impl Into<String>) -> SnackyOutcome {
        self.show(DefaultSnackbar::new(message)).await
    }

    // Waits for the handle to resolve, dismissing it if the duration's timer
    // wins the race. The timer is dropped as soon as any other path resolves
    // the handle, and a timer firing against an already-resolved handle is a
    // no-op, so the slot can never be cleared on behalf of a later occupant.
    async fn resolved(
        handle: &SnackyHandle,
        mut resolution: oneshot::Receiver<SnackyOutcome>,
        duration: SnackyDuration,
    ) -> SnackyOutcome {
        // The receiver cannot fail while `handle` keeps the sender alive;
        // a lost sender is treated as a dismissal all the same.
        match duration.timeout() {
            None => resolution.await.unwrap_or(SnackyOutcome::Dismissed),
            Some(timeout) => {
                tokio::select! {
                    outcome = &mut resolution => outcome.unwrap_or(SnackyOutcome::Dismissed),
                    _ = tokio::time::sleep(timeout) => {
                        handle.dismiss();
                        resolution.await.unwrap_or(SnackyOutcome::Dismissed)
                    }
                }
            }
        }
    }
}

impl fmt::Debug for SnackyHostState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnackyHostState")
            .field("current", &self.current())
            .finish()
    }
}

/// Clears the display slot and only then releases the admission permit, on
/// every exit path out of `show_content`, including cancellation of the
/// caller's future while the snackbar is active.
struct ActiveGuard {
    inner: Arc<HostInner>,
    _permit: ShowPermit,
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        self.inner.slot.send_replace(None);
        // `_permit` drops after this body runs, admitting the next caller.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::host;
    use iced::Element;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    struct TestContent {
        duration: SnackyDuration,
        main: Arc<AtomicUsize>,
        dismissed: Arc<AtomicUsize>,
    }

    impl TestContent {
        fn new(duration: SnackyDuration) -> Self {
            Self {
                duration,
                main: Arc::new(AtomicUsize::new(0)),
                dismissed: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl SnackyContent for TestContent {
        fn duration(&self) -> SnackyDuration {
            self.duration
        }

        fn on_main_action(&self) {
            self.main.fetch_add(1, Ordering::SeqCst);
        }

        fn on_dismiss(&self) {
            self.dismissed.fetch_add(1, Ordering::SeqCst);
        }

        fn view(&self, _handle: &SnackyHandle) -> Element<'static, host::Message> {
            iced::widget::text("").into()
        }
    }

    // Lets spawned `show` tasks run through admission and publication.
    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn initial_state_has_no_current_snackbar() {
        let host = SnackyHostState::new();
        assert!(host.current().is_none());
    }

    #[tokio::test]
    async fn show_publishes_the_handle_into_the_slot() {
        let host = SnackyHostState::new();

        let shown = {
            let host = host.clone();
            tokio::spawn(async move {
                host.show(TestContent::new(SnackyDuration::Indefinite)).await
            })
        };
        settle().await;

        let handle = host.current().expect("snackbar should be showing");
        assert!(!handle.is_resolved());

        handle.dismiss();
        assert_eq!(shown.await.unwrap(), SnackyOutcome::Dismissed);
    }

    #[tokio::test]
    async fn slot_clears_after_dismissal_before_show_returns() {
        let host = SnackyHostState::new();

        let shown = {
            let host = host.clone();
            tokio::spawn(async move { host.show_message("Test message").await })
        };
        settle().await;

        host.current().expect("snackbar should be showing").dismiss();
        shown.await.unwrap();

        assert!(host.current().is_none());
    }

    #[tokio::test]
    async fn show_message_defaults_to_short_duration() {
        let host = SnackyHostState::new();

        let shown = {
            let host = host.clone();
            tokio::spawn(async move { host.show_message("Info").await })
        };
        settle().await;

        let handle = host.current().expect("snackbar should be showing");
        assert_eq!(handle.content().duration(), SnackyDuration::Short);

        handle.dismiss();
        shown.await.unwrap();
    }

    #[tokio::test]
    async fn main_action_resolves_with_the_callback_applied() {
        let host = SnackyHostState::new();
        let content = TestContent::new(SnackyDuration::Indefinite);
        let main = Arc::clone(&content.main);
        let dismissed = Arc::clone(&content.dismissed);

        let shown = {
            let host = host.clone();
            tokio::spawn(async move { host.show(content).await })
        };
        settle().await;

        host.current()
            .expect("snackbar should be showing")
            .perform_main_action();

        assert_eq!(shown.await.unwrap(), SnackyOutcome::MainAction);
        assert_eq!(main.load(Ordering::SeqCst), 1);
        assert_eq!(dismissed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn queued_snackbars_are_shown_in_submission_order() {
        let host = SnackyHostState::new();

        let first_shown = {
            let host = host.clone();
            tokio::spawn(async move {
                host.show(TestContent::new(SnackyDuration::Indefinite)).await
            })
        };
        settle().await;

        let second_shown = {
            let host = host.clone();
            tokio::spawn(async move {
                host.show(TestContent::new(SnackyDuration::Indefinite)).await
            })
        };
        settle().await;

        let first = host.current().expect("first snackbar should be showing");
        first.dismiss();
        assert_eq!(first_shown.await.unwrap(), SnackyOutcome::Dismissed);
        settle().await;

        let second = host.current().expect("second snackbar should follow");
        assert_ne!(first, second);

        second.dismiss();
        assert_eq!(second_shown.await.unwrap(), SnackyOutcome::Dismissed);
        assert!(host.current().is_none());
    }

    #[tokio::test]
    async fn cancelled_queued_request_never_becomes_active() {
        let host = SnackyHostState::new();

        let first_shown = {
            let host = host.clone();
            tokio::spawn(async move {
                host.show(TestContent::new(SnackyDuration::Indefinite)).await
            })
        };
        settle().await;
        let first = host.current().expect("first snackbar should be showing");

        let second_shown = {
            let host = host.clone();
            tokio::spawn(async move {
                host.show(TestContent::new(SnackyDuration::Indefinite)).await
            })
        };
        settle().await;

        let third_content = TestContent::new(SnackyDuration::Indefinite);
        let third_main = Arc::clone(&third_content.main);
        let third_shown = {
            let host = host.clone();
            tokio::spawn(async move { host.show(third_content).await })
        };
        settle().await;

        // Withdraw the second request while it is still queued.
        second_shown.abort();
        settle().await;

        // The active snackbar is untouched by the withdrawal.
        assert_eq!(host.current().as_ref(), Some(&first));

        first.dismiss();
        settle().await;

        // The third request is admitted next, in original order.
        host.current()
            .expect("third snackbar should be showing")
            .perform_main_action();
        assert_eq!(third_shown.await.unwrap(), SnackyOutcome::MainAction);
        assert_eq!(third_main.load(Ordering::SeqCst), 1);
        assert!(second_shown.await.unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn cancelling_the_active_caller_clears_the_slot_and_admits_the_next() {
        let host = SnackyHostState::new();

        let first_shown = {
            let host = host.clone();
            tokio::spawn(async move {
                host.show(TestContent::new(SnackyDuration::Indefinite)).await
            })
        };
        settle().await;
        assert!(host.current().is_some());

        let second_shown = {
            let host = host.clone();
            tokio::spawn(async move {
                host.show(TestContent::new(SnackyDuration::Indefinite)).await
            })
        };
        settle().await;

        first_shown.abort();
        settle().await;

        // Cleanup ran: the slot was cleared and the queue released, so the
        // second snackbar is now showing.
        let second = host.current().expect("second snackbar should be showing");
        second.dismiss();
        assert_eq!(second_shown.await.unwrap(), SnackyOutcome::Dismissed);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_duration_auto_dismisses_no_earlier_than_the_interval() {
        let host = SnackyHostState::new();
        let content = TestContent::new(
            SnackyDuration::custom(Duration::from_secs(5)).unwrap(),
        );
        let dismissed = Arc::clone(&content.dismissed);

        let shown = {
            let host = host.clone();
            tokio::spawn(async move { host.show(content).await })
        };
        settle().await;
        assert!(host.current().is_some());

        // Just before the interval elapses the snackbar is still showing.
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(host.current().is_some());

        // Once it elapses, the controller dismisses on the caller's behalf.
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(shown.await.unwrap(), SnackyOutcome::Dismissed);
        assert_eq!(dismissed.load(Ordering::SeqCst), 1);
        assert!(host.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn indefinite_duration_never_auto_dismisses() {
        let host = SnackyHostState::new();

        let shown = {
            let host = host.clone();
            tokio::spawn(async move {
                host.show(TestContent::new(SnackyDuration::Indefinite)).await
            })
        };
        settle().await;

        tokio::time::sleep(Duration::from_secs(60 * 60 * 24)).await;
        let handle = host.current().expect("snackbar should still be showing");

        handle.dismiss();
        assert_eq!(shown.await.unwrap(), SnackyOutcome::Dismissed);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_resolution_cancels_the_auto_dismiss_timer() {
        let host = SnackyHostState::new();
        let content = TestContent::new(
            SnackyDuration::custom(Duration::from_secs(5)).unwrap(),
        );
        let main = Arc::clone(&content.main);
        let dismissed = Arc::clone(&content.dismissed);

        let shown = {
            let host = host.clone();
            tokio::spawn(async move { host.show(content).await })
        };
        settle().await;

        host.current()
            .expect("snackbar should be showing")
            .perform_main_action();
        assert_eq!(shown.await.unwrap(), SnackyOutcome::MainAction);

        // Long after the would-be timeout, the dismiss path never ran.
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(main.load(Ordering::SeqCst), 1);
        assert_eq!(dismissed.load(Ordering::SeqCst), 0);
    }
}
