//! The public handle for showing and dismissing toasts.

use crate::driver;
use crate::manager::{ManagerOptions, Message};
use crate::promise::PromiseMessages;
use crate::toast::{Toast, ToastId, ToastKind, ToastRequest};
use std::future::Future;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// A cloneable handle to a running toast manager.
///
/// `Notifier` is [`Clone`] and can be sent freely across threads and async
/// tasks; every clone addresses the same toast sequence. The manager itself
/// lives on a background task (see [`Notifier::spawn`]) that is the sole
/// mutator of the sequence, so calls from any number of tasks are serialized
/// without a lock.
///
/// All operations are fire-and-forget and infallible: requests are enqueued
/// on an unbounded channel and processed by the manager task. If the task is
/// gone, calls are silently dropped -- a notification not being shown is never
/// an error.
///
/// Most applications use the process-wide instance through the free functions
/// in [`notify`](crate::notify) instead of constructing their own.
#[derive(Clone)]
pub struct Notifier {
    msg_tx: mpsc::UnboundedSender<Message>,
    state_rx: watch::Receiver<Vec<Toast>>,
}

impl Notifier {
    /// Spawn a dedicated manager task with default options and return its
    /// handle.
    ///
    /// Must be called from within a tokio runtime context. The task runs for
    /// as long as the runtime does; there is no explicit teardown.
    pub fn spawn() -> Self {
        Self::spawn_with(ManagerOptions::default())
    }

    /// Spawn a dedicated manager task with the given options.
    pub fn spawn_with(options: ManagerOptions) -> Self {
        let (msg_tx, state_rx) = driver::spawn(options);
        Self { msg_tx, state_rx }
    }

    /// Show a toast and return its handle for later dismissal.
    ///
    /// Accepts anything convertible into a [`ToastRequest`]: a plain message
    /// string takes every default (info kind, 3 s auto-dismiss), while a
    /// built request carries its own kind, title, and duration.
    pub fn show(&self, request: impl Into<ToastRequest>) -> ToastId {
        let id = ToastId::next();
        self.send(Message::Show(id, request.into()));
        id
    }

    /// Show a success toast (✓, 3 s auto-dismiss).
    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.show(ToastRequest::new(message).kind(ToastKind::Success))
    }

    /// Show an error toast (✗, 5 s auto-dismiss -- errors linger longest).
    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.show(ToastRequest::new(message).kind(ToastKind::Error))
    }

    /// Show a warning toast (⚠, 4 s auto-dismiss).
    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.show(ToastRequest::new(message).kind(ToastKind::Warning))
    }

    /// Show an info toast (ℹ, 3 s auto-dismiss).
    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.show(ToastRequest::new(message).kind(ToastKind::Info))
    }

    /// Dismiss a toast by handle.
    ///
    /// Idempotent: dismissing an unknown or already-dismissed id does
    /// nothing. The toast transitions to its exit phase immediately and is
    /// removed from the sequence once the exit window elapses.
    pub fn dismiss(&self, id: ToastId) {
        self.send(Message::Dismiss(id));
    }

    /// Dismiss every currently-tracked toast.
    pub fn dismiss_all(&self) {
        self.send(Message::DismissAll);
    }

    /// Bridge an in-flight operation to a loading → success/error toast
    /// transition.
    ///
    /// Shows a manual-dismiss loading toast immediately, awaits the wrapped
    /// future, dismisses the loading toast, and shows the success or error
    /// message (resolved against the settled value at settle time). The
    /// original result is returned unchanged -- failures propagate to the
    /// caller in addition to the user-visible error toast, never instead of
    /// it.
    ///
    /// Concurrent `promise` calls are fully independent; each manages its own
    /// loading toast.
    pub async fn promise<F, T, E>(
        &self,
        future: F,
        messages: PromiseMessages<T, E>,
    ) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
    {
        let loading = self.show(
            ToastRequest::new(messages.loading.clone())
                .kind(ToastKind::Info)
                .duration(Duration::ZERO),
        );
        let outcome = future.await;
        self.dismiss(loading);
        match &outcome {
            Ok(value) => {
                self.success(messages.success.resolve(value));
            }
            Err(err) => {
                self.error(messages.error.resolve(err));
            }
        }
        outcome
    }

    /// A watch receiver over snapshots of the toast sequence, in insertion
    /// order (oldest first), exiting toasts included.
    ///
    /// This is the renderer seam: a UI loop awaits changes and redraws the
    /// container from the latest snapshot.
    pub fn watch(&self) -> watch::Receiver<Vec<Toast>> {
        self.state_rx.clone()
    }

    /// The latest published snapshot of the toast sequence.
    pub fn toasts(&self) -> Vec<Toast> {
        self.state_rx.borrow().clone()
    }

    fn send(&self, msg: Message) {
        if self.msg_tx.send(msg).is_err() {
            tracing::warn!("toast manager task is gone; notification dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::promise::TextSpec;
    use crate::toast::Phase;

    #[tokio::test(start_paused = true)]
    async fn show_publishes_one_record() {
        let notifier = Notifier::spawn();
        let id = notifier.show("hello");
        let mut rx = notifier.watch();
        let snapshot = rx.wait_for(|t| !t.is_empty()).await.unwrap().clone();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, id);
        assert_eq!(snapshot[0].message, "hello");
        assert_eq!(snapshot[0].kind, ToastKind::Info);
    }

    #[tokio::test(start_paused = true)]
    async fn success_toast_auto_removes_after_default_and_exit_window() {
        let notifier = Notifier::spawn();
        notifier.success("Saved!");

        let mut rx = notifier.watch();
        let snapshot = rx.wait_for(|t| !t.is_empty()).await.unwrap().clone();
        assert_eq!(snapshot[0].kind, ToastKind::Success);
        assert_eq!(snapshot[0].kind.icon(), '✓');
        assert_eq!(snapshot[0].duration, Duration::from_millis(3000));

        // paused time: the 3000 ms expiry and 300 ms exit window auto-advance
        rx.wait_for(|t| t.is_empty()).await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_toast_never_auto_dismisses() {
        let notifier = Notifier::spawn();
        let id = notifier.show(ToastRequest::new("sticky").duration(Duration::ZERO));
        let mut rx = notifier.watch();
        rx.wait_for(|t| t.len() == 1).await.unwrap();

        // give any stray timer ample room to fire
        tokio::time::sleep(Duration::from_secs(60)).await;
        let snapshot = rx.borrow().clone();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].phase, Phase::Visible);

        // manual dismissal still works
        notifier.dismiss(id);
        rx.wait_for(|t| t.is_empty()).await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_twice_removes_once() {
        let notifier = Notifier::spawn();
        let id = notifier.show(ToastRequest::new("x").duration(Duration::ZERO));
        let mut rx = notifier.watch();
        rx.wait_for(|t| !t.is_empty()).await.unwrap();

        notifier.dismiss(id);
        notifier.dismiss(id);
        rx.wait_for(|t| t.is_empty()).await.unwrap();
        assert!(notifier.toasts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn capacity_is_enforced_across_the_channel() {
        let notifier = Notifier::spawn_with(ManagerOptions {
            max_visible: 3,
            ..ManagerOptions::default()
        });
        for i in 0..6 {
            notifier.show(ToastRequest::new(format!("t{i}")).duration(Duration::ZERO));
        }
        let mut rx = notifier.watch();
        let snapshot = rx.wait_for(|t| t.len() == 6).await.unwrap().clone();
        let visible = snapshot.iter().filter(|t| !t.is_exiting()).count();
        assert!(visible <= 3, "visible = {visible}");
    }

    #[tokio::test(start_paused = true)]
    async fn promise_resolves_with_original_value_and_derived_message() {
        let notifier = Notifier::spawn();
        let result = notifier
            .promise(
                async { Ok::<_, String>(42) },
                PromiseMessages::default().success(TextSpec::derived(|n: &i32| format!("Got {n}"))),
            )
            .await;
        assert_eq!(result, Ok(42));

        let mut rx = notifier.watch();
        let snapshot = rx
            .wait_for(|t| t.iter().any(|toast| toast.kind == ToastKind::Success))
            .await
            .unwrap()
            .clone();
        let success = snapshot
            .iter()
            .find(|t| t.kind == ToastKind::Success)
            .unwrap();
        assert_eq!(success.message, "Got 42");
    }

    #[tokio::test(start_paused = true)]
    async fn promise_propagates_the_failure() {
        let notifier = Notifier::spawn();
        let result: Result<i32, String> = notifier
            .promise(
                async { Err("boom".to_owned()) },
                PromiseMessages::default(),
            )
            .await;
        assert_eq!(result, Err("boom".to_owned()));

        let mut rx = notifier.watch();
        let snapshot = rx
            .wait_for(|t| t.iter().any(|toast| toast.kind == ToastKind::Error))
            .await
            .unwrap()
            .clone();
        let error = snapshot.iter().find(|t| t.kind == ToastKind::Error).unwrap();
        assert_eq!(error.message, "Error");
    }

    #[tokio::test(start_paused = true)]
    async fn promise_shows_then_dismisses_the_loading_toast() {
        let notifier = Notifier::spawn();
        let (tx, rx_oneshot) = tokio::sync::oneshot::channel::<()>();

        let inner = notifier.clone();
        let task = tokio::spawn(async move {
            inner
                .promise(
                    async move {
                        rx_oneshot.await.ok();
                        Ok::<_, String>(())
                    },
                    PromiseMessages::default(),
                )
                .await
        });

        // while in flight: a manual-dismiss loading toast is visible
        let mut rx = notifier.watch();
        let snapshot = rx.wait_for(|t| !t.is_empty()).await.unwrap().clone();
        assert_eq!(snapshot[0].message, "Procesando...");
        assert_eq!(snapshot[0].duration, Duration::ZERO);

        tx.send(()).unwrap();
        task.await.unwrap().unwrap();

        // the loading toast goes away; the success toast remains until expiry
        let snapshot = rx
            .wait_for(|t| {
                !t.iter().any(|toast| toast.message == "Procesando..." && !toast.is_exiting())
            })
            .await
            .unwrap()
            .clone();
        assert!(snapshot.iter().any(|t| t.kind == ToastKind::Success));
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_promises_are_independent() {
        let notifier = Notifier::spawn();
        let a = notifier.promise(async { Ok::<_, ()>(1) }, PromiseMessages::default());
        let b = notifier.promise(
            async { Err::<(), _>("no".to_owned()) },
            PromiseMessages::default(),
        );
        let (ra, rb) = tokio::join!(a, b);
        assert_eq!(ra, Ok(1));
        assert_eq!(rb, Err("no".to_owned()));
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_all_clears_the_sequence() {
        let notifier = Notifier::spawn();
        for i in 0..3 {
            notifier.show(ToastRequest::new(format!("t{i}")).duration(Duration::ZERO));
        }
        let mut rx = notifier.watch();
        rx.wait_for(|t| t.len() == 3).await.unwrap();
        notifier.dismiss_all();
        rx.wait_for(|t| t.is_empty()).await.unwrap();
    }
}
