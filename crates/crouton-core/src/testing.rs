use crate::command::{Command, CommandInner};
use crate::manager::{ManagerOptions, Message, Toasts};
use crate::toast::{ToastId, ToastRequest};

/// A headless harness that drives a [`Toasts`] manager without the driver
/// task or a tokio runtime.
///
/// `TestManager` lets a plain `#[test]` exercise the full message cycle:
/// synchronous follow-up commands are collected and can be flushed with
/// [`drain_messages`](TestManager::drain_messages), while timer futures are
/// silently ignored -- deliver [`Message::Expired`] or [`Message::Remove`]
/// yourself to simulate a timer firing.
///
/// # Example
///
/// ```rust,ignore
/// use crouton_core::manager::Message;
/// use crouton_core::testing::TestManager;
///
/// let mut harness = TestManager::new();
/// let id = harness.show("Saved!");
/// assert_eq!(harness.toasts().visible_count(), 1);
///
/// harness.send(Message::Expired(id));   // auto-dismiss timer fires
/// harness.send(Message::Remove(id));    // exit window elapses
/// assert!(harness.toasts().is_empty());
/// ```
pub struct TestManager {
    toasts: Toasts,
    pending_messages: Vec<Message>,
}

impl TestManager {
    /// Create a harness around a manager with default options.
    pub fn new() -> Self {
        Self::with_options(ManagerOptions::default())
    }

    /// Create a harness around a manager with the given options.
    pub fn with_options(options: ManagerOptions) -> Self {
        Self {
            toasts: Toasts::with_options(options),
            pending_messages: Vec::new(),
        }
    }

    /// Show a toast, allocating an id the way the notifier would.
    pub fn show(&mut self, request: impl Into<ToastRequest>) -> ToastId {
        let id = ToastId::next();
        self.send(Message::Show(id, request.into()));
        id
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// Synchronous commands returned by the update are enqueued; call
    /// [`drain_messages`](TestManager::drain_messages) to flush them.
    pub fn send(&mut self, msg: Message) {
        let cmd = self.toasts.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Process all pending synchronous messages, repeatedly, until no new
    /// ones are generated.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.toasts.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// The manager under test, for assertions.
    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    /// Mutable access to the manager, for direct test setup.
    pub fn toasts_mut(&mut self) -> &mut Toasts {
        &mut self.toasts
    }

    fn collect_sync_messages(&mut self, cmd: Command<Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => {
                self.pending_messages.push(msg);
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
            // Timer futures can't be executed synchronously in tests
            CommandInner::Future(_) => {}
        }
    }
}

impl Default for TestManager {
    fn default() -> Self {
        Self::new()
    }
}
