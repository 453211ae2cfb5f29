//! The toast manager state machine: ordered record sequence, capacity
//! policy, and timer-driven dismissal.
//!
//! [`Toasts`] is a pure state machine in the update-command style: every
//! mutation arrives as a [`Message`], and every side effect (auto-dismiss
//! timers, exit-window removals) leaves as a [`Command`]. The background
//! driver owns the only instance and executes the commands; see
//! [`notifier`](crate::notifier) for the public entry points.

use crate::command::Command;
use crate::toast::{Phase, Toast, ToastId, ToastRequest};
use std::time::Duration;

/// Configuration for a toast manager.
///
/// All fields have defaults. Use struct update syntax to override only what
/// you need:
///
/// ```rust,ignore
/// use crouton_core::manager::ManagerOptions;
///
/// let opts = ManagerOptions {
///     max_visible: 3,
///     ..ManagerOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ManagerOptions {
    /// Maximum number of simultaneously visible toasts (default: 5).
    /// Inserting beyond the limit dismisses the oldest visible toast.
    pub max_visible: usize,
    /// How long a dismissed toast lingers in its exit animation before it is
    /// removed from the sequence (default: 300 ms).
    pub exit_delay: Duration,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        Self {
            max_visible: 5,
            exit_delay: Duration::from_millis(300),
        }
    }
}

/// Messages processed by [`Toasts::update`].
#[derive(Debug)]
pub enum Message {
    /// Track a new toast under a pre-allocated id.
    Show(ToastId, ToastRequest),
    /// Begin dismissing a toast. No-op for unknown or already-exiting ids.
    Dismiss(ToastId),
    /// Begin dismissing every tracked toast.
    DismissAll,
    /// An auto-dismiss timer fired. Ignored unless the toast still exists
    /// and is still visible (the liveness guard against stale timers).
    Expired(ToastId),
    /// An exit window elapsed; drop the record from the sequence.
    Remove(ToastId),
}

/// The ordered toast sequence and its capacity policy.
///
/// Records are kept in insertion order (oldest first); that order is the
/// display contract. At most [`max_visible`](Self::max_visible) records are
/// in the [`Visible`](Phase::Visible) phase at any point after an update:
/// overflow dismisses the oldest surviving visible record through the same
/// path as a manual dismissal.
pub struct Toasts {
    entries: Vec<Toast>,
    max_visible: usize,
    exit_delay: Duration,
}

impl Toasts {
    /// Create a manager with default options.
    pub fn new() -> Self {
        Self::with_options(ManagerOptions::default())
    }

    /// Create a manager with the given options.
    pub fn with_options(options: ManagerOptions) -> Self {
        Self {
            entries: Vec::new(),
            max_visible: options.max_visible.max(1),
            exit_delay: options.exit_delay,
        }
    }

    /// All tracked toasts in insertion order, including exiting ones.
    pub fn toasts(&self) -> &[Toast] {
        &self.entries
    }

    /// Number of toasts in the visible phase.
    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|t| !t.is_exiting()).count()
    }

    /// Whether no toasts are tracked at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured visible-capacity limit.
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// The configured exit-animation window.
    pub fn exit_delay(&self) -> Duration {
        self.exit_delay
    }

    /// Process one message and return the follow-up side effects.
    pub fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Show(id, request) => self.show(id, request),
            Message::Dismiss(id) => self.begin_dismiss(id),
            Message::DismissAll => {
                let ids: Vec<ToastId> = self.entries.iter().map(|t| t.id).collect();
                Command::batch(ids.into_iter().map(|id| self.begin_dismiss(id)))
            }
            Message::Expired(id) => {
                // Liveness guard: only act if the toast is still the visible
                // record this timer was scheduled for. A manual dismissal in
                // the meantime leaves the record exiting (or gone), and the
                // stale timer must not dismiss anything.
                let live = self
                    .entries
                    .iter()
                    .any(|t| t.id == id && !t.is_exiting());
                if live {
                    self.begin_dismiss(id)
                } else {
                    Command::none()
                }
            }
            Message::Remove(id) => {
                self.entries.retain(|t| t.id != id);
                Command::none()
            }
        }
    }

    fn show(&mut self, id: ToastId, request: ToastRequest) -> Command<Message> {
        let toast = Toast::new(id, request);
        let duration = toast.duration;
        tracing::debug!(%id, kind = ?toast.kind, ?duration, "showing toast");
        self.entries.push(toast);

        let mut cmds = Vec::new();
        if duration > Duration::ZERO {
            cmds.push(Command::tick(duration, move |_| Message::Expired(id)));
        }

        // Capacity enforcement: evict the oldest surviving visible toasts
        // until we are back under the limit. Eviction is an ordinary
        // dismissal, so evicted toasts still play their exit animation.
        while self.visible_count() > self.max_visible {
            let Some(oldest) = self
                .entries
                .iter()
                .find(|t| !t.is_exiting())
                .map(|t| t.id)
            else {
                break;
            };
            cmds.push(self.begin_dismiss(oldest));
        }

        Command::batch(cmds)
    }

    /// The single dismissal path. Idempotent per id: a second call for the
    /// same toast (or a call for an unknown id) does nothing, so at most one
    /// removal is ever scheduled per record.
    fn begin_dismiss(&mut self, id: ToastId) -> Command<Message> {
        let Some(toast) = self
            .entries
            .iter_mut()
            .find(|t| t.id == id && !t.is_exiting())
        else {
            return Command::none();
        };
        tracing::debug!(%id, "dismissing toast");
        toast.phase = Phase::Exiting;
        Command::tick(self.exit_delay, move |_| Message::Remove(id))
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
