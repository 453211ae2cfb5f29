//! Toast domain types: kinds, requests, ids, and the tracked record.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Severity / visual category of a toast.
///
/// Each kind maps to a fixed icon glyph and a default auto-dismiss duration.
/// Errors linger longest so users have time to read them; this is deliberate
/// policy, not an accident of defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// A completed operation or positive outcome.
    Success,
    /// A failure the user should notice.
    Error,
    /// A non-critical issue worth flagging.
    Warning,
    /// Neutral information. This is the default kind.
    #[default]
    Info,
}

impl ToastKind {
    /// The icon glyph shown next to the message.
    pub fn icon(self) -> char {
        match self {
            ToastKind::Success => '\u{2713}', // ✓
            ToastKind::Error => '\u{2717}',   // ✗
            ToastKind::Warning => '\u{26A0}', // ⚠
            ToastKind::Info => '\u{2139}',    // ℹ
        }
    }

    /// Default auto-dismiss duration for this kind.
    ///
    /// Success and info toasts last 3 seconds, warnings 4, errors 5.
    pub fn default_duration(self) -> Duration {
        match self {
            ToastKind::Success | ToastKind::Info => Duration::from_millis(3000),
            ToastKind::Warning => Duration::from_millis(4000),
            ToastKind::Error => Duration::from_millis(5000),
        }
    }
}

/// A unique, process-wide handle for a single toast.
///
/// Ids are drawn from a monotonic counter and never reused, so a stale id
/// held after dismissal can never address a different toast. Dismissing an
/// unknown id is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

impl ToastId {
    /// Allocate a fresh id. Safe to call from any thread.
    pub fn next() -> Self {
        ToastId(NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// A request to show a toast, before it becomes a tracked record.
///
/// Built either from a plain message string (via `From<&str>` / `From<String>`,
/// taking all defaults) or with the builder methods for kind, title, and
/// duration:
///
/// ```rust,ignore
/// use std::time::Duration;
/// use crouton_core::toast::{ToastKind, ToastRequest};
///
/// // plain message, info kind, 3s auto-dismiss:
/// let req: ToastRequest = "Saved!".into();
///
/// // fully specified, manual dismiss:
/// let req = ToastRequest::new("Disk full")
///     .kind(ToastKind::Error)
///     .title("Upload failed")
///     .duration(Duration::ZERO);
/// ```
///
/// A zero duration means "manual dismiss only"; leaving the duration unset
/// uses the kind's default. An empty message is permitted and rendered as-is.
#[derive(Debug, Clone)]
pub struct ToastRequest {
    /// The body text. Required (but may be empty).
    pub message: String,
    /// Optional bold title rendered before the message.
    pub title: Option<String>,
    /// Visual category. Defaults to [`ToastKind::Info`].
    pub kind: ToastKind,
    /// Auto-dismiss duration. `None` = kind default, zero = manual only.
    pub duration: Option<Duration>,
}

impl ToastRequest {
    /// Create a request with the given message and all other fields defaulted.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
            kind: ToastKind::default(),
            duration: None,
        }
    }

    /// Set the toast kind.
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set an optional title line.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set an explicit auto-dismiss duration. `Duration::ZERO` disables
    /// auto-dismissal entirely.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// The effective duration: the explicit one if set, otherwise the kind's
    /// default.
    pub fn resolved_duration(&self) -> Duration {
        self.duration.unwrap_or_else(|| self.kind.default_duration())
    }
}

impl From<&str> for ToastRequest {
    fn from(message: &str) -> Self {
        ToastRequest::new(message)
    }
}

impl From<String> for ToastRequest {
    fn from(message: String) -> Self {
        ToastRequest::new(message)
    }
}

/// Lifecycle phase of a tracked toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// On screen, counts against the visible capacity.
    Visible,
    /// Dismissed and playing its exit animation; removed once the exit
    /// window elapses. Does not count against capacity and cannot be
    /// dismissed again.
    Exiting,
}

/// A toast tracked by the manager, from creation until removal.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique handle, immutable for the record's lifetime.
    pub id: ToastId,
    /// Visual category.
    pub kind: ToastKind,
    /// Optional title line.
    pub title: Option<String>,
    /// Body text.
    pub message: String,
    /// When the record was created.
    pub created_at: Instant,
    /// Effective auto-dismiss duration (zero = manual only).
    pub duration: Duration,
    /// Current lifecycle phase.
    pub phase: Phase,
}

impl Toast {
    pub(crate) fn new(id: ToastId, request: ToastRequest) -> Self {
        let duration = request.resolved_duration();
        Self {
            id,
            kind: request.kind,
            title: request.title,
            message: request.message,
            created_at: Instant::now(),
            duration,
            phase: Phase::Visible,
        }
    }

    /// Whether this toast is mid exit animation.
    pub fn is_exiting(&self) -> bool {
        self.phase == Phase::Exiting
    }
}
