//! Core toast-notification manager for the **crouton** toolkit.
//!
//! `crouton-core` provides transient, auto-expiring user notifications for
//! terminal applications: a process-wide manager that accepts requests,
//! enforces a maximum-visible-count policy, schedules auto-dismissal, and
//! bridges in-flight async operations into loading → success/error toast
//! transitions.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`ToastRequest`] / [`ToastKind`] | Describe a notification (message, title, kind, duration) |
//! | [`Toast`] / [`ToastId`] | A tracked record and its opaque dismissal handle |
//! | [`Toasts`] | The ordered sequence, capacity policy, and dismissal state machine |
//! | [`Command`] | Side effect returned by an update (timers, follow-up messages) |
//! | [`Notifier`] | Cloneable handle to a running manager task |
//! | [`notify`] | The lazily-created process-wide instance, as free functions |
//! | [`PromiseMessages`] | Loading / success / error messages for [`Notifier::promise`] |
//! | [`TestManager`](testing::TestManager) | Headless harness for unit-testing the manager |
//!
//! # Architecture
//!
//! The manager is a pure state machine: every mutation arrives as a
//! [`manager::Message`] and every side effect leaves as a [`Command`]. A
//! background task (the driver) owns the only instance, executes the
//! commands, and publishes snapshots of the sequence over a
//! [`tokio::sync::watch`] channel. Renderers never touch the sequence
//! directly -- they redraw from the latest snapshot (see `crouton-widgets`
//! for a ready-made ratatui widget).
//!
//! Because the driver is the sole mutator, calls from any number of threads
//! or tasks are serialized without locking, and the ordering and capacity
//! invariants cannot be corrupted by concurrent shows and dismissals.
//!
//! # Quick example
//!
//! ```rust,ignore
//! use crouton_core::notify;
//! use crouton_core::promise::PromiseMessages;
//!
//! // fire-and-forget
//! notify::success("Saved!");
//!
//! // manual dismissal
//! let handle = notify::show(ToastRequest::new("Working").duration(Duration::ZERO));
//! notify::dismiss(handle);
//!
//! // bridge an async operation
//! let report = notify::promise(
//!     generate_report(),
//!     PromiseMessages::default()
//!         .loading("Generating report...")
//!         .success("Report ready")
//!         .error("Report failed"),
//! )
//! .await?;
//! ```

pub mod command;
mod driver;
pub mod manager;
pub mod notifier;
pub mod notify;
pub mod promise;
pub mod testing;
pub mod toast;

pub use command::Command;
pub use manager::{ManagerOptions, Toasts};
pub use notifier::Notifier;
pub use notify::InitError;
pub use promise::{PromiseMessages, TextSpec};
pub use toast::{Phase, Toast, ToastId, ToastKind, ToastRequest};
