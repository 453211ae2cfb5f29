//! The process-wide toast manager and its free-function API.
//!
//! Most applications want exactly one toast container for the whole process.
//! This module owns that instance: it is created lazily on first use, never
//! torn down, and shared by every caller. The free functions mirror the
//! methods on [`Notifier`]:
//!
//! ```rust,ignore
//! use crouton_core::notify;
//!
//! let handle = notify::success("Saved!");
//! notify::dismiss(handle);
//!
//! let value = notify::promise(fetch(), PromiseMessages::default()).await?;
//! ```
//!
//! The manager task needs a tokio runtime to run on, so lazy creation can
//! fail in exactly one way: being called outside any runtime context. The
//! `show`-family functions treat that as "notification not shown" -- they log
//! a warning and return a handle that never matches a tracked toast, rather
//! than failing. Call [`initialize`] explicitly to surface the error instead.

use crate::manager::ManagerOptions;
use crate::notifier::Notifier;
use crate::promise::PromiseMessages;
use crate::toast::{ToastId, ToastRequest};
use std::future::Future;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Notifier> = OnceLock::new();

/// Errors from initializing the process-wide toast manager.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// [`initialize`] was called outside a tokio runtime context, so the
    /// manager task has nowhere to run.
    #[error("toast manager requires a running tokio runtime")]
    NoRuntime,
}

/// Initialize the process-wide toast manager.
///
/// Idempotent: the first call spawns the manager task with default options;
/// every later call returns the existing instance untouched.
pub fn initialize() -> Result<&'static Notifier, InitError> {
    if let Some(notifier) = GLOBAL.get() {
        return Ok(notifier);
    }
    tokio::runtime::Handle::try_current().map_err(|_| InitError::NoRuntime)?;
    Ok(GLOBAL.get_or_init(Notifier::spawn))
}

/// Initialize the process-wide toast manager with custom options.
///
/// Options only take effect on the call that actually creates the instance;
/// if the manager already exists it is returned as-is.
pub fn initialize_with(options: ManagerOptions) -> Result<&'static Notifier, InitError> {
    if let Some(notifier) = GLOBAL.get() {
        return Ok(notifier);
    }
    tokio::runtime::Handle::try_current().map_err(|_| InitError::NoRuntime)?;
    Ok(GLOBAL.get_or_init(|| Notifier::spawn_with(options)))
}

fn global() -> Option<&'static Notifier> {
    match initialize() {
        Ok(notifier) => Some(notifier),
        Err(err) => {
            tracing::warn!(%err, "toast dropped");
            None
        }
    }
}

/// Show a toast on the process-wide manager. See [`Notifier::show`].
pub fn show(request: impl Into<ToastRequest>) -> ToastId {
    match global() {
        Some(notifier) => notifier.show(request),
        None => ToastId::next(),
    }
}

/// Show a success toast. See [`Notifier::success`].
pub fn success(message: impl Into<String>) -> ToastId {
    match global() {
        Some(notifier) => notifier.success(message),
        None => ToastId::next(),
    }
}

/// Show an error toast. See [`Notifier::error`].
pub fn error(message: impl Into<String>) -> ToastId {
    match global() {
        Some(notifier) => notifier.error(message),
        None => ToastId::next(),
    }
}

/// Show a warning toast. See [`Notifier::warning`].
pub fn warning(message: impl Into<String>) -> ToastId {
    match global() {
        Some(notifier) => notifier.warning(message),
        None => ToastId::next(),
    }
}

/// Show an info toast. See [`Notifier::info`].
pub fn info(message: impl Into<String>) -> ToastId {
    match global() {
        Some(notifier) => notifier.info(message),
        None => ToastId::next(),
    }
}

/// Dismiss a toast on the process-wide manager. See [`Notifier::dismiss`].
pub fn dismiss(id: ToastId) {
    if let Some(notifier) = global() {
        notifier.dismiss(id);
    }
}

/// Dismiss every toast on the process-wide manager.
pub fn dismiss_all() {
    if let Some(notifier) = global() {
        notifier.dismiss_all();
    }
}

/// Bridge an operation to toasts on the process-wide manager. See
/// [`Notifier::promise`].
///
/// Being `async`, this always runs inside a runtime, so the manager is
/// created on first use if needed and the wrapped result is returned
/// unchanged either way.
pub async fn promise<F, T, E>(future: F, messages: PromiseMessages<T, E>) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    match global() {
        Some(notifier) => notifier.promise(future, messages).await,
        None => future.await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_outside_a_runtime_fails() {
        // no #[tokio::test]: this must run without a runtime on the thread
        let result = initialize();
        match result {
            Err(InitError::NoRuntime) => {}
            Ok(_) => {
                // another test on this process may have initialized the
                // global first; that is the idempotent path, also valid
            }
        }
    }

    #[test]
    fn show_without_a_runtime_still_returns_a_handle() {
        if GLOBAL.get().is_some() {
            return; // global already spawned by a concurrent test
        }
        let id = show("dropped");
        // the toast was not shown, but the call did not fail
        assert!(id.to_string().starts_with("toast-"));
    }

    #[tokio::test]
    async fn initialize_is_idempotent() {
        let first = initialize().unwrap() as *const Notifier;
        let second = initialize().unwrap() as *const Notifier;
        assert_eq!(first, second);
    }
}
