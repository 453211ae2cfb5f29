//! **crouton** -- toast notifications for ratatui TUIs.
//!
//! This is the umbrella crate that re-exports everything from a single
//! dependency:
//!
//! ```toml
//! [dependencies]
//! crouton = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`crouton_core`] are available at the crate root
//!   ([`Notifier`], [`notify`], [`ToastRequest`], [`PromiseMessages`], etc.).
//! * The [`widgets`] module re-exports [`crouton_widgets`] (the
//!   [`ToastStack`](crouton_widgets::ToastStack) renderer).
//! * [`ratatui`] and [`tokio`] are re-exported so downstream crates do not
//!   need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use crouton::{notify, widgets::ToastStack};
//!
//! #[tokio::main]
//! async fn main() {
//!     let notifier = notify::initialize().unwrap();
//!     notify::success("Connected");
//!
//!     // in your draw loop:
//!     // ToastStack::new(&notifier.toasts()).render(frame, area);
//! }
//! ```

pub use crouton_core::*;
pub mod widgets {
    pub use crouton_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use ratatui;
pub use tokio;
