//! Ratatui rendering for **crouton** toast notifications.
//!
//! The manager in `crouton-core` never draws anything itself -- it publishes
//! snapshots of the toast sequence, and this crate turns a snapshot into
//! terminal output.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`toast_stack`] | Stateless stack widget: one row per toast, kind-colored, insertion order |

pub mod toast_stack;

pub use toast_stack::{ToastStack, ToastStackStyle};
