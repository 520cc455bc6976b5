//! Watch-face state and event dispatch
//!
//! One owned `AppState` receives every host event through a single
//! `dispatch` call. Dispatch is deterministic and run-to-completion.

pub mod app;
pub mod events;
pub mod strings;

pub use app::{AppState, Diagnostic, Outcome, Repaint, MAX_DIAGNOSTICS};
pub use events::{DropReason, Event};
pub use strings::DisplayStrings;
