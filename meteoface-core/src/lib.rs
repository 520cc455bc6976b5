//! Board-agnostic core logic for the watch face
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Clock formatting (time and date layers)
//! - Weather decoding from companion messages
//! - Application state and event dispatch
//! - Host abstraction traits (clock style, outbox)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod state;
pub mod text;
pub mod traits;
pub mod weather;

pub use clock::ClockStyle;
pub use config::WatchConfig;
pub use state::{AppState, Diagnostic, Event, Outcome, Repaint};
pub use traits::{Host, OutboxError};
