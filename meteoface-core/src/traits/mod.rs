//! Host abstraction traits
//!
//! These traits define the interface between the watch-face logic
//! and the platform that runs it.

pub mod host;

pub use host::{Host, OutboxError};
