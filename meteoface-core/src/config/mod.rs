//! Configuration types
//!
//! Board-agnostic configuration stored as postcard binary data.

pub mod types;

pub use types::*;
