//! Companion Link Protocol
//!
//! This crate defines the UART link between the watch and its companion
//! bridge (a phone or a serial radio module). The companion owns every
//! network concern; the watch only asks for weather and renders the answer.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬───────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CRC-8 │
//! │ 1B    │ 1B     │ 1B   │ 0–250B      │ 1B    │
//! └───────┴────────┴──────┴─────────────┴───────┘
//! ```
//!
//! The payload of every frame is a key/value [`Dictionary`]. Delivery is
//! best effort: no acknowledgements, no retries, no request identifiers.

#![no_std]
#![deny(unsafe_code)]

pub mod dict;
pub mod frame;
pub mod messages;

pub use dict::{DictError, Dictionary, Tuple, Value, ValueKind};
pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};
pub use messages::{keys, weather_request, MessageError, MSG_DICTIONARY};
