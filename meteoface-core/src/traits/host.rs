//! Host services consumed by the watch face

use meteoface_protocol::Dictionary;

use crate::clock::ClockStyle;

/// Errors reported when handing a message to the outbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutboxError {
    /// A previous message is still waiting to go out
    Busy,
    /// Message could not be framed
    Encode,
    /// Link write failed
    Transport,
}

/// Services the platform provides to the watch face
///
/// The face never blocks on these: `send` only enqueues, and delivery
/// results come back later as events.
pub trait Host {
    /// 12 or 24 hour display, as currently set by the wearer
    fn clock_style(&self) -> ClockStyle;

    /// Enqueue a message for the companion
    fn send(&mut self, message: &Dictionary) -> Result<(), OutboxError>;
}
