//! Events delivered to the watch face

use chrono::NaiveDateTime;
use meteoface_protocol::{Dictionary, FrameError, MessageError};

use crate::traits::OutboxError;

/// Why an inbound message never reached the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DropReason {
    /// Bytes on the link did not form a valid frame
    Framing(FrameError),
    /// Frame was valid but its payload was not a dictionary
    Malformed(MessageError),
    /// Event queue had no room for the message
    InboxFull,
    /// Link read failed
    Transport,
}

/// Everything the host can tell the watch face
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Application started; carries the local time at launch
    Launch(NaiveDateTime),
    /// Face window became visible
    WindowLoad,
    /// Face window is going away
    WindowUnload,
    /// Minute boundary; carries the local time of the tick
    Tick(NaiveDateTime),
    /// Inbound message from the companion
    MessageReceived(Dictionary),
    /// Inbound message lost before decoding
    MessageDropped(DropReason),
    /// Outbound message could not be delivered
    SendFailed(OutboxError),
    /// Outbound message left the device
    SendSucceeded,
}

impl Event {
    /// Check if this event comes from the clock
    pub fn is_time_event(&self) -> bool {
        matches!(self, Event::Launch(_) | Event::Tick(_))
    }

    /// Check if this event comes from the message channel
    pub fn is_message_event(&self) -> bool {
        matches!(
            self,
            Event::MessageReceived(_)
                | Event::MessageDropped(_)
                | Event::SendFailed(_)
                | Event::SendSucceeded
        )
    }

    /// Check if this event reports a failure
    pub fn is_error_event(&self) -> bool {
        matches!(self, Event::MessageDropped(_) | Event::SendFailed(_))
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Event {
    fn format(&self, f: defmt::Formatter) {
        use chrono::Timelike;

        match self {
            Event::Launch(t) => defmt::write!(f, "Launch({=u32}:{=u32})", t.hour(), t.minute()),
            Event::WindowLoad => defmt::write!(f, "WindowLoad"),
            Event::WindowUnload => defmt::write!(f, "WindowUnload"),
            Event::Tick(t) => defmt::write!(f, "Tick({=u32}:{=u32})", t.hour(), t.minute()),
            Event::MessageReceived(dict) => {
                defmt::write!(f, "MessageReceived({=usize} tuples)", dict.len())
            }
            Event::MessageDropped(reason) => defmt::write!(f, "MessageDropped({})", reason),
            Event::SendFailed(err) => defmt::write!(f, "SendFailed({})", err),
            Event::SendSucceeded => defmt::write!(f, "SendSucceeded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_time_events() {
        assert!(Event::Launch(noon()).is_time_event());
        assert!(Event::Tick(noon()).is_time_event());
        assert!(!Event::SendSucceeded.is_time_event());
    }

    #[test]
    fn test_message_events() {
        assert!(Event::MessageReceived(Dictionary::new()).is_message_event());
        assert!(Event::SendSucceeded.is_message_event());
        assert!(!Event::WindowLoad.is_message_event());
    }

    #[test]
    fn test_error_events() {
        assert!(Event::MessageDropped(DropReason::InboxFull).is_error_event());
        assert!(Event::SendFailed(OutboxError::Busy).is_error_event());
        assert!(!Event::SendSucceeded.is_error_event());
        assert!(!Event::Tick(noon()).is_error_event());
    }
}
