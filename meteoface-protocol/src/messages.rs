//! Message types for the companion link
//!
//! Only one message type exists on the wire: a dictionary. The watch sends
//! a one-tuple weather request; the companion answers, whenever it gets
//! round to it, with a dictionary of weather fields.

use crate::dict::{DictError, Dictionary, Value};
use crate::frame::{Frame, FrameError};

/// Message type ID: dictionary payload (both directions)
pub const MSG_DICTIONARY: u8 = 0x10;

/// Key of the single tuple in a weather request
pub const KEY_REQUEST: u32 = 0;

/// Value of the single tuple in a weather request
pub const REQUEST_TRIGGER: u8 = 0;

/// Keys understood in weather responses
pub mod keys {
    /// Temperature magnitude with a "C"/"F" unit tag
    pub const TEMPERATURE: u32 = 0;
    /// Short condition text
    pub const CONDITIONS: u32 = 1;
    /// Reserved by the companion, ignored by the watch
    pub const SWITCHTEMP: u32 = 2;
}

/// Errors turning frames into messages and back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// Frame carried a message type other than `MSG_DICTIONARY`
    UnexpectedType(u8),
    Frame(FrameError),
    Dict(DictError),
}

impl From<FrameError> for MessageError {
    fn from(e: FrameError) -> Self {
        MessageError::Frame(e)
    }
}

impl From<DictError> for MessageError {
    fn from(e: DictError) -> Self {
        MessageError::Dict(e)
    }
}

/// Build the "please send weather" request
pub fn weather_request() -> Dictionary {
    let mut request = Dictionary::new();
    // A fresh dictionary always has room for one tuple
    let _ = request.push(KEY_REQUEST, Value::U8(REQUEST_TRIGGER));
    request
}

impl Dictionary {
    /// Wrap this dictionary in a link frame
    pub fn to_frame(&self) -> Result<Frame, MessageError> {
        let payload = self.encode()?;
        Ok(Frame::new(MSG_DICTIONARY, &payload)?)
    }

    /// Parse a dictionary out of a link frame
    pub fn from_frame(frame: &Frame) -> Result<Self, MessageError> {
        if frame.msg_type != MSG_DICTIONARY {
            return Err(MessageError::UnexpectedType(frame.msg_type));
        }
        Ok(Dictionary::decode(&frame.payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{FrameParser, FRAME_START};

    #[test]
    fn test_weather_request_shape() {
        let request = weather_request();
        assert_eq!(request.len(), 1);
        assert_eq!(request.get(KEY_REQUEST), Some(&Value::U8(0)));
    }

    #[test]
    fn test_weather_request_frame_bytes() {
        let frame = weather_request().to_frame().unwrap();
        assert_eq!(frame.msg_type, MSG_DICTIONARY);
        assert_eq!(frame.payload.as_slice(), &[1, 0, 0, 0, 0, 0x01, 1, 0]);

        let encoded = frame.encode_to_vec().unwrap();
        assert_eq!(encoded[0], FRAME_START);
        assert_eq!(encoded.len(), 12);
    }

    #[test]
    fn test_response_through_parser() {
        let response = Dictionary::new()
            .with(keys::TEMPERATURE, Value::quantity(72, "F").unwrap())
            .and_then(|d| d.with(keys::CONDITIONS, Value::string("Sunny").unwrap()))
            .unwrap();
        let bytes = response.to_frame().unwrap().encode_to_vec().unwrap();

        let mut parser = FrameParser::new();
        let frame = parser.feed_bytes(&bytes).unwrap().unwrap();
        assert_eq!(Dictionary::from_frame(&frame), Ok(response));
    }

    #[test]
    fn test_unexpected_message_type() {
        let frame = Frame::empty(0x24);
        assert_eq!(
            Dictionary::from_frame(&frame),
            Err(MessageError::UnexpectedType(0x24))
        );
    }

    #[test]
    fn test_malformed_payload() {
        let frame = Frame::new(MSG_DICTIONARY, &[1, 0]).unwrap();
        assert_eq!(
            Dictionary::from_frame(&frame),
            Err(MessageError::Dict(DictError::Truncated))
        );
    }
}
