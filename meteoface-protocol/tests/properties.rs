//! Property tests for link framing and dictionary decoding

use meteoface_protocol::dict::MAX_STRING_LEN;
use meteoface_protocol::frame::crc8;
use meteoface_protocol::{keys, Dictionary, Frame, FrameParser, Value, FRAME_START, MAX_PAYLOAD_SIZE};
use proptest::prelude::*;

fn weather_message() -> impl Strategy<Value = Dictionary> {
    (any::<i32>(), prop_oneof![Just("C"), Just("F")], "[a-zA-Z ]{0,31}").prop_map(
        |(magnitude, unit, conditions)| {
            Dictionary::new()
                .with(keys::TEMPERATURE, Value::quantity(magnitude, unit).unwrap())
                .and_then(|d| d.with(keys::CONDITIONS, Value::string(&conditions).unwrap()))
                .unwrap()
        },
    )
}

proptest! {
    #[test]
    fn parser_only_yields_checked_frames(bytes in prop::collection::vec(any::<u8>(), 0..600)) {
        let mut parser = FrameParser::new();
        for byte in bytes {
            if let Ok(Some(frame)) = parser.feed(byte) {
                prop_assert!(frame.payload.len() <= MAX_PAYLOAD_SIZE);

                let encoded = frame.encode_to_vec().unwrap();
                let mut covered = vec![frame.payload.len() as u8, frame.msg_type];
                covered.extend_from_slice(&frame.payload);
                prop_assert_eq!(*encoded.last().unwrap(), crc8(0, &covered));
            }
        }
    }

    #[test]
    fn message_survives_leading_noise(
        noise in prop::collection::vec(any::<u8>().prop_filter("no start byte", |b| *b != FRAME_START), 0..64),
        message in weather_message(),
    ) {
        let bytes = message.to_frame().unwrap().encode_to_vec().unwrap();
        let mut parser = FrameParser::new();

        for byte in noise {
            prop_assert_eq!(parser.feed(byte), Ok(None));
        }
        let frame: Frame = parser.feed_bytes(&bytes).unwrap().unwrap();

        prop_assert_eq!(Dictionary::from_frame(&frame).unwrap(), message);
    }

    #[test]
    fn decoded_payloads_reencode_stably(payload in prop::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE)) {
        if let Ok(dict) = Dictionary::decode(&payload) {
            let bytes = dict.encode().unwrap();
            prop_assert!(bytes.len() <= payload.len());
            prop_assert_eq!(Dictionary::decode(&bytes).unwrap(), dict);
        }
    }

    #[test]
    fn long_strings_decode_to_a_prefix(text in "\\PC{0,60}", key in any::<u32>()) {
        let mut payload = vec![1];
        payload.extend_from_slice(&key.to_le_bytes());
        payload.extend_from_slice(&[0x03, text.len() as u8]);
        payload.extend_from_slice(text.as_bytes());

        let dict = Dictionary::decode(&payload).unwrap();
        match dict.get(key) {
            Some(Value::Str(s)) => {
                prop_assert!(s.len() <= MAX_STRING_LEN);
                prop_assert!(text.starts_with(s.as_str()));
                if text.len() <= MAX_STRING_LEN {
                    prop_assert_eq!(s.as_str(), text.as_str());
                }
            }
            other => prop_assert!(false, "unexpected value {:?}", other),
        }
    }
}
