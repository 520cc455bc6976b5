//! Key/value dictionaries carried in link frames
//!
//! A dictionary is a short ordered list of tuples, each pairing a small
//! integer key with a typed value. Wire layout (little endian):
//!
//! ```text
//! [count u8] then, count times: [key u32][type u8][len u8][data; len]
//! ```
//!
//! Iteration order is the order tuples appear on the wire. Decoded strings
//! and units longer than their bounds keep their longest whole-character
//! prefix; building an over-long value is an error.

use heapless::{String, Vec};

use crate::frame::MAX_PAYLOAD_SIZE;

/// Maximum tuples in one dictionary
pub const MAX_TUPLES: usize = 8;

/// Maximum bytes in a string value
pub const MAX_STRING_LEN: usize = 64;

/// Maximum bytes in a quantity's unit tag
pub const MAX_UNIT_LEN: usize = 4;

// Wire type tags
const TYPE_U8: u8 = 0x01;
const TYPE_I32: u8 = 0x02;
const TYPE_STRING: u8 = 0x03;
const TYPE_QUANTITY: u8 = 0x04;

const TUPLE_HEADER_LEN: usize = 6;

/// Dictionary encoding/decoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictError {
    /// More than `MAX_TUPLES` tuples
    TooManyTuples,
    /// Payload ended in the middle of a tuple
    Truncated,
    /// Bytes left over after the last tuple
    TrailingBytes,
    /// Unknown value type tag
    UnknownType(u8),
    /// Declared length does not fit the value type
    BadLength,
    /// String or unit longer than its bound (building values only;
    /// decoding truncates instead)
    ValueTooLong,
    /// String bytes are not UTF-8
    InvalidUtf8,
    /// Encoded dictionary does not fit a frame payload
    PayloadTooLarge,
}

/// Discriminant of a `Value`, used when reporting type mismatches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValueKind {
    U8,
    I32,
    Str,
    Quantity,
}

/// A typed tuple value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Value {
    U8(u8),
    I32(i32),
    Str(String<MAX_STRING_LEN>),
    /// Integer magnitude with a short unit tag, e.g. `20` + `"C"`
    Quantity {
        magnitude: i32,
        unit: String<MAX_UNIT_LEN>,
    },
}

impl Value {
    /// Build a string value, failing if it exceeds `MAX_STRING_LEN`
    pub fn string(text: &str) -> Result<Self, DictError> {
        String::try_from(text)
            .map(Value::Str)
            .map_err(|_| DictError::ValueTooLong)
    }

    /// Build a quantity value, failing if the unit exceeds `MAX_UNIT_LEN`
    pub fn quantity(magnitude: i32, unit: &str) -> Result<Self, DictError> {
        let unit = String::try_from(unit).map_err(|_| DictError::ValueTooLong)?;
        Ok(Value::Quantity { magnitude, unit })
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::U8(_) => ValueKind::U8,
            Value::I32(_) => ValueKind::I32,
            Value::Str(_) => ValueKind::Str,
            Value::Quantity { .. } => ValueKind::Quantity,
        }
    }

    fn type_tag(&self) -> u8 {
        match self {
            Value::U8(_) => TYPE_U8,
            Value::I32(_) => TYPE_I32,
            Value::Str(_) => TYPE_STRING,
            Value::Quantity { .. } => TYPE_QUANTITY,
        }
    }

    fn write_data(&self, out: &mut Vec<u8, MAX_PAYLOAD_SIZE>) -> Result<(), DictError> {
        let written = match self {
            Value::U8(v) => out.push(*v).map_err(|_| ()),
            Value::I32(v) => out.extend_from_slice(&v.to_le_bytes()),
            Value::Str(s) => out.extend_from_slice(s.as_bytes()),
            Value::Quantity { magnitude, unit } => out
                .extend_from_slice(&magnitude.to_le_bytes())
                .and_then(|_| out.extend_from_slice(unit.as_bytes())),
        };
        written.map_err(|_| DictError::PayloadTooLarge)
    }

    fn data_len(&self) -> usize {
        match self {
            Value::U8(_) => 1,
            Value::I32(_) => 4,
            Value::Str(s) => s.len(),
            Value::Quantity { unit, .. } => 4 + unit.len(),
        }
    }

    fn parse(tag: u8, data: &[u8]) -> Result<Self, DictError> {
        match tag {
            TYPE_U8 => match data {
                [v] => Ok(Value::U8(*v)),
                _ => Err(DictError::BadLength),
            },
            TYPE_I32 => Ok(Value::I32(read_i32(data)?)),
            TYPE_STRING => {
                let text = core::str::from_utf8(data).map_err(|_| DictError::InvalidUtf8)?;
                Ok(Value::Str(truncated(text)))
            }
            TYPE_QUANTITY => {
                if data.len() < 4 {
                    return Err(DictError::BadLength);
                }
                let (magnitude, unit) = data.split_at(4);
                let unit = core::str::from_utf8(unit).map_err(|_| DictError::InvalidUtf8)?;
                Ok(Value::Quantity {
                    magnitude: read_i32(magnitude)?,
                    unit: truncated(unit),
                })
            }
            other => Err(DictError::UnknownType(other)),
        }
    }
}

/// Longest whole-character prefix of `text` that fits `N` bytes
fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

fn read_i32(data: &[u8]) -> Result<i32, DictError> {
    let bytes: [u8; 4] = data.try_into().map_err(|_| DictError::BadLength)?;
    Ok(i32::from_le_bytes(bytes))
}

/// One key/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuple {
    pub key: u32,
    pub value: Value,
}

/// An ordered key/value dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dictionary {
    tuples: Vec<Tuple, MAX_TUPLES>,
}

impl Dictionary {
    pub const fn new() -> Self {
        Self { tuples: Vec::new() }
    }

    /// Append a tuple; keys are not deduplicated
    pub fn push(&mut self, key: u32, value: Value) -> Result<(), DictError> {
        self.tuples
            .push(Tuple { key, value })
            .map_err(|_| DictError::TooManyTuples)
    }

    /// Builder-style `push`
    pub fn with(mut self, key: u32, value: Value) -> Result<Self, DictError> {
        self.push(key, value)?;
        Ok(self)
    }

    /// Iterate tuples in wire order
    pub fn iter(&self) -> impl Iterator<Item = &Tuple> {
        self.tuples.iter()
    }

    /// First value stored under `key`
    pub fn get(&self, key: u32) -> Option<&Value> {
        self.tuples.iter().find(|t| t.key == key).map(|t| &t.value)
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Encode into a frame payload
    pub fn encode(&self) -> Result<Vec<u8, MAX_PAYLOAD_SIZE>, DictError> {
        let mut out = Vec::new();
        out.push(self.tuples.len() as u8)
            .map_err(|_| DictError::PayloadTooLarge)?;

        for tuple in &self.tuples {
            let len = tuple.value.data_len();
            let mut header = [0u8; TUPLE_HEADER_LEN];
            header[..4].copy_from_slice(&tuple.key.to_le_bytes());
            header[4] = tuple.value.type_tag();
            header[5] = u8::try_from(len).map_err(|_| DictError::ValueTooLong)?;
            out.extend_from_slice(&header)
                .map_err(|_| DictError::PayloadTooLarge)?;
            tuple.value.write_data(&mut out)?;
        }

        Ok(out)
    }

    /// Decode a frame payload
    pub fn decode(payload: &[u8]) -> Result<Self, DictError> {
        let (&count, mut rest) = payload.split_first().ok_or(DictError::Truncated)?;
        if count as usize > MAX_TUPLES {
            return Err(DictError::TooManyTuples);
        }

        let mut dict = Dictionary::new();
        for _ in 0..count {
            if rest.len() < TUPLE_HEADER_LEN {
                return Err(DictError::Truncated);
            }
            let (header, body) = rest.split_at(TUPLE_HEADER_LEN);
            let key = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
            let tag = header[4];
            let len = header[5] as usize;
            if body.len() < len {
                return Err(DictError::Truncated);
            }
            let (data, tail) = body.split_at(len);
            dict.push(key, Value::parse(tag, data)?)?;
            rest = tail;
        }

        if !rest.is_empty() {
            return Err(DictError::TrailingBytes);
        }
        Ok(dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_u8() {
        let dict = Dictionary::new().with(0, Value::U8(0)).unwrap();
        let payload = dict.encode().unwrap();
        assert_eq!(payload.as_slice(), &[1, 0, 0, 0, 0, TYPE_U8, 1, 0]);
    }

    #[test]
    fn test_decode_quantity_and_string() {
        let payload = [
            2, // count
            0, 0, 0, 0, TYPE_QUANTITY, 5, 72, 0, 0, 0, b'F', // key 0
            1, 0, 0, 0, TYPE_STRING, 5, b'S', b'u', b'n', b'n', b'y', // key 1
        ];
        let dict = Dictionary::decode(&payload).unwrap();

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get(0), Some(&Value::quantity(72, "F").unwrap()));
        assert_eq!(dict.get(1), Some(&Value::string("Sunny").unwrap()));
    }

    #[test]
    fn test_negative_i32_survives_encoding() {
        let dict = Dictionary::new().with(7, Value::I32(-40)).unwrap();
        let decoded = Dictionary::decode(&dict.encode().unwrap()).unwrap();
        assert_eq!(decoded.get(7), Some(&Value::I32(-40)));
    }

    #[test]
    fn test_iteration_keeps_wire_order() {
        let dict = Dictionary::new()
            .with(1, Value::U8(1))
            .and_then(|d| d.with(0, Value::U8(2)))
            .and_then(|d| d.with(99, Value::U8(3)))
            .unwrap();
        let decoded = Dictionary::decode(&dict.encode().unwrap()).unwrap();
        let mut keys = decoded.iter().map(|t| t.key);
        assert_eq!(keys.next(), Some(1));
        assert_eq!(keys.next(), Some(0));
        assert_eq!(keys.next(), Some(99));
        assert_eq!(keys.next(), None);
    }

    #[test]
    fn test_decode_empty_payload() {
        assert_eq!(Dictionary::decode(&[]), Err(DictError::Truncated));
        assert_eq!(Dictionary::decode(&[0]), Ok(Dictionary::new()));
    }

    #[test]
    fn test_decode_truncated_tuple() {
        assert_eq!(
            Dictionary::decode(&[1, 0, 0, 0, 0, TYPE_I32, 4, 1, 2]),
            Err(DictError::Truncated)
        );
    }

    #[test]
    fn test_decode_trailing_bytes() {
        assert_eq!(
            Dictionary::decode(&[1, 0, 0, 0, 0, TYPE_U8, 1, 5, 0xEE]),
            Err(DictError::TrailingBytes)
        );
    }

    #[test]
    fn test_decode_bad_lengths() {
        assert_eq!(
            Dictionary::decode(&[1, 0, 0, 0, 0, TYPE_U8, 2, 5, 6]),
            Err(DictError::BadLength)
        );
        assert_eq!(
            Dictionary::decode(&[1, 0, 0, 0, 0, TYPE_QUANTITY, 2, 5, 6]),
            Err(DictError::BadLength)
        );
    }

    #[test]
    fn test_decode_unknown_type() {
        assert_eq!(
            Dictionary::decode(&[1, 0, 0, 0, 0, 0x7F, 0]),
            Err(DictError::UnknownType(0x7F))
        );
    }

    #[test]
    fn test_decode_invalid_utf8() {
        assert_eq!(
            Dictionary::decode(&[1, 1, 0, 0, 0, TYPE_STRING, 2, 0xC3, 0x28]),
            Err(DictError::InvalidUtf8)
        );
    }

    #[test]
    fn test_too_many_tuples() {
        let mut dict = Dictionary::new();
        for key in 0..MAX_TUPLES as u32 {
            dict.push(key, Value::U8(0)).unwrap();
        }
        assert_eq!(dict.push(99, Value::U8(0)), Err(DictError::TooManyTuples));
        assert_eq!(Dictionary::decode(&[9]), Err(DictError::TooManyTuples));
    }

    #[test]
    fn test_string_bounds() {
        let long = [b'x'; MAX_STRING_LEN + 1];
        let long = core::str::from_utf8(&long).unwrap();
        assert_eq!(Value::string(long), Err(DictError::ValueTooLong));
        assert_eq!(Value::quantity(1, "Kelvin"), Err(DictError::ValueTooLong));
    }

    fn string_tuple(key: u8, text: &[u8]) -> Vec<u8, 128> {
        let mut payload: Vec<u8, 128> = Vec::new();
        payload
            .extend_from_slice(&[1, key, 0, 0, 0, TYPE_STRING, text.len() as u8])
            .unwrap();
        payload.extend_from_slice(text).unwrap();
        payload
    }

    #[test]
    fn test_decode_long_string_truncates() {
        let text = [b'r'; 79];
        let dict = Dictionary::decode(&string_tuple(1, &text)).unwrap();

        match dict.get(1) {
            Some(Value::Str(s)) => {
                assert_eq!(s.len(), MAX_STRING_LEN);
                assert!(s.bytes().all(|b| b == b'r'));
            }
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn test_decode_long_string_cuts_on_char_boundary() {
        // 63 ASCII bytes then a 2-byte char straddling the bound
        let mut text: Vec<u8, 80> = Vec::new();
        text.extend_from_slice(&[b'a'; MAX_STRING_LEN - 1]).unwrap();
        text.extend_from_slice("é tail".as_bytes()).unwrap();
        let dict = Dictionary::decode(&string_tuple(1, &text)).unwrap();

        match dict.get(1) {
            Some(Value::Str(s)) => {
                assert_eq!(s.len(), MAX_STRING_LEN - 1);
                assert!(s.bytes().all(|b| b == b'a'));
            }
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn test_decode_long_unit_truncates() {
        let payload = [
            1, 0, 0, 0, 0, TYPE_QUANTITY, 11, 20, 0, 0, 0, b'C', b'e', b'l', b's', b'i', b'u',
            b's',
        ];
        let dict = Dictionary::decode(&payload).unwrap();
        assert_eq!(dict.get(0), Some(&Value::quantity(20, "Cels").unwrap()));
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::U8(1).kind(), ValueKind::U8);
        assert_eq!(Value::quantity(1, "C").unwrap().kind(), ValueKind::Quantity);
    }
}
