//! Weather fields decoded from companion messages
//!
//! Fields are resident: a message that carries only one of them leaves the
//! other at whatever the last message set it to, and the weather line is
//! rebuilt from both regardless. There is no per-field staleness tracking
//! and no request/response correlation.

use core::fmt::Write;

use heapless::{String, Vec};
use meteoface_protocol::dict::{Dictionary, Value, ValueKind, MAX_TUPLES};
use meteoface_protocol::keys;

use crate::text::{copy_truncated, Truncating};

/// Bytes kept of the rendered temperature ("-40C", "104F")
pub const TEMPERATURE_TEXT_LEN: usize = 7;

/// Bytes kept of the condition text
pub const CONDITIONS_LEN: usize = 31;

/// Bytes kept of the combined weather line
pub const WEATHER_TEXT_LEN: usize = 31;

pub type TemperatureText = String<TEMPERATURE_TEXT_LEN>;
pub type ConditionsText = String<CONDITIONS_LEN>;
pub type WeatherText = String<WEATHER_TEXT_LEN>;

/// Temperature unit as tagged by the companion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Exactly "C" means Celsius; any other tag, or none, means Fahrenheit
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("C") => TemperatureUnit::Celsius,
            _ => TemperatureUnit::Fahrenheit,
        }
    }

    pub fn letter(self) -> char {
        match self {
            TemperatureUnit::Celsius => 'C',
            TemperatureUnit::Fahrenheit => 'F',
        }
    }
}

/// A temperature reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature {
    pub magnitude: i32,
    pub unit: TemperatureUnit,
}

impl Temperature {
    fn from_value(value: &Value) -> Option<Self> {
        let (magnitude, tag) = match value {
            Value::Quantity { magnitude, unit } => (*magnitude, Some(unit.as_str())),
            Value::I32(magnitude) => (*magnitude, None),
            Value::U8(magnitude) => (*magnitude as i32, None),
            Value::Str(_) => return None,
        };
        Some(Self {
            magnitude,
            unit: TemperatureUnit::from_tag(tag),
        })
    }

    /// Render as `<int><unit letter>`, cut to `TEMPERATURE_TEXT_LEN` bytes
    pub fn render(&self) -> TemperatureText {
        let mut text = String::new();
        let _ = write!(
            Truncating::new(&mut text),
            "{}{}",
            self.magnitude,
            self.unit.letter()
        );
        text
    }
}

/// Something in a message the decoder skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldIssue {
    /// Key with no meaning for the watch (SWITCHTEMP included)
    UnrecognizedKey(u32),
    /// Known key with a value of the wrong type
    UnexpectedType { key: u32, found: ValueKind },
}

/// Issues found while applying one message; one per tuple at most
pub type FieldIssues = Vec<FieldIssue, MAX_TUPLES>;

/// Last known weather fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherFields {
    temperature: Option<Temperature>,
    conditions: ConditionsText,
    conditions_truncated: bool,
}

impl WeatherFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(&self) -> Option<Temperature> {
        self.temperature
    }

    pub fn conditions(&self) -> &str {
        &self.conditions
    }

    /// Whether the last stored condition text was cut to fit
    pub fn conditions_truncated(&self) -> bool {
        self.conditions_truncated
    }

    /// Update fields from every tuple in `message`, in message order
    ///
    /// Later tuples win when a key repeats. Unknown keys and mistyped
    /// values are skipped and reported; they never touch a field.
    pub fn apply(&mut self, message: &Dictionary) -> FieldIssues {
        let mut issues = FieldIssues::new();

        for tuple in message.iter() {
            let issue = match tuple.key {
                keys::TEMPERATURE => match Temperature::from_value(&tuple.value) {
                    Some(temperature) => {
                        self.temperature = Some(temperature);
                        None
                    }
                    None => Some(FieldIssue::UnexpectedType {
                        key: tuple.key,
                        found: tuple.value.kind(),
                    }),
                },
                keys::CONDITIONS => match &tuple.value {
                    Value::Str(text) => {
                        self.conditions_truncated = copy_truncated(&mut self.conditions, text);
                        None
                    }
                    other => Some(FieldIssue::UnexpectedType {
                        key: tuple.key,
                        found: other.kind(),
                    }),
                },
                key => Some(FieldIssue::UnrecognizedKey(key)),
            };

            if let Some(issue) = issue {
                // One issue per tuple, and tuples are bounded by MAX_TUPLES
                let _ = issues.push(issue);
            }
        }

        issues
    }

    /// Rendered temperature, empty until one has been received
    pub fn temperature_text(&self) -> TemperatureText {
        self.temperature
            .map(|t| t.render())
            .unwrap_or_default()
    }

    /// Weather line: `"<temperature>, <conditions>"` from resident fields
    pub fn weather_text(&self) -> WeatherText {
        let mut text = String::new();
        let _ = write!(
            Truncating::new(&mut text),
            "{}, {}",
            self.temperature_text(),
            self.conditions
        );
        text
    }
}
