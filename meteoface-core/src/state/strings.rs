//! Text shown on the face

use heapless::String;

use crate::clock::{DateText, TimeText};
use crate::text::copy_truncated;
use crate::weather::WeatherText;

/// The three text layers, each holding only its latest value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayStrings {
    time: TimeText,
    date: DateText,
    weather: WeatherText,
}

impl Default for DisplayStrings {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayStrings {
    /// Placeholder contents until the first clock update
    pub fn new() -> Self {
        let mut strings = Self {
            time: String::new(),
            date: String::new(),
            weather: String::new(),
        };
        copy_truncated(&mut strings.time, "00:00");
        copy_truncated(&mut strings.date, "Jan 01");
        strings
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn weather(&self) -> &str {
        &self.weather
    }

    pub(crate) fn set_time(&mut self, text: TimeText) {
        self.time = text;
    }

    pub(crate) fn set_date(&mut self, text: DateText) {
        self.date = text;
    }

    pub(crate) fn set_weather(&mut self, text: &str) {
        copy_truncated(&mut self.weather, text);
    }
}
