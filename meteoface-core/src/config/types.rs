//! Configuration type definitions
//!
//! The watch configuration is written as TOML, validated at build time and
//! embedded in the firmware image as postcard binary data.

use heapless::String;

use crate::clock::ClockStyle;
use crate::text::copy_truncated;
use crate::weather::WEATHER_TEXT_LEN;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default minutes between weather requests
pub const DEFAULT_REFRESH_MINUTES: u8 = 30;

/// Weather line shown until the first response arrives
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";

/// Largest UTC offset accepted, in minutes (UTC+14:00)
pub const MAX_UTC_OFFSET_MINUTES: i16 = 14 * 60;

/// Upper bound for an encoded configuration
pub const MAX_CONFIG_SIZE: usize = 64;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Refresh interval outside 1..=60 minutes
    RefreshInterval(u8),
    /// UTC offset outside ±14 hours
    UtcOffset(i16),
    /// Serialization failed
    Encode,
    /// Deserialization failed
    Decode,
}

/// Watch face configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WatchConfig {
    /// 12 or 24 hour time
    pub clock_style: ClockStyle,
    /// Ask for weather on ticks whose minute is a multiple of this
    pub weather_refresh_minutes: u8,
    /// Local time offset from UTC
    pub utc_offset_minutes: i16,
    /// Weather line shown when the face loads
    pub loading_text: String<WEATHER_TEXT_LEN>,
    /// Panel can show colour
    pub color: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        let mut loading_text = String::new();
        copy_truncated(&mut loading_text, DEFAULT_LOADING_TEXT);
        Self {
            clock_style: ClockStyle::TwentyFourHour,
            weather_refresh_minutes: DEFAULT_REFRESH_MINUTES,
            utc_offset_minutes: 0,
            loading_text,
            color: false,
        }
    }
}

impl WatchConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=60).contains(&self.weather_refresh_minutes) {
            return Err(ConfigError::RefreshInterval(self.weather_refresh_minutes));
        }
        if self.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::UtcOffset(self.utc_offset_minutes));
        }
        Ok(())
    }

    /// Serialize into `buf`, returning the used prefix
    #[cfg(feature = "serde")]
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Encode)
    }

    /// Deserialize and validate
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }
}
