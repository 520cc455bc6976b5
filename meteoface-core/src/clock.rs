//! Time and date formatting for the clock layers

use core::fmt::Write;

use chrono::{Datelike, Timelike};
use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Visible characters in the time layer ("13:45")
pub const TIME_LEN: usize = 5;

/// Visible characters in the date layer ("Jan 01")
pub const DATE_LEN: usize = 6;

pub type TimeText = String<TIME_LEN>;
pub type DateText = String<DATE_LEN>;

/// Month abbreviations, January first
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Hour display style, chosen by the wearer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockStyle {
    /// 01-12, midnight and noon show as 12
    #[cfg_attr(feature = "serde", serde(rename = "12h"))]
    TwelveHour,
    /// 00-23
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "24h"))]
    TwentyFourHour,
}

/// Format hours and minutes as `HH:MM`
pub fn format_time<T: Timelike>(now: &T, style: ClockStyle) -> TimeText {
    let hour = match style {
        ClockStyle::TwentyFourHour => now.hour(),
        ClockStyle::TwelveHour => now.hour12().1,
    };

    let mut text = String::new();
    // Two two-digit fields and a colon always fit
    let _ = write!(text, "{:02}:{:02}", hour, now.minute());
    text
}

/// Format month and day as `Mon DD`
pub fn format_date<T: Datelike>(now: &T) -> DateText {
    let month = MONTH_ABBREVIATIONS[now.month0() as usize % MONTH_ABBREVIATIONS.len()];

    let mut text = String::new();
    let _ = write!(text, "{} {:02}", month, now.day());
    text
}

/// Whether a tick at `minute` should ask the companion for weather
///
/// This samples the wall-clock minute; it is not an elapsed-time timer.
/// With the default interval of 30 a watch started at :29 asks one minute
/// after launch, one started at :31 waits 29 minutes.
pub fn is_refresh_minute(minute: u32, interval: u8) -> bool {
    interval != 0 && minute % interval as u32 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_24h_format() {
        assert_eq!(format_time(&at(13, 45), ClockStyle::TwentyFourHour), "13:45");
        assert_eq!(format_time(&at(0, 5), ClockStyle::TwentyFourHour), "00:05");
        assert_eq!(format_time(&at(23, 59), ClockStyle::TwentyFourHour), "23:59");
    }

    #[test]
    fn test_12h_format() {
        assert_eq!(format_time(&at(13, 45), ClockStyle::TwelveHour), "01:45");
        assert_eq!(format_time(&at(9, 7), ClockStyle::TwelveHour), "09:07");
    }

    #[test]
    fn test_12h_midnight_and_noon() {
        assert_eq!(format_time(&at(0, 0), ClockStyle::TwelveHour), "12:00");
        assert_eq!(format_time(&at(12, 30), ClockStyle::TwelveHour), "12:30");
    }

    #[test]
    fn test_date_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(format_date(&date), "Mar 03");

        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(format_date(&date), "Dec 31");
    }

    #[test]
    fn test_refresh_minutes() {
        assert!(is_refresh_minute(0, 30));
        assert!(is_refresh_minute(30, 30));
        assert!(!is_refresh_minute(1, 30));
        assert!(!is_refresh_minute(29, 30));
        assert!(!is_refresh_minute(59, 30));
        assert!(is_refresh_minute(45, 15));
        assert!(!is_refresh_minute(0, 0));
    }

    #[test]
    fn test_default_style_is_24h() {
        assert_eq!(ClockStyle::default(), ClockStyle::TwentyFourHour);
    }
}
