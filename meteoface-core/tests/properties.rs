//! Property tests for the clock and weather layers

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use meteoface_core::clock::{format_date, format_time, ClockStyle, MONTH_ABBREVIATIONS};
use meteoface_core::weather::{WeatherFields, CONDITIONS_LEN, TEMPERATURE_TEXT_LEN};
use meteoface_core::{AppState, Host, OutboxError, WatchConfig};
use meteoface_core::state::Event;
use meteoface_protocol::{keys, weather_request, Dictionary, Value};
use proptest::prelude::*;

struct CountingHost {
    style: ClockStyle,
    requests: usize,
}

impl Host for CountingHost {
    fn clock_style(&self) -> ClockStyle {
        self.style
    }

    fn send(&mut self, message: &Dictionary) -> Result<(), OutboxError> {
        assert_eq!(message, &weather_request());
        self.requests += 1;
        Ok(())
    }
}

fn style() -> impl Strategy<Value = ClockStyle> {
    prop_oneof![Just(ClockStyle::TwelveHour), Just(ClockStyle::TwentyFourHour)]
}

fn datetime() -> impl Strategy<Value = NaiveDateTime> {
    (1970i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(|(y, mo, d, h, mi)| {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    })
}

proptest! {
    #[test]
    fn time_is_always_hh_mm(now in datetime(), style in style()) {
        let text = format_time(&now, style);
        let bytes = text.as_bytes();

        prop_assert_eq!(text.len(), 5);
        prop_assert_eq!(bytes[2], b':');
        prop_assert!(bytes.iter().enumerate().all(|(i, b)| i == 2 || b.is_ascii_digit()));

        let hour: u32 = text[..2].parse().unwrap();
        let minute: u32 = text[3..].parse().unwrap();
        prop_assert_eq!(minute, now.minute());
        match style {
            ClockStyle::TwentyFourHour => prop_assert_eq!(hour, now.hour()),
            ClockStyle::TwelveHour => {
                prop_assert!((1..=12).contains(&hour));
                prop_assert_eq!(hour % 12, now.hour() % 12);
            }
        }
    }

    #[test]
    fn date_is_always_mon_dd(now in datetime()) {
        let text = format_date(&now);

        prop_assert_eq!(text.len(), 6);
        prop_assert!(MONTH_ABBREVIATIONS.contains(&&text[..3]));
        prop_assert_eq!(&text[3..4], " ");
        let day: u32 = text[4..].parse().unwrap();
        prop_assert!((1..=31).contains(&day));
    }

    #[test]
    fn request_fires_iff_minute_divisible_by_30(now in datetime()) {
        let mut host = CountingHost { style: ClockStyle::TwentyFourHour, requests: 0 };
        let mut app = AppState::new(&WatchConfig::default());
        app.dispatch(Event::WindowLoad, &mut host);

        let outcome = app.dispatch(Event::Tick(now), &mut host);

        let expected = now.minute() % 30 == 0;
        prop_assert_eq!(outcome.request_sent, expected);
        prop_assert_eq!(host.requests, usize::from(expected));
    }

    #[test]
    fn conditions_never_overrun(text in "\\PC{0,55}", magnitude in any::<i32>()) {
        // Raw wire bytes so conditions past the dictionary's string bound
        // still reach the fields
        let mut payload = vec![2];
        payload.extend_from_slice(&keys::TEMPERATURE.to_le_bytes());
        payload.extend_from_slice(&[0x04, 5]);
        payload.extend_from_slice(&magnitude.to_le_bytes());
        payload.push(b'C');
        payload.extend_from_slice(&keys::CONDITIONS.to_le_bytes());
        payload.extend_from_slice(&[0x03, text.len() as u8]);
        payload.extend_from_slice(text.as_bytes());

        let message = Dictionary::decode(&payload).unwrap();
        let mut fields = WeatherFields::new();
        let issues = fields.apply(&message);
        prop_assert!(issues.is_empty());

        prop_assert!(fields.conditions().len() <= CONDITIONS_LEN);
        prop_assert!(text.starts_with(fields.conditions()));
        if text.len() <= CONDITIONS_LEN {
            prop_assert_eq!(fields.conditions(), text.as_str());
        }

        let temperature = fields.temperature_text();
        prop_assert!(temperature.len() <= TEMPERATURE_TEXT_LEN);
        let full = format!("{}C", magnitude);
        prop_assert!(full.starts_with(temperature.as_str()));
    }

    #[test]
    fn unknown_keys_change_nothing(key in 3u32.., value in any::<u8>()) {
        let mut fields = WeatherFields::new();
        let mut seed = Dictionary::new();
        seed.push(keys::TEMPERATURE, Value::quantity(12, "C").unwrap()).unwrap();
        seed.push(keys::CONDITIONS, Value::string("Drizzle").unwrap()).unwrap();
        fields.apply(&seed);
        let before = fields.clone();

        let mut message = Dictionary::new();
        message.push(key, Value::U8(value)).unwrap();
        let issues = fields.apply(&message);

        prop_assert_eq!(issues.len(), 1);
        prop_assert_eq!(&fields, &before);
        let line = fields.weather_text();
        prop_assert_eq!(line.as_str(), "12C, Drizzle");
    }
}
