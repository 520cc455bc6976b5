//! Wall clock
//!
//! There is no RTC: local time is the build time plus uptime, shifted by
//! the configured UTC offset.

use chrono::{DateTime, NaiveDateTime, TimeDelta};
use embassy_time::Instant;

include!(concat!(env!("OUT_DIR"), "/build_epoch.rs"));

/// Local time reference anchored to a monotonic instant
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    /// Local time at `instant`
    time: NaiveDateTime,
    instant: Instant,
}

impl WallClock {
    /// Start counting from the firmware build time
    pub fn from_build_time(utc_offset_minutes: i16) -> Self {
        let utc = DateTime::from_timestamp(BUILD_EPOCH_SECS, 0)
            .map(|t| t.naive_utc())
            .unwrap_or(NaiveDateTime::UNIX_EPOCH);
        let local = utc
            .checked_add_signed(TimeDelta::minutes(utc_offset_minutes as i64))
            .unwrap_or(utc);

        Self {
            time: local,
            instant: Instant::now(),
        }
    }

    /// Current local time
    pub fn now(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.instant).as_millis() as i64;
        self.time
            .checked_add_signed(TimeDelta::milliseconds(elapsed))
            .unwrap_or(self.time)
    }
}
