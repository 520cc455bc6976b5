//! Minute tick task
//!
//! Wakes on each wall-clock minute boundary and hands the local time to
//! the controller.

use chrono::Timelike;
use defmt::*;
use embassy_time::{Duration, Timer};

use meteoface_core::state::Event;

use crate::channels::EVENT_CHANNEL;
use crate::clock::WallClock;

/// Milliseconds from `now` to the start of the next minute
fn until_next_minute(second: u32, nanosecond: u32) -> u64 {
    // Leap seconds report nanosecond >= 1e9; treat them as the 59th second
    let ms_into_minute = second as u64 * 1000 + (nanosecond as u64 / 1_000_000).min(999);
    60_000 - ms_into_minute
}

/// Tick task - one event per minute, aligned to the wall clock
#[embassy_executor::task]
pub async fn tick_task(clock: WallClock) {
    info!("Tick task started");

    loop {
        let now = clock.now();
        let wait = until_next_minute(now.second(), now.nanosecond());
        Timer::after(Duration::from_millis(wait)).await;

        let now = clock.now();
        trace!("Tick at {}:{}", now.hour(), now.minute());

        // Ticks are never dropped; wait for room
        EVENT_CHANNEL.send(Event::Tick(now)).await;
    }
}
