//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicU32;

use meteoface_core::state::{DisplayStrings, Event};
use meteoface_display::FaceRenderer;
use meteoface_protocol::Dictionary;

/// Channel capacity for watch-face events
const EVENT_CHANNEL_SIZE: usize = 8;

/// Outbound messages waiting for the link; one in flight plus one queued
const OUTBOX_SIZE: usize = 2;

/// Every event the watch face handles, from all producers
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, Event, EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Messages for the companion
pub static OUTBOX: Channel<CriticalSectionRawMutex, Dictionary, OUTBOX_SIZE> = Channel::new();

/// Inbound messages lost because the event channel was full
pub static INBOX_OVERFLOWS: AtomicU32 = AtomicU32::new(0);

/// Signal that the face needs drawing
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// What the display task draws from
pub struct FaceState {
    pub renderer: FaceRenderer,
    pub strings: DisplayStrings,
}

pub type FaceLock = Mutex<CriticalSectionRawMutex, FaceState>;
