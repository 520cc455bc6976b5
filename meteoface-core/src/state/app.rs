//! Application state and event dispatch
//!
//! All watch-face behavior is a function of the current `AppState` and an
//! `Event`. Dispatch runs to completion, never blocks, and reports what
//! changed through an `Outcome`; logging is left to the caller.

use chrono::{NaiveDateTime, Timelike};
use heapless::Vec;
use meteoface_protocol::{weather_request, Dictionary};

use super::events::{DropReason, Event};
use super::strings::DisplayStrings;
use crate::clock::{format_date, format_time, is_refresh_minute};
use crate::config::WatchConfig;
use crate::traits::{Host, OutboxError};
use crate::weather::{FieldIssue, WeatherFields, WeatherText};

/// Most diagnostics a single event can produce
pub const MAX_DIAGNOSTICS: usize = 8;

/// Layers that need redrawing after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Repaint {
    pub time: bool,
    pub date: bool,
    pub weather: bool,
    /// Face is gone; blank the panel
    pub blank: bool,
}

impl Repaint {
    pub const ALL: Repaint = Repaint {
        time: true,
        date: true,
        weather: true,
        blank: false,
    };

    pub fn any(&self) -> bool {
        self.time || self.date || self.weather || self.blank
    }
}

/// Something worth a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// Weather request handed to the outbox
    RequestQueued,
    /// Outbox refused the weather request
    RequestRejected(OutboxError),
    /// Transport confirmed an outbound message
    SendSucceeded,
    /// Transport failed an outbound message
    SendFailed(OutboxError),
    /// Inbound message lost before decoding
    MessageDropped(DropReason),
    /// Inbound tuple skipped by the decoder
    Field(FieldIssue),
}

impl Diagnostic {
    /// Failures are logged at error level, the rest at info
    pub fn is_error(&self) -> bool {
        !matches!(self, Diagnostic::RequestQueued | Diagnostic::SendSucceeded)
    }
}

/// Result of dispatching one event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub repaint: Repaint,
    /// A weather request was handed to the outbox
    pub request_sent: bool,
    pub diagnostics: Vec<Diagnostic, MAX_DIAGNOSTICS>,
}

impl Outcome {
    fn note(&mut self, diagnostic: Diagnostic) {
        // Bounded: at most one per inbound tuple plus one per event
        let _ = self.diagnostics.push(diagnostic);
    }
}

/// Owned watch-face state
#[derive(Debug, Clone)]
pub struct AppState {
    strings: DisplayStrings,
    weather: WeatherFields,
    refresh_minutes: u8,
    loading_text: WeatherText,
    loaded: bool,
}

impl AppState {
    pub fn new(config: &WatchConfig) -> Self {
        Self {
            strings: DisplayStrings::new(),
            weather: WeatherFields::new(),
            refresh_minutes: config.weather_refresh_minutes,
            loading_text: config.loading_text.clone(),
            loaded: false,
        }
    }

    pub fn strings(&self) -> &DisplayStrings {
        &self.strings
    }

    pub fn weather(&self) -> &WeatherFields {
        &self.weather
    }

    /// Whether the face window is showing
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Process an event against the current state
    pub fn dispatch<H: Host>(&mut self, event: Event, host: &mut H) -> Outcome {
        let mut outcome = Outcome::default();

        match event {
            Event::Launch(now) => self.update_time(&now, host, &mut outcome),
            Event::WindowLoad => {
                self.loaded = true;
                self.strings.set_weather(&self.loading_text);
                outcome.repaint = Repaint::ALL;
            }
            Event::WindowUnload => {
                self.loaded = false;
                outcome.repaint.blank = true;
            }
            Event::Tick(now) => {
                self.update_time(&now, host, &mut outcome);
                if is_refresh_minute(now.minute(), self.refresh_minutes) {
                    self.request_weather(host, &mut outcome);
                }
            }
            Event::MessageReceived(message) => self.receive(&message, &mut outcome),
            Event::MessageDropped(reason) => outcome.note(Diagnostic::MessageDropped(reason)),
            Event::SendFailed(err) => outcome.note(Diagnostic::SendFailed(err)),
            Event::SendSucceeded => outcome.note(Diagnostic::SendSucceeded),
        }

        if !self.loaded {
            // Buffers stay current; there is just nothing to draw on
            outcome.repaint = Repaint {
                blank: outcome.repaint.blank,
                ..Repaint::default()
            };
        }

        outcome
    }

    fn update_time<H: Host>(&mut self, now: &NaiveDateTime, host: &H, outcome: &mut Outcome) {
        self.strings.set_time(format_time(now, host.clock_style()));
        self.strings.set_date(format_date(now));
        outcome.repaint.time = true;
        outcome.repaint.date = true;
    }

    fn request_weather<H: Host>(&mut self, host: &mut H, outcome: &mut Outcome) {
        match host.send(&weather_request()) {
            Ok(()) => {
                outcome.request_sent = true;
                outcome.note(Diagnostic::RequestQueued);
            }
            Err(err) => outcome.note(Diagnostic::RequestRejected(err)),
        }
    }

    fn receive(&mut self, message: &Dictionary, outcome: &mut Outcome) {
        for issue in self.weather.apply(message) {
            outcome.note(Diagnostic::Field(issue));
        }

        self.strings.set_weather(&self.weather.weather_text());
        outcome.repaint.weather = true;
    }
}
