//! Main controller task
//!
//! Owns the watch-face state. Every event from the tick and link tasks is
//! dispatched here; diagnostics are logged and the face is marked for
//! redraw.

use core::sync::atomic::Ordering;

use defmt::*;

use meteoface_core::state::{AppState, Diagnostic, DropReason, Event};
use meteoface_core::weather::FieldIssue;
use meteoface_core::{ClockStyle, Host, OutboxError, WatchConfig};
use meteoface_protocol::Dictionary;

use crate::channels::{FaceLock, EVENT_CHANNEL, INBOX_OVERFLOWS, OUTBOX, SCREEN_UPDATE};

/// Host services backed by the firmware channels
struct ChannelHost {
    clock_style: ClockStyle,
}

impl Host for ChannelHost {
    fn clock_style(&self) -> ClockStyle {
        self.clock_style
    }

    fn send(&mut self, message: &Dictionary) -> Result<(), OutboxError> {
        OUTBOX
            .try_send(message.clone())
            .map_err(|_| OutboxError::Busy)
    }
}

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(config: WatchConfig, face: &'static FaceLock) {
    info!("Controller task started");

    let mut app = AppState::new(&config);
    let mut host = ChannelHost {
        clock_style: config.clock_style,
    };

    loop {
        let event = EVENT_CHANNEL.receive().await;
        debug!("Event: {:?}", event);
        handle_event(&mut app, &mut host, event, face).await;

        let overflows = INBOX_OVERFLOWS.swap(0, Ordering::Relaxed);
        if overflows > 0 {
            warn!("{} inbound events lost to a full queue", overflows);
            let event = Event::MessageDropped(DropReason::InboxFull);
            handle_event(&mut app, &mut host, event, face).await;
        }
    }
}

async fn handle_event(
    app: &mut AppState,
    host: &mut ChannelHost,
    event: Event,
    face: &'static FaceLock,
) {
    let outcome = app.dispatch(event, host);

    for diagnostic in &outcome.diagnostics {
        log_diagnostic(diagnostic);
    }

    if outcome.repaint.any() {
        let mut face = face.lock().await;
        face.renderer.invalidate(outcome.repaint);
        face.strings = app.strings().clone();
        drop(face);
        SCREEN_UPDATE.signal(());
    }
}

fn log_diagnostic(diagnostic: &Diagnostic) {
    match diagnostic {
        Diagnostic::RequestQueued => info!("Weather request queued"),
        Diagnostic::RequestRejected(e) => error!("Weather request not queued: {:?}", e),
        Diagnostic::SendSucceeded => info!("Outbox send success!"),
        Diagnostic::SendFailed(e) => error!("Outbox send failed! {:?}", e),
        Diagnostic::MessageDropped(reason) => error!("Message dropped! {:?}", reason),
        Diagnostic::Field(FieldIssue::UnrecognizedKey(key)) => {
            error!("Key not recognized! {}", key)
        }
        Diagnostic::Field(FieldIssue::UnexpectedType { key, found }) => {
            error!("Key {} has unexpected type {:?}", key, found)
        }
    }
}
