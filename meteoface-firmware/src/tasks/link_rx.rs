//! Companion link receive task
//!
//! Reassembles frames from the UART and forwards decoded messages to the
//! controller. Anything that fails to frame or decode becomes a
//! `MessageDropped` event.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use meteoface_core::state::{DropReason, Event};
use meteoface_protocol::{Dictionary, FrameParser};

use crate::channels::{EVENT_CHANNEL, INBOX_OVERFLOWS};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Link RX task - receives and parses frames from the companion
#[embassy_executor::task]
pub async fn link_rx_task(mut rx: BufferedUartRx) {
    info!("Link RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => match Dictionary::from_frame(&frame) {
                            Ok(message) => {
                                debug!("Message with {} tuples", message.len());
                                deliver(Event::MessageReceived(message));
                            }
                            Err(e) => {
                                warn!("Failed to decode message: {:?}", e);
                                deliver(Event::MessageDropped(DropReason::Malformed(e)));
                            }
                        },
                        Ok(None) => {}
                        Err(e) => {
                            warn!("Frame parse error: {:?}", e);
                            deliver(Event::MessageDropped(DropReason::Framing(e)));
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
                deliver(Event::MessageDropped(DropReason::Transport));
            }
        }
    }
}

/// Queue an inbound event without blocking the UART
fn deliver(event: Event) {
    if EVENT_CHANNEL.try_send(event).is_err() {
        warn!("Event channel full, dropping inbound message");
        INBOX_OVERFLOWS.fetch_add(1, Ordering::Relaxed);
    }
}
