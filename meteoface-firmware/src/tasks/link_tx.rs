//! Companion link transmit task
//!
//! Frames outbox messages onto the UART and reports each delivery result
//! back to the controller.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use meteoface_core::state::Event;
use meteoface_core::OutboxError;
use meteoface_protocol::Dictionary;

use crate::channels::{EVENT_CHANNEL, OUTBOX};

/// Link TX task - sends queued messages to the companion
#[embassy_executor::task]
pub async fn link_tx_task(mut tx: BufferedUartTx) {
    info!("Link TX task started");

    loop {
        let message = OUTBOX.receive().await;

        let event = match send(&mut tx, &message).await {
            Ok(()) => Event::SendSucceeded,
            Err(e) => Event::SendFailed(e),
        };
        EVENT_CHANNEL.send(event).await;
    }
}

async fn send(tx: &mut BufferedUartTx, message: &Dictionary) -> Result<(), OutboxError> {
    let bytes = message
        .to_frame()
        .ok()
        .and_then(|frame| frame.encode_to_vec().ok())
        .ok_or(OutboxError::Encode)?;

    tx.write_all(&bytes).await.map_err(|e| {
        warn!("UART write error: {:?}", e);
        OutboxError::Transport
    })?;
    tx.flush().await.map_err(|_| OutboxError::Transport)?;

    trace!("TX: {} bytes", bytes.len());
    Ok(())
}
