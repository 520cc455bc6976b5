//! Display task
//!
//! Draws the face into the SH1106 frame buffer whenever the controller
//! signals a change, then flushes it over I2C.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;

use meteoface_display::DisplayBackend;

use crate::channels::{FaceLock, SCREEN_UPDATE};
use crate::display::{GraphicsBackend, Sh1106};

#[embassy_executor::task]
pub async fn display_task(i2c: I2c<'static, I2C0, Async>, face: &'static FaceLock) {
    info!("Display task started");

    let mut backend = GraphicsBackend::new(Sh1106::new(i2c));
    let (width, height) = backend.dimensions();
    info!("Panel {}x{}", width, height);

    if let Err(e) = backend.target_mut().init().await {
        error!("SH1106 init failed: {:?}", e);
    }

    loop {
        SCREEN_UPDATE.wait().await;

        let drawn = {
            let mut face = face.lock().await;
            let face = &mut *face;
            face.renderer.render(&face.strings, &mut backend)
        };

        match drawn {
            Ok(true) => {
                if let Err(e) = backend.target_mut().flush().await {
                    warn!("SH1106 flush failed: {:?}", e);
                }
            }
            Ok(false) => {}
            Err(e) => warn!("Face render failed: {:?}", e),
        }
    }
}
