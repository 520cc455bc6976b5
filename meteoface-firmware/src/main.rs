//! Meteoface - Weather Watch Face Firmware
//!
//! Main firmware binary for RP2040 boards driving an SH1106 OLED.
//! Shows the time, the date and a weather line fed by a companion bridge
//! over UART.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, UART0};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_sync::mutex::Mutex;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use meteoface_core::state::{DisplayStrings, Event};
use meteoface_display::{FaceLayout, FaceRenderer};

use crate::channels::{FaceLock, FaceState, EVENT_CHANNEL};
use crate::clock::WallClock;

mod channels;
mod clock;
mod config;
mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

// Face shared between the controller and the display task
static FACE: StaticCell<FaceLock> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Meteoface firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();
    let clock = WallClock::from_build_time(config.utc_offset_minutes);
    info!(
        "Configuration loaded, local time {}",
        Display2Format(&clock.now())
    );

    // Companion link on UART0 (GPIO0 TX, GPIO1 RX), 115200 baud
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized for companion link");

    // SH1106 on I2C0 (GPIO4 SDA, GPIO5 SCL)
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c::Config::default());
    info!("I2C initialized for display");

    let layout = FaceLayout::for_panel(
        display::sh1106::WIDTH as u16,
        display::sh1106::HEIGHT as u16,
        config.color,
    );
    let face: &'static FaceLock = FACE.init(Mutex::new(FaceState {
        renderer: FaceRenderer::new(layout),
        strings: DisplayStrings::new(),
    }));

    // Bring the face up before any task can race a tick in
    EVENT_CHANNEL.send(Event::WindowLoad).await;
    EVENT_CHANNEL.send(Event::Launch(clock.now())).await;

    spawner.spawn(tasks::controller_task(config, face)).unwrap();
    spawner.spawn(tasks::display_task(i2c, face)).unwrap();
    spawner.spawn(tasks::link_rx_task(rx)).unwrap();
    spawner.spawn(tasks::link_tx_task(tx)).unwrap();
    spawner.spawn(tasks::tick_task(clock)).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
