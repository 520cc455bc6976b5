//! Embedded configuration
//!
//! watch.toml is validated by build.rs and compiled in as postcard bytes.

use defmt::*;

use meteoface_core::WatchConfig;

/// Postcard encoding of watch.toml
static EMBEDDED_CONFIG: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/watch_config.bin"));

/// Decode the embedded configuration, falling back to defaults
pub fn load() -> WatchConfig {
    match WatchConfig::from_bytes(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: {:?}, refresh every {} min, UTC offset {} min",
                config.clock_style, config.weather_refresh_minutes, config.utc_offset_minutes
            );
            config
        }
        Err(e) => {
            // build.rs rejects bad configs, so this means a stale OUT_DIR
            error!("Failed to decode embedded config: {:?}", e);
            error!("Using default configuration");
            WatchConfig::default()
        }
    }
}
