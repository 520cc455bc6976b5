//! Build script for meteoface-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates watch.toml and embeds it as postcard bytes
//! - Records the build time as the wall clock's starting point

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use meteoface_core::config::MAX_CONFIG_SIZE;
use meteoface_core::WatchConfig;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    setup_linker(&out_dir);
    embed_config(&out_dir);
    embed_build_epoch(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate watch.toml, then write it to OUT_DIR in postcard form
fn embed_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=watch.toml");

    let config_path = Path::new("watch.toml");
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: watch.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a watch.toml configuration file.          ║\n\
            ║  Please create one in the meteoface-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Failed to read watch.toml                                ║\n\
            ║                                                                  ║\n\
            ║  Error: {:<56} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            e
        ),
    };

    let config: WatchConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid watch.toml                                       ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        ),
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: watch.toml value out of range                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&format!("{:?}", e))
        );
    }

    let mut buf = [0u8; MAX_CONFIG_SIZE];
    let bytes = config
        .to_bytes(&mut buf)
        .expect("watch.toml does not fit the embedded config buffer");
    fs::write(out_dir.join("watch_config.bin"), bytes).unwrap();

    println!("cargo:warning=watch.toml validated successfully");
}

/// Write the build time as a Rust constant
fn embed_build_epoch(out_dir: &Path) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let source = format!(
        "/// Seconds since the Unix epoch when the firmware was built (UTC)\n\
         pub const BUILD_EPOCH_SECS: i64 = {};\n",
        secs
    );
    fs::write(out_dir.join("build_epoch.rs"), source).unwrap();
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
