//! Build script for ringclock-linux
//!
//! Validates clock.toml at compile time so a bad configuration never
//! reaches the device.

use std::fs;
use std::path::Path;

/// Highest brightness the APA102 5-bit field can hold
const MAX_BRIGHTNESS: i64 = 31;

fn main() {
    println!("cargo:rerun-if-changed=clock.toml");
    println!("cargo:rerun-if-changed=build.rs");

    validate_config();
}

/// Validate clock.toml configuration at compile time
fn validate_config() {
    let config_path = Path::new("clock.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ERROR: clock.toml not found!\n\
            The clock requires a clock.toml configuration file\n\
            in the ringclock-linux directory.\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => panic!("\nERROR: failed to read clock.toml: {}\n", e),
    };

    let table: toml::Table = match content.parse() {
        Ok(table) => table,
        Err(e) => panic!("\nERROR: clock.toml is not valid TOML:\n{}\n", e),
    };

    match table.get("orientation").and_then(|v| v.as_str()) {
        Some("N" | "E" | "S" | "W") => {}
        Some(other) => panic!(
            "\nERROR: clock.toml orientation {:?} must be one of N, E, S, W\n",
            other
        ),
        None => panic!("\nERROR: clock.toml is missing `orientation`\n"),
    }

    match table.get("brightness").and_then(|v| v.as_integer()) {
        Some(b) if (0..=MAX_BRIGHTNESS).contains(&b) => {}
        Some(b) => panic!(
            "\nERROR: clock.toml brightness {} must be within 0-{}\n",
            b, MAX_BRIGHTNESS
        ),
        None => panic!("\nERROR: clock.toml is missing `brightness`\n"),
    }

    if let Some(interval) = table.get("update_interval_ms") {
        match interval.as_integer() {
            Some(ms) if ms > 0 => {}
            _ => panic!("\nERROR: clock.toml update_interval_ms must be a positive integer\n"),
        }
    }
}
