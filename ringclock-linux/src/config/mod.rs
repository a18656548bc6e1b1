//! Clock configuration
//!
//! The configuration is compiled into the binary from `clock.toml` and
//! parsed once at startup.

pub mod loader;

pub use loader::{load_embedded, parse_config, ConfigError, EMBEDDED_CONFIG};
