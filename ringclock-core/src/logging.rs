//! Logging facade
//!
//! Re-exports `defmt` macros when the `defmt` feature is enabled and `log`
//! macros otherwise, so library code logs the same way on both targets.

#[cfg(feature = "defmt")]
pub use defmt::{debug, error, info, trace, warn};

#[cfg(not(feature = "defmt"))]
pub use log::{debug, error, info, trace, warn};
