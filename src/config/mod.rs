//! # Harness Configuration
//!
//! This module provides TOML-based configuration for smoke suite
//! generation: which platform the suite runs as, an optional name
//! filter over qualifying benchmarks, and baseline option overrides
//! applied to every case.
//!
//! ## Example Configuration
//!
//! ```toml
//! [harness]
//! platform = "linux"
//! filter = "^startup_"
//!
//! [options]
//! output_format = "json"
//! ```

mod error;
mod loader;
mod types;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use types::{HarnessConfig, HarnessSection};
