//! # Registries
//!
//! Explicit registries for benchmarks and measurements. Everything the
//! harness can run is registered by name at startup, so the full set
//! of candidates is known without scanning anything.

mod benchmarks;
mod measurements;

pub use benchmarks::BenchmarkRegistry;
pub use measurements::MeasurementRegistry;
