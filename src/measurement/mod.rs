//! # Measurements
//!
//! A measurement is the reusable half of a benchmark: it knows how to
//! visit a page and record results, while the benchmark supplies the
//! pages and option defaults. Measurements are registered by name and
//! constructed fresh for every run.

mod contract;

pub use contract::{Measurement, MeasurementCtor};
