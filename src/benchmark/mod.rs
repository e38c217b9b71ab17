//! # Benchmark Contract
//!
//! This module defines the contract every benchmark implements and the
//! framework-level option handling shared by all runs. A benchmark
//! names a measurement, supplies a page set, and participates in
//! option assembly through a fixed sequence of hooks.

mod contract;
mod error;

pub use contract::{
    process_framework_args, register_framework_args, Benchmark, OUTPUT_FORMAT, PAGESET_REPEAT,
    PAGE_REPEAT,
};
pub use error::{BenchmarkError, BenchmarkResult};
