//! # pagebench
//!
//! A page-based benchmark harness with smoke-suite generation. Every
//! benchmark pairs a reusable measurement with a set of pages; the
//! harness can synthesize one smoke test per composable benchmark,
//! running a single page with minimal repeats to verify the benchmark
//! still executes end to end.
//!
//! ## Features
//!
//! - Explicit registries for benchmarks and measurements
//! - Layered option assembly driven by per-benchmark hooks
//! - Page-set narrowing to the first enabled page
//! - Suite reports with text and JSON rendering
//!
//! ## Architecture
//!
//! Benchmarks implement the [`benchmark::Benchmark`] trait and
//! measurements the [`measurement::Measurement`] trait; both are
//! registered by name. [`smoke::SmokeSuite::generate`] filters the
//! benchmark registry down to composable candidates and produces one
//! [`smoke::SmokeCase`] per survivor. The crate runs cases
//! synchronously and in order; scheduling across suites belongs to
//! the calling harness.

pub mod benchmark;
pub mod config;
pub mod measurement;
pub mod options;
pub mod page;
pub mod registry;
pub mod smoke;
