//! # Smoke Suite Generation
//!
//! This module turns registries into a runnable smoke suite. Every
//! registered benchmark whose measurement is composable gets exactly
//! one case that runs a single page with both repeat counts forced to
//! 1 and asserts a result code of zero.
//!
//! Generation applies three exclusion rules in order: an unregistered
//! measurement, the reserved `session_restore` name prefix, and a
//! required profile archive. Exclusion is silent; an empty suite is a
//! valid result.
//!
//! ## Example
//!
//! ```ignore
//! use pagebench::registry::{BenchmarkRegistry, MeasurementRegistry};
//! use pagebench::smoke::SmokeSuite;
//!
//! let suite = SmokeSuite::generate(&benchmarks, &measurements);
//! let report = suite.run_all();
//! println!("{}", report.summary());
//! std::process::exit(report.exit_code());
//! ```

mod case;
mod filter;
mod report;
mod runner;
mod suite;

pub use case::{CaseStatus, SmokeCase};
pub use filter::{exclusion_for, qualifying_benchmarks, Exclusion, RESERVED_NAME_PREFIX};
pub use report::{CaseReport, SuiteReport};
pub use runner::{assemble_options, harness_baseline, run_pages, PageFailure, RunSummary};
pub use suite::SmokeSuite;
