//! The Measurement trait.

use std::sync::Arc;

use crate::benchmark::BenchmarkResult;
use crate::options::RunOptions;
use crate::page::Page;

/// Shared constructor for a measurement.
///
/// Every page run gets a fresh measurement instance so state recorded
/// on one page can never leak into the next. The constructor is
/// reference-counted so a registry entry and any number of generated
/// cases can hold it at once.
pub type MeasurementCtor = Arc<dyn Fn() -> Box<dyn Measurement> + Send + Sync>;

/// A measurement visits pages and records results.
///
/// Implementations may keep mutable state across the pages of a single
/// run (timers, counters, partial aggregates). A failure on one page is
/// reported and does not stop the remaining pages.
pub trait Measurement {
    /// Unique name of this measurement.
    ///
    /// Benchmarks refer to measurements by this name.
    fn name(&self) -> &str;

    /// Visits a single page and records its result.
    ///
    /// # Errors
    ///
    /// Returns an error if the page could not be measured. The runner
    /// counts the failure and continues with the next page.
    fn run_page(&mut self, page: &Page, options: &RunOptions) -> BenchmarkResult<()>;
}
