//! Suite generation and execution.

use std::time::Instant;

use chrono::Utc;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::config::{ConfigResult, HarnessConfig};
use crate::options::RunOptions;
use crate::registry::{BenchmarkRegistry, MeasurementRegistry};

use super::case::SmokeCase;
use super::filter::qualifying_benchmarks;
use super::report::SuiteReport;
use super::runner::harness_baseline;

/// A generated smoke suite: one case per qualifying benchmark.
///
/// The suite is a plain list. Any harness can pull the cases out and
/// schedule them itself, or call [`SmokeSuite::run_all`] to execute
/// them in order.
#[derive(Debug, Default)]
pub struct SmokeSuite {
    cases: Vec<SmokeCase>,
}

impl SmokeSuite {
    /// Generates the suite with default settings.
    ///
    /// Every qualifying benchmark gets a case configured for the
    /// current platform and the standard baseline.
    #[must_use]
    pub fn generate(benchmarks: &BenchmarkRegistry, measurements: &MeasurementRegistry) -> Self {
        Self {
            cases: build_cases(
                benchmarks,
                measurements,
                None,
                &harness_baseline(),
                std::env::consts::OS,
            ),
        }
    }

    /// Generates the suite under a harness configuration.
    ///
    /// The configuration contributes the platform name, baseline
    /// option overrides and an optional name filter applied after the
    /// standard exclusion rules.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the name filter does not
    /// compile or an override value is not a scalar.
    pub fn generate_with(
        benchmarks: &BenchmarkRegistry,
        measurements: &MeasurementRegistry,
        config: &HarnessConfig,
    ) -> ConfigResult<Self> {
        let filter = config.name_filter()?;
        let mut baseline = harness_baseline();
        baseline.apply(&config.baseline_overrides()?);

        Ok(Self {
            cases: build_cases(
                benchmarks,
                measurements,
                filter.as_ref(),
                &baseline,
                config.platform(),
            ),
        })
    }

    /// Returns the generated cases in order.
    #[must_use]
    pub fn cases(&self) -> &[SmokeCase] {
        &self.cases
    }

    /// Returns the benchmark names covered by the suite, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.cases.iter().map(SmokeCase::name).collect()
    }

    /// Returns the number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if no benchmark qualified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Runs every case in order and reports the results.
    ///
    /// A failing or erroring case never stops the suite; the remaining
    /// cases still run. An empty suite reports a clean run.
    #[must_use]
    pub fn run_all(&self) -> SuiteReport {
        let started_at = Utc::now();
        let start = Instant::now();
        info!("Running {} smoke case(s)", self.cases.len());

        let mut reports = Vec::with_capacity(self.cases.len());
        for case in &self.cases {
            let report = case.run();
            if report.status.is_passed() || report.status.is_skipped() {
                info!("{}: {}", report.benchmark, report.status);
            } else {
                warn!("{}: {}", report.benchmark, report.status);
            }
            reports.push(report);
        }

        let report = SuiteReport::new(reports, started_at, start.elapsed());
        info!(
            "Suite finished: {} passed, {} failed, {} errored, {} skipped",
            report.passed, report.failed, report.errored, report.skipped
        );
        report
    }
}

fn build_cases(
    benchmarks: &BenchmarkRegistry,
    measurements: &MeasurementRegistry,
    filter: Option<&Regex>,
    baseline: &RunOptions,
    platform: &str,
) -> Vec<SmokeCase> {
    let mut cases = Vec::new();

    for benchmark in qualifying_benchmarks(benchmarks, measurements) {
        if let Some(re) = filter {
            if !re.is_match(benchmark.name()) {
                debug!("Excluding '{}': name filter does not match", benchmark.name());
                continue;
            }
        }
        // Qualification guarantees the measurement is registered.
        if let Some(ctor) = measurements.ctor(benchmark.measurement()) {
            cases.push(
                SmokeCase::new(benchmark, ctor)
                    .with_baseline(baseline.clone())
                    .with_platform(platform),
            );
        }
    }

    cases
}
