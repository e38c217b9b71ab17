//! A single generated smoke case.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::benchmark::Benchmark;
use crate::measurement::MeasurementCtor;
use crate::options::RunOptions;

use super::report::CaseReport;
use super::runner::{assemble_options, harness_baseline, run_pages};

/// Outcome of one smoke case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// The narrowed run finished with result code 0.
    Passed,

    /// The run finished with a non-zero result code.
    Failed {
        /// Assertion message, naming the benchmark.
        message: String,
    },

    /// Setup broke before the assertion could be checked.
    Errored {
        /// Description of what went wrong.
        message: String,
    },

    /// The case did not run on purpose.
    Skipped {
        /// Why the case was skipped.
        reason: String,
    },
}

impl CaseStatus {
    /// Returns `true` if the case passed.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Returns `true` if the case failed its assertion.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns `true` if the case broke during setup.
    #[must_use]
    pub fn is_errored(&self) -> bool {
        matches!(self, Self::Errored { .. })
    }

    /// Returns `true` if the case was skipped.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Failed { message } => write!(f, "failed: {message}"),
            Self::Errored { message } => write!(f, "errored: {message}"),
            Self::Skipped { reason } => write!(f, "skipped: {reason}"),
        }
    }
}

/// One smoke test for one qualifying benchmark.
///
/// A case owns everything it needs to run: the benchmark, the
/// constructor for its measurement, the option baseline and the
/// platform name. Cases share nothing, so a suite can run them in any
/// order.
pub struct SmokeCase {
    benchmark: Arc<dyn Benchmark>,
    measurement: MeasurementCtor,
    baseline: RunOptions,
    platform: String,
}

impl SmokeCase {
    /// Creates a case with the default baseline and the current
    /// platform.
    #[must_use]
    pub fn new(benchmark: Arc<dyn Benchmark>, measurement: MeasurementCtor) -> Self {
        Self {
            benchmark,
            measurement,
            baseline: harness_baseline(),
            platform: std::env::consts::OS.to_string(),
        }
    }

    /// Replaces the option baseline.
    #[must_use]
    pub fn with_baseline(mut self, baseline: RunOptions) -> Self {
        self.baseline = baseline;
        self
    }

    /// Replaces the platform name checked against the benchmark's
    /// disabled list.
    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Name of the benchmark under test.
    #[must_use]
    pub fn name(&self) -> &str {
        self.benchmark.name()
    }

    /// Runs the case and reports the outcome.
    ///
    /// The run narrows the benchmark's page set to one page, forces
    /// both repeat counts to 1 and asserts a result code of zero. A
    /// setup error reports [`CaseStatus::Errored`]; a disabled platform
    /// or a page set with nothing enabled reports
    /// [`CaseStatus::Skipped`].
    #[must_use]
    pub fn run(&self) -> CaseReport {
        let start = Instant::now();
        let name = self.benchmark.name().to_string();

        if self.benchmark.disabled_platforms().contains(&self.platform.as_str()) {
            debug!("Skipping '{}': disabled on '{}'", name, self.platform);
            return CaseReport::finished(
                name,
                CaseStatus::Skipped {
                    reason: format!("disabled on platform '{}'", self.platform),
                },
                None,
                start.elapsed(),
            );
        }

        let options = match assemble_options(self.benchmark.as_ref(), &self.baseline) {
            Ok(options) => options,
            Err(err) => {
                return CaseReport::finished(
                    name,
                    CaseStatus::Errored {
                        message: format!("option assembly failed: {err}"),
                    },
                    None,
                    start.elapsed(),
                )
            },
        };

        let pages = match self.benchmark.create_page_set(&options) {
            Ok(pages) => pages.first_enabled(),
            Err(err) => {
                return CaseReport::finished(
                    name,
                    CaseStatus::Errored {
                        message: err.to_string(),
                    },
                    None,
                    start.elapsed(),
                )
            },
        };

        if pages.enabled_pages().next().is_none() {
            debug!("Skipping '{}': no enabled pages", name);
            return CaseReport::finished(
                name,
                CaseStatus::Skipped {
                    reason: "page set has no enabled pages".to_string(),
                },
                None,
                start.elapsed(),
            );
        }

        let mut measurement = (self.measurement)();
        let summary = run_pages(measurement.as_mut(), &pages, &options);

        let status = if summary.succeeded() {
            CaseStatus::Passed
        } else {
            CaseStatus::Failed {
                message: format!(
                    "benchmark '{}' finished with result code {}",
                    name, summary.result_code
                ),
            }
        };
        CaseReport::finished(name, status, Some(summary), start.elapsed())
    }
}

impl std::fmt::Debug for SmokeCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmokeCase")
            .field("benchmark", &self.benchmark.name())
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}
