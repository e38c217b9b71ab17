//! Suite and per-case reporting.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::case::CaseStatus;
use super::runner::RunSummary;

/// Report for one executed smoke case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    /// Name of the benchmark under test.
    pub benchmark: String,

    /// How the case ended.
    pub status: CaseStatus,

    /// Page run summary, present when the run reached execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RunSummary>,

    /// Wall-clock time spent on this case.
    pub duration: Duration,
}

impl CaseReport {
    /// Builds a report for a finished case.
    #[must_use]
    pub fn finished(
        benchmark: String,
        status: CaseStatus,
        summary: Option<RunSummary>,
        duration: Duration,
    ) -> Self {
        Self {
            benchmark,
            status,
            summary,
            duration,
        }
    }

    /// One line describing this case, used in suite summaries.
    #[must_use]
    pub fn line(&self) -> String {
        match (&self.status, &self.summary) {
            (CaseStatus::Passed, Some(summary)) => format!(
                "{:<30} passed ({} page(s) in {:.2}s)",
                self.benchmark,
                summary.pages_run,
                self.duration.as_secs_f64()
            ),
            _ => format!("{:<30} {}", self.benchmark, self.status),
        }
    }
}

/// Report for a whole suite run.
///
/// Counts are tallied once at construction so a rendered report and
/// its JSON form always agree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteReport {
    /// Per-case reports, in execution order.
    pub cases: Vec<CaseReport>,

    /// Number of cases that passed.
    pub passed: usize,

    /// Number of cases that failed their assertion.
    pub failed: usize,

    /// Number of cases that broke during setup.
    pub errored: usize,

    /// Number of cases that were skipped.
    pub skipped: usize,

    /// Wall-clock time for the whole run.
    pub duration: Duration,

    /// When the run started.
    pub started_at: DateTime<Utc>,
}

impl SuiteReport {
    /// Builds a report from executed case reports.
    #[must_use]
    pub fn new(cases: Vec<CaseReport>, started_at: DateTime<Utc>, duration: Duration) -> Self {
        let mut passed = 0;
        let mut failed = 0;
        let mut errored = 0;
        let mut skipped = 0;
        for case in &cases {
            match case.status {
                CaseStatus::Passed => passed += 1,
                CaseStatus::Failed { .. } => failed += 1,
                CaseStatus::Errored { .. } => errored += 1,
                CaseStatus::Skipped { .. } => skipped += 1,
            }
        }

        Self {
            cases,
            passed,
            failed,
            errored,
            skipped,
            duration,
            started_at,
        }
    }

    /// Total number of cases, skipped ones included.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cases.len()
    }

    /// Process-style exit code: 0 when nothing failed or errored.
    ///
    /// Skipped cases do not affect the code; an empty suite is a
    /// clean run.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 && self.errored == 0 {
            0
        } else {
            1
        }
    }

    /// Renders a human-readable report.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Smoke Suite Report ===\n\n");

        for case in &self.cases {
            report.push_str(&case.line());
            report.push('\n');
        }

        report.push_str(&format!(
            "\n{} case(s): {} passed, {} failed, {} errored, {} skipped in {:.2}s\n",
            self.total(),
            self.passed,
            self.failed,
            self.errored,
            self.skipped,
            self.duration.as_secs_f64()
        ));
        report
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
