//! Candidate filtering for the smoke suite.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::benchmark::Benchmark;
use crate::registry::{BenchmarkRegistry, MeasurementRegistry};

/// Name prefix of benchmarks that restore a browser session before
/// measuring. Their first page only works against a prepared profile,
/// so a one-page smoke run cannot exercise them.
///
/// TODO: lift this once the runner can stage a warm profile before the
/// first page.
pub const RESERVED_NAME_PREFIX: &str = "session_restore";

/// Why a benchmark was left out of the smoke suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    /// The benchmark's measurement is not in the registry, so the
    /// generic pipeline cannot drive it.
    NonComposable {
        /// The measurement the benchmark asked for.
        measurement: String,
    },

    /// The benchmark name carries [`RESERVED_NAME_PREFIX`].
    ReservedPrefix,

    /// The benchmark needs a pre-generated profile archive.
    ProfileArchive {
        /// Name of the required archive.
        archive: String,
    },
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonComposable { measurement } => {
                write!(f, "measurement '{measurement}' is not registered")
            },
            Self::ReservedPrefix => {
                write!(f, "name carries the '{RESERVED_NAME_PREFIX}' prefix")
            },
            Self::ProfileArchive { archive } => {
                write!(f, "needs pre-generated profile archive '{archive}'")
            },
        }
    }
}

/// Decides whether a benchmark is excluded from smoke runs.
///
/// Rules are checked in order and the first match wins: unregistered
/// measurement, reserved name prefix, profile archive requirement.
/// `None` means the benchmark qualifies.
#[must_use]
pub fn exclusion_for(
    benchmark: &dyn Benchmark,
    measurements: &MeasurementRegistry,
) -> Option<Exclusion> {
    if !measurements.contains(benchmark.measurement()) {
        return Some(Exclusion::NonComposable {
            measurement: benchmark.measurement().to_string(),
        });
    }
    if benchmark.name().starts_with(RESERVED_NAME_PREFIX) {
        return Some(Exclusion::ReservedPrefix);
    }
    if let Some(archive) = benchmark.generated_profile_archive() {
        return Some(Exclusion::ProfileArchive {
            archive: archive.to_string(),
        });
    }
    None
}

/// Returns every registered benchmark that qualifies for the smoke
/// suite, sorted by name.
///
/// Exclusions are not errors; each one is logged at debug level and
/// the benchmark is dropped from the result.
#[must_use]
pub fn qualifying_benchmarks(
    benchmarks: &BenchmarkRegistry,
    measurements: &MeasurementRegistry,
) -> Vec<Arc<dyn Benchmark>> {
    let mut qualifying = Vec::new();

    for benchmark in benchmarks.benchmarks() {
        match exclusion_for(benchmark.as_ref(), measurements) {
            Some(reason) => {
                debug!("Excluding '{}' from smoke suite: {}", benchmark.name(), reason);
            },
            None => qualifying.push(Arc::clone(benchmark)),
        }
    }

    qualifying.sort_by(|a, b| a.name().cmp(b.name()));
    qualifying
}
