//! Test data generators for benchmarks.
//!
//! Builds registries of synthetic benchmarks and measurements at a
//! requested scale, plus page sets and option-hook fixtures.

use pagebench::benchmark::{Benchmark, BenchmarkResult};
use pagebench::measurement::Measurement;
use pagebench::options::{OptionParser, OptionSpec, RunOptions};
use pagebench::page::{Page, PageSet};
use pagebench::registry::{BenchmarkRegistry, MeasurementRegistry};

// ---------------------------------------------------------------------------
// Measurements
// ---------------------------------------------------------------------------

/// A measurement that does no work per page.
pub struct NoopMeasurement {
    name: String,
}

impl Measurement for NoopMeasurement {
    fn name(&self) -> &str {
        &self.name
    }

    fn run_page(&mut self, _page: &Page, _options: &RunOptions) -> BenchmarkResult<()> {
        Ok(())
    }
}

/// Registry of `count` no-op measurements named `measurement_<i>`.
pub fn measurement_registry(count: usize) -> MeasurementRegistry {
    let mut registry = MeasurementRegistry::new();
    for i in 0..count {
        let name = format!("measurement_{i}");
        registry
            .register(move || {
                Box::new(NoopMeasurement {
                    name: name.clone(),
                })
            })
            .expect("generated measurement names are unique");
    }
    registry
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// A benchmark with a fixed page count and the full set of option
/// hooks exercised.
pub struct SyntheticBenchmark {
    pub name: String,
    pub measurement: String,
    pub page_count: usize,
    pub archive: Option<String>,
}

impl SyntheticBenchmark {
    pub fn new(name: impl Into<String>, measurement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measurement: measurement.into(),
            page_count: 3,
            archive: None,
        }
    }
}

impl Benchmark for SyntheticBenchmark {
    fn name(&self) -> &str {
        &self.name
    }

    fn measurement(&self) -> &str {
        &self.measurement
    }

    fn create_page_set(&self, _options: &RunOptions) -> BenchmarkResult<PageSet> {
        let mut pages = PageSet::new();
        for i in 0..self.page_count {
            pages.add_page(Page::new(
                format!("page_{i}"),
                format!("http://bench.local/{i}"),
            ));
        }
        Ok(pages)
    }

    fn register_args(&self, parser: &mut OptionParser) -> BenchmarkResult<()> {
        parser.register(OptionSpec::new("scroll_speed", 800i64).help("Pixels per second"))?;
        parser.register(OptionSpec::new("capture_traces", false).help("Record trace files"))?;
        Ok(())
    }

    fn set_arg_defaults(&self, parser: &mut OptionParser) -> BenchmarkResult<()> {
        parser.set_default("scroll_speed", 400i64)
    }

    fn options(&self) -> RunOptions {
        let mut overrides = RunOptions::new();
        overrides.set("capture_traces", false);
        overrides
    }

    fn generated_profile_archive(&self) -> Option<&str> {
        self.archive.as_deref()
    }
}

/// Registries where every benchmark qualifies for the smoke suite.
pub fn composable_registries(count: usize) -> (BenchmarkRegistry, MeasurementRegistry) {
    let measurements = measurement_registry(4);
    let mut benchmarks = BenchmarkRegistry::new();
    for i in 0..count {
        benchmarks
            .register(SyntheticBenchmark::new(
                format!("benchmark_{i:03}"),
                format!("measurement_{}", i % 4),
            ))
            .expect("generated benchmark names are unique");
    }
    (benchmarks, measurements)
}

/// Registries mixing qualifying benchmarks with each exclusion kind.
pub fn mixed_registries(count: usize) -> (BenchmarkRegistry, MeasurementRegistry) {
    let measurements = measurement_registry(4);
    let mut benchmarks = BenchmarkRegistry::new();
    for i in 0..count {
        let mut benchmark = if i % 5 == 3 {
            SyntheticBenchmark::new(format!("session_restore_{i:03}"), "measurement_0")
        } else if i % 5 == 4 {
            SyntheticBenchmark::new(format!("benchmark_{i:03}"), "unregistered")
        } else {
            SyntheticBenchmark::new(
                format!("benchmark_{i:03}"),
                format!("measurement_{}", i % 4),
            )
        };
        if i % 7 == 6 {
            benchmark.archive = Some("warm_profile".to_string());
        }
        benchmarks
            .register(benchmark)
            .expect("generated benchmark names are unique");
    }
    (benchmarks, measurements)
}

// ---------------------------------------------------------------------------
// Page sets
// ---------------------------------------------------------------------------

/// A page set of `count` pages with the first `disabled` of them
/// disabled.
pub fn page_set(count: usize, disabled: usize) -> PageSet {
    let mut pages = PageSet::new();
    for i in 0..count {
        let mut page = Page::new(format!("page_{i}"), format!("http://bench.local/{i}"));
        if i < disabled {
            page = page.disabled();
        }
        pages.add_page(page);
    }
    pages
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// A harness configuration with a filter and a few overrides.
pub fn harness_config_toml() -> String {
    r#"
        [harness]
        platform = "linux"
        filter = "^benchmark_"

        [options]
        output_format = "none"
        capture_traces = false
        scroll_speed = 600
    "#
    .to_string()
}
