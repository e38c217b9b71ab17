//! Option assembly and page execution.

use serde::Serialize;
use tracing::debug;

use crate::benchmark::{
    process_framework_args, register_framework_args, Benchmark, BenchmarkResult, OUTPUT_FORMAT,
    PAGESET_REPEAT, PAGE_REPEAT,
};
use crate::measurement::Measurement;
use crate::options::{OptionParser, RunOptions};
use crate::page::PageSet;

/// The option baseline every smoke run starts from.
///
/// Output is discarded; a smoke run only cares whether pages survive
/// the pipeline.
#[must_use]
pub fn harness_baseline() -> RunOptions {
    let mut options = RunOptions::new();
    options.set(OUTPUT_FORMAT, "none");
    options
}

/// Assembles the final options for one benchmark run.
///
/// Layering, from weakest to strongest:
///
/// 1. the caller's baseline (copied, never mutated)
/// 2. declared defaults, filling only keys the baseline left unset
/// 3. values rewritten by `process_args()`
/// 4. the benchmark's own `options()` overrides
/// 5. both repeat counts forced to 1
///
/// The forced repeats come last so nothing a benchmark declares can
/// turn a smoke run into a full run.
///
/// # Errors
///
/// Returns an error if a benchmark hook rejects the declarations or
/// values, or if a framework option fails validation.
pub fn assemble_options(
    benchmark: &dyn Benchmark,
    baseline: &RunOptions,
) -> BenchmarkResult<RunOptions> {
    let mut parser = OptionParser::new();
    register_framework_args(&mut parser)?;
    benchmark.register_args(&mut parser)?;
    benchmark.set_arg_defaults(&mut parser)?;

    let mut options = baseline.clone();
    options.merge_defaults(&parser.default_values());

    process_framework_args(&mut options)?;
    benchmark.process_args(&mut options)?;

    options.apply(&benchmark.options());
    options.set(PAGE_REPEAT, 1i64);
    options.set(PAGESET_REPEAT, 1i64);

    debug!(
        "Assembled {} option(s) for benchmark '{}'",
        options.len(),
        benchmark.name()
    );
    Ok(options)
}

/// One failed page visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFailure {
    /// Name of the page that failed.
    pub page: String,

    /// Failure description.
    pub message: String,
}

/// Outcome of driving a measurement over a page set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Number of failed page visits. Zero means success.
    pub result_code: i32,

    /// Total page visits performed, repeats included.
    pub pages_run: usize,

    /// Every failed visit, in execution order.
    pub failures: Vec<PageFailure>,
}

impl RunSummary {
    /// Returns `true` if no page visit failed.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.result_code == 0
    }
}

/// Runs a measurement over every enabled page.
///
/// The loop honors both repeat options: the whole set is cycled
/// `pageset_repeat` times and each page is visited `page_repeat` times
/// per cycle. A repeat value that is missing or below 1 is treated as
/// 1, so a caller bypassing option validation still visits each
/// enabled page at least once. A failing page is recorded and the run
/// continues, so the summary's result code counts every failed visit.
pub fn run_pages(
    measurement: &mut dyn Measurement,
    pages: &PageSet,
    options: &RunOptions,
) -> RunSummary {
    let pageset_repeat = options.get_integer(PAGESET_REPEAT).unwrap_or(1).max(1);
    let page_repeat = options.get_integer(PAGE_REPEAT).unwrap_or(1).max(1);

    let mut pages_run = 0;
    let mut failures = Vec::new();

    for _ in 0..pageset_repeat {
        for page in pages.enabled_pages() {
            for _ in 0..page_repeat {
                pages_run += 1;
                if let Err(err) = measurement.run_page(page, options) {
                    debug!("Page '{}' failed: {}", page.name, err);
                    failures.push(PageFailure {
                        page: page.name.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }
    }

    RunSummary {
        result_code: failures.len() as i32,
        pages_run,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::BenchmarkError;
    use crate::options::OptionSpec;
    use crate::page::Page;

    struct TalliedMeasurement {
        visits: Vec<String>,
        fail_on: Option<&'static str>,
    }

    impl TalliedMeasurement {
        fn new() -> Self {
            Self {
                visits: Vec::new(),
                fail_on: None,
            }
        }
    }

    impl Measurement for TalliedMeasurement {
        fn name(&self) -> &str {
            "tallied"
        }

        fn run_page(&mut self, page: &Page, _options: &RunOptions) -> BenchmarkResult<()> {
            self.visits.push(page.name.clone());
            if self.fail_on == Some(page.name.as_str()) {
                return Err(BenchmarkError::Measurement {
                    page: page.name.clone(),
                    message: "simulated failure".to_string(),
                });
            }
            Ok(())
        }
    }

    struct HookedBenchmark {
        overrides: RunOptions,
    }

    impl HookedBenchmark {
        fn plain() -> Self {
            Self {
                overrides: RunOptions::new(),
            }
        }
    }

    impl Benchmark for HookedBenchmark {
        fn name(&self) -> &str {
            "hooked"
        }

        fn measurement(&self) -> &str {
            "tallied"
        }

        fn create_page_set(&self, _options: &RunOptions) -> BenchmarkResult<PageSet> {
            Ok(PageSet::from_pages(vec![Page::new(
                "blank",
                "http://test.local/blank",
            )]))
        }

        fn register_args(&self, parser: &mut OptionParser) -> BenchmarkResult<()> {
            parser.register(OptionSpec::new("scroll_speed", 800i64))
        }

        fn set_arg_defaults(&self, parser: &mut OptionParser) -> BenchmarkResult<()> {
            parser.set_default("scroll_speed", 400i64)
        }

        fn process_args(&self, options: &mut RunOptions) -> BenchmarkResult<()> {
            if options.get_integer("scroll_speed") == Some(0) {
                return Err(BenchmarkError::InvalidOption {
                    name: "scroll_speed".to_string(),
                    message: "must be positive".to_string(),
                });
            }
            Ok(())
        }

        fn options(&self) -> RunOptions {
            self.overrides.clone()
        }
    }

    #[test]
    fn test_baseline_discards_output() {
        let baseline = harness_baseline();
        assert_eq!(baseline.get_string(OUTPUT_FORMAT), Some("none"));
    }

    #[test]
    fn test_assemble_forces_single_repeats() {
        let mut overrides = RunOptions::new();
        overrides.set(PAGE_REPEAT, 10i64);
        overrides.set(PAGESET_REPEAT, 5i64);
        let benchmark = HookedBenchmark { overrides };

        let options = assemble_options(&benchmark, &harness_baseline()).unwrap();
        assert_eq!(options.get_integer(PAGE_REPEAT), Some(1));
        assert_eq!(options.get_integer(PAGESET_REPEAT), Some(1));
    }

    #[test]
    fn test_assemble_keeps_baseline_over_defaults() {
        let mut baseline = harness_baseline();
        baseline.set("scroll_speed", 1200i64);

        let options = assemble_options(&HookedBenchmark::plain(), &baseline).unwrap();
        assert_eq!(options.get_integer("scroll_speed"), Some(1200));
        assert_eq!(options.get_string(OUTPUT_FORMAT), Some("none"));
    }

    #[test]
    fn test_assemble_applies_tuned_default() {
        let options = assemble_options(&HookedBenchmark::plain(), &harness_baseline()).unwrap();
        // register_args declares 800, set_arg_defaults retunes to 400.
        assert_eq!(options.get_integer("scroll_speed"), Some(400));
    }

    #[test]
    fn test_assemble_benchmark_overrides_win() {
        let mut overrides = RunOptions::new();
        overrides.set("scroll_speed", 50i64);
        let benchmark = HookedBenchmark { overrides };

        let options = assemble_options(&benchmark, &harness_baseline()).unwrap();
        assert_eq!(options.get_integer("scroll_speed"), Some(50));
    }

    #[test]
    fn test_assemble_propagates_hook_errors() {
        let mut baseline = harness_baseline();
        baseline.set("scroll_speed", 0i64);

        let err = assemble_options(&HookedBenchmark::plain(), &baseline).unwrap_err();
        match err {
            BenchmarkError::InvalidOption { name, .. } => assert_eq!(name, "scroll_speed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_assemble_does_not_mutate_baseline() {
        let baseline = harness_baseline();
        let _ = assemble_options(&HookedBenchmark::plain(), &baseline).unwrap();
        assert!(!baseline.contains_key("scroll_speed"));
    }

    fn repeat_options(page_repeat: i64, pageset_repeat: i64) -> RunOptions {
        let mut options = RunOptions::new();
        options.set(PAGE_REPEAT, page_repeat);
        options.set(PAGESET_REPEAT, pageset_repeat);
        options
    }

    #[test]
    fn test_run_pages_honors_repeats() {
        let pages = PageSet::from_pages(vec![
            Page::new("a", "http://test.local/a"),
            Page::new("b", "http://test.local/b"),
        ]);
        let mut measurement = TalliedMeasurement::new();

        let summary = run_pages(&mut measurement, &pages, &repeat_options(2, 3));
        assert_eq!(summary.pages_run, 12);
        assert!(summary.succeeded());
        assert_eq!(measurement.visits.len(), 12);
        assert_eq!(&measurement.visits[..4], &["a", "a", "b", "b"]);
    }

    #[test]
    fn test_run_pages_skips_disabled() {
        let pages = PageSet::from_pages(vec![
            Page::new("a", "http://test.local/a").disabled(),
            Page::new("b", "http://test.local/b"),
        ]);
        let mut measurement = TalliedMeasurement::new();

        let summary = run_pages(&mut measurement, &pages, &repeat_options(1, 1));
        assert_eq!(summary.pages_run, 1);
        assert_eq!(measurement.visits, vec!["b"]);
    }

    #[test]
    fn test_run_pages_counts_failures_and_continues() {
        let pages = PageSet::from_pages(vec![
            Page::new("a", "http://test.local/a"),
            Page::new("broken", "http://test.local/broken"),
            Page::new("c", "http://test.local/c"),
        ]);
        let mut measurement = TalliedMeasurement::new();
        measurement.fail_on = Some("broken");

        let summary = run_pages(&mut measurement, &pages, &repeat_options(1, 2));
        assert_eq!(summary.result_code, 2);
        assert!(!summary.succeeded());
        assert_eq!(summary.pages_run, 6);
        assert_eq!(summary.failures.len(), 2);
        assert_eq!(summary.failures[0].page, "broken");
    }

    #[test]
    fn test_run_pages_empty_set() {
        let pages = PageSet::new();
        let mut measurement = TalliedMeasurement::new();

        let summary = run_pages(&mut measurement, &pages, &repeat_options(1, 1));
        assert_eq!(summary.pages_run, 0);
        assert!(summary.succeeded());
    }

    #[test]
    fn test_run_pages_treats_sub_one_repeats_as_one() {
        let pages = PageSet::from_pages(vec![Page::new("a", "http://test.local/a")]);

        let mut measurement = TalliedMeasurement::new();
        let summary = run_pages(&mut measurement, &pages, &repeat_options(0, -3));
        assert_eq!(summary.pages_run, 1);
        assert_eq!(measurement.visits, vec!["a"]);

        // No repeat options at all behaves the same.
        let mut measurement = TalliedMeasurement::new();
        let summary = run_pages(&mut measurement, &pages, &RunOptions::new());
        assert_eq!(summary.pages_run, 1);
    }
}
