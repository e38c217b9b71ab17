//! The core Benchmark trait.
//!
//! Every benchmark the harness can run implements this trait. A
//! benchmark pairs a named measurement with a page set and hooks into
//! option handling at well-defined points.

use super::{BenchmarkError, BenchmarkResult};
use crate::options::{OptionParser, OptionSpec, RunOptions};
use crate::page::PageSet;

/// Option name: number of runs of each individual page.
pub const PAGE_REPEAT: &str = "page_repeat";

/// Option name: number of runs of the whole page set.
pub const PAGESET_REPEAT: &str = "pageset_repeat";

/// Option name: how results are rendered after a run.
pub const OUTPUT_FORMAT: &str = "output_format";

/// The contract every benchmark implements.
///
/// # Hook order
///
/// When the harness prepares a run it calls the hooks in a fixed
/// order:
///
/// 1. `register_args()` - declare benchmark-specific options
/// 2. `set_arg_defaults()` - adjust defaults of declared options
/// 3. `process_args()` - inspect and rewrite assembled values
/// 4. `options()` - final overrides that always win
/// 5. `create_page_set()` - build the pages for this run
///
/// # Example
///
/// ```ignore
/// use pagebench::benchmark::*;
/// use pagebench::page::{Page, PageSet};
/// use pagebench::options::RunOptions;
///
/// struct StartupCold;
///
/// impl Benchmark for StartupCold {
///     fn name(&self) -> &str {
///         "startup_cold"
///     }
///
///     fn measurement(&self) -> &str {
///         "startup"
///     }
///
///     fn create_page_set(&self, _options: &RunOptions) -> BenchmarkResult<PageSet> {
///         Ok(PageSet::from_pages(vec![Page::new(
///             "blank",
///             "http://test.local/blank",
///         )]))
///     }
/// }
/// ```
pub trait Benchmark: Send + Sync {
    /// Unique name of the benchmark.
    ///
    /// Registries key on this name and reports carry it.
    fn name(&self) -> &str;

    /// Name of the measurement this benchmark drives.
    ///
    /// The smoke suite only accepts benchmarks whose measurement is
    /// registered; anything else is assumed to carry custom run logic
    /// the generic pipeline cannot reproduce.
    fn measurement(&self) -> &str;

    /// Builds the page set for a run.
    ///
    /// Called after options are fully assembled, so a benchmark can
    /// size or shape its page set from them.
    ///
    /// # Errors
    ///
    /// Returns `BenchmarkError::PageSet` if the pages cannot be
    /// constructed.
    fn create_page_set(&self, options: &RunOptions) -> BenchmarkResult<PageSet>;

    /// Declares benchmark-specific options on the parser.
    ///
    /// The default implementation declares nothing.
    ///
    /// # Errors
    ///
    /// Returns `BenchmarkError::DuplicateOption` if a declared name
    /// collides with an existing option.
    fn register_args(&self, _parser: &mut OptionParser) -> BenchmarkResult<()> {
        Ok(())
    }

    /// Adjusts defaults of already declared options.
    ///
    /// Runs after all declarations, so a benchmark may retune a
    /// framework default without redeclaring it.
    ///
    /// # Errors
    ///
    /// Returns `BenchmarkError::UnknownOption` if the option was never
    /// declared.
    fn set_arg_defaults(&self, _parser: &mut OptionParser) -> BenchmarkResult<()> {
        Ok(())
    }

    /// Inspects and rewrites assembled option values.
    ///
    /// Called after defaults are merged. This is the place to reject
    /// combinations the benchmark cannot run or to derive one option
    /// from another.
    ///
    /// # Errors
    ///
    /// Returns `BenchmarkError::InvalidOption` if a value is
    /// unacceptable.
    fn process_args(&self, _options: &mut RunOptions) -> BenchmarkResult<()> {
        Ok(())
    }

    /// Final per-benchmark overrides.
    ///
    /// Applied on top of everything else, after `process_args()`. The
    /// default implementation overrides nothing.
    fn options(&self) -> RunOptions {
        RunOptions::new()
    }

    /// Name of a pre-generated browser profile archive this benchmark
    /// needs, if any.
    ///
    /// Benchmarks that need one cannot run on a bare checkout and are
    /// excluded from generated smoke suites.
    fn generated_profile_archive(&self) -> Option<&str> {
        None
    }

    /// Platforms this benchmark must not run on.
    ///
    /// Names follow [`std::env::consts::OS`]. The default is none.
    fn disabled_platforms(&self) -> &[&str] {
        &[]
    }
}

/// Declares the options every benchmark run understands.
///
/// # Errors
///
/// Returns `BenchmarkError::DuplicateOption` if any framework option
/// is already declared, which means the parser was not fresh.
pub fn register_framework_args(parser: &mut OptionParser) -> BenchmarkResult<()> {
    parser.register(
        OptionSpec::new(PAGE_REPEAT, 1i64).help("Number of times to run each individual page"),
    )?;
    parser.register(
        OptionSpec::new(PAGESET_REPEAT, 1i64).help("Number of times to run the whole page set"),
    )?;
    parser.register(
        OptionSpec::new(OUTPUT_FORMAT, "text").help("Output format for recorded results"),
    )?;
    Ok(())
}

/// Validates framework option values after assembly.
///
/// # Errors
///
/// Returns `BenchmarkError::InvalidOption` if a repeat count is
/// missing, not an integer, or below one.
pub fn process_framework_args(options: &mut RunOptions) -> BenchmarkResult<()> {
    for name in [PAGE_REPEAT, PAGESET_REPEAT] {
        let count = match options.get(name) {
            Some(value) => {
                value
                    .as_integer()
                    .ok_or_else(|| BenchmarkError::InvalidOption {
                        name: name.to_string(),
                        message: format!("expected an integer, got {}", value.type_name()),
                    })?
            },
            None => {
                return Err(BenchmarkError::InvalidOption {
                    name: name.to_string(),
                    message: "expected an integer".to_string(),
                })
            },
        };
        if count < 1 {
            return Err(BenchmarkError::InvalidOption {
                name: name.to_string(),
                message: format!("must be at least 1, got {count}"),
            });
        }
    }
    Ok(())
}
