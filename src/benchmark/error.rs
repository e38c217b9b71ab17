//! Benchmark error types and result aliases.

use std::fmt;

/// Result type alias for benchmark operations.
pub type BenchmarkResult<T> = Result<T, BenchmarkError>;

/// Errors that can occur while defining or running benchmarks.
#[derive(Debug, Clone, PartialEq)]
pub enum BenchmarkError {
    /// A registry already holds an entry with this name.
    AlreadyRegistered(String),

    /// An option with this name is already registered on the parser.
    DuplicateOption(String),

    /// No option with this name is registered on the parser.
    UnknownOption(String),

    /// An option carries a value the harness cannot accept.
    InvalidOption {
        /// Name of the offending option.
        name: String,
        /// What was wrong with the value.
        message: String,
    },

    /// A benchmark names a measurement the registry does not hold.
    UnknownMeasurement {
        /// Name of the benchmark.
        benchmark: String,
        /// The measurement it asked for.
        measurement: String,
    },

    /// Page set construction failed.
    PageSet(String),

    /// A measurement failed on a page.
    Measurement {
        /// Name of the page being measured.
        page: String,
        /// Failure description.
        message: String,
    },
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRegistered(name) => write!(f, "already registered: {name}"),
            Self::DuplicateOption(name) => write!(f, "option '{name}' is already registered"),
            Self::UnknownOption(name) => write!(f, "unknown option: {name}"),
            Self::InvalidOption { name, message } => {
                write!(f, "invalid value for option '{name}': {message}")
            },
            Self::UnknownMeasurement {
                benchmark,
                measurement,
            } => {
                write!(
                    f,
                    "benchmark '{benchmark}' names unregistered measurement '{measurement}'"
                )
            },
            Self::PageSet(msg) => write!(f, "page set construction failed: {msg}"),
            Self::Measurement { page, message } => {
                write!(f, "measurement failed on page '{page}': {message}")
            },
        }
    }
}

impl std::error::Error for BenchmarkError {}
