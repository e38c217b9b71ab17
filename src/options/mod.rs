//! # Run Options
//!
//! This module defines the option bag a benchmark run receives and the
//! parser that collects option declarations. Options flow through the
//! harness in layers: the harness baseline is applied first, declared
//! defaults fill the gaps, and per-benchmark overrides win last.

mod bag;
mod parser;
mod value;

pub use bag::RunOptions;
pub use parser::{OptionParser, OptionSpec};
pub use value::OptionValue;
