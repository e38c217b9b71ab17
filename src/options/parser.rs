//! Option registration and defaults.

use crate::benchmark::{BenchmarkError, BenchmarkResult};

use super::bag::RunOptions;
use super::value::OptionValue;

/// Declaration of a single run option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    /// Option name, used as the key in [`RunOptions`].
    name: String,

    /// Default value, also fixing the option's type.
    default: OptionValue,

    /// Help text shown in listings.
    help: String,
}

impl OptionSpec {
    /// Creates a new option declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, default: impl Into<OptionValue>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            help: String::new(),
        }
    }

    /// Attaches help text.
    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Returns the option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default value.
    #[must_use]
    pub fn default(&self) -> &OptionValue {
        &self.default
    }

    /// Returns the help text.
    #[must_use]
    pub fn help_text(&self) -> &str {
        &self.help
    }
}

/// Collects option declarations from the framework and from
/// benchmarks.
///
/// Declaration order is preserved. Names must be unique across all
/// contributors; a benchmark cannot silently shadow a framework
/// option.
#[derive(Debug, Clone, Default)]
pub struct OptionParser {
    specs: Vec<OptionSpec>,
}

impl OptionParser {
    /// Creates an empty parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an option declaration.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::DuplicateOption`] if an option with
    /// the same name is already registered.
    pub fn register(&mut self, spec: OptionSpec) -> BenchmarkResult<()> {
        if self.get(spec.name()).is_some() {
            return Err(BenchmarkError::DuplicateOption(spec.name().to_string()));
        }
        self.specs.push(spec);
        Ok(())
    }

    /// Replaces the default value of an already registered option.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::UnknownOption`] if no option with
    /// this name is registered.
    pub fn set_default(
        &mut self,
        name: &str,
        default: impl Into<OptionValue>,
    ) -> BenchmarkResult<()> {
        match self.specs.iter_mut().find(|spec| spec.name == name) {
            Some(spec) => {
                spec.default = default.into();
                Ok(())
            },
            None => Err(BenchmarkError::UnknownOption(name.to_string())),
        }
    }

    /// Looks up a declaration by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Returns every declared default as an option bag.
    #[must_use]
    pub fn default_values(&self) -> RunOptions {
        let mut options = RunOptions::new();
        for spec in &self.specs {
            options.set(spec.name.clone(), spec.default.clone());
        }
        options
    }

    /// Returns the number of registered options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` if no options are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
