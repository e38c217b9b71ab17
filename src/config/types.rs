//! Configuration type definitions.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::options::{OptionValue, RunOptions};

use super::error::{ConfigError, ConfigResult};

/// Root configuration for the smoke harness.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HarnessConfig {
    /// Harness identity and selection settings.
    pub harness: HarnessSection,

    /// Baseline option overrides applied to every generated case.
    ///
    /// Values must be scalars so they can map onto run options
    /// without per-option parsing.
    #[serde(default)]
    pub options: toml::Table,
}

/// Harness section configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HarnessSection {
    /// Platform name checked against benchmark disable lists.
    ///
    /// Defaults to the operating system the harness was built for,
    /// following [`std::env::consts::OS`].
    pub platform: Option<String>,

    /// Regular expression restricting which qualifying benchmarks get
    /// a case. Unset means every qualifying benchmark.
    pub filter: Option<String>,
}

impl HarnessConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the name filter does
    /// not compile or an `[options]` entry is not a scalar.
    pub fn validate(&self) -> ConfigResult<()> {
        self.name_filter()?;
        self.baseline_overrides()?;
        Ok(())
    }

    /// Platform name the suite runs as.
    #[must_use]
    pub fn platform(&self) -> &str {
        self.harness
            .platform
            .as_deref()
            .unwrap_or(std::env::consts::OS)
    }

    /// Compiles the benchmark name filter, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the pattern does not
    /// compile.
    pub fn name_filter(&self) -> ConfigResult<Option<Regex>> {
        match &self.harness.filter {
            Some(pattern) => match Regex::new(pattern) {
                Ok(re) => Ok(Some(re)),
                Err(err) => Err(ConfigError::InvalidValue {
                    field: "harness.filter".to_string(),
                    message: err.to_string(),
                }),
            },
            None => Ok(None),
        }
    }

    /// Converts the `[options]` table into baseline run options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for any entry that is not
    /// a scalar.
    pub fn baseline_overrides(&self) -> ConfigResult<RunOptions> {
        let mut options = RunOptions::new();
        for (key, value) in &self.options {
            match scalar_value(value) {
                Some(value) => options.set(key.clone(), value),
                None => {
                    return Err(ConfigError::InvalidValue {
                        field: format!("options.{key}"),
                        message: format!("expected a scalar value, got {}", value.type_str()),
                    })
                },
            }
        }
        Ok(options)
    }
}

fn scalar_value(value: &toml::Value) -> Option<OptionValue> {
    match value {
        toml::Value::String(s) => Some(OptionValue::String(s.clone())),
        toml::Value::Integer(i) => Some(OptionValue::Integer(*i)),
        toml::Value::Float(f) => Some(OptionValue::Float(*f)),
        toml::Value::Boolean(b) => Some(OptionValue::Bool(*b)),
        _ => None,
    }
}
