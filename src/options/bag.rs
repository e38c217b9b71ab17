//! The run option bag.

use std::collections::HashMap;

use super::value::OptionValue;

/// Options governing a benchmark run.
///
/// A flat key-value bag assembled in layers: harness baseline first,
/// then registered defaults, then per-benchmark overrides. Later
/// layers use [`RunOptions::apply`] to overwrite and
/// [`RunOptions::merge_defaults`] to fill only what is still unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    values: HashMap<String, OptionValue>,
}

impl RunOptions {
    /// Creates an empty option bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, replacing any existing value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Sets a value only if the key is not already present.
    pub fn ensure(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// Gets a string value.
    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(OptionValue::as_str)
    }

    /// Gets an integer value.
    #[must_use]
    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(OptionValue::as_integer)
    }

    /// Gets a float value.
    #[must_use]
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.values.get(key).and_then(OptionValue::as_float)
    }

    /// Gets a boolean value.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(OptionValue::as_bool)
    }

    /// Checks if a key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Copies every entry of `other` into this bag, overwriting
    /// existing values.
    pub fn apply(&mut self, other: &RunOptions) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Copies entries of `defaults` into this bag, keeping existing
    /// values.
    ///
    /// This is the counterpart of [`RunOptions::apply`] used for
    /// registered option defaults: a default never displaces a value
    /// an earlier layer already chose.
    pub fn merge_defaults(&mut self, defaults: &RunOptions) {
        for (key, value) in &defaults.values {
            self.values
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
