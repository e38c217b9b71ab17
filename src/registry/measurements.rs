//! Measurement registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::benchmark::{BenchmarkError, BenchmarkResult};
use crate::measurement::{Measurement, MeasurementCtor};

/// Holds a constructor for every known measurement.
///
/// Registration stores a constructor rather than an instance so each
/// run can start from fresh measurement state. The registered name is
/// read from a constructed instance, keeping the name authoritative in
/// one place.
#[derive(Default)]
pub struct MeasurementRegistry {
    ctors: HashMap<String, MeasurementCtor>,
}

impl MeasurementRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a measurement constructor.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::AlreadyRegistered`] if a measurement
    /// with the same name is present.
    pub fn register<F>(&mut self, ctor: F) -> BenchmarkResult<()>
    where
        F: Fn() -> Box<dyn Measurement> + Send + Sync + 'static,
    {
        let name = ctor().name().to_string();
        if self.ctors.contains_key(&name) {
            return Err(BenchmarkError::AlreadyRegistered(name));
        }
        self.ctors.insert(name, Arc::new(ctor));
        Ok(())
    }

    /// Checks whether a measurement is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.ctors.contains_key(name)
    }

    /// Returns the constructor for a measurement.
    #[must_use]
    pub fn ctor(&self, name: &str) -> Option<MeasurementCtor> {
        self.ctors.get(name).map(Arc::clone)
    }

    /// Builds a fresh instance of a measurement.
    #[must_use]
    pub fn create(&self, name: &str) -> Option<Box<dyn Measurement>> {
        self.ctors.get(name).map(|ctor| ctor())
    }

    /// Returns all measurement names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ctors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered measurements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ctors.len()
    }

    /// Returns `true` if no measurements are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ctors.is_empty()
    }
}

impl fmt::Debug for MeasurementRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeasurementRegistry")
            .field("measurements", &self.names())
            .finish()
    }
}
