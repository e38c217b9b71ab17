//! Benchmark registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::benchmark::{Benchmark, BenchmarkError, BenchmarkResult};

/// Holds every benchmark the harness knows about.
///
/// Benchmarks are registered explicitly at startup; nothing is
/// discovered from the filesystem. The registry is the single source
/// the smoke suite draws candidates from.
#[derive(Default)]
pub struct BenchmarkRegistry {
    benchmarks: HashMap<String, Arc<dyn Benchmark>>,
}

impl BenchmarkRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a benchmark.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::AlreadyRegistered`] if a benchmark
    /// with the same name is present.
    pub fn register<B>(&mut self, benchmark: B) -> BenchmarkResult<()>
    where
        B: Benchmark + 'static,
    {
        self.register_arc(Arc::new(benchmark))
    }

    /// Registers an already shared benchmark.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::AlreadyRegistered`] if a benchmark
    /// with the same name is present.
    pub fn register_arc(&mut self, benchmark: Arc<dyn Benchmark>) -> BenchmarkResult<()> {
        let name = benchmark.name().to_string();
        if self.benchmarks.contains_key(&name) {
            return Err(BenchmarkError::AlreadyRegistered(name));
        }
        self.benchmarks.insert(name, benchmark);
        Ok(())
    }

    /// Looks up a benchmark by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Benchmark>> {
        self.benchmarks.get(name)
    }

    /// Iterates over all registered benchmarks.
    pub fn benchmarks(&self) -> impl Iterator<Item = &Arc<dyn Benchmark>> {
        self.benchmarks.values()
    }

    /// Returns all benchmark names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.benchmarks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered benchmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    /// Returns `true` if no benchmarks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }
}

impl fmt::Debug for BenchmarkRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkRegistry")
            .field("benchmarks", &self.names())
            .finish()
    }
}
