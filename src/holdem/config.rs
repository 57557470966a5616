use crate::core::OddsError;

/// How an `OddsCalculator` spreads its work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// When false every completion is classified on the calling thread.
    pub parallel: bool,
    /// Number of worker threads. `None` uses rayon's global pool.
    pub threads: Option<usize>,
    /// Enumerations smaller than this many completions run on the calling
    /// thread even when `parallel` is set.
    pub parallel_threshold: u64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
            parallel_threshold: 10_000,
        }
    }
}

impl CalculatorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: u64) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Validate the calculator configuration
    pub fn validate(&self) -> Result<(), OddsError> {
        if self.threads == Some(0) {
            return Err(OddsError::InvalidConfig(
                "threads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether an enumeration of `combinations` completions should be split
    /// across workers.
    pub fn should_parallelize(&self, combinations: u64) -> bool {
        self.parallel && combinations >= self.parallel_threshold
    }
}
