//! Builder for constructing calculators.

use crate::config::error::BuildError;
use crate::config::CalculatorConfig;
use crate::engine::Calculator;
use stillwater::validation::Validation;

/// Builder for constructing calculators with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a builder seeded with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one loaded from a file.
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Set the maximum number of history entries.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Set how long error notices stay visible.
    pub fn error_ttl_ms(mut self, ttl_ms: u64) -> Self {
        self.config.error_ttl_ms = ttl_ms;
        self
    }

    /// Build the calculator.
    /// Returns every configuration violation if the config is invalid.
    pub fn build(self) -> Result<Calculator, BuildError> {
        match self.config.validate() {
            Validation::Success(()) => Ok(Calculator::from_valid_config(self.config)),
            Validation::Failure(violations) => Err(BuildError::InvalidConfig(
                violations.iter().cloned().collect(),
            )),
        }
    }
}
