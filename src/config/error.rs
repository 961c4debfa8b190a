//! Configuration errors.

use thiserror::Error;

/// A single reason a configuration is unusable.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("History limit ({limit}) exceeds maximum ({max})")]
    HistoryLimitTooLarge { limit: usize, max: usize },

    #[error("Error display time must be greater than zero")]
    ZeroErrorTtl,

    #[error("Error display time ({ttl_ms} ms) exceeds maximum ({max_ms} ms)")]
    ErrorTtlTooLong { ttl_ms: u64, max_ms: u64 },
}

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Every violation found, not just the first.
    #[error("Invalid calculator configuration: {}", describe(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_error_lists_every_violation() {
        let err = BuildError::InvalidConfig(vec![
            ConfigViolation::ZeroHistoryLimit,
            ConfigViolation::ZeroErrorTtl,
        ]);

        assert_eq!(
            err.to_string(),
            "Invalid calculator configuration: History limit must be at least 1; \
             Error display time must be greater than zero"
        );
    }
}
