//! Calculator configuration.
//!
//! Validation uses Stillwater's `Validation` type so that every problem with
//! a configuration is reported at once instead of one per attempt.
//!
//! # Example
//!
//! ```rust
//! use chaincalc::config::CalculatorBuilder;
//!
//! let calculator = CalculatorBuilder::new()
//!     .history_limit(20)
//!     .error_ttl_ms(1_500)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(calculator.config().history_limit, 20);
//! ```

pub mod builder;
pub mod error;

pub use builder::CalculatorBuilder;
pub use error::{BuildError, ConfigViolation};

use crate::core::DEFAULT_HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// How long an error notice stays visible unless configured otherwise.
pub const DEFAULT_ERROR_TTL_MS: u64 = 3_000;

pub const MAX_HISTORY_LIMIT: usize = 10_000;

pub const MAX_ERROR_TTL_MS: u64 = 60_000;

/// Tunable limits of a calculator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum number of history entries retained
    pub history_limit: usize,
    /// Visibility window of a transient error, in milliseconds
    pub error_ttl_ms: u64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            error_ttl_ms: DEFAULT_ERROR_TTL_MS,
        }
    }
}

impl CalculatorConfig {
    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.history_limit == 0 {
            Validation::fail(ConfigViolation::ZeroHistoryLimit)
        } else if self.history_limit > MAX_HISTORY_LIMIT {
            Validation::fail(ConfigViolation::HistoryLimitTooLarge {
                limit: self.history_limit,
                max: MAX_HISTORY_LIMIT,
            })
        } else {
            Validation::success(())
        });

        checks.push(if self.error_ttl_ms == 0 {
            Validation::fail(ConfigViolation::ZeroErrorTtl)
        } else if self.error_ttl_ms > MAX_ERROR_TTL_MS {
            Validation::fail(ConfigViolation::ErrorTtlTooLong {
                ttl_ms: self.error_ttl_ms,
                max_ms: MAX_ERROR_TTL_MS,
            })
        } else {
            Validation::success(())
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Error visibility window as a `chrono` duration.
    pub fn error_ttl(&self) -> chrono::Duration {
        let ms = self.error_ttl_ms.min(MAX_ERROR_TTL_MS) as i64;
        chrono::Duration::milliseconds(ms)
    }
}
