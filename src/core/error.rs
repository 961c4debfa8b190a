//! Arithmetic errors raised by calculator transitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recoverable failures of a calculator operation.
///
/// Neither variant is fatal: the engine leaves its state untouched and
/// surfaces the message as a transient notice.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivideByZero,

    #[error("Cannot take the square root of a negative number")]
    InvalidInput,
}
