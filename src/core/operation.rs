//! Binary, unary and memory operations.
//!
//! Every evaluation here is a pure function of its operands.

use super::error::CalcError;
use serde::{Deserialize, Serialize};

/// Binary operator awaiting its right-hand operand.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::{CalcError, Operator};
///
/// assert_eq!(Operator::Multiply.apply(6.0, 7.0), Ok(42.0));
/// assert_eq!(Operator::Divide.apply(1.0, 0.0), Err(CalcError::DivideByZero));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol used in history labels and the display trail.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator to `a` and `b`.
    ///
    /// Division fails only when the divisor is exactly zero; every other
    /// combination follows IEEE-754 semantics, NaN included.
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide if b == 0.0 => Err(CalcError::DivideByZero),
            Self::Divide => Ok(a / b),
        }
    }
}

/// Evaluate an optional pending operator.
///
/// With no operator the right-hand operand is returned unchanged.
pub fn apply_pending(op: Option<Operator>, a: f64, b: f64) -> Result<f64, CalcError> {
    match op {
        Some(op) => op.apply(a, b),
        None => Ok(b),
    }
}

/// Operation acting on the displayed value alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Percentage,
    SquareRoot,
    Square,
}

impl UnaryOp {
    /// Apply the operation to `value`.
    pub fn apply(&self, value: f64) -> Result<f64, CalcError> {
        match self {
            Self::Percentage => Ok(value / 100.0),
            Self::SquareRoot if value < 0.0 => Err(CalcError::InvalidInput),
            Self::SquareRoot => Ok(value.sqrt()),
            Self::Square => Ok(value * value),
        }
    }

    /// History label for the operation applied to `operand` as typed.
    pub fn label(&self, operand: &str) -> String {
        match self {
            Self::Percentage => format!("{operand}%"),
            Self::SquareRoot => format!("√{operand}"),
            Self::Square => format!("{operand}²"),
        }
    }
}

/// Command against the memory register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryOp {
    Clear,
    Recall,
    Add,
    Subtract,
}
