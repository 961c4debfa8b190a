//! Input events and the signals they produce.

use crate::core::{CalcError, HistoryItem, MemoryOp, Operator, UnaryOp};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_char(&self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("{value} is not a decimal digit"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Every event the calculator accepts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Input {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Unary(UnaryOp),
    Memory(MemoryOp),
    RecallHistory(Uuid),
    ClearHistory,
}

/// Side effect reported by [`Calculator::handle`](super::Calculator::handle).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Signal {
    /// State may have changed; nothing to report
    Silent,

    /// A calculation completed and was added to history
    Recorded(HistoryItem),

    /// The operation failed and a transient error was raised
    Raised(CalcError),
}
