//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Operators and their evaluation
//! - Text/number conversion for operands
//! - Bounded calculation history
//! - Transient error notices
//!
//! Nothing in here performs I/O or schedules work.

mod error;
mod history;
mod notice;
mod number;
mod operation;
mod state;

pub use error::CalcError;
pub use history::{History, HistoryItem, DEFAULT_HISTORY_LIMIT};
pub use notice::ErrorNotice;
pub use number::{format_number, parse_operand};
pub use operation::{apply_pending, MemoryOp, Operator, UnaryOp};
pub use state::{CalculatorState, Phase};
