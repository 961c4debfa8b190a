//! Chaincalc: a chained arithmetic calculator state machine
//!
//! Chaincalc keeps a "pure core, imperative shell" split. The core owns the
//! arithmetic rules and is driven one input event at a time; timers,
//! rendering and key handling belong to whoever embeds it.
//!
//! # Core Concepts
//!
//! - **Operands as text**: the display keeps exactly what was typed and is
//!   parsed only when an operation is evaluated
//! - **Chaining**: selecting an operator while another is pending folds the
//!   pending operation first, left to right, without precedence
//! - **Memory**: one register that survives clearing
//! - **History**: the most recent calculations, newest first, bounded
//! - **Transient errors**: notices that expire; they never change state
//!
//! # Example
//!
//! ```rust
//! use chaincalc::engine::{Calculator, Input, Signal};
//! use chaincalc::keymap::parse_line;
//!
//! let mut calc = Calculator::new();
//! for input in parse_line("8 / 0 =").into_iter().flatten() {
//!     calc.handle(input);
//! }
//!
//! // The failed division keeps the operands for correction.
//! assert_eq!(calc.previous_value(), "8");
//! assert_eq!(calc.error().unwrap().message, "Cannot divide by zero");
//!
//! calc.handle(Input::Digit(chaincalc::engine::Digit::new(4).unwrap()));
//! assert!(matches!(calc.handle(Input::Equals), Signal::Recorded(_)));
//! assert_eq!(calc.current_value(), "2");
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod keymap;

// Re-export commonly used types
pub use crate::config::{CalculatorBuilder, CalculatorConfig};
pub use crate::core::{CalcError, HistoryItem, MemoryOp, Operator, UnaryOp};
pub use crate::engine::{Calculator, Digit, Input, Signal};
