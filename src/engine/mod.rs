//! The calculator engine.
//!
//! [`Calculator`] owns the whole session: arithmetic state, memory, history,
//! the display trail and the active error notice. Each input category has
//! its own transition method taking `&mut self`, so updates are applied one
//! at a time in the order the caller delivers them.
//!
//! # Example
//!
//! ```rust
//! use chaincalc::core::Operator;
//! use chaincalc::engine::{Calculator, Digit};
//!
//! let mut calc = Calculator::new();
//! calc.enter_digit(Digit::new(5).unwrap());
//! calc.select_operator(Operator::Add).unwrap();
//! calc.enter_digit(Digit::new(3).unwrap());
//! calc.select_operator(Operator::Multiply).unwrap();
//! calc.enter_digit(Digit::new(2).unwrap());
//! let item = calc.evaluate().unwrap().unwrap();
//!
//! assert_eq!(calc.current_value(), "16");
//! assert_eq!(item.calculation, "8 × 2");
//! ```

mod input;

pub use input::{Digit, Input, Signal};

use crate::config::CalculatorConfig;
use crate::core::{
    apply_pending, format_number, parse_operand, CalcError, CalculatorState, ErrorNotice,
    History, HistoryItem, MemoryOp, Operator, Phase, UnaryOp,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

/// Calculator session engine.
#[derive(Clone, Debug)]
pub struct Calculator {
    state: CalculatorState,
    config: CalculatorConfig,
    trail: Option<String>,
    error: Option<ErrorNotice>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(CalculatorConfig::default())
    }

    /// Callers must have validated `config`; see
    /// [`CalculatorBuilder`](crate::config::CalculatorBuilder).
    pub(crate) fn from_valid_config(config: CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::new(History::with_limit(config.history_limit)),
            config,
            trail: None,
            error: None,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn current_value(&self) -> &str {
        &self.state.current_value
    }

    pub fn previous_value(&self) -> &str {
        &self.state.previous_value
    }

    pub fn operation(&self) -> Option<Operator> {
        self.state.operation
    }

    pub fn memory(&self) -> f64 {
        self.state.memory
    }

    /// Whether a memory indicator should be shown.
    pub fn has_memory(&self) -> bool {
        self.state.memory != 0.0
    }

    pub fn history(&self) -> &History {
        &self.state.history
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Pending-operation description such as `"12 +"`.
    pub fn display_trail(&self) -> Option<&str> {
        self.trail.as_deref()
    }

    /// The active error notice, expired or not.
    pub fn error(&self) -> Option<&ErrorNotice> {
        self.error.as_ref()
    }

    /// Drop the error notice if it has expired at `now`.
    /// Returns `true` if a notice was dropped.
    pub fn expire_error(&mut self, now: DateTime<Utc>) -> bool {
        let expired = self
            .error
            .as_ref()
            .is_some_and(|notice| notice.is_expired(now));
        if expired {
            self.error = None;
        }
        expired
    }

    /// Drop the error notice regardless of its age.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Type a digit into the display.
    pub fn enter_digit(&mut self, digit: Digit) {
        let fresh = self.starts_new_number();
        let state = &mut self.state;
        if fresh {
            state.current_value = digit.to_string();
            state.waiting_for_new_value = false;
        } else if state.current_value == "0" {
            state.current_value = digit.to_string();
        } else {
            state.current_value.push(digit.as_char());
        }
        debug!(%digit, current = %state.current_value, "Digit entered");
    }

    /// Type a decimal point. At most one is ever present.
    pub fn enter_decimal(&mut self) {
        let fresh = self.starts_new_number();
        let state = &mut self.state;
        if fresh {
            state.current_value = "0.".to_string();
            state.waiting_for_new_value = false;
        } else if !state.current_value.contains('.') {
            state.current_value.push('.');
        }
        debug!(current = %state.current_value, "Decimal entered");
    }

    /// Select a binary operator.
    ///
    /// If an operator is already pending and a second operand has been
    /// typed, the pending operation is folded first (left to right, no
    /// precedence) and its result becomes the new left operand. Otherwise
    /// the displayed value becomes the left operand, replacing any operator
    /// chosen before a digit was typed.
    ///
    /// A fold that divides by zero leaves the state untouched.
    pub fn select_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        let chaining = self.state.operation.is_some()
            && !self.state.waiting_for_new_value
            && self.state.has_pending_operand();

        if chaining {
            let result = match self.compute_pending() {
                Ok(value) => format_number(value),
                Err(err) => return Err(self.raise(err)),
            };
            debug!(
                previous = %self.state.previous_value,
                current = %self.state.current_value,
                %result,
                "Chained pending operation"
            );
            self.state.current_value = result.clone();
            self.state.previous_value = result;
        } else {
            self.state.previous_value = self.state.current_value.clone();
        }

        self.state.operation = Some(op);
        self.state.waiting_for_new_value = true;
        self.trail = Some(format!("{} {}", self.state.previous_value, op.symbol()));
        debug!(operator = ?op, phase = self.phase().name(), "Operator selected");
        Ok(())
    }

    /// Resolve the pending operation.
    ///
    /// Returns `Ok(None)` when nothing is pending. On division by zero the
    /// pending operator and both operands stay in place so the second
    /// operand can be corrected.
    pub fn evaluate(&mut self) -> Result<Option<HistoryItem>, CalcError> {
        let Some(op) = self.state.operation else {
            return Ok(None);
        };
        if !self.state.has_pending_operand() {
            return Ok(None);
        }

        let result = match self.compute_pending() {
            Ok(value) => format_number(value),
            Err(err) => return Err(self.raise(err)),
        };

        let calculation = format!(
            "{} {} {}",
            self.state.previous_value,
            op.symbol(),
            self.state.current_value
        );
        let item = self.record(calculation, result.clone());

        self.error = None;
        self.trail = None;
        self.state.current_value = result;
        self.state.previous_value.clear();
        self.state.operation = None;
        self.state.waiting_for_new_value = true;
        Ok(Some(item))
    }

    /// Reset the calculation. Memory and history survive.
    pub fn clear(&mut self) {
        self.state.current_value = "0".to_string();
        self.state.previous_value.clear();
        self.state.operation = None;
        self.state.waiting_for_new_value = false;
        self.trail = None;
        self.error = None;
        debug!("Calculator cleared");
    }

    /// Apply a unary operation to the displayed value.
    ///
    /// Any pending binary operation is left as it is.
    pub fn apply_unary(&mut self, kind: UnaryOp) -> Result<HistoryItem, CalcError> {
        let operand = parse_operand(&self.state.current_value);
        let result = match kind.apply(operand) {
            Ok(value) => format_number(value),
            Err(err) => return Err(self.raise(err)),
        };

        let item = self.record(kind.label(&self.state.current_value), result.clone());

        self.error = None;
        self.state.current_value = result;
        self.state.waiting_for_new_value = true;
        Ok(item)
    }

    /// Run a memory register command.
    pub fn apply_memory(&mut self, kind: MemoryOp) {
        let state = &mut self.state;
        match kind {
            MemoryOp::Clear => state.memory = 0.0,
            MemoryOp::Recall => {
                state.current_value = format_number(state.memory);
                state.waiting_for_new_value = true;
            }
            MemoryOp::Add => state.memory += parse_operand(&state.current_value),
            MemoryOp::Subtract => state.memory -= parse_operand(&state.current_value),
        }
        debug!(command = ?kind, memory = state.memory, "Memory updated");
    }

    /// Show a history entry's result as the current value.
    pub fn recall_history_entry(&mut self, item: &HistoryItem) {
        self.state.current_value = item.result.clone();
        self.state.waiting_for_new_value = true;
        debug!(calculation = %item.calculation, result = %item.result, "History recalled");
    }

    /// Recall a history entry by id.
    /// Returns `false` if no entry has that id.
    pub fn recall_history(&mut self, id: Uuid) -> bool {
        match self.state.history.find(id).cloned() {
            Some(item) => {
                self.recall_history_entry(&item);
                true
            }
            None => false,
        }
    }

    pub fn clear_history(&mut self) {
        self.state.history.clear();
        debug!("History cleared");
    }

    /// Dispatch any input to its transition.
    pub fn handle(&mut self, input: Input) -> Signal {
        match input {
            Input::Digit(digit) => {
                self.enter_digit(digit);
                Signal::Silent
            }
            Input::Decimal => {
                self.enter_decimal();
                Signal::Silent
            }
            Input::Operator(op) => match self.select_operator(op) {
                Ok(()) => Signal::Silent,
                Err(err) => Signal::Raised(err),
            },
            Input::Equals => match self.evaluate() {
                Ok(Some(item)) => Signal::Recorded(item),
                Ok(None) => Signal::Silent,
                Err(err) => Signal::Raised(err),
            },
            Input::Clear => {
                self.clear();
                Signal::Silent
            }
            Input::Unary(kind) => match self.apply_unary(kind) {
                Ok(item) => Signal::Recorded(item),
                Err(err) => Signal::Raised(err),
            },
            Input::Memory(kind) => {
                self.apply_memory(kind);
                Signal::Silent
            }
            Input::RecallHistory(id) => {
                self.recall_history(id);
                Signal::Silent
            }
            Input::ClearHistory => {
                self.clear_history();
                Signal::Silent
            }
        }
    }

    /// Everything a presentation layer renders, in one serializable value.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_value: self.state.current_value.clone(),
            display_trail: self.trail.clone(),
            phase: self.phase(),
            memory: self.state.memory,
            has_memory: self.has_memory(),
            history: self.state.history.iter().cloned().collect(),
            error: self.error.clone(),
        }
    }

    /// The next digit or decimal replaces the display rather than extending
    /// it: either a new number was requested or the display holds a
    /// non-finite result such as `Infinity`.
    fn starts_new_number(&self) -> bool {
        self.state.waiting_for_new_value || !parse_operand(&self.state.current_value).is_finite()
    }

    fn compute_pending(&self) -> Result<f64, CalcError> {
        apply_pending(
            self.state.operation,
            parse_operand(&self.state.previous_value),
            parse_operand(&self.state.current_value),
        )
    }

    fn record(&mut self, calculation: String, result: String) -> HistoryItem {
        let item = HistoryItem::new(calculation, result);
        debug!(calculation = %item.calculation, result = %item.result, "Recorded history entry");
        self.state.history.record(item.clone());
        item
    }

    fn raise(&mut self, err: CalcError) -> CalcError {
        warn!(error = %err, current = %self.state.current_value, "Operation failed");
        self.error = Some(ErrorNotice::raise(err, Utc::now(), self.config.error_ttl()));
        err
    }
}

/// Read-only view of a calculator for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub current_value: String,
    pub display_trail: Option<String>,
    pub phase: Phase,
    pub memory: f64,
    pub has_memory: bool,
    /// Most recent first
    pub history: Vec<HistoryItem>,
    pub error: Option<ErrorNotice>,
}
