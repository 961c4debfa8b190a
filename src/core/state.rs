//! Calculator state and its derived phase.

use super::history::History;
use super::operation::Operator;
use serde::{Deserialize, Serialize};

/// Logical phase of a calculation, derived from the pending operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    FirstOperand,
    SecondOperand,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstOperand => "FirstOperand",
            Self::SecondOperand => "SecondOperand",
        }
    }
}

/// Everything the calculator remembers within a session.
///
/// Operands are held as text. `previous_value` is empty when no left-hand
/// operand is pending.
#[derive(Clone, Debug, Serialize)]
pub struct CalculatorState {
    pub current_value: String,
    pub previous_value: String,
    pub operation: Option<Operator>,
    pub memory: f64,
    /// The next digit starts a new number instead of extending this one
    pub waiting_for_new_value: bool,
    pub history: History,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(History::default())
    }
}

impl CalculatorState {
    /// Fresh session state around the given (usually empty) history.
    pub fn new(history: History) -> Self {
        Self {
            current_value: "0".to_string(),
            previous_value: String::new(),
            operation: None,
            memory: 0.0,
            waiting_for_new_value: false,
            history,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.operation.is_some() {
            Phase::SecondOperand
        } else {
            Phase::FirstOperand
        }
    }

    /// Whether a left-hand operand has been captured.
    pub fn has_pending_operand(&self) -> bool {
        !self.previous_value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let state = CalculatorState::default();
        assert_eq!(state.current_value, "0");
        assert!(state.previous_value.is_empty());
        assert_eq!(state.operation, None);
        assert_eq!(state.memory, 0.0);
        assert!(!state.waiting_for_new_value);
        assert!(state.history.is_empty());
    }

    #[test]
    fn phase_follows_operation() {
        let mut state = CalculatorState::default();
        assert_eq!(state.phase(), Phase::FirstOperand);
        assert_eq!(state.phase().name(), "FirstOperand");

        state.operation = Some(Operator::Add);
        assert_eq!(state.phase(), Phase::SecondOperand);
        assert_eq!(state.phase().name(), "SecondOperand");
    }

    #[test]
    fn pending_operand_tracks_previous_value() {
        let mut state = CalculatorState::default();
        assert!(!state.has_pending_operand());
        state.previous_value = "4".to_string();
        assert!(state.has_pending_operand());
    }

    #[test]
    fn state_serializes_correctly() {
        let mut state = CalculatorState::default();
        state.current_value = "3.".to_string();
        state.operation = Some(Operator::Divide);

        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["current_value"], "3.");
        assert_eq!(json["operation"], "Divide");
        assert_eq!(json["history"]["limit"], 50);
    }
}
