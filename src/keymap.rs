//! Translation from keyboard keys and typed commands to calculator inputs.

use crate::core::{MemoryOp, Operator, UnaryOp};
use crate::engine::{Digit, Input};

/// A key press as delivered by a terminal or window system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
}

/// Map a key press to an input, if the key means anything to the calculator.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::Operator;
/// use chaincalc::engine::Input;
/// use chaincalc::keymap::{input_for_key, Key};
///
/// assert_eq!(input_for_key(Key::Char('*')), Some(Input::Operator(Operator::Multiply)));
/// assert_eq!(input_for_key(Key::Escape), Some(Input::Clear));
/// assert_eq!(input_for_key(Key::Char('q')), None);
/// ```
pub fn input_for_key(key: Key) -> Option<Input> {
    match key {
        Key::Enter => Some(Input::Equals),
        Key::Escape => Some(Input::Clear),
        Key::Char(c) => match c {
            '0'..='9' => Digit::from_char(c).map(Input::Digit),
            '.' => Some(Input::Decimal),
            '+' => Some(Input::Operator(Operator::Add)),
            '-' => Some(Input::Operator(Operator::Subtract)),
            '*' => Some(Input::Operator(Operator::Multiply)),
            '/' => Some(Input::Operator(Operator::Divide)),
            '=' => Some(Input::Equals),
            'c' | 'C' => Some(Input::Clear),
            '%' => Some(Input::Unary(UnaryOp::Percentage)),
            _ => None,
        },
    }
}

/// Map a named command (case-insensitive) to an input.
///
/// Covers the operations that have no single-key binding: square root,
/// square, the memory register and clearing history.
pub fn input_for_command(word: &str) -> Option<Input> {
    let input = match word.to_ascii_lowercase().as_str() {
        "sqrt" | "√" => Input::Unary(UnaryOp::SquareRoot),
        "sq" | "sqr" | "x²" => Input::Unary(UnaryOp::Square),
        "pct" | "%" => Input::Unary(UnaryOp::Percentage),
        "mc" => Input::Memory(MemoryOp::Clear),
        "mr" => Input::Memory(MemoryOp::Recall),
        "m+" => Input::Memory(MemoryOp::Add),
        "m-" => Input::Memory(MemoryOp::Subtract),
        "clear-history" | "ch" => Input::ClearHistory,
        _ => return None,
    };
    Some(input)
}

/// Split a line of typed text into inputs.
///
/// Whitespace-separated words are tried as commands first; anything else is
/// read key by key. Unknown characters are returned as errors so the caller
/// can report them.
pub fn parse_line(line: &str) -> Vec<Result<Input, char>> {
    let mut inputs = Vec::new();
    for word in line.split_whitespace() {
        if let Some(input) = input_for_command(word) {
            inputs.push(Ok(input));
            continue;
        }
        for c in word.chars() {
            inputs.push(input_for_key(Key::Char(c)).ok_or(c));
        }
    }
    inputs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_operators() {
        assert_eq!(
            input_for_key(Key::Char('7')),
            Some(Input::Digit(Digit::new(7).unwrap()))
        );
        assert_eq!(input_for_key(Key::Char('.')), Some(Input::Decimal));
        assert_eq!(
            input_for_key(Key::Char('-')),
            Some(Input::Operator(Operator::Subtract))
        );
        assert_eq!(
            input_for_key(Key::Char('/')),
            Some(Input::Operator(Operator::Divide))
        );
    }

    #[test]
    fn equals_and_clear_keys() {
        assert_eq!(input_for_key(Key::Enter), Some(Input::Equals));
        assert_eq!(input_for_key(Key::Char('=')), Some(Input::Equals));
        assert_eq!(input_for_key(Key::Char('c')), Some(Input::Clear));
        assert_eq!(input_for_key(Key::Char('C')), Some(Input::Clear));
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(
            input_for_command("SQRT"),
            Some(Input::Unary(UnaryOp::SquareRoot))
        );
        assert_eq!(input_for_command("M+"), Some(Input::Memory(MemoryOp::Add)));
        assert_eq!(input_for_command("mr"), Some(Input::Memory(MemoryOp::Recall)));
        assert_eq!(input_for_command("nope"), None);
    }

    #[test]
    fn parse_line_mixes_keys_and_commands() {
        let inputs = parse_line("12+3 m+ =x");

        let d = |n| Ok(Input::Digit(Digit::new(n).unwrap()));
        assert_eq!(
            inputs,
            vec![
                d(1),
                d(2),
                Ok(Input::Operator(Operator::Add)),
                d(3),
                Ok(Input::Memory(MemoryOp::Add)),
                Ok(Input::Equals),
                Err('x'),
            ]
        );
    }
}
