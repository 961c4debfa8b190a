//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated input sequences.

use chaincalc::core::{MemoryOp, Operator, UnaryOp};
use chaincalc::engine::{Calculator, Digit, Input};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_digit()(value in 0..10u8) -> Digit {
        Digit::new(value).unwrap()
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Multiply,
            _ => Operator::Divide,
        }
    }
}

fn arbitrary_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => arbitrary_digit().prop_map(Input::Digit),
        1 => Just(Input::Decimal),
        2 => arbitrary_operator().prop_map(Input::Operator),
        1 => Just(Input::Equals),
        1 => Just(Input::Unary(UnaryOp::Percentage)),
        1 => Just(Input::Unary(UnaryOp::SquareRoot)),
        1 => Just(Input::Unary(UnaryOp::Square)),
        1 => Just(Input::Memory(MemoryOp::Add)),
        1 => Just(Input::Memory(MemoryOp::Subtract)),
        1 => Just(Input::Memory(MemoryOp::Recall)),
    ]
}

fn calculator_after(inputs: &[Input]) -> Calculator {
    let mut calc = Calculator::new();
    for input in inputs {
        calc.handle(input.clone());
    }
    calc
}

proptest! {
    #[test]
    fn typed_digits_are_reproduced(
        first in 1..10u8,
        rest in prop::collection::vec(arbitrary_digit(), 0..20)
    ) {
        let mut calc = Calculator::new();
        calc.clear();

        let mut expected = first.to_string();
        calc.enter_digit(Digit::new(first).unwrap());
        for digit in &rest {
            calc.enter_digit(*digit);
            expected.push(digit.as_char());
        }

        prop_assert_eq!(calc.current_value(), expected.as_str());
    }

    #[test]
    fn leading_zeros_are_suppressed(zeros in 1..10usize, digit in 1..10u8) {
        let mut calc = Calculator::new();
        for _ in 0..zeros {
            calc.enter_digit(Digit::new(0).unwrap());
        }
        calc.enter_digit(Digit::new(digit).unwrap());

        prop_assert_eq!(calc.current_value(), digit.to_string());
    }

    #[test]
    fn at_most_one_decimal_point(inputs in prop::collection::vec(arbitrary_input(), 0..60)) {
        let calc = calculator_after(&inputs);
        prop_assert!(calc.current_value().matches('.').count() <= 1);
    }

    #[test]
    fn chaining_is_left_associative(
        a in 1..1000u32,
        b in 1..1000u32,
        c in 1..1000u32,
        op1 in arbitrary_operator(),
        op2 in arbitrary_operator()
    ) {
        let mut calc = Calculator::new();
        let type_number = |calc: &mut Calculator, n: u32| {
            for ch in n.to_string().chars() {
                calc.enter_digit(Digit::from_char(ch).unwrap());
            }
        };

        type_number(&mut calc, a);
        calc.select_operator(op1).unwrap();
        type_number(&mut calc, b);
        calc.select_operator(op2).unwrap();
        type_number(&mut calc, c);
        calc.evaluate().unwrap();

        let left = op1.apply(a as f64, b as f64).unwrap();
        let left = chaincalc::core::parse_operand(&chaincalc::core::format_number(left));
        let expected = op2.apply(left, c as f64).unwrap();
        prop_assert_eq!(calc.current_value(), chaincalc::core::format_number(expected));
    }

    #[test]
    fn errors_never_touch_memory_or_history(
        inputs in prop::collection::vec(arbitrary_input(), 0..40)
    ) {
        let mut calc = calculator_after(&inputs);
        let memory = calc.memory();
        let history_len = calc.history().len();
        calc.handle(Input::Clear);
        calc.handle(Input::Digit(Digit::new(1).unwrap()));
        calc.handle(Input::Operator(Operator::Divide));
        calc.handle(Input::Digit(Digit::new(0).unwrap()));
        calc.handle(Input::Equals);

        prop_assert!(calc.error().is_some());
        prop_assert_eq!(calc.memory().to_bits(), memory.to_bits());
        prop_assert_eq!(calc.history().len(), history_len);
        prop_assert_eq!(calc.previous_value(), "1");
    }

    #[test]
    fn history_never_exceeds_limit(inputs in prop::collection::vec(arbitrary_input(), 0..200)) {
        let calc = calculator_after(&inputs);
        prop_assert!(calc.history().len() <= calc.history().limit());
    }

    #[test]
    fn clear_preserves_memory_and_history(
        inputs in prop::collection::vec(arbitrary_input(), 0..60)
    ) {
        let mut calc = calculator_after(&inputs);
        let memory = calc.memory();
        let history: Vec<_> = calc.history().iter().map(|i| i.id).collect();

        calc.clear();

        prop_assert_eq!(calc.memory().to_bits(), memory.to_bits());
        let after: Vec<_> = calc.history().iter().map(|i| i.id).collect();
        prop_assert_eq!(after, history);
        prop_assert_eq!(calc.current_value(), "0");
        prop_assert_eq!(calc.operation(), None);
    }

    #[test]
    fn clear_history_preserves_calculation(
        inputs in prop::collection::vec(arbitrary_input(), 0..60)
    ) {
        let mut calc = calculator_after(&inputs);
        let memory = calc.memory();
        let current = calc.current_value().to_string();
        let previous = calc.previous_value().to_string();
        let operation = calc.operation();

        calc.clear_history();

        prop_assert!(calc.history().is_empty());
        prop_assert_eq!(calc.memory().to_bits(), memory.to_bits());
        prop_assert_eq!(calc.current_value(), current.as_str());
        prop_assert_eq!(calc.previous_value(), previous.as_str());
        prop_assert_eq!(calc.operation(), operation);
    }
}
