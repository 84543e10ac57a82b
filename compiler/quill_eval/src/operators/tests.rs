#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

fn int(n: i64) -> Value {
    Value::Int(n)
}

fn kind(result: EvalResult) -> EvalErrorKind {
    result.unwrap_err().kind
}

#[test]
fn integer_arithmetic() {
    assert_eq!(evaluate_binary(int(2), int(3), BinaryOp::Add).unwrap(), int(5));
    assert_eq!(evaluate_binary(int(2), int(3), BinaryOp::Sub).unwrap(), int(-1));
    assert_eq!(evaluate_binary(int(2), int(3), BinaryOp::Mul).unwrap(), int(6));
    assert_eq!(evaluate_binary(int(7), int(2), BinaryOp::Div).unwrap(), int(3));
}

#[test]
fn division_floors() {
    assert_eq!(evaluate_binary(int(-7), int(2), BinaryOp::Div).unwrap(), int(-4));
    assert_eq!(evaluate_binary(int(7), int(-2), BinaryOp::Div).unwrap(), int(-4));
    assert_eq!(evaluate_binary(int(-7), int(-2), BinaryOp::Div).unwrap(), int(3));
    assert_eq!(evaluate_binary(int(-6), int(2), BinaryOp::Div).unwrap(), int(-3));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(
        kind(evaluate_binary(int(1), int(0), BinaryOp::Div)),
        EvalErrorKind::DivisionByZero
    );
}

#[test]
fn overflow_is_an_error() {
    assert!(matches!(
        kind(evaluate_binary(int(i64::MAX), int(1), BinaryOp::Add)),
        EvalErrorKind::IntegerOverflow { .. }
    ));
    assert!(matches!(
        kind(evaluate_binary(int(i64::MIN), int(-1), BinaryOp::Div)),
        EvalErrorKind::IntegerOverflow { .. }
    ));
}

#[test]
fn string_concatenation_and_repetition() {
    assert_eq!(
        evaluate_binary(Value::string("ab"), Value::string("cd"), BinaryOp::Add).unwrap(),
        Value::string("abcd")
    );
    assert_eq!(
        evaluate_binary(Value::string("ab"), int(3), BinaryOp::Mul).unwrap(),
        Value::string("ababab")
    );
    assert_eq!(
        evaluate_binary(int(2), Value::string("x"), BinaryOp::Mul).unwrap(),
        Value::string("xx")
    );
    assert_eq!(
        evaluate_binary(Value::string("x"), int(-1), BinaryOp::Mul).unwrap(),
        Value::string("")
    );
}

#[test]
fn list_concatenation_makes_a_new_list() {
    let a = Value::list(vec![int(1)]);
    let b = Value::list(vec![int(2)]);
    let joined = evaluate_binary(a.clone(), b, BinaryOp::Add).unwrap();
    assert_eq!(joined, Value::list(vec![int(1), int(2)]));
    let (Value::List(a), Value::List(joined)) = (&a, &joined) else {
        panic!("expected lists");
    };
    assert!(!a.ptr_eq(joined));
}

#[test]
fn list_repetition() {
    let items = Value::list(vec![int(1), int(2)]);
    assert_eq!(
        evaluate_binary(items.clone(), int(2), BinaryOp::Mul).unwrap(),
        Value::list(vec![int(1), int(2), int(1), int(2)])
    );
    assert_eq!(
        evaluate_binary(int(0), items, BinaryOp::Mul).unwrap(),
        Value::list(vec![])
    );
}

#[test]
fn list_repetition_clones_non_copy_items() {
    let items = Value::list(vec![Value::string("a"), Value::list(vec![int(1)])]);
    let repeated = evaluate_binary(int(2), items, BinaryOp::Mul).unwrap();
    let Value::List(repeated) = &repeated else {
        panic!("expected a list");
    };
    assert_eq!(repeated.borrow().len(), 4);
    assert_eq!(repeated.borrow()[2], Value::string("a"));
}

#[test]
fn oversized_string_repetition_is_an_error() {
    assert_eq!(
        kind(evaluate_binary(
            Value::string("xx"),
            int(9_000_000_000_000_000_000),
            BinaryOp::Mul
        )),
        EvalErrorKind::RepeatTooLarge {
            unit_len: 2,
            count: 9_000_000_000_000_000_000,
            limit: MAX_REPEAT_LEN,
        }
    );
}

#[test]
fn oversized_list_repetition_is_an_error() {
    let items = Value::list(vec![int(1), int(2)]);
    assert!(matches!(
        kind(evaluate_binary(int(i64::MAX), items, BinaryOp::Mul)),
        EvalErrorKind::RepeatTooLarge { unit_len: 2, .. }
    ));
}

#[test]
fn repetition_up_to_the_limit_succeeds() {
    let limit = i64::try_from(MAX_REPEAT_LEN).unwrap();
    let Value::Str(s) = evaluate_binary(Value::string("x"), int(limit), BinaryOp::Mul).unwrap()
    else {
        panic!("expected a string");
    };
    assert_eq!(s.len(), MAX_REPEAT_LEN);
    assert!(matches!(
        kind(evaluate_binary(Value::string("x"), int(limit.checked_add(1).unwrap()), BinaryOp::Mul)),
        EvalErrorKind::RepeatTooLarge { .. }
    ));
}

#[test]
fn empty_units_repeat_any_count() {
    assert_eq!(
        evaluate_binary(Value::string(""), int(i64::MAX), BinaryOp::Mul).unwrap(),
        Value::string("")
    );
    assert_eq!(
        evaluate_binary(Value::list(vec![]), int(i64::MAX), BinaryOp::Mul).unwrap(),
        Value::list(vec![])
    );
}

#[test]
fn mismatched_operands_are_an_error() {
    let err = evaluate_binary(Value::string("a"), int(1), BinaryOp::Add).unwrap_err();
    assert_eq!(err.to_string(), "cannot apply `+` to str and int");
    assert!(matches!(
        kind(evaluate_binary(Value::string("a"), Value::string("b"), BinaryOp::Sub)),
        EvalErrorKind::BinaryTypeMismatch { .. }
    ));
}
