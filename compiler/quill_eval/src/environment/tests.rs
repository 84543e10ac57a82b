#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::errors::EvalErrorKind;
use crate::output::BufferSink;
use pretty_assertions::assert_eq;

fn bindings(pairs: &[(&str, i64)]) -> Bindings {
    pairs
        .iter()
        .map(|(name, n)| ((*name).to_string(), Value::Int(*n)))
        .collect()
}

#[test]
fn new_registers_builtins() {
    let env = Environment::new();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.global("sys").unwrap().type_name(), "sys");
    assert_eq!(env.global("len").unwrap().type_name(), "len");
}

#[test]
fn read_undefined_is_an_error() {
    let env = Environment::new();
    let err = env.read("missing").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "missing".to_string()
        }
    );
    assert_eq!(env.lookup("missing"), None);
}

#[test]
fn inner_frame_shadows_outer() {
    let env = Environment::with_frames(vec![bindings(&[("x", 1)]), bindings(&[("x", 2)])]);
    assert_eq!(env.depth(), 2);
    assert_eq!(env.read("x").unwrap(), Value::Int(2));
}

#[test]
fn frames_shadow_globals() {
    let mut env = Environment::new();
    env.register_global("x", 1_i64);
    assert_eq!(env.read("x").unwrap(), Value::Int(1));
    env.set_local("x", Value::Int(2));
    assert_eq!(env.read("x").unwrap(), Value::Int(2));
}

#[test]
fn write_updates_the_frame_that_holds_the_name() {
    let mut env = Environment::with_frames(vec![bindings(&[("x", 1)])]);
    env.push_frame();
    assert_eq!(env.write("x", Value::Int(5)), WriteOutcome::Updated);
    env.pop_frame();
    assert_eq!(env.read("x").unwrap(), Value::Int(5));
}

#[test]
fn write_creates_in_innermost_frame() {
    let mut env = Environment::new();
    env.push_frame();
    assert_eq!(env.write("y", Value::Int(1)), WriteOutcome::Created);
    assert_eq!(env.read("y").unwrap(), Value::Int(1));
    env.pop_frame();
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn write_to_global_is_ignored() {
    let mut env = Environment::new();
    env.register_global("limit", 10_i64);
    assert_eq!(env.write("limit", Value::Int(0)), WriteOutcome::GlobalIgnored);
    assert_eq!(env.read("limit").unwrap(), Value::Int(10));
    assert!(env.current_frame().borrow().is_empty());
}

#[test]
fn set_local_shadows_outer_binding() {
    let mut env = Environment::with_frames(vec![bindings(&[("i", 1)])]);
    env.push_frame();
    env.set_local("i", Value::Int(9));
    assert_eq!(env.read("i").unwrap(), Value::Int(9));
    env.pop_frame();
    assert_eq!(env.read("i").unwrap(), Value::Int(1));
}

#[test]
fn pop_keeps_the_outermost_frame() {
    let mut env = Environment::new();
    env.set_local("x", Value::Int(1));
    env.pop_frame();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.read("x").unwrap(), Value::Int(1));
}

#[test]
fn current_frame_is_live() {
    let mut env = Environment::new();
    let frame = env.current_frame();
    env.set_local("x", Value::Int(3));
    assert_eq!(frame.borrow().get("x"), Some(&Value::Int(3)));
    frame
        .borrow_mut()
        .insert("y".to_string(), Value::Int(4));
    assert_eq!(env.read("y").unwrap(), Value::Int(4));
}

#[test]
fn emit_reaches_every_sink() {
    let mut env = Environment::new();
    let first = BufferSink::new();
    let second = BufferSink::new();
    env.register_output_sink(first.clone());
    env.register_output_sink(second.clone());
    env.emit(Channel::Standard, &Value::Int(1));
    assert_eq!(first.lines(Channel::Standard), vec!["1".to_string()]);
    assert_eq!(second.lines(Channel::Standard), vec!["1".to_string()]);
}

#[test]
fn register_function_binds_a_callable_global() {
    let mut env = Environment::new();
    env.register_function("answer", Some(0), |_| Ok(Value::Int(42)));
    assert_eq!(env.global("answer").unwrap().type_name(), "function");
}
