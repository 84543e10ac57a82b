use crate::{Bindings, Environment, SysObject, Value};
use pretty_assertions::assert_eq;

fn int(n: i64) -> Value {
    Value::Int(n)
}

#[test]
fn truthiness() {
    assert!(!int(0).is_truthy());
    assert!(int(-1).is_truthy());
    assert!(!Value::string("").is_truthy());
    assert!(Value::string("0").is_truthy());
    assert!(!Value::list(vec![]).is_truthy());
    assert!(Value::list(vec![int(0)]).is_truthy());
    assert!(!Value::map(Bindings::default()).is_truthy());
    assert!(Value::host(SysObject).is_truthy());
}

#[test]
fn display_quotes_nested_strings_only() {
    assert_eq!(Value::string("hi").to_string(), "hi");
    assert_eq!(
        Value::list(vec![int(1), Value::string("a")]).to_string(),
        "[1, \"a\"]"
    );
}

#[test]
fn display_sorts_map_keys() {
    let map: Bindings = [("z", 1), ("a", 2)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), int(v)))
        .collect();
    assert_eq!(Value::map(map).to_string(), "{\"a\": 2, \"z\": 1}");
}

#[test]
fn display_guards_against_cycles() {
    let list = Value::list(vec![int(1)]);
    if let Value::List(items) = &list {
        items.borrow_mut().push(list.clone());
    }
    assert_eq!(list.to_string(), "[1, [...]]");

    let env = Environment::new();
    let frame = env.current_frame();
    frame
        .borrow_mut()
        .insert("me".to_string(), Value::Map(frame.clone()));
    assert_eq!(Value::Map(frame).to_string(), "{\"me\": {...}}");
}

#[test]
fn equality_is_structural_for_containers() {
    assert_eq!(
        Value::list(vec![int(1), Value::string("a")]),
        Value::list(vec![int(1), Value::string("a")])
    );
    assert_ne!(Value::list(vec![int(1)]), Value::list(vec![int(2)]));
    assert_ne!(int(1), Value::string("1"));
}

#[test]
fn host_values_compare_by_identity() {
    let sys = Value::host(SysObject);
    assert_eq!(sys, sys.clone());
    assert_ne!(sys, Value::host(SysObject));
}

#[test]
fn type_names() {
    assert_eq!(int(1).type_name(), "int");
    assert_eq!(Value::string("").type_name(), "str");
    assert_eq!(Value::list(vec![]).type_name(), "list");
    assert_eq!(Value::map(Bindings::default()).type_name(), "map");
    assert_eq!(Value::host(SysObject).type_name(), "sys");
}

#[test]
fn debug_is_readable() {
    assert_eq!(format!("{:?}", int(3)), "Int(3)");
    assert_eq!(format!("{:?}", Value::list(vec![int(1)])), "List([1])");
}
