//! Runtime values.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::host::HostObject;
use crate::shared::Shared;

/// Name-to-value table. Used for map values and for scope frames.
pub type Bindings = FxHashMap<String, Value>;

/// Handle to a host-supplied object.
pub type HostRef = Rc<dyn HostObject>;

/// A Quill runtime value.
///
/// Lists and maps are reference values: cloning a `Value::List` aliases the
/// same list, so mutation through one name is visible through every other.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Str(String),
    List(Shared<Vec<Value>>),
    Map(Shared<Bindings>),
    Host(HostRef),
}

impl Value {
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Shared::new(items))
    }

    pub fn map(bindings: Bindings) -> Self {
        Value::Map(Shared::new(bindings))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn host(object: impl HostObject + 'static) -> Self {
        Value::Host(Rc::new(object))
    }

    /// `0`, `""`, `[]` and `{}` are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.borrow().is_empty(),
            Value::Map(map) => !map.borrow().is_empty(),
            Value::Host(_) => true,
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Host(host) => host.type_name(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a.ptr_eq(b) || *a.borrow() == *b.borrow(),
            (Value::Map(a), Value::Map(b)) => a.ptr_eq(b) || *a.borrow() == *b.borrow(),
            (Value::Host(a), Value::Host(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

impl From<Bindings> for Value {
    fn from(bindings: Bindings) -> Self {
        Value::map(bindings)
    }
}

/// Display state: containers currently being printed, for cycle detection.
struct Printer<'a, 'f> {
    f: &'a mut fmt::Formatter<'f>,
    open: Vec<*const ()>,
}

impl Printer<'_, '_> {
    fn value(&mut self, value: &Value, nested: bool) -> fmt::Result {
        match value {
            Value::Int(n) => write!(self.f, "{n}"),
            Value::Str(s) if nested => write!(self.f, "{s:?}"),
            Value::Str(s) => self.f.write_str(s),
            Value::List(items) => {
                if self.open.contains(&items.addr()) {
                    return self.f.write_str("[...]");
                }
                self.open.push(items.addr());
                self.f.write_str("[")?;
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        self.f.write_str(", ")?;
                    }
                    self.value(item, true)?;
                }
                self.open.pop();
                self.f.write_str("]")
            }
            Value::Map(map) => {
                if self.open.contains(&map.addr()) {
                    return self.f.write_str("{...}");
                }
                self.open.push(map.addr());
                self.f.write_str("{")?;
                let map = map.borrow();
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        self.f.write_str(", ")?;
                    }
                    write!(self.f, "{key:?}: ")?;
                    self.value(&map[key], true)?;
                }
                self.open.pop();
                self.f.write_str("}")
            }
            Value::Host(host) => write!(self.f, "<{}>", host.type_name()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Printer {
            f,
            open: Vec::new(),
        }
        .value(self, false)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::List(_) => write!(f, "List({self})"),
            Value::Map(_) => write!(f, "Map({self})"),
            Value::Host(host) => write!(f, "Host({})", host.type_name()),
        }
    }
}
