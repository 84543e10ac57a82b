//! Host object protocol and the built-in host objects.
//!
//! A host object is any value the embedding application places in the
//! global registry. Every operation receives the environment at call time,
//! so an object never holds a reference to the environment it lives in.

use std::fmt;

use quill_ir::Expr;

use crate::environment::Environment;
use crate::errors::{
    cannot_get_length, integer_overflow, key_not_found, map_keys_must_be_strings, not_callable,
    not_iterable, not_subscriptable, read_only, wrong_arg_count, EvalResult,
};
use crate::exec::eval_expr;
use crate::Value;

/// Capability trait for host-supplied values.
///
/// Each default reports that the object does not support the operation.
pub trait HostObject {
    /// Name used in error messages and display.
    fn type_name(&self) -> &str;

    /// `object[key]` and `object.key`.
    fn get_item(&self, key: &Value, env: &Environment) -> EvalResult {
        let _ = (key, env);
        Err(not_subscriptable(self.type_name()))
    }

    /// `object[key] = value`.
    fn set_item(&self, key: &Value, value: Value, env: &Environment) -> EvalResult<()> {
        let _ = (key, value, env);
        Err(not_subscriptable(self.type_name()))
    }

    /// Elements visited by `for`.
    fn iterate(&self, env: &Environment) -> EvalResult<Vec<Value>> {
        let _ = env;
        Err(not_iterable(self.type_name()))
    }

    /// `object(args...)`. Receives the unevaluated argument nodes.
    fn call(&self, args: &[Expr], env: &mut Environment) -> EvalResult {
        let _ = (args, env);
        Err(not_callable(self.type_name()))
    }
}

type NativeFn = Box<dyn Fn(&[Value]) -> EvalResult>;

/// A Rust closure callable from Quill.
///
/// Arguments are evaluated in the caller's environment before the closure
/// runs. With `Some(arity)` the argument count is checked first.
pub struct NativeFunction {
    name: String,
    arity: Option<usize>,
    func: NativeFn,
}

impl NativeFunction {
    pub fn new(
        name: impl Into<String>,
        arity: Option<usize>,
        func: impl Fn(&[Value]) -> EvalResult + 'static,
    ) -> Self {
        NativeFunction {
            name: name.into(),
            arity,
            func: Box::new(func),
        }
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl HostObject for NativeFunction {
    fn type_name(&self) -> &str {
        "function"
    }

    fn call(&self, args: &[Expr], env: &mut Environment) -> EvalResult {
        if let Some(arity) = self.arity {
            if args.len() != arity {
                return Err(wrong_arg_count(&self.name, arity, args.len()));
            }
        }
        let values = args
            .iter()
            .map(|arg| eval_expr(arg, env))
            .collect::<EvalResult<Vec<_>>>()?;
        (self.func)(&values)
    }
}

/// The `sys` global: introspection of the live scope.
///
/// - `sys.locals` is the innermost frame as a map. Writing into it binds
///   names in that frame.
/// - `sys.globals` is the frame stack, outermost first, as a list of maps.
#[derive(Clone, Copy, Debug, Default)]
pub struct SysObject;

impl HostObject for SysObject {
    fn type_name(&self) -> &str {
        "sys"
    }

    fn get_item(&self, key: &Value, env: &Environment) -> EvalResult {
        let Value::Str(key) = key else {
            return Err(map_keys_must_be_strings(key.type_name()));
        };
        match key.as_str() {
            "locals" => Ok(Value::Map(env.current_frame())),
            "globals" => Ok(Value::list(
                env.frames().iter().cloned().map(Value::Map).collect(),
            )),
            _ => Err(key_not_found(key)),
        }
    }

    fn set_item(&self, _key: &Value, _value: Value, _env: &Environment) -> EvalResult<()> {
        Err(read_only("sys"))
    }
}

/// The `len` global.
///
/// Takes one argument and resolves it against the live environment at call
/// time, subscripts included.
#[derive(Clone, Copy, Debug, Default)]
pub struct LenFunction;

impl HostObject for LenFunction {
    fn type_name(&self) -> &str {
        "len"
    }

    fn call(&self, args: &[Expr], env: &mut Environment) -> EvalResult {
        let [arg] = args else {
            return Err(wrong_arg_count("len", 1, args.len()));
        };
        let len = match eval_expr(arg, env)? {
            Value::Str(s) => s.chars().count(),
            Value::List(items) => items.borrow().len(),
            Value::Map(map) => map.borrow().len(),
            other => return Err(cannot_get_length(other.type_name())),
        };
        i64::try_from(len)
            .map(Value::Int)
            .map_err(|_| integer_overflow("len"))
    }
}
