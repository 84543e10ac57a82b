//! Statement execution and expression evaluation.

use quill_ir::{Expr, Stmt, StmtKind, StmtList, Variable};

use crate::environment::Environment;
use crate::errors::{
    cannot_index, index_out_of_bounds, key_not_found, map_keys_must_be_strings, not_callable,
    not_iterable, not_subscriptable, read_only, EvalResult,
};
use crate::operators::evaluate_binary;
use crate::output::Channel;
use crate::value::Value;

/// Run statements in order. The first fault stops the sequence and carries
/// the line of the statement that raised it.
#[tracing::instrument(level = "debug", skip_all, fields(len = program.len()))]
pub fn execute(program: &StmtList, env: &mut Environment) -> EvalResult<()> {
    for stmt in program {
        exec_stmt(stmt, env).map_err(|err| err.at_line(stmt.line))?;
    }
    Ok(())
}

fn exec_stmt(stmt: &Stmt, env: &mut Environment) -> EvalResult<()> {
    match &stmt.kind {
        StmtKind::Assign { target, value } => {
            let value = eval_expr(value, env)?;
            assign(target, value, env)
        }
        StmtKind::Nop => Ok(()),
        StmtKind::Print(expr) => {
            let value = eval_expr(expr, env)?;
            env.emit(Channel::Standard, &value);
            Ok(())
        }
        StmtKind::If { cond, body } => {
            if eval_expr(cond, env)?.is_truthy() {
                execute(body, env)?;
            }
            Ok(())
        }
        StmtKind::For {
            var,
            iterable,
            body,
        } => {
            let iterable = eval_expr(iterable, env)?;
            for item in iterate(&iterable, env)? {
                env.push_frame();
                env.set_local(var, item);
                let result = execute(body, env);
                env.pop_frame();
                result?;
            }
            Ok(())
        }
    }
}

/// Evaluate an expression against the current environment.
pub fn eval_expr(expr: &Expr, env: &mut Environment) -> EvalResult {
    match expr {
        Expr::Int(n) => Ok(Value::Int(*n)),
        Expr::Str(s) => Ok(Value::Str(s.clone())),
        Expr::List(items) => {
            let items = items
                .iter()
                .map(|item| eval_expr(item, env))
                .collect::<EvalResult<Vec<_>>>()?;
            Ok(Value::list(items))
        }
        Expr::Var(var) => read_variable(var, env),
        Expr::Binary { op, left, right } => {
            let left = eval_expr(left, env)?;
            let right = eval_expr(right, env)?;
            evaluate_binary(left, right, *op)
        }
        Expr::Call { callee, args } => match eval_expr(callee, env)? {
            Value::Host(host) => host.call(args, env),
            other => Err(not_callable(other.type_name())),
        },
    }
}

fn read_variable(var: &Variable, env: &mut Environment) -> EvalResult {
    let mut value = env.read(&var.name)?;
    for subscript in &var.subscripts {
        let key = eval_expr(subscript, env)?;
        value = index_read(&value, &key, env)?;
    }
    Ok(value)
}

fn assign(target: &Variable, value: Value, env: &mut Environment) -> EvalResult<()> {
    let Some((last, path)) = target.subscripts.split_last() else {
        env.write(&target.name, value);
        return Ok(());
    };
    let mut container = env.read(&target.name)?;
    for subscript in path {
        let key = eval_expr(subscript, env)?;
        container = index_read(&container, &key, env)?;
    }
    let key = eval_expr(last, env)?;
    index_write(&container, key, value, env)
}

/// Map a possibly negative index onto `0..len`.
fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let index = if index < 0 {
        index.checked_add(len)?
    } else {
        index
    };
    if (0..len).contains(&index) {
        usize::try_from(index).ok()
    } else {
        None
    }
}

fn index_read(container: &Value, key: &Value, env: &Environment) -> EvalResult {
    match (container, key) {
        (Value::List(items), Value::Int(index)) => {
            let items = items.borrow();
            resolve_index(*index, items.len())
                .and_then(|i| items.get(i).cloned())
                .ok_or_else(|| index_out_of_bounds(*index, items.len()))
        }
        (Value::Str(s), Value::Int(index)) => {
            let len = s.chars().count();
            resolve_index(*index, len)
                .and_then(|i| s.chars().nth(i))
                .map(|c| Value::Str(c.to_string()))
                .ok_or_else(|| index_out_of_bounds(*index, len))
        }
        (Value::Map(map), Value::Str(name)) => map
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| key_not_found(name)),
        (Value::Map(_), other) => Err(map_keys_must_be_strings(other.type_name())),
        (Value::Host(host), key) => host.get_item(key, env),
        (Value::List(_) | Value::Str(_), other) => {
            Err(cannot_index(container.type_name(), other.type_name()))
        }
        (Value::Int(_), _) => Err(not_subscriptable(container.type_name())),
    }
}

fn index_write(container: &Value, key: Value, value: Value, env: &Environment) -> EvalResult<()> {
    match (container, key) {
        (Value::List(items), Value::Int(index)) => {
            let mut items = items.borrow_mut();
            let len = items.len();
            let i = resolve_index(index, len).ok_or_else(|| index_out_of_bounds(index, len))?;
            items[i] = value;
            Ok(())
        }
        (Value::Map(map), Value::Str(name)) => {
            map.borrow_mut().insert(name, value);
            Ok(())
        }
        (Value::Map(_), other) => Err(map_keys_must_be_strings(other.type_name())),
        (Value::Host(host), key) => host.set_item(&key, value, env),
        (Value::Str(_), _) => Err(read_only("str")),
        (Value::List(_), other) => Err(cannot_index("list", other.type_name())),
        (Value::Int(_), _) => Err(not_subscriptable("int")),
    }
}

/// Elements visited by `for`. Lists are snapshotted, so the body may
/// mutate the list it is iterating.
fn iterate(value: &Value, env: &Environment) -> EvalResult<Vec<Value>> {
    match value {
        Value::List(items) => Ok(items.borrow().clone()),
        Value::Str(s) => Ok(s.chars().map(|c| Value::Str(c.to_string())).collect()),
        Value::Map(map) => {
            let mut keys: Vec<String> = map.borrow().keys().cloned().collect();
            keys.sort();
            Ok(keys.into_iter().map(Value::Str).collect())
        }
        Value::Host(host) => host.iterate(env),
        Value::Int(_) => Err(not_iterable(value.type_name())),
    }
}
