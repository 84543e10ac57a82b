//! Binary operator implementations for the evaluator.
//!
//! Integer arithmetic is checked: overflow is an error, never a wrap.
//! Division floors toward negative infinity. Repetition is capped at
//! [`MAX_REPEAT_LEN`].

use quill_ir::BinaryOp;

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, repeat_too_large, EvalResult,
};
use crate::value::Value;

/// Longest string (in bytes) or list (in elements) that `*` may build.
pub const MAX_REPEAT_LEN: usize = 1 << 24;

/// Evaluate a binary operation on two evaluated operands.
#[expect(
    clippy::needless_pass_by_value,
    reason = "operands are freshly evaluated temporaries owned by the caller"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match (&left, &right, op) {
        (Value::Int(a), Value::Int(b), _) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b), BinaryOp::Add) => {
            let mut joined = String::with_capacity(a.len().saturating_add(b.len()));
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(joined))
        }
        (Value::List(a), Value::List(b), BinaryOp::Add) => {
            let mut joined = a.borrow().clone();
            joined.extend(b.borrow().iter().cloned());
            Ok(Value::list(joined))
        }
        (Value::Str(s), Value::Int(n), BinaryOp::Mul)
        | (Value::Int(n), Value::Str(s), BinaryOp::Mul) => {
            let count = repeat_count(*n, s.len())?;
            Ok(Value::Str(s.repeat(count)))
        }
        (Value::List(items), Value::Int(n), BinaryOp::Mul)
        | (Value::Int(n), Value::List(items), BinaryOp::Mul) => {
            let items = items.borrow();
            let count = repeat_count(*n, items.len())?;
            let mut repeated = Vec::with_capacity(items.len().saturating_mul(count));
            for _ in 0..count {
                repeated.extend(items.iter().cloned());
            }
            Ok(Value::list(repeated))
        }
        _ => Err(binary_type_mismatch(
            op,
            left.type_name(),
            right.type_name(),
        )),
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            floor_div(a, b)
        }
    };
    result
        .map(Value::Int)
        .ok_or_else(|| integer_overflow(op.symbol()))
}

/// Integer division rounding toward negative infinity.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && (remainder < 0) != (b < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Validate a repetition count. Negative counts repeat zero times, and so
/// does any count applied to an empty unit.
fn repeat_count(n: i64, unit_len: usize) -> EvalResult<usize> {
    if n <= 0 || unit_len == 0 {
        return Ok(0);
    }
    usize::try_from(n)
        .ok()
        .filter(|&count| {
            unit_len
                .checked_mul(count)
                .is_some_and(|total| total <= MAX_REPEAT_LEN)
        })
        .ok_or_else(|| repeat_too_large(unit_len, n, MAX_REPEAT_LEN))
}

#[cfg(test)]
mod tests;
