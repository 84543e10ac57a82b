//! Runtime error types and their constructors.
//!
//! Errors are built through the `#[cold]` factory functions below rather
//! than by naming `EvalErrorKind` variants at the fault site. The statement
//! runner attaches the line afterwards.

use quill_ir::BinaryOp;
use thiserror::Error;

/// Result of evaluation.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Access
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("{type_name} is not subscriptable")]
    NotSubscriptable { type_name: String },
    #[error("cannot index {container} with {index}")]
    CannotIndex { container: String, index: String },
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },
    #[error("key not found: {key}")]
    KeyNotFound { key: String },
    #[error("map keys must be strings, got {type_name}")]
    MapKeysMustBeStrings { type_name: String },
    #[error("{what} is read-only")]
    ReadOnly { what: String },

    // Iteration and calls
    #[error("{type_name} is not iterable")]
    NotIterable { type_name: String },
    #[error("{type_name} is not callable")]
    NotCallable { type_name: String },
    #[error("{name} expects {expected} {}, got {got}", arguments(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("cannot get length of {type_name}")]
    CannotGetLength { type_name: String },

    // Arithmetic
    #[error("cannot apply `{op}` to {left} and {right}")]
    BinaryTypeMismatch {
        op: BinaryOp,
        left: String,
        right: String,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },
    #[error("repeating {unit_len} items {count} times exceeds the limit of {limit}")]
    RepeatTooLarge {
        unit_len: usize,
        count: i64,
        limit: usize,
    },

    #[error("{message}")]
    Custom { message: String },
}

fn arguments(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

/// A runtime fault, with the line of the statement that raised it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}{kind}", line_prefix(.line))]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub line: Option<u32>,
}

fn line_prefix(line: &Option<u32>) -> String {
    match line {
        Some(line) => format!("line {line}: "),
        None => String::new(),
    }
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, line: None }
    }

    /// Attach a line unless an inner statement already did.
    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line.get_or_insert(line);
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Access

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_subscriptable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotSubscriptable {
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn cannot_index(container: &str, index: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CannotIndex {
        container: container.to_string(),
        index: index.to_string(),
    })
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

#[cold]
pub fn key_not_found(key: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::KeyNotFound {
        key: key.to_string(),
    })
}

#[cold]
pub fn map_keys_must_be_strings(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MapKeysMustBeStrings {
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn read_only(what: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReadOnly {
        what: what.to_string(),
    })
}

// Iteration and calls

#[cold]
pub fn not_iterable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotIterable {
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn cannot_get_length(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CannotGetLength {
        type_name: type_name.to_string(),
    })
}

// Arithmetic

#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch {
        op,
        left: left.to_string(),
        right: right.to_string(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

#[cold]
pub fn repeat_too_large(unit_len: usize, count: i64, limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RepeatTooLarge {
        unit_len,
        count,
        limit,
    })
}

/// Free-form error for host objects.
#[cold]
pub fn custom(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Custom {
        message: message.into(),
    })
}
