#![deny(clippy::arithmetic_side_effects)]
//! Quill Eval - tree-walking evaluator for Quill programs.
//!
//! # Architecture
//!
//! - `Environment`: frame stack, global registry of host objects, output sinks
//! - `execute` / `eval_expr`: exhaustive dispatch over the AST
//! - `evaluate_binary`: integer arithmetic plus string and list operators
//! - `HostObject`: capability trait for values supplied by the embedding host
//!
//! Runtime faults are `EvalError`s. [`Environment::evaluate`] is the
//! host-facing entry point: it reports a fault on the error channel instead
//! of returning it.

mod environment;
pub mod errors;
mod exec;
mod host;
mod operators;
mod output;
mod shared;
mod value;

#[cfg(test)]
mod tests;

pub use environment::{Environment, WriteOutcome};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use exec::{eval_expr, execute};
pub use host::{HostObject, LenFunction, NativeFunction, SysObject};
pub use operators::{evaluate_binary, MAX_REPEAT_LEN};
pub use output::{BufferSink, Channel, OutputSink, StdioSink};
pub use shared::Shared;
pub use value::{Bindings, HostRef, Value};
