//! Evaluator tests driven by parsed source.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod value_tests;

use quill_lexer::LexOptions;
use quill_parse::parse_source;

use crate::{BufferSink, Channel, Environment};

/// Parse `source` and evaluate it in `env`, returning the captured output.
pub(crate) fn run_in(env: &mut Environment, source: &str) -> BufferSink {
    let out = BufferSink::new();
    env.register_output_sink(out.clone());
    let program = parse_source(source, LexOptions::default())
        .unwrap()
        .into_complete()
        .expect("source should parse completely");
    env.evaluate(&program);
    out
}

/// Evaluate `source` in a fresh environment and return the standard output lines.
pub(crate) fn printed(source: &str) -> Vec<String> {
    run_in(&mut Environment::new(), source).lines(Channel::Standard)
}

/// Evaluate `source` in a fresh environment and return the error lines.
pub(crate) fn errors(source: &str) -> Vec<String> {
    run_in(&mut Environment::new(), source).lines(Channel::Error)
}
