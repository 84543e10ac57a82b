//! The `run` command: parse and evaluate a Quill script.

use quill_eval::{Environment, StdioSink};
use quill_parse::{parse_source, ParseOutcome};
use tracing::debug;

use super::{read_file, CommandError, RunOptions};

/// Run the script named by `options.path` with output on stdio.
pub fn run_file(options: &RunOptions) -> Result<(), CommandError> {
    let path = options.path.as_deref().ok_or(CommandError::MissingPath)?;
    let source = read_file(path)?;
    let mut env = Environment::new();
    env.register_output_sink(StdioSink);
    run_source(&source, options, &mut env)
}

/// Parse `source` and evaluate it in `env`.
///
/// Lexical and syntax errors are returned before anything runs. Runtime
/// faults go to the environment's error channel.
pub fn run_source(
    source: &str,
    options: &RunOptions,
    env: &mut Environment,
) -> Result<(), CommandError> {
    match parse_source(source, options.lex_options())? {
        ParseOutcome::Complete(program) => {
            debug!(statements = program.len(), "parsed");
            env.evaluate(&program);
            Ok(())
        }
        ParseOutcome::Incomplete => Err(CommandError::UnexpectedEof),
    }
}
