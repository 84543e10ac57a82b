//! Command handlers for the `quill` CLI.
//!
//! Each submodule implements one command. Option parsing and file reading
//! shared between commands live here.

use std::io;

use quill_lexer::{EndOfInput, LexError, LexOptions};
use quill_parse::ParseError;
use thiserror::Error;

mod run;
mod tokens;

pub use run::{run_file, run_source};
pub use tokens::{lex_file, token_listing};

/// Options for `quill run` and `quill tokens`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Script to read. The first non-flag argument.
    pub path: Option<String>,
    /// Leave blocks open at end of input instead of closing them.
    pub strict: bool,
    /// Echo each token to stderr while lexing.
    pub echo_tokens: bool,
}

impl RunOptions {
    pub fn lex_options(&self) -> LexOptions {
        let end_of_input = if self.strict {
            EndOfInput::Strict
        } else {
            EndOfInput::AutoClose
        };
        LexOptions {
            end_of_input,
            echo: self.echo_tokens,
        }
    }
}

/// Parse command options from the arguments after the command name.
pub fn parse_run_options(args: &[String]) -> RunOptions {
    let mut options = RunOptions::default();

    for arg in args {
        match arg.as_str() {
            "--strict" => options.strict = true,
            "--tokens" => options.echo_tokens = true,
            flag if flag.starts_with('-') => {
                eprintln!("warning: unknown option '{flag}'");
            }
            path => {
                if options.path.is_none() {
                    options.path = Some(path.to_string());
                } else {
                    eprintln!("warning: ignoring extra argument '{path}'");
                }
            }
        }
    }

    options
}

/// Failure of a CLI command. Runtime faults are not errors here: they are
/// reported on the error channel by the evaluator.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("missing file path")]
    MissingPath,

    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("unexpected end of input")]
    UnexpectedEof,
}

pub(crate) fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_string(),
        source,
    })
}
