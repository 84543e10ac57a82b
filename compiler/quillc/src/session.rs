//! Interactive evaluation with incremental parsing.
//!
//! Lines accumulate in a buffer that is re-parsed with unclosed blocks left
//! open. An incomplete parse waits for more lines; an empty line closes
//! every open block and runs what was entered.

use quill_eval::Environment;
use quill_lexer::LexOptions;
use quill_parse::{parse_source, ParseError, ParseOutcome};
use tracing::debug;

/// What a [`Session`] did with one line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Feed {
    /// The buffered input is an incomplete program.
    NeedMore,
    /// The buffered input parsed and was evaluated.
    Evaluated,
    /// The buffered input is not valid Quill. The buffer was discarded.
    Rejected(ParseError),
}

/// A persistent environment plus the partially entered program.
pub struct Session {
    env: Environment,
    buffer: String,
}

impl Session {
    pub fn new() -> Self {
        Self::with_environment(Environment::new())
    }

    pub fn with_environment(env: Environment) -> Self {
        Session {
            env,
            buffer: String::new(),
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Whether earlier lines are waiting for the rest of their statement.
    pub fn is_continuing(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Feed one line of input.
    pub fn feed(&mut self, line: &str) -> Feed {
        if line.trim().is_empty() {
            if self.buffer.is_empty() {
                return Feed::NeedMore;
            }
            return self.submit(LexOptions::default());
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
        self.submit(LexOptions::strict())
    }

    fn submit(&mut self, options: LexOptions) -> Feed {
        match parse_source(&self.buffer, options) {
            Ok(ParseOutcome::Incomplete) => Feed::NeedMore,
            Ok(ParseOutcome::Complete(program)) => {
                self.buffer.clear();
                self.env.evaluate(&program);
                Feed::Evaluated
            }
            Err(err) => {
                debug!(%err, "discarding input");
                self.buffer.clear();
                Feed::Rejected(err)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
