//! Parse error types.

use quill_ir::Token;
use quill_lexer::LexError;
use thiserror::Error;

/// A compile-time failure: the source cannot be tokenized, or the token
/// sequence does not fit the grammar.
///
/// Running out of tokens is not an error; see [`crate::ParseOutcome::Incomplete`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token that cannot extend the current parse.
    #[error("can't make use of {found} on line {line}")]
    Syntax { found: &'static str, line: u32 },
}

impl ParseError {
    #[cold]
    pub(crate) fn unexpected(token: &Token) -> Self {
        ParseError::Syntax {
            found: token.kind.display_name(),
            line: token.line,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            ParseError::Lex(err) => err.line(),
            ParseError::Syntax { line, .. } => *line,
        }
    }
}

/// Why a grammar rule stopped early.
#[derive(Debug)]
pub(crate) enum Stop {
    /// The token stream ended inside a construct.
    Incomplete,
    Error(ParseError),
}

impl From<ParseError> for Stop {
    fn from(err: ParseError) -> Self {
        Stop::Error(err)
    }
}

impl From<LexError> for Stop {
    fn from(err: LexError) -> Self {
        Stop::Error(ParseError::Lex(err))
    }
}

pub(crate) type ParseResult<T> = Result<T, Stop>;
