//! Recursive descent parser for Quill.
//!
//! Pulls tokens lazily from a [`quill_lexer::Lexer`] and builds a
//! [`StmtList`]. Three outcomes are possible: a complete program, a
//! program cut off by end of input ([`ParseOutcome::Incomplete`], used for
//! incremental entry), or a [`ParseError`].

mod cursor;
mod error;
mod grammar;


use quill_ir::StmtList;
use quill_lexer::{tokenize, LexOptions, Lexer};

use cursor::Cursor;
use error::Stop;

pub use error::ParseError;

/// Result of a successful parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The token stream formed a complete statement sequence.
    Complete(StmtList),
    /// The token stream ended before the grammar reached a complete
    /// statement sequence. More input may complete it.
    Incomplete,
}

impl ParseOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, ParseOutcome::Complete(_))
    }

    pub fn into_complete(self) -> Option<StmtList> {
        match self {
            ParseOutcome::Complete(program) => Some(program),
            ParseOutcome::Incomplete => None,
        }
    }
}

/// Parser state.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(lexer: Lexer<'src>) -> Self {
        Parser {
            cursor: Cursor::new(lexer),
        }
    }

    /// Parse the whole token stream as a program.
    pub fn parse_program(mut self) -> Result<ParseOutcome, ParseError> {
        match self.program() {
            Ok(program) => Ok(ParseOutcome::Complete(program)),
            Err(Stop::Incomplete) => Ok(ParseOutcome::Incomplete),
            Err(Stop::Error(err)) => Err(err),
        }
    }
}

/// Parse a token stream.
pub fn parse(lexer: Lexer<'_>) -> Result<ParseOutcome, ParseError> {
    Parser::new(lexer).parse_program()
}

/// Tokenize and parse `source`.
pub fn parse_source(source: &str, options: LexOptions) -> Result<ParseOutcome, ParseError> {
    parse(tokenize(source, options))
}
