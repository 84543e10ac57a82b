//! Lexer error types.

use thiserror::Error;

/// A fatal tokenization error.
///
/// Every variant carries the 1-based line and the byte offset where the
/// problem was found.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    #[error("cannot make sense of char {ch:?} on line {line} (offset {offset})")]
    UnexpectedChar { ch: char, line: u32, offset: u32 },

    #[error("inconsistent indentation on line {line}")]
    InconsistentIndentation { line: u32, offset: u32 },

    #[error("unindent does not match any outer indentation level on line {line}")]
    UnmatchedDedent { line: u32, offset: u32 },

    #[error("integer literal {literal} is too large on line {line}")]
    IntOverflow {
        literal: String,
        line: u32,
        offset: u32,
    },
}

impl LexError {
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnexpectedChar { line, .. }
            | LexError::InconsistentIndentation { line, .. }
            | LexError::UnmatchedDedent { line, .. }
            | LexError::IntOverflow { line, .. } => *line,
        }
    }

    pub fn offset(&self) -> u32 {
        match self {
            LexError::UnexpectedChar { offset, .. }
            | LexError::InconsistentIndentation { offset, .. }
            | LexError::UnmatchedDedent { offset, .. }
            | LexError::IntOverflow { offset, .. } => *offset,
        }
    }
}
