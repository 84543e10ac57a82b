//! Token cursor with one token of lookahead over a lazy lexer.

use quill_ir::{Token, TokenKind};
use quill_lexer::Lexer;
use tracing::trace;

use crate::error::{ParseError, ParseResult, Stop};

pub(crate) struct Cursor<'src> {
    lexer: Lexer<'src>,
    /// Lookahead slot. `Some(None)` means the lexer reported end of stream.
    peeked: Option<Option<Token>>,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(lexer: Lexer<'src>) -> Self {
        Cursor {
            lexer,
            peeked: None,
        }
    }

    /// Look at the next token without consuming it. `None` is end of stream.
    pub(crate) fn peek(&mut self) -> ParseResult<Option<&Token>> {
        if self.peeked.is_none() {
            let token = self.lexer.next_token()?;
            self.peeked = Some(token);
        }
        Ok(self.peeked.as_ref().and_then(Option::as_ref))
    }

    /// Check if the next token has the given kind.
    pub(crate) fn check(&mut self, kind: &TokenKind) -> ParseResult<bool> {
        Ok(self.peek()?.is_some_and(|t| t.kind == *kind))
    }

    /// Consume the next token. Running out of input is `Stop::Incomplete`.
    pub(crate) fn advance(&mut self) -> ParseResult<Token> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        match token {
            Some(token) => {
                trace!(kind = %token.kind, line = token.line, "consume");
                Ok(token)
            }
            None => {
                // Keep reporting end of stream on later peeks.
                self.peeked = Some(None);
                Err(Stop::Incomplete)
            }
        }
    }

    /// Consume the next token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> ParseResult<bool> {
        if self.check(kind)? {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume a token of the given kind or fail with a syntax error.
    pub(crate) fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        let token = self.advance()?;
        if token.kind == *kind {
            Ok(token)
        } else {
            Err(ParseError::unexpected(&token).into())
        }
    }

    /// Consume an identifier and return its name.
    pub(crate) fn expect_ident(&mut self) -> ParseResult<String> {
        let token = self.advance()?;
        if let TokenKind::Ident(name) = token.kind {
            return Ok(name);
        }
        Err(ParseError::unexpected(&token).into())
    }
}
