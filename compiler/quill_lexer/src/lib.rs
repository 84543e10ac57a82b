//! Lexer for Quill using logos plus an off-side-rule layout pass.
//!
//! logos does the longest-match scan of literals, operators and names.
//! On every physical line break the lexer measures the next line's leading
//! whitespace against an indentation stack and synthesizes `Newline`,
//! `StartBlock` and `EndBlock` tokens. Tokens are produced lazily, one per
//! [`Lexer::next_token`] call.

mod indent;
mod lex_error;
mod raw_token;


use std::collections::VecDeque;

use logos::Logos;
use quill_ir::{AssignOp, Span, Token, TokenKind};
use tracing::trace;

use indent::{IndentError, IndentStack, Layout};
use raw_token::RawToken;

pub use lex_error::LexError;

/// What the lexer does with blocks still open at end of input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndOfInput {
    /// Emit one `EndBlock` per open level so a well-formed program parses
    /// without explicit closing structure.
    #[default]
    AutoClose,
    /// Emit nothing. The parser sees the stream end inside the block and
    /// reports the program as incomplete.
    Strict,
}

/// Lexer configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub end_of_input: EndOfInput,
    /// Print every token to stderr as it is produced. Diagnostic only.
    pub echo: bool,
}

impl LexOptions {
    /// Options for incremental parsing: unclosed blocks mean "need more input".
    pub fn strict() -> Self {
        LexOptions {
            end_of_input: EndOfInput::Strict,
            echo: false,
        }
    }
}

/// Lazy token source over one source unit.
pub struct Lexer<'src> {
    raw: logos::Lexer<'src, RawToken>,
    options: LexOptions,
    indents: IndentStack,
    /// Tokens already decided but not yet handed out (layout runs).
    pending: VecDeque<Token>,
    line: u32,
    /// Set once the first real token has been seen; leading blank lines
    /// produce no `Newline`.
    started: bool,
    /// Set after a lexical error; the stream is over.
    failed: bool,
}

impl<'src> Lexer<'src> {
    /// Create a lexer with no source. Call [`Lexer::set_source`] before
    /// pulling tokens.
    pub fn new(options: LexOptions) -> Self {
        Lexer {
            raw: RawToken::lexer(""),
            options,
            indents: IndentStack::new(),
            pending: VecDeque::new(),
            line: 1,
            started: false,
            failed: false,
        }
    }

    /// Start tokenizing `source`, discarding any previous state.
    pub fn set_source(&mut self, source: &'src str) {
        self.raw = RawToken::lexer(source);
        self.indents = IndentStack::new();
        self.pending.clear();
        self.line = 1;
        self.started = false;
        self.failed = false;
    }

    /// Pull the next token. `Ok(None)` marks end of stream.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.failed {
            return Ok(None);
        }
        let token = match self.produce() {
            Ok(token) => token,
            Err(err) => {
                self.failed = true;
                return Err(err);
            }
        };
        if let Some(token) = &token {
            trace!(kind = %token.kind, line = token.line, "token");
            if self.options.echo {
                eprintln!("{token:?}");
            }
        }
        Ok(token)
    }

    fn produce(&mut self) -> Result<Option<Token>, LexError> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(Some(token));
        }

        loop {
            let Some(result) = self.raw.next() else {
                return Ok(self.end_of_input());
            };
            let range = self.raw.span();
            let span = Span::from_range(range.clone());
            let slice = self.raw.slice();

            let Ok(raw) = result else {
                return Err(LexError::UnexpectedChar {
                    ch: slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
                    line: self.line,
                    offset: span.start,
                });
            };

            if raw != RawToken::Newline {
                self.started = true;
                let kind = self.convert(raw, slice, span)?;
                return Ok(Some(Token::new(kind, span, self.line)));
            }

            let breaks = slice.bytes().filter(|&b| b == b'\n').count();
            self.line = self
                .line
                .saturating_add(u32::try_from(breaks).unwrap_or(u32::MAX));

            if !self.started || range.end == self.raw.source().len() {
                // Leading blank lines, or trailing line breaks before EOF.
                continue;
            }

            // The slice ends with the next line's indentation.
            let indent = slice
                .rsplit('\n')
                .next()
                .unwrap_or_default()
                .trim_end_matches('\r');
            return self.layout(indent, span).map(Some);
        }
    }

    /// Turn a line break into `Newline` plus any block tokens.
    fn layout(&mut self, indent: &str, span: Span) -> Result<Token, LexError> {
        let line = self.line;
        let newline = Token::new(TokenKind::Newline, span, line);
        let layout = self.indents.apply(indent);
        trace!(line, depth = self.indents.depth(), ?layout, "layout");
        match layout {
            Ok(Layout::Same) => Ok(newline),
            Ok(Layout::Indent) => {
                self.pending
                    .push_back(Token::new(TokenKind::StartBlock, span, line));
                Ok(newline)
            }
            Ok(Layout::Dedent(closed)) => {
                for _ in 1..closed {
                    self.pending
                        .push_back(Token::new(TokenKind::EndBlock, span, line));
                }
                self.pending.push_back(newline);
                Ok(Token::new(TokenKind::EndBlock, span, line))
            }
            Err(IndentError::Inconsistent) => Err(LexError::InconsistentIndentation {
                line,
                offset: span.end,
            }),
            Err(IndentError::Unmatched) => Err(LexError::UnmatchedDedent {
                line,
                offset: span.end,
            }),
        }
    }

    fn end_of_input(&mut self) -> Option<Token> {
        if self.options.end_of_input == EndOfInput::Strict || !self.indents.close_one() {
            return None;
        }
        let len = self.raw.source().len();
        let end = Span::from_range(len..len);
        Some(Token::new(TokenKind::EndBlock, end, self.line))
    }

    fn convert(&self, raw: RawToken, slice: &str, span: Span) -> Result<TokenKind, LexError> {
        let kind = match raw {
            RawToken::Int => {
                let value = slice.parse::<i64>().map_err(|_| LexError::IntOverflow {
                    literal: slice.to_owned(),
                    line: self.line,
                    offset: span.start,
                })?;
                TokenKind::Int(value)
            }
            RawToken::Str => TokenKind::Str(slice[1..slice.len() - 1].to_owned()),
            RawToken::Ident => TokenKind::Ident(slice.to_owned()),

            RawToken::If => TokenKind::If,
            RawToken::For => TokenKind::For,
            RawToken::In => TokenKind::In,
            RawToken::Nop => TokenKind::Nop,
            RawToken::Print => TokenKind::Print,

            RawToken::Eq => TokenKind::Assign(AssignOp::Plain),
            RawToken::PlusEq => TokenKind::Assign(AssignOp::Add),
            RawToken::MinusEq => TokenKind::Assign(AssignOp::Sub),
            RawToken::StarEq => TokenKind::Assign(AssignOp::Mul),
            RawToken::SlashEq => TokenKind::Assign(AssignOp::Div),

            RawToken::Dot => TokenKind::Dot,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Comma => TokenKind::Comma,

            RawToken::Newline => TokenKind::Newline,
        };
        Ok(kind)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Create a lexer over `source`.
pub fn tokenize(source: &str, options: LexOptions) -> Lexer<'_> {
    let mut lexer = Lexer::new(options);
    lexer.set_source(source);
    lexer
}

/// Tokenize all of `source` eagerly.
pub fn lex_all(source: &str, options: LexOptions) -> Result<Vec<Token>, LexError> {
    tokenize(source, options).collect()
}
