//! Token types produced by the Quill lexer.

use crate::ast::AssignOp;
use crate::Span;
use std::fmt;

/// A token with its location in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// 1-based source line.
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, line: u32) -> Self {
        Token { kind, span, line }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {} (line {})", self.kind, self.span, self.line)
    }
}

/// Token kinds for Quill.
///
/// `Newline`, `StartBlock` and `EndBlock` never appear in source text; the
/// lexer synthesizes them from line breaks and indentation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Identifier: `count`, `sys`
    Ident(String),
    /// Integer literal: `42`
    Int(i64),
    /// String literal with the quotes stripped: `"text"`
    Str(String),

    // Keywords
    If,
    For,
    In,
    Nop,
    Print,

    /// `=`, `+=`, `-=`, `*=`, `/=`
    Assign(AssignOp),
    Dot,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,

    // Layout
    Newline,
    StartBlock,
    EndBlock,
}

impl TokenKind {
    /// Name of the token kind as it appears in syntax errors.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "NAME",
            TokenKind::Int(_) => "NUMBER",
            TokenKind::Str(_) => "STRING",
            TokenKind::If => "IF",
            TokenKind::For => "FOR",
            TokenKind::In => "IN",
            TokenKind::Nop => "NOP",
            TokenKind::Print => "PRINT",
            TokenKind::Assign(_) => "ASSIGN",
            TokenKind::Dot => "DOT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "TIMES",
            TokenKind::Slash => "DIVIDE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LSPAREN",
            TokenKind::RBracket => "RSPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Newline => "NEWLINE",
            TokenKind::StartBlock => "START_BLOCK",
            TokenKind::EndBlock => "END_BLOCK",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "NAME({name})"),
            TokenKind::Int(n) => write!(f, "NUMBER({n})"),
            TokenKind::Str(s) => write!(f, "STRING({s:?})"),
            TokenKind::Assign(op) => write!(f, "ASSIGN({})", op.symbol()),
            other => f.write_str(other.display_name()),
        }
    }
}
