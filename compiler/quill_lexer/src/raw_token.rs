//! Raw tokens recognized by logos, before layout processing.

use logos::Logos;

/// Raw token from logos.
///
/// Horizontal whitespace is skipped here; leading indentation is measured
/// separately from the source after each `Newline`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")]
pub(crate) enum RawToken {
    /// A line break plus all whitespace after it, blank lines and the next
    /// line's indentation included.
    #[regex(r"\n[ \t\r\n]*")]
    Newline,

    #[token("if")]
    If,
    #[token("for")]
    For,
    #[token("in")]
    In,
    #[token("nop")]
    Nop,
    #[token("print")]
    Print,

    #[token("=")]
    Eq,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,

    #[token(".")]
    Dot,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,

    #[regex(r"[0-9]+")]
    Int,

    /// Double-quoted string; no escapes, no line breaks.
    #[regex(r#""[^"\n]*""#)]
    Str,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}
