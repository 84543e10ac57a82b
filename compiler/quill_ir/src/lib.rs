//! Quill IR - shared data types for the Quill pipeline.
//!
//! Contains the token model produced by `quill_lexer`, the AST produced by
//! `quill_parse`, and the source spans both refer to. Nothing here knows how
//! to evaluate; the AST is plain data handed to `quill_eval` together with an
//! environment.

pub mod ast;
mod span;
mod token;

pub use ast::{AssignOp, BinaryOp, Expr, Stmt, StmtKind, StmtList, Variable};
pub use span::Span;
pub use token::{Token, TokenKind};
