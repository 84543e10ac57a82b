//! Expression productions.
//!
//! ```text
//! expr     := term ((PLUS | MINUS) term)*
//! term     := factor ((TIMES | DIVIDE) factor)*
//! factor   := NUMBER | STRING | list | variable | call | LPAREN expr RPAREN
//! list     := LSPAREN [expr (COMMA expr)*] RSPAREN
//! variable := NAME (DOT NAME | LSPAREN expr RSPAREN)*
//! call     := variable LPAREN [arg (COMMA arg)*] RPAREN
//! arg      := NUMBER | STRING | variable
//! ```

use quill_ir::{BinaryOp, Expr, TokenKind, Variable};

use crate::error::{ParseError, ParseResult};
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn expr(&mut self) -> ParseResult<Expr> {
        let mut left = self.term()?;
        while let Some(op) = self.match_additive_op()? {
            self.cursor.advance()?;
            let right = self.term()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn term(&mut self) -> ParseResult<Expr> {
        let mut left = self.factor()?;
        while let Some(op) = self.match_multiplicative_op()? {
            self.cursor.advance()?;
            let right = self.factor()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn match_additive_op(&mut self) -> ParseResult<Option<BinaryOp>> {
        Ok(match self.cursor.peek()?.map(|t| &t.kind) {
            Some(TokenKind::Plus) => Some(BinaryOp::Add),
            Some(TokenKind::Minus) => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    fn match_multiplicative_op(&mut self) -> ParseResult<Option<BinaryOp>> {
        Ok(match self.cursor.peek()?.map(|t| &t.kind) {
            Some(TokenKind::Star) => Some(BinaryOp::Mul),
            Some(TokenKind::Slash) => Some(BinaryOp::Div),
            _ => None,
        })
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        let token = self.cursor.advance()?;
        match token.kind {
            TokenKind::Int(n) => Ok(Expr::Int(n)),
            TokenKind::Str(s) => Ok(Expr::Str(s)),
            TokenKind::LBracket => self.list_tail(),
            TokenKind::LParen => {
                let inner = self.expr()?;
                self.cursor.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Ident(name) => {
                let var = self.subscripts(Variable::new(name))?;
                if self.cursor.check(&TokenKind::LParen)? {
                    self.call_tail(var)
                } else {
                    Ok(Expr::Var(var))
                }
            }
            ref other => Err(ParseError::Syntax {
                found: other.display_name(),
                line: token.line,
            }
            .into()),
        }
    }

    /// Elements of a list literal, after the opening `[`.
    fn list_tail(&mut self) -> ParseResult<Expr> {
        let mut items = Vec::new();
        if self.cursor.eat(&TokenKind::RBracket)? {
            return Ok(Expr::List(items));
        }
        loop {
            items.push(self.expr()?);
            let token = self.cursor.advance()?;
            match token.kind {
                TokenKind::Comma => {}
                TokenKind::RBracket => return Ok(Expr::List(items)),
                _ => return Err(ParseError::unexpected(&token).into()),
            }
        }
    }

    /// A name with its subscript chain, e.g. `a.b[0]`.
    pub(crate) fn variable(&mut self) -> ParseResult<Variable> {
        let name = self.cursor.expect_ident()?;
        self.subscripts(Variable::new(name))
    }

    fn subscripts(&mut self, mut var: Variable) -> ParseResult<Variable> {
        loop {
            if self.cursor.eat(&TokenKind::Dot)? {
                let key = self.cursor.expect_ident()?;
                var.subscripts.push(Expr::Str(key));
            } else if self.cursor.eat(&TokenKind::LBracket)? {
                let index = self.expr()?;
                self.cursor.expect(&TokenKind::RBracket)?;
                var.subscripts.push(index);
            } else {
                return Ok(var);
            }
        }
    }

    /// Arguments of a call, starting at `(`.
    ///
    /// Arguments are limited to literals and variables.
    fn call_tail(&mut self, callee: Variable) -> ParseResult<Expr> {
        self.cursor.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.cursor.eat(&TokenKind::RParen)? {
            loop {
                args.push(self.argument()?);
                let token = self.cursor.advance()?;
                match token.kind {
                    TokenKind::Comma => {}
                    TokenKind::RParen => break,
                    _ => return Err(ParseError::unexpected(&token).into()),
                }
            }
        }
        Ok(Expr::Call {
            callee: Box::new(Expr::Var(callee)),
            args,
        })
    }

    fn argument(&mut self) -> ParseResult<Expr> {
        let token = self.cursor.advance()?;
        match token.kind {
            TokenKind::Int(n) => Ok(Expr::Int(n)),
            TokenKind::Str(s) => Ok(Expr::Str(s)),
            TokenKind::Ident(name) => Ok(Expr::Var(self.subscripts(Variable::new(name))?)),
            ref other => Err(ParseError::Syntax {
                found: other.display_name(),
                line: token.line,
            }
            .into()),
        }
    }
}
