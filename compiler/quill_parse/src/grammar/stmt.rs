//! Statement productions.
//!
//! ```text
//! stmt_list := stmt (NEWLINE stmt)*
//! stmt      := assignment | if | for | NOP | PRINT expr
//! if        := IF expr block
//! for       := FOR NAME IN expr block
//! block     := NEWLINE START_BLOCK stmt_list END_BLOCK
//! ```

use quill_ir::{Expr, Stmt, StmtKind, StmtList, TokenKind};

use crate::error::{ParseError, ParseResult, Stop};
use crate::Parser;

impl Parser<'_> {
    /// A top-level statement sequence followed by end of stream.
    pub(crate) fn program(&mut self) -> ParseResult<StmtList> {
        let program = self.stmt_list()?;
        match self.cursor.peek()? {
            None => Ok(program),
            Some(token) => Err(ParseError::unexpected(token).into()),
        }
    }

    fn stmt_list(&mut self) -> ParseResult<StmtList> {
        let mut list = StmtList::new(self.statement()?);
        while self.cursor.eat(&TokenKind::Newline)? {
            list.push(self.statement()?);
        }
        Ok(list)
    }

    fn statement(&mut self) -> ParseResult<Stmt> {
        let (lead, line) = match self.cursor.peek()? {
            Some(token) => (token.kind.clone(), token.line),
            None => return Err(Stop::Incomplete),
        };

        let kind = match lead {
            TokenKind::If => self.if_stmt()?,
            TokenKind::For => self.for_stmt()?,
            TokenKind::Nop => {
                self.cursor.advance()?;
                StmtKind::Nop
            }
            TokenKind::Print => {
                self.cursor.advance()?;
                StmtKind::Print(self.expr()?)
            }
            TokenKind::Ident(_) => self.assignment()?,
            _ => {
                let token = self.cursor.advance()?;
                return Err(ParseError::unexpected(&token).into());
            }
        };
        Ok(Stmt::new(kind, line))
    }

    fn if_stmt(&mut self) -> ParseResult<StmtKind> {
        self.cursor.expect(&TokenKind::If)?;
        let cond = self.expr()?;
        let body = self.block()?;
        Ok(StmtKind::If { cond, body })
    }

    fn for_stmt(&mut self) -> ParseResult<StmtKind> {
        self.cursor.expect(&TokenKind::For)?;
        let var = self.cursor.expect_ident()?;
        self.cursor.expect(&TokenKind::In)?;
        let iterable = self.expr()?;
        let body = self.block()?;
        Ok(StmtKind::For {
            var,
            iterable,
            body,
        })
    }

    fn block(&mut self) -> ParseResult<StmtList> {
        self.cursor.expect(&TokenKind::Newline)?;
        self.cursor.expect(&TokenKind::StartBlock)?;
        let body = self.stmt_list()?;
        self.cursor.expect(&TokenKind::EndBlock)?;
        Ok(body)
    }

    /// `variable (= | += | -= | *= | /=) expr`
    ///
    /// `a op= e` becomes `a = a op e`.
    fn assignment(&mut self) -> ParseResult<StmtKind> {
        let target = self.variable()?;
        let token = self.cursor.advance()?;
        let TokenKind::Assign(op) = token.kind else {
            return Err(ParseError::unexpected(&token).into());
        };
        let rhs = self.expr()?;
        let value = match op.binary_op() {
            Some(binary) => Expr::binary(binary, Expr::Var(target.clone()), rhs),
            None => rhs,
        };
        Ok(StmtKind::Assign { target, value })
    }
}
