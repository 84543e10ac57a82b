//! Abstract syntax tree for Quill programs.
//!
//! Statements and expressions are closed enums so the evaluator can match
//! on them exhaustively. Nodes hold no runtime state: the environment is
//! passed in at evaluation time, which keeps a node reusable across loop
//! iterations and across environments.

use std::fmt;

/// Non-empty, ordered sequence of statements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StmtList {
    pub stmts: Vec<Stmt>,
}

impl StmtList {
    pub fn new(first: Stmt) -> Self {
        StmtList { stmts: vec![first] }
    }

    pub fn push(&mut self, stmt: Stmt) {
        self.stmts.push(stmt);
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.stmts.iter()
    }
}

impl<'a> IntoIterator for &'a StmtList {
    type Item = &'a Stmt;
    type IntoIter = std::slice::Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.stmts.iter()
    }
}

/// A statement with the line it starts on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: u32,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: u32) -> Self {
        Stmt { kind, line }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StmtKind {
    /// `target = value`. Compound assignments are desugared by the parser.
    Assign { target: Variable, value: Expr },
    /// `nop`
    Nop,
    /// `print expr`
    Print(Expr),
    /// `if cond` followed by an indented block.
    If { cond: Expr, body: StmtList },
    /// `for var in iterable` followed by an indented block.
    For {
        var: String,
        iterable: Expr,
        body: StmtList,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Int(i64),
    Str(String),
    List(Vec<Expr>),
    Var(Variable),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// A name followed by a subscript chain.
///
/// `a.b` and `a["b"]` produce the same chain: dotted access is stored as a
/// string-literal subscript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub subscripts: Vec<Expr>,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable {
            name: name.into(),
            subscripts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_subscript(mut self, subscript: Expr) -> Self {
        self.subscripts.push(subscript);
        self
    }

    pub fn is_bare(&self) -> bool {
        self.subscripts.is_empty()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Assignment operator as written in the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssignOp {
    Plain,
    Add,
    Sub,
    Mul,
    Div,
}

impl AssignOp {
    /// The arithmetic a compound assignment desugars to; `None` for `=`.
    pub fn binary_op(self) -> Option<BinaryOp> {
        match self {
            AssignOp::Plain => None,
            AssignOp::Add => Some(BinaryOp::Add),
            AssignOp::Sub => Some(BinaryOp::Sub),
            AssignOp::Mul => Some(BinaryOp::Mul),
            AssignOp::Div => Some(BinaryOp::Div),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AssignOp::Plain => "=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
        }
    }
}
