use beck_session::span::Span;

use crate::{Node, NodeCopy};

/// A parsed program: its function definitions, in source order.
#[derive(Node!)]
pub struct Module {
    pub defs: Vec<Def>,
}

/// A `def … end` block: a name, the parameter names, and a single body
/// expression. Parameter names are not checked for uniqueness.
#[derive(Node!)]
pub struct Def {
    pub name: Ident,
    pub params: Vec<Ident>,
    pub body: Expr,
}

#[derive(Node!)]
pub struct Ident {
    pub text: String,
    pub span: Span,
}

#[derive(Node!)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Node!)]
pub enum ExprKind {
    Integer(i64),

    Var(Ident),

    Call {
        callee: Ident,
        args: Vec<Expr>,
    },

    BinOp {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

#[derive(NodeCopy!)]
pub enum BinOp {
    Add,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
        }
    }
}
