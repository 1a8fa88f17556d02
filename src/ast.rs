//! Abstract Syntax Tree for coordinate expressions
//!
//! The language is deliberately tiny: numbers, the symbol `n`, unary signs,
//! the four arithmetic operators and parentheses.

/// A coordinate expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    /// The scene's global parameter
    N,
    UnaryOp(UnaryOp, Box<Expr>),
    BinaryOp(Box<Expr>, BinaryOp, Box<Expr>),
    ParenExpr(Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Pos,
}

impl Expr {
    /// True if the expression mentions `n` anywhere.
    pub fn depends_on_n(&self) -> bool {
        match self {
            Expr::Number(_) => false,
            Expr::N => true,
            Expr::UnaryOp(_, e) | Expr::ParenExpr(e) => e.depends_on_n(),
            Expr::BinaryOp(lhs, _, rhs) => lhs.depends_on_n() || rhs.depends_on_n(),
        }
    }
}
