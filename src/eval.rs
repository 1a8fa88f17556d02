//! Expression evaluation

use crate::ast::*;
use crate::errors::{CoordError, coord_source};

/// Evaluate an expression with `n` bound to the given value.
///
/// `source` is only used to attach context to errors.
pub fn eval_expr(expr: &Expr, n: f64, source: &str) -> Result<f64, CoordError> {
    let value = match expr {
        Expr::Number(v) => *v,
        Expr::N => n,
        Expr::ParenExpr(e) => eval_expr(e, n, source)?,
        Expr::UnaryOp(op, e) => {
            let v = eval_expr(e, n, source)?;
            match op {
                UnaryOp::Neg => -v,
                UnaryOp::Pos => v,
            }
        }
        Expr::BinaryOp(lhs, op, rhs) => {
            let l = eval_expr(lhs, n, source)?;
            let r = eval_expr(rhs, n, source)?;
            match op {
                BinaryOp::Add => l + r,
                BinaryOp::Sub => l - r,
                BinaryOp::Mul => l * r,
                BinaryOp::Div => {
                    if r == 0.0 {
                        return Err(CoordError::DivisionByZero {
                            src: coord_source(source),
                        });
                    }
                    l / r
                }
            }
        }
    };

    // Catches overflow to infinity
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoordError::NotFinite {
            src: coord_source(source),
        })
    }
}
