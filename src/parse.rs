//! Parse pest pairs into coordinate AST nodes

use pest::Parser;
use pest::iterators::Pair;

use crate::ast::*;
use crate::errors::CoordError;
use crate::{CoordParser, Rule};

/// Longest expression accepted, in bytes.
pub const MAX_EXPR_LEN: usize = 1024;

/// Deepest parenthesis nesting accepted.
pub const MAX_NESTING: usize = 32;

/// Parse a normalized coordinate expression into an AST.
///
/// The input is expected to be lowercased and stripped of whitespace already
/// (see `coord::normalize`). Inputs over [`MAX_EXPR_LEN`] bytes or nested
/// deeper than [`MAX_NESTING`] are rejected before the grammar runs, which
/// keeps parsing and evaluation within a bounded stack.
pub fn parse(source: &str) -> Result<Expr, CoordError> {
    if source.is_empty() {
        return Err(CoordError::Empty);
    }
    check_limits(source)?;

    let mut pairs = CoordParser::parse(Rule::coordinate, source).map_err(|e| {
        let span = match e.location {
            pest::error::InputLocation::Pos(p) => (p, p + 1),
            pest::error::InputLocation::Span(s) => s,
        };
        CoordError::syntax(source, span, e.variant.message())
    })?;

    let coordinate = pairs
        .next()
        .ok_or_else(|| CoordError::syntax(source, (0, source.len()), "empty parse"))?;
    let expr = coordinate
        .into_inner()
        .find(|p| p.as_rule() == Rule::expr)
        .ok_or_else(|| CoordError::syntax(source, (0, source.len()), "missing expression"))?;

    parse_expr(source, expr)
}

fn check_limits(source: &str) -> Result<(), CoordError> {
    if source.len() > MAX_EXPR_LEN {
        return Err(CoordError::too_complex(
            source,
            (MAX_EXPR_LEN, source.len()),
            format!("longer than {} characters", MAX_EXPR_LEN),
        ));
    }

    let mut depth = 0usize;
    for (at, b) in source.bytes().enumerate() {
        match b {
            b'(' => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(CoordError::too_complex(
                        source,
                        (at, at + 1),
                        format!("parentheses nested deeper than {}", MAX_NESTING),
                    ));
                }
            }
            b')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn missing(source: &str, pair: &Pair<Rule>, what: &str) -> CoordError {
    let span = pair.as_span();
    CoordError::syntax(source, (span.start(), span.end()), format!("missing {}", what))
}

fn parse_expr(source: &str, pair: Pair<Rule>) -> Result<Expr, CoordError> {
    // expr = term ~ (add_op ~ term)*
    let err = missing(source, &pair, "term");
    let mut inner = pair.into_inner();
    let mut result = parse_term(source, inner.next().ok_or(err)?)?;

    while let Some(op_pair) = inner.next() {
        let op = match op_pair.as_str() {
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            _ => continue,
        };
        let rhs_pair = inner
            .next()
            .ok_or_else(|| missing(source, &op_pair, "right-hand side"))?;
        let rhs = parse_term(source, rhs_pair)?;
        result = Expr::BinaryOp(Box::new(result), op, Box::new(rhs));
    }

    Ok(result)
}

fn parse_term(source: &str, pair: Pair<Rule>) -> Result<Expr, CoordError> {
    // term = unary ~ (mul_op ~ unary)*
    let err = missing(source, &pair, "operand");
    let mut inner = pair.into_inner();
    let mut result = parse_unary(source, inner.next().ok_or(err)?)?;

    while let Some(op_pair) = inner.next() {
        let op = match op_pair.as_str() {
            "*" => BinaryOp::Mul,
            "/" => BinaryOp::Div,
            _ => continue,
        };
        let rhs_pair = inner
            .next()
            .ok_or_else(|| missing(source, &op_pair, "right-hand side"))?;
        let rhs = parse_unary(source, rhs_pair)?;
        result = Expr::BinaryOp(Box::new(result), op, Box::new(rhs));
    }

    Ok(result)
}

fn parse_unary(source: &str, pair: Pair<Rule>) -> Result<Expr, CoordError> {
    // unary = prefix* ~ primary; a run of signs folds into one node
    let err = missing(source, &pair, "operand");
    let mut signs = 0usize;
    let mut negate = false;
    let mut primary = None;
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::prefix => {
                signs += 1;
                if inner.as_str() == "-" {
                    negate = !negate;
                }
            }
            Rule::primary => primary = Some(parse_primary(source, inner)?),
            _ => {}
        }
    }

    let operand = primary.ok_or(err)?;
    Ok(match (signs, negate) {
        (0, _) => operand,
        (_, true) => Expr::UnaryOp(UnaryOp::Neg, Box::new(operand)),
        (_, false) => Expr::UnaryOp(UnaryOp::Pos, Box::new(operand)),
    })
}

fn parse_primary(source: &str, pair: Pair<Rule>) -> Result<Expr, CoordError> {
    let err = missing(source, &pair, "value");
    let first = pair.into_inner().next().ok_or(err)?;

    match first.as_rule() {
        Rule::expr => Ok(Expr::ParenExpr(Box::new(parse_expr(source, first)?))),
        Rule::NUMBER => parse_number(source, first),
        Rule::symbol_n => Ok(Expr::N),
        other => {
            let span = first.as_span();
            Err(CoordError::syntax(
                source,
                (span.start(), span.end()),
                format!("unexpected {:?}", other),
            ))
        }
    }
}

fn parse_number(source: &str, pair: Pair<Rule>) -> Result<Expr, CoordError> {
    let raw = pair.as_str();
    let span = pair.as_span();
    raw.parse::<f64>()
        .map(Expr::Number)
        .map_err(|e| CoordError::syntax(source, (span.start(), span.end()), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(v: f64) -> Box<Expr> {
        Box::new(Expr::Number(v))
    }

    #[test]
    fn parse_plain_number() {
        assert_eq!(parse("42").unwrap(), Expr::Number(42.0));
        assert_eq!(parse(".5").unwrap(), Expr::Number(0.5));
        assert_eq!(parse("2.").unwrap(), Expr::Number(2.0));
    }

    #[test]
    fn parse_symbol_n() {
        assert_eq!(parse("n").unwrap(), Expr::N);
        assert!(parse("n+1").unwrap().depends_on_n());
        assert!(!parse("3*4").unwrap().depends_on_n());
    }

    #[test]
    fn multiplication_binds_tighter() {
        let expr = parse("1+2*3").unwrap();
        assert_eq!(
            expr,
            Expr::BinaryOp(
                num(1.0),
                BinaryOp::Add,
                Box::new(Expr::BinaryOp(num(2.0), BinaryOp::Mul, num(3.0)))
            )
        );
    }

    #[test]
    fn subtraction_is_left_associative() {
        let expr = parse("8-4-2").unwrap();
        assert_eq!(
            expr,
            Expr::BinaryOp(
                Box::new(Expr::BinaryOp(num(8.0), BinaryOp::Sub, num(4.0))),
                BinaryOp::Sub,
                num(2.0)
            )
        );
    }

    #[test]
    fn parse_parenthesized() {
        let expr = parse("(n+1)/2").unwrap();
        assert!(matches!(
            expr,
            Expr::BinaryOp(lhs, BinaryOp::Div, _) if matches!(*lhs, Expr::ParenExpr(_))
        ));
    }

    #[test]
    fn parse_unary_chain() {
        assert_eq!(parse("-+1").unwrap(), Expr::UnaryOp(UnaryOp::Neg, num(1.0)));
        assert_eq!(parse("-+-1").unwrap(), Expr::UnaryOp(UnaryOp::Pos, num(1.0)));
        assert_eq!(parse("+n").unwrap(), Expr::UnaryOp(UnaryOp::Pos, Box::new(Expr::N)));
        assert!(parse("3+-1").is_ok());
    }

    #[test]
    fn long_sign_runs_fold_to_one_node() {
        let src = format!("{}n", "-+".repeat(201));
        assert_eq!(parse(&src).unwrap(), Expr::UnaryOp(UnaryOp::Neg, Box::new(Expr::N)));
    }

    #[test]
    fn rejects_oversized_input() {
        let long = format!("{}n", "-+".repeat(MAX_EXPR_LEN));
        assert!(matches!(parse(&long), Err(CoordError::TooComplex { .. })));

        let deep = format!("{}n{}", "(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
        assert!(matches!(parse(&deep), Err(CoordError::TooComplex { .. })));

        let ok = format!("{}n{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert!(parse(&ok).unwrap().depends_on_n());
    }

    #[test]
    fn rejects_doubled_signs() {
        assert!(parse("--3").is_err());
        assert!(parse("3--1").is_err());
        assert!(parse("3++1").is_err());
    }

    #[test]
    fn rejects_implicit_multiplication() {
        assert!(parse("2n").is_err());
        assert!(parse("nn").is_err());
        assert!(parse("(1)(2)").is_err());
    }

    #[test]
    fn rejects_incomplete_input() {
        assert!(matches!(parse(""), Err(CoordError::Empty)));
        assert!(matches!(parse("1+"), Err(CoordError::Syntax { .. })));
        assert!(parse("(1").is_err());
        assert!(parse("1.2.3").is_err());
        assert!(parse(".").is_err());
    }
}
