//! Closed-form terms for shapes and whole scenes
//!
//! Offset terms are derived from the same size used for the value, so the
//! text always agrees with the number: a triangle at `n + 1` reads
//! `(n+1)(n+2)/2`, one at `n - 1` reads `(n-1)n/2`.

use super::Scene;
use super::shapes::{Shape, ShapeKind};
use crate::types::{Color, GlobalN};

/// One shape's contribution to the scene formula.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaTerm {
    /// Plain text, e.g. `n(n+1)/2`
    pub text: String,
    /// LaTeX, e.g. `\color{#22c55e}{\frac{n(n+1)}{2}}`
    pub latex: String,
    pub color: Color,
    /// Numeric value at the `n` the term was built for
    pub value: u64,
}

/// `n` shifted by `offset`: `n`, `(n+2)`, `(n-1)`.
fn shifted_n(offset: i64) -> String {
    match offset {
        0 => "n".to_string(),
        k if k > 0 => format!("(n+{})", k),
        k => format!("(n-{})", k.unsigned_abs()),
    }
}

/// Term body in `n` for a kind with the given size offset.
fn body(kind: ShapeKind, offset: i64, constant: u32) -> (String, String) {
    let s = shifted_n(offset);
    let next = shifted_n(offset + 1);
    match kind {
        ShapeKind::Line => (s.clone(), s),
        ShapeKind::Square => {
            let sq = format!("{}^2", s);
            (sq.clone(), sq)
        }
        ShapeKind::Rectangle => {
            let r = format!("{}{}", s, next);
            (r.clone(), r)
        }
        ShapeKind::Triangle => {
            let product = format!("{}{}", s, next);
            (format!("{}/2", product), format!("\\frac{{{}}}{{2}}", product))
        }
        ShapeKind::Constant => (constant.to_string(), constant.to_string()),
    }
}

/// Single shape values always fit in `u64`; their sum may not.
fn saturating_total(values: impl IntoIterator<Item = u64>) -> u64 {
    values.into_iter().fold(0, u64::saturating_add)
}

impl Shape {
    /// This shape's term, tagged with its color and evaluated at `n`.
    pub fn formula_term(&self, n: GlobalN) -> FormulaTerm {
        let (text, body_latex) = body(self.kind(), i64::from(self.size_offset), self.constant_value);
        FormulaTerm {
            latex: format!("\\color{{{}}}{{{}}}", self.color, body_latex),
            text,
            color: self.color.clone(),
            value: self.value(n),
        }
    }
}

impl Scene {
    /// Every shape's term in draw order.
    pub fn aggregate_formula(&self) -> Vec<FormulaTerm> {
        self.shapes().iter().map(|s| s.formula_term(self.n())).collect()
    }

    /// Sum of every shape's value at the current `n`, saturating at
    /// `u64::MAX`.
    pub fn aggregate_value(&self) -> u64 {
        saturating_total(self.shapes().iter().map(|s| s.value(self.n())))
    }

    /// Terms joined with ` + `, or `0` for an empty scene.
    pub fn formula_text(&self) -> String {
        let terms = self.aggregate_formula();
        if terms.is_empty() {
            return "0".to_string();
        }
        terms.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" + ")
    }

    /// `F_n = ...` with colored terms.
    pub fn formula_latex(&self) -> String {
        let terms = self.aggregate_formula();
        if terms.is_empty() {
            return "F_n = 0".to_string();
        }
        let joined = terms.iter().map(|t| t.latex.as_str()).collect::<Vec<_>>().join(" + ");
        format!("F_n = {}", joined)
    }

    /// The worked sum at the current `n`, e.g. `9 + 10 = 19`.
    pub fn calculation(&self) -> String {
        let terms = self.aggregate_formula();
        if terms.is_empty() {
            return "0".to_string();
        }
        let parts = terms.iter().map(|t| t.value.to_string()).collect::<Vec<_>>();
        let total = saturating_total(terms.iter().map(|t| t.value));
        format!("{} = {}", parts.join(" + "), total)
    }
}
