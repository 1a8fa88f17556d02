//! Coordinate fields: a literal number or a small arithmetic expression in `n`.
//!
//! Evaluation follows a fixed order:
//! 1. literals are returned as-is,
//! 2. expressions are lowercased and stripped of whitespace,
//! 3. anything outside `0-9 n + - * / ( ) .` is rejected and the raw text is
//!    read as a leading float instead (`"3abc"` is 3, `"alert(1)"` is 0),
//! 4. the rest goes through the pest grammar and the evaluator.
//!
//! [`Coordinate::evaluate`] never fails; every error path yields 0.

use std::fmt;

use crate::errors::{CoordError, coord_source};
use crate::eval::eval_expr;
use crate::log::debug;
use crate::parse::parse;
use crate::types::GlobalN;

/// A position component as entered by the user.
#[derive(Clone, Debug, PartialEq)]
pub enum Coordinate {
    Literal(f64),
    Expression(String),
}

impl Default for Coordinate {
    fn default() -> Self {
        Coordinate::Literal(0.0)
    }
}

impl From<f64> for Coordinate {
    fn from(v: f64) -> Self {
        Coordinate::Literal(v)
    }
}

impl From<i32> for Coordinate {
    fn from(v: i32) -> Self {
        Coordinate::Literal(f64::from(v))
    }
}

impl From<&str> for Coordinate {
    fn from(s: &str) -> Self {
        Coordinate::Expression(s.to_string())
    }
}

impl From<String> for Coordinate {
    fn from(s: String) -> Self {
        Coordinate::Expression(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Literal(v) => write!(f, "{}", v),
            Coordinate::Expression(s) => write!(f, "{}", s),
        }
    }
}

impl Coordinate {
    /// Classify text typed into a position box: plain numbers become
    /// literals, everything else is stored verbatim as an expression.
    pub fn from_input(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Coordinate::Literal(v),
            _ => Coordinate::Expression(text.to_string()),
        }
    }

    /// True if the value can change with `n`.
    pub fn is_dynamic(&self) -> bool {
        match self {
            Coordinate::Literal(_) => false,
            Coordinate::Expression(s) => normalize(s).contains('n'),
        }
    }

    /// Evaluate, reporting why an expression was rejected.
    pub fn try_evaluate(&self, n: GlobalN) -> Result<f64, CoordError> {
        match self {
            Coordinate::Literal(v) if v.is_finite() => Ok(*v),
            Coordinate::Literal(_) => Err(CoordError::NotFinite {
                src: coord_source(&self.to_string()),
            }),
            Coordinate::Expression(raw) => evaluate_expression(raw, n),
        }
    }

    /// Evaluate against `n`. Any failure resolves to 0.
    pub fn evaluate(&self, n: GlobalN) -> f64 {
        match self.try_evaluate(n) {
            Ok(v) => v,
            Err(_err) => {
                debug!(input = %self, error = %_err, "coordinate rejected, using 0");
                0.0
            }
        }
    }

    /// Shift by `delta`, keeping expressions symbolic.
    pub fn offset_by(&self, delta: f64) -> Coordinate {
        match self {
            Coordinate::Literal(v) => Coordinate::Literal(v + delta),
            Coordinate::Expression(_) if delta == 0.0 => self.clone(),
            Coordinate::Expression(s) if s.trim().is_empty() => Coordinate::Literal(delta),
            Coordinate::Expression(s) if delta < 0.0 => {
                Coordinate::Expression(format!("{}-{}", s, -delta))
            }
            Coordinate::Expression(s) => Coordinate::Expression(format!("{}+{}", s, delta)),
        }
    }
}

/// Lowercase and drop all whitespace.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, 'n' | '+' | '-' | '*' | '/' | '(' | ')' | '.')
}

/// Reject anything outside the expression alphabet before it reaches the parser.
pub fn check_alphabet(normalized: &str) -> Result<(), CoordError> {
    match normalized.char_indices().find(|&(_, c)| !is_allowed(c)) {
        None => Ok(()),
        Some((at, ch)) => Err(CoordError::DisallowedCharacter {
            ch,
            src: coord_source(normalized),
            span: (at, ch.len_utf8()).into(),
        }),
    }
}

fn evaluate_expression(raw: &str, n: GlobalN) -> Result<f64, CoordError> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(CoordError::Empty);
    }

    if let Err(rejected) = check_alphabet(&normalized) {
        return leading_float(raw).ok_or(rejected);
    }

    let expr = parse(&normalized)?;
    eval_expr(&expr, n.as_f64(), &normalized)
}

/// Read the longest decimal float at the start of `raw` (after leading
/// whitespace): optional sign, digits with an optional fraction, optional
/// exponent. Returns `None` when no digits are found.
pub fn leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the text of a constant-count prompt: the leading
/// integer of the text, falling back to 1 for garbage, zero or negatives.
pub fn parse_constant_input(text: &str) -> u32 {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<u32>() {
        Ok(v) if v > 0 && !negative => v,
        _ => 1,
    }
}
