//! Error types with rich diagnostics using miette
//!
//! Coordinate errors carry the offending input and a span so a front end can
//! point at the bad character. The scene itself never surfaces them: every
//! coordinate failure degrades to 0 at the `Coordinate::evaluate` boundary.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Name used for coordinate snippets in diagnostics
const COORD_SOURCE_NAME: &str = "<coordinate>";

/// Wrap a coordinate string for miette
pub(crate) fn coord_source(source: &str) -> NamedSource<String> {
    NamedSource::new(COORD_SOURCE_NAME, source.to_string())
}

/// Errors from parsing or evaluating a coordinate expression
#[derive(Error, Diagnostic, Debug)]
pub enum CoordError {
    #[error("character {ch:?} is not allowed in a coordinate expression")]
    #[diagnostic(
        code(figura::coord::disallowed_character),
        help("only digits, `n`, `+ - * /`, parentheses and `.` are allowed")
    )]
    DisallowedCharacter {
        ch: char,
        #[source_code]
        src: NamedSource<String>,
        #[label("not allowed")]
        span: SourceSpan,
    },

    #[error("invalid expression: {message}")]
    #[diagnostic(code(figura::coord::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("division by zero")]
    #[diagnostic(code(figura::coord::division_by_zero))]
    DivisionByZero {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("expression result is not a finite number")]
    #[diagnostic(code(figura::coord::not_finite))]
    NotFinite {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("expression too complex: {message}")]
    #[diagnostic(
        code(figura::coord::too_complex),
        help("coordinate expressions are limited in length and parenthesis depth")
    )]
    TooComplex {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("limit reached here")]
        span: SourceSpan,
    },

    #[error("empty expression")]
    #[diagnostic(code(figura::coord::empty))]
    Empty,
}

impl CoordError {
    pub(crate) fn syntax(source: &str, span: (usize, usize), message: impl Into<String>) -> Self {
        let (start, end) = span;
        CoordError::Syntax {
            message: message.into(),
            src: coord_source(source),
            span: (start, end.saturating_sub(start)).into(),
        }
    }

    pub(crate) fn too_complex(
        source: &str,
        span: (usize, usize),
        message: impl Into<String>,
    ) -> Self {
        let (start, end) = span;
        CoordError::TooComplex {
            message: message.into(),
            src: coord_source(source),
            span: (start, end.saturating_sub(start)).into(),
        }
    }

    /// True when the input was rejected before parsing (the character whitelist).
    pub fn is_disallowed_character(&self) -> bool {
        matches!(self, CoordError::DisallowedCharacter { .. })
    }
}
