//! Scene model and placement engine for figurate-number diagrams.
//!
//! A [`Scene`] holds dot-pattern generators (lines, squares, rectangles,
//! triangles and constants) that grow with a global parameter `n`. Shapes can
//! be flipped, rotated, positioned with small expressions in `n`, or anchored
//! to another shape. The scene answers the questions a front end asks on
//! every redraw: where are the dots, what is under the cursor, and what is
//! the closed-form formula of the whole picture.
//!
//! ```
//! use figura::{Scene, ShapeKind};
//!
//! let mut scene = Scene::new();
//! scene.set_n(3);
//! scene.add_shape(ShapeKind::Square);
//! let roof = scene.add_shape(ShapeKind::Triangle);
//! scene.get_mut(roof).unwrap().set_size_offset(1);
//!
//! assert_eq!(scene.formula_text(), "n^2 + (n+1)(n+2)/2");
//! assert_eq!(scene.aggregate_value(), 19);
//! ```

use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "coord.pest"]
pub struct CoordParser;

pub mod ast;
pub mod coord;
pub mod errors;
pub mod eval;
pub mod log;
pub mod parse;
pub mod scene;
pub mod types;

pub use coord::{Coordinate, parse_constant_input};
pub use errors::CoordError;
pub use scene::Scene;
pub use scene::formula::FormulaTerm;
pub use scene::presets::Preset;
pub use scene::shapes::{Anchor, Shape, ShapeId, ShapeKind};
pub use types::{Angle, Axis, Color, Flip, GlobalN, GridBox};

/// Evaluate a coordinate string at `n`; anything invalid yields 0.
pub fn evaluate_coordinate(text: &str, n: u32) -> f64 {
    Coordinate::from(text).evaluate(GlobalN::clamped(n))
}
