//! Default sizes and settings (all in grid units)

use crate::types::{Color, GlobalN};

/// A query point closer than this to a dot center hits the shape.
pub const HIT_RADIUS: f64 = 0.6;
/// Horizontal stride between auto-placed shapes.
pub const NEW_SHAPE_SPACING: f64 = 2.0;
pub const DEFAULT_N: GlobalN = GlobalN::ONE;
/// `n` used by the built-in presets; the compositions line up at this size.
pub const PRESET_N: u32 = 3;
/// Rotation step used by the rotate command.
pub const ROTATION_STEP: f64 = 5.0;

/// A palette entry: display name, dot fill and dot outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub fill: Color,
    pub border: Color,
}

pub static PALETTE: [Swatch; 7] = [
    Swatch { name: "Red", fill: Color::rgb(0xef, 0x44, 0x44), border: Color::rgb(0xb9, 0x1c, 0x1c) },
    Swatch { name: "Blue", fill: Color::rgb(0x3b, 0x82, 0xf6), border: Color::rgb(0x1d, 0x4e, 0xd8) },
    Swatch { name: "Green", fill: Color::rgb(0x22, 0xc5, 0x5e), border: Color::rgb(0x15, 0x80, 0x3d) },
    Swatch { name: "Purple", fill: Color::rgb(0xa8, 0x55, 0xf7), border: Color::rgb(0x7e, 0x22, 0xce) },
    Swatch { name: "Orange", fill: Color::rgb(0xf9, 0x73, 0x16), border: Color::rgb(0xc2, 0x41, 0x0c) },
    Swatch { name: "Pink", fill: Color::rgb(0xec, 0x48, 0x99), border: Color::rgb(0xbe, 0x18, 0x5d) },
    Swatch { name: "Cyan", fill: Color::rgb(0x06, 0xb6, 0xd4), border: Color::rgb(0x0e, 0x74, 0x90) },
];

/// Palette entry for the `index`-th shape, cycling.
pub fn swatch(index: usize) -> &'static Swatch {
    &PALETTE[index % PALETTE.len()]
}
