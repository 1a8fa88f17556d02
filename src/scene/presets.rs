//! Built-in example compositions
//!
//! Presets use fixed offsets laid out for `n = 3`. At other values the parts
//! drift apart or overlap, which is what the exercise asks students to
//! explain.

use std::fmt;
use std::str::FromStr;

use super::Scene;
use super::defaults::{PRESET_N, swatch};
use super::shapes::ShapeKind;
use crate::log::debug;
use crate::types::Angle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Square wall with a staircase roof
    House,
    /// Rectangular hull, upright line mast and triangular sail
    Boat,
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::House => f.write_str("house"),
            Preset::Boat => f.write_str("boat"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset: {0}")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "house" => Ok(Preset::House),
            "boat" => Ok(Preset::Boat),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}

/// (kind, palette index, x, y, rotation)
type Part = (ShapeKind, usize, f64, f64, f64);

const HOUSE: [Part; 2] = [
    (ShapeKind::Square, 0, -1.0, 0.0, 0.0),
    (ShapeKind::Triangle, 2, -2.0, 3.0, 0.0),
];

const BOAT: [Part; 3] = [
    (ShapeKind::Rectangle, 1, -2.0, -2.0, 0.0),
    (ShapeKind::Line, 4, 0.0, 1.0, 90.0),
    (ShapeKind::Triangle, 0, 1.0, 1.0, 0.0),
];

impl Scene {
    /// Replace the scene contents with a preset and reset `n` to 3.
    pub fn load_preset(&mut self, preset: Preset) {
        debug!(%preset, "loading preset");
        self.clear();
        self.set_n(PRESET_N);

        let parts: &[Part] = match preset {
            Preset::House => &HOUSE,
            Preset::Boat => &BOAT,
        };
        for &(kind, color, x, y, rotation) in parts {
            let shape = self.create_shape(kind, swatch(color).fill.clone());
            shape.set_position(x, y);
            shape.set_rotation(Angle(rotation));
        }
    }
}
