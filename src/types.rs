//! Strongly-typed primitives for figura (zero-cost newtypes).
//!
//! Points in local and world space are plain `glam::DVec2` values in grid
//! units; everything else that carries a unit or a restricted range gets a
//! newtype here so it cannot be mixed up with a raw `f64`.

use std::fmt;
use std::ops::Add;

use glam::DVec2;

/// Error type for out-of-range numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is zero when non-zero required
    Zero,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Zero => write!(f, "value is zero"),
        }
    }
}

impl std::error::Error for NumericError {}

/// The scene-wide generator parameter `n` (always >= 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct GlobalN(u32);

impl GlobalN {
    pub const ONE: GlobalN = GlobalN(1);

    /// Create an `n` with validation (rejects zero)
    #[inline]
    pub fn try_new(val: u32) -> Result<GlobalN, NumericError> {
        if val == 0 {
            Err(NumericError::Zero)
        } else {
            Ok(GlobalN(val))
        }
    }

    /// Create an `n`, clamping zero up to one.
    #[inline]
    pub fn clamped(val: u32) -> GlobalN {
        GlobalN(val.max(1))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for GlobalN {
    fn default() -> Self {
        GlobalN::ONE
    }
}

impl fmt::Display for GlobalN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Angle in degrees, counter-clockwise positive. Any real value is allowed.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// The same angle folded into [0, 360).
    #[inline]
    pub fn normalized(self) -> Angle {
        let folded = self.0.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        if folded >= 360.0 { Angle(0.0) } else { Angle(folded) }
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Mirror sign for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Flip {
    #[default]
    Normal,
    Mirrored,
}

impl Flip {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Flip::Normal => 1.0,
            Flip::Mirrored => -1.0,
        }
    }

    #[inline]
    pub fn toggled(self) -> Flip {
        match self {
            Flip::Normal => Flip::Mirrored,
            Flip::Mirrored => Flip::Normal,
        }
    }
}

/// Which axis a flip command applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Display color carried by shapes and formula terms.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb(u8, u8, u8),
    /// Anything the presentation layer understands (CSS name, custom hex, ...)
    Raw(String),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::Rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Raw(s) => write!(f, "{}", s),
        }
    }
}

/// Axis-aligned box in grid units. Built from any two corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl GridBox {
    /// Box spanning two arbitrary corners (drag start and drag end).
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        GridBox {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box containing every point, or `None` for no points.
    pub fn enclosing<I: IntoIterator<Item = DVec2>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(GridBox { min: first, max: first }, |mut bb, p| {
            bb.expand_point(p);
            bb
        }))
    }

    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    // ==================== GlobalN tests ====================

    #[test]
    fn global_n_rejects_zero() {
        assert_eq!(GlobalN::try_new(0), Err(NumericError::Zero));
        assert_eq!(GlobalN::try_new(4).map(GlobalN::get), Ok(4));
    }

    #[test]
    fn global_n_clamps_zero() {
        assert_eq!(GlobalN::clamped(0), GlobalN::ONE);
        assert_eq!(GlobalN::clamped(7).get(), 7);
    }

    // ==================== Angle tests ====================

    #[test]
    fn angle_normalizes_into_range() {
        assert_eq!(Angle(370.0).normalized(), Angle(10.0));
        assert_eq!(Angle(-90.0).normalized(), Angle(270.0));
        assert_eq!(Angle(720.0).normalized(), Angle(0.0));
        let tiny = Angle(-1e-18).normalized();
        assert!(tiny.degrees() >= 0.0 && tiny.degrees() < 360.0);
    }

    // ==================== Flip tests ====================

    #[test]
    fn flip_toggle_round_trips() {
        assert_eq!(Flip::Normal.toggled().toggled(), Flip::Normal);
        assert_eq!(Flip::Mirrored.sign(), -1.0);
    }

    // ==================== Color tests ====================

    #[test]
    fn color_formats_as_hex() {
        assert_eq!(Color::rgb(0xef, 0x44, 0x44).to_string(), "#ef4444");
        assert_eq!(Color::Raw("teal".into()).to_string(), "teal");
    }

    // ==================== GridBox tests ====================

    #[test]
    fn grid_box_from_reversed_corners() {
        let bb = GridBox::from_corners(dvec2(3.0, -1.0), dvec2(-2.0, 4.0));
        assert_eq!(bb.min, dvec2(-2.0, -1.0));
        assert_eq!(bb.max, dvec2(3.0, 4.0));
        assert_eq!(bb.width(), 5.0);
        assert_eq!(bb.height(), 5.0);
        assert_eq!(bb.center(), dvec2(0.5, 1.5));
    }

    #[test]
    fn grid_box_contains_is_inclusive() {
        let bb = GridBox::from_corners(dvec2(0.0, 0.0), dvec2(2.0, 2.0));
        assert!(bb.contains(dvec2(0.0, 0.0)));
        assert!(bb.contains(dvec2(2.0, 1.0)));
        assert!(!bb.contains(dvec2(2.01, 1.0)));
    }

    #[test]
    fn grid_box_enclosing() {
        assert_eq!(GridBox::enclosing(Vec::<DVec2>::new()), None);
        let bb = GridBox::enclosing([dvec2(1.0, 2.0), dvec2(-1.0, 5.0), dvec2(0.0, 0.0)]);
        assert_eq!(
            bb,
            Some(GridBox { min: dvec2(-1.0, 0.0), max: dvec2(1.0, 5.0) })
        );
    }
}
