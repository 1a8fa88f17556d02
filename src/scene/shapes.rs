//! Shape kinds and the shape entity
//!
//! Every per-kind rule (dots, extent, value, formula) is a single exhaustive
//! `match` on [`ShapeKind`], so a new kind cannot be half-implemented.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};

use super::geometry::transform_local;
use crate::coord::Coordinate;
use crate::types::{Angle, Axis, Color, Flip, GlobalN};

/// Stable shape identifier. Allocated by the scene, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The figurate generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// `s` dots in a row
    Line,
    /// `s × s` grid
    Square,
    /// `s` rows of `s + 1`
    Rectangle,
    /// Staircase: row `y` holds `y + 1` dots
    Triangle,
    /// A fixed row of `constant_value` dots, independent of `n`
    Constant,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Line,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Constant,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ShapeKind::Line => "Line number",
            ShapeKind::Square => "Square number",
            ShapeKind::Rectangle => "Rectangular number",
            ShapeKind::Triangle => "Triangular number",
            ShapeKind::Constant => "Constant",
        }
    }

    /// Local dot centers for generator size `size`. Size 0 means no dots.
    pub fn grid_points(self, size: u32) -> Vec<DVec2> {
        let s = size;
        match self {
            ShapeKind::Line | ShapeKind::Constant => (0..s).map(|i| dvec2(f64::from(i), 0.0)).collect(),
            ShapeKind::Square => (0..s)
                .flat_map(|y| (0..s).map(move |x| dvec2(f64::from(x), f64::from(y))))
                .collect(),
            ShapeKind::Rectangle => (0..s)
                .flat_map(|y| (0..=s).map(move |x| dvec2(f64::from(x), f64::from(y))))
                .collect(),
            ShapeKind::Triangle => (0..s)
                .flat_map(|y| (0..=y).map(move |x| dvec2(f64::from(x), f64::from(y))))
                .collect(),
        }
    }

    /// Bounding extent `(w, h)` used for anchoring, mirroring the dot layout.
    pub fn extent(self, size: u32) -> DVec2 {
        let s = f64::from(size);
        match self {
            ShapeKind::Line | ShapeKind::Constant => dvec2(s, 1.0),
            ShapeKind::Square | ShapeKind::Triangle => dvec2(s, s),
            ShapeKind::Rectangle => dvec2(s + 1.0, s),
        }
    }

    /// Closed-form dot count for generator size `size`.
    pub fn value(self, size: u32) -> u64 {
        let s = u64::from(size);
        match self {
            ShapeKind::Line | ShapeKind::Constant => s,
            ShapeKind::Square => s * s,
            ShapeKind::Rectangle => s * (s + 1),
            ShapeKind::Triangle => s * (s + 1) / 2,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Line => "line",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Constant => "constant",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape kind: {0}")]
pub struct UnknownShapeKind(pub String);

impl FromStr for ShapeKind {
    type Err = UnknownShapeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownShapeKind(s.to_string()))
    }
}

/// Attachment point on a parent's bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl Anchor {
    /// Offset of this anchor inside a `w × h` box whose corner is the origin.
    pub fn offset_in(self, extent: DVec2) -> DVec2 {
        let DVec2 { x: w, y: h } = extent;
        match self {
            Anchor::Top => dvec2(w / 2.0, h),
            Anchor::Bottom => dvec2(w / 2.0, 0.0),
            Anchor::Left => dvec2(0.0, h / 2.0),
            Anchor::Right => dvec2(w, h / 2.0),
            Anchor::Center => dvec2(w / 2.0, h / 2.0),
        }
    }
}

/// One generator instance in the scene.
///
/// Setters store whatever they are given; clamping and expression
/// evaluation happen when the shape is read.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    pub color: Color,
    pub x: Coordinate,
    pub y: Coordinate,
    pub rotation: Angle,
    pub flip_x: Flip,
    pub flip_y: Flip,
    /// Added to `n` for this shape only (ignored by constants)
    pub size_offset: i32,
    pub constant_value: u32,
    /// Flat bulk-selection tag; empty or `None` means ungrouped
    pub group: Option<String>,
    /// Positional dependency on another shape (non-owning)
    pub attached_to: Option<ShapeId>,
    pub anchor: Anchor,
}

impl Shape {
    /// A shape at the origin with the identity transform.
    pub fn new(id: ShapeId, kind: ShapeKind, color: Color) -> Self {
        Self {
            id,
            kind,
            color,
            x: Coordinate::default(),
            y: Coordinate::default(),
            rotation: Angle::ZERO,
            flip_x: Flip::Normal,
            flip_y: Flip::Normal,
            size_offset: 0,
            constant_value: 1,
            group: None,
            attached_to: None,
            anchor: Anchor::default(),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn with_position(mut self, x: impl Into<Coordinate>, y: impl Into<Coordinate>) -> Self {
        self.set_position(x, y);
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Angle(degrees);
        self
    }

    pub fn with_size_offset(mut self, offset: i32) -> Self {
        self.size_offset = offset;
        self
    }

    pub fn with_constant_value(mut self, value: u32) -> Self {
        self.set_constant_value(value);
        self
    }

    pub fn attached(mut self, parent: ShapeId, anchor: Anchor) -> Self {
        self.attach(parent, anchor);
        self
    }

    pub fn set_position(&mut self, x: impl Into<Coordinate>, y: impl Into<Coordinate>) {
        self.x = x.into();
        self.y = y.into();
    }

    pub fn set_rotation(&mut self, rotation: Angle) {
        self.rotation = rotation;
    }

    pub fn set_flip(&mut self, flip_x: Flip, flip_y: Flip) {
        self.flip_x = flip_x;
        self.flip_y = flip_y;
    }

    pub fn toggle_flip(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.flip_x = self.flip_x.toggled(),
            Axis::Y => self.flip_y = self.flip_y.toggled(),
        }
    }

    pub fn set_size_offset(&mut self, offset: i32) {
        self.size_offset = offset;
    }

    /// Constants are always at least one dot.
    pub fn set_constant_value(&mut self, value: u32) {
        self.constant_value = value.max(1);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_group(&mut self, label: Option<String>) {
        self.group = label;
    }

    /// The group label, if non-empty.
    pub fn group_label(&self) -> Option<&str> {
        self.group.as_deref().filter(|g| !g.is_empty())
    }

    /// True iff both shapes carry the same non-empty label.
    pub fn shares_group_with(&self, other: &Shape) -> bool {
        matches!((self.group_label(), other.group_label()), (Some(a), Some(b)) if a == b)
    }

    pub fn attach(&mut self, parent: ShapeId, anchor: Anchor) {
        self.attached_to = Some(parent);
        self.anchor = anchor;
    }

    pub fn detach(&mut self) {
        self.attached_to = None;
    }

    /// The attachment target, ignoring self-references.
    pub fn parent_id(&self) -> Option<ShapeId> {
        self.attached_to.filter(|&p| p != self.id)
    }

    /// Generator size at `n`: the constant for constants, otherwise
    /// `n + size_offset`, with anything below 1 collapsing to 0.
    pub fn effective_size(&self, n: GlobalN) -> u32 {
        match self.kind {
            ShapeKind::Constant => self.constant_value,
            _ => {
                let s = i64::from(n.get()) + i64::from(self.size_offset);
                if s < 1 { 0 } else { u32::try_from(s).unwrap_or(u32::MAX) }
            }
        }
    }

    /// Dot centers relative to the shape's own origin, after flip and rotation.
    pub fn local_points(&self, n: GlobalN) -> Vec<DVec2> {
        self.kind
            .grid_points(self.effective_size(n))
            .into_iter()
            .map(|p| transform_local(p, self.flip_x, self.flip_y, self.rotation))
            .collect()
    }

    /// Unrotated bounding extent at `n`.
    pub fn extent(&self, n: GlobalN) -> DVec2 {
        self.kind.extent(self.effective_size(n))
    }

    /// Numeric value at `n`; matches the number of dots drawn.
    pub fn value(&self, n: GlobalN) -> u64 {
        self.kind.value(self.effective_size(n))
    }

    /// Position fields evaluated as plain numbers (absolute when unattached,
    /// a fine-adjustment offset when attached).
    pub fn own_offset(&self, n: GlobalN) -> DVec2 {
        dvec2(self.x.evaluate(n), self.y.evaluate(n))
    }
}
