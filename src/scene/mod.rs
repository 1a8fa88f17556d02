//! The scene: an ordered shape collection plus the global parameter `n`
//!
//! Nothing derived is cached. Every query (positions, dots, hits, formula)
//! reads the current shape fields, so mutating a shape and querying again is
//! always consistent.

pub mod defaults;
pub mod formula;
pub mod geometry;
pub mod placement;
pub mod presets;
pub mod query;
pub mod shapes;

use std::collections::HashSet;

use crate::log::debug;
use crate::types::{Angle, Axis, Color, GlobalN};

use self::shapes::{Anchor, Shape, ShapeId, ShapeKind};

/// Ordered shapes (later entries draw on top) and the current `n`.
#[derive(Debug, Clone)]
pub struct Scene {
    shapes: Vec<Shape>,
    n: GlobalN,
    next_id: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            shapes: Vec::new(),
            n: defaults::DEFAULT_N,
            next_id: 1,
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n(&self) -> GlobalN {
        self.n
    }

    /// Set the global parameter. Zero is clamped to one.
    pub fn set_n(&mut self, n: u32) {
        self.n = GlobalN::clamped(n);
        debug!(n = self.n.get(), "global parameter changed");
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    fn allocate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a shape with default fields and return it for configuration.
    pub fn create_shape(&mut self, kind: ShapeKind, color: Color) -> &mut Shape {
        let id = self.allocate_id();
        debug!(%id, %kind, "shape added");
        self.shapes.push(Shape::new(id, kind, color));
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Append a shape using the next palette color, placed to the right of
    /// the shapes already present so it does not cover them.
    pub fn add_shape(&mut self, kind: ShapeKind) -> ShapeId {
        let index = self.shapes.len();
        let color = defaults::swatch(index).fill.clone();
        let shape = self.create_shape(kind, color);
        shape.set_position(index as f64 * defaults::NEW_SHAPE_SPACING, 0.0);
        shape.id()
    }

    /// Remove a shape. Shapes attached to it keep their reference and fall
    /// back to absolute placement.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        debug!(%id, "shape removed");
        Some(self.shapes.remove(index))
    }

    /// Remove every listed shape; returns how many were present.
    pub fn remove_many(&mut self, ids: &[ShapeId]) -> usize {
        let doomed: HashSet<ShapeId> = ids.iter().copied().collect();
        let before = self.shapes.len();
        self.shapes.retain(|s| !doomed.contains(&s.id()));
        before - self.shapes.len()
    }

    /// Drop all shapes. Ids keep counting up.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn move_shape(&mut self, id: ShapeId, dx: f64, dy: f64) -> bool {
        let Some(shape) = self.get_mut(id) else {
            return false;
        };
        shape.x = shape.x.offset_by(dx);
        shape.y = shape.y.offset_by(dy);
        true
    }

    /// Position `child` relative to `parent`. Self-attachment is stored but
    /// ignored when placing.
    pub fn attach(&mut self, child: ShapeId, parent: ShapeId, anchor: Anchor) -> bool {
        let Some(shape) = self.get_mut(child) else {
            return false;
        };
        shape.attach(parent, anchor);
        true
    }

    pub fn detach(&mut self, child: ShapeId) -> bool {
        let Some(shape) = self.get_mut(child) else {
            return false;
        };
        shape.detach();
        true
    }

    /// Turn a shape by `degrees`, keeping the stored angle in [0, 360).
    pub fn rotate_shape(&mut self, id: ShapeId, degrees: f64) -> bool {
        let Some(shape) = self.get_mut(id) else {
            return false;
        };
        shape.rotation = (shape.rotation + Angle(degrees)).normalized();
        true
    }

    /// Rotate by whole UI steps of [`defaults::ROTATION_STEP`] degrees;
    /// negative steps turn clockwise.
    pub fn step_rotation(&mut self, id: ShapeId, steps: i32) -> bool {
        self.rotate_shape(id, f64::from(steps) * defaults::ROTATION_STEP)
    }

    pub fn flip_shape(&mut self, id: ShapeId, axis: Axis) -> bool {
        let Some(shape) = self.get_mut(id) else {
            return false;
        };
        shape.toggle_flip(axis);
        true
    }

    /// Draw this shape last.
    pub fn bring_to_front(&mut self, id: ShapeId) -> bool {
        let Some(index) = self.shapes.iter().position(|s| s.id() == id) else {
            return false;
        };
        let shape = self.shapes.remove(index);
        self.shapes.push(shape);
        true
    }

    /// Draw this shape first.
    pub fn send_to_back(&mut self, id: ShapeId) -> bool {
        let Some(index) = self.shapes.iter().position(|s| s.id() == id) else {
            return false;
        };
        let shape = self.shapes.remove(index);
        self.shapes.insert(0, shape);
        true
    }

    /// Tag every listed shape with `label`.
    pub fn set_group(&mut self, ids: &[ShapeId], label: &str) {
        for shape in self.shapes.iter_mut().filter(|s| ids.contains(&s.id())) {
            shape.set_group(Some(label.to_string()));
        }
    }

    pub fn ungroup(&mut self, ids: &[ShapeId]) {
        for shape in self.shapes.iter_mut().filter(|s| ids.contains(&s.id())) {
            shape.set_group(None);
        }
    }

    /// Everything selected together with `id`: all shapes sharing its
    /// non-empty group label, or just `id` when it is ungrouped. Empty when
    /// `id` is not in the scene.
    pub fn group_members(&self, id: ShapeId) -> Vec<ShapeId> {
        let Some(shape) = self.get(id) else {
            return Vec::new();
        };
        if shape.group_label().is_none() {
            return vec![id];
        }
        self.shapes
            .iter()
            .filter(|other| other.shares_group_with(shape))
            .map(Shape::id)
            .collect()
    }
}
