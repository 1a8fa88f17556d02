//! Hit testing and box selection in world (grid) coordinates

use std::collections::BTreeSet;

use glam::DVec2;

use super::Scene;
use super::defaults::HIT_RADIUS;
use super::shapes::{Shape, ShapeId};
use crate::types::GridBox;

impl Scene {
    /// Topmost shape with a dot center strictly within [`HIT_RADIUS`] of
    /// `point`. Later shapes win, matching draw order.
    pub fn hit_test(&self, point: DVec2) -> Option<&Shape> {
        self.shapes()
            .iter()
            .rev()
            .find(|shape| self.shape_contains(shape, point))
    }

    /// True if any dot of `shape` is within [`HIT_RADIUS`] of `point`.
    pub fn shape_contains(&self, shape: &Shape, point: DVec2) -> bool {
        self.world_points(shape)
            .into_iter()
            .any(|dot| dot.distance(point) < HIT_RADIUS)
    }

    /// Ids of every shape whose resolved origin lies inside `area` (edges
    /// included).
    pub fn box_select(&self, area: GridBox) -> BTreeSet<ShapeId> {
        self.shapes()
            .iter()
            .filter(|shape| area.contains(self.world_position(shape)))
            .map(Shape::id)
            .collect()
    }

    /// Box covering every dot in the scene, `None` when nothing is drawn.
    pub fn world_bounds(&self) -> Option<GridBox> {
        GridBox::enclosing(self.shapes().iter().flat_map(|s| self.world_points(s)))
    }
}
