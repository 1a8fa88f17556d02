//! World placement: absolute positions and parent-relative anchoring
//!
//! An attached shape sits at
//! `parent position + rotate(anchor in parent box, parent rotation) + own offset`.
//! Parents are looked up by id at query time and chains may be arbitrarily
//! deep. A missing parent, a self-reference or a cycle falls back to treating
//! the shape as unattached.

use std::collections::HashSet;

use glam::DVec2;

use super::Scene;
use super::geometry::rotate;
use super::shapes::{Shape, ShapeId};
use crate::log::{trace, warn};
use crate::types::GlobalN;

impl Scene {
    /// Resolved origin of `shape` at the scene's `n`.
    pub fn world_position(&self, shape: &Shape) -> DVec2 {
        self.world_position_at(shape, self.n())
    }

    /// Resolved origin of `shape` at an arbitrary `n`.
    ///
    /// Walks up to the first shape placed absolutely, then adds anchors back
    /// down the chain.
    pub fn world_position_at(&self, shape: &Shape, n: GlobalN) -> DVec2 {
        let mut visited = HashSet::from([shape.id()]);
        let mut chain = vec![shape];
        let mut current = shape;
        while let Some(parent) = self.parent_for(current, &visited) {
            visited.insert(parent.id());
            chain.push(parent);
            current = parent;
        }

        let mut position = current.own_offset(n);
        for pair in chain.windows(2).rev() {
            let (child, parent) = (pair[0], pair[1]);
            let anchor = rotate(child.anchor.offset_in(parent.extent(n)), parent.rotation);
            trace!(child = %child.id(), parent = %parent.id(), ?anchor, "anchored");
            position += anchor + child.own_offset(n);
        }
        position
    }

    /// Dot centers of `shape` in world space at the scene's `n`.
    pub fn world_points(&self, shape: &Shape) -> Vec<DVec2> {
        self.world_points_at(shape, self.n())
    }

    pub fn world_points_at(&self, shape: &Shape, n: GlobalN) -> Vec<DVec2> {
        let origin = self.world_position_at(shape, n);
        shape.local_points(n).into_iter().map(|p| p + origin).collect()
    }

    /// The parent `shape` is actually positioned against, if any.
    pub fn resolved_parent(&self, shape: &Shape) -> Option<&Shape> {
        let visited = HashSet::from([shape.id()]);
        self.parent_for(shape, &visited)
    }

    fn parent_for(&self, shape: &Shape, visited: &HashSet<ShapeId>) -> Option<&Shape> {
        let parent_id = shape.attached_to?;

        if parent_id == shape.id() {
            warn!(id = %shape.id(), "shape is attached to itself, placing absolutely");
            return None;
        }
        if visited.contains(&parent_id) {
            warn!(id = %shape.id(), parent = %parent_id, "attachment cycle, placing absolutely");
            return None;
        }

        let parent = self.get(parent_id);
        if parent.is_none() {
            trace!(id = %shape.id(), parent = %parent_id, "parent no longer exists");
        }
        parent
    }
}
