//! Axis-aligned bounding box primitives shared by every collision check.

use glam::Vec2;

use crate::grid::GridMap;

/// Axis-aligned bounding box anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Aabb {
    position: Vec2,
    size: Vec2,
}

impl Aabb {
    pub(crate) const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub(crate) fn square(position: Vec2, side: f32) -> Self {
        Self::new(position, Vec2::splat(side))
    }

    pub(crate) const fn min(&self) -> Vec2 {
        self.position
    }

    pub(crate) fn max(&self) -> Vec2 {
        self.position + self.size
    }

    /// Closed-interval overlap test: boxes that merely touch edges collide.
    pub(crate) fn intersects(&self, other: &Aabb) -> bool {
        self.min().x <= other.max().x
            && other.min().x <= self.max().x
            && self.min().y <= other.max().y
            && other.min().y <= self.max().y
    }
}

/// Reports whether any tile the box overlaps is wall-equivalent.
///
/// Every cell under the box is inspected, not just the corner under its
/// anchor, so entities wider than one tile cannot clip through wall corners.
/// Tiles outside the grid count as colliding. The tile sweep covers cells the
/// box interior overlaps; a box flush against a tile boundary does not occupy
/// the neighboring tile.
pub(crate) fn overlaps_wall(aabb: &Aabb, grid: &GridMap) -> bool {
    let tile = grid.tile_length();
    if tile <= 0.0 {
        return true;
    }

    let min = aabb.min();
    let max = aabb.max();
    if min.x < 0.0 || min.y < 0.0 {
        return true;
    }

    let first_column = (min.x / tile) as i64;
    let first_row = (min.y / tile) as i64;
    let last_column = ((max.x / tile).ceil() as i64 - 1).max(first_column);
    let last_row = ((max.y / tile).ceil() as i64 - 1).max(first_row);

    if last_column >= i64::from(grid.columns()) || last_row >= i64::from(grid.rows()) {
        return true;
    }

    for row in first_row..=last_row {
        for column in first_column..=last_column {
            let coord = gridfire_core::TileCoord::new(column as u32, row as u32);
            if !grid.is_passable(coord) {
                return true;
            }
        }
    }

    false
}
