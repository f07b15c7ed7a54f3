//! Immutable tile grid installed by arena configuration.

use glam::Vec2;
use gridfire_core::{ArenaLayout, GridView, TileCoord, TileKind};

/// Authoritative tile classification for the active arena.
///
/// Built once per [`crate::World`] configuration and read-only afterwards.
/// Out-of-bounds lookups yield `None`, which callers treat as wall-equivalent.
#[derive(Clone, Debug)]
pub struct GridMap {
    columns: u32,
    rows: u32,
    tile_length: f32,
    tiles: Vec<TileKind>,
}

impl GridMap {
    pub(crate) fn from_layout(layout: &ArenaLayout) -> Self {
        Self {
            columns: layout.columns(),
            rows: layout.rows(),
            tile_length: layout.tile_length(),
            tiles: layout.tiles().to_vec(),
        }
    }

    /// Number of tile columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Side length of a single square tile in world units.
    #[must_use]
    pub const fn tile_length(&self) -> f32 {
        self.tile_length
    }

    /// Total width of the arena in world units.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.columns as f32 * self.tile_length
    }

    /// Total height of the arena in world units.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.tile_length
    }

    /// Classification of the provided tile, or `None` outside the grid.
    #[must_use]
    pub fn kind(&self, tile: TileCoord) -> Option<TileKind> {
        self.view().kind(tile)
    }

    /// Reports whether the tile is inside the grid and not a wall.
    #[must_use]
    pub fn is_passable(&self, tile: TileCoord) -> bool {
        self.view().is_passable(tile)
    }

    /// Tile containing the provided world-space point, or `None` outside.
    #[must_use]
    pub fn tile_at(&self, point: Vec2) -> Option<TileCoord> {
        self.view().tile_at(point)
    }

    /// World-space top-left corner of the provided tile.
    #[must_use]
    pub fn tile_origin(&self, tile: TileCoord) -> Vec2 {
        Vec2::new(
            tile.column() as f32 * self.tile_length,
            tile.row() as f32 * self.tile_length,
        )
    }

    /// World-space center of the provided tile.
    #[must_use]
    pub fn tile_center(&self, tile: TileCoord) -> Vec2 {
        self.view().tile_center(tile)
    }

    /// Borrows the grid as a read-only view for systems.
    #[must_use]
    pub fn view(&self) -> GridView<'_> {
        GridView::new(&self.tiles, self.columns, self.rows, self.tile_length)
    }

    /// First player spawn marker in row-major order, if any.
    pub(crate) fn player_spawn(&self) -> Option<TileCoord> {
        self.marker_tiles(TileKind::PlayerSpawn).into_iter().next()
    }

    /// Enemy spawn markers in row-major order.
    pub(crate) fn enemy_spawns(&self) -> Vec<TileCoord> {
        self.marker_tiles(TileKind::EnemySpawn)
    }

    fn marker_tiles(&self, kind: TileKind) -> Vec<TileCoord> {
        let mut tiles = Vec::new();
        for row in 0..self.rows {
            for column in 0..self.columns {
                let tile = TileCoord::new(column, row);
                if self.kind(tile) == Some(kind) {
                    tiles.push(tile);
                }
            }
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest_like_map() -> GridMap {
        let mut layout = ArenaLayout::bordered(8, 6, 40.0).expect("layout");
        layout.set_kind(TileCoord::new(2, 2), TileKind::PlayerSpawn);
        layout.set_kind(TileCoord::new(5, 4), TileKind::EnemySpawn);
        layout.set_kind(TileCoord::new(6, 4), TileKind::EnemySpawn);
        GridMap::from_layout(&layout)
    }

    #[test]
    fn spawn_markers_enumerate_in_row_major_order() {
        let map = forest_like_map();
        assert_eq!(map.player_spawn(), Some(TileCoord::new(2, 2)));
        assert_eq!(
            map.enemy_spawns(),
            vec![TileCoord::new(5, 4), TileCoord::new(6, 4)]
        );
    }

    #[test]
    fn out_of_bounds_lookups_yield_none() {
        let map = forest_like_map();
        assert_eq!(map.kind(TileCoord::new(8, 0)), None);
        assert!(!map.is_passable(TileCoord::new(0, 6)));
    }

    #[test]
    fn world_extent_derives_from_tile_length() {
        let map = forest_like_map();
        assert_eq!(map.width(), 320.0);
        assert_eq!(map.height(), 240.0);
        assert_eq!(map.tile_origin(TileCoord::new(3, 1)), Vec2::new(120.0, 40.0));
    }
}
