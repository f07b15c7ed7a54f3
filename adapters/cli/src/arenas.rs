//! Built-in demo arenas mirroring the game's authored levels.

use anyhow::{Context, Result};
use clap::ValueEnum;
use gridfire_core::{ArenaLayout, TileCoord, TileKind};

const TILE_LENGTH: f32 = 40.0;

/// Selectable demo arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ArenaChoice {
    /// Small clearing split by a wall shelf.
    Forest,
    /// Mid-size empty room.
    Dungeon,
    /// Large open hall.
    Castle,
}

/// Builds the layout for the chosen arena.
pub(crate) fn layout(choice: ArenaChoice) -> Result<ArenaLayout> {
    match choice {
        ArenaChoice::Forest => forest(),
        ArenaChoice::Dungeon => dungeon(),
        ArenaChoice::Castle => castle(),
    }
}

/// 20x12 clearing with a nine-tile wall shelf between the spawn points.
fn forest() -> Result<ArenaLayout> {
    let mut layout =
        ArenaLayout::bordered(20, 12, TILE_LENGTH).context("forest arena dimensions")?;
    layout.set_kind(TileCoord::new(2, 2), TileKind::PlayerSpawn);
    for column in 1..=9 {
        layout.set_kind(TileCoord::new(column, 7), TileKind::Wall);
    }
    layout.set_kind(TileCoord::new(5, 9), TileKind::EnemySpawn);
    Ok(layout)
}

/// 15x15 room with nothing but the border walls.
fn dungeon() -> Result<ArenaLayout> {
    let mut layout =
        ArenaLayout::bordered(15, 15, TILE_LENGTH).context("dungeon arena dimensions")?;
    layout.set_kind(TileCoord::new(2, 2), TileKind::PlayerSpawn);
    layout.set_kind(TileCoord::new(7, 7), TileKind::EnemySpawn);
    Ok(layout)
}

/// 30x30 hall, the largest of the authored maps.
fn castle() -> Result<ArenaLayout> {
    let mut layout =
        ArenaLayout::bordered(30, 30, TILE_LENGTH).context("castle arena dimensions")?;
    layout.set_kind(TileCoord::new(3, 3), TileKind::PlayerSpawn);
    layout.set_kind(TileCoord::new(10, 10), TileKind::EnemySpawn);
    Ok(layout)
}
