#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic navigation system that proposes enemy chase steps.

use glam::Vec2;
use gridfire_core::{Command, EnemyView, GridView, PlayerSnapshot, SimConfig};
use gridfire_system_pathfinding::find_path;

/// Pure system that turns world snapshots into enemy movement proposals.
///
/// Enemies within chase range hold position; the rest request a step toward
/// the second tile of a fresh path to the player. The world validates every
/// proposal against walls and peers before committing it, so this system
/// never needs write access to anything.
#[derive(Debug, Default)]
pub struct EnemyNav;

impl EnemyNav {
    /// Creates a new navigation system.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Emits `Command::AdvanceEnemy` proposals for every chasing enemy.
    ///
    /// Paths are recomputed from scratch on every call. That trades CPU for
    /// simplicity and stays cheap because arenas measure tens of tiles per
    /// axis; caching would only pay off on much larger grids.
    pub fn handle(
        &mut self,
        config: &SimConfig,
        player: &PlayerSnapshot,
        enemies: &EnemyView,
        grid: &GridView<'_>,
        out: &mut Vec<Command>,
    ) {
        let Some(player_tile) = grid.tile_at(player.position) else {
            return;
        };

        for enemy in enemies.iter() {
            if !enemy.alive {
                continue;
            }
            if player.position.distance(enemy.position) <= config.enemy.chase_range {
                continue;
            }
            let Some(enemy_tile) = grid.tile_at(enemy.position) else {
                continue;
            };

            let path = find_path(grid, enemy_tile, player_tile);
            if path.len() < 2 {
                continue;
            }

            let toward = grid.tile_center(path[1]) - Vec2::splat(enemy.size / 2.0);
            out.push(Command::AdvanceEnemy {
                enemy: enemy.id,
                toward,
            });
        }
    }
}
