#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that emits enemy fire proposals from range and cooldown data.

use gridfire_core::{Command, EnemyView, PlayerSnapshot, SimConfig};

/// Enemy combat system that queues fire commands for ready enemies.
#[derive(Debug, Default)]
pub struct EnemyCombat {
    scratch: Vec<Command>,
}

impl EnemyCombat {
    /// Creates a new enemy combat system with an empty scratch buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits `Command::FireEnemyBullet` entries for enemies ready to fire.
    ///
    /// An enemy qualifies when it is alive, its center lies within shooting
    /// range of the player's center, and its cooldown has fully drained. The
    /// world re-validates all three conditions when the command is applied;
    /// this system only avoids proposing obviously futile shots.
    pub fn handle(
        &mut self,
        config: &SimConfig,
        player: &PlayerSnapshot,
        enemies: &EnemyView,
        out: &mut Vec<Command>,
    ) {
        self.scratch.clear();

        let player_center = player.center();
        for enemy in enemies.iter() {
            if !enemy.alive {
                continue;
            }
            if enemy.center().distance(player_center) > config.enemy.shooting_range {
                continue;
            }
            if !enemy.ready_in.is_zero() {
                continue;
            }
            self.scratch.push(Command::FireEnemyBullet { enemy: enemy.id });
        }

        if self.scratch.is_empty() {
            return;
        }
        out.reserve(self.scratch.len());
        out.append(&mut self.scratch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use gridfire_core::{EnemyId, EnemySnapshot, Health};
    use std::time::Duration;

    fn player_at(position: Vec2) -> PlayerSnapshot {
        PlayerSnapshot {
            position,
            size: 40.0,
            health: Health::new(100.0),
            ammo: 10,
            immune: false,
            dodging: false,
        }
    }

    fn snapshot(id: u32, position: Vec2, alive: bool, ready_in: Duration) -> EnemySnapshot {
        EnemySnapshot {
            id: EnemyId::new(id),
            position,
            size: 40.0,
            health: Health::new(if alive { 100.0 } else { 0.0 }),
            alive,
            ready_in,
        }
    }

    #[test]
    fn ready_enemies_in_range_fire() {
        let mut system = EnemyCombat::new();
        let player = player_at(Vec2::new(100.0, 100.0));
        let enemies = EnemyView::from_snapshots(vec![
            snapshot(2, Vec2::new(300.0, 100.0), true, Duration::ZERO),
            snapshot(5, Vec2::new(140.0, 100.0), true, Duration::ZERO),
        ]);
        let mut out = Vec::new();

        system.handle(&SimConfig::default(), &player, &enemies, &mut out);

        assert_eq!(
            out,
            vec![
                Command::FireEnemyBullet {
                    enemy: EnemyId::new(2)
                },
                Command::FireEnemyBullet {
                    enemy: EnemyId::new(5)
                },
            ]
        );
    }

    #[test]
    fn cooling_and_distant_enemies_stay_silent() {
        let mut system = EnemyCombat::new();
        let player = player_at(Vec2::new(100.0, 100.0));
        let enemies = EnemyView::from_snapshots(vec![
            snapshot(1, Vec2::new(300.0, 100.0), true, Duration::from_millis(250)),
            snapshot(2, Vec2::new(900.0, 100.0), true, Duration::ZERO),
        ]);
        let mut out = Vec::new();

        system.handle(&SimConfig::default(), &player, &enemies, &mut out);

        assert!(out.is_empty());
    }

    #[test]
    fn dead_enemies_never_fire() {
        let mut system = EnemyCombat::new();
        let player = player_at(Vec2::new(100.0, 100.0));
        let enemies = EnemyView::from_snapshots(vec![snapshot(
            3,
            Vec2::new(200.0, 100.0),
            false,
            Duration::ZERO,
        )]);
        let mut out = Vec::new();

        system.handle(&SimConfig::default(), &player, &enemies, &mut out);

        assert!(out.is_empty());
    }

    #[test]
    fn range_is_measured_center_to_center() {
        let mut system = EnemyCombat::new();
        let player = player_at(Vec2::new(0.0, 0.0));
        // Centers 400 apart: exactly on the range boundary, which fires.
        let enemies = EnemyView::from_snapshots(vec![snapshot(
            0,
            Vec2::new(400.0, 0.0),
            true,
            Duration::ZERO,
        )]);
        let mut out = Vec::new();

        system.handle(&SimConfig::default(), &player, &enemies, &mut out);

        assert_eq!(out.len(), 1);
    }
}
