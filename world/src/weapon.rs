//! Rate- and ammo-gated projectile factory owned by the player.

use std::time::Duration;

use glam::Vec2;
use gridfire_core::WeaponTuning;

/// Everything the world needs to materialize a projectile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BulletSeed {
    pub(crate) origin: Vec2,
    pub(crate) direction: Vec2,
    pub(crate) speed: f32,
    pub(crate) damage: f32,
}

/// The player's weapon: magazine, fire-rate window, and projectile tuning.
#[derive(Clone, Debug)]
pub(crate) struct Weapon {
    fire_rate: f32,
    damage: f32,
    capacity: u32,
    ammo: u32,
    bullet_speed: f32,
    last_shot: Option<Duration>,
}

impl Weapon {
    pub(crate) fn new(tuning: &WeaponTuning) -> Self {
        Self {
            fire_rate: tuning.fire_rate,
            damage: tuning.damage,
            capacity: tuning.capacity,
            ammo: tuning.capacity,
            bullet_speed: tuning.bullet_speed,
            last_shot: None,
        }
    }

    /// Attempts a shot from `origin` toward `target` at clock time `now`.
    ///
    /// Produces nothing when the fire-rate window has not elapsed or the
    /// magazine is empty; both outcomes are expected steady-state results,
    /// not faults. A weapon that has never fired shoots immediately.
    pub(crate) fn fire(&mut self, origin: Vec2, target: Vec2, now: Duration) -> Option<BulletSeed> {
        if let Some(last) = self.last_shot {
            if now.saturating_sub(last) < self.shot_interval() {
                return None;
            }
        }
        if self.ammo == 0 {
            return None;
        }

        self.last_shot = Some(now);
        self.ammo -= 1;
        Some(BulletSeed {
            origin,
            direction: aim(origin, target),
            speed: self.bullet_speed,
            damage: self.damage,
        })
    }

    /// Instantly refills the magazine to capacity, regardless of prior state.
    pub(crate) fn reload(&mut self) {
        self.ammo = self.capacity;
    }

    pub(crate) const fn ammo(&self) -> u32 {
        self.ammo
    }

    fn shot_interval(&self) -> Duration {
        if self.fire_rate > 0.0 {
            Duration::from_secs_f32(1.0 / self.fire_rate)
        } else {
            Duration::ZERO
        }
    }
}

/// Unit vector from `from` toward `to`; zero-length aims default east.
pub(crate) fn aim(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    let length = delta.length();
    if length == 0.0 {
        Vec2::new(1.0, 0.0)
    } else {
        delta / length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_weapon() -> Weapon {
        Weapon::new(&WeaponTuning {
            fire_rate: 2.0,
            damage: 20.0,
            capacity: 3,
            bullet_speed: 8.0,
        })
    }

    #[test]
    fn first_shot_fires_immediately() {
        let mut weapon = test_weapon();
        let seed = weapon.fire(Vec2::ZERO, Vec2::new(10.0, 0.0), Duration::ZERO);
        assert!(seed.is_some());
        assert_eq!(weapon.ammo(), 2);
    }

    #[test]
    fn rate_window_boundary_is_inclusive() {
        let mut weapon = test_weapon();
        assert!(weapon
            .fire(Vec2::ZERO, Vec2::new(10.0, 0.0), Duration::ZERO)
            .is_some());

        // 2 shots per second: the window is exactly half a second.
        assert!(weapon
            .fire(Vec2::ZERO, Vec2::new(10.0, 0.0), Duration::from_millis(499))
            .is_none());
        assert!(weapon
            .fire(Vec2::ZERO, Vec2::new(10.0, 0.0), Duration::from_millis(500))
            .is_some());
    }

    #[test]
    fn empty_magazine_is_silent_until_reload() {
        let mut weapon = test_weapon();
        let mut now = Duration::ZERO;
        for _ in 0..3 {
            assert!(weapon.fire(Vec2::ZERO, Vec2::new(5.0, 5.0), now).is_some());
            now += Duration::from_secs(1);
        }
        assert_eq!(weapon.ammo(), 0);
        assert!(weapon.fire(Vec2::ZERO, Vec2::new(5.0, 5.0), now).is_none());

        weapon.reload();
        assert_eq!(weapon.ammo(), 3);
        assert!(weapon.fire(Vec2::ZERO, Vec2::new(5.0, 5.0), now).is_some());
    }

    #[test]
    fn reload_is_unconditional() {
        let mut weapon = test_weapon();
        weapon.reload();
        assert_eq!(weapon.ammo(), 3);
    }

    #[test]
    fn failed_shot_leaves_no_side_effects() {
        let mut weapon = test_weapon();
        assert!(weapon
            .fire(Vec2::ZERO, Vec2::new(10.0, 0.0), Duration::ZERO)
            .is_some());
        let ammo_before = weapon.ammo();
        assert!(weapon
            .fire(Vec2::ZERO, Vec2::new(10.0, 0.0), Duration::from_millis(100))
            .is_none());
        assert_eq!(weapon.ammo(), ammo_before);

        // The rejected shot must not have reset the rate window.
        assert!(weapon
            .fire(Vec2::ZERO, Vec2::new(10.0, 0.0), Duration::from_millis(500))
            .is_some());
    }

    #[test]
    fn aim_normalizes_and_defaults_east_when_degenerate() {
        let direction = aim(Vec2::new(3.0, 4.0), Vec2::new(3.0, 4.0));
        assert_eq!(direction, Vec2::new(1.0, 0.0));

        let diagonal = aim(Vec2::ZERO, Vec2::new(3.0, 4.0));
        assert!((diagonal.length() - 1.0).abs() < 1e-6);
        assert!((diagonal.x - 0.6).abs() < 1e-6);
        assert!((diagonal.y - 0.8).abs() < 1e-6);
    }
}
