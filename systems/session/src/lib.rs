#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Fixed-order tick pipeline composing the world with its pure systems.
//!
//! A [`Session`] owns the authoritative world plus the navigation and combat
//! systems and advances everything exactly one step at a time. The step
//! order is fixed: sampled player input first, then enemy movement
//! proposals, then enemy fire proposals, and finally the world tick that
//! flies projectiles, expires status windows, and applies contact damage.
//! Projectiles created within a step still advance within that step, and a
//! single hit decrements health exactly once.

use std::time::Duration;

use gridfire_core::{ArenaLayout, Command, Event, InputFrame, SimConfig};
use gridfire_system_enemy_combat::EnemyCombat;
use gridfire_system_enemy_nav::EnemyNav;
use gridfire_world::{self as world, query, World};
use tracing::{debug, info};

/// Deterministic driver that advances the simulation one step per call.
#[derive(Debug)]
pub struct Session {
    world: World,
    nav: EnemyNav,
    combat: EnemyCombat,
    tick_index: u64,
    defeat_logged: bool,
}

impl Session {
    /// Creates a session over a world with the default arena.
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(config),
            nav: EnemyNav::new(),
            combat: EnemyCombat::new(),
            tick_index: 0,
            defeat_logged: false,
        }
    }

    /// Creates a session and installs the provided arena layout.
    #[must_use]
    pub fn with_layout(config: SimConfig, layout: ArenaLayout) -> Self {
        let mut session = Self::new(config);
        let mut events = Vec::new();
        world::apply(
            &mut session.world,
            Command::ConfigureArena { layout },
            &mut events,
        );
        session
    }

    /// Read-only access to the authoritative world for queries.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Executes one full simulation step against the sampled input frame.
    ///
    /// Appends every event the step produced to `out_events` and returns the
    /// terminal defeat signal. The session never stops itself; the caller
    /// decides whether to keep ticking a defeated world.
    pub fn advance(&mut self, input: &InputFrame, out_events: &mut Vec<Event>) -> bool {
        let config = *query::config(&self.world);
        let event_mark = out_events.len();
        self.tick_index = self.tick_index.saturating_add(1);

        // Sampled input resolves first, in a fixed order.
        if input.dodge {
            world::apply(&mut self.world, Command::RequestDodge, out_events);
        }
        world::apply(
            &mut self.world,
            Command::MovePlayer {
                intent: input.movement,
            },
            out_events,
        );
        if input.reload {
            world::apply(&mut self.world, Command::ReloadWeapon, out_events);
        }
        if let Some(target) = input.fire {
            world::apply(&mut self.world, Command::FireWeapon { target }, out_events);
        }

        // Enemy movement proposals read the post-move snapshots.
        let mut commands = Vec::new();
        {
            let player = query::player(&self.world);
            let enemies = query::enemies(&self.world);
            let grid_view = query::grid_view(&self.world);
            self.nav
                .handle(&config, &player, &enemies, &grid_view, &mut commands);
        }
        for command in commands.drain(..) {
            world::apply(&mut self.world, command, out_events);
        }

        // Fire proposals see enemies at their settled positions.
        {
            let player = query::player(&self.world);
            let enemies = query::enemies(&self.world);
            self.combat.handle(&config, &player, &enemies, &mut commands);
        }
        for command in commands.drain(..) {
            world::apply(&mut self.world, command, out_events);
        }

        world::apply(
            &mut self.world,
            Command::Tick {
                dt: config.tick_interval(),
            },
            out_events,
        );

        debug!(
            tick = self.tick_index,
            events = out_events.len() - event_mark,
            "step complete"
        );

        let defeated = query::is_defeated(&self.world);
        if defeated && !self.defeat_logged {
            self.defeat_logged = true;
            info!(tick = self.tick_index, "player defeated");
        }
        defeated
    }
}

/// Accumulator that converts irregular elapsed time into whole steps.
///
/// Feed it measured wall-clock deltas; it releases a step each time a full
/// interval has been gathered and holds the remainder for the next call.
/// This caps the simulation rate and decouples it from however fast the
/// embedding loop happens to poll.
#[derive(Clone, Copy, Debug)]
pub struct FixedTimestep {
    interval: Duration,
    accumulated: Duration,
}

impl FixedTimestep {
    /// Creates an accumulator that releases one step per `interval`.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Duration of one released step.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Banks `elapsed` and returns how many whole steps became due.
    pub fn steps(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }

        self.accumulated = self.accumulated.saturating_add(elapsed);
        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_intervals_release_no_steps() {
        let mut timestep = FixedTimestep::new(Duration::from_millis(100));
        assert_eq!(timestep.steps(Duration::from_millis(60)), 0);
        assert_eq!(timestep.steps(Duration::from_millis(30)), 0);
    }

    #[test]
    fn remainders_carry_between_calls() {
        let mut timestep = FixedTimestep::new(Duration::from_millis(100));
        assert_eq!(timestep.steps(Duration::from_millis(250)), 2);
        assert_eq!(timestep.steps(Duration::from_millis(50)), 1);
    }

    #[test]
    fn zero_interval_never_releases() {
        let mut timestep = FixedTimestep::new(Duration::ZERO);
        assert_eq!(timestep.steps(Duration::from_secs(10)), 0);
    }
}
