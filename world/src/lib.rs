#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Gridfire.
//!
//! The world owns the arena grid, the player (and its weapon), every enemy,
//! and both projectile collections. Adapters and systems never mutate any of
//! it directly: they submit [`Command`] values through [`apply`], which
//! executes them deterministically and reports the resulting [`Event`]s.

use std::time::Duration;

use glam::Vec2;
use gridfire_core::{
    ArenaLayout, BulletId, Command, DamageCause, EnemyId, Event, Health, ImmunitySource,
    MoveIntent, RemovalCause, SimConfig, TileCoord, BULLET_SIZE, WELCOME_BANNER,
};

mod collision;
mod grid;
mod status;
mod weapon;

pub use grid::GridMap;

use collision::{overlaps_wall, Aabb};
use status::{DodgeState, ImmunityTimers};
use weapon::{aim, BulletSeed, Weapon};

const DEFAULT_GRID_COLUMNS: u32 = 20;
const DEFAULT_GRID_ROWS: u32 = 12;
const DEFAULT_TILE_LENGTH: f32 = 40.0;

/// Represents the authoritative Gridfire world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    config: SimConfig,
    grid: GridMap,
    clock: Duration,
    player: Player,
    enemies: Vec<Enemy>,
    bullets: Vec<Bullet>,
    enemy_bullets: Vec<Bullet>,
    next_enemy_id: u32,
    next_bullet_id: u32,
    defeated: bool,
}

impl World {
    /// Creates a new world with a default walled arena and the provided tuning.
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        let layout = ArenaLayout::bordered(
            DEFAULT_GRID_COLUMNS,
            DEFAULT_GRID_ROWS,
            DEFAULT_TILE_LENGTH,
        )
        .expect("default arena dimensions are valid");
        let grid = GridMap::from_layout(&layout);
        let player = Player::spawned_in(&grid, &config);
        Self {
            banner: WELCOME_BANNER,
            config,
            grid,
            clock: Duration::ZERO,
            player,
            enemies: Vec::new(),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            next_enemy_id: 0,
            next_bullet_id: 0,
            defeated: false,
        }
    }

    fn reset_entities(&mut self, out_events: &mut Vec<Event>) {
        self.player = Player::spawned_in(&self.grid, &self.config);
        self.enemies.clear();
        self.bullets.clear();
        self.enemy_bullets.clear();
        self.next_enemy_id = 0;
        self.next_bullet_id = 0;
        self.defeated = false;

        for tile in self.grid.enemy_spawns() {
            self.spawn_enemy(tile, out_events);
        }
    }

    fn spawn_enemy(&mut self, tile: TileCoord, out_events: &mut Vec<Event>) {
        if !self.grid.is_passable(tile) {
            return;
        }

        let id = EnemyId::new(self.next_enemy_id);
        self.next_enemy_id = self.next_enemy_id.saturating_add(1);
        self.enemies.push(Enemy {
            id,
            position: self.grid.tile_origin(tile),
            health: Health::new(self.config.enemy.health),
            alive: true,
            last_shot: None,
        });
        out_events.push(Event::EnemySpawned { enemy: id, tile });
    }

    fn allocate_bullet_id(&mut self) -> BulletId {
        let id = BulletId::new(self.next_bullet_id);
        self.next_bullet_id = self.next_bullet_id.saturating_add(1);
        id
    }

    fn player_box(&self) -> Aabb {
        Aabb::square(self.player.position, self.config.player.size)
    }

    fn enemy_box(&self, enemy: &Enemy) -> Aabb {
        Aabb::square(enemy.position, self.config.enemy.size)
    }

    fn move_player(&mut self, intent: MoveIntent, out_events: &mut Vec<Event>) {
        let (axis_x, axis_y) = intent.axes();
        let mut speed = self.config.player.speed;
        if self.player.dodge.is_active() {
            speed *= self.config.status.dodge_multiplier;
        }
        let dx = axis_x * speed;
        let dy = axis_y * speed;
        if dx == 0.0 && dy == 0.0 {
            return;
        }

        let from = self.player.position;
        let size = self.config.player.size;

        // Axes resolve independently so the player slides along walls.
        let horizontal = Vec2::new(from.x + dx, from.y);
        if !overlaps_wall(&Aabb::square(horizontal, size), &self.grid) {
            self.player.position.x = horizontal.x;
        }
        let vertical = Vec2::new(self.player.position.x, from.y + dy);
        if !overlaps_wall(&Aabb::square(vertical, size), &self.grid) {
            self.player.position.y = vertical.y;
        }

        self.player.position.x = self.player.position.x.clamp(0.0, self.grid.width() - size);
        self.player.position.y = self.player.position.y.clamp(0.0, self.grid.height() - size);

        if self.player.position != from {
            out_events.push(Event::PlayerMoved {
                from,
                to: self.player.position,
            });
        }
    }

    fn request_dodge(&mut self, out_events: &mut Vec<Event>) {
        if self.player.dodge.request(self.clock) {
            self.player.immunity.grant(ImmunitySource::Dodge, self.clock);
            out_events.push(Event::DodgeStarted);
        }
    }

    fn fire_weapon(&mut self, target: Vec2, out_events: &mut Vec<Event>) {
        let origin = self.player.position + Vec2::splat(self.config.player.size / 2.0);
        let Some(seed) = self.player.weapon.fire(origin, target, self.clock) else {
            return;
        };
        let id = self.allocate_bullet_id();
        self.bullets.push(Bullet::from_seed(id, seed));
        out_events.push(Event::WeaponFired { bullet: id });
    }

    fn advance_enemy(&mut self, enemy: EnemyId, toward: Vec2, out_events: &mut Vec<Event>) {
        let Some(index) = self.enemies.iter().position(|e| e.id == enemy) else {
            return;
        };
        if !self.enemies[index].alive {
            return;
        }

        let from = self.enemies[index].position;
        let delta = toward - from;
        let distance = delta.length();
        if distance <= 0.0 {
            return;
        }

        let step = self.config.enemy.speed.min(distance);
        let next = from + delta * (step / distance);
        let candidate = Aabb::square(next, self.config.enemy.size);

        if overlaps_wall(&candidate, &self.grid) {
            return;
        }
        let blocked_by_peer = self
            .enemies
            .iter()
            .enumerate()
            .any(|(other_index, other)| {
                other_index != index && other.alive && candidate.intersects(&self.enemy_box(other))
            });
        if blocked_by_peer {
            return;
        }

        self.enemies[index].position = next;
        out_events.push(Event::EnemyAdvanced {
            enemy,
            from,
            to: next,
        });
    }

    fn fire_enemy_bullet(&mut self, enemy: EnemyId, out_events: &mut Vec<Event>) {
        let player_center = self.player.position + Vec2::splat(self.config.player.size / 2.0);
        let Some(index) = self.enemies.iter().position(|e| e.id == enemy) else {
            return;
        };
        if !self.enemies[index].alive {
            return;
        }

        let enemy_center =
            self.enemies[index].position + Vec2::splat(self.config.enemy.size / 2.0);
        if enemy_center.distance(player_center) > self.config.enemy.shooting_range {
            return;
        }
        let ready = match self.enemies[index].last_shot {
            None => true,
            Some(last) => self.clock.saturating_sub(last) >= self.config.enemy_shot_interval(),
        };
        if !ready {
            return;
        }

        self.enemies[index].last_shot = Some(self.clock);
        let id = self.allocate_bullet_id();
        self.enemy_bullets.push(Bullet::from_seed(
            id,
            BulletSeed {
                origin: enemy_center,
                direction: aim(enemy_center, player_center),
                speed: self.config.enemy.bullet_speed,
                damage: self.config.enemy.bullet_damage,
            },
        ));
        out_events.push(Event::EnemyBulletFired { bullet: id, enemy });
    }

    fn tick(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        self.clock = self.clock.saturating_add(dt);
        out_events.push(Event::TimeAdvanced { dt });

        self.advance_player_bullets(out_events);
        self.advance_enemy_bullets(out_events);
        self.update_status(out_events);
        self.apply_contact_damage(out_events);
    }

    fn advance_player_bullets(&mut self, out_events: &mut Vec<Event>) {
        let mut index = 0;
        while index < self.bullets.len() {
            self.bullets[index].advance();
            let bullet = self.bullets[index];

            if let Some(cause) = self.projectile_obstruction(&bullet) {
                let _ = self.bullets.remove(index);
                out_events.push(Event::BulletRemoved {
                    bullet: bullet.id,
                    cause,
                });
                continue;
            }

            let bullet_box = bullet.bounding_box();
            let hit = self
                .enemies
                .iter()
                .position(|enemy| enemy.alive && bullet_box.intersects(&self.enemy_box(enemy)));
            if let Some(enemy_index) = hit {
                self.damage_enemy(enemy_index, bullet.damage, out_events);
                let _ = self.bullets.remove(index);
                out_events.push(Event::BulletRemoved {
                    bullet: bullet.id,
                    cause: RemovalCause::HitEnemy,
                });
                continue;
            }

            index += 1;
        }
    }

    fn advance_enemy_bullets(&mut self, out_events: &mut Vec<Event>) {
        let mut index = 0;
        while index < self.enemy_bullets.len() {
            self.enemy_bullets[index].advance();
            let bullet = self.enemy_bullets[index];

            if let Some(cause) = self.projectile_obstruction(&bullet) {
                let _ = self.enemy_bullets.remove(index);
                out_events.push(Event::BulletRemoved {
                    bullet: bullet.id,
                    cause,
                });
                continue;
            }

            if bullet.bounding_box().intersects(&self.player_box()) {
                if !self.player.immunity.is_immune() {
                    self.damage_player(DamageCause::Bullet, bullet.damage, out_events);
                }
                // The projectile is spent on contact even when immunity held.
                let _ = self.enemy_bullets.remove(index);
                out_events.push(Event::BulletRemoved {
                    bullet: bullet.id,
                    cause: RemovalCause::HitPlayer,
                });
                continue;
            }

            index += 1;
        }
    }

    fn projectile_obstruction(&self, bullet: &Bullet) -> Option<RemovalCause> {
        let position = bullet.position;
        if position.x < 0.0
            || position.x > self.grid.width()
            || position.y < 0.0
            || position.y > self.grid.height()
        {
            return Some(RemovalCause::LeftArena);
        }
        if overlaps_wall(&bullet.bounding_box(), &self.grid) {
            return Some(RemovalCause::HitWall);
        }
        None
    }

    fn update_status(&mut self, out_events: &mut Vec<Event>) {
        if self
            .player
            .immunity
            .expire_damage_hit(self.clock, self.config.hit_immunity())
        {
            out_events.push(Event::ImmunityExpired {
                source: ImmunitySource::DamageHit,
            });
        }

        if self.player.dodge.update(
            self.clock,
            self.config.dodge_duration(),
            self.config.dodge_cooldown(),
        ) {
            self.player.immunity.revoke(ImmunitySource::Dodge);
            out_events.push(Event::DodgeEnded);
        }
    }

    fn apply_contact_damage(&mut self, out_events: &mut Vec<Event>) {
        if self.player.immunity.is_immune() {
            return;
        }

        let player_box = self.player_box();
        let touching = self
            .enemies
            .iter()
            .any(|enemy| enemy.alive && player_box.intersects(&self.enemy_box(enemy)));
        if touching {
            self.damage_player(
                DamageCause::Contact,
                self.config.enemy.contact_damage,
                out_events,
            );
        }
    }

    fn damage_enemy(&mut self, index: usize, amount: f32, out_events: &mut Vec<Event>) {
        let enemy = &mut self.enemies[index];
        enemy.health = enemy.health.damaged(amount);
        out_events.push(Event::EnemyDamaged {
            enemy: enemy.id,
            remaining: enemy.health,
        });
        if enemy.health.is_depleted() && enemy.alive {
            enemy.alive = false;
            out_events.push(Event::EnemyDied { enemy: enemy.id });
        }
    }

    fn damage_player(&mut self, cause: DamageCause, amount: f32, out_events: &mut Vec<Event>) {
        self.player.health = self.player.health.damaged(amount);
        self.player
            .immunity
            .grant(ImmunitySource::DamageHit, self.clock);
        out_events.push(Event::PlayerDamaged {
            cause,
            remaining: self.player.health,
        });
        if self.player.health.is_depleted() && !self.defeated {
            self.defeated = true;
            out_events.push(Event::PlayerDefeated);
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureArena { layout } => {
            world.grid = GridMap::from_layout(&layout);
            out_events.push(Event::ArenaConfigured {
                columns: world.grid.columns(),
                rows: world.grid.rows(),
            });
            world.reset_entities(out_events);
        }
        Command::SpawnEnemy { tile } => world.spawn_enemy(tile, out_events),
        Command::MovePlayer { intent } => world.move_player(intent, out_events),
        Command::RequestDodge => world.request_dodge(out_events),
        Command::FireWeapon { target } => world.fire_weapon(target, out_events),
        Command::ReloadWeapon => {
            world.player.weapon.reload();
            out_events.push(Event::WeaponReloaded {
                ammo: world.player.weapon.ammo(),
            });
        }
        Command::AdvanceEnemy { enemy, toward } => world.advance_enemy(enemy, toward, out_events),
        Command::FireEnemyBullet { enemy } => world.fire_enemy_bullet(enemy, out_events),
        Command::Tick { dt } => world.tick(dt, out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use gridfire_core::{
        BulletSnapshot, BulletView, EnemySnapshot, EnemyView, GridView, PlayerSnapshot, SimConfig,
    };

    use super::{GridMap, World};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the tuning the world was built with.
    #[must_use]
    pub fn config(world: &World) -> &SimConfig {
        &world.config
    }

    /// Current simulation clock reading.
    #[must_use]
    pub fn clock(world: &World) -> Duration {
        world.clock
    }

    /// Provides read-only access to the arena's tile grid.
    #[must_use]
    pub fn grid(world: &World) -> &GridMap {
        &world.grid
    }

    /// Borrows the arena grid as a view consumable by pure systems.
    #[must_use]
    pub fn grid_view(world: &World) -> GridView<'_> {
        world.grid.view()
    }

    /// Captures the player's current state.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        PlayerSnapshot {
            position: world.player.position,
            size: world.config.player.size,
            health: world.player.health,
            ammo: world.player.weapon.ammo(),
            immune: world.player.immunity.is_immune(),
            dodging: world.player.dodge.is_active(),
        }
    }

    /// Captures a read-only view of every enemy in the arena.
    #[must_use]
    pub fn enemies(world: &World) -> EnemyView {
        let interval = world.config.enemy_shot_interval();
        let snapshots = world
            .enemies
            .iter()
            .map(|enemy| EnemySnapshot {
                id: enemy.id,
                position: enemy.position,
                size: world.config.enemy.size,
                health: enemy.health,
                alive: enemy.alive,
                ready_in: match enemy.last_shot {
                    None => Duration::ZERO,
                    Some(last) => {
                        interval.saturating_sub(world.clock.saturating_sub(last))
                    }
                },
            })
            .collect();
        EnemyView::from_snapshots(snapshots)
    }

    /// Captures a read-only view of the player's projectiles.
    #[must_use]
    pub fn bullets(world: &World) -> BulletView {
        BulletView::from_snapshots(
            world
                .bullets
                .iter()
                .map(|bullet| BulletSnapshot {
                    id: bullet.id,
                    position: bullet.position,
                    damage: bullet.damage,
                })
                .collect(),
        )
    }

    /// Captures a read-only view of enemy projectiles.
    #[must_use]
    pub fn enemy_bullets(world: &World) -> BulletView {
        BulletView::from_snapshots(
            world
                .enemy_bullets
                .iter()
                .map(|bullet| BulletSnapshot {
                    id: bullet.id,
                    position: bullet.position,
                    damage: bullet.damage,
                })
                .collect(),
        )
    }

    /// Terminal signal: whether the player's health has reached zero.
    #[must_use]
    pub fn is_defeated(world: &World) -> bool {
        world.defeated
    }
}

#[derive(Debug)]
struct Player {
    position: Vec2,
    health: Health,
    weapon: Weapon,
    immunity: ImmunityTimers,
    dodge: DodgeState,
}

impl Player {
    fn spawned_in(grid: &GridMap, config: &SimConfig) -> Self {
        let position = match grid.player_spawn() {
            Some(tile) => grid.tile_origin(tile),
            None => Vec2::new(
                (grid.width() - config.player.size) / 2.0,
                (grid.height() - config.player.size) / 2.0,
            ),
        };
        Self {
            position,
            health: Health::new(config.player.health),
            weapon: Weapon::new(&config.weapon),
            immunity: ImmunityTimers::default(),
            dodge: DodgeState::new(),
        }
    }
}

#[derive(Debug)]
struct Enemy {
    id: EnemyId,
    position: Vec2,
    health: Health,
    alive: bool,
    last_shot: Option<Duration>,
}

#[derive(Clone, Copy, Debug)]
struct Bullet {
    id: BulletId,
    position: Vec2,
    direction: Vec2,
    speed: f32,
    damage: f32,
}

impl Bullet {
    fn from_seed(id: BulletId, seed: BulletSeed) -> Self {
        Self {
            id,
            position: seed.origin,
            direction: seed.direction,
            speed: seed.speed,
            damage: seed.damage,
        }
    }

    fn advance(&mut self) {
        self.position += self.direction * self.speed;
    }

    fn bounding_box(&self) -> Aabb {
        Aabb::square(self.position, BULLET_SIZE)
    }
}
