#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Gridfire engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use std::{borrow::Cow, time::Duration};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Gridfire.";

/// Side length of every projectile's square bounding box, in world units.
pub const BULLET_SIZE: f32 = 10.0;

/// Classification of a single arena tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Traversable ground.
    Open,
    /// Solid tile that blocks movement and projectiles.
    Wall,
    /// Traversable tile marking where the player starts.
    PlayerSpawn,
    /// Traversable tile marking where an enemy starts.
    EnemySpawn,
}

impl TileKind {
    /// Reports whether entities and paths may occupy the tile.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Location of a single arena tile expressed as column and row indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileCoord {
    column: u32,
    row: u32,
}

impl TileCoord {
    /// Creates a new tile coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the tile.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the tile.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two tile coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: TileCoord) -> u32 {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }
}

/// Reasons an [`ArenaLayout`] construction request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum LayoutError {
    /// Layouts require at least one column and one row.
    #[error("arena layouts require at least one column and one row")]
    EmptyGrid,
    /// Tile edge lengths must be strictly positive world units.
    #[error("tile length must be positive, got {0}")]
    NonPositiveTileLength(f32),
}

/// Authored tile classification for one arena, supplied by map tooling.
///
/// Border tiles default to [`TileKind::Wall`] and the interior to
/// [`TileKind::Open`]; authoring calls may override either afterwards. The
/// layout is a plain value: the world copies it into its own immutable grid
/// when a [`Command::ConfigureArena`] is applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaLayout {
    columns: u32,
    rows: u32,
    tile_length: f32,
    tiles: Vec<TileKind>,
}

impl ArenaLayout {
    /// Creates a layout with walled borders and an open interior.
    pub fn bordered(columns: u32, rows: u32, tile_length: f32) -> Result<Self, LayoutError> {
        if columns == 0 || rows == 0 {
            return Err(LayoutError::EmptyGrid);
        }
        if !(tile_length > 0.0) {
            return Err(LayoutError::NonPositiveTileLength(tile_length));
        }

        let capacity = usize::try_from(u64::from(columns) * u64::from(rows)).unwrap_or(0);
        let mut tiles = vec![TileKind::Open; capacity];
        for row in 0..rows {
            for column in 0..columns {
                if row == 0 || row + 1 == rows || column == 0 || column + 1 == columns {
                    let index = usize::try_from(u64::from(row) * u64::from(columns))
                        .unwrap_or(0)
                        .saturating_add(column as usize);
                    tiles[index] = TileKind::Wall;
                }
            }
        }

        Ok(Self {
            columns,
            rows,
            tile_length,
            tiles,
        })
    }

    /// Overrides the classification of one tile; out-of-bounds writes are ignored.
    pub fn set_kind(&mut self, tile: TileCoord, kind: TileKind) {
        if let Some(index) = self.index(tile) {
            self.tiles[index] = kind;
        }
    }

    /// Classification of the provided tile, or `None` outside the grid.
    #[must_use]
    pub fn kind(&self, tile: TileCoord) -> Option<TileKind> {
        self.index(tile).map(|index| self.tiles[index])
    }

    /// Number of tile columns in the layout.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows in the layout.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Side length of a single square tile in world units.
    #[must_use]
    pub const fn tile_length(&self) -> f32 {
        self.tile_length
    }

    /// Row-major tile classifications backing the layout.
    #[must_use]
    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    fn index(&self, tile: TileCoord) -> Option<usize> {
        if tile.column() < self.columns && tile.row() < self.rows {
            let row = usize::try_from(tile.row()).ok()?;
            let column = usize::try_from(tile.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Unique identifier assigned to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BulletId(u32);

impl BulletId {
    /// Creates a new bullet identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Hit points carried by the player and enemies, clamped at zero.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Health(f32);

impl Health {
    /// Creates a new health value; negative inputs clamp to zero.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.max(0.0))
    }

    /// Remaining hit points.
    #[must_use]
    pub const fn get(&self) -> f32 {
        self.0
    }

    /// Returns the health remaining after absorbing the provided damage.
    #[must_use]
    pub fn damaged(self, amount: f32) -> Self {
        Self::new(self.0 - amount)
    }

    /// Reports whether no hit points remain.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.0 <= 0.0
    }
}

/// Named timed-immunity sources that can shield the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImmunitySource {
    /// Window started when any damage lands, blocking follow-up hits.
    DamageHit,
    /// Window granted for the duration of a dodge.
    Dodge,
}

/// Cause attached to a player damage event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DamageCause {
    /// Direct contact with an enemy's bounding box.
    Contact,
    /// An enemy projectile struck the player.
    Bullet,
}

/// Reason a projectile was removed from the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RemovalCause {
    /// The projectile crossed the arena boundary.
    LeftArena,
    /// The projectile struck a wall tile.
    HitWall,
    /// The projectile struck a living enemy.
    HitEnemy,
    /// The projectile struck the player.
    HitPlayer,
}

/// Directional movement intent sampled from the input collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    /// Move toward decreasing row coordinates.
    pub up: bool,
    /// Move toward increasing row coordinates.
    pub down: bool,
    /// Move toward decreasing column coordinates.
    pub left: bool,
    /// Move toward increasing column coordinates.
    pub right: bool,
}

impl MoveIntent {
    /// Collapses the four booleans into per-axis factors in `{-1, 0, 1}`.
    #[must_use]
    pub fn axes(&self) -> (f32, f32) {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.up {
            dy -= 1.0;
        }
        if self.down {
            dy += 1.0;
        }
        if self.left {
            dx -= 1.0;
        }
        if self.right {
            dx += 1.0;
        }
        (dx, dy)
    }
}

/// One tick's worth of sampled input, polled before the step executes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputFrame {
    /// Held movement keys.
    pub movement: MoveIntent,
    /// Edge-triggered dodge request.
    pub dodge: bool,
    /// Active fire intent with its world-space target point.
    pub fire: Option<Vec2>,
    /// Edge-triggered reload request.
    pub reload: bool,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Replaces the arena with the provided layout and respawns all entities.
    ConfigureArena {
        /// Authored tile classification to install.
        layout: ArenaLayout,
    },
    /// Requests that a new enemy appear on the provided tile.
    SpawnEnemy {
        /// Tile the enemy should occupy.
        tile: TileCoord,
    },
    /// Moves the player according to the sampled intent for this tick.
    MovePlayer {
        /// Held movement keys.
        intent: MoveIntent,
    },
    /// Requests that the player begin a dodge.
    RequestDodge,
    /// Requests that the player's weapon fire toward a world-space point.
    FireWeapon {
        /// Aim point in world units.
        target: Vec2,
    },
    /// Refills the player's magazine to capacity.
    ReloadWeapon,
    /// Requests that an enemy step toward a world-space point.
    AdvanceEnemy {
        /// Identifier of the enemy attempting the step.
        enemy: EnemyId,
        /// Point the enemy is steering toward.
        toward: Vec2,
    },
    /// Requests that an enemy fire at the player's current center.
    FireEnemyBullet {
        /// Identifier of the enemy attempting to fire.
        enemy: EnemyId,
    },
    /// Advances projectiles, status windows, and contact damage by one step.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Confirms that a new arena layout was installed.
    ArenaConfigured {
        /// Number of tile columns in the new arena.
        columns: u32,
        /// Number of tile rows in the new arena.
        rows: u32,
    },
    /// Confirms that an enemy was created.
    EnemySpawned {
        /// Identifier assigned to the enemy by the world.
        enemy: EnemyId,
        /// Tile the enemy occupies after spawning.
        tile: TileCoord,
    },
    /// Confirms that the player's position changed.
    PlayerMoved {
        /// Position before the move.
        from: Vec2,
        /// Position after wall resolution and bounds clamping.
        to: Vec2,
    },
    /// Announces that a dodge began and granted its immunity window.
    DodgeStarted,
    /// Announces that a dodge ran its course and the cooldown began.
    DodgeEnded,
    /// Confirms that the player's weapon produced a projectile.
    WeaponFired {
        /// Identifier assigned to the projectile.
        bullet: BulletId,
    },
    /// Confirms that the player's magazine was refilled.
    WeaponReloaded {
        /// Rounds in the magazine after the reload.
        ammo: u32,
    },
    /// Confirms that an enemy stepped to a new position.
    EnemyAdvanced {
        /// Identifier of the enemy that moved.
        enemy: EnemyId,
        /// Position before the step.
        from: Vec2,
        /// Position after the step.
        to: Vec2,
    },
    /// Confirms that an enemy produced a projectile.
    EnemyBulletFired {
        /// Identifier assigned to the projectile.
        bullet: BulletId,
        /// Enemy that fired it.
        enemy: EnemyId,
    },
    /// Reports that a projectile left the world.
    BulletRemoved {
        /// Identifier of the removed projectile.
        bullet: BulletId,
        /// Why the projectile was removed.
        cause: RemovalCause,
    },
    /// Reports that an enemy absorbed damage.
    EnemyDamaged {
        /// Identifier of the enemy that was hit.
        enemy: EnemyId,
        /// Hit points remaining after the hit.
        remaining: Health,
    },
    /// Reports that an enemy's health reached zero and it became inert.
    EnemyDied {
        /// Identifier of the enemy that died.
        enemy: EnemyId,
    },
    /// Reports that the player absorbed damage.
    PlayerDamaged {
        /// What dealt the damage.
        cause: DamageCause,
        /// Hit points remaining after the hit.
        remaining: Health,
    },
    /// Reports that a timed immunity window ran out.
    ImmunityExpired {
        /// Which immunity source expired.
        source: ImmunitySource,
    },
    /// Terminal signal: the player's health reached zero.
    PlayerDefeated,
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
}

/// Immutable representation of the player's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerSnapshot {
    /// Top-left corner of the player's bounding box.
    pub position: Vec2,
    /// Side length of the player's square bounding box.
    pub size: f32,
    /// Remaining hit points.
    pub health: Health,
    /// Rounds left in the magazine.
    pub ammo: u32,
    /// Whether any immunity source is currently active.
    pub immune: bool,
    /// Whether a dodge is currently in progress.
    pub dodging: bool,
}

impl PlayerSnapshot {
    /// Center of the player's bounding box.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.size / 2.0)
    }
}

/// Immutable representation of a single enemy's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemySnapshot {
    /// Unique identifier assigned to the enemy.
    pub id: EnemyId,
    /// Top-left corner of the enemy's bounding box.
    pub position: Vec2,
    /// Side length of the enemy's square bounding box.
    pub size: f32,
    /// Remaining hit points.
    pub health: Health,
    /// Whether the enemy still participates in the simulation.
    pub alive: bool,
    /// Time remaining until the enemy may fire again; zero means ready.
    pub ready_in: Duration,
}

impl EnemySnapshot {
    /// Center of the enemy's bounding box.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.size / 2.0)
    }
}

/// Read-only snapshot describing all enemies in the arena.
#[derive(Clone, Debug, Default)]
pub struct EnemyView {
    snapshots: Vec<EnemySnapshot>,
}

impl EnemyView {
    /// Creates a new enemy view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<EnemySnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured enemy snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<EnemySnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single projectile used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulletSnapshot {
    /// Unique identifier assigned to the projectile.
    pub id: BulletId,
    /// Top-left corner of the projectile's bounding box.
    pub position: Vec2,
    /// Damage applied when the projectile connects.
    pub damage: f32,
}

/// Read-only snapshot describing one projectile collection.
#[derive(Clone, Debug, Default)]
pub struct BulletView {
    snapshots: Vec<BulletSnapshot>,
}

impl BulletView {
    /// Creates a new bullet view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<BulletSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured bullet snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &BulletSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<BulletSnapshot> {
        self.snapshots
    }
}

/// Read-only view into the arena's tile classification grid.
#[derive(Clone, Debug)]
pub struct GridView<'a> {
    tiles: Cow<'a, [TileKind]>,
    columns: u32,
    rows: u32,
    tile_length: f32,
}

impl<'a> GridView<'a> {
    /// Captures a view backed by the provided tile slice.
    #[must_use]
    pub fn new(tiles: &'a [TileKind], columns: u32, rows: u32, tile_length: f32) -> Self {
        Self {
            tiles: Cow::Borrowed(tiles),
            columns,
            rows,
            tile_length,
        }
    }

    /// Builds a view that owns its tile storage, mainly for tests.
    #[must_use]
    pub fn from_owned(
        tiles: Vec<TileKind>,
        columns: u32,
        rows: u32,
        tile_length: f32,
    ) -> GridView<'static> {
        GridView {
            tiles: Cow::Owned(tiles),
            columns,
            rows,
            tile_length,
        }
    }

    /// Classification of the provided tile, or `None` outside the grid.
    #[must_use]
    pub fn kind(&self, tile: TileCoord) -> Option<TileKind> {
        self.index(tile).map(|index| self.tiles[index])
    }

    /// Reports whether the tile is inside the grid and not a wall.
    #[must_use]
    pub fn is_passable(&self, tile: TileCoord) -> bool {
        self.kind(tile).is_some_and(TileKind::is_passable)
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

    /// Tile containing the provided world-space point, or `None` outside.
    #[must_use]
    pub fn tile_at(&self, point: Vec2) -> Option<TileCoord> {
        if point.x < 0.0 || point.y < 0.0 || self.tile_length <= 0.0 {
            return None;
        }
        let column = (point.x / self.tile_length) as u32;
        let row = (point.y / self.tile_length) as u32;
        let tile = TileCoord::new(column, row);
        if column < self.columns && row < self.rows {
            Some(tile)
        } else {
            None
        }
    }

    /// World-space center of the provided tile.
    #[must_use]
    pub fn tile_center(&self, tile: TileCoord) -> Vec2 {
        Vec2::new(
            tile.column() as f32 * self.tile_length + self.tile_length / 2.0,
            tile.row() as f32 * self.tile_length + self.tile_length / 2.0,
        )
    }

    fn index(&self, tile: TileCoord) -> Option<usize> {
        if tile.column() < self.columns && tile.row() < self.rows {
            let row = usize::try_from(tile.row()).ok()?;
            let column = usize::try_from(tile.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Player movement and survivability tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Distance in world units the player covers per tick.
    pub speed: f32,
    /// Starting hit points.
    pub health: f32,
    /// Side length of the player's square bounding box.
    pub size: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 6.0,
            health: 100.0,
            size: 40.0,
        }
    }
}

/// Player weapon tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTuning {
    /// Maximum shots per second.
    pub fire_rate: f32,
    /// Damage applied per projectile hit.
    pub damage: f32,
    /// Magazine capacity in rounds.
    pub capacity: u32,
    /// Distance in world units a projectile covers per tick.
    pub bullet_speed: f32,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            fire_rate: 2.0,
            damage: 20.0,
            capacity: 10,
            bullet_speed: 8.0,
        }
    }
}

/// Enemy behavior tuning shared by every spawned enemy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Starting hit points.
    pub health: f32,
    /// Side length of the enemy's square bounding box.
    pub size: f32,
    /// Distance in world units the enemy covers per tick.
    pub speed: f32,
    /// Distance at which the enemy stops chasing and holds position.
    pub chase_range: f32,
    /// Damage applied when the enemy's box touches the player's.
    pub contact_damage: f32,
    /// Seconds between enemy shots.
    pub shoot_interval_seconds: f32,
    /// Distance in world units an enemy projectile covers per tick.
    pub bullet_speed: f32,
    /// Damage applied per enemy projectile hit.
    pub bullet_damage: f32,
    /// Center-to-center distance within which the enemy may fire.
    pub shooting_range: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            health: 100.0,
            size: 40.0,
            speed: 2.0,
            chase_range: 160.0,
            contact_damage: 0.5,
            shoot_interval_seconds: 1.0,
            bullet_speed: 5.0,
            bullet_damage: 10.0,
            shooting_range: 400.0,
        }
    }
}

/// Immunity and dodge tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusTuning {
    /// Seconds the damage-hit immunity window lasts.
    pub hit_immunity_seconds: f32,
    /// Seconds a dodge lasts.
    pub dodge_duration_seconds: f32,
    /// Seconds after a dodge ends before another may begin.
    pub dodge_cooldown_seconds: f32,
    /// Factor applied to movement deltas while dodging.
    pub dodge_multiplier: f32,
}

impl Default for StatusTuning {
    fn default() -> Self {
        Self {
            hit_immunity_seconds: 1.0,
            dodge_duration_seconds: 0.3,
            dodge_cooldown_seconds: 1.0,
            dodge_multiplier: 2.5,
        }
    }
}

/// Immutable tuning bundle passed into world construction.
///
/// Every knob is data supplied by the embedding application; the simulation
/// never computes or mutates configuration. Defaults reproduce the reference
/// tuning of the original game.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Target simulation steps per second.
    pub tick_rate: f32,
    /// Player movement and survivability tuning.
    pub player: PlayerTuning,
    /// Player weapon tuning.
    pub weapon: WeaponTuning,
    /// Enemy behavior tuning.
    pub enemy: EnemyTuning,
    /// Immunity and dodge tuning.
    pub status: StatusTuning,
}

impl SimConfig {
    /// Duration of one simulation step at the configured tick rate.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        if self.tick_rate > 0.0 {
            Duration::from_secs_f32(1.0 / self.tick_rate)
        } else {
            Duration::ZERO
        }
    }

    /// Minimum time between player shots derived from the fire rate.
    #[must_use]
    pub fn shot_interval(&self) -> Duration {
        if self.weapon.fire_rate > 0.0 {
            Duration::from_secs_f32(1.0 / self.weapon.fire_rate)
        } else {
            Duration::ZERO
        }
    }

    /// Minimum time between enemy shots.
    #[must_use]
    pub fn enemy_shot_interval(&self) -> Duration {
        Duration::from_secs_f32(self.enemy.shoot_interval_seconds.max(0.0))
    }

    /// Length of the damage-hit immunity window.
    #[must_use]
    pub fn hit_immunity(&self) -> Duration {
        Duration::from_secs_f32(self.status.hit_immunity_seconds.max(0.0))
    }

    /// Length of a dodge.
    #[must_use]
    pub fn dodge_duration(&self) -> Duration {
        Duration::from_secs_f32(self.status.dodge_duration_seconds.max(0.0))
    }

    /// Cooldown between dodges, measured from the end of the previous one.
    #[must_use]
    pub fn dodge_cooldown(&self) -> Duration {
        Duration::from_secs_f32(self.status.dodge_cooldown_seconds.max(0.0))
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            player: PlayerTuning::default(),
            weapon: WeaponTuning::default(),
            enemy: EnemyTuning::default(),
            status: StatusTuning::default(),
        }
    }
}
