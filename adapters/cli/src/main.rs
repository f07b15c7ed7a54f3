#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives the Gridfire simulation headlessly.
//!
//! The binary stands in for the rendering and input collaborators: it loads
//! one of the built-in demo arenas, feeds the session a deterministic input
//! script, and prints the outcome once the tick budget is spent or the player
//! falls. Tuning comes from [`SimConfig`] defaults, optionally overridden by
//! a TOML file.

mod arenas;

use std::{
    fs,
    path::{Path, PathBuf},
    thread,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use gridfire_core::{Event, InputFrame, SimConfig};
use gridfire_system_session::{FixedTimestep, Session};
use gridfire_world::query;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use arenas::ArenaChoice;

/// Command-line arguments accepted by the Gridfire driver.
#[derive(Debug, Parser)]
#[command(name = "gridfire", about = "Headless Gridfire simulation driver")]
struct Args {
    /// Demo arena to load.
    #[arg(long, value_enum, default_value_t = ArenaChoice::Forest)]
    arena: ArenaChoice,

    /// Number of simulation steps to run before reporting.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// TOML file overriding the default tuning; missing keys keep defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pace steps against the wall clock instead of running flat out.
    #[arg(long, default_value_t = false)]
    realtime: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let layout = arenas::layout(args.arena)?;
    let mut session = Session::with_layout(config, layout);

    println!("{}", query::welcome_banner(session.world()));
    info!(arena = ?args.arena, ticks = args.ticks, "session configured");

    let report = run(&mut session, args.ticks, args.realtime);
    print_report(&session, &report);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))
}

/// Per-run tallies gathered from the session's event stream.
#[derive(Debug, Default)]
struct RunReport {
    ticks_executed: u32,
    shots_fired: u32,
    enemy_shots: u32,
    enemies_slain: u32,
    defeated_at: Option<u32>,
}

fn run(session: &mut Session, ticks: u32, realtime: bool) -> RunReport {
    let interval = query::config(session.world()).tick_interval();
    let realtime = realtime && !interval.is_zero();
    let mut timestep = FixedTimestep::new(interval);
    let mut report = RunReport::default();
    let mut events = Vec::new();
    let mut last = Instant::now();

    while report.ticks_executed < ticks {
        let due = if realtime {
            let now = Instant::now();
            let due = timestep.steps(now.duration_since(last));
            last = now;
            if due == 0 {
                thread::sleep(interval / 4);
            }
            due
        } else {
            1
        };

        for _ in 0..due {
            if report.ticks_executed >= ticks {
                break;
            }
            events.clear();
            let frame = pilot(session);
            let defeated = session.advance(&frame, &mut events);
            report.ticks_executed += 1;
            tally(&events, &mut report);

            if defeated {
                report.defeated_at = Some(report.ticks_executed);
                info!(tick = report.ticks_executed, "player defeated, stopping");
                return report;
            }
        }
    }

    report
}

/// Deterministic stand-in for the input collaborators.
///
/// Aims at the nearest living enemy and holds the trigger; the weapon's own
/// rate and ammo gates decide when a shot actually leaves. Pulses a reload
/// whenever the magazine runs dry.
fn pilot(session: &Session) -> InputFrame {
    let world = session.world();
    let player = query::player(world);
    let target = nearest_enemy_center(player.center(), world);
    InputFrame {
        fire: target,
        reload: player.ammo == 0,
        ..InputFrame::default()
    }
}

fn nearest_enemy_center(from: Vec2, world: &gridfire_world::World) -> Option<Vec2> {
    query::enemies(world)
        .iter()
        .filter(|enemy| enemy.alive)
        .map(|enemy| enemy.center())
        .min_by(|a, b| a.distance(from).total_cmp(&b.distance(from)))
}

fn tally(events: &[Event], report: &mut RunReport) {
    for event in events {
        match event {
            Event::WeaponFired { .. } => report.shots_fired += 1,
            Event::EnemyBulletFired { .. } => report.enemy_shots += 1,
            Event::EnemyDied { .. } => report.enemies_slain += 1,
            Event::PlayerDamaged { cause, remaining } => {
                debug!(?cause, health = remaining.get(), "player hit");
            }
            _ => {}
        }
    }
}

fn print_report(session: &Session, report: &RunReport) {
    let world = session.world();
    let player = query::player(world);
    let enemies = query::enemies(world);
    let standing = enemies.iter().filter(|enemy| enemy.alive).count();

    match report.defeated_at {
        Some(tick) => println!("Game over: player fell on tick {tick}."),
        None => println!("Survived {} ticks.", report.ticks_executed),
    }
    println!(
        "Player health {:.1}, ammo {} | enemies standing {} | shots fired {} | enemy shots {} | enemies slain {}",
        player.health.get(),
        player.ammo,
        standing,
        report.shots_fired,
        report.enemy_shots,
        report.enemies_slain,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_overrides_keep_remaining_defaults() {
        let config: SimConfig =
            toml::from_str("tick_rate = 30.0\n\n[weapon]\ncapacity = 4\n").expect("parse");
        assert_eq!(config.tick_rate, 30.0);
        assert_eq!(config.weapon.capacity, 4);
        assert_eq!(config.player.speed, 6.0);
        assert_eq!(config.enemy.shooting_range, 400.0);
    }

    #[test]
    fn missing_config_path_falls_back_to_defaults() {
        let config = load_config(None).expect("defaults");
        assert_eq!(config, SimConfig::default());
    }
}
