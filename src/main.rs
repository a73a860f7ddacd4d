//! Space Game entry point
//!
//! Runs a headless session: a simple autopilot flies the ship for a fixed
//! stretch of time, and the run is summarized in the log. By default the
//! session advances a manual clock one step per frame and finishes at once;
//! `--realtime` paces frames against the system clock instead. Any other
//! argument is read as a JSON config path overriding the default tuning.

use std::error::Error;
use std::time::Duration;

use glam::Vec2;

use space_game::platform::{
    Clock, HeadlessWindow, KeyboardState, ManualClock, SystemClock, Window, keys,
};
use space_game::renderer::{QuadBatch, ResourceContext, SpriteTextures};
use space_game::sim::{GameEvent, GameState};
use space_game::{Game, GameConfig};

/// Simulated seconds per headless run
const RUN_SECONDS: f64 = 120.0;
/// Degrees of aim error the autopilot tolerates before steering
const AIM_TOLERANCE: f32 = 4.0;

#[derive(Debug, Default)]
struct Summary {
    shots: u32,
    asteroids_destroyed: u32,
    deaths: u32,
    levels_cleared: u32,
    highest_level: u32,
}

impl Summary {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::BulletFired => self.shots += 1,
            GameEvent::AsteroidDestroyed { .. } => self.asteroids_destroyed += 1,
            GameEvent::PlayerDestroyed => self.deaths += 1,
            GameEvent::LevelCleared { level } => {
                self.levels_cleared += 1;
                log::info!("Level {} cleared", level);
            }
            GameEvent::PhaseChanged { .. } => {}
        }
    }
}

/// Turn towards the nearest asteroid and keep the trigger held
fn autopilot(state: &GameState, keyboard: &mut KeyboardState) {
    keyboard.reset();
    keyboard.set_key(keys::SPACE, true);

    let ship = state.player.body.center();
    let nearest = state
        .asteroids
        .iter()
        .map(|a| a.body.center())
        .min_by(|a, b| a.distance_squared(ship).total_cmp(&b.distance_squared(ship)));
    let Some(target) = nearest else {
        return;
    };

    let heading = state.player.heading();
    let to_target = (target - ship).normalize_or_zero();
    if to_target == Vec2::ZERO {
        return;
    }
    let error = heading.angle_to(to_target).to_degrees();
    if error > AIM_TOLERANCE {
        keyboard.set_key(keys::RIGHT, true);
    } else if error < -AIM_TOLERANCE {
        keyboard.set_key(keys::LEFT, true);
    }
}

#[derive(Debug, Default)]
struct Args {
    config_path: Option<String>,
    realtime: bool,
}

impl Args {
    fn parse(args: impl Iterator<Item = String>) -> Self {
        let mut parsed = Self::default();
        for arg in args {
            if arg == "--realtime" {
                parsed.realtime = true;
            } else {
                parsed.config_path = Some(arg);
            }
        }
        parsed
    }
}

/// Frame pacing for a session
trait Pacer: Clock {
    fn next_frame(&mut self, frame_time: f64);
}

impl Pacer for ManualClock {
    fn next_frame(&mut self, frame_time: f64) {
        self.advance(frame_time);
    }
}

impl Pacer for SystemClock {
    fn next_frame(&mut self, frame_time: f64) {
        std::thread::sleep(Duration::from_secs_f64(frame_time));
    }
}

fn run_session(
    clock: &mut impl Pacer,
    config: GameConfig,
    textures: &SpriteTextures,
) -> Result<(), Box<dyn Error>> {
    let frame_time = 1.0 / f64::from(config.updates_per_sec);
    let frame_limit = (RUN_SECONDS / frame_time).round() as u64;
    let mut window = HeadlessWindow::with_frame_limit(frame_limit);
    let mut keyboard = KeyboardState::new();
    let mut batch = QuadBatch::new();
    let mut game = Game::new(config, clock.now());

    let mut summary = Summary::default();
    while !window.should_close() {
        clock.next_frame(frame_time);
        autopilot(&game.state, &mut keyboard);
        let report = game.run_frame(&*clock, &keyboard, &mut window, &mut batch, textures);
        for event in &report.events {
            summary.record(event);
        }
        summary.highest_level = summary.highest_level.max(game.state.level);
    }

    log::info!(
        "Ran {} frames ({} steps): {} shots, {} asteroids destroyed, {} deaths, {} levels cleared, reached level {}",
        window.frames_presented(),
        game.state.time_ticks,
        summary.shots,
        summary.asteroids_destroyed,
        summary.deaths,
        summary.levels_cleared,
        summary.highest_level
    );
    log::debug!("Last frame drew {} quads", batch.quad_count());
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse(std::env::args().skip(1));
    let config = match &args.config_path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let resources = ResourceContext::with_default_textures()?;
    let textures = SpriteTextures::resolve(&resources)?;

    if args.realtime {
        log::info!("Pacing frames against the system clock");
        run_session(&mut SystemClock::new(), config, &textures)
    } else {
        run_session(&mut ManualClock::new(0.0), config, &textures)
    }
}

fn main() {
    env_logger::init();
    log::info!("Space Game (headless) starting...");

    if let Err(e) = run() {
        log::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}
