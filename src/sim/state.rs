//! Game state and core simulation types
//!
//! `GameState` exclusively owns every entity of one session, one `Vec` per
//! entity kind, plus the phase machine, the level counter and the seeded RNG.

use glam::Vec2;

use super::asteroid::Asteroid;
use super::bullet::Bullet;
use super::geometry::direction;
use super::player::Player;
use super::random::Random;
use super::remnant::Remnant;
use super::timer::Timer;
use crate::config::GameConfig;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Short pause before play; the field drifts but the ship is inert
    Start,
    /// Active gameplay
    Running,
    /// Ship destroyed; waits, then restarts
    Over,
}

/// Things that happened during a step, for audio/HUD consumers
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    BulletFired,
    AsteroidDestroyed { position: Vec2 },
    PlayerDestroyed,
    LevelCleared { level: u32 },
    PhaseChanged { from: GamePhase, to: GamePhase },
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub rng: Random,
    pub phase: GamePhase,
    /// Gates Start -> Running and Over -> Start
    pub state_timer: Timer,
    /// Starts at 1
    pub level: u32,
    /// Simulation steps taken since construction
    pub time_ticks: u64,
    pub player: Player,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    pub remnants: Vec<Remnant>,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game seeded from the config
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed;
        Self::with_seed(config, seed)
    }

    /// Create a game with an explicit seed, already in the Start phase
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        let player = Player::new(&config);
        let mut state = Self {
            rng: Random::new(seed),
            phase: GamePhase::Start,
            state_timer: Timer::default(),
            level: 1,
            time_ticks: 0,
            player,
            asteroids: Vec::new(),
            bullets: Vec::new(),
            remnants: Vec::new(),
            events: Vec::new(),
            config,
        };
        state.restart();
        state
    }

    /// Current simulation time in seconds, for display and logging.
    /// Timers compare `time_ticks` instead.
    pub fn now(&self) -> f64 {
        self.time_ticks as f64 / f64::from(self.config.updates_per_sec)
    }

    /// Reset to level one and enter the Start phase
    pub fn restart(&mut self) {
        self.level = 1;
        self.player.reset(self.config.screen_center());
        self.asteroids.clear();
        self.bullets.clear();
        self.remnants.clear();
        self.spawn_asteroids();
        self.set_phase(GamePhase::Start);
        self.arm_state_timer();
    }

    /// Move to a new phase, recording the change
    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::info!(
            "Phase {:?} -> {:?} (level {}, t={:.2}s)",
            from,
            to,
            self.level,
            self.now()
        );
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    /// End the run. Repeated calls while already over do nothing.
    pub fn game_over(&mut self) {
        if self.phase == GamePhase::Over {
            return;
        }
        self.events.push(GameEvent::PlayerDestroyed);
        self.set_phase(GamePhase::Over);
        self.arm_state_timer();
    }

    fn arm_state_timer(&mut self) {
        let delay = self.config.ticks(self.config.time_between_states);
        self.state_timer.start(self.time_ticks, delay);
    }

    /// Advance to the next level and spawn its asteroid field
    pub fn increase_level(&mut self) {
        self.events.push(GameEvent::LevelCleared { level: self.level });
        self.level += 1;
        self.spawn_asteroids();
        log::info!(
            "Level {} begins with {} asteroids",
            self.level,
            self.asteroids.len()
        );
    }

    /// Number of asteroids a level starts with
    pub fn asteroid_target_count(&self, level: u32) -> usize {
        let c = &self.config;
        let raw = c
            .asteroid_base_count
            .saturating_add(level.saturating_mul(c.asteroid_count_increment));
        raw.clamp(c.asteroid_min_count, c.asteroid_max_count) as usize
    }

    /// Spawn the asteroid field for the current level
    pub fn spawn_asteroids(&mut self) {
        let count = self.asteroid_target_count(self.level);
        for _ in 0..count {
            self.create_asteroid();
        }
    }

    /// Create one asteroid just off-screen, heading roughly along a cardinal axis
    pub fn create_asteroid(&mut self) {
        let Some(&size) = self.rng.pick(&self.config.asteroid_sizes) else {
            log::warn!("No asteroid sizes configured; skipping spawn");
            return;
        };
        let position = self.random_asteroid_position(size);
        let rotation = self.rng.range(0.0, 360.0);
        let c = &self.config;
        let (min_rot, max_rot) = (c.asteroid_min_rot_speed, c.asteroid_max_rot_speed);
        let (min_speed, max_speed) = (c.asteroid_min_speed, c.asteroid_max_speed);
        let (min_angle, max_angle) = (c.asteroid_min_angle, c.asteroid_max_angle);

        let rotation_speed = self.rng.range(min_rot, max_rot);
        let speed = self.rng.range(min_speed, max_speed);
        let cardinal = self.rng.index(4) as f32 * 90.0;
        let heading = cardinal + self.rng.range(min_angle, max_angle);

        self.asteroids.push(Asteroid::new(
            position,
            size,
            rotation,
            rotation_speed,
            direction(heading) * speed,
        ));
    }

    /// A point just beyond the top or the left screen edge
    fn random_asteroid_position(&mut self, size: f32) -> Vec2 {
        let (w, h) = (self.config.screen_width, self.config.screen_height);
        let x = self.rng.range(-size, w + size);
        let y = self.rng.range(-size, h + size);
        self.rng.choose(Vec2::new(x, -size), Vec2::new(-size, y))
    }

    /// Scatter debris from a destroyed asteroid
    pub fn create_remnants(&mut self, origin: Vec2) {
        let now = self.time_ticks;
        let c = &self.config;
        let (count, size, lifetime) = (c.remnant_count, c.remnant_size, c.ticks(c.remnant_lifetime));
        let (min_speed, max_speed) = (c.remnant_min_speed, c.remnant_max_speed);
        for _ in 0..count {
            let angle = self.rng.range(0.0, 360.0);
            let speed = self.rng.range(min_speed, max_speed);
            self.remnants.push(Remnant::new(
                origin,
                size,
                direction(angle) * speed,
                Timer::started(now, lifetime),
            ));
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_at_level_one() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.level, 1);
        assert_eq!(state.asteroids.len(), 5);
        assert!(state.bullets.is_empty());
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_asteroid_count_clamped() {
        let config = GameConfig {
            asteroid_base_count: 2,
            asteroid_count_increment: 3,
            asteroid_min_count: 6,
            asteroid_max_count: 12,
            ..GameConfig::default()
        };
        let mut state = GameState::new(config);
        assert_eq!(state.asteroid_target_count(1), 6); // 5 clamped up
        assert_eq!(state.asteroid_target_count(2), 8);
        assert_eq!(state.asteroid_target_count(3), 11);
        assert_eq!(state.asteroid_target_count(10), 12); // 32 clamped down

        for level in 1..=5 {
            state.asteroids.clear();
            state.level = level;
            state.spawn_asteroids();
            let expected = (2 + level * 3).clamp(6, 12) as usize;
            assert_eq!(state.asteroids.len(), expected);
        }
    }

    #[test]
    fn test_spawned_asteroids_within_bounds() {
        // Seed 1, five asteroids at level one, default bounds
        let config = GameConfig::default();
        let state = GameState::with_seed(config.clone(), 1);
        assert_eq!(state.asteroids.len(), 5);

        for asteroid in &state.asteroids {
            let speed = asteroid.velocity.length();
            assert!(
                (69.99..=200.01).contains(&speed),
                "speed {speed} outside [70, 200]"
            );

            let heading = asteroid.velocity.y.atan2(asteroid.velocity.x).to_degrees();
            let off_axis = [0.0f32, 90.0, 180.0, 270.0, 360.0, -90.0, -180.0]
                .iter()
                .map(|c| (heading - c).abs())
                .fold(f32::MAX, f32::min);
            assert!(off_axis <= 40.01, "heading {heading} too far from any axis");

            let size = asteroid.body.size.x;
            assert!(config.asteroid_sizes.contains(&size));
            assert!((-30.0..=30.0).contains(&asteroid.rotation_speed));
        }
    }

    #[test]
    fn test_spawn_off_screen_top_or_left() {
        let state = GameState::with_seed(GameConfig::default(), 9);
        for asteroid in &state.asteroids {
            let size = asteroid.body.size.x;
            let p = asteroid.body.position;
            assert!(p.y == -size || p.x == -size, "{p:?} not on top/left edge");
        }
    }

    #[test]
    fn test_game_over_is_idempotent() {
        let mut state = GameState::new(GameConfig::default());
        state.set_phase(GamePhase::Running);
        state.drain_events();

        state.game_over();
        state.game_over();
        let events = state.drain_events();
        assert_eq!(
            events.iter().filter(|e| **e == GameEvent::PlayerDestroyed).count(),
            1
        );
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(GameConfig::default());
        state.level = 4;
        state.player.velocity = Vec2::new(10.0, 10.0);
        state.player.body.rotation = 90.0;
        state.create_remnants(Vec2::new(10.0, 10.0));
        state.phase = GamePhase::Over;

        state.restart();
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.asteroids.len(), 5);
        assert!(state.bullets.is_empty());
        assert!(state.remnants.is_empty());
        assert_eq!(state.player.velocity, Vec2::ZERO);
        assert_eq!(state.player.body.rotation, 0.0);
    }

    #[test]
    fn test_remnants_spread_from_origin() {
        let mut state = GameState::new(GameConfig::default());
        state.create_remnants(Vec2::new(200.0, 200.0));
        assert_eq!(state.remnants.len(), 10);
        for r in &state.remnants {
            assert!((r.body.center() - Vec2::new(200.0, 200.0)).length() < 1e-3);
            let speed = r.velocity.length();
            assert!((39.99..=80.01).contains(&speed));
        }
    }
}
