//! Game tuning constants
//!
//! A single immutable struct handed to the simulation at construction.
//! Defaults reproduce the reference tuning; a JSON file may override any field.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating a config
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Every numeric tuning constant of the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen / timing ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Fixed simulation rate
    pub updates_per_sec: f32,
    /// Delay gating Start -> Running and Over -> Start (seconds)
    pub time_between_states: f64,
    /// RNG seed for asteroid placement and debris
    pub seed: u64,

    // === Asteroids ===
    /// Discrete set of square asteroid sizes to choose from
    pub asteroid_sizes: Vec<f32>,
    pub asteroid_base_count: u32,
    pub asteroid_count_increment: u32,
    pub asteroid_min_count: u32,
    pub asteroid_max_count: u32,
    /// Rotation speed range (degrees per second)
    pub asteroid_min_rot_speed: f32,
    pub asteroid_max_rot_speed: f32,
    pub asteroid_min_speed: f32,
    pub asteroid_max_speed: f32,
    /// Heading offset from a cardinal direction (degrees)
    pub asteroid_min_angle: f32,
    pub asteroid_max_angle: f32,

    // === Player ===
    pub player_size: Vec2,
    pub player_force: f32,
    /// Multiplicative velocity decay applied every tick
    pub player_decay: f32,
    /// Degrees per second
    pub player_turn_speed: f32,
    /// Seconds between shots
    pub player_reload_time: f64,

    // === Bullets ===
    pub bullet_speed: f32,
    pub bullet_size: Vec2,

    // === Remnants (asteroid debris) ===
    pub remnant_count: u32,
    pub remnant_size: Vec2,
    pub remnant_lifetime: f64,
    pub remnant_min_speed: f32,
    pub remnant_max_speed: f32,

    // === Level indicator ===
    pub level_icon_size: Vec2,
    pub level_icon_color: [f32; 3],
    pub level_icon_offset: f32,
    pub level_icons_per_row: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            updates_per_sec: 60.0,
            time_between_states: 1.0,
            seed: 1,

            asteroid_sizes: vec![30.0, 40.0, 50.0],
            asteroid_base_count: 0,
            asteroid_count_increment: 5,
            asteroid_min_count: 5,
            asteroid_max_count: 30,
            asteroid_min_rot_speed: -30.0,
            asteroid_max_rot_speed: 30.0,
            asteroid_min_speed: 70.0,
            asteroid_max_speed: 200.0,
            asteroid_min_angle: 20.0,
            asteroid_max_angle: 40.0,

            player_size: Vec2::new(28.0, 35.0),
            player_force: 400.0,
            player_decay: 0.99,
            player_turn_speed: 225.0,
            player_reload_time: 0.3,

            bullet_speed: 400.0,
            bullet_size: Vec2::new(3.0, 10.0),

            remnant_count: 10,
            remnant_size: Vec2::splat(3.0),
            remnant_lifetime: 0.5,
            remnant_min_speed: 40.0,
            remnant_max_speed: 80.0,

            level_icon_size: Vec2::new(16.0, 20.0),
            level_icon_color: [0.5, 0.5, 0.5],
            level_icon_offset: 20.0,
            level_icons_per_row: 5,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check value ranges the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }
        fn ordered<T: PartialOrd + std::fmt::Debug>(
            field: &'static str,
            min: T,
            max: T,
        ) -> Result<(), ConfigError> {
            if min <= max {
                Ok(())
            } else {
                Err(invalid(field, format!("min {min:?} exceeds max {max:?}")))
            }
        }

        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(invalid("screen_width/screen_height", "must be positive"));
        }
        if !(self.updates_per_sec > 0.0) {
            return Err(invalid("updates_per_sec", "must be positive"));
        }
        if self.asteroid_sizes.is_empty() {
            return Err(invalid("asteroid_sizes", "must not be empty"));
        }
        if self.asteroid_sizes.iter().any(|&s| !(s > 0.0)) {
            return Err(invalid("asteroid_sizes", "sizes must be positive"));
        }
        ordered("asteroid_count", self.asteroid_min_count, self.asteroid_max_count)?;
        ordered(
            "asteroid_rot_speed",
            self.asteroid_min_rot_speed,
            self.asteroid_max_rot_speed,
        )?;
        ordered("asteroid_speed", self.asteroid_min_speed, self.asteroid_max_speed)?;
        ordered("asteroid_angle", self.asteroid_min_angle, self.asteroid_max_angle)?;
        ordered("remnant_speed", self.remnant_min_speed, self.remnant_max_speed)?;
        if !(self.player_decay > 0.0 && self.player_decay <= 1.0) {
            return Err(invalid("player_decay", "must be in (0, 1]"));
        }
        if !(self.bullet_speed > 0.0) {
            return Err(invalid("bullet_speed", "must be positive"));
        }
        if self.level_icons_per_row == 0 {
            return Err(invalid("level_icons_per_row", "must be at least 1"));
        }
        Ok(())
    }

    /// Length of one fixed simulation step (seconds)
    #[inline]
    pub fn update_interval(&self) -> f32 {
        1.0 / self.updates_per_sec
    }

    #[inline]
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    #[inline]
    pub fn screen_center(&self) -> Vec2 {
        self.screen_size() / 2.0
    }

    /// Distance a bullet travels before expiring
    pub fn bullet_range(&self) -> f32 {
        self.screen_width.min(self.screen_height)
    }

    /// Bullet lifetime derived from range and speed (seconds)
    pub fn bullet_lifetime(&self) -> f64 {
        f64::from(self.bullet_range()) / f64::from(self.bullet_speed)
    }

    /// Whole simulation steps in `seconds`, rounded to the nearest step
    pub fn ticks(&self, seconds: f64) -> u64 {
        (seconds * f64::from(self.updates_per_sec)).round().max(0.0) as u64
    }
}
