//! Space Game - survive drifting asteroid fields
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//! - `config`: Immutable tuning constants, loadable from JSON
//! - `platform`: Input, clock and window collaborators
//! - `renderer`: Quad drawing boundary and resource context
//! - `game`: Fixed-timestep frame driver

pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::Game;

/// Game-wide constants that are not tunable
pub mod consts {
    use glam::Vec2;

    /// Local-space point the ship fires from (its nose)
    pub const SHIP_NOSE: Vec2 = Vec2::new(0.5, 0.0);
    /// Local-space centre of every sprite
    pub const LOCAL_CENTER: Vec2 = Vec2::new(0.5, 0.5);
    /// Rotation offset between a sprite's rotation and its heading.
    /// Sprites face "up" at rotation 0, while `direction(0)` points along +x.
    pub const HEADING_OFFSET: f32 = -90.0;
}
