//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (collection order, never re-sorted)
//! - No rendering or platform dependencies beyond sampling input

pub mod asteroid;
pub mod body;
pub mod bullet;
pub mod geometry;
pub mod player;
pub mod random;
pub mod remnant;
pub mod state;
pub mod tick;
pub mod timer;

pub use asteroid::Asteroid;
pub use body::{Body, Bounds, Kinematic, Sprite};
pub use bullet::Bullet;
pub use geometry::{clamp_angle, direction, polygons_intersect, segments_intersect, transform_polygon};
pub use player::Player;
pub use random::Random;
pub use remnant::Remnant;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, process_input, step, wrap_position};
pub use timer::Timer;
