//! Shared spatial data for every entity kind
//!
//! Each entity stores a `Body` (where it is and what shape it has) next to its
//! own kind-specific state. Kinds are kept in separate homogeneous collections;
//! the `Kinematic` trait is the only thing they share.

use glam::{Vec2, Vec3};

use super::geometry::{polygons_intersect, transform_point, transform_polygon};
use crate::consts::LOCAL_CENTER;

/// Texture key for the resource layer. The simulation never resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Ship,
    Asteroid,
    Bullet,
    Remnant,
}

impl Sprite {
    pub fn name(&self) -> &'static str {
        match self {
            Sprite::Ship => "ship",
            Sprite::Asteroid => "asteroid",
            Sprite::Bullet => "bullet",
            Sprite::Remnant => "remnant",
        }
    }
}

/// Collision polygon in normalized [0,1]² local space
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds(Vec<Vec2>);

impl Bounds {
    /// Panics if fewer than 3 points are given.
    pub fn new(points: Vec<Vec2>) -> Self {
        assert!(
            points.len() >= 3,
            "bounds polygon needs at least 3 points, got {}",
            points.len()
        );
        Self(points)
    }

    /// Arrow-head outline of the ship, nose at the top
    pub fn ship() -> Self {
        Self::new(vec![
            Vec2::new(0.0, 1.0),
            Vec2::new(0.5, 0.75),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.5, 0.0),
        ])
    }

    /// Rough hexagon hugging the asteroid sprite
    pub fn asteroid() -> Self {
        Self::new(vec![
            Vec2::new(0.5, 0.0),
            Vec2::new(1.0, 0.5),
            Vec2::new(0.75, 1.0),
            Vec2::new(0.25, 1.0),
            Vec2::new(0.0, 0.75),
            Vec2::new(0.15, 0.25),
        ])
    }

    /// The full unit square
    pub fn rect() -> Self {
        Self::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ])
    }

    pub fn points(&self) -> &[Vec2] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Top-left corner of the unrotated sprite
    pub position: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Degrees, kept in [0, 360)
    pub rotation: f32,
    pub color: Vec3,
    pub bounds: Bounds,
    pub sprite: Sprite,
}

impl Body {
    pub fn new(sprite: Sprite, size: Vec2, bounds: Bounds) -> Self {
        Self {
            position: Vec2::ZERO,
            size,
            rotation: 0.0,
            color: Vec3::ONE,
            bounds,
            sprite,
        }
    }

    /// Map a local-space point through this body's model transform
    pub fn local_to_world(&self, local: Vec2) -> Vec2 {
        transform_point(local, self.position, self.size, self.rotation)
    }

    /// World-space centre of the sprite
    pub fn center(&self) -> Vec2 {
        self.local_to_world(LOCAL_CENTER)
    }

    /// Collision polygon in world space
    pub fn world_bounds(&self) -> Vec<Vec2> {
        transform_polygon(self.bounds.points(), self.position, self.size, self.rotation)
    }

    pub fn collides_with(&self, other: &Body) -> bool {
        polygons_intersect(&self.world_bounds(), &other.world_bounds())
    }
}

/// Per-kind motion over one fixed step
pub trait Kinematic {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Advance by `dt` seconds
    fn update(&mut self, dt: f32);

    fn collides_with(&self, other: &dyn Kinematic) -> bool {
        self.body().collides_with(other.body())
    }
}
