//! Drifting asteroids
//!
//! Size, velocity and spin are fixed at spawn and never change.

use glam::Vec2;

use super::body::{Body, Bounds, Kinematic, Sprite};
use super::geometry::clamp_angle;

#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub body: Body,
    pub velocity: Vec2,
    /// Degrees per second
    pub rotation_speed: f32,
}

impl Asteroid {
    pub fn new(position: Vec2, size: f32, rotation: f32, rotation_speed: f32, velocity: Vec2) -> Self {
        let mut body = Body::new(Sprite::Asteroid, Vec2::splat(size), Bounds::asteroid());
        body.position = position;
        body.rotation = clamp_angle(rotation);
        Self {
            body,
            velocity,
            rotation_speed,
        }
    }

    /// Point debris flies out from when the asteroid breaks up
    pub fn remnant_origin(&self) -> Vec2 {
        self.body.center()
    }
}

impl Kinematic for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.body.rotation = clamp_angle(self.body.rotation + self.rotation_speed * dt);
        self.body.position += self.velocity * dt;
    }
}
