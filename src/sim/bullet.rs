//! Bullets fired by the player
//!
//! A bullet flies at constant velocity and expires when its lifetime timer
//! finishes. It is never wrapped across screen edges.

use glam::Vec2;

use super::body::{Body, Bounds, Kinematic, Sprite};
use super::timer::Timer;

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub body: Body,
    pub velocity: Vec2,
    lifetime: Timer,
}

impl Bullet {
    pub fn new(position: Vec2, size: Vec2, rotation: f32, velocity: Vec2, lifetime: Timer) -> Self {
        let mut body = Body::new(Sprite::Bullet, size, Bounds::rect());
        body.position = position;
        body.rotation = rotation;
        Self {
            body,
            velocity,
            lifetime,
        }
    }

    /// True once the lifetime has run out
    pub fn is_destroyed(&self, now_tick: u64) -> bool {
        self.lifetime.finished(now_tick)
    }
}

impl Kinematic for Bullet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.body.position += self.velocity * dt;
    }
}
