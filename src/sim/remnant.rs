//! Debris left behind when an asteroid is shot
//!
//! Purely visual: remnants never collide and disappear when their timer runs out.

use glam::Vec2;

use super::body::{Body, Bounds, Kinematic, Sprite};
use super::timer::Timer;

#[derive(Debug, Clone, PartialEq)]
pub struct Remnant {
    pub body: Body,
    pub velocity: Vec2,
    lifetime: Timer,
}

impl Remnant {
    /// Create a remnant centred on `origin`
    pub fn new(origin: Vec2, size: Vec2, velocity: Vec2, lifetime: Timer) -> Self {
        let mut body = Body::new(Sprite::Remnant, size, Bounds::rect());
        body.position = origin - size / 2.0;
        Self {
            body,
            velocity,
            lifetime,
        }
    }

    pub fn is_destroyed(&self, now_tick: u64) -> bool {
        self.lifetime.finished(now_tick)
    }
}

impl Kinematic for Remnant {
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
