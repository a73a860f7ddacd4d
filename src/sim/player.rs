//! The player's ship
//!
//! Steering is latched: `process_input` records what the controls asked for and
//! the next `update` consumes it, then resets to neutral. Velocity decays by a
//! constant factor every tick, so the ship coasts to a stop and has a practical
//! top speed under constant thrust.

use glam::Vec2;

use super::body::{Body, Bounds, Kinematic, Sprite};
use super::bullet::Bullet;
use super::geometry::{clamp_angle, direction};
use super::tick::TickInput;
use super::timer::Timer;
use crate::config::GameConfig;
use crate::consts::{HEADING_OFFSET, SHIP_NOSE};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    pub velocity: Vec2,
    /// Thrust acceleration magnitude
    pub force: f32,
    /// Degrees per second
    pub turn_speed: f32,
    /// Velocity multiplier per tick
    pub decay: f32,
    /// Steps between shots
    pub reload_ticks: u64,
    reload: Timer,
    /// Latched for the next tick only
    angular_velocity: f32,
    thrusting: bool,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            body: Body::new(Sprite::Ship, config.player_size, Bounds::ship()),
            velocity: Vec2::ZERO,
            force: config.player_force,
            turn_speed: config.player_turn_speed,
            decay: config.player_decay,
            reload_ticks: config.ticks(config.player_reload_time),
            reload: Timer::default(),
            angular_velocity: 0.0,
            thrusting: false,
        }
    }

    /// Place the ship centred on `center`, at rest, facing up
    pub fn reset(&mut self, center: Vec2) {
        self.body.position = center - self.body.size / 2.0;
        self.body.rotation = 0.0;
        self.velocity = Vec2::ZERO;
        self.reload = Timer::default();
        self.clear_input();
    }

    /// Latch steering and thrust for the next tick
    pub fn process_input(&mut self, input: &TickInput) {
        let mut turn = 0.0;
        if input.turn_right {
            turn += self.turn_speed;
        }
        if input.turn_left {
            turn -= self.turn_speed;
        }
        self.angular_velocity = turn;
        self.thrusting = input.thrust;
    }

    /// Unit vector the ship's nose points along
    pub fn heading(&self) -> Vec2 {
        direction(self.body.rotation + HEADING_OFFSET)
    }

    pub fn can_shoot(&self, now_tick: u64) -> bool {
        self.reload.finished(now_tick)
    }

    /// Fire a bullet from the ship's nose and arm the reload timer.
    ///
    /// Does not check `can_shoot`; the caller gates firing.
    pub fn shoot(&mut self, bullet_size: Vec2, speed: f32, lifetime_ticks: u64, now_tick: u64) -> Bullet {
        let nose = self.body.local_to_world(SHIP_NOSE);
        let velocity = self.heading() * (speed + self.velocity.length());
        self.reload.start(now_tick, self.reload_ticks);
        Bullet::new(
            nose - bullet_size / 2.0,
            bullet_size,
            self.body.rotation,
            velocity,
            Timer::started(now_tick, lifetime_ticks),
        )
    }

    fn clear_input(&mut self) {
        self.angular_velocity = 0.0;
        self.thrusting = false;
    }
}

impl Kinematic for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.body.rotation = clamp_angle(self.body.rotation + self.angular_velocity * dt);
        if self.thrusting {
            let acceleration = self.heading() * self.force;
            self.velocity += acceleration * dt;
        }
        self.velocity *= self.decay;
        self.body.position += self.velocity * dt;
        self.clear_input();
    }
}
