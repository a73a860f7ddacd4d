//! Fixed timestep simulation tick
//!
//! One `step` advances the game by exactly one update interval. Input is read
//! once per rendered frame via `process_input`, before that frame's steps.

use glam::Vec2;

use super::body::Kinematic;
use super::geometry::polygons_intersect;
use super::state::{GameEvent, GamePhase, GameState};
use crate::platform::{Input, keys};

/// Controls sampled for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

impl TickInput {
    /// Sample the ship controls from the keyboard
    pub fn from_input(input: &impl Input) -> Self {
        Self {
            turn_left: input.is_key_pressed(keys::LEFT),
            turn_right: input.is_key_pressed(keys::RIGHT),
            thrust: input.is_key_pressed(keys::UP),
            fire: input.is_key_pressed(keys::SPACE),
        }
    }
}

/// Apply one frame of input: fire if allowed, and latch steering for the next step
pub fn process_input(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Running {
        return;
    }

    let now = state.time_ticks;
    if input.fire && state.player.can_shoot(now) {
        let c = &state.config;
        let (size, speed, lifetime) = (c.bullet_size, c.bullet_speed, c.ticks(c.bullet_lifetime()));
        let bullet = state.player.shoot(size, speed, lifetime, now);
        state.bullets.push(bullet);
        state.push_event(GameEvent::BulletFired);
    }
    state.player.process_input(input);
}

/// Advance the game state by one fixed timestep
pub fn step(state: &mut GameState) {
    let dt = state.config.update_interval();
    state.time_ticks += 1;

    advance_phase(state);

    if state.phase == GamePhase::Running {
        handle_collisions(state);
        if state.asteroids.is_empty() {
            state.increase_level();
        }
    }

    if state.phase != GamePhase::Over {
        state.player.update(dt);
    }
    for asteroid in &mut state.asteroids {
        asteroid.update(dt);
    }
    for bullet in &mut state.bullets {
        bullet.update(dt);
    }
    for remnant in &mut state.remnants {
        remnant.update(dt);
    }

    handle_stray_objects(state);
}

/// Timer-gated transitions: Start -> Running, Over -> fresh Start
fn advance_phase(state: &mut GameState) {
    let finished = state.state_timer.finished(state.time_ticks);
    match state.phase {
        GamePhase::Start if finished => state.set_phase(GamePhase::Running),
        GamePhase::Over if finished => state.restart(),
        _ => {}
    }
}

/// Bullets against asteroids, then the ship against asteroids.
///
/// Asteroids are scanned in collection order; each consumes at most the first
/// live bullet (in collection order) that hits it. Survivors keep their order.
fn handle_collisions(state: &mut GameState) {
    let bullet_bounds: Vec<Vec<Vec2>> = state.bullets.iter().map(|b| b.body.world_bounds()).collect();
    let mut bullet_alive = vec![true; bullet_bounds.len()];
    let mut destroyed = Vec::new();

    state.asteroids.retain(|asteroid| {
        let bounds = asteroid.body.world_bounds();
        let hit = bullet_bounds
            .iter()
            .enumerate()
            .find(|(i, bb)| bullet_alive[*i] && polygons_intersect(&bounds, bb))
            .map(|(i, _)| i);
        match hit {
            Some(i) => {
                bullet_alive[i] = false;
                destroyed.push(asteroid.remnant_origin());
                false
            }
            None => true,
        }
    });

    let mut index = 0;
    state.bullets.retain(|_| {
        let keep = bullet_alive[index];
        index += 1;
        keep
    });

    for origin in destroyed {
        log::debug!("Asteroid destroyed at ({:.1}, {:.1})", origin.x, origin.y);
        state.push_event(GameEvent::AsteroidDestroyed { position: origin });
        state.create_remnants(origin);
    }

    let player = &state.player;
    let crashed = state.asteroids.iter().any(|a| player.collides_with(a));
    if crashed {
        state.game_over();
    }
}

/// Wrap the ship and asteroids around the screen; drop expired bullets and debris
fn handle_stray_objects(state: &mut GameState) {
    let now = state.time_ticks;
    state.bullets.retain(|b| !b.is_destroyed(now));
    state.remnants.retain(|r| !r.is_destroyed(now));

    let screen = state.config.screen_size();
    let body = state.player.body_mut();
    body.position = wrap_position(body.position, body.size, screen);
    for asteroid in &mut state.asteroids {
        let body = asteroid.body_mut();
        body.position = wrap_position(body.position, body.size, screen);
    }
}

/// Teleport a sprite that has fully left the screen to just beyond the opposite edge
pub fn wrap_position(position: Vec2, size: Vec2, screen: Vec2) -> Vec2 {
    let mut pos = position;
    if pos.x < -size.x {
        pos.x = screen.x;
    } else if pos.x > screen.x {
        pos.x = -size.x;
    }
    if pos.y < -size.y {
        pos.y = screen.y;
    } else if pos.y > screen.y {
        pos.y = -size.y;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::platform::KeyboardState;
    use crate::sim::asteroid::Asteroid;
    use crate::sim::bullet::Bullet;
    use crate::sim::timer::Timer;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    /// A game already in the Running phase with no asteroids in play
    fn running_state() -> GameState {
        let mut state = GameState::new(GameConfig::default());
        state.asteroids.clear();
        state.set_phase(GamePhase::Running);
        state.drain_events();
        state
    }

    fn still_asteroid(position: Vec2) -> Asteroid {
        Asteroid::new(position, 40.0, 0.0, 0.0, Vec2::ZERO)
    }

    fn still_bullet(position: Vec2, now_tick: u64) -> Bullet {
        Bullet::new(position, Vec2::new(3.0, 10.0), 0.0, Vec2::ZERO, Timer::started(now_tick, 600))
    }

    fn steps(state: &mut GameState, n: usize) {
        for _ in 0..n {
            step(state);
        }
    }

    #[test]
    fn test_start_becomes_running_exactly_once() {
        let mut state = GameState::new(GameConfig::default());
        // Park the field far away so nothing collides
        for a in &mut state.asteroids {
            a.body.position = Vec2::new(-1000.0, -1000.0);
            a.velocity = Vec2::ZERO;
        }

        steps(&mut state, 59);
        assert_eq!(state.phase, GamePhase::Start);
        steps(&mut state, 1);
        assert_eq!(state.phase, GamePhase::Running);
        steps(&mut state, 120);
        assert_eq!(state.phase, GamePhase::Running);

        let transitions = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::PhaseChanged { .. }))
            .count();
        assert_eq!(transitions, 1);
    }

    #[test]
    fn test_start_ignores_input() {
        let mut state = GameState::new(GameConfig::default());
        let input = TickInput {
            thrust: true,
            fire: true,
            ..Default::default()
        };
        process_input(&mut state, &input);
        step(&mut state);
        assert!(state.bullets.is_empty());
        assert_eq!(state.player.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_bullet_destroys_asteroid_and_spawns_remnants() {
        let mut state = running_state();
        state.asteroids.push(still_asteroid(Vec2::new(100.0, 100.0)));
        state.asteroids.push(still_asteroid(Vec2::new(600.0, 100.0)));
        state.bullets.push(still_bullet(Vec2::new(118.0, 95.0), 0));

        step(&mut state);
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.asteroids[0].body.position.x, 600.0);
        assert!(state.bullets.is_empty());
        assert_eq!(state.remnants.len(), 10);
        assert!(
            state
                .events()
                .iter()
                .any(|e| matches!(e, GameEvent::AsteroidDestroyed { .. }))
        );
    }

    #[test]
    fn test_one_bullet_consumed_per_asteroid() {
        let mut state = running_state();
        state.asteroids.push(still_asteroid(Vec2::new(100.0, 100.0)));
        state.asteroids.push(still_asteroid(Vec2::new(600.0, 100.0)));
        // Two bullets on the same asteroid: the first in order is used up
        state.bullets.push(still_bullet(Vec2::new(118.0, 95.0), 0));
        state.bullets.push(still_bullet(Vec2::new(119.0, 96.0), 0));

        step(&mut state);
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].body.position, Vec2::new(119.0, 96.0));
    }

    #[test]
    fn test_clearing_field_increases_level() {
        let mut state = running_state();
        state.asteroids.push(still_asteroid(Vec2::new(100.0, 100.0)));
        state.bullets.push(still_bullet(Vec2::new(118.0, 95.0), 0));

        step(&mut state);
        assert_eq!(state.level, 2);
        assert_eq!(state.asteroids.len(), 10);
        assert!(
            state
                .events()
                .contains(&GameEvent::LevelCleared { level: 1 })
        );
    }

    #[test]
    fn test_collision_with_several_asteroids_ends_game_once() {
        let mut state = running_state();
        let ship = state.player.body.position;
        state.asteroids.push(still_asteroid(ship - Vec2::new(10.0, 10.0)));
        state.asteroids.push(still_asteroid(ship + Vec2::new(5.0, 15.0)));

        step(&mut state);
        assert_eq!(state.phase, GamePhase::Over);
        let events = state.drain_events();
        assert_eq!(
            events.iter().filter(|e| **e == GameEvent::PlayerDestroyed).count(),
            1
        );

        // Further steps while Over neither re-trigger nor move the ship
        let frozen = state.player.body.position;
        step(&mut state);
        assert_eq!(state.player.body.position, frozen);
        assert!(!state.drain_events().contains(&GameEvent::PlayerDestroyed));
    }

    #[test]
    fn test_over_restarts_after_delay() {
        let mut state = running_state();
        let ship = state.player.body.position;
        state.asteroids.push(still_asteroid(ship));
        state.level = 3;
        state.player.velocity = Vec2::new(30.0, 0.0);
        state.bullets.push(still_bullet(Vec2::new(700.0, 500.0), state.time_ticks));

        step(&mut state);
        assert_eq!(state.phase, GamePhase::Over);

        steps(&mut state, 59);
        assert_eq!(state.phase, GamePhase::Over);
        step(&mut state);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.level, 1);
        assert!(state.bullets.is_empty());
        assert_eq!(state.asteroids.len(), 5);
        assert_eq!(state.player.velocity, Vec2::ZERO);
        assert_eq!(state.player.body.rotation, 0.0);
    }

    #[test]
    fn test_fire_respects_reload() {
        let mut state = running_state();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        process_input(&mut state, &fire);
        process_input(&mut state, &fire);
        assert_eq!(state.bullets.len(), 1);

        // 0.3 s reload at 60 Hz is 18 steps
        steps(&mut state, 17);
        process_input(&mut state, &fire);
        assert_eq!(state.bullets.len(), 1);
        step(&mut state);
        process_input(&mut state, &fire);
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn test_bullets_expire_and_are_not_wrapped() {
        let mut state = running_state();
        // Keep the field occupied, away from the bullet's path
        state.asteroids.push(still_asteroid(Vec2::new(700.0, 500.0)));
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        process_input(&mut state, &fire);
        assert_eq!(state.bullets.len(), 1);

        // Lifetime 1.5 s = 90 steps; the bullet leaves the screen before that
        steps(&mut state, 89);
        assert_eq!(state.bullets.len(), 1);
        assert!(state.bullets[0].body.position.y < 0.0);
        step(&mut state);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_thrust_latched_for_single_step() {
        let mut state = running_state();
        let thrust = TickInput {
            thrust: true,
            ..Default::default()
        };
        process_input(&mut state, &thrust);
        steps(&mut state, 3);
        let config = GameConfig::default();
        let dt = config.update_interval();
        let d = config.player_decay;
        let expected = config.player_force * dt * d * d * d;
        assert_relative_eq!(-state.player.velocity.y, expected, max_relative = 1e-4);
    }

    #[test]
    fn test_asteroids_wrap_around() {
        let mut state = running_state();
        state.asteroids.push(Asteroid::new(
            Vec2::new(799.0, 300.0),
            40.0,
            0.0,
            0.0,
            Vec2::new(120.0, 0.0),
        ));
        step(&mut state);
        assert_eq!(state.asteroids[0].body.position.x, -40.0);
        assert_eq!(state.asteroids[0].velocity, Vec2::new(120.0, 0.0));
    }

    #[test]
    fn test_wrap_is_stable_at_edge() {
        let screen = Vec2::new(800.0, 600.0);
        let size = Vec2::splat(40.0);
        let wrapped = wrap_position(Vec2::new(840.0, 100.0), size, screen);
        assert_eq!(wrapped, Vec2::new(-40.0, 100.0));
        let mut pos = wrapped;
        for _ in 0..10 {
            pos = wrap_position(pos, size, screen);
            assert_eq!(pos, wrapped);
        }

        let top = wrap_position(Vec2::new(100.0, -41.0), size, screen);
        assert_eq!(top, Vec2::new(100.0, 600.0));
        assert_eq!(wrap_position(top, size, screen), top);
    }

    #[test]
    fn test_still_object_at_far_edge_stays_put() {
        let mut state = running_state();
        let size = 40.0;
        state.asteroids.push(Asteroid::new(
            Vec2::new(800.0 + size, 200.0),
            size,
            0.0,
            0.0,
            Vec2::ZERO,
        ));
        state.player.body.position = Vec2::new(300.0, 500.0);
        step(&mut state);
        let wrapped = state.asteroids[0].body.position;
        assert_eq!(wrapped, Vec2::new(-size, 200.0));
        steps(&mut state, 5);
        assert_eq!(state.asteroids[0].body.position, wrapped);
    }

    #[test]
    fn test_deterministic_replay() {
        let script = [
            (TickInput::default(), 70),
            (
                TickInput {
                    thrust: true,
                    turn_right: true,
                    fire: true,
                    ..Default::default()
                },
                3,
            ),
            (
                TickInput {
                    turn_left: true,
                    fire: true,
                    ..Default::default()
                },
                2,
            ),
            (TickInput::default(), 200),
        ];

        let run = || {
            let mut state = GameState::with_seed(GameConfig::default(), 1234);
            for (input, n) in &script {
                for _ in 0..*n {
                    process_input(&mut state, input);
                    step(&mut state);
                }
            }
            state
        };

        let a = run();
        let b = run();
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.level, b.level);
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.player, b.player);
        assert_eq!(a.asteroids, b.asteroids);
        assert_eq!(a.bullets, b.bullets);
        assert_eq!(a.remnants, b.remnants);
        for (x, y) in a.asteroids.iter().zip(&b.asteroids) {
            assert_eq!(x.body.position.x.to_bits(), y.body.position.x.to_bits());
            assert_eq!(x.body.rotation.to_bits(), y.body.rotation.to_bits());
        }
    }

    #[test]
    fn test_tick_input_from_keyboard() {
        let mut keyboard = KeyboardState::new();
        keyboard.set_key(keys::SPACE, true);
        keyboard.set_key(keys::LEFT, true);
        let input = TickInput::from_input(&keyboard);
        assert!(input.fire && input.turn_left);
        assert!(!input.thrust && !input.turn_right);
    }

    fn park_field(state: &mut GameState) {
        for a in &mut state.asteroids {
            a.body.position = Vec2::new(700.0, 500.0);
            a.velocity = Vec2::ZERO;
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_bullet_expires_exactly_lifetime_after_firing(fire_tick in 0u64..20_000) {
            let mut state = running_state();
            state.time_ticks = fire_tick;
            state.asteroids.push(still_asteroid(Vec2::new(700.0, 500.0)));
            let fire = TickInput {
                fire: true,
                ..Default::default()
            };
            process_input(&mut state, &fire);
            prop_assert_eq!(state.bullets.len(), 1);

            let lifetime = state.config.ticks(state.config.bullet_lifetime());
            prop_assert_eq!(lifetime, 90);
            steps(&mut state, lifetime as usize - 1);
            prop_assert_eq!(state.bullets.len(), 1);
            step(&mut state);
            prop_assert!(state.bullets.is_empty());
        }

        #[test]
        fn prop_start_lasts_exactly_state_delay(start_tick in 0u64..20_000) {
            let mut state = GameState::new(GameConfig::default());
            state.time_ticks = start_tick;
            state.restart();
            park_field(&mut state);

            steps(&mut state, 59);
            prop_assert_eq!(state.phase, GamePhase::Start);
            step(&mut state);
            prop_assert_eq!(state.phase, GamePhase::Running);
        }

        #[test]
        fn prop_remnants_live_exactly_their_lifetime(spawn_tick in 0u64..20_000) {
            let mut state = GameState::new(GameConfig::default());
            state.time_ticks = spawn_tick;
            state.create_remnants(Vec2::new(200.0, 200.0));

            steps(&mut state, 29);
            prop_assert_eq!(state.remnants.len(), 10);
            step(&mut state);
            prop_assert!(state.remnants.is_empty());
        }

        #[test]
        fn prop_wrap_is_idempotent(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            w in 1.0f32..100.0,
            h in 1.0f32..100.0,
        ) {
            let screen = Vec2::new(800.0, 600.0);
            let size = Vec2::new(w, h);
            let once = wrap_position(Vec2::new(x, y), size, screen);
            prop_assert_eq!(wrap_position(once, size, screen), once);
        }
    }
}
