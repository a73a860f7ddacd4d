//! Frame driver
//!
//! Couples the fixed-timestep simulation to a variable-rate outer loop. Each
//! frame polls input once, catches the simulation up to the wall clock, then
//! draws and presents.

use crate::config::GameConfig;
use crate::platform::{Clock, Input, Window, keys};
use crate::renderer::{Renderer, SpriteTextures, render_frame};
use crate::sim::{GameEvent, GameState, TickInput, process_input, step};

/// What one call to `run_frame` did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Simulation steps taken to catch up
    pub steps: u32,
    pub events: Vec<GameEvent>,
}

pub struct Game {
    pub state: GameState,
    /// Wall-clock time the simulation has been advanced to
    last_updated: f64,
    /// Seconds per simulation step
    interval: f64,
}

impl Game {
    /// Start a new session; `now` is the current reading of the frame clock
    pub fn new(config: GameConfig, now: f64) -> Self {
        let interval = 1.0 / f64::from(config.updates_per_sec);
        log::info!(
            "New game: {}x{} at {} updates/s, seed {}",
            config.screen_width,
            config.screen_height,
            config.updates_per_sec,
            config.seed
        );
        Self {
            state: GameState::new(config),
            last_updated: now,
            interval,
        }
    }

    pub fn last_updated(&self) -> f64 {
        self.last_updated
    }

    /// Run one outer-loop iteration.
    ///
    /// Steering input reaches only the first catch-up step of the frame; a
    /// frame that takes no step still fires if the reload allows. On the frame
    /// Escape closes the window, the ship controls are ignored.
    pub fn run_frame(
        &mut self,
        clock: &impl Clock,
        input: &impl Input,
        window: &mut impl Window,
        renderer: &mut impl Renderer,
        textures: &SpriteTextures,
    ) -> FrameReport {
        if input.is_key_pressed(keys::ESCAPE) {
            log::info!("Escape pressed, closing");
            window.set_to_close();
        } else {
            process_input(&mut self.state, &TickInput::from_input(input));
        }

        let now = clock.now();
        let mut steps = 0;
        while self.last_updated + self.interval <= now {
            self.last_updated += self.interval;
            step(&mut self.state);
            steps += 1;
        }
        if steps > 1 {
            log::trace!("Caught up {} steps", steps);
        }

        render_frame(&self.state, textures, renderer);
        window.swap_buffers();

        FrameReport {
            steps,
            events: self.state.drain_events(),
        }
    }

    /// Drive frames until the window asks to close; returns frames run
    pub fn run(
        &mut self,
        clock: &impl Clock,
        input: &impl Input,
        window: &mut impl Window,
        renderer: &mut impl Renderer,
        textures: &SpriteTextures,
    ) -> u64 {
        let mut frames = 0;
        while !window.should_close() {
            self.run_frame(clock, input, window, renderer, textures);
            frames += 1;
        }
        frames
    }
}
