//! Rendering front end
//!
//! The simulation never draws. Once per frame `render_frame` walks the game
//! state and submits one textured quad per visible entity to a `Renderer`
//! backend, in a fixed back-to-front order.

pub mod batch;
pub mod resources;
pub mod shapes;
pub mod vertex;

use glam::{Vec2, Vec3};

pub use batch::{DrawBatch, QuadBatch};
pub use resources::{ResourceContext, ResourceError, SpriteTextures, TextureId};
pub use vertex::QuadVertex;

use crate::sim::{Body, GamePhase, GameState};

/// Anything that can draw a tinted, rotated, textured quad
pub trait Renderer {
    /// `position` is the top-left corner before rotation; `rotation` is in
    /// degrees about the quad centre
    fn draw_quad(&mut self, texture: TextureId, position: Vec2, size: Vec2, rotation: f32, color: Vec3);

    /// Called before the first quad of each frame
    fn begin_frame(&mut self) {}
}

fn draw_body(renderer: &mut impl Renderer, textures: &SpriteTextures, body: &Body) {
    renderer.draw_quad(
        textures.for_sprite(body.sprite),
        body.position,
        body.size,
        body.rotation,
        body.color,
    );
}

/// Draw one frame: backdrop, ship, asteroids, bullets, debris, level icons
pub fn render_frame(state: &GameState, textures: &SpriteTextures, renderer: &mut impl Renderer) {
    let config = &state.config;
    renderer.begin_frame();
    renderer.draw_quad(
        textures.background,
        Vec2::ZERO,
        config.screen_size(),
        0.0,
        vertex::colors::WHITE,
    );

    if state.phase != GamePhase::Over {
        draw_body(renderer, textures, &state.player.body);
    }
    for asteroid in &state.asteroids {
        draw_body(renderer, textures, &asteroid.body);
    }
    for bullet in &state.bullets {
        draw_body(renderer, textures, &bullet.body);
    }
    for remnant in &state.remnants {
        draw_body(renderer, textures, &remnant.body);
    }

    for position in level_icon_positions(state) {
        renderer.draw_quad(
            textures.ship,
            position,
            config.level_icon_size,
            0.0,
            Vec3::from_array(config.level_icon_color),
        );
    }
}

/// Top-left corners of the small ships that show the current level,
/// laid out in rows starting below the top-left corner
pub fn level_icon_positions(state: &GameState) -> Vec<Vec2> {
    let config = &state.config;
    let icon = config.level_icon_size;
    let per_row = config.level_icons_per_row.max(1);
    let mut pos = Vec2::ZERO;
    let mut positions = Vec::with_capacity(state.level as usize);
    for i in 0..state.level {
        if i % per_row == 0 {
            pos.x = config.level_icon_offset;
            pos.y += icon.y;
        } else {
            pos.x += icon.x;
        }
        positions.push(pos);
    }
    positions
}
