//! CPU-side quad batching
//!
//! Collects draw calls into per-texture vertex runs, in submission order,
//! ready for a GPU backend to upload with one buffer write per run.

use glam::{Vec2, Vec3};

use super::Renderer;
use super::resources::TextureId;
use super::shapes::quad;
use super::vertex::QuadVertex;

/// Consecutive quads sharing one texture
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    pub texture: TextureId,
    pub vertices: Vec<QuadVertex>,
}

impl DrawBatch {
    /// Raw vertex data for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 6
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuadBatch {
    batches: Vec<DrawBatch>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded for the previous frame
    pub fn clear(&mut self) {
        self.batches.clear();
    }

    pub fn batches(&self) -> &[DrawBatch] {
        &self.batches
    }

    pub fn quad_count(&self) -> usize {
        self.batches.iter().map(DrawBatch::quad_count).sum()
    }
}

impl Renderer for QuadBatch {
    fn draw_quad(&mut self, texture: TextureId, position: Vec2, size: Vec2, rotation: f32, color: Vec3) {
        let vertices = quad(position, size, rotation, color);
        match self.batches.last_mut() {
            Some(batch) if batch.texture == texture => batch.vertices.extend_from_slice(&vertices),
            _ => self.batches.push(DrawBatch {
                texture,
                vertices: vertices.to_vec(),
            }),
        }
    }

    fn begin_frame(&mut self) {
        self.clear();
    }
}
