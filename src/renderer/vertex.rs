//! Vertex types for textured 2D quads

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Screen-space vertex with texture coordinates and tint
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl QuadVertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }

    /// Bytes per vertex in a vertex buffer
    pub const STRIDE: usize = std::mem::size_of::<QuadVertex>();
}

/// Opaque RGBA from an RGB tint
#[inline]
pub fn rgba(color: Vec3) -> [f32; 4] {
    [color.x, color.y, color.z, 1.0]
}

/// Colors for game elements
pub mod colors {
    use glam::Vec3;

    /// Untinted sprite
    pub const WHITE: Vec3 = Vec3::ONE;
}
