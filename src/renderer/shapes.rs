//! Shape generation for sprite quads

use glam::{Vec2, Vec3};

use super::vertex::{QuadVertex, rgba};
use crate::sim::geometry::model_transform;

/// Unit-square corners with their texture coordinates, as two triangles
const UNIT_QUAD: [(Vec2, [f32; 2]); 6] = [
    (Vec2::new(0.0, 1.0), [0.0, 1.0]),
    (Vec2::new(1.0, 0.0), [1.0, 0.0]),
    (Vec2::new(0.0, 0.0), [0.0, 0.0]),
    (Vec2::new(0.0, 1.0), [0.0, 1.0]),
    (Vec2::new(1.0, 1.0), [1.0, 1.0]),
    (Vec2::new(1.0, 0.0), [1.0, 0.0]),
];

/// Six vertices for a sprite quad, transformed exactly like collision bounds
pub fn quad(position: Vec2, size: Vec2, rotation: f32, color: Vec3) -> [QuadVertex; 6] {
    let model = model_transform(position, size, rotation);
    let color = rgba(color);
    UNIT_QUAD.map(|(corner, [u, v])| {
        let p = model.transform_point2(corner);
        QuadVertex::new(p.x, p.y, u, v, color)
    })
}
