//! Polygon geometry for collision bounds
//!
//! Entities carry their collision shape in normalized [0,1]² local space. These
//! helpers move that shape into world space and test two shapes for overlap.
//!
//! Angles are in degrees. `direction(0)` points along +x; with the screen's
//! y axis pointing down, positive angles turn clockwise on screen.

use glam::{Affine2, Vec2};

/// Build the model transform for a sprite: scale the unit square to `size`,
/// rotate it about its own centre by `rotation` degrees, then move its
/// top-left corner to `position`.
pub fn model_transform(position: Vec2, size: Vec2, rotation: f32) -> Affine2 {
    let half = size * 0.5;
    Affine2::from_translation(position + half)
        * Affine2::from_angle(rotation.to_radians())
        * Affine2::from_translation(-half)
        * Affine2::from_scale(size)
}

/// Transform a single local-space point into world space
#[inline]
pub fn transform_point(local: Vec2, position: Vec2, size: Vec2, rotation: f32) -> Vec2 {
    model_transform(position, size, rotation).transform_point2(local)
}

/// Transform a local-space polygon into world space
pub fn transform_polygon(local: &[Vec2], position: Vec2, size: Vec2, rotation: f32) -> Vec<Vec2> {
    let model = model_transform(position, size, rotation);
    local.iter().map(|&p| model.transform_point2(p)).collect()
}

/// Winding of an ordered triplet of points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Colinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of the triplet (p, q, r) from the sign of the cross product
pub fn orientation(p: Vec2, q: Vec2, r: Vec2) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == 0.0 {
        Orientation::Colinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Whether `q` lies within the bounding box of segment `pr`.
/// Only meaningful when p, q and r are colinear.
pub fn on_segment(p: Vec2, q: Vec2, r: Vec2) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Whether segment `p1q1` intersects segment `p2q2` (touching counts)
pub fn segments_intersect(p1: Vec2, q1: Vec2, p2: Vec2, q2: Vec2) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Colinear endpoints lying on the other segment
    (o1 == Orientation::Colinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Colinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Colinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Colinear && on_segment(p2, q1, q2))
}

/// Iterate the closed edges of a polygon: (last, first), (first, second), ...
fn edges(polygon: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let prev = polygon.last().copied();
    polygon.iter().scan(prev, |prev, &curr| {
        let edge = ((*prev)?, curr);
        *prev = Some(curr);
        Some(edge)
    })
}

/// True iff any edge of `a` crosses any edge of `b`.
///
/// This is an edge-crossing test only: a polygon lying entirely inside the
/// other without any crossing edges is reported as non-intersecting. The ship,
/// asteroid and bullet shapes are thin enough that this does not occur in play.
/// Empty polygons never intersect anything.
pub fn polygons_intersect(a: &[Vec2], b: &[Vec2]) -> bool {
    edges(a).any(|(a1, a2)| edges(b).any(|(b1, b2)| segments_intersect(a1, a2, b1, b2)))
}

/// Unit vector for an angle in degrees (0 = +x)
#[inline]
pub fn direction(angle_deg: f32) -> Vec2 {
    Vec2::from_angle(angle_deg.to_radians())
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn clamp_angle(angle_deg: f32) -> f32 {
    let wrapped = angle_deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
