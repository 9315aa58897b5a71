//! 2D geometry primitives for tile-edge collision
//!
//! All collision resolution happens in the horizontal XZ plane; these
//! helpers convert between 3D positions and their XZ projections and
//! implement the two primitives the resolver is built on: closest point
//! on a segment, and the push-out displacement for an overlapping circle.

use glam::{Vec2, Vec3};

/// Project a 3D position onto the horizontal XZ plane.
pub fn xz(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Lift an XZ-plane position back into 3D at height `y`.
pub fn from_xz(v: Vec2, y: f32) -> Vec3 {
    Vec3::new(v.x, y, v.y)
}

/// Closest point to `p` on the segment from `a` to `b`.
///
/// The projection parameter is clamped to the endpoints, so the result
/// always lies on the segment. A degenerate segment (`a == b`) returns `a`.
pub fn closest_point_on_segment(a: Vec2, b: Vec2, p: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return a;
    }
    let t = (p - a).dot(ab) / len_sq;
    if t <= 0.0 {
        a
    } else if t >= 1.0 {
        b
    } else {
        a.lerp(b, t)
    }
}

/// Displacement that moves a circle at `center` with radius `radius` out
/// of contact with the point `near`, pushing along `push_dir`.
///
/// Returns zero when the circle does not overlap `near`, or when
/// `push_dir` points toward the contact (the circle is approaching from
/// outside that direction's half-space and this edge is not the one
/// responsible for separating it).
pub fn unclip_circle(center: Vec2, radius: f32, near: Vec2, push_dir: Vec2) -> Vec2 {
    let dist = center.distance(near) - radius;
    if dist >= 0.0 {
        return Vec2::ZERO;
    }
    let dir = (near - center).normalize_or_zero();
    let dot = push_dir.dot(dir);
    if dot > 0.0 {
        return Vec2::ZERO;
    }
    // dot <= 0 and dist < 0, so the product is a non-negative push length.
    push_dir * (dot * dist)
}
