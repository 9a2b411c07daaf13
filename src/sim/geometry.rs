//! Vector helpers and axis-aligned boxes
//!
//! Field space has its origin at the top-left corner, +x to the right and
//! +y downward.

use glam::Vec2;

/// Euclidean length of `v`
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Unit vector in the direction of `v`
///
/// # Panics
///
/// Panics if `v` has zero (or non-finite) length.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    match try_normalize(v) {
        Some(unit) => unit,
        None => panic!("cannot normalize zero-length vector {v}"),
    }
}

/// Unit vector in the direction of `v`, or `None` if `v` has no direction
#[inline]
pub fn try_normalize(v: Vec2) -> Option<Vec2> {
    let len = magnitude(v);
    if len > 0.0 && len.is_finite() {
        Some(v / len)
    } else {
        None
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Overlap with positive area; boxes that only share an edge don't count
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}
