use std::f64::consts::TAU;

use crate::foundation::core::{Point, PointSeq, Vec2};
use crate::shapes::flower::linspace_step;

/// A clean circle of `points` samples over `[0, 2*pi]` (the start point is repeated at
/// the end). Consumes no randomness.
pub fn sphere(center: Point, radius: f64, points: usize) -> PointSeq {
    (0..points)
        .map(|i| {
            let t = TAU * linspace_step(i, points);
            Point::new(center.x + radius * t.cos(), center.y + radius * t.sin())
        })
        .collect()
}

/// Offset copies of `outline` forming a drop shadow, back to front.
///
/// Copy `i` (0-indexed from the back) is shifted by `offset * (layers - i)` in x and by
/// the negative of that in y, so the farthest copy is drawn first.
pub fn shadow_stack(outline: &[Point], layers: usize, offset: f64) -> Vec<PointSeq> {
    (0..layers)
        .map(|i| {
            let shift = offset * (layers - i) as f64;
            let delta = Vec2::new(shift, -shift);
            outline.iter().map(|p| *p + delta).collect()
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/sphere.rs"]
mod tests;
