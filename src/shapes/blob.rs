use std::f64::consts::TAU;

use crate::foundation::core::{Point, PointSeq};
use crate::random::streams::RandomStreams;

/// A closed, radially wobbled loop around `center`.
///
/// `points` angles are spaced evenly over a full turn (the end point is not repeated).
/// Each point's radius is `radius * (1 + wobble * (u - 0.5))` with `u` drawn from the
/// vector stream, so `wobble == 0` yields an exact circle. Large wobble values may make
/// the loop self-intersect.
pub fn blob(
    center: Point,
    radius: f64,
    points: usize,
    wobble: f64,
    rng: &mut RandomStreams,
) -> PointSeq {
    let jitter = rng.unit_array(points);
    jitter
        .into_iter()
        .enumerate()
        .map(|(i, u)| {
            let angle = TAU * i as f64 / points as f64;
            let r = radius * (1.0 + wobble * (u - 0.5));
            Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/blob.rs"]
mod tests;
