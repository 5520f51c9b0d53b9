use std::f64::consts::TAU;

use crate::foundation::core::{Point, PointSeq};
use crate::random::streams::RandomStreams;

/// Standard deviation of the per-point jitter applied to every petal.
pub const PETAL_JITTER_STD: f64 = 0.01;

/// Radial petals around `center`, one open curve per petal.
///
/// Petal `j` points at angle `2*pi*j / petals` and runs from the center out to `radius`
/// in `points` evenly spaced steps (both ends included). Every point gets independent
/// Gaussian noise (mean 0, std [`PETAL_JITTER_STD`]) on x, then on y, from the vector
/// stream. `petals == 0` yields no curves.
pub fn flower(
    center: Point,
    petals: usize,
    radius: f64,
    points: usize,
    rng: &mut RandomStreams,
) -> Vec<PointSeq> {
    (0..petals)
        .map(|j| {
            let angle = TAU * j as f64 / petals as f64;
            let (dx, dy) = (angle.cos(), angle.sin());
            let nx = rng.normal_array(points, 0.0, PETAL_JITTER_STD);
            let ny = rng.normal_array(points, 0.0, PETAL_JITTER_STD);
            (0..points)
                .map(|i| {
                    let t = linspace_step(i, points);
                    Point::new(
                        center.x + t * radius * dx + nx[i],
                        center.y + t * radius * dy + ny[i],
                    )
                })
                .collect()
        })
        .collect()
}

/// Re-jitter a curve point by point with Gaussian noise (x draws first, then y).
pub fn jitter_curve(curve: &[Point], std_dev: f64, rng: &mut RandomStreams) -> PointSeq {
    let nx = rng.normal_array(curve.len(), 0.0, std_dev);
    let ny = rng.normal_array(curve.len(), 0.0, std_dev);
    curve
        .iter()
        .zip(nx.iter().zip(&ny))
        .map(|(p, (ex, ey))| Point::new(p.x + ex, p.y + ey))
        .collect()
}

/// `i / (n - 1)`, the `i`-th of `n` evenly spaced values over `[0, 1]`.
pub(crate) fn linspace_step(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        i as f64 / (n - 1) as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/flower.rs"]
mod tests;
