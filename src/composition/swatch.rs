use crate::composition::scene::{DrawOp, Scene, SceneLayer};
use crate::foundation::color::Rgb;
use crate::foundation::core::Point;
use crate::foundation::error::{PosterError, PosterResult};

/// A preview strip: one opaque cell per palette color, left to right across the view.
pub fn palette_swatch(palette: &[Rgb], background: Rgb) -> PosterResult<Scene> {
    if palette.is_empty() {
        return Err(PosterError::palette("cannot draw a swatch of an empty palette"));
    }

    let mut scene = Scene::new(background);
    let n = palette.len() as f64;
    for (i, &color) in palette.iter().enumerate() {
        let (x0, x1) = (i as f64 / n, (i + 1) as f64 / n);
        let cell = vec![
            Point::new(x0, 0.0),
            Point::new(x1, 0.0),
            Point::new(x1, 1.0),
            Point::new(x0, 1.0),
        ];
        scene.layers.push(SceneLayer {
            center: Point::new((x0 + x1) / 2.0, 0.5),
            color,
            alpha: 1.0,
            ops: vec![DrawOp::fill(cell, color, 1.0)],
        });
    }
    Ok(scene)
}

#[cfg(test)]
#[path = "../../tests/unit/composition/swatch.rs"]
mod tests;
