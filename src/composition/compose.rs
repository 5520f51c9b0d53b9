use crate::composition::model::{
    BlobParams, ComposeParams, FlowerParams, Placement, ShapeFamily, SphereParams,
};
use crate::composition::scene::{DrawOp, Scene, SceneLayer};
use crate::foundation::color::Rgb;
use crate::foundation::core::{Point, PointSeq, Span};
use crate::foundation::error::{PosterError, PosterResult};
use crate::random::streams::RandomStreams;
use crate::shapes::{blob::blob, flower, sphere};

/// Color of the sphere drop shadow.
pub const SHADOW_GRAY: Rgb = Rgb::gray(0.5);
/// Opacity of each sphere shadow copy.
pub const SHADOW_ALPHA: f64 = 0.2;

/// Layer `params.layers` shapes into a scene over `background`.
///
/// For every layer the streams are consumed in a fixed order: center (scatter only,
/// x then y), shape parameters, shape points, palette pick, alpha. The result is a pure
/// function of the arguments and the incoming stream state.
///
/// Concentric placement fixes center, radius, color and alpha per layer, so only the
/// remaining shape parameters and points draw randomness. Flowers with
/// `color_per_stroke` pick color then alpha once per stroke, in drawing order.
///
/// Nothing is partially built: invalid parameters or an empty palette fail before any
/// randomness is drawn.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(layers = params.layers, family = params.shape.label(), colors = palette.len())
)]
pub fn compose(
    params: &ComposeParams,
    palette: &[Rgb],
    background: Rgb,
    rng: &mut RandomStreams,
) -> PosterResult<Scene> {
    if palette.is_empty() {
        return Err(PosterError::palette("cannot compose with an empty palette"));
    }
    params.validate()?;

    let mut scene = Scene::new(background);
    scene.layers.reserve(params.layers);

    for idx in 0..params.layers {
        let (center, ring) = match &params.placement {
            Placement::Scatter => {
                let x = rng.unit();
                let y = rng.unit();
                (Point::new(x, y), None)
            }
            Placement::Fixed { centers } => (centers[idx], None),
            Placement::Concentric(rings) => (
                rings.center,
                Some(Ring {
                    radius: rings.radius(idx),
                    color: palette[idx % palette.len()],
                    alpha: rings.alpha(idx),
                }),
            ),
        };
        let style = LayerStyle {
            palette,
            params,
            ring,
        };

        let layer = match &params.shape {
            ShapeFamily::Blob(p) => blob_layer(p, center, &style, rng),
            ShapeFamily::Flower(p) => flower_layer(p, center, &style, rng),
            ShapeFamily::Sphere(p) => sphere_layer(p, center, &style, rng),
        }?;
        tracing::debug!(
            layer = idx,
            x = center.x,
            y = center.y,
            alpha = layer.alpha,
            ops = layer.ops.len(),
            "layer composed"
        );
        scene.layers.push(layer);
    }

    tracing::info!(
        layers = scene.layers.len(),
        fills = scene.fill_count(),
        strokes = scene.stroke_count(),
        "scene composed"
    );
    Ok(scene)
}

// Radius and style of one concentric layer.
#[derive(Clone, Copy)]
struct Ring {
    radius: f64,
    color: Rgb,
    alpha: f64,
}

struct LayerStyle<'a> {
    palette: &'a [Rgb],
    params: &'a ComposeParams,
    ring: Option<Ring>,
}

impl LayerStyle<'_> {
    fn radius(&self, span: Span, rng: &mut RandomStreams) -> f64 {
        match self.ring {
            Some(ring) => ring.radius,
            None => span.sample(rng),
        }
    }

    fn pick(&self, rng: &mut RandomStreams) -> PosterResult<(Rgb, f64)> {
        if let Some(ring) = self.ring {
            return Ok((ring.color, ring.alpha));
        }
        let color = *rng
            .choose(self.palette)
            .ok_or_else(|| PosterError::palette("cannot compose with an empty palette"))?;
        let alpha = self.params.alpha.sample(rng);
        Ok((color, alpha))
    }
}

fn blob_layer(
    p: &BlobParams,
    center: Point,
    style: &LayerStyle<'_>,
    rng: &mut RandomStreams,
) -> PosterResult<SceneLayer> {
    let radius = style.radius(p.radius, rng);
    let wobble = p.wobble.sample(rng);
    let outline = blob(center, radius, p.points, wobble, rng);
    let (color, alpha) = style.pick(rng)?;
    Ok(SceneLayer {
        center,
        color,
        alpha,
        ops: vec![DrawOp::fill(outline, color, alpha)],
    })
}

fn flower_layer(
    p: &FlowerParams,
    center: Point,
    style: &LayerStyle<'_>,
    rng: &mut RandomStreams,
) -> PosterResult<SceneLayer> {
    let petals = p.petals.sample(rng) as usize;
    let radius = style.radius(p.radius, rng);
    let curves = flower::flower(center, petals, radius, p.points, rng);

    // Strands go back to front; the back strand is the widest.
    let mut strands: Vec<(f64, Vec<PointSeq>)> = Vec::with_capacity(p.strands);
    for l in 0..p.strands {
        let width = p.line_width + (p.strands - 1 - l) as f64;
        let copies = if p.strand_jitter > 0.0 {
            curves
                .iter()
                .map(|c| flower::jitter_curve(c, p.strand_jitter, rng))
                .collect()
        } else {
            curves.clone()
        };
        strands.push((width, copies));
    }

    let (color, alpha) = style.pick(rng)?;
    let mut ops = Vec::with_capacity(p.strands * petals);
    for (width, copies) in strands {
        for pts in copies {
            let (c, a) = if p.color_per_stroke && !ops.is_empty() {
                style.pick(rng)?
            } else {
                (color, alpha)
            };
            ops.push(DrawOp::stroke(pts, width, c, a));
        }
    }
    Ok(SceneLayer {
        center,
        color,
        alpha,
        ops,
    })
}

fn sphere_layer(
    p: &SphereParams,
    center: Point,
    style: &LayerStyle<'_>,
    rng: &mut RandomStreams,
) -> PosterResult<SceneLayer> {
    let radius = style.radius(p.radius, rng);
    let outline = sphere::sphere(center, radius, p.points);
    let shadows = sphere::shadow_stack(&outline, p.shadow_layers, p.shadow_offset);
    let (color, alpha) = style.pick(rng)?;

    let mut ops: Vec<DrawOp> = shadows
        .into_iter()
        .map(|pts| DrawOp::fill(pts, SHADOW_GRAY, SHADOW_ALPHA))
        .collect();
    ops.push(DrawOp::fill(outline, color, alpha));
    Ok(SceneLayer {
        center,
        color,
        alpha,
        ops,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/composition/compose.rs"]
mod tests;
