use crate::composition::scene::{DrawOp, OpKind, Scene};
use crate::foundation::color::Rgb;
use crate::foundation::core::Point;
use crate::foundation::error::{PosterError, PosterResult};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings, RenderTarget};

/// CPU rasterizer built on `vello_cpu`.
pub struct CpuBackend {
    settings: RenderSettings,
}

impl CpuBackend {
    /// Build a backend with the given settings.
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(level = "debug", skip_all, fields(w = target.width, h = target.height))]
    fn render_scene(&mut self, scene: &Scene, target: &RenderTarget) -> PosterResult<FrameRGBA> {
        let width_u16: u16 = target
            .width
            .try_into()
            .map_err(|_| PosterError::validation("canvas width exceeds u16"))?;
        let height_u16: u16 = target
            .height
            .try_into()
            .map_err(|_| PosterError::validation("canvas height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(PosterError::validation("canvas must be at least 1x1 pixels"));
        }
        let view = target.view;
        if !(view.width() > 0.0 && view.height() > 0.0) {
            return Err(PosterError::render("view rectangle must have a positive area"));
        }

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width_u16),
                f64::from(height_u16),
            ));
        }

        let mapper = PixelMapper::new(target);
        let mut drawn = 0usize;
        for op in scene.draw_ops() {
            if draw_op(&mut ctx, op, &mapper, target.px_per_pt)? {
                drawn += 1;
            }
        }
        tracing::debug!(ops = drawn, "scene rasterized");

        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: target.width,
            height: target.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

/// Maps scene coordinates (y up) to pixel coordinates (y down).
struct PixelMapper {
    x0: f64,
    y1: f64,
    sx: f64,
    sy: f64,
}

impl PixelMapper {
    fn new(target: &RenderTarget) -> Self {
        let view = target.view;
        Self {
            x0: view.x0,
            y1: view.y1,
            sx: f64::from(target.width) / view.width(),
            sy: f64::from(target.height) / view.height(),
        }
    }

    fn map(&self, p: Point) -> vello_cpu::kurbo::Point {
        vello_cpu::kurbo::Point::new((p.x - self.x0) * self.sx, (self.y1 - p.y) * self.sy)
    }
}

fn color_to_cpu(color: Rgb) -> vello_cpu::peniko::Color {
    let [r, g, b] = color.to_rgb8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, 255)
}

fn polyline_to_cpu(
    points: &[Point],
    mapper: &PixelMapper,
    closed: bool,
) -> PosterResult<vello_cpu::kurbo::BezPath> {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for (i, p) in points.iter().enumerate() {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(PosterError::render(format!(
                "non-finite point at index {i}"
            )));
        }
        let q = mapper.map(*p);
        if i == 0 {
            out.move_to(q);
        } else {
            out.line_to(q);
        }
    }
    if closed {
        out.close_path();
    }
    Ok(out)
}

// Returns whether anything was drawn.
fn draw_op(
    ctx: &mut vello_cpu::RenderContext,
    op: &DrawOp,
    mapper: &PixelMapper,
    px_per_pt: f64,
) -> PosterResult<bool> {
    let alpha = op.alpha.clamp(0.0, 1.0) as f32;
    if alpha <= 0.0 {
        return Ok(false);
    }

    let path = match op.kind {
        OpKind::Fill if op.points.len() >= 3 => polyline_to_cpu(&op.points, mapper, true)?,
        OpKind::Stroke { .. } if op.points.len() >= 2 => {
            polyline_to_cpu(&op.points, mapper, false)?
        }
        _ => return Ok(false),
    };

    ctx.set_paint(color_to_cpu(op.color));
    if alpha < 1.0 {
        ctx.push_opacity_layer(alpha);
    }
    match op.kind {
        OpKind::Fill => ctx.fill_path(&path),
        OpKind::Stroke { width_pt } => {
            let width = (width_pt * px_per_pt).max(0.0);
            ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(width)
                    .with_caps(vello_cpu::kurbo::Cap::Round)
                    .with_join(vello_cpu::kurbo::Join::Round),
            );
            ctx.stroke_path(&path);
        }
    }
    if alpha < 1.0 {
        ctx.pop_layer();
    }
    Ok(true)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
