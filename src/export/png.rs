use std::io::Cursor;
use std::path::Path;

use anyhow::Context as _;

use crate::composition::scene::Scene;
use crate::foundation::core::Rect;
use crate::foundation::error::{PosterError, PosterResult};
use crate::foundation::fsio::ensure_parent_dir;
use crate::render::backend::{RenderBackend, RenderTarget};
use crate::render::composite::flatten_over;

/// Points per inch; stroke widths are given in points.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Relative margin added around content that spills outside the view in [`Framing::Fit`].
pub const FIT_MARGIN: f64 = 0.05;

/// Which part of the scene is mapped onto the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framing {
    /// The nominal view grown to include every drawn point, plus a margin when it grew.
    #[default]
    Fit,
    /// Only the nominal view; content outside it is clipped.
    View,
}

/// Page size, resolution and cropping of an exported image.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Page width in inches.
    pub width_in: f64,
    /// Page height in inches.
    pub height_in: f64,
    /// Pixels per inch.
    pub dpi: u32,
    /// Scene-to-page mapping.
    pub framing: Framing,
    /// Crop to the painted pixels.
    pub crop: bool,
    /// Padding kept around painted pixels when cropping, in inches.
    pub pad_in: f64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            width_in: 6.0,
            height_in: 8.0,
            dpi: 200,
            framing: Framing::Fit,
            crop: true,
            pad_in: 0.1,
        }
    }
}

impl ExportSettings {
    /// Settings for a palette preview strip (6 x 1.6 in).
    pub fn swatch() -> Self {
        Self {
            width_in: 6.0,
            height_in: 1.6,
            ..Self::default()
        }
    }

    /// Check the page size, resolution and padding.
    pub fn validate(&self) -> PosterResult<()> {
        for (what, v) in [("width_in", self.width_in), ("height_in", self.height_in)] {
            if !(v.is_finite() && v > 0.0) {
                return Err(PosterError::validation(format!(
                    "{what} must be finite and > 0"
                )));
            }
        }
        if self.dpi == 0 {
            return Err(PosterError::validation("dpi must be >= 1"));
        }
        if !(self.pad_in.is_finite() && self.pad_in >= 0.0) {
            return Err(PosterError::validation("pad_in must be finite and >= 0"));
        }
        Ok(())
    }

    /// Canvas size in pixels; both sides must fit in `u16`.
    pub fn pixel_size(&self) -> PosterResult<(u32, u32)> {
        self.validate()?;
        let dpi = f64::from(self.dpi);
        let side = |inches: f64, what: &str| -> PosterResult<u32> {
            let px = (inches * dpi).round();
            if px < 1.0 || px > f64::from(u16::MAX) {
                return Err(PosterError::validation(format!(
                    "{what} of {px} px is outside 1..={}",
                    u16::MAX
                )));
            }
            Ok(px as u32)
        };
        Ok((
            side(self.width_in, "canvas width")?,
            side(self.height_in, "canvas height")?,
        ))
    }

    fn pad_px(&self) -> u32 {
        (self.pad_in * f64::from(self.dpi)).round() as u32
    }
}

/// An encoded PNG.
#[derive(Clone, Debug)]
pub struct PngImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// The encoded file.
    pub bytes: Vec<u8>,
}

impl PngImage {
    /// Write the encoded bytes to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> PosterResult<()> {
        ensure_parent_dir(path)?;
        std::fs::write(path, &self.bytes)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// The scene rectangle mapped onto the canvas under `framing`.
pub fn framed_view(scene: &Scene, framing: Framing) -> Rect {
    let view = scene.view;
    match (framing, scene.content_bounds()) {
        (Framing::Fit, Some(bounds)) => {
            let grown = view.union(bounds);
            if grown == view {
                view
            } else {
                grown.inflate(grown.width() * FIT_MARGIN, grown.height() * FIT_MARGIN)
            }
        }
        _ => view,
    }
}

/// Rasterize `scene` and encode it as an RGB PNG.
///
/// The scene is drawn on a transparent canvas of `settings.pixel_size()`, optionally
/// cropped to the painted pixels plus padding, flattened over the scene background and
/// encoded. The scene is only borrowed and can be exported again.
#[tracing::instrument(level = "debug", skip_all, fields(dpi = settings.dpi))]
pub fn export_png(
    scene: &Scene,
    settings: &ExportSettings,
    backend: &mut dyn RenderBackend,
) -> PosterResult<PngImage> {
    let (width, height) = settings.pixel_size()?;
    let target = RenderTarget {
        width,
        height,
        view: framed_view(scene, settings.framing),
        px_per_pt: f64::from(settings.dpi) / POINTS_PER_INCH,
    };

    let frame = backend.render_scene(scene, &target)?;
    let rgb = flatten_over(&frame, scene.background)?;
    let page = image::RgbImage::from_raw(frame.width, frame.height, rgb)
        .ok_or_else(|| PosterError::export("rgb buffer does not match frame size"))?;

    let page = match (settings.crop, frame.painted_bounds()) {
        (true, Some((x, y, w, h))) => {
            let pad = settings.pad_px();
            let x0 = x.saturating_sub(pad);
            let y0 = y.saturating_sub(pad);
            let x1 = (x + w).saturating_add(pad).min(frame.width);
            let y1 = (y + h).saturating_add(pad).min(frame.height);
            image::imageops::crop_imm(&page, x0, y0, x1 - x0, y1 - y0).to_image()
        }
        _ => page,
    };

    let (out_w, out_h) = page.dimensions();
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(page)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| PosterError::export(format!("png encode failed: {e}")))?;

    tracing::info!(width = out_w, height = out_h, bytes = bytes.len(), "png exported");
    Ok(PngImage {
        width: out_w,
        height: out_h,
        bytes,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
