use crate::composition::scene::Scene;
use crate::foundation::core::Rect;
use crate::foundation::error::PosterResult;

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by [`CpuBackend`](crate::CpuBackend) are **premultiplied alpha**; the
/// `premultiplied` flag makes this explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, top row first.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// The pixel at column `x`, row `y` (row 0 is the top).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Smallest pixel rectangle `(x, y, width, height)` holding every pixel with
    /// non-zero alpha, or `None` when nothing was painted.
    pub fn painted_bounds(&self) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for (i, px) in self.data.chunks_exact(4).enumerate() {
            if px[3] == 0 {
                continue;
            }
            let x = (i % self.width as usize) as u32;
            let y = (i / self.width as usize) as u32;
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
        bounds.map(|(x0, y0, x1, y1)| (x0, y0, x1 - x0 + 1, y1 - y0 + 1))
    }
}

/// Pixel size and scene-to-pixel mapping of one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderTarget {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Scene rectangle stretched over the canvas; its top edge maps to pixel row 0.
    pub view: Rect,
    /// Pixels per typographic point, used for stroke widths.
    pub px_per_pt: f64,
}

/// A renderer that rasterizes a [`Scene`] into a [`FrameRGBA`].
pub trait RenderBackend {
    /// Draw every operation of `scene` in order.
    fn render_scene(&mut self, scene: &Scene, target: &RenderTarget) -> PosterResult<FrameRGBA>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    #[default]
    Cpu,
}

/// Backend-agnostic settings.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// If set, backends paint this unpremultiplied RGBA8 color under the scene.
    pub clear_rgba: Option<[u8; 4]>,
}

/// Create a rendering backend implementation.
pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> PosterResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
