//! Palette provider: analytic HSV palettes, fixed presets, and CSV-sourced palettes.

pub(crate) mod presets;
pub(crate) mod table;

use crate::foundation::color::Rgb;
use crate::foundation::error::{PosterError, PosterResult};
use crate::palette::presets::PalettePreset;
use crate::random::streams::RandomStreams;

/// An ordered list of colors. Duplicates are allowed.
pub type Palette = Vec<Rgb>;

/// Default hue for [`PaletteMode::Mono`] (a mid blue).
pub const DEFAULT_BASE_HUE: f64 = 0.60;

/// Default palette size.
pub const DEFAULT_PALETTE_SIZE: usize = 6;

fn default_base_hue() -> f64 {
    DEFAULT_BASE_HUE
}

/// How a palette is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PaletteMode {
    /// Light, desaturated colors of any hue.
    #[default]
    Pastel,
    /// Saturated, bright colors of any hue.
    Vivid,
    /// Shades of a single hue.
    Mono {
        /// Hue in `[0, 1]`.
        #[serde(default = "default_base_hue")]
        base_hue: f64,
    },
    /// Broad random colors.
    Random,
    /// Colors taken verbatim from a CSV table; the palette size is the row count.
    Csv,
    /// Colors drawn with replacement from a fixed preset list.
    Preset {
        /// Which preset to draw from.
        preset: PalettePreset,
    },
}

impl PaletteMode {
    /// Short lowercase name used in logs and file names.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pastel => "pastel",
            Self::Vivid => "vivid",
            Self::Mono { .. } => "mono",
            Self::Random => "random",
            Self::Csv => "csv",
            Self::Preset { .. } => "preset",
        }
    }
}

/// Produce a palette of `k` colors under `mode`.
///
/// HSV modes draw hue, saturation and value (in that order, hue skipped for mono) from
/// the scalar stream for each color. [`PaletteMode::Csv`] ignores `k` and returns
/// `csv_source` verbatim; it fails with [`PosterError::Palette`] when no source is
/// given or the source is empty, and never falls back to another mode.
pub fn make_palette(
    k: usize,
    mode: &PaletteMode,
    csv_source: Option<&[Rgb]>,
    rng: &mut RandomStreams,
) -> PosterResult<Palette> {
    let palette = match *mode {
        PaletteMode::Csv => {
            let source = csv_source
                .ok_or_else(|| PosterError::palette("csv mode requires a palette table"))?;
            if source.is_empty() {
                return Err(PosterError::palette("csv palette table has no rows"));
            }
            source.to_vec()
        }
        PaletteMode::Preset { preset } => {
            let base = preset.colors();
            (0..k)
                .filter_map(|_| rng.choose(&base).copied())
                .collect()
        }
        PaletteMode::Pastel => hsv_palette(k, rng, |rng| {
            (rng.unit(), rng.uniform(0.15, 0.35), rng.uniform(0.9, 1.0))
        }),
        PaletteMode::Vivid => hsv_palette(k, rng, |rng| {
            (rng.unit(), rng.uniform(0.8, 1.0), rng.uniform(0.8, 1.0))
        }),
        PaletteMode::Mono { base_hue } => hsv_palette(k, rng, |rng| {
            (base_hue, rng.uniform(0.2, 0.6), rng.uniform(0.5, 1.0))
        }),
        PaletteMode::Random => hsv_palette(k, rng, |rng| {
            (rng.unit(), rng.uniform(0.3, 1.0), rng.uniform(0.5, 1.0))
        }),
    };

    tracing::debug!(mode = mode.label(), colors = palette.len(), "palette ready");
    Ok(palette)
}

fn hsv_palette(
    k: usize,
    rng: &mut RandomStreams,
    mut draw: impl FnMut(&mut RandomStreams) -> (f64, f64, f64),
) -> Palette {
    (0..k)
        .map(|_| {
            let (h, s, v) = draw(rng);
            Rgb::from_hsv(h, s, v)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/palette/palette.rs"]
mod tests;
