use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::composition::model::ComposeParams;
use crate::export::png::ExportSettings;
use crate::foundation::color::Rgb;
use crate::foundation::error::{PosterError, PosterResult};
use crate::palette::table::PaletteTable;
use crate::palette::{DEFAULT_PALETTE_SIZE, Palette, PaletteMode};

/// Default seed of a poster request.
pub const DEFAULT_SEED: u64 = 42;

/// Default poster background, an off-white.
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(0.98, 0.98, 0.97);

/// Palette half of a request.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PaletteRequest {
    /// How colors are produced.
    pub mode: PaletteMode,
    /// Number of colors (ignored in csv mode).
    pub size: usize,
}

impl Default for PaletteRequest {
    fn default() -> Self {
        Self {
            mode: PaletteMode::default(),
            size: DEFAULT_PALETTE_SIZE,
        }
    }
}

/// A complete, serializable description of one poster.
///
/// Every field has a default, so `{}` is a valid request.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PosterRequest {
    /// Seed of both random streams.
    pub seed: u64,
    /// Palette mode and size.
    pub palette: PaletteRequest,
    /// Layer count, shape family, alpha and placement.
    pub compose: ComposeParams,
    /// Page color.
    pub background: Rgb,
    /// Page size, resolution and cropping.
    pub export: ExportSettings,
}

impl Default for PosterRequest {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            palette: PaletteRequest::default(),
            compose: ComposeParams::default(),
            background: DEFAULT_BACKGROUND,
            export: ExportSettings::default(),
        }
    }
}

impl PosterRequest {
    /// Parse a JSON request document.
    pub fn from_json_str(s: &str) -> PosterResult<Self> {
        serde_json::from_str(s).map_err(|e| PosterError::serde(e.to_string()))
    }

    /// Read a JSON request document from disk.
    pub fn from_path(path: &Path) -> PosterResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read request '{}'", path.display()))?;
        serde_json::from_str(&text)
            .map_err(|e| PosterError::serde(format!("{}: {e}", path.display())))
    }

    /// Pretty-printed JSON, with every default filled in.
    pub fn to_json_pretty(&self) -> PosterResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PosterError::serde(e.to_string()))
    }

    /// Check everything that can be checked before drawing randomness.
    pub fn validate(&self) -> PosterResult<()> {
        if self.palette.size == 0 && self.palette.mode != PaletteMode::Csv {
            return Err(PosterError::validation("palette size must be >= 1"));
        }
        if let PaletteMode::Mono { base_hue } = self.palette.mode
            && !(0.0..=1.0).contains(&base_hue)
        {
            return Err(PosterError::validation(format!(
                "base_hue {base_hue} must lie in [0, 1]"
            )));
        }
        self.compose.validate()?;
        self.export.validate()
    }
}

/// Where csv-mode palettes come from.
///
/// An uploaded table wins over the persisted one for the request it accompanies.
#[derive(Clone, Debug, Default)]
pub struct PaletteSources {
    /// Path of the persisted palette table.
    pub table: Option<PathBuf>,
    /// Colors parsed from an uploaded table.
    pub upload: Option<Palette>,
}

impl PaletteSources {
    /// Sources backed by the persisted table at `path`.
    pub fn with_table(path: impl Into<PathBuf>) -> Self {
        Self {
            table: Some(path.into()),
            upload: None,
        }
    }

    /// Rows for csv mode: the upload if any, else the persisted table.
    pub fn csv_rows(&self) -> PosterResult<Palette> {
        if let Some(upload) = &self.upload {
            tracing::debug!(rows = upload.len(), "using uploaded palette table");
            return Ok(upload.clone());
        }
        match &self.table {
            Some(path) => PaletteTable::open(path)?.colors(),
            None => Err(PosterError::palette(
                "csv mode needs an uploaded table or a palette table path",
            )),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/request.rs"]
mod tests;
