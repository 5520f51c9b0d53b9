use crate::composition::compose::compose;
use crate::composition::scene::Scene;
use crate::foundation::error::{PosterError, PosterResult};
use crate::palette::{Palette, PaletteMode, make_palette};
use crate::pipeline::request::{PaletteSources, PosterRequest};
use crate::random::streams::RandomStreams;

/// The palette and scene produced by one request.
#[derive(Clone, Debug, PartialEq)]
pub struct PosterRun {
    /// Colors the layers were picked from.
    pub palette: Palette,
    /// Layers ready for export.
    pub scene: Scene,
}

/// Seed, build the palette, compose.
///
/// Every call reseeds from `request.seed`, so equal requests give equal runs. Csv-mode
/// sources are only consulted when the request asks for csv mode.
#[tracing::instrument(skip_all, fields(seed = request.seed, mode = request.palette.mode.label()))]
pub fn generate_poster(
    request: &PosterRequest,
    sources: &PaletteSources,
) -> PosterResult<PosterRun> {
    request.validate()?;
    let mut rng = RandomStreams::seed_all(request.seed);
    let palette = palette_from(request, sources, &mut rng)?;
    let scene = compose(&request.compose, &palette, request.background, &mut rng)?;
    tracing::info!(
        colors = palette.len(),
        layers = scene.layers.len(),
        "poster generated"
    );
    Ok(PosterRun { palette, scene })
}

/// Just the palette `generate_poster` would use for `request`.
pub fn generate_palette(request: &PosterRequest, sources: &PaletteSources) -> PosterResult<Palette> {
    if request.palette.size == 0 && request.palette.mode != PaletteMode::Csv {
        return Err(PosterError::validation("palette size must be >= 1"));
    }
    let mut rng = RandomStreams::seed_all(request.seed);
    palette_from(request, sources, &mut rng)
}

fn palette_from(
    request: &PosterRequest,
    sources: &PaletteSources,
    rng: &mut RandomStreams,
) -> PosterResult<Palette> {
    let rows = match request.palette.mode {
        PaletteMode::Csv => Some(sources.csv_rows()?),
        _ => None,
    };
    make_palette(request.palette.size, &request.palette.mode, rows.as_deref(), rng)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/run.rs"]
mod tests;
