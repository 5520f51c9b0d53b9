//! posterkit turns a seed into a poster.
//!
//! A run is deterministic end to end: one integer seeds two [`RandomStreams`], which drive
//! the palette and every shape of the composition. The pieces, leaves first:
//!
//! - shape generators: [`blob`], [`flower`], [`sphere`] (plus [`shadow_stack`])
//! - palettes: [`make_palette`] over the [`PaletteMode`]s, and the persisted
//!   [`PaletteTable`]
//! - composition: [`compose`] layers shapes into a [`Scene`]
//! - export: [`export_png`] rasterizes a scene on the CPU and encodes a cropped PNG
//!
//! [`generate_poster`] runs the whole chain from a serializable [`PosterRequest`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod composition;
mod export;
mod foundation;
mod palette;
mod pipeline;
mod random;
mod render;
mod shapes;

pub use crate::foundation::color::Rgb;
pub use crate::foundation::core::{Point, PointSeq, Rect, Span, Vec2, unit_square};
pub use crate::foundation::error::{PosterError, PosterResult};
pub use crate::foundation::fsio::{ensure_parent_dir, write_atomic};

pub use crate::random::streams::RandomStreams;

pub use crate::shapes::blob::blob;
pub use crate::shapes::flower::{PETAL_JITTER_STD, flower, jitter_curve};
pub use crate::shapes::sphere::{shadow_stack, sphere};

pub use crate::palette::presets::PalettePreset;
pub use crate::palette::table::{
    ColorPatch, PaletteEntry, PaletteTable, Upserted, default_entries, parse_palette_csv,
};
pub use crate::palette::{
    DEFAULT_BASE_HUE, DEFAULT_PALETTE_SIZE, Palette, PaletteMode, make_palette,
};

pub use crate::composition::compose::{SHADOW_ALPHA, SHADOW_GRAY, compose};
pub use crate::composition::model::{
    BlobParams, ComposeParams, ConcentricRings, FlowerParams, PetalSpan, Placement, ShapeFamily,
    SphereParams,
};
pub use crate::composition::scene::{DrawOp, OpKind, Scene, SceneLayer};
pub use crate::composition::swatch::palette_swatch;

pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, RenderTarget, create_backend,
};
pub use crate::render::composite::{PremulRgba8, flatten_over, over};
pub use crate::render::cpu::CpuBackend;

pub use crate::export::png::{
    ExportSettings, FIT_MARGIN, Framing, POINTS_PER_INCH, PngImage, export_png, framed_view,
};

pub use crate::pipeline::request::{
    DEFAULT_BACKGROUND, DEFAULT_SEED, PaletteRequest, PaletteSources, PosterRequest,
};
pub use crate::pipeline::run::{PosterRun, generate_palette, generate_poster};
