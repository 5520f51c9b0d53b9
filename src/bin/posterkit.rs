use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use posterkit::{
    BackendKind, ColorPatch, ConcentricRings, ExportSettings, Framing, PaletteEntry, PaletteMode,
    PalettePreset, PaletteSources, PaletteTable, Placement, PosterRequest, RenderSettings, Rgb,
    ShapeFamily, Span, Upserted,
};

#[derive(Parser, Debug)]
#[command(name = "posterkit", version, about = "Seeded generative posters")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a poster and write it as a PNG.
    Render(RenderArgs),
    /// Write a preview strip of the palette a request would use.
    Swatch(SwatchArgs),
    /// Inspect or edit a palette table.
    Palette(PaletteArgs),
}

#[derive(Args, Debug)]
struct PosterArgs {
    /// Request JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Shape family.
    #[arg(long, value_enum)]
    shape: Option<ShapeArg>,

    /// Palette mode.
    #[arg(long, value_enum)]
    palette_mode: Option<ModeArg>,

    /// Preset name for `--palette-mode preset` (implies it when given alone).
    #[arg(long)]
    preset: Option<PalettePreset>,

    /// Hue in [0, 1] for `--palette-mode mono`.
    #[arg(long)]
    base_hue: Option<f64>,

    /// Palette size.
    #[arg(long)]
    k: Option<usize>,

    /// Number of layers.
    #[arg(long)]
    layers: Option<usize>,

    /// Blob wobble.
    #[arg(long)]
    wobble: Option<f64>,

    /// Stack the layers as shrinking rings around the page center.
    #[arg(long, default_value_t = false)]
    concentric: bool,

    /// Persisted palette table used by csv mode; created with default rows if absent.
    #[arg(long, default_value = "palette.csv")]
    table: PathBuf,

    /// Uploaded palette CSV; wins over `--table` for this run. A malformed upload is
    /// reported and ignored.
    #[arg(long)]
    upload: Option<PathBuf>,

    /// Output resolution.
    #[arg(long)]
    dpi: Option<u32>,

    /// Scene framing.
    #[arg(long, value_enum)]
    framing: Option<FramingArg>,

    /// Keep the full page instead of cropping to the artwork.
    #[arg(long, default_value_t = false)]
    no_crop: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    poster: PosterArgs,

    /// Print the resolved request as JSON and exit.
    #[arg(long, default_value_t = false)]
    dump_json: bool,

    /// Output PNG path.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SwatchArgs {
    #[command(flatten)]
    poster: PosterArgs,

    /// Output PNG path.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PaletteArgs {
    /// Palette table CSV.
    #[arg(long, default_value = "palette.csv")]
    table: PathBuf,

    #[command(subcommand)]
    action: PaletteCommand,
}

#[derive(Subcommand, Debug)]
enum PaletteCommand {
    /// Create the table with the default rows if it does not exist.
    Init,
    /// Print every row as CSV.
    List,
    /// Append a new row.
    Add(ColorArgs),
    /// Change components of an existing row.
    Update {
        /// Entry name.
        name: String,
        /// New red intensity.
        #[arg(long)]
        r: Option<f64>,
        /// New green intensity.
        #[arg(long)]
        g: Option<f64>,
        /// New blue intensity.
        #[arg(long)]
        b: Option<f64>,
    },
    /// Update the row if it exists, otherwise append it.
    Upsert(ColorArgs),
    /// Remove a row.
    Delete {
        /// Entry name.
        name: String,
    },
}

#[derive(Args, Debug)]
struct ColorArgs {
    /// Entry name.
    name: String,
    /// Red intensity.
    r: f64,
    /// Green intensity.
    g: f64,
    /// Blue intensity.
    b: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Blob,
    Flower,
    Sphere,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Pastel,
    Vivid,
    Mono,
    Random,
    Csv,
    Preset,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FramingArg {
    Fit,
    View,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Swatch(args) => cmd_swatch(args),
        Command::Palette(args) => cmd_palette(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let request = resolve_request(&args.poster)?;
    if args.dump_json {
        println!("{}", request.to_json_pretty()?);
        return Ok(());
    }
    let sources = resolve_sources(&args.poster, &request);

    let run = posterkit::generate_poster(&request, &sources)?;
    let mut backend = posterkit::create_backend(BackendKind::Cpu, &RenderSettings::default())?;
    let png = posterkit::export_png(&run.scene, &request.export, backend.as_mut())?;

    let out = args.out.unwrap_or_else(|| default_out("poster"));
    png.save(&out)?;
    eprintln!("wrote {} ({}x{})", out.display(), png.width, png.height);
    Ok(())
}

fn cmd_swatch(args: SwatchArgs) -> anyhow::Result<()> {
    let request = resolve_request(&args.poster)?;
    let sources = resolve_sources(&args.poster, &request);

    let palette = posterkit::generate_palette(&request, &sources)?;
    let scene = posterkit::palette_swatch(&palette, request.background)?;
    let settings = ExportSettings {
        dpi: request.export.dpi,
        ..ExportSettings::swatch()
    };
    let mut backend = posterkit::create_backend(BackendKind::Cpu, &RenderSettings::default())?;
    let png = posterkit::export_png(&scene, &settings, backend.as_mut())?;

    let out = args.out.unwrap_or_else(|| default_out("palette"));
    png.save(&out)?;
    eprintln!("wrote {} ({} colors)", out.display(), palette.len());
    Ok(())
}

fn cmd_palette(args: PaletteArgs) -> anyhow::Result<()> {
    let table = PaletteTable::open(&args.table)
        .with_context(|| format!("open palette table '{}'", args.table.display()))?;
    match args.action {
        PaletteCommand::Init => {
            eprintln!("palette table ready at {}", table.path().display());
        }
        PaletteCommand::List => {
            let mut out = csv::Writer::from_writer(std::io::stdout().lock());
            for e in table.read_all()? {
                out.serialize(&e)?;
            }
            out.flush()?;
        }
        PaletteCommand::Add(c) => {
            table.add(PaletteEntry::new(c.name.clone(), Rgb::new(c.r, c.g, c.b)))?;
            eprintln!("added {}", c.name);
        }
        PaletteCommand::Update { name, r, g, b } => {
            let patch = ColorPatch { r, g, b };
            if patch.is_empty() {
                anyhow::bail!("update needs at least one of --r, --g, --b");
            }
            let e = table.update(&name, patch)?;
            eprintln!("updated {} to ({}, {}, {})", e.name, e.r, e.g, e.b);
        }
        PaletteCommand::Upsert(c) => match table.upsert(&c.name, Rgb::new(c.r, c.g, c.b))? {
            Upserted::Added => eprintln!("added {}", c.name),
            Upserted::Updated => eprintln!("updated {}", c.name),
        },
        PaletteCommand::Delete { name } => {
            if table.delete(&name)? {
                eprintln!("deleted {name}");
            } else {
                eprintln!("no entry named {name}");
            }
        }
    }
    Ok(())
}

fn default_out(context: &str) -> PathBuf {
    PathBuf::from(format!("{context}_poster.png"))
}

fn resolve_request(args: &PosterArgs) -> anyhow::Result<PosterRequest> {
    let mut req = match &args.config {
        Some(path) => PosterRequest::from_path(path)?,
        None => PosterRequest::default(),
    };

    if let Some(seed) = args.seed {
        req.seed = seed;
    }
    if let Some(shape) = args.shape {
        let label = match shape {
            ShapeArg::Blob => "blob",
            ShapeArg::Flower => "flower",
            ShapeArg::Sphere => "sphere",
        };
        if req.compose.shape.label() != label {
            req.compose.shape = ShapeFamily::from_label(label)?;
        }
    }
    if let Some(wobble) = args.wobble {
        match &mut req.compose.shape {
            ShapeFamily::Blob(p) => p.wobble = Span::constant(wobble),
            other => tracing::warn!(family = other.label(), "--wobble only applies to blobs"),
        }
    }
    if let Some(layers) = args.layers {
        req.compose.layers = layers;
    }
    if args.concentric && !matches!(req.compose.placement, Placement::Concentric(_)) {
        req.compose.placement = Placement::Concentric(ConcentricRings::default());
    }

    if let (Some(mode), Some(preset)) = (args.palette_mode, args.preset)
        && !matches!(mode, ModeArg::Preset)
    {
        tracing::warn!(
            preset = preset.name(),
            "--preset only applies to --palette-mode preset; ignoring it"
        );
    }
    let mode = match (args.palette_mode, args.preset) {
        (Some(mode), preset) => Some(mode_from_arg(mode, preset, args.base_hue, &req.palette.mode)),
        (None, Some(preset)) => Some(PaletteMode::Preset { preset }),
        (None, None) => None,
    };
    if let Some(mode) = mode {
        req.palette.mode = mode;
    }
    if let Some(hue) = args.base_hue {
        match &mut req.palette.mode {
            PaletteMode::Mono { base_hue } => *base_hue = hue,
            other => {
                tracing::warn!(mode = other.label(), "--base-hue only applies to mono palettes")
            }
        }
    }
    if let Some(k) = args.k {
        req.palette.size = k;
    }

    if let Some(dpi) = args.dpi {
        req.export.dpi = dpi;
    }
    if let Some(framing) = args.framing {
        req.export.framing = match framing {
            FramingArg::Fit => Framing::Fit,
            FramingArg::View => Framing::View,
        };
    }
    if args.no_crop {
        req.export.crop = false;
    }
    Ok(req)
}

fn mode_from_arg(
    mode: ModeArg,
    preset: Option<PalettePreset>,
    base_hue: Option<f64>,
    current: &PaletteMode,
) -> PaletteMode {
    match mode {
        ModeArg::Pastel => PaletteMode::Pastel,
        ModeArg::Vivid => PaletteMode::Vivid,
        ModeArg::Random => PaletteMode::Random,
        ModeArg::Csv => PaletteMode::Csv,
        ModeArg::Mono => {
            let keep = match current {
                PaletteMode::Mono { base_hue } => *base_hue,
                _ => posterkit::DEFAULT_BASE_HUE,
            };
            PaletteMode::Mono {
                base_hue: base_hue.unwrap_or(keep),
            }
        }
        ModeArg::Preset => {
            let keep = match current {
                PaletteMode::Preset { preset } => *preset,
                _ => PalettePreset::SoftPastel,
            };
            PaletteMode::Preset {
                preset: preset.unwrap_or(keep),
            }
        }
    }
}

// Uploads only matter in csv mode. A bad one is reported and dropped so the persisted
// table can stand in for it.
fn resolve_sources(args: &PosterArgs, request: &PosterRequest) -> PaletteSources {
    let upload = match (&args.upload, request.palette.mode) {
        (Some(path), PaletteMode::Csv) => match read_upload(path) {
            Ok(colors) => Some(colors),
            Err(e) => {
                tracing::error!("ignoring uploaded palette: {e:#}");
                None
            }
        },
        (Some(_), _) => {
            tracing::debug!("uploaded palette unused outside csv mode");
            None
        }
        (None, _) => None,
    };
    PaletteSources {
        table: Some(args.table.clone()),
        upload,
    }
}

fn read_upload(path: &Path) -> anyhow::Result<posterkit::Palette> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("open uploaded palette '{}'", path.display()))?;
    posterkit::parse_palette_csv(file)
        .with_context(|| format!("parse uploaded palette '{}'", path.display()))
}
