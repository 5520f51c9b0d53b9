use crate::foundation::core::{Point, Span};
use crate::foundation::error::{PosterError, PosterResult};
use crate::random::streams::RandomStreams;

/// Inclusive integer range for flower petal counts.
///
/// JSON accepts `{"min": a, "max": b}`, `[a, b]`, or a bare integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "PetalSpanRepr")]
pub struct PetalSpan {
    /// Fewest petals.
    pub min: u32,
    /// Most petals (inclusive).
    pub max: u32,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum PetalSpanRepr {
    Scalar(u32),
    Obj { min: u32, max: u32 },
    Arr([u32; 2]),
}

impl From<PetalSpanRepr> for PetalSpan {
    fn from(repr: PetalSpanRepr) -> Self {
        match repr {
            PetalSpanRepr::Scalar(n) => Self { min: n, max: n },
            PetalSpanRepr::Obj { min, max } | PetalSpanRepr::Arr([min, max]) => Self { min, max },
        }
    }
}

impl PetalSpan {
    /// Draw a petal count; a fixed count consumes no randomness.
    pub fn sample(self, rng: &mut RandomStreams) -> u32 {
        if self.min == self.max {
            return self.min;
        }
        rng.randint(self.min, self.max)
    }
}

/// Parameters of a blob layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlobParams {
    /// Base radius.
    pub radius: Span,
    /// Radial wobble amount; 0 draws a circle.
    pub wobble: Span,
    /// Outline samples.
    pub points: usize,
}

impl Default for BlobParams {
    fn default() -> Self {
        Self {
            radius: Span {
                min: 0.15,
                max: 0.45,
            },
            wobble: Span::constant(0.15),
            points: 200,
        }
    }
}

/// Parameters of a flower layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlowerParams {
    /// Petal count.
    pub petals: PetalSpan,
    /// Petal length.
    pub radius: Span,
    /// Samples per petal.
    pub points: usize,
    /// Stroke width of the front strand, in points.
    pub line_width: f64,
    /// Copies drawn per petal; earlier copies are wider.
    pub strands: usize,
    /// Standard deviation of the extra per-strand jitter.
    pub strand_jitter: f64,
    /// Pick color and alpha anew for every stroke instead of once per layer.
    pub color_per_stroke: bool,
}

impl Default for FlowerParams {
    fn default() -> Self {
        Self {
            petals: PetalSpan { min: 5, max: 12 },
            radius: Span {
                min: 0.10,
                max: 0.25,
            },
            points: 50,
            line_width: 3.0,
            strands: 1,
            strand_jitter: 0.0,
            color_per_stroke: false,
        }
    }
}

/// Parameters of a sphere layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SphereParams {
    /// Circle radius.
    pub radius: Span,
    /// Outline samples.
    pub points: usize,
    /// Number of shadow copies behind the sphere.
    pub shadow_layers: usize,
    /// Step between shadow copies.
    pub shadow_offset: f64,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: Span {
                min: 0.03,
                max: 0.10,
            },
            points: 100,
            shadow_layers: 5,
            shadow_offset: 0.02,
        }
    }
}

/// The shape drawn by every layer of a composition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ShapeFamily {
    /// Filled wobbly loops.
    Blob(BlobParams),
    /// Stroked radial petals.
    Flower(FlowerParams),
    /// Filled circles with a drop shadow.
    Sphere(SphereParams),
}

impl Default for ShapeFamily {
    fn default() -> Self {
        Self::Blob(BlobParams::default())
    }
}

impl ShapeFamily {
    /// Short lowercase name used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Blob(_) => "blob",
            Self::Flower(_) => "flower",
            Self::Sphere(_) => "sphere",
        }
    }

    /// Family with default parameters, looked up by [`ShapeFamily::label`].
    pub fn from_label(label: &str) -> PosterResult<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "blob" => Ok(Self::Blob(BlobParams::default())),
            "flower" => Ok(Self::Flower(FlowerParams::default())),
            "sphere" => Ok(Self::Sphere(SphereParams::default())),
            other => Err(PosterError::validation(format!(
                "unknown shape family '{other}' (expected blob, flower or sphere)"
            ))),
        }
    }

    fn validate(&self) -> PosterResult<()> {
        match self {
            Self::Blob(p) => {
                p.radius.validate("blob radius")?;
                p.wobble.validate("blob wobble")?;
            }
            Self::Flower(p) => {
                p.radius.validate("flower radius")?;
                if p.petals.min > p.petals.max {
                    return Err(PosterError::validation(format!(
                        "flower petals min ({}) must be <= max ({})",
                        p.petals.min, p.petals.max
                    )));
                }
                if !p.line_width.is_finite() || p.line_width < 0.0 {
                    return Err(PosterError::validation(
                        "flower line_width must be finite and >= 0",
                    ));
                }
                if p.strands == 0 {
                    return Err(PosterError::validation("flower strands must be >= 1"));
                }
                if !p.strand_jitter.is_finite() || p.strand_jitter < 0.0 {
                    return Err(PosterError::validation(
                        "flower strand_jitter must be finite and >= 0",
                    ));
                }
            }
            Self::Sphere(p) => {
                p.radius.validate("sphere radius")?;
                if !p.shadow_offset.is_finite() {
                    return Err(PosterError::validation("sphere shadow_offset must be finite"));
                }
            }
        }
        Ok(())
    }

    fn check_points(&self) -> PosterResult<()> {
        let (points, min) = match self {
            Self::Blob(p) => (p.points, 3),
            Self::Flower(p) => (p.points, 2),
            Self::Sphere(p) => (p.points, 3),
        };
        if points < min {
            return Err(PosterError::generation(format!(
                "{} needs at least {min} points, got {points}",
                self.label()
            )));
        }
        Ok(())
    }
}

/// Where layer centers come from.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    /// Each center is drawn uniformly in the unit square (x, then y).
    #[default]
    Scatter,
    /// Pre-placed centers, one per layer.
    Fixed {
        /// Centers in layer order.
        centers: Vec<Point>,
    },
    /// Shrinking rings around one center; see [`ConcentricRings`].
    Concentric(ConcentricRings),
}

/// A deterministic stack of layers sharing one center.
///
/// Layer `i` has radius `radius_start - i * radius_step`, opacity
/// `alpha_start + i * alpha_step` (clamped to 1) and palette color `i % len`. None of these
/// draw randomness; the family's other parameters (wobble, petals) are still sampled.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConcentricRings {
    /// Shared center.
    pub center: Point,
    /// Radius of the first (back) layer.
    pub radius_start: f64,
    /// Radius lost per layer.
    pub radius_step: f64,
    /// Opacity of the first layer.
    pub alpha_start: f64,
    /// Opacity gained per layer.
    pub alpha_step: f64,
}

impl Default for ConcentricRings {
    fn default() -> Self {
        Self {
            center: Point::new(0.5, 0.5),
            radius_start: 1.2,
            radius_step: 0.08,
            alpha_start: 0.4,
            alpha_step: 0.05,
        }
    }
}

impl ConcentricRings {
    /// Radius of layer `idx`.
    pub fn radius(&self, idx: usize) -> f64 {
        self.radius_start - idx as f64 * self.radius_step
    }

    /// Opacity of layer `idx`.
    pub fn alpha(&self, idx: usize) -> f64 {
        (self.alpha_start + idx as f64 * self.alpha_step).clamp(0.0, 1.0)
    }

    fn validate(&self, layers: usize) -> PosterResult<()> {
        let values = [
            self.center.x,
            self.center.y,
            self.radius_start,
            self.radius_step,
            self.alpha_start,
            self.alpha_step,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(PosterError::validation("concentric rings must be finite"));
        }
        let last = self.radius(layers.saturating_sub(1));
        if self.radius_start <= 0.0 || last <= 0.0 {
            return Err(PosterError::validation(format!(
                "concentric radius reaches {last} by layer {layers}; it must stay > 0"
            )));
        }
        Ok(())
    }
}

/// Everything [`compose`](crate::compose) needs besides the palette and the streams.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComposeParams {
    /// Number of shapes.
    pub layers: usize,
    /// Shape drawn by every layer.
    pub shape: ShapeFamily,
    /// Per-layer opacity.
    pub alpha: Span,
    /// Center source.
    pub placement: Placement,
}

impl Default for ComposeParams {
    fn default() -> Self {
        Self {
            layers: 8,
            shape: ShapeFamily::default(),
            alpha: Span { min: 0.3, max: 0.6 },
            placement: Placement::Scatter,
        }
    }
}

impl ComposeParams {
    /// Reject parameters that cannot produce a scene.
    ///
    /// Bad counts and spans are [`PosterError::Validation`]; point counts too small to
    /// draw a shape are [`PosterError::Generation`].
    pub fn validate(&self) -> PosterResult<()> {
        if self.layers == 0 {
            return Err(PosterError::validation("layers must be >= 1"));
        }
        self.alpha.validate("alpha")?;
        if self.alpha.min < 0.0 || self.alpha.max > 1.0 {
            return Err(PosterError::validation("alpha must lie in [0, 1]"));
        }
        if let Placement::Fixed { centers } = &self.placement
            && centers.len() != self.layers
        {
            return Err(PosterError::validation(format!(
                "fixed placement has {} centers for {} layers",
                centers.len(),
                self.layers
            )));
        }
        if let Placement::Concentric(rings) = &self.placement {
            rings.validate(self.layers)?;
        }
        self.shape.validate()?;
        self.shape.check_points()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
