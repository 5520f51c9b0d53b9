use crate::foundation::error::{PosterError, PosterResult};
use crate::random::streams::RandomStreams;

pub use kurbo::{Point, Rect, Vec2};

/// An ordered list of points produced by a shape generator.
pub type PointSeq = Vec<Point>;

/// The nominal drawing area: `[0,1] x [0,1]`, y pointing up.
pub fn unit_square() -> Rect {
    Rect::new(0.0, 0.0, 1.0, 1.0)
}

/// Closed interval `[min, max]` sampled uniformly from the scalar stream.
///
/// A span with `min == max` is a constant: sampling it returns `min` and consumes
/// no randomness.
///
/// JSON accepts `{"min": a, "max": b}`, `[a, b]`, or a bare number.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Span {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Span {
    /// Build a validated span.
    pub fn new(min: f64, max: f64) -> PosterResult<Self> {
        let span = Self { min, max };
        span.validate("span")?;
        Ok(span)
    }

    /// A span that always samples to `value`.
    pub fn constant(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Whether sampling returns a fixed value.
    pub fn is_constant(self) -> bool {
        self.min == self.max
    }

    /// Check that both bounds are finite and ordered; `what` names the field in errors.
    pub fn validate(self, what: &str) -> PosterResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PosterError::validation(format!(
                "{what} bounds must be finite"
            )));
        }
        if self.min > self.max {
            return Err(PosterError::validation(format!(
                "{what} min ({}) must be <= max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Whether `value` lies inside the closed interval.
    pub fn contains(self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Draw a value from the scalar stream.
    pub fn sample(self, rng: &mut RandomStreams) -> f64 {
        if self.is_constant() {
            return self.min;
        }
        rng.uniform(self.min, self.max)
    }
}

impl<'de> serde::Deserialize<'de> for Span {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Scalar(f64),
            Obj { min: f64, max: f64 },
            Arr([f64; 2]),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Scalar(v) => Span::constant(v),
            Repr::Obj { min, max } => Span { min, max },
            Repr::Arr([min, max]) => Span { min, max },
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
