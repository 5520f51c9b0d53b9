use serde::{Deserialize, Serialize};

use crate::foundation::error::{PosterError, PosterResult};

/// An RGB color with components nominally in `[0, 1]`.
///
/// Components read from tables are kept verbatim; renderers clamp.
///
/// JSON accepts `"#RRGGBB"`, `{"r":..,"g":..,"b":..}` and `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    /// Red intensity.
    pub r: f64,
    /// Green intensity.
    pub g: f64,
    /// Blue intensity.
    pub b: f64,
}

impl Rgb {
    /// Build a color from raw components.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// A neutral gray of the given intensity.
    pub const fn gray(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Convert hue/saturation/value (all in `[0, 1]`) to RGB.
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h = h.clamp(0.0, 1.0);
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        if s == 0.0 {
            return Self::gray(v);
        }

        let h6 = h * 6.0;
        let sector = h6.floor();
        let f = h6 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match (sector as u32) % 6 {
            0 => Self::new(v, t, p),
            1 => Self::new(q, v, p),
            2 => Self::new(p, v, t),
            3 => Self::new(p, q, v),
            4 => Self::new(t, p, v),
            _ => Self::new(v, p, q),
        }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> PosterResult<Self> {
        parse_hex(s).map_err(PosterError::validation)
    }

    /// Whether every component lies in `[0, 1]`.
    pub fn is_normalized(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Straight (non-premultiplied) 8-bit components.
    pub fn to_rgb8(self) -> [u8; 3] {
        [to_u8(self.r), to_u8(self.g), to_u8(self.b)]
    }

    /// Premultiplied RGBA8 for an opacity in `[0, 1]`.
    pub fn to_rgba8_premul(self, alpha: f64) -> [u8; 4] {
        let a = alpha.clamp(0.0, 1.0);
        [
            to_u8(self.r.clamp(0.0, 1.0) * a),
            to_u8(self.g.clamp(0.0, 1.0) * a),
            to_u8(self.b.clamp(0.0, 1.0) * a),
            to_u8(a),
        ]
    }
}

fn to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbObj { r: f64, g: f64, b: f64 },
            Arr(Vec<f64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbObj { r, g, b } => Ok(Self::new(r, g, b)),
            Repr::Arr(v) => {
                if v.len() == 3 {
                    Ok(Self::new(v[0], v[1], v[2]))
                } else {
                    Err(serde::de::Error::custom("rgb array must have len 3 ([r,g,b])"))
                }
            }
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgb, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if s.len() != 6 || !s.is_ascii() {
        return Err("hex color must be #RRGGBB (case-insensitive)".to_owned());
    }
    let r = hex_byte(&s[0..2])?;
    let g = hex_byte(&s[2..4])?;
    let b = hex_byte(&s[4..6])?;

    Ok(Rgb::new(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
