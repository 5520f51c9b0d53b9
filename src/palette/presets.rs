use std::fmt;
use std::str::FromStr;

use crate::foundation::color::Rgb;
use crate::foundation::error::PosterError;

/// Fixed palettes that ship with the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PalettePreset {
    /// Five soft pastel tints.
    SoftPastel,
    /// Pure primaries and secondaries.
    Primary,
    /// Five steps of a light blue.
    MonoBlue,
    /// Candy pastels for flowers.
    Spring,
    /// Pinks and peaches for flowers.
    Blush,
    /// Muted pinks and blue-greens for flowers.
    Mist,
    /// Bright fruit colors for spheres.
    Fruity,
}

const fn rgb8(r: u8, g: u8, b: u8) -> Rgb {
    Rgb::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
}

const SPRING: [Rgb; 5] = [
    rgb8(0xff, 0xb3, 0xba),
    rgb8(0xff, 0xdf, 0xba),
    rgb8(0xff, 0xff, 0xba),
    rgb8(0xba, 0xff, 0xc9),
    rgb8(0xba, 0xe1, 0xff),
];
const BLUSH: [Rgb; 5] = [
    rgb8(0xf7, 0xc8, 0xe0),
    rgb8(0xff, 0xdd, 0xcc),
    rgb8(0xff, 0xe6, 0xeb),
    rgb8(0xd6, 0xf5, 0xf5),
    rgb8(0xc9, 0xe4, 0xff),
];
const MIST: [Rgb; 5] = [
    rgb8(0xfd, 0xe2, 0xe4),
    rgb8(0xfa, 0xd2, 0xe1),
    rgb8(0xe2, 0xec, 0xe9),
    rgb8(0xbe, 0xe1, 0xe6),
    rgb8(0xc6, 0xde, 0xf1),
];
const FRUITY: [Rgb; 5] = [
    rgb8(0xff, 0x4c, 0x4c),
    rgb8(0xff, 0xd9, 0x3d),
    rgb8(0x6b, 0xcb, 0x77),
    rgb8(0x4d, 0x96, 0xff),
    rgb8(0xff, 0x6f, 0x91),
];

impl PalettePreset {
    /// Every preset, in declaration order.
    pub const ALL: [PalettePreset; 7] = [
        Self::SoftPastel,
        Self::Primary,
        Self::MonoBlue,
        Self::Spring,
        Self::Blush,
        Self::Mist,
        Self::Fruity,
    ];

    /// Kebab-case name, as used in JSON and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::SoftPastel => "soft-pastel",
            Self::Primary => "primary",
            Self::MonoBlue => "mono-blue",
            Self::Spring => "spring",
            Self::Blush => "blush",
            Self::Mist => "mist",
            Self::Fruity => "fruity",
        }
    }

    /// The preset's base colors, in order.
    pub fn colors(self) -> Vec<Rgb> {
        match self {
            Self::SoftPastel => vec![
                Rgb::new(1.0, 0.8, 0.8),
                Rgb::new(1.0, 0.9, 0.7),
                Rgb::new(0.8, 1.0, 0.8),
                Rgb::new(0.7, 0.9, 1.0),
                Rgb::new(0.9, 0.8, 1.0),
            ],
            Self::Primary => vec![
                Rgb::new(1.0, 0.0, 0.0),
                Rgb::new(0.0, 1.0, 0.0),
                Rgb::new(0.0, 0.0, 1.0),
                Rgb::new(1.0, 1.0, 0.0),
                Rgb::new(1.0, 0.0, 1.0),
            ],
            Self::MonoBlue => vec![
                Rgb::new(0.2, 0.4, 1.0),
                Rgb::new(0.3, 0.5, 1.0),
                Rgb::new(0.4, 0.6, 1.0),
                Rgb::new(0.5, 0.7, 1.0),
                Rgb::new(0.6, 0.8, 1.0),
            ],
            Self::Spring => SPRING.to_vec(),
            Self::Blush => BLUSH.to_vec(),
            Self::Mist => MIST.to_vec(),
            Self::Fruity => FRUITY.to_vec(),
        }
    }
}

impl fmt::Display for PalettePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PalettePreset {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|p| p.name() == needle)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|p| p.name()).collect();
                PosterError::palette(format!(
                    "unknown preset '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/presets.rs"]
mod tests;
