use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::foundation::color::Rgb;
use crate::foundation::error::{PosterError, PosterResult};
use crate::foundation::fsio::write_atomic;
use crate::palette::Palette;

/// One named row of a palette table (`name,r,g,b`).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaletteEntry {
    /// Unique key within a table.
    pub name: String,
    /// Red intensity.
    pub r: f64,
    /// Green intensity.
    pub g: f64,
    /// Blue intensity.
    pub b: f64,
}

impl PaletteEntry {
    /// Build an entry from a name and a color.
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }

    /// The row as a color.
    pub fn color(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// Partial update of an entry's components; `None` leaves a component unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorPatch {
    /// New red intensity.
    pub r: Option<f64>,
    /// New green intensity.
    pub g: Option<f64>,
    /// New blue intensity.
    pub b: Option<f64>,
}

impl ColorPatch {
    /// A patch replacing all three components.
    pub fn all(color: Rgb) -> Self {
        Self {
            r: Some(color.r),
            g: Some(color.g),
            b: Some(color.b),
        }
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.r.is_none() && self.g.is_none() && self.b.is_none()
    }

    fn apply(&self, entry: &mut PaletteEntry) {
        if let Some(r) = self.r {
            entry.r = r;
        }
        if let Some(g) = self.g {
            entry.g = g;
        }
        if let Some(b) = self.b {
            entry.b = b;
        }
    }
}

/// Outcome of [`PaletteTable::upsert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upserted {
    /// A new row was appended.
    Added,
    /// An existing row was overwritten.
    Updated,
}

/// The rows written when a table file is created.
pub fn default_entries() -> Vec<PaletteEntry> {
    vec![
        PaletteEntry::new("sky", Rgb::new(0.4, 0.7, 1.0)),
        PaletteEntry::new("sun", Rgb::new(1.0, 0.8, 0.2)),
        PaletteEntry::new("forest", Rgb::new(0.2, 0.6, 0.3)),
        PaletteEntry::new("cloud", Rgb::new(0.9, 0.9, 0.95)),
        PaletteEntry::new("ocean", Rgb::new(0.1, 0.3, 0.8)),
    ]
}

/// A palette table persisted as a CSV file.
///
/// Names are unique. Every mutation reads the whole file and rewrites it atomically.
/// There is no locking: concurrent writers race and the last rename wins.
#[derive(Clone, Debug)]
pub struct PaletteTable {
    path: PathBuf,
}

impl PaletteTable {
    /// Open the table at `path`, writing the default rows if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> PosterResult<Self> {
        let table = Self { path: path.into() };
        if !table.path.exists() {
            table.write_all(&default_entries())?;
            tracing::info!(path = %table.path.display(), "created default palette table");
        }
        Ok(table)
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every row in file order.
    ///
    /// A missing file is recreated with the default rows. A file holding the same
    /// name twice is rejected with [`PosterError::DuplicateName`].
    pub fn read_all(&self) -> PosterResult<Vec<PaletteEntry>> {
        if !self.path.exists() {
            tracing::warn!(path = %self.path.display(), "palette table missing, restoring defaults");
            let entries = default_entries();
            self.write_all(&entries)?;
            return Ok(entries);
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| {
                PosterError::palette(format!("failed to open '{}': {e}", self.path.display()))
            })?;

        let mut entries = Vec::new();
        let mut seen = HashSet::new();
        for (idx, row) in reader.deserialize::<PaletteEntry>().enumerate() {
            let entry = row.map_err(|e| {
                PosterError::palette(format!(
                    "'{}' row {}: {e}",
                    self.path.display(),
                    idx + 1
                ))
            })?;
            if !seen.insert(entry.name.clone()) {
                return Err(PosterError::DuplicateName { name: entry.name });
            }
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Row colors in file order.
    pub fn colors(&self) -> PosterResult<Palette> {
        Ok(self.read_all()?.iter().map(PaletteEntry::color).collect())
    }

    /// Append `entry`; fails with [`PosterError::DuplicateName`] if the name is taken.
    pub fn add(&self, entry: PaletteEntry) -> PosterResult<()> {
        let mut entries = self.read_all()?;
        if entries.iter().any(|e| e.name == entry.name) {
            return Err(PosterError::DuplicateName { name: entry.name });
        }
        tracing::debug!(name = %entry.name, "palette entry added");
        entries.push(entry);
        self.write_all(&entries)
    }

    /// Patch the entry called `name`; fails with [`PosterError::UnknownName`] if absent.
    pub fn update(&self, name: &str, patch: ColorPatch) -> PosterResult<PaletteEntry> {
        let mut entries = self.read_all()?;
        let entry = entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| PosterError::UnknownName {
                name: name.to_owned(),
            })?;
        patch.apply(entry);
        let updated = entry.clone();
        self.write_all(&entries)?;
        tracing::debug!(name, "palette entry updated");
        Ok(updated)
    }

    /// Overwrite the color of `name` if it exists, otherwise append it.
    pub fn upsert(&self, name: &str, color: Rgb) -> PosterResult<Upserted> {
        let mut entries = self.read_all()?;
        let outcome = match entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                ColorPatch::all(color).apply(entry);
                Upserted::Updated
            }
            None => {
                entries.push(PaletteEntry::new(name, color));
                Upserted::Added
            }
        };
        self.write_all(&entries)?;
        Ok(outcome)
    }

    /// Remove the entry called `name`. Returns whether a row was removed.
    pub fn delete(&self, name: &str) -> PosterResult<bool> {
        let mut entries = self.read_all()?;
        let before = entries.len();
        entries.retain(|e| e.name != name);
        if entries.len() == before {
            return Ok(false);
        }
        self.write_all(&entries)?;
        tracing::debug!(name, "palette entry deleted");
        Ok(true)
    }

    fn write_all(&self, entries: &[PaletteEntry]) -> PosterResult<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        if entries.is_empty() {
            writer
                .write_record(["name", "r", "g", "b"])
                .map_err(|e| PosterError::palette(e.to_string()))?;
        }
        for entry in entries {
            writer
                .serialize(entry)
                .map_err(|e| PosterError::palette(format!("row '{}': {e}", entry.name)))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| PosterError::palette(e.to_string()))?;
        write_atomic(&self.path, &bytes)
    }
}

#[derive(serde::Deserialize)]
struct UploadRow {
    #[serde(default)]
    #[allow(dead_code)]
    name: Option<String>,
    r: f64,
    g: f64,
    b: f64,
}

/// Parse an uploaded palette table (`r,g,b` columns required, `name` optional).
///
/// Names are not checked for uniqueness. Rows keep their order.
pub fn parse_palette_csv<R: Read>(reader: R) -> PosterResult<Palette> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    reader
        .deserialize::<UploadRow>()
        .enumerate()
        .map(|(idx, row)| {
            row.map(|row| Rgb::new(row.r, row.g, row.b))
                .map_err(|e| PosterError::palette(format!("uploaded table row {}: {e}", idx + 1)))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/palette/table.rs"]
mod tests;
