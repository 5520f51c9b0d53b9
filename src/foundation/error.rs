/// Convenience result type used across posterkit.
pub type PosterResult<T> = Result<T, PosterError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum PosterError {
    /// Invalid user-provided parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// A palette could not be produced (missing or malformed CSV source, empty palette).
    #[error("palette error: {0}")]
    Palette(String),

    /// A palette table already holds an entry with this name.
    #[error("palette entry '{name}' already exists")]
    DuplicateName {
        /// The conflicting entry name.
        name: String,
    },

    /// A palette table has no entry with this name.
    #[error("palette entry '{name}' not found")]
    UnknownName {
        /// The requested entry name.
        name: String,
    },

    /// Degenerate shape data while composing a scene.
    #[error("generation error: {0}")]
    Generation(String),

    /// Errors while rasterizing a scene.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding an image.
    #[error("export error: {0}")]
    Export(String),

    /// Errors when serializing or deserializing request documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PosterError {
    /// Build a [`PosterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PosterError::Palette`] value.
    pub fn palette(msg: impl Into<String>) -> Self {
        Self::Palette(msg.into())
    }

    /// Build a [`PosterError::Generation`] value.
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Build a [`PosterError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PosterError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`PosterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
