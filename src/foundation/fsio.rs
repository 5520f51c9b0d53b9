use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::PosterResult;

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> PosterResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Replace the file at `path` with `bytes`.
///
/// The bytes go to a sibling temp file which is synced and then renamed over `path`, so
/// readers observe either the old or the new contents, never a truncated file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> PosterResult<()> {
    ensure_parent_dir(path)?;
    let tmp = temp_sibling(path);

    let mut file = std::fs::File::create(&tmp)
        .with_context(|| format!("failed to create '{}'", tmp.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("failed to write '{}'", tmp.display()))?;
    file.sync_all()
        .with_context(|| format!("failed to sync '{}'", tmp.display()))?;
    drop(file);

    std::fs::rename(&tmp, path).with_context(|| {
        format!(
            "failed to move '{}' into place at '{}'",
            tmp.display(),
            path.display()
        )
    })?;
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "out".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/fsio.rs"]
mod tests;
