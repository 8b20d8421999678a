//! Writing main scripts to the destination directory.

use crate::error::GenError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path of the main script for `model` inside `destination`.
pub fn output_path(destination: &Path, model: &str, extension: &str) -> PathBuf {
    destination.join(format!("{}.{}", model, extension))
}

/// Write `content` as the main script of `model`, replacing any existing file.
///
/// The destination directory must already exist.
pub fn write(
    model: &str,
    content: &str,
    destination: &Path,
    extension: &str,
) -> Result<PathBuf, GenError> {
    let path = output_path(destination, model, extension);
    std::fs::write(&path, content).map_err(|e| GenError::file(&path, e))?;

    debug!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(path)
}
