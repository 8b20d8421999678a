//! Header and footer template loading.

use crate::error::GenError;
use std::path::Path;
use tracing::debug;

/// Load a template file verbatim. Any content, including an empty file, is accepted.
pub fn load(path: &Path) -> Result<String, GenError> {
    let text = std::fs::read_to_string(path).map_err(|e| GenError::file(path, e))?;
    debug!("Loaded template {} ({} bytes)", path.display(), text.len());
    Ok(text)
}
