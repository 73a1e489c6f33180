//! Template discovery.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use gtemp::TEMPLATE_SUFFIX;
use walkdir::WalkDir;

/// Find every `.gtemplate` file in `dir`, sorted by path.
///
/// Only the top level is searched unless `recursive` is set.
pub fn discover_templates(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!(
            "the 'templates' path is not a valid directory: {}",
            dir.display()
        );
    }

    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut templates = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(max_depth) {
        let entry = entry.with_context(|| format!("failed to scan {}", dir.display()))?;
        let is_template = entry.file_name().to_string_lossy().ends_with(TEMPLATE_SUFFIX);
        if is_template && entry.path().is_file() {
            templates.push(entry.into_path());
        }
    }

    templates.sort();
    tracing::debug!(dir = %dir.display(), count = templates.len(), "discovered templates");
    Ok(templates)
}
