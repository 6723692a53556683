//! Writing generated files to disk.

use anyhow::Context;
use pbgen_codegen::GeneratedFiles;
use std::path::{Path, PathBuf};

/// Writes generated files below `dir`, creating it if needed.
///
/// Existing files are overwritten. Files are written in path order.
///
/// # Returns
/// The paths written.
///
/// # Errors
/// Returns an error if the directory cannot be created or a file cannot be
/// written.
pub fn write_files(dir: &Path, files: &GeneratedFiles) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = dir.join(name);
        std::fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
