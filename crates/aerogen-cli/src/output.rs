//! Writing generated files

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A fully generated file waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub name: String,
    pub contents: String,
}

impl OutputFile {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Write every file into `dir`, creating it if needed
///
/// Each file goes to a temporary file in `dir` first and is then renamed over
/// the target, so an interrupted run never leaves a truncated file behind.
pub fn write_all(dir: &Path, files: &[OutputFile]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let target = dir.join(&file.name);

        let mut temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        temp.write_all(file.contents.as_bytes())
            .with_context(|| format!("Failed to write {}", target.display()))?;
        temp.persist(&target)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to replace {}", target.display()))?;

        tracing::info!(path = %target.display(), "wrote file");
        written.push(target);
    }
    Ok(written)
}
