use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Filename of the exported page inside the export directory.
pub const EXPORT_FILENAME: &str = "index.html";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export directory missing or not writable: {0}")]
    ExportDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure the export directory exists; create if missing.
pub fn ensure_export_dir(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| ExportError::ExportDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(ExportError::ExportDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| ExportError::ExportDir(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| ExportError::ExportDir(e.to_string()))?;
    Ok(())
}

/// Writes the rendered page to `{dir}/index.html` by writing a temp file
/// then renaming, so a crash mid-write never leaves a truncated page where
/// a web server might already be serving it.
pub struct StaticPageWriter {
    dir: PathBuf,
}

impl StaticPageWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, html: &str) -> Result<PathBuf, ExportError> {
        ensure_export_dir(&self.dir)?;

        let target = self.dir.join(EXPORT_FILENAME);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(html.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Remove any previous export first so the rename behaves the same
        // on every platform.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| ExportError::Io(e.error))?;
        Ok(target)
    }
}
