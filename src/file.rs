// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::config::OutputOptions;
use crate::error::Result;

/// Write both fragments. Each target is replaced atomically, so a crash
/// leaves the previous file intact. Returns the paths written.
pub fn write_outputs(output: &OutputOptions, full: &str, today: &str) -> Result<Vec<PathBuf>> {
    let full_path = output.full_path();
    let today_path = output.today_path();

    write_atomic(&full_path, full)?;
    write_atomic(&today_path, today)?;

    logf!("Wrote {} and {}", full_path.display(), today_path.display());
    Ok(vec![full_path, today_path])
}

/// Temp file in the target's directory, then rename over the target.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_directory(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
