//! File helpers

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Reads a whole file into a string.
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Writes `data` to a file at once, replacing previous content.
pub fn write_file(path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> Result<()> {
    Ok(fs::write(path, data)?)
}

/// Canonical directory containing `path`.
pub fn cur_dir(path: impl AsRef<Path>) -> Result<PathBuf> {
    let canonical = fs::canonicalize(path.as_ref())?;
    let parent = canonical.parent().ok_or_else(|| {
        io::Error::new(
            ErrorKind::InvalidInput,
            format!("{} has no parent directory", canonical.display()),
        )
    })?;
    Ok(parent.to_path_buf())
}
