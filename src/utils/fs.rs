//! Filesystem helpers.

use anyhow::{Context, Result};
use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

/// Write a file atomically.
///
/// The contents go to a temporary sibling first and are moved into place
/// with a rename, so readers never observe a half-written file and a
/// failure leaves any existing file untouched.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid output path: {}", path.display()))?;

    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");

    let tmp: PathBuf = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(&tmp_name),
        _ => PathBuf::from(&tmp_name),
    };

    fs::write(&tmp, contents)
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to move {} into place", path.display()))?;
    Ok(())
}
