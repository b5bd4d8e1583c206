//! File I/O for programs
//!
//! Reads programs as UTF-8 and writes reordered copies beside the input.
//! The input file is never written to.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

/// Read a whole program into memory
///
/// # Errors
/// Returns error if the path is not a readable UTF-8 file
pub fn read_program(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(anyhow!("File does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(anyhow!("Path is not a file: {}", path.display()));
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Path of the copy written for `input`: same folder, file name prefixed
pub fn output_path(input: &Path, prefix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{prefix}{name}"))
}

/// Write `text` to the prefixed copy of `input` and return its path
///
/// The text goes to a temporary file in the destination folder first and is
/// renamed into place, so a failed write leaves no partial output.
///
/// # Errors
/// Returns error if the output path would be the input itself, or on I/O failure
pub fn write_program(input: &Path, prefix: &str, text: &str) -> Result<PathBuf> {
    if input.file_name().is_none() {
        return Err(anyhow!("Input path has no file name: {}", input.display()));
    }
    let output = output_path(input, prefix);
    if output == input {
        return Err(anyhow!(
            "Refusing to overwrite the input file {}",
            input.display()
        ));
    }

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(&dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    temp.write_all(text.as_bytes())?;
    temp.flush()?;
    temp.persist(&output)
        .map_err(|e| anyhow!("Failed to write {}: {}", output.display(), e.error))?;

    tracing::info!("Wrote {} bytes to {}", text.len(), output.display());
    Ok(output)
}

/// List the programs in a folder, sorted by name
///
/// # Errors
/// Returns error if `dir` is not a readable directory
pub fn list_programs(dir: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(anyhow!("Not a directory: {}", dir.display()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let path = entry?.path();
        let matches = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if path.is_file() && matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
