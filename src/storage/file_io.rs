//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StoryCashError;

/// Read JSON from a file, returning `None` if the file doesn't exist
pub fn read_json_optional<T, P>(path: P) -> Result<Option<T>, StoryCashError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| StoryCashError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| StoryCashError::Decode(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all; readers
/// never observe a half-written file.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), StoryCashError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                StoryCashError::Write(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| StoryCashError::Write(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let written = writer
        .write_all(bytes)
        .and_then(|_| writer.flush())
        .and_then(|_| writer.get_ref().sync_all());

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(StoryCashError::Write(format!(
            "Failed to write {}: {}",
            temp_path.display(),
            e
        )));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StoryCashError::Write(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Serialize to pretty JSON and write atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), StoryCashError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| StoryCashError::Json(format!("Failed to serialize data: {}", e)))?;
    write_atomic(path, &bytes)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
