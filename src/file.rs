// src/file.rs

use std::{
    collections::HashMap,
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::ScrapeError;

/// Serialize `dataset` as pretty JSON to `path`, replacing any previous file.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<(), ScrapeError> {
    write_json(path, dataset)
}

/// Pretty JSON plus a trailing newline; parent directories are created as needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path).map_err(|e| ScrapeError::io("creating", path, e))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, value)?;
    out.write_all(b"\n")
        .and_then(|_| out.flush())
        .map_err(|e| ScrapeError::io("writing", path, e))?;
    Ok(())
}

pub fn load_dataset(path: &Path) -> Result<Dataset, ScrapeError> {
    let file = File::open(path).map_err(|e| ScrapeError::io("opening", path, e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        let err = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory");
        return Err(ScrapeError::io("creating directory", dir, err));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::io("creating directory", dir, e))?;
    }
    Ok(())
}

/// Duplicate handling **only within this run**
pub fn resolve_unique_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
