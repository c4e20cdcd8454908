//! # yumlscript Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module centralizes the filesystem input/output operations the scanner
//! needs, wrapping `std::fs` calls so that every failure carries context
//! naming the file involved.
//!
//! ## Architecture
//!
//! - **`read_file_bytes`**: A wrapper around `fs::read` that adds context to I/O errors.
//! - **`candidate_file_name`**: Builds the n-th output name to try (`yumlScript.txt`, `yumlScript1.txt`, ...).
//! - **`create_unique_file`**: Walks the candidate names until one is unused and creates it
//!   exclusively (`create_new`), so an existing script is never overwritten.
//!
//! ## Usage
//!
//! ```text
//! let (path, file) = io::create_unique_file(Path::new("."), "yumlScript", "txt")?;
//! let bytes = io::read_file_bytes(&project_path)?;
//! ```
//!
use crate::core::error::{Result, ScriptError};
use anyhow::Context; // For adding context to errors
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads the entire content of a file as raw bytes. Decoding is left to the
/// caller, since project files are not always UTF-8.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be found, opened, or read, with context
/// naming the file.
pub fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Output file name for the given attempt: attempt `0` is the bare base name,
/// later attempts append the attempt number.
pub fn candidate_file_name(base_name: &str, extension: &str, attempt: u32) -> String {
    if attempt == 0 {
        format!("{}.{}", base_name, extension)
    } else {
        format!("{}{}.{}", base_name, attempt, extension)
    }
}

/// Creates a new, previously nonexistent file in `dir`.
///
/// Candidate names are tried in order (see `candidate_file_name`); names that
/// already exist are skipped. The file is opened with `create_new`, so losing
/// a race to another process simply moves on to the next name.
///
/// # Returns
///
/// * `Result<(PathBuf, File)>` - The chosen path and the open, empty file.
///
/// # Errors
///
/// Returns an `Err` if creating the file fails for any reason other than the
/// name already being taken (e.g., the directory is missing or read-only).
pub fn create_unique_file(dir: &Path, base_name: &str, extension: &str) -> Result<(PathBuf, File)> {
    for attempt in 0..=u32::MAX {
        let candidate = dir.join(candidate_file_name(base_name, extension, attempt));
        if candidate.exists() {
            debug!("Output file already exists, skipping: {:?}", candidate);
            continue;
        }
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(file) => {
                info!("Created output file: {:?}", candidate);
                return Ok((candidate, file));
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("Output file appeared concurrently, skipping: {:?}", candidate);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to create output file {:?}", candidate));
            }
        }
    }
    anyhow::bail!(ScriptError::FileSystem(format!(
        "No unused output file name for '{}' in {:?}",
        base_name, dir
    )))
}
