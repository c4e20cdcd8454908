//! # Tree Scanner
//!
//! File: cli/src/scanner/tree.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Walks a directory tree, finds project descriptor files, and streams the
//! script lines for each one into a sink.
//!
//! ## Traversal Order
//!
//! The walk is depth-first and pre-order. Inside each directory the matching
//! files come first, then each subdirectory is descended into. Within those two
//! groups entries keep the order the filesystem lists them in; nothing is
//! sorted alphabetically, so output order can differ between filesystems.
//!
//! Directory symlinks are not followed, so a symlink cycle cannot make the
//! walk loop. A symlink that points at a regular file is treated like the file.
//!
//! ## Decoding
//!
//! Project files are read as bytes and decoded per their byte-order mark or
//! XML declaration, so UTF-16 files saved by older tooling load fine. Content
//! that does not decode is reported as an unparsable project file.
//!
//! ## Matching
//!
//! A file is a project descriptor when its final extension (the text after
//! the last `.`) ends with the configured suffix, i.e. the `*.*proj` pattern:
//! `App.csproj`, `Lib.vbproj`, `Build.proj`. On Windows the comparison
//! ignores ASCII case; elsewhere it is exact.
//!
use crate::common::fs::io;
use crate::core::config::{Config, ScanConfig};
use crate::core::error::{Result, ScriptError};
use crate::descriptor::{DescriptorParser, ProjectDescriptor};
use anyhow::{anyhow, Context};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Finds project files below a root and writes their script lines.
#[derive(Debug, Clone)]
pub struct TreeScanner {
    parser: DescriptorParser,
    scan: ScanConfig,
}

impl TreeScanner {
    pub fn new(config: &Config) -> Self {
        TreeScanner {
            parser: DescriptorParser::new(config.dialect.clone()),
            scan: config.scan.clone(),
        }
    }

    /// Writes the script for every project file below `root` to `sink`.
    ///
    /// Each project contributes a `// <name>` line followed by its
    /// `[<name>]->[<reference>]` lines. The first failure aborts the run;
    /// whatever was already written to `sink` stays there.
    ///
    /// # Returns
    ///
    /// * `Result<usize>` - The number of projects written.
    pub fn run<W: Write>(&self, root: &Path, sink: &mut W) -> Result<usize> {
        let descriptors = self.find_descriptors(root)?;
        debug!(
            "Found {} project file(s) under '{}'",
            descriptors.len(),
            root.display()
        );

        for path in &descriptors {
            let descriptor = load_descriptor(path)?;
            let script = self
                .parser
                .parse(&descriptor)
                .with_context(|| format!("Failed to process project file '{}'", path.display()))?;
            script
                .write_to(&mut *sink)
                .context("Failed to write to the output script")?;
            info!(
                "Wrote project '{}' with {} reference(s) from '{}'",
                script.name,
                script.references.len(),
                path.display()
            );
        }

        Ok(descriptors.len())
    }

    /// Lists every project file below `root` in traversal order.
    ///
    /// # Errors
    ///
    /// Returns `ScriptError::FileSystem` if `root` is not a directory, or the
    /// walk error if a directory cannot be read.
    pub fn find_descriptors(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(anyhow!(ScriptError::FileSystem(format!(
                "Root directory not found: {}",
                root.display()
            ))));
        }

        let walker = WalkDir::new(root)
            .follow_links(false)
            // Stable sort: files before directories, listing order otherwise kept.
            .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));

        let mut descriptors = Vec::new();
        for entry_result in walker {
            let entry = entry_result.map_err(|e| {
                warn!("Failed to access entry during walk in '{}': {}", root.display(), e);
                anyhow!(e).context(format!("Failed to scan '{}'", root.display()))
            })?;
            if entry.file_type().is_dir() {
                debug!("Scanning directory: {}", entry.path().display());
                continue;
            }
            let path = entry.path();
            if self.is_descriptor(path) && path.is_file() {
                debug!("Found project file: {}", path.display());
                descriptors.push(entry.into_path());
            }
        }
        Ok(descriptors)
    }

    /// Whether the file name matches `*.*<suffix>`.
    pub fn is_descriptor(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name() else {
            return false;
        };
        let file_name = file_name.to_string_lossy();
        match file_name.rsplit_once('.') {
            Some((_, extension)) => extension_matches(extension, &self.scan.descriptor_suffix),
            None => false,
        }
    }
}

#[cfg(windows)]
fn extension_matches(extension: &str, suffix: &str) -> bool {
    extension
        .to_ascii_lowercase()
        .ends_with(&suffix.to_ascii_lowercase())
}

#[cfg(not(windows))]
fn extension_matches(extension: &str, suffix: &str) -> bool {
    extension.ends_with(suffix)
}

fn load_descriptor(path: &Path) -> Result<ProjectDescriptor> {
    let bytes = io::read_file_bytes(path)?;
    ProjectDescriptor::from_bytes(&bytes).map_err(|e| {
        anyhow!(ScriptError::UnparsableDescriptor {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })
}
