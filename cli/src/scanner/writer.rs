//! # Script Writer
//!
//! File: cli/src/scanner/writer.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Produces one complete yUML script file for a directory tree. The output
//! name is chosen once, before the tree is walked: `yumlScript.txt`, or
//! `yumlScript<N>.txt` with the smallest `N` (starting at 1) that is not
//! taken. The file is created exclusively, so earlier scripts are never
//! overwritten.
//!
//! The file is owned by a `BufWriter` for the whole run and is flushed and
//! closed on every exit path. There is no rollback: a run that fails part way
//! leaves a partially written script behind, and that file should be treated
//! as invalid.
//!
use crate::common::fs::io;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::scanner::tree::TreeScanner;
use anyhow::Context;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes the script for `root` into a new file inside `output_dir`.
#[derive(Debug, Clone)]
pub struct ScriptWriter {
    root: PathBuf,
    output_dir: PathBuf,
    config: Config,
}

impl ScriptWriter {
    pub fn new(root: impl AsRef<Path>, output_dir: impl AsRef<Path>, config: Config) -> Self {
        ScriptWriter {
            root: root.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            config,
        }
    }

    /// Creates the output file, scans the tree into it, and returns its path.
    pub fn write_script(&self) -> Result<PathBuf> {
        self.config.validate()?;

        let (path, file) = io::create_unique_file(
            &self.output_dir,
            &self.config.output.base_name,
            &self.config.output.extension,
        )?;
        let mut sink = BufWriter::new(file);

        let scanner = TreeScanner::new(&self.config);
        let projects = scanner.run(&self.root, &mut sink)?;

        sink.flush()
            .with_context(|| format!("Failed to flush output file {:?}", path))?;
        info!(
            "Wrote {} project(s) from '{}' to {}",
            projects,
            self.root.display(),
            path.display()
        );
        Ok(path)
    }
}
