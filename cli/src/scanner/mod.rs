//! # Tree Scanning (`scanner`)
//!
//! File: cli/src/scanner/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Discovers project files and turns them into a yUML script:
//!
//! - **`tree`**: `TreeScanner` walks the directory tree and streams script lines into any `Write` sink.
//! - **`writer`**: `ScriptWriter` picks an unused output file name and runs the scanner into it.
//!
//! ```text
//! let path = ScriptWriter::new(root, ".", Config::default()).write_script()?;
//! ```
//!

/// Directory traversal and per-project line output.
pub mod tree;
/// Output file selection and the full run.
pub mod writer;

pub use tree::TreeScanner;
pub use writer::ScriptWriter;
