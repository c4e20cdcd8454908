//! # yumlscript Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Filesystem helpers shared by the scanner and the script writer. Currently a
//! single submodule:
//!
//! - **`io`**: Reading project files with context (`read_file_bytes`) and creating the
//!   output script under a name that is not yet taken (`create_unique_file`).
//!
//! Import from the submodule directly, e.g. `crate::common::fs::io::create_unique_file`.
//!

/// Contains basic file I/O operations (e.g., `read_file_bytes`, `create_unique_file`).
pub mod io;
