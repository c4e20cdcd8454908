//! # yumlscript Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utility modules that are not specific to project descriptors or
//! tree scanning:
//!
//! - **`fs`**: Filesystem operations (reading files, creating the uniquely named output file).
//!

/// Utilities for filesystem operations.
pub mod fs;
