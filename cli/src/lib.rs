//! # yumlscript Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Scans a directory tree for MSBuild project files (`*.csproj`, `*.vbproj`,
//! any extension ending in `proj`) and writes a [yUML](https://yuml.me/)
//! script describing how the projects reference each other:
//!
//! ```text
//! // Contoso.App
//! [Contoso.App]->[Contoso.Data]
//! [Contoso.App]->[Newtonsoft.Json]
//! // Contoso.Data
//! ```
//!
//! ## Architecture
//!
//! - `core`: configuration and error types
//! - `common`: filesystem helpers
//! - `descriptor`: XML loading and name/reference extraction
//! - `scanner`: directory traversal and script output
//!
//! The binary (`src/main.rs`) is a thin wrapper around `scanner::ScriptWriter`.
//!
pub mod common;
pub mod core;
pub mod descriptor;
pub mod scanner;
