//! # yumlscript Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout yumlscript. Every error
//! is fatal to the run: there is no retry and no per-file recovery, so errors
//! simply propagate up to `main`, which prints them.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ScriptError`: A custom error enum using `thiserror` for the specific failure kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so callers can attach context
//!
//! The descriptor failures are split in two:
//! - `MalformedDescriptor`: the file is valid XML but lacks a required element or attribute
//! - `UnparsableDescriptor`: the file is not well-formed XML at all
//!
//! ## Examples
//!
//! ```text
//! // Return a specific error type
//! return Err(ScriptError::MalformedDescriptor(msg).into());
//!
//! // Check the kind of a propagated error (context layers are looked through)
//! let malformed = err
//!     .downcast_ref::<ScriptError>()
//!     .is_some_and(|e| matches!(e, ScriptError::MalformedDescriptor(_)));
//! ```
//!
use thiserror::Error;

/// Custom error type for yumlscript.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The project file loaded as XML but is missing a required construct,
    /// or has more than one assembly-name element.
    #[error("{0}")]
    MalformedDescriptor(String),

    /// The project file is not well-formed XML.
    #[error("Unparsable project file '{path}': {message}")]
    UnparsableDescriptor { path: String, message: String },

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
