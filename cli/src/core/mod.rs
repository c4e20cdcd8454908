//! # yumlscript Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by the descriptor
//! parser and the tree scanner:
//! - `config`: Immutable dialect, scan, and output settings
//! - `error`: Error types and the `Result` alias
//!
//! ```text
//! use crate::core::config::Config;
//! use crate::core::error::{Result, ScriptError};
//! ```
//!
pub mod config;
pub mod error;
