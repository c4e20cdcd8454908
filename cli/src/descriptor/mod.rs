//! # Project Descriptors (`descriptor`)
//!
//! File: cli/src/descriptor/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything needed to turn one project file into a `ProjectScript`:
//!
//! - **`document`**: Loads the XML into a read-only element tree (`ProjectDescriptor`).
//! - **`parser`**: Extracts the assembly name and filtered references (`DescriptorParser`).
//!
//! ```text
//! let descriptor = ProjectDescriptor::parse(&xml)?;
//! let script = DescriptorParser::default().parse(&descriptor)?;
//! ```
//!

/// XML loading into an element tree.
pub mod document;
/// Name and reference extraction.
pub mod parser;

pub use document::{Element, MarkupError, ProjectDescriptor};
pub use parser::{DescriptorParser, ProjectScript};
