//! # yumlscript Configuration
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module holds the immutable configuration values that drive a run:
//! which XML constructs identify a project's name and references (the
//! *dialect*), which files count as project descriptors, and how the output
//! script is named.
//!
//! ## Architecture
//!
//! - `DialectConfig`: namespace and element/attribute names of the descriptor format,
//!   plus the reference ignore-prefixes and truncation separator
//! - `ScanConfig`: the file-extension suffix that marks a project descriptor
//! - `OutputConfig`: base name and extension of the generated script
//!
//! Every structure implements `Default` with the MSBuild 2003 values, and
//! derives `Deserialize` with `#[serde(default)]` so a partial TOML document
//! only overrides what it names. The CLI always runs with `Config::default()`;
//! `Config::from_toml_str` exists to describe alternate dialects.
//!
//! ## Examples
//!
//! ```text
//! [dialect]
//! namespace = ""
//! ignore_prefixes = ["Contoso."]
//!
//! [scan]
//! descriptor_suffix = "proj"
//! ```
//!
use crate::core::error::{Result, ScriptError};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use tracing::debug;

/// The MSBuild project XML namespace.
pub const MSBUILD_NAMESPACE: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// Top-level configuration for a run.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub dialect: DialectConfig,
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

/// Names of the descriptor constructs the parser looks for.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DialectConfig {
    /// Namespace URI of every element the parser matches. Empty means "no namespace".
    pub namespace: String,
    /// Element holding the name of the compiled assembly. Must occur exactly once.
    pub assembly_name_element: String,
    /// Grouping element whose direct children are references.
    pub item_group_element: String,
    /// Plain library reference; the name is its include attribute.
    pub reference_element: String,
    /// Reference to another project; the name is its child name element.
    pub project_reference_element: String,
    /// Child of a project reference holding the referenced project's name.
    pub project_name_element: String,
    pub include_attribute: String,
    /// References starting with any of these (case-sensitive) are dropped.
    pub ignore_prefixes: Vec<String>,
    /// References are truncated at the first occurrence of this character.
    pub separator: char,
}

impl Default for DialectConfig {
    fn default() -> Self {
        DialectConfig {
            namespace: MSBUILD_NAMESPACE.to_string(),
            assembly_name_element: "AssemblyName".to_string(),
            item_group_element: "ItemGroup".to_string(),
            reference_element: "Reference".to_string(),
            project_reference_element: "ProjectReference".to_string(),
            project_name_element: "Name".to_string(),
            include_attribute: "Include".to_string(),
            ignore_prefixes: vec!["System".to_string(), "Microsoft".to_string()],
            separator: ',',
        }
    }
}

impl DialectConfig {
    /// The namespace to match element names against, `None` when unqualified.
    pub fn namespace(&self) -> Option<&str> {
        (!self.namespace.is_empty()).then_some(self.namespace.as_str())
    }
}

/// Which files the tree scanner treats as project descriptors.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// A file matches when its final extension ends with this suffix (`*.*proj`).
    pub descriptor_suffix: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            descriptor_suffix: "proj".to_string(),
        }
    }
}

/// Naming of the generated script file.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub base_name: String,
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            base_name: "yumlScript".to_string(),
            extension: "txt".to_string(),
        }
    }
}

impl Config {
    /// Parses a (possibly partial) TOML configuration and validates it.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let config: Config =
            toml::from_str(content).context("Failed to parse TOML configuration")?;
        config.validate().context("Configuration validation failed")?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Rejects settings that would make the scanner or parser match nothing sensible.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("scan.descriptor_suffix", &self.scan.descriptor_suffix),
            ("output.base_name", &self.output.base_name),
            ("dialect.assembly_name_element", &self.dialect.assembly_name_element),
            ("dialect.item_group_element", &self.dialect.item_group_element),
            ("dialect.reference_element", &self.dialect.reference_element),
            (
                "dialect.project_reference_element",
                &self.dialect.project_reference_element,
            ),
            ("dialect.project_name_element", &self.dialect.project_name_element),
            ("dialect.include_attribute", &self.dialect.include_attribute),
        ];
        for (key, value) in required {
            if value.is_empty() {
                return Err(anyhow!(ScriptError::Config(format!(
                    "'{}' must not be empty.",
                    key
                ))));
            }
        }
        if self.dialect.ignore_prefixes.iter().any(String::is_empty) {
            // An empty prefix would match every reference.
            return Err(anyhow!(ScriptError::Config(
                "'dialect.ignore_prefixes' must not contain an empty prefix.".to_string()
            )));
        }
        Ok(())
    }
}
