//! # yumlscript Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests: locating the compiled
//! `yumlscript` binary and writing small MSBuild project files into
//! temporary directory trees.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub const MSBUILD_NAMESPACE: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// # Get yumlscript Command (`yumlscript_cmd`)
///
/// Creates an `assert_cmd::Command` for the `yumlscript` binary built for this test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn yumlscript_cmd() -> Command {
    Command::cargo_bin("yumlscript").expect("Failed to find yumlscript binary for testing")
}

/// Builds a project file with the given assembly name, plain references,
/// and project references (`(include path, name)` pairs).
pub fn project_xml(name: &str, references: &[&str], project_references: &[(&str, &str)]) -> String {
    let mut items = String::new();
    for reference in references {
        items.push_str(&format!("    <Reference Include=\"{}\" />\n", reference));
    }
    for (include, project_name) in project_references {
        items.push_str(&format!(
            "    <ProjectReference Include=\"{}\">\n      <Name>{}</Name>\n    </ProjectReference>\n",
            include, project_name
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" DefaultTargets="Build" xmlns="{MSBUILD_NAMESPACE}">
  <PropertyGroup>
    <OutputType>Library</OutputType>
    <AssemblyName>{name}</AssemblyName>
  </PropertyGroup>
  <ItemGroup>
{items}  </ItemGroup>
  <ItemGroup>
    <Compile Include="Class1.cs" />
  </ItemGroup>
</Project>
"#
    )
}

/// Writes `content` to `dir/relative`, creating parent directories.
pub fn write_file(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create project directory");
    }
    fs::write(&path, content).expect("Failed to write project file");
}
