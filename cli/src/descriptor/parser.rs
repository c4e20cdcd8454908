//! # Descriptor Parser
//!
//! File: cli/src/descriptor/parser.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Extracts a project's assembly name and its filtered reference list from a
//! loaded `ProjectDescriptor`. Which elements and attributes count is decided
//! entirely by the `DialectConfig` handed to `DescriptorParser::new`; the
//! default is the MSBuild 2003 project format.
//!
//! ## Rules
//!
//! - The assembly-name element must occur exactly once anywhere in the document.
//! - References are the direct children of every item-group element, visited in
//!   document order. Only the two reference kinds are considered; anything else
//!   inside an item group is skipped.
//! - A reference kind without the include attribute is an error. A project
//!   reference without its child name element is an error. Plain references use
//!   the attribute value; project references use the child element's text.
//! - Values starting with an ignore prefix are dropped. The rest are truncated
//!   at the first separator (`"MyLib, Version=1.0.0.0"` becomes `"MyLib"`).
//! - Order is preserved and duplicates are kept.
//!
use crate::core::config::DialectConfig;
use crate::core::error::{Result, ScriptError};
use crate::descriptor::document::{Element, ProjectDescriptor};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReferenceKind {
    /// A library reference named by its include attribute.
    Assembly,
    /// Another project, named by its child name element.
    Project,
}

/// The data extracted from one project file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectScript {
    pub name: String,
    pub references: Vec<String>,
}

impl ProjectScript {
    /// Writes `// <name>` followed by one `[<name>]->[<reference>]` line per reference.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "// {}", self.name)?;
        for reference in &self.references {
            writeln!(sink, "[{}]->[{}]", self.name, reference)?;
        }
        Ok(())
    }
}

/// Extracts names and references according to a descriptor dialect.
#[derive(Debug, Clone, Default)]
pub struct DescriptorParser {
    dialect: DialectConfig,
}

impl DescriptorParser {
    pub fn new(dialect: DialectConfig) -> Self {
        DescriptorParser { dialect }
    }

    /// Returns the text of the single assembly-name element.
    ///
    /// # Errors
    ///
    /// `ScriptError::MalformedDescriptor` when the element is missing or occurs
    /// more than once.
    pub fn extract_name(&self, descriptor: &ProjectDescriptor) -> Result<String> {
        let element_name = &self.dialect.assembly_name_element;
        let matches: Vec<&Element> = descriptor
            .descendants_named(self.dialect.namespace(), element_name)
            .collect();

        match matches.as_slice() {
            [element] => Ok(element.text()),
            [] => Err(ScriptError::MalformedDescriptor(format!(
                "Project is missing the '{}' element.",
                element_name
            ))
            .into()),
            several => Err(ScriptError::MalformedDescriptor(format!(
                "Project has {} '{}' elements; expected exactly one.",
                several.len(),
                element_name
            ))
            .into()),
        }
    }

    /// Returns every reference in the descriptor after filtering and truncation.
    ///
    /// # Errors
    ///
    /// `ScriptError::MalformedDescriptor` when a reference element lacks the
    /// include attribute, or a project reference lacks its name element.
    pub fn extract_references(&self, descriptor: &ProjectDescriptor) -> Result<Vec<String>> {
        let namespace = self.dialect.namespace();
        let mut references = Vec::new();

        for item_group in descriptor.descendants_named(namespace, &self.dialect.item_group_element)
        {
            for item in item_group.child_elements() {
                let Some(kind) = self.reference_kind(item) else {
                    continue;
                };

                let include = item.attribute(&self.dialect.include_attribute).ok_or_else(|| {
                    ScriptError::MalformedDescriptor(format!(
                        "The '{}' attribute was missing from the '{}' element.",
                        self.dialect.include_attribute,
                        item.name()
                    ))
                })?;

                let reference = match kind {
                    ReferenceKind::Assembly => include.to_string(),
                    ReferenceKind::Project => item
                        .children_named(namespace, &self.dialect.project_name_element)
                        .next()
                        .map(Element::text)
                        .ok_or_else(|| {
                            ScriptError::MalformedDescriptor(format!(
                                "The '{}' element was missing from a '{}' element.",
                                self.dialect.project_name_element, item.name()
                            ))
                        })?,
                };

                if let Some(reference) = self.filter_reference(&reference) {
                    references.push(reference.to_string());
                }
            }
        }

        Ok(references)
    }

    /// Extracts the name first, then the references.
    pub fn parse(&self, descriptor: &ProjectDescriptor) -> Result<ProjectScript> {
        let name = self.extract_name(descriptor)?;
        let references = self.extract_references(descriptor)?;
        Ok(ProjectScript { name, references })
    }

    fn reference_kind(&self, element: &Element) -> Option<ReferenceKind> {
        let namespace = self.dialect.namespace();
        if element.is_named(namespace, &self.dialect.reference_element) {
            Some(ReferenceKind::Assembly)
        } else if element.is_named(namespace, &self.dialect.project_reference_element) {
            Some(ReferenceKind::Project)
        } else {
            None
        }
    }

    /// `None` for ignored references, otherwise the value up to the first separator.
    fn filter_reference<'a>(&self, reference: &'a str) -> Option<&'a str> {
        if self
            .dialect
            .ignore_prefixes
            .iter()
            .any(|prefix| reference.starts_with(prefix.as_str()))
        {
            return None;
        }
        Some(
            reference
                .split_once(self.dialect.separator)
                .map_or(reference, |(head, _)| head),
        )
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Config, MSBUILD_NAMESPACE};

    fn project(body: &str) -> ProjectDescriptor {
        ProjectDescriptor::parse(&format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" DefaultTargets="Build" xmlns="{MSBUILD_NAMESPACE}">
{body}
</Project>"#
        ))
        .expect("test project should be well-formed")
    }

    fn is_malformed(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<ScriptError>(),
            Some(ScriptError::MalformedDescriptor(_))
        )
    }

    #[test]
    fn test_extract_name_returns_exact_text() {
        let descriptor = project(
            "<PropertyGroup><AssemblyName> Contoso.Core </AssemblyName></PropertyGroup>",
        );
        let name = DescriptorParser::default().extract_name(&descriptor).unwrap();
        assert_eq!(name, " Contoso.Core ");
    }

    #[test]
    fn test_extract_name_missing() {
        let descriptor = project("<PropertyGroup><RootNamespace>A</RootNamespace></PropertyGroup>");
        let err = DescriptorParser::default()
            .extract_name(&descriptor)
            .unwrap_err();
        assert!(is_malformed(&err));
        assert_eq!(err.to_string(), "Project is missing the 'AssemblyName' element.");
    }

    #[test]
    fn test_extract_name_duplicated() {
        let descriptor = project(
            "<PropertyGroup><AssemblyName>A</AssemblyName></PropertyGroup>
             <PropertyGroup Condition=\"'$(Configuration)' == 'Debug'\">
               <AssemblyName>A.Debug</AssemblyName>
             </PropertyGroup>",
        );
        let err = DescriptorParser::default()
            .extract_name(&descriptor)
            .unwrap_err();
        assert!(is_malformed(&err));
        assert!(err.to_string().contains("'AssemblyName'"));
    }

    #[test]
    fn test_extract_name_ignores_other_namespaces() {
        let descriptor = ProjectDescriptor::parse(
            "<Project><PropertyGroup><AssemblyName>A</AssemblyName></PropertyGroup></Project>",
        )
        .unwrap();
        let err = DescriptorParser::default()
            .extract_name(&descriptor)
            .unwrap_err();
        assert!(is_malformed(&err));
    }

    #[test]
    fn test_references_filtered_and_truncated() {
        let descriptor = project(
            r#"<ItemGroup>
    <Reference Include="System.Core" />
    <Reference Include="MyLib, Version=1.0.0.0, Culture=neutral">
      <HintPath>..\lib\MyLib.dll</HintPath>
    </Reference>
    <Reference Include="Microsoft.Foo" />
    <Reference Include="OtherProj" />
  </ItemGroup>"#,
        );
        let references = DescriptorParser::default()
            .extract_references(&descriptor)
            .unwrap();
        assert_eq!(references, vec!["MyLib", "OtherProj"]);
    }

    #[test]
    fn test_project_reference_uses_name_element() {
        let descriptor = project(
            r#"<ItemGroup>
    <ProjectReference Include="..\Data\Data.csproj">
      <Project>{6B1C5E6A-1111-2222-3333-444455556666}</Project>
      <Name>Contoso.Data</Name>
    </ProjectReference>
  </ItemGroup>"#,
        );
        let references = DescriptorParser::default()
            .extract_references(&descriptor)
            .unwrap();
        assert_eq!(references, vec!["Contoso.Data"]);
    }

    #[test]
    fn test_groups_and_duplicates_keep_document_order() {
        let descriptor = project(
            r#"<ItemGroup>
    <Compile Include="Program.cs" />
    <Reference Include="B" />
    <None Include="App.config" />
  </ItemGroup>
  <ItemGroup>
    <ProjectReference Include="..\A\A.csproj"><Name>A</Name></ProjectReference>
    <Reference Include="B" />
  </ItemGroup>"#,
        );
        let references = DescriptorParser::default()
            .extract_references(&descriptor)
            .unwrap();
        assert_eq!(references, vec!["B", "A", "B"]);
    }

    #[test]
    fn test_reference_without_include_is_malformed() {
        let descriptor =
            project("<ItemGroup><Reference><HintPath>x.dll</HintPath></Reference></ItemGroup>");
        let err = DescriptorParser::default()
            .extract_references(&descriptor)
            .unwrap_err();
        assert!(is_malformed(&err));
        assert_eq!(
            err.to_string(),
            "The 'Include' attribute was missing from the 'Reference' element."
        );
    }

    #[test]
    fn test_project_reference_without_include_is_malformed() {
        let descriptor =
            project("<ItemGroup><ProjectReference><Name>A</Name></ProjectReference></ItemGroup>");
        let err = DescriptorParser::default()
            .extract_references(&descriptor)
            .unwrap_err();
        assert!(is_malformed(&err));
        assert_eq!(
            err.to_string(),
            "The 'Include' attribute was missing from the 'ProjectReference' element."
        );
    }

    #[test]
    fn test_project_reference_without_name_is_malformed() {
        let descriptor =
            project(r#"<ItemGroup><ProjectReference Include="..\A\A.csproj" /></ItemGroup>"#);
        let err = DescriptorParser::default()
            .extract_references(&descriptor)
            .unwrap_err();
        assert!(is_malformed(&err));
        assert_eq!(
            err.to_string(),
            "The 'Name' element was missing from a 'ProjectReference' element."
        );
    }

    #[test]
    fn test_unknown_children_without_include_are_skipped() {
        let descriptor = project("<ItemGroup><Folder /><Content>readme</Content></ItemGroup>");
        let references = DescriptorParser::default()
            .extract_references(&descriptor)
            .unwrap();
        assert!(references.is_empty());
    }

    #[test]
    fn test_ignored_project_reference_name() {
        let descriptor = project(
            r#"<ItemGroup><ProjectReference Include="x"><Name>System.Extras</Name></ProjectReference></ItemGroup>"#,
        );
        let references = DescriptorParser::default()
            .extract_references(&descriptor)
            .unwrap();
        assert!(references.is_empty());
    }

    #[test]
    fn test_alternate_dialect() {
        let config = Config::from_toml_str(
            r#"
            [dialect]
            namespace = ""
            ignore_prefixes = ["Contoso."]
            separator = ";"
        "#,
        )
        .unwrap();
        let parser = DescriptorParser::new(config.dialect);
        let descriptor = ProjectDescriptor::parse(
            r#"<Project>
  <PropertyGroup><AssemblyName>App</AssemblyName></PropertyGroup>
  <ItemGroup>
    <Reference Include="Contoso.Internal" />
    <Reference Include="System.Core" />
    <Reference Include="Vendor.Lib;v2" />
  </ItemGroup>
</Project>"#,
        )
        .unwrap();

        let script = parser.parse(&descriptor).unwrap();
        assert_eq!(script.name, "App");
        assert_eq!(script.references, vec!["System.Core", "Vendor.Lib"]);
    }

    #[test]
    fn test_parse_checks_name_before_references() {
        let descriptor = project("<ItemGroup><Reference /></ItemGroup>");
        let err = DescriptorParser::default().parse(&descriptor).unwrap_err();
        assert!(err.to_string().contains("AssemblyName"));
    }

    #[test]
    fn test_script_lines() {
        let script = ProjectScript {
            name: "A".to_string(),
            references: vec!["B".to_string(), "C".to_string()],
        };
        let mut out = Vec::new();
        script.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "// A\n[A]->[B]\n[A]->[C]\n");
    }
}
