//! # Project Descriptor Document
//!
//! File: cli/src/descriptor/document.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Loads a project file's XML into a small, read-only element tree
//! (`ProjectDescriptor`). Each element records its resolved namespace URI,
//! local name, attributes, and child nodes, which is all the descriptor
//! parser needs to locate names and references.
//!
//! ## Architecture
//!
//! The tree is built from `quick_xml::NsReader` events. Open elements are kept
//! on a stack; when an element closes it is attached to its parent (or becomes
//! the root). Anything that would make the document ill-formed is reported as
//! a `MarkupError`:
//! - errors from the reader itself (mismatched end tags, bad attributes, bad escapes)
//! - prefixes that are not bound to a namespace
//! - a missing root element, or content after the root element
//! - elements still open at end of file
//!
//! Raw file bytes go through `ProjectDescriptor::from_bytes`, which picks the
//! encoding from a byte-order mark or, failing that, from the `encoding` named
//! in the XML declaration (UTF-8 when neither is present). Bytes that are not
//! valid in that encoding are a `MarkupError` like any other.
//!
//! Comments, processing instructions, the XML declaration, and the doctype
//! are dropped. Whitespace-only text is dropped as well, so an element's text
//! is exactly the non-blank character data written inside it.
//!
use quick_xml::encoding::{self, Decoder};
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::{NsReader, Reader};
use std::borrow::Cow;
use thiserror::Error;

/// Why a document could not be loaded.
#[derive(Error, Debug)]
pub enum MarkupError {
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Attribute(#[from] AttrError),

    #[error("namespace prefix '{0}' is not declared")]
    UnknownPrefix(String),

    #[error("the document has no root element")]
    NoRoot,

    #[error("content found outside the root element")]
    ContentOutsideRoot,

    #[error("element '{0}' is not closed")]
    Unclosed(String),
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// One XML element with its namespace resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    namespace: Option<String>,
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    fn open(
        resolved: ResolveResult,
        start: &BytesStart,
        decoder: Decoder,
    ) -> Result<Self, MarkupError> {
        let namespace = match resolved {
            ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.0).into_owned()),
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                return Err(MarkupError::UnknownPrefix(
                    String::from_utf8_lossy(&prefix).into_owned(),
                ))
            }
        };
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute.decode_and_unescape_value(decoder)?.into_owned();
            attributes.push((key, value));
        }

        Ok(Element {
            namespace,
            name,
            attributes,
            children: Vec::new(),
        })
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local name, without any prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_named(&self, namespace: Option<&str>, name: &str) -> bool {
        self.namespace.as_deref() == namespace && self.name == name
    }

    /// Value of the attribute whose qualified name is exactly `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct child elements in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Direct child elements with the given namespace and local name.
    pub fn children_named<'a>(
        &'a self,
        namespace: Option<&'a str>,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.child_elements()
            .filter(move |element| element.is_named(namespace, name))
    }

    /// All elements below this one, in document (pre-)order. Excludes `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        let mut stack: Vec<&Element> = self.child_elements().collect();
        stack.reverse();
        Descendants { stack }
    }

    /// Concatenated text of this element and all its descendants.
    pub fn text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(value) => out.push_str(value),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }
}

/// Pre-order iterator over the elements below a starting element.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        let first_child = self.stack.len();
        self.stack.extend(element.child_elements());
        self.stack[first_child..].reverse();
        Some(element)
    }
}

/// A loaded project file. Read-only; dropped once its data has been extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    root: Element,
}

impl ProjectDescriptor {
    /// Decodes and parses a complete XML document read straight from disk.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MarkupError> {
        let xml = decode_document(bytes)?;
        Self::parse(&xml)
    }

    /// Parses a complete XML document.
    pub fn parse(xml: &str) -> Result<Self, MarkupError> {
        let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
        let mut reader = NsReader::from_str(xml);
        let decoder = reader.decoder();

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let (resolved, event) = reader.read_resolved_event()?;
            match event {
                Event::Start(start) => {
                    if stack.is_empty() && root.is_some() {
                        return Err(MarkupError::ContentOutsideRoot);
                    }
                    stack.push(Element::open(resolved, &start, decoder)?);
                }
                Event::Empty(start) => {
                    let element = Element::open(resolved, &start, decoder)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    // The reader has already checked that the end tag matches.
                    let element = stack.pop().ok_or(MarkupError::ContentOutsideRoot)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    let text = text.unescape()?;
                    if text.trim().is_empty() {
                        continue;
                    }
                    let parent = stack.last_mut().ok_or(MarkupError::ContentOutsideRoot)?;
                    parent.children.push(Node::Text(text.into_owned()));
                }
                Event::CData(data) => {
                    let parent = stack.last_mut().ok_or(MarkupError::ContentOutsideRoot)?;
                    parent
                        .children
                        .push(Node::Text(String::from_utf8_lossy(&data).into_owned()));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.pop() {
            return Err(MarkupError::Unclosed(open.name));
        }
        root.map(|root| ProjectDescriptor { root })
            .ok_or(MarkupError::NoRoot)
    }

    /// The document element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Every element below the root with the given namespace and local name,
    /// in document order.
    pub fn descendants_named<'a>(
        &'a self,
        namespace: Option<&'a str>,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.root
            .descendants()
            .filter(move |element| element.is_named(namespace, name))
    }
}

/// Turns raw file bytes into text. A byte-order mark wins; otherwise the
/// declaration's `encoding` is used. The mark itself is not part of the result.
fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>, MarkupError> {
    if let Some((detected, bom_len)) = encoding::detect_encoding(bytes) {
        if bom_len > 0 || detected.name() != "UTF-8" {
            return Ok(encoding::decode(&bytes[bom_len..], detected)?);
        }
    }

    // Reading the first event lets the reader pick up a declared encoding.
    let mut reader = Reader::from_reader(bytes);
    reader.read_event()?;
    Ok(reader.decoder().decode(bytes)?)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), MarkupError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => return Err(MarkupError::ContentOutsideRoot),
    }
    Ok(())
}
