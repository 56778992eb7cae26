//! DOM Serializer - Convert a subtree back to markup or to JSON
//!
//! This module handles:
//! - Passthrough markup rendering (elements go through scraper's serializer)
//! - A compact, serde-serializable snapshot of the element tree
//! - Attribute filtering and text capping for the snapshot

use std::collections::BTreeMap;
use std::fmt::Write;

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};
use serde::{Deserialize, Serialize};

use crate::error::{DomError, Result};
use crate::node::Dom;
use crate::types::{NodeKind, ACCEPTED_ATTRIBUTES};
use crate::utils;

/// Elements whose text children are emitted unescaped
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script",
    "style",
    "xmp",
    "iframe",
    "noembed",
    "noframes",
    "plaintext",
];

/// Render a subtree to markup
///
/// Fails for the absent node. Output is normalized by the parser, so it is
/// not byte-identical to the original input.
pub fn render(node: Option<NodeRef<'_, Node>>) -> Result<String> {
    let node = node.ok_or_else(|| DomError::Render("cannot render an absent node".to_string()))?;
    let mut output = String::with_capacity(256);
    render_node(node, &mut output)?;
    tracing::trace!(bytes = output.len(), "rendered subtree");
    Ok(output)
}

fn render_node(node: NodeRef<'_, Node>, output: &mut String) -> Result<()> {
    match node.value() {
        Node::Document | Node::Fragment => {
            for child in node.children() {
                render_node(child, output)?;
            }
        }
        Node::Element(_) => {
            let element = ElementRef::wrap(node)
                .ok_or_else(|| DomError::Render("element node rejected by renderer".to_string()))?;
            output.push_str(&element.html());
        }
        Node::Text(text) => {
            if parent_is_raw_text(node) {
                output.push_str(&text.text);
            } else {
                utils::escape_text(&text.text, output);
            }
        }
        Node::Comment(comment) => write!(output, "<!--{}-->", &*comment.comment)?,
        Node::Doctype(doctype) => write!(output, "<!DOCTYPE {}>", doctype.name())?,
        Node::ProcessingInstruction(pi) => write!(output, "<?{} {}>", &*pi.target, &*pi.data)?,
    }
    Ok(())
}

fn parent_is_raw_text(node: NodeRef<'_, Node>) -> bool {
    node.parent()
        .and_then(|parent| parent.value().as_element().map(|element| element.name()))
        .map(|name| RAW_TEXT_ELEMENTS.contains(&name))
        .unwrap_or(false)
}

/// Serializer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerConfig {
    /// Attributes kept in snapshots; `data-*` matches any data attribute
    pub include_attributes: Vec<String>,
    pub include_text: bool,
    pub max_text_length: usize,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            include_attributes: ACCEPTED_ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
            include_text: true,
            max_text_length: 200,
        }
    }
}

impl SerializerConfig {
    fn includes(&self, name: &str) -> bool {
        self.include_attributes
            .iter()
            .any(|allowed| allowed == name || (allowed == "data-*" && name.starts_with("data-")))
    }
}

/// One node of a snapshot: an element, or the document root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub kind: NodeKind,
    pub tag_name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Direct text, capped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    /// Number of nodes in this snapshot, self included
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(NodeSnapshot::count).sum::<usize>()
    }
}

/// DOM Tree Serializer
pub struct DomSerializer {
    config: SerializerConfig,
}

impl DomSerializer {
    pub fn new() -> Self {
        Self::with_config(SerializerConfig::default())
    }

    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    /// Markup for the subtree rooted at `dom`
    pub fn render(&self, dom: &Dom<'_>) -> Result<String> {
        dom.render()
    }

    /// Element tree rooted at `dom`; `None` for the absent node
    pub fn snapshot(&self, dom: &Dom<'_>) -> Option<NodeSnapshot> {
        let kind = dom.kind()?;

        let attributes = dom
            .attributes()
            .into_iter()
            .filter(|(name, _)| self.config.includes(name))
            .collect();

        let text = if self.config.include_text {
            let text = dom.text(false);
            (!text.is_empty()).then(|| utils::cap_text_length(&text, self.config.max_text_length))
        } else {
            None
        };

        let children = dom
            .children()
            .iter()
            .filter_map(|child| self.snapshot(child))
            .collect();

        Some(NodeSnapshot {
            kind,
            tag_name: dom.tag_name().to_string(),
            attributes,
            text,
            children,
        })
    }

    /// Snapshot as pretty JSON; the absent node becomes `null`
    pub fn to_json(&self, dom: &Dom<'_>) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot(dom))?)
    }
}

impl Default for DomSerializer {
    fn default() -> Self {
        Self::new()
    }
}
