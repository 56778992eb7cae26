//! Parsed document storage
//!
//! The `Document` owns the tree produced by the HTML parser. Every `Dom`
//! wrapper borrows from it, so the borrow checker enforces that the tree
//! outlives all derived wrappers.
//!
//! ```text
//! Document { Html { Tree<Node> } }
//!     ↑ &'a
//! Dom<'a> ─ Dom<'a> ─ Dom<'a> ...
//! ```

use std::borrow::Cow;
use std::io::Read;

use scraper::Html;

use crate::error::Result;
use crate::node::Dom;
use crate::service::DomService;

/// An owned, parsed HTML document
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a complete document
    ///
    /// Malformed markup is recovered by the parser, never rejected.
    pub fn parse(markup: &str) -> Self {
        Self::from_html(Html::parse_document(markup))
    }

    /// Parse a fragment; the root reports the document tag
    pub fn parse_fragment(markup: &str) -> Self {
        Self::from_html(Html::parse_fragment(markup))
    }

    /// Read and parse a document from a byte stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        DomService::new().parse_reader(reader)
    }

    /// Parse bytes as UTF-8, replacing invalid sequences
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        DomService::new().parse_bytes(bytes)
    }

    pub(crate) fn from_html(html: Html) -> Self {
        Self { html }
    }

    /// Wrapper for the document (or fragment) root
    pub fn root(&self) -> Dom<'_> {
        Dom::new(Some(self.html.tree.root()))
    }

    /// First element child of the root, normally `<html>`
    pub fn root_element(&self) -> Dom<'_> {
        self.root().first_element_child()
    }

    /// Recoverable errors reported while parsing
    pub fn parse_errors(&self) -> &[Cow<'static, str>] {
        &self.html.errors
    }

    /// Total number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.html.tree.root().descendants().count()
    }

    /// Underlying parser output
    pub fn html(&self) -> &Html {
        &self.html
    }
}
