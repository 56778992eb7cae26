//! HTML DOM Query Library
//!
//! DOM-like navigation and search over a parsed HTML document.
//!
//! ## Philosophy
//!
//! - **Parse once, borrow everywhere**: the `Document` owns the tree, wrappers borrow it
//! - **No special cases**: a missing node is just another wrapper, never an error
//! - **Lazy**: flattened node lists are built on first search and kept
//! - **Read only**: no mutation, no selector engine
//!
//! ## Core Design
//!
//! ```text
//! bytes/&str → DomService → Document (owns Html) → Dom<'a> → traversal / search / render
//! ```
//!
//! ```
//! use html_dom::Document;
//!
//! let doc = Document::parse(r#"<ul><li class="a b">one</li><li id="x">two</li></ul>"#);
//! let root = doc.root();
//!
//! assert_eq!(root.first_element_child().tag_name(), "html");
//! assert_eq!(root.get_elements_by_class_name("b").len(), 1);
//! assert_eq!(root.get_element_by_id("x").text(false), "two");
//! assert!(root.get_element_by_id("missing").parent().is_absent());
//! ```

pub mod document;
pub mod error;
pub mod node;
pub mod serializer;
pub mod service;
pub mod types;
pub mod utils;

pub use document::Document;
pub use error::{DomError, Result};
pub use node::Dom;
pub use serializer::{DomSerializer, NodeSnapshot, SerializerConfig};
pub use service::{DomService, DomServiceConfig};
pub use types::*;
