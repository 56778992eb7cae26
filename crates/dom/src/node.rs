//! Node wrapper - DOM-like navigation over one parsed node
//!
//! A `Dom` borrows a node of a tree owned by [`crate::Document`]. Every
//! traversal returns a fresh wrapper; a missing node is a wrapper with no
//! node behind it, so chains like
//! `root.first_element_child().next_element_sibling().id()` never fail.
//!
//! ```text
//! Document (owns Html) → Dom<'a> { Option<NodeRef> } → Dom<'a> ...
//!                              ↓ first search
//!                        flat node list → flat element list (OnceCell)
//! ```

use std::cell::OnceCell;
use std::fmt;

use ahash::AHashMap;
use ego_tree::NodeRef;
use scraper::node::Element;
use scraper::Node;

use crate::error::Result;
use crate::serializer;
use crate::types::NodeKind;
use crate::utils::{self, ClassTokens};

/// Read-only wrapper around one node of a parsed tree, or the absent node
pub struct Dom<'a> {
    node: Option<NodeRef<'a, Node>>,

    /// All nodes of the subtree, self included, pre-order
    flat_nodes: OnceCell<Vec<NodeRef<'a, Node>>>,

    /// `flat_nodes` filtered to elements
    flat_elements: OnceCell<Vec<NodeRef<'a, Node>>>,
}

impl<'a> Dom<'a> {
    /// Wrap a tree node (or nothing)
    pub fn new(node: Option<NodeRef<'a, Node>>) -> Self {
        Self {
            node,
            flat_nodes: OnceCell::new(),
            flat_elements: OnceCell::new(),
        }
    }

    /// The absent node
    pub fn absent() -> Self {
        Self::new(None)
    }

    pub fn is_absent(&self) -> bool {
        self.node.is_none()
    }

    /// Underlying parser node, if any
    pub fn node(&self) -> Option<NodeRef<'a, Node>> {
        self.node
    }

    pub fn kind(&self) -> Option<NodeKind> {
        self.node.map(|node| NodeKind::of(node.value()))
    }

    /// Element tag, or the sentinel tag of a non-element node
    ///
    /// The absent node reports `""`.
    pub fn tag_name(&self) -> &'a str {
        match self.node {
            Some(node) => tag_of(node),
            None => "",
        }
    }

    pub fn first_element_child(&self) -> Dom<'a> {
        let start = self.node.and_then(|node| node.first_child());
        Dom::new(scan_elements(start, NodeRef::next_sibling))
    }

    pub fn last_element_child(&self) -> Dom<'a> {
        let start = self.node.and_then(|node| node.last_child());
        Dom::new(scan_elements(start, NodeRef::prev_sibling))
    }

    /// Next element in the parent's child list, skipping text and comments
    pub fn next_element_sibling(&self) -> Dom<'a> {
        let start = self.node.and_then(|node| node.next_sibling());
        Dom::new(scan_elements(start, NodeRef::next_sibling))
    }

    /// Previous element in the parent's child list, skipping text and comments
    pub fn previous_element_sibling(&self) -> Dom<'a> {
        let start = self.node.and_then(|node| node.prev_sibling());
        Dom::new(scan_elements(start, NodeRef::prev_sibling))
    }

    /// Direct element children in document order
    pub fn children(&self) -> Vec<Dom<'a>> {
        self.child_nodes()
            .filter(|child| child.value().is_element())
            .map(|child| Dom::new(Some(child)))
            .collect()
    }

    pub fn child_element_count(&self) -> usize {
        self.children().len()
    }

    /// Parent node; absent for the root
    pub fn parent(&self) -> Dom<'a> {
        Dom::new(self.node.and_then(|node| node.parent()))
    }

    /// Attribute name → value
    ///
    /// Later duplicates overwrite earlier ones. Non-elements have none.
    pub fn attributes(&self) -> AHashMap<String, String> {
        let mut attributes = AHashMap::new();
        if let Some(element) = self.element() {
            for (name, value) in element.attrs() {
                attributes.insert(name.to_string(), value.to_string());
            }
        }
        attributes
    }

    /// Single attribute value, looked up by the same keys as `attributes()`
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.element().and_then(|element| attr_of(element, name))
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn has_attributes(&self) -> bool {
        self.element()
            .map(|element| element.attrs().next().is_some())
            .unwrap_or(false)
    }

    /// Raw `class` attribute, or `""`
    pub fn class_name(&self) -> &'a str {
        self.attribute("class").unwrap_or("")
    }

    /// `class` split on single spaces
    ///
    /// A missing class attribute yields `[""]`. See [`Dom::classes`] for
    /// the list without empty tokens.
    pub fn class_list(&self) -> ClassTokens<'a> {
        utils::split_class_list(self.class_name())
    }

    /// Non-empty, whitespace-separated class tokens
    pub fn classes(&self) -> ClassTokens<'a> {
        utils::class_tokens(self.class_name())
    }

    /// `id` attribute, or `""`
    pub fn id(&self) -> &'a str {
        self.attribute("id").unwrap_or("")
    }

    /// Serialize this subtree back to markup
    pub fn render(&self) -> Result<String> {
        serializer::render(self.node)
    }

    /// First element of the subtree (self included) whose id equals `id`
    pub fn get_element_by_id(&self, id: &str) -> Dom<'a> {
        let found = self
            .flat_elements()
            .iter()
            .copied()
            .find(|&node| id_of(node) == id);
        Dom::new(found)
    }

    /// Elements of the subtree (self included) with tag `tag`
    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<Dom<'a>> {
        self.flat_elements()
            .iter()
            .copied()
            .filter(|&node| tag_of(node) == tag)
            .map(|node| Dom::new(Some(node)))
            .collect()
    }

    /// Elements of the subtree (self included) whose class list contains `class`
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<Dom<'a>> {
        self.flat_elements()
            .iter()
            .copied()
            .filter(|&node| utils::split_class_list(class_of(node)).contains(&class))
            .map(|node| Dom::new(Some(node)))
            .collect()
    }

    /// Text content
    ///
    /// With `full == false` only direct text children are joined; with
    /// `full == true` every text node of the subtree is, in document order.
    pub fn text(&self, full: bool) -> String {
        if full {
            utils::join_text(self.flat_nodes().iter().filter_map(|&node| text_of(node)))
        } else {
            utils::join_text(self.child_nodes().filter_map(text_of))
        }
    }

    fn element(&self) -> Option<&'a Element> {
        self.node.and_then(|node| node.value().as_element())
    }

    fn child_nodes(&self) -> impl Iterator<Item = NodeRef<'a, Node>> {
        let first = self.node.and_then(|node| node.first_child());
        std::iter::successors(first, NodeRef::next_sibling)
    }

    fn flat_nodes(&self) -> &[NodeRef<'a, Node>] {
        self.flat_nodes.get_or_init(|| {
            let nodes = match self.node {
                Some(node) => flatten(node),
                None => Vec::new(),
            };
            tracing::trace!(tag = self.tag_name(), len = nodes.len(), "cached flat node list");
            nodes
        })
    }

    fn flat_elements(&self) -> &[NodeRef<'a, Node>] {
        self.flat_elements.get_or_init(|| {
            let elements: Vec<_> = self
                .flat_nodes()
                .iter()
                .copied()
                .filter(|node| node.value().is_element())
                .collect();
            tracing::trace!(tag = self.tag_name(), len = elements.len(), "cached flat element list");
            elements
        })
    }
}

impl Clone for Dom<'_> {
    /// Clones the node reference only; caches start empty
    fn clone(&self) -> Self {
        Dom::new(self.node)
    }
}

impl Default for Dom<'_> {
    fn default() -> Self {
        Self::absent()
    }
}

impl fmt::Debug for Dom<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dom")
            .field("kind", &self.kind())
            .field("tag_name", &self.tag_name())
            .field("id", &self.id())
            .finish()
    }
}

/// Walk a link chain from `start`, returning the first element
fn scan_elements<'a, F>(start: Option<NodeRef<'a, Node>>, step: F) -> Option<NodeRef<'a, Node>>
where
    F: FnMut(&NodeRef<'a, Node>) -> Option<NodeRef<'a, Node>>,
{
    std::iter::successors(start, step).find(|node| node.value().is_element())
}

/// Pre-order depth-first enumeration of a subtree, root first
///
/// Iterative, so deep documents cannot overflow the stack.
fn flatten(root: NodeRef<'_, Node>) -> Vec<NodeRef<'_, Node>> {
    let mut nodes = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        nodes.push(node);

        // Push children in reverse order (so they're visited left-to-right)
        stack.extend(std::iter::successors(node.last_child(), NodeRef::prev_sibling));
    }

    nodes
}

fn tag_of(node: NodeRef<'_, Node>) -> &str {
    match node.value() {
        Node::Element(element) => element.name(),
        other => NodeKind::of(other).sentinel_tag().unwrap_or(""),
    }
}

/// Attribute by local name, ignoring namespace; the last match wins
///
/// `Element::attr` only matches attributes without a namespace, which
/// misses foreign content such as `xlink:href`.
fn attr_of<'a>(element: &'a Element, name: &str) -> Option<&'a str> {
    element
        .attrs()
        .filter(|&(key, _)| key == name)
        .last()
        .map(|(_, value)| value)
}

fn id_of(node: NodeRef<'_, Node>) -> &str {
    node.value()
        .as_element()
        .and_then(|element| attr_of(element, "id"))
        .unwrap_or("")
}

fn class_of(node: NodeRef<'_, Node>) -> &str {
    node.value()
        .as_element()
        .and_then(|element| attr_of(element, "class"))
        .unwrap_or("")
}

fn text_of(node: NodeRef<'_, Node>) -> Option<&str> {
    node.value().as_text().map(|text| &*text.text)
}
