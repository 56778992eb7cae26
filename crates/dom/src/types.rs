//! Core type definitions for the node wrapper
//!
//! Key design principles:
//! 1. Node kinds are a tagged variant, not a runtime type flag
//! 2. Tag sentinels are constants, compared by value
//! 3. Reference data (attribute allow-list) lives next to the types

use scraper::Node;
use serde::{Deserialize, Serialize};

/// Tag reported by text nodes
pub const TEXT_TAG: &str = "text";

/// Tag reported by document (and fragment) roots
pub const DOCUMENT_TAG: &str = "document";

/// Tag reported by doctype nodes
pub const DOCTYPE_TAG: &str = "doctype";

/// Tag reported by comment nodes
pub const COMMENT_TAG: &str = "comment";

/// Tag reported by processing instructions
pub const PROCESSING_INSTRUCTION_TAG: &str = "processing-instruction";

/// Kind of a parsed tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Document,
    Fragment,
    Doctype,
    Element,
    Text,
    Comment,
    ProcessingInstruction,
}

impl NodeKind {
    /// Classify a parser node
    pub fn of(node: &Node) -> Self {
        match node {
            Node::Document => NodeKind::Document,
            Node::Fragment => NodeKind::Fragment,
            Node::Doctype(_) => NodeKind::Doctype,
            Node::Element(_) => NodeKind::Element,
            Node::Text(_) => NodeKind::Text,
            Node::Comment(_) => NodeKind::Comment,
            Node::ProcessingInstruction(_) => NodeKind::ProcessingInstruction,
        }
    }

    /// Sentinel tag for non-element kinds; `None` for elements
    pub fn sentinel_tag(self) -> Option<&'static str> {
        match self {
            NodeKind::Document | NodeKind::Fragment => Some(DOCUMENT_TAG),
            NodeKind::Doctype => Some(DOCTYPE_TAG),
            NodeKind::Text => Some(TEXT_TAG),
            NodeKind::Comment => Some(COMMENT_TAG),
            NodeKind::ProcessingInstruction => Some(PROCESSING_INSTRUCTION_TAG),
            NodeKind::Element => None,
        }
    }

    pub fn is_element(self) -> bool {
        self == NodeKind::Element
    }

    pub fn is_text(self) -> bool {
        self == NodeKind::Text
    }
}

/// Known HTML attribute names
///
/// Reference data only. Nothing in traversal or search filters on it;
/// `Dom::attributes` returns whatever the parser captured.
pub const ACCEPTED_ATTRIBUTES: &[&str] = &[
    "accept",
    "accept-charset",
    "accesskey",
    "action",
    "alt",
    "async",
    "autocomplete",
    "autofocus",
    "autoplay",
    "charset",
    "checked",
    "cite",
    "content",
    "contenteditable",
    "controls",
    "coords",
    "data",
    "data-*",
    "datetime",
    "default",
    "defer",
    "dir",
    "dirname",
    "disabled",
    "download",
    "draggable",
    "enctype",
    "enterkeyhint",
    "for",
    "form",
    "formaction",
    "headers",
    "href",
    "hreflang",
    "http-equiv",
    "inert",
    "inputmode",
    "ismap",
    "kind",
    "label",
    "lang",
    "list",
    "loop",
    "low",
    "max",
    "maxlength",
    "media",
    "method",
    "min",
    "multiple",
    "muted",
    "name",
    "novalidate",
    "onabort",
    "onafterprint",
    "onbeforeprint",
    "onbeforeunload",
    "onblur",
    "oncanplay",
    "oncanplaythrough",
    "onchange",
    "onclick",
    "oncontextmenu",
    "oncopy",
    "oncuechange",
    "oncut",
    "ondblclick",
    "ondrag",
    "ondragend",
    "ondragenter",
    "ondragleave",
    "ondragover",
    "ondragstart",
    "ondrop",
    "ondurationchange",
    "onemptied",
    "onended",
    "onerror",
    "onfocus",
    "onhashchange",
    "oninput",
    "oninvalid",
    "onkeydown",
    "onkeypress",
    "onkeyup",
    "onload",
    "onloadeddata",
    "onloadedmetadata",
    "onloadstart",
    "onmousedown",
    "onmousemove",
    "onmouseout",
    "onmouseover",
    "onmouseup",
    "onmousewheel",
    "onoffline",
    "ononline",
    "onpagehide",
    "onpageshow",
    "onpaste",
    "onpause",
    "onplay",
    "onplaying",
    "onpopstate",
    "onprogress",
    "onratechange",
    "onreset",
    "onresize",
    "onscroll",
    "onsearch",
    "onseeked",
    "onseeking",
    "onselect",
    "onstalled",
    "onstorage",
    "onsubmit",
    "onsuspend",
    "ontimeupdate",
    "ontoggle",
    "onunload",
    "onvolumechange",
    "onwaiting",
    "onwheel",
    "open",
    "optimum",
    "pattern",
    "placeholder",
    "popover",
    "popovertarget",
    "popovertargetaction",
    "poster",
    "preload",
    "readonly",
    "rel",
    "required",
    "reversed",
    "sandbox",
    "scope",
    "selected",
    "shape",
    "span",
    "spellcheck",
    "src",
    "srcdoc",
    "srclang",
    "srcset",
    "start",
    "step",
    "tabindex",
    "target",
    "title",
    "translate",
    "type",
    "usemap",
    "value",
];

/// Check a name against the allow-list, honouring the `data-*` wildcard
pub fn is_accepted_attribute(name: &str) -> bool {
    if name.starts_with("data-") && name.len() > "data-".len() {
        return ACCEPTED_ATTRIBUTES.contains(&"data-*");
    }
    ACCEPTED_ATTRIBUTES.contains(&name)
}
