use std::fs::File;

use html_dom::{Document, Dom, DomSerializer, DomService, DomServiceConfig, NodeKind};

fn create_test_document() -> Document {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/index.html");
    let file = File::open(path).expect("Cannot read fixture: tests/fixtures/index.html");
    Document::from_reader(file).expect("Cannot parse fixture")
}

fn all_elements<'a>(dom: &Dom<'a>, out: &mut Vec<Dom<'a>>) {
    for child in dom.children() {
        all_elements(&child, out);
        out.push(child);
    }
}

#[test]
fn test_root() {
    let doc = create_test_document();
    let root = doc.root();
    assert_eq!(root.tag_name(), "document");
    assert_eq!(root.kind(), Some(NodeKind::Document));
    assert!(root.attributes().is_empty());
    assert!(!root.has_attribute("class"));
    assert!(!root.has_attributes());
    assert_eq!(root.class_name(), "");
    assert_eq!(root.class_list().as_slice(), [""]);
    assert_eq!(root.id(), "");
    assert_eq!(root.child_element_count(), 1);
    assert_eq!(root.first_element_child().tag_name(), "html");
    assert_eq!(root.last_element_child().tag_name(), "html");
    assert_eq!(root.children()[0].tag_name(), "html");
}

#[test]
fn test_head() {
    let doc = create_test_document();
    let head = doc.root().last_element_child().first_element_child();
    assert_eq!(head.tag_name(), "head");
    assert_eq!(head.child_element_count(), 6);

    let meta = head.first_element_child();
    assert_eq!(meta.tag_name(), "meta");
    assert_eq!(meta.attributes()["charset"], "UTF-8");
    assert_eq!(head.children()[0].tag_name(), "meta");

    let link = head.last_element_child().previous_element_sibling();
    assert_eq!(link.tag_name(), "link");
    assert_eq!(link.attribute("rel"), Some("icon"));
}

#[test]
fn test_body() {
    let doc = create_test_document();
    let body = doc
        .root()
        .last_element_child()
        .first_element_child()
        .next_element_sibling();
    assert_eq!(body.tag_name(), "body");
    assert_eq!(body.class_name(), "skin-vector skin-vector-search-vue mediawiki");
    assert_eq!(body.class_list().len(), 3);
    assert!(body.has_attribute("class"));
    assert!(body.has_attributes());
    assert!(html_dom::is_accepted_attribute("data-page"));
    assert_eq!(body.parent().tag_name(), "html");
}

#[test]
fn test_id_through_chain() {
    let doc = create_test_document();
    let head = doc.root().last_element_child().first_element_child();
    let dropdown = head
        .next_element_sibling()
        .first_element_child()
        .next_element_sibling()
        .first_element_child()
        .first_element_child()
        .first_element_child()
        .first_element_child();
    assert_eq!(dropdown.id(), "vector-main-menu-dropdown");
}

#[test]
fn test_get_element_by_id() {
    let doc = create_test_document();
    let root = doc.root();
    assert!(root.get_element_by_id("abc").is_absent());

    let checkbox = root.get_element_by_id("vector-main-menu-dropdown-checkbox");
    assert_eq!(checkbox.tag_name(), "input");
    assert_eq!(checkbox.attribute("type"), Some("checkbox"));
}

#[test]
fn test_get_elements_by_tag_name() {
    let doc = create_test_document();
    let root = doc.root();
    assert!(root.get_elements_by_tag_name("abc").is_empty());
    assert_eq!(root.get_elements_by_tag_name("div").len(), 8);
    assert_eq!(root.get_elements_by_tag_name("img").len(), 2);
    assert_eq!(root.get_elements_by_tag_name("a").len(), 10);
    assert_eq!(root.get_elements_by_tag_name("li").len(), 5);

    let headings: Vec<_> = root
        .get_elements_by_tag_name("h2")
        .iter()
        .map(|h| h.id())
        .collect();
    assert_eq!(headings, ["History", "Enumerated_types", "Package_system"]);
}

#[test]
fn test_get_elements_by_class_name() {
    let doc = create_test_document();
    let root = doc.root();
    assert!(root.get_elements_by_class_name("abc").is_empty());
    assert_eq!(root.get_elements_by_class_name("mw-default-size").len(), 1);
    assert_eq!(root.get_elements_by_class_name("mw-editsection").len(), 3);
    assert_eq!(root.get_elements_by_class_name("mw-heading2").len(), 3);
    assert_eq!(root.get_elements_by_class_name("vector-dropdown").len(), 1);
}

#[test]
fn test_search_within_subtree() {
    let doc = create_test_document();
    let footer = doc.root().get_element_by_id("footer");
    assert_eq!(footer.get_elements_by_tag_name("a").len(), 2);
    assert!(footer.get_element_by_id("toc").is_absent());
}

#[test]
fn test_text() {
    let doc = create_test_document();
    let root = doc.root();

    let toc_entry = root.get_element_by_id("toc-Enumerated_types");
    assert_eq!(toc_entry.text(false), "");
    assert_eq!(toc_entry.text(true), "Enumerated types");

    let heading = root.get_element_by_id("Enumerated_types");
    assert_eq!(heading.text(true), "Enumerated types");

    let paragraph = root
        .get_element_by_id("Package_system")
        .parent()
        .next_element_sibling();
    assert_eq!(paragraph.tag_name(), "p");
    assert!(paragraph.text(true).contains("other packages are accessible"));

    let history = root.get_element_by_id("History").parent().next_element_sibling();
    assert_eq!(history.text(true), "Work on the language began in 2006.");
}

#[test]
fn test_structural_properties() {
    let doc = create_test_document();
    let mut elements = Vec::new();
    all_elements(&doc.root(), &mut elements);
    assert!(elements.len() > 40);

    for element in &elements {
        assert_eq!(element.children().len(), element.child_element_count());
        let attributes = element.attributes();
        assert_eq!(element.has_attributes(), !attributes.is_empty());
        for name in attributes.keys() {
            assert!(element.has_attribute(name));
        }
        assert_eq!(element.kind(), Some(NodeKind::Element));
    }
}

#[test]
fn test_render() {
    let doc = create_test_document();
    let root = doc.root();

    let heading = root.get_element_by_id("firstHeading");
    let markup = heading.render().unwrap();
    assert!(markup.starts_with("<h1"));
    assert!(markup.ends_with("Rust (programming language)</h1>"));

    let document = root.render().unwrap();
    assert!(document.starts_with("<!DOCTYPE html>"));

    let reparsed = Document::parse(&document);
    assert_eq!(
        reparsed.root().get_elements_by_tag_name("a").len(),
        root.get_elements_by_tag_name("a").len()
    );

    assert!(root.get_element_by_id("abc").render().is_err());
}

#[test]
fn test_snapshot() {
    let doc = create_test_document();
    let footer = doc.root().get_element_by_id("footer");
    let snapshot = DomSerializer::new().snapshot(&footer).unwrap();
    assert_eq!(snapshot.tag_name, "footer");
    assert_eq!(snapshot.count(), 6);
}

#[test]
fn test_service_config() {
    let config = DomServiceConfig::from_json(r#"{"max_input_bytes": 64}"#).unwrap();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/index.html");
    let file = File::open(path).unwrap();
    assert!(DomService::with_config(config).parse_reader(file).is_err());
}
