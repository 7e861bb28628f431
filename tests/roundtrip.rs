//! Round-trip tests that parse produced fragments back with an XML parser
//!
//! A fragment is a complete single-root XML document, so it can be handed to
//! the parser directly as well as concatenated into an `<svg>` document. The
//! serializers never escape attribute values; the boundary tests below pin
//! exactly where that limitation starts to bite.

use roxmltree::Document;

use svg_fragment::{element, escape_attr, line, path_with_attrs, polygon, rect_with_attrs};

/// Parse a fragment and return its attributes as (name, value) pairs in
/// document order.
fn parse_attrs(fragment: &str) -> Vec<(String, String)> {
    let doc = Document::parse(fragment).expect("fragment should parse");
    doc.root_element()
        .attributes()
        .map(|a| (a.name().to_string(), a.value().to_string()))
        .collect()
}

#[test]
fn test_custom_element_round_trips() {
    let names = ["offset", "stop-color", "stop-opacity"];
    let values = ["5%", "#1a2b3c", "0.75"];
    let svg = element("stop", &names, &values).unwrap();

    let expected: Vec<(String, String)> = names
        .iter()
        .zip(values)
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect();
    assert_eq!(parse_attrs(&svg), expected);
}

#[test]
fn test_polygon_points_round_trip() {
    let svg = polygon("0,0 10,0 5,10");
    assert_eq!(
        parse_attrs(&svg),
        vec![("points".to_string(), "0,0 10,0 5,10".to_string())]
    );
}

#[test]
fn test_attribute_free_element_round_trips() {
    let none: [&str; 0] = [];
    let svg = element("defs", &none, &none).unwrap();
    let doc = Document::parse(&svg).expect("fragment should parse");
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "defs");
    assert_eq!(root.attributes().count(), 0);
}

#[test]
fn test_fragments_concatenated_into_document() {
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg">{}{}</svg>"#,
        rect_with_attrs("0", "0", "10", "20", &["fill"], &["#0f0f23"]).unwrap(),
        line("0", "0", "10", "20"),
    );
    let doc = Document::parse(&svg).expect("document should parse");
    let children: Vec<_> = doc
        .root_element()
        .children()
        .filter(|n| n.is_element())
        .collect();

    assert_eq!(children.len(), 2);
    assert_eq!(children[0].tag_name().name(), "rect");
    assert_eq!(children[0].attribute("fill"), Some("#0f0f23"));
    assert_eq!(children[0].attribute("width"), Some("10"));
    assert_eq!(children[1].tag_name().name(), "line");
    assert_eq!(children[1].attribute("x2"), Some("10"));
}

#[test]
fn test_quote_in_value_breaks_parsing() {
    let svg = rect_with_attrs("0", "0", "1", "1", &["title"], &[r#"say "hi""#]).unwrap();
    assert!(Document::parse(&svg).is_err());
}

#[test]
fn test_angle_bracket_in_value_breaks_parsing() {
    let svg = path_with_attrs("M0 0", &["data-cmp"], &["a<b"]).unwrap();
    assert!(Document::parse(&svg).is_err());
}

#[test]
fn test_bare_ampersand_in_value_breaks_parsing() {
    let svg = element("text", &["data-pair"], &["salt & pepper"]).unwrap();
    assert!(Document::parse(&svg).is_err());
}

#[test]
fn test_apostrophe_in_value_is_harmless() {
    let svg = element("text", &["data-name"], &["d'Artagnan"]).unwrap();
    assert_eq!(
        parse_attrs(&svg),
        vec![("data-name".to_string(), "d'Artagnan".to_string())]
    );
}

#[test]
fn test_escaped_value_round_trips_to_original() {
    let hostile = r#""fish" & <chips>"#;
    let svg = element("text", &["data-label"], &[escape_attr(hostile).as_ref()]).unwrap();
    assert_eq!(
        parse_attrs(&svg),
        vec![("data-label".to_string(), hostile.to_string())]
    );
}
