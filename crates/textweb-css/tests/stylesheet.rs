//! Stylesheet tests - parsing, capacity and cascade order

use textweb_css::{parse_stylesheet, CssParser, StyleResolver, Stylesheet, MAX_DECLARATIONS, MAX_VALUE_LEN};
use textweb_dom::{DomTree, Element};

fn tree_with(elements: Vec<Element>) -> DomTree {
    let mut tree = DomTree::new();
    for element in elements {
        tree.insert(element, None).unwrap();
    }
    tree
}

fn classed(tag: &str, class: &str) -> Element {
    let mut element = Element::new(tag);
    element.set_class_name(class);
    element
}

// ============================================================================
// PARSING
// ============================================================================

#[test]
fn test_rule_blocks_flatten() {
    let sheet = parse_stylesheet(
        "/* header */ h1 { color: red; width: 40 }\n.note{color:cyan;}\n#main { height: 3; }",
    );
    let flat: Vec<_> = sheet
        .iter()
        .map(|d| (d.selector.as_str(), d.property.as_str(), d.value.as_str()))
        .collect();
    assert_eq!(
        flat,
        [
            ("h1", "color", "red"),
            ("h1", "width", "40"),
            (".note", "color", "cyan"),
            ("#main", "height", "3"),
        ]
    );
}

#[test]
fn test_declaration_capacity() {
    let css = "p { color: red; }\n".repeat(MAX_DECLARATIONS + 5);
    let sheet = parse_stylesheet(&css);
    assert_eq!(sheet.len(), MAX_DECLARATIONS);
    assert!(sheet.is_full());
}

#[test]
fn test_parse_appends() {
    let mut sheet = Stylesheet::new();
    let parser = CssParser::new();
    assert!(parser.parse("p { color: red; }", &mut sheet));
    assert!(parser.parse("p { color: blue; }", &mut sheet));
    assert_eq!(sheet.len(), 2);
}

#[test]
fn test_long_value_truncated() {
    let css = format!("p {{ color: {}; }}", "x".repeat(100));
    let sheet = parse_stylesheet(&css);
    assert_eq!(sheet.iter().next().unwrap().value.len(), MAX_VALUE_LEN);
}

// ============================================================================
// CASCADE
// ============================================================================

#[test]
fn test_later_declaration_wins() {
    let sheet = parse_stylesheet("p { color: red; } p { color: blue; }");
    let mut tree = tree_with(vec![Element::new("p")]);
    StyleResolver::new(&sheet).apply(&mut tree);
    assert_eq!(tree[0].color.foreground(), 1);
}

#[test]
fn test_no_specificity() {
    // An id rule earlier in the sheet loses to a later tag rule
    let sheet = parse_stylesheet("#x { color: red; } p { color: green; }");
    let mut p = Element::new("p");
    p.set_id("x");
    let mut tree = tree_with(vec![p]);
    StyleResolver::new(&sheet).apply(&mut tree);
    assert_eq!(tree[0].color.foreground(), 2);
}

#[test]
fn test_class_substring_match() {
    let sheet = parse_stylesheet(".ab { color: magenta; }");
    let mut tree = tree_with(vec![classed("p", "abc"), classed("p", "xaby"), classed("p", "a b")]);
    let applied = StyleResolver::new(&sheet).apply(&mut tree);

    assert_eq!(applied, 2);
    assert_eq!(tree[0].color.foreground(), 5);
    assert_eq!(tree[1].color.foreground(), 5);
    assert_eq!(tree[2].color.foreground(), 15);
}

#[test]
fn test_descendant_selector_uses_first_token() {
    let sheet = parse_stylesheet("div p { color: green; }");
    let mut tree = tree_with(vec![Element::new("div"), Element::new("p")]);
    StyleResolver::new(&sheet).apply(&mut tree);
    assert_eq!(tree[0].color.foreground(), 2);
    assert_eq!(tree[1].color.foreground(), 15);
}

#[test]
fn test_background_and_box_properties() {
    let sheet = parse_stylesheet("span { background-color: red; width: 12; height: 2; margin: 4; }");
    let mut tree = tree_with(vec![Element::new("span")]);
    StyleResolver::new(&sheet).apply(&mut tree);
    let span = &tree[0];
    assert_eq!(span.color.background(), 4);
    assert_eq!(span.color.foreground(), 15);
    assert_eq!((span.width, span.height), (12, 2));
}
