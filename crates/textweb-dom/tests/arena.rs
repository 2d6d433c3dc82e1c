//! Element arena tests - capacity, handles and lookups

use textweb_dom::{
    bounded, DomTree, Element, ElementId, MAX_CHILDREN, MAX_CONTENT_LEN, MAX_ELEMENTS, MAX_TAG_LEN,
};

// ============================================================================
// CAPACITY
// ============================================================================

#[test]
fn test_arena_stops_at_capacity() {
    let mut tree = DomTree::new();
    for _ in 0..MAX_ELEMENTS {
        assert!(tree.insert(Element::new("span"), None).is_some());
    }
    assert!(tree.is_full());
    assert!(tree.insert(Element::new("span"), None).is_none());
    assert_eq!(tree.len(), MAX_ELEMENTS);
}

#[test]
fn test_eleventh_child_keeps_parent_link() {
    let mut tree = DomTree::new();
    let ul = tree.insert(Element::new("ul"), None).unwrap();
    let mut last = None;
    for _ in 0..=MAX_CHILDREN {
        last = tree.insert(Element::new("li"), Some(ul));
    }

    let last = last.unwrap();
    assert_eq!(tree.get(ul).unwrap().children().len(), MAX_CHILDREN);
    assert!(!tree.get(ul).unwrap().children().contains(&last));
    assert_eq!(tree.get(last).unwrap().parent(), Some(ul));
}

#[test]
fn test_string_fields_truncated() {
    let mut element = Element::new(&"t".repeat(40));
    assert_eq!(element.tag().len(), MAX_TAG_LEN);

    element.set_content(&"c".repeat(200));
    element.append_content(&"d".repeat(200));
    assert_eq!(element.content().chars().count(), MAX_CONTENT_LEN);
    assert!(element.content().ends_with('d'));

    // Multi-byte characters are never split
    assert_eq!(bounded("ééé", 2), "éé");
}

// ============================================================================
// HANDLES
// ============================================================================

#[test]
fn test_handles_go_stale_on_reset() {
    let mut tree = DomTree::new();
    let old = tree.insert(Element::new("p"), None).unwrap();
    tree.reset();
    assert!(tree.is_empty());

    let new = tree.insert(Element::new("div"), None).unwrap();
    assert_eq!(old.index, new.index);
    assert!(tree.get(old).is_none());
    assert_eq!(tree.get(new).unwrap().tag(), "div");
}

#[test]
fn test_stale_parent_is_dropped() {
    let mut tree = DomTree::new();
    let stale = tree.insert(Element::new("div"), None).unwrap();
    tree.reset();

    let child = tree.insert(Element::new("p"), Some(stale)).unwrap();
    assert_eq!(tree.get(child).unwrap().parent(), None);

    let bogus = ElementId {
        index: 99,
        generation: tree.generation(),
    };
    let orphan = tree.insert(Element::new("p"), Some(bogus)).unwrap();
    assert_eq!(tree.get(orphan).unwrap().parent(), None);
}

// ============================================================================
// LOOKUPS
// ============================================================================

#[test]
fn test_first_match_lookups() {
    let mut tree = DomTree::new();
    let mut a = Element::new("p");
    a.set_id("dup");
    let mut b = Element::new("p");
    b.set_id("dup");
    let first = tree.insert(a, None).unwrap();
    tree.insert(b, None).unwrap();

    assert_eq!(tree.find_by_id("dup"), Some(first));
    assert_eq!(tree.find_by_tag("p"), Some(first));
    assert_eq!(tree.find_by_id(""), None);
    assert_eq!(tree.find_by_tag("h1"), None);
}
