//! Write-surface integration tests
//!
//! set/unset through key-or-path addressing, auto-vivification, conflict
//! handling, deletion semantics, and isolation from prior snapshots.

use pathtree::{Tree, TreeMut, Value};
use serde_json::json;

use super::helpers::*;

// ===== SET =====

#[test]
fn test_set_by_key_and_path() {
    let mut tree = sample_tree_mut();

    tree.set("var 0", "string 000").unwrap();
    tree.set("var 1.0.1", "string 1.0.1 but other one").unwrap();

    assert_eq!(tree.get_as::<&str>("var 0"), Some("string 000"));
    assert_eq!(
        tree.get_as::<&str>("var 1.0.1"),
        Some("string 1.0.1 but other one")
    );
}

#[test]
fn test_set_returns_previous_value() {
    let mut tree = sample_tree_mut();

    let old = tree.set("var 2", 3).unwrap();
    assert_eq!(old, Some(Value::Int(2)));

    let fresh = tree.set("brand new", true).unwrap();
    assert!(fresh.is_none());
}

#[test]
fn test_set_auto_vivifies_intermediates() {
    let mut tree = TreeMut::new();

    tree.set("a.b.c", "deep").unwrap();

    assert_eq!(tree.get_as::<&str>("a.b.c"), Some("deep"));
    assert!(tree.get("a").is_some_and(Value::is_tree));
    assert!(tree.get("a.b").is_some_and(Value::is_tree));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_set_through_scalar_is_a_conflict() {
    let mut tree = sample_tree_mut();

    // "var 2" holds an integer; writing below it must fail...
    let err = tree.set("var 2.x", 1).unwrap_err();
    assert!(err.is_path_conflict());
    assert_eq!(err.path(), Some("var 2.x"));

    // ...and must leave the scalar untouched.
    assert_eq!(tree.get_as::<i64>("var 2"), Some(2));
    assert!(!tree.contains_key("var 2.x"));
}

#[test]
fn test_set_rejects_the_empty_path() {
    let mut tree = sample_tree_mut();

    let err = tree.set("", 1).unwrap_err();
    assert!(err.is_invalid_path());
    assert_eq!(tree.len(), 6);
}

#[test]
fn test_set_wraps_container_values() {
    let mut tree = TreeMut::new();

    tree.set("cfg", json!({"hosts": ["alpha", "beta"]})).unwrap();

    assert!(tree.get("cfg").is_some_and(Value::is_tree));
    assert_eq!(tree.get_as::<&str>("cfg.hosts.1"), Some("beta"));
}

#[test]
fn test_set_on_sequence_uses_canonical_index() {
    let mut tree = sample_tree_mut();

    // Appending one past the end of a 3-element sequence.
    tree.set("var 1.0.3", "var 1.0.3").unwrap();
    assert_eq!(tree.get_as::<&str>("var 1.0.3"), Some("var 1.0.3"));
    assert_eq!(
        tree.get("var 1.0").and_then(Value::as_tree).map(Tree::len),
        Some(4)
    );

    // Overwriting via a non-canonical spelling hits the same slot.
    tree.set("var 1.0.01", "replaced").unwrap();
    assert_eq!(tree.get_as::<&str>("var 1.0.1"), Some("replaced"));
    assert_eq!(
        tree.get("var 1.0").and_then(Value::as_tree).map(Tree::len),
        Some(4)
    );
}

#[test]
fn test_set_with_escaped_key() {
    let mut tree = TreeMut::new();

    tree.set(r"dotted\.key", 1).unwrap();

    assert_eq!(tree.get_as::<i64>(r"dotted\.key"), Some(1));
    assert!(!tree.contains_key("dotted.key"));
    let keys: Vec<&str> = tree.keys().collect();
    assert_eq!(keys, vec!["dotted.key"]);
}

// ===== GET_MUT =====

#[test]
fn test_get_mut_edits_in_place() {
    let mut tree = sample_tree_mut();

    if let Some(Value::Text(name)) = tree.get_mut("var 0") {
        name.push_str(" (edited)");
    }
    assert_eq!(tree.get_as::<&str>("var 0"), Some("string var 0 (edited)"));

    // Wholesale replacement through a nested path.
    if let Some(slot) = tree.get_mut("var 5.var 5\\.2") {
        *slot = Value::Bool(false);
    }
    assert_eq!(tree.get_as::<bool>("var 5.var 5\\.2"), Some(false));

    assert!(tree.get_mut("var 7").is_none());
    assert!(tree.get_mut("var 2.inside").is_none());
}

// ===== UNSET =====

#[test]
fn test_unset_by_key_and_path() {
    let mut tree = sample_tree_mut();

    tree.set("var 1.0.1", "string 1.0.1 but other one").unwrap();

    let removed = tree.unset("var 1.0.1");
    assert_eq!(
        removed.as_ref().and_then(Value::as_text),
        Some("string 1.0.1 but other one")
    );
    tree.unset("var 1.1.1");

    assert!(!tree.contains_key("var 1.0.1"));
    assert!(!tree.contains_key("var 1.1.1"));
}

#[test]
fn test_unset_leaves_a_hole_in_sequences() {
    let mut tree = sample_tree_mut();

    tree.unset("var 1.1.1");

    // Later elements keep their positions; index 1 stays a hole.
    assert!(!tree.contains_key("var 1.1.1"));
    assert_eq!(tree.get_as::<&str>("var 1.1.0"), Some("var 1.1.0"));
    assert_eq!(tree.get_as::<&str>("var 1.1.2"), Some("var 1.1.2"));
    assert_eq!(
        tree.get("var 1.1").and_then(Value::as_tree).map(Tree::len),
        Some(2)
    );
}

#[test]
fn test_unset_is_idempotent() {
    let mut tree = sample_tree_mut();

    assert!(!tree.contains_key("var 9"));
    assert!(tree.unset("var 9").is_none());
    assert!(tree.unset("var 9").is_none());
    assert!(!tree.contains_key("var 9"));

    // Double-delete of a real entry: second call is a silent no-op.
    assert!(tree.unset("var 3").is_some());
    assert!(tree.unset("var 3").is_none());

    // Paths through scalars and the empty path are no-ops too.
    assert!(tree.unset("var 2.x").is_none());
    assert!(tree.unset("").is_none());
}

#[test]
fn test_unset_preserves_sibling_order() {
    let mut tree = sample_tree_mut();

    tree.unset("var 2");

    let keys: Vec<&str> = tree.keys().collect();
    assert_eq!(keys, vec!["var 0", "var 1", "var 3", "var 4", "var 5"]);
}

// ===== ISOLATION =====

#[test]
fn test_mutation_does_not_affect_prior_snapshots() {
    let data = json!({"a": {"b": 1}});

    let mut mutable = TreeMut::from_value(data.clone()).unwrap();
    let snapshot = mutable.to_immutable();

    mutable.set("a.b", 2).unwrap();

    assert_eq!(mutable.get_as::<i64>("a.b"), Some(2));
    assert_eq!(snapshot.get_as::<i64>("a.b"), Some(1));

    // The raw input and trees built from it later are unaffected as well.
    let fresh = Tree::from_value(data).unwrap();
    assert_eq!(fresh.get_as::<i64>("a.b"), Some(1));
}

#[test]
fn test_mutation_does_not_affect_source_of_conversion() {
    let tree = sample_tree();
    let mut mutable = tree.to_mutable();

    mutable.set("var 0", "changed").unwrap();
    mutable.unset("var 5");

    assert_eq!(tree.get_as::<&str>("var 0"), Some("string var 0"));
    assert!(tree.contains_key("var 5"));
    assert_eq!(tree.len(), 6);
    assert_eq!(mutable.len(), 5);
}
