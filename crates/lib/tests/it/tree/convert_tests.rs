//! Construction and conversion integration tests
//!
//! from_value/to_value round-trips, mutable/immutable conversions with
//! independent storage, and the serde surface.

use pathtree::{Tree, TreeKind, TreeMut};
use serde_json::json;

use super::helpers::*;

// ===== CONSTRUCTION =====

#[test]
fn test_from_value_accepts_both_container_shapes() {
    let map = Tree::from_value(json!({"k": 1})).unwrap();
    assert_eq!(map.kind(), TreeKind::Map);

    let seq = Tree::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(seq.kind(), TreeKind::Seq);
    assert_eq!(seq.len(), 3);
}

#[test]
fn test_from_value_rejects_scalar_top_level() {
    for raw in [json!("text"), json!(42), json!(true), json!(null)] {
        let err = Tree::from_value(raw.clone()).unwrap_err();
        assert!(err.is_invalid_input(), "expected InvalidInput for {raw}");

        let err = TreeMut::from_value(raw).unwrap_err();
        assert!(err.is_invalid_input());
    }

    let err = Tree::from_value(json!("text")).unwrap_err();
    assert!(format!("{err}").contains("string"));
}

#[test]
fn test_try_from_raw_value() {
    let tree: Tree = json!({"k": 1}).try_into().unwrap();
    assert_eq!(tree.get_as::<i64>("k"), Some(1));

    let result: Result<TreeMut, _> = json!(3.5).try_into();
    assert!(result.is_err());
}

// ===== ROUND-TRIP =====

#[test]
fn test_to_value_round_trips() {
    let data = sample_data();

    assert_eq!(sample_tree().to_value(), data);
    assert_eq!(sample_tree_mut().to_value(), data);
}

#[test]
fn test_round_trip_preserves_key_order() {
    // Keys deliberately out of lexicographic order.
    let data = json!({"zulu": 1, "alpha": {"m": [3, 1], "a": 2}, "mike": 3});

    let round_tripped = Tree::from_value(data.clone()).unwrap().to_value();
    assert_eq!(round_tripped, data);
    assert_eq!(
        serde_json::to_string(&round_tripped).unwrap(),
        serde_json::to_string(&data).unwrap()
    );
}

// ===== VARIANT CONVERSIONS =====

#[test]
fn test_convertible_to_mutable_and_back() {
    let tree = sample_tree();
    let mutable = sample_tree_mut();

    assert_eq!(tree, tree.to_immutable());
    assert_eq!(tree, mutable.to_immutable());
    assert_eq!(mutable, mutable.to_mutable());
    assert_eq!(mutable, tree.to_mutable());
}

#[test]
fn test_conversions_do_not_share_storage() {
    let tree = sample_tree();

    let mut first = tree.to_mutable();
    let mut second = tree.to_mutable();
    first.set("var 2", 100).unwrap();

    assert_eq!(second.get_as::<i64>("var 2"), Some(2));
    assert_eq!(tree.get_as::<i64>("var 2"), Some(2));

    let frozen = second.to_immutable();
    second.set("var 2", 200).unwrap();
    assert_eq!(frozen.get_as::<i64>("var 2"), Some(2));
}

#[test]
fn test_move_conversion_into_tree() {
    let mut mutable = sample_tree_mut();
    mutable.set("var 0", "moved").unwrap();

    let tree: Tree = mutable.into();
    assert_eq!(tree.get_as::<&str>("var 0"), Some("moved"));
}

// ===== SERDE SURFACE =====

#[test]
fn test_serialize_mirrors_raw_shape() {
    let tree = sample_tree();

    let serialized = serde_json::to_value(&tree).unwrap();
    assert_eq!(serialized, sample_data());
    assert_eq!(tree.to_json_string(), sample_data().to_string());

    let mutable = sample_tree_mut();
    assert_eq!(serde_json::to_value(&mutable).unwrap(), sample_data());
}

#[test]
fn test_deserialize_matches_from_value() {
    let json = sample_data().to_string();

    let deserialized: Tree = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, sample_tree());

    let deserialized: TreeMut = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, sample_tree_mut());
}

#[test]
fn test_from_json_str() {
    let tree = Tree::from_json_str(r#"{"a": [1, 2]}"#).unwrap();
    assert_eq!(tree.get_as::<i64>("a.0"), Some(1));

    let err = Tree::from_json_str("not json").unwrap_err();
    assert_eq!(err.module(), "serialize");

    let err = Tree::from_json_str("42").unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(err.module(), "tree");
}
