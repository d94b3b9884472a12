// SPDX-License-Identifier: MIT OR Apache-2.0
//! Renaming object keys through a [`RootMap`].

use keyscope_core::{PathSet, RootMap, root_segment};
use serde_json::{Map, Value};

/// Copy of `value` with every mapped object key renamed.
///
/// Keys are matched exactly at every depth; unmatched keys, array elements
/// and scalars are copied unchanged. Keys keep their position. When a renamed
/// key collides with a sibling that already has that name, the one appearing
/// later in the document supplies the value.
///
/// ```
/// use keyscope_core::RootMap;
/// use keyscope_diff::remap_keys;
/// use serde_json::json;
///
/// let map = RootMap::from_pairs([("CA", "ECA")]).unwrap();
/// let mapped = remap_keys(&json!({"CA": {"x": 1}, "CAX": 2}), &map);
/// assert_eq!(mapped, json!({"ECA": {"x": 1}, "CAX": 2}));
/// ```
#[must_use]
pub fn remap_keys(value: &Value, map: &RootMap) -> Value {
    let mut renamed = 0;
    let mapped = remap_node(value, map, &mut renamed);
    tracing::debug!(renamed, "remapped document keys");
    mapped
}

/// Copy of `paths` with each path's root segment renamed.
///
/// Only the root segment is looked up; deeper segments are kept as written.
/// Paths whose renamed forms coincide collapse into one entry.
///
/// ```
/// use keyscope_core::{PathSet, RootMap};
/// use keyscope_diff::remap_path_roots;
///
/// let map = RootMap::from_pairs([("CA", "ECA")]).unwrap();
/// let paths: PathSet = ["CA.x".to_string(), "CA[0]".to_string(), "CAX.CA".to_string()].into();
/// let mapped: Vec<_> = remap_path_roots(&paths, &map).into_iter().collect();
/// assert_eq!(mapped, vec!["CAX.CA", "ECA.x", "ECA[0]"]);
/// ```
#[must_use]
pub fn remap_path_roots(paths: &PathSet, map: &RootMap) -> PathSet {
    paths
        .iter()
        .map(|path| {
            let root = root_segment(path);
            format!("{}{}", map.rename(root), &path[root.len()..])
        })
        .collect()
}

fn remap_node(value: &Value, map: &RootMap, renamed: &mut usize) -> Value {
    match value {
        Value::Object(object) => {
            let mut out = Map::with_capacity(object.len());
            for (key, child) in object {
                let new_key = match map.get(key) {
                    Some(new_key) => {
                        *renamed += 1;
                        new_key
                    }
                    None => key.as_str(),
                };
                out.insert(new_key.to_owned(), remap_node(child, map, renamed));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| remap_node(item, map, renamed))
                .collect(),
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn ca_map() -> RootMap {
        RootMap::from_pairs([("CA", "ECA")]).unwrap()
    }

    #[test]
    fn test_renames_top_level_key() {
        let mapped = remap_keys(&json!({"CA": {"x": 1}}), &ca_map());
        assert_eq!(mapped, json!({"ECA": {"x": 1}}));
    }

    #[test]
    fn test_renames_at_every_depth() {
        let doc = json!({"outer": {"CA": [{"CA": true}]}});
        let mapped = remap_keys(&doc, &ca_map());
        assert_eq!(mapped, json!({"outer": {"ECA": [{"ECA": true}]}}));
    }

    #[test]
    fn test_no_substring_matches() {
        let doc = json!({"CAT": 1, "xCA": 2, "ca": 3});
        assert_eq!(remap_keys(&doc, &ca_map()), doc);
    }

    #[test]
    fn test_string_values_untouched() {
        let doc = json!({"k": "CA", "list": ["CA"]});
        assert_eq!(remap_keys(&doc, &ca_map()), doc);
    }

    #[test]
    fn test_input_not_mutated() {
        let doc = json!({"CA": 1});
        let before = doc.clone();
        let _ = remap_keys(&doc, &ca_map());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_key_order_preserved() {
        let doc = json!({"first": 1, "CA": 2, "last": 3});
        let mapped = remap_keys(&doc, &ca_map());
        let keys: Vec<_> = mapped.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["first", "ECA", "last"]);
    }

    #[test]
    fn test_collision_later_value_wins() {
        let doc = json!({"ECA": 1, "CA": 2});
        let mapped = remap_keys(&doc, &ca_map());
        assert_eq!(mapped, json!({"ECA": 2}));
    }

    #[test]
    fn test_legacy_map() {
        let doc = json!({"ET": {"ETQ801": 1}, "CV": [], "ADM": null});
        let mapped = remap_keys(&doc, &RootMap::legacy());
        assert_eq!(mapped, json!({"EET": {"ETQ801": 1}, "ETC": [], "ADM": null}));
    }

    #[test]
    fn test_non_self_inverse_map_not_idempotent() {
        let map = RootMap::from_pairs([("A", "B"), ("B", "C")]).unwrap();
        let once = remap_keys(&json!({"A": 1}), &map);
        let twice = remap_keys(&once, &map);
        assert_eq!(once, json!({"B": 1}));
        assert_eq!(twice, json!({"C": 1}));
    }

    fn set(paths: &[&str]) -> PathSet {
        paths.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_path_roots_renamed() {
        let mapped = remap_path_roots(&set(&["CA.x", "ET[1].CA", "ETQ801.a"]), &RootMap::legacy());
        assert_eq!(mapped, set(&["ECA.x", "EET[1].CA", "ETQ801.a"]));
    }

    #[test]
    fn test_path_roots_leading_index_untouched() {
        let paths = set(&["[0].CA", "CA"]);
        let mapped = remap_path_roots(&paths, &ca_map());
        assert_eq!(mapped, set(&["[0].CA", "ECA"]));
    }

    #[test]
    fn test_path_roots_collapse_on_collision() {
        let mapped = remap_path_roots(&set(&["CA.x", "ECA.x"]), &ca_map());
        assert_eq!(mapped, set(&["ECA.x"]));
    }

    fn arb_doc() -> impl Strategy<Value = Value> {
        let key = prop::sample::select(vec!["AL", "CA", "CV", "ADM", "EAL", "x", "y", "ETQ801"]);
        let leaf = prop_oneof![Just(Value::Null), any::<i32>().prop_map(|n| json!(n))];
        leaf.prop_recursive(3, 32, 4, move |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map(key.clone(), inner, 0..4).prop_map(|m| {
                    Value::Object(m.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
                }),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_legacy_remap_is_idempotent(doc in arb_doc()) {
            let map = RootMap::legacy();
            let once = remap_keys(&doc, &map);
            prop_assert_eq!(remap_keys(&once, &map), once);
        }

        #[test]
        fn prop_empty_map_is_identity(doc in arb_doc()) {
            prop_assert_eq!(remap_keys(&doc, &RootMap::new()), doc);
        }
    }
}
