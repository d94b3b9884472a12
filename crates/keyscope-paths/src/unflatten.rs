// SPDX-License-Identifier: MIT OR Apache-2.0
//! Re-nesting `(path, value)` pairs into a document.

use keyscope_core::{KeyPath, KeyscopeError, PathSegment, Result};
use serde_json::{Map, Value};

/// Rebuild a document from `(path, value)` pairs.
///
/// Intermediate objects and arrays are created as paths require them. Array
/// positions not named by any path are filled with `null`. An empty iterator
/// yields `null`.
///
/// ```
/// use keyscope_paths::{leaves, unflatten};
/// use serde_json::json;
///
/// let doc = json!({"a": [1, {"b": {}}]});
/// let pairs = leaves(&doc).map(|(path, value)| (path, value.clone()));
/// assert_eq!(unflatten(pairs).unwrap(), doc);
/// ```
///
/// # Errors
///
/// Returns [`KeyscopeError::PathConflict`] when two paths disagree about the
/// shape of a node, such as `a.b` and `a[0]`, or when a value is placed on a
/// node that already has children.
pub fn unflatten<I>(pairs: I) -> Result<Value>
where
    I: IntoIterator<Item = (KeyPath, Value)>,
{
    let mut root = Value::Null;
    for (path, value) in pairs {
        place(&mut root, &path, value)?;
    }
    Ok(root)
}

fn place(root: &mut Value, path: &KeyPath, value: Value) -> Result<()> {
    let conflict = || KeyscopeError::PathConflict {
        path: path.to_string(),
    };

    let mut slot = root;
    for segment in path.segments() {
        if slot.is_null() {
            *slot = match segment {
                PathSegment::Key(_) => Value::Object(Map::new()),
                PathSegment::Index(_) => Value::Array(Vec::new()),
            };
        }
        slot = match (segment, slot) {
            (PathSegment::Key(key), Value::Object(map)) => {
                map.entry(key.clone()).or_insert(Value::Null)
            }
            (PathSegment::Index(index), Value::Array(items)) => {
                if items.len() <= *index {
                    items.resize(index + 1, Value::Null);
                }
                &mut items[*index]
            }
            _ => return Err(conflict()),
        };
    }

    let has_children = match slot {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    };
    if has_children {
        return Err(conflict());
    }
    *slot = value;
    Ok(())
}
