// SPDX-License-Identifier: MIT OR Apache-2.0
//! Lazy path iteration over a JSON tree.

use keyscope_core::{KeyPath, PathSet};
use serde_json::Value;

/// Options controlling which nodes are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Also report non-empty objects and arrays below the root
    pub include_containers: bool,
}

impl FlattenOptions {
    /// Report container nodes as well as leaves.
    #[must_use]
    pub const fn with_containers(mut self) -> Self {
        self.include_containers = true;
        self
    }
}

/// Iterator over `(path, node)` pairs of a document, in document order.
///
/// Traversal uses an explicit stack, so document depth is bounded by memory
/// rather than by the call stack. The iterator borrows the document and can
/// be recreated at any time.
#[derive(Debug, Clone)]
pub struct Flatten<'a> {
    stack: Vec<(KeyPath, &'a Value)>,
    include_containers: bool,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = (KeyPath, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            match node {
                Value::Object(map) if !map.is_empty() => {
                    // Reverse push keeps document order on pop
                    for (key, child) in map.iter().rev() {
                        self.stack.push((path.key(key), child));
                    }
                }
                Value::Array(items) if !items.is_empty() => {
                    for (index, child) in items.iter().enumerate().rev() {
                        self.stack.push((path.index(index), child));
                    }
                }
                // A document without keys or indices has no paths
                _ if path.is_empty() => continue,
                _ => return Some((path, node)),
            }
            if self.include_containers && !path.is_empty() {
                return Some((path, node));
            }
        }
        None
    }
}

/// Iterate the nodes of `value` selected by `options`.
#[must_use]
pub fn flatten<'a>(value: &'a Value, options: &FlattenOptions) -> Flatten<'a> {
    Flatten {
        stack: vec![(KeyPath::root(), value)],
        include_containers: options.include_containers,
    }
}

/// Iterate the leaves of `value`.
#[must_use]
pub fn leaves(value: &Value) -> Flatten<'_> {
    flatten(value, &FlattenOptions::default())
}

/// Rendered paths of the nodes selected by `options`.
#[must_use]
pub fn collect_paths(value: &Value, options: &FlattenOptions) -> PathSet {
    flatten(value, options)
        .map(|(path, _)| path.to_string())
        .collect()
}

/// Rendered paths of every leaf of `value`.
#[must_use]
pub fn leaf_paths(value: &Value) -> PathSet {
    collect_paths(value, &FlattenOptions::default())
}
