// SPDX-License-Identifier: MIT OR Apache-2.0
//! Path set comparison and grouping by root segment.

use keyscope_core::{PathSet, root_segment};
use keyscope_paths::{FlattenOptions, collect_paths};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Paths present in one document but not the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyDiff {
    /// Paths in the base document that the compare document lacks
    pub missing_in_compare: PathSet,
    /// Paths in the compare document that the base document lacks
    pub missing_in_base: PathSet,
}

impl KeyDiff {
    /// Whether the two documents have exactly the same paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing_in_compare.is_empty() && self.missing_in_base.is_empty()
    }

    /// Total number of differing paths across both sides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.missing_in_compare.len() + self.missing_in_base.len()
    }

    /// `missing_in_compare` grouped by root segment.
    #[must_use]
    pub fn grouped_missing_in_compare(&self) -> BTreeMap<String, Vec<String>> {
        group_by_root(&self.missing_in_compare)
    }

    /// `missing_in_base` grouped by root segment.
    #[must_use]
    pub fn grouped_missing_in_base(&self) -> BTreeMap<String, Vec<String>> {
        group_by_root(&self.missing_in_base)
    }
}

/// Compare two path sets.
///
/// ```
/// use keyscope_core::PathSet;
/// use keyscope_diff::diff_paths;
///
/// let base: PathSet = ["CA.x".to_string()].into();
/// let compare: PathSet = ["CA.x".to_string(), "CA.y".to_string()].into();
/// let diff = diff_paths(&base, &compare);
/// assert!(diff.missing_in_compare.is_empty());
/// assert!(diff.missing_in_base.contains("CA.y"));
/// ```
#[must_use]
pub fn diff_paths(base: &PathSet, compare: &PathSet) -> KeyDiff {
    KeyDiff {
        missing_in_compare: base.difference(compare).cloned().collect(),
        missing_in_base: compare.difference(base).cloned().collect(),
    }
}

/// Flatten both documents and compare their paths.
#[must_use]
pub fn diff_documents(base: &Value, compare: &Value, options: &FlattenOptions) -> KeyDiff {
    let base_paths = collect_paths(base, options);
    let compare_paths = collect_paths(compare, options);
    tracing::debug!(
        base = base_paths.len(),
        compare = compare_paths.len(),
        "collected paths"
    );
    diff_paths(&base_paths, &compare_paths)
}

/// Group paths by their root segment. Groups and their members are sorted.
#[must_use]
pub fn group_by_root<'a, I>(paths: I) -> BTreeMap<String, Vec<String>>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for path in paths {
        groups
            .entry(root_segment(path).to_owned())
            .or_default()
            .push(path.clone());
    }
    for members in groups.values_mut() {
        members.sort_unstable();
    }
    groups
}
