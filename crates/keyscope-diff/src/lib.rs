// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Key Renaming and Path Comparison
//!
//! Structural comparison of two JSON documents by the paths they contain,
//! ignoring the values stored at those paths.
//!
//! ## Key Renaming
//! [`remap_keys`] produces a copy of a document with object keys renamed
//! through a [`RootMap`](keyscope_core::RootMap), at every depth, using exact
//! matches only. Key order is kept. [`remap_path_roots`] renames only the
//! first segment of each path in a path set.
//!
//! ## Path Comparison
//! [`diff_paths`] splits two path sets into:
//! - `missing_in_compare`: paths only the base document has
//! - `missing_in_base`: paths only the compare document has
//!
//! Paths present in both never appear in either list. Each list can be
//! grouped by the first segment of its paths for summary reports.

mod compare;
mod remap;

pub use compare::{KeyDiff, diff_documents, diff_paths, group_by_root};
pub use remap::{remap_keys, remap_path_roots};
