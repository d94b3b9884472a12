// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Key Path Flattening
//!
//! Turns a JSON document into the set of paths that reach its leaves, and
//! back again.
//!
//! ```text
//! {"a": {"b": 1, "c": [true, {}]}}
//!
//! a.b      -> 1
//! a.c[0]   -> true
//! a.c[1]   -> {}
//! ```
//!
//! ## Leaves
//!
//! A leaf is a scalar (string, number, boolean, null) or an empty container.
//! Empty objects and arrays are reported with their own path so that a
//! document gaining or losing an empty container shows up in a diff, and so
//! that [`unflatten`] rebuilds the original tree exactly. The one exception is
//! the document root: a top-level scalar or empty container has no paths at
//! all.
//!
//! ## Containers
//!
//! With [`FlattenOptions::include_containers`], every non-empty object and
//! array below the root is reported as well, giving the full key skeleton of
//! the document.

mod flatten;
mod unflatten;

pub use flatten::{Flatten, FlattenOptions, collect_paths, flatten, leaf_paths, leaves};
pub use unflatten::unflatten;
