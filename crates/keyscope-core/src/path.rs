// SPDX-License-Identifier: MIT OR Apache-2.0
//! Key paths
//!
//! A [`KeyPath`] locates a node inside a JSON document as a sequence of
//! object keys and array indices. Its rendered form is the identity used for
//! comparison:
//!
//! ```text
//! root.child[2].leaf
//! ```
//!
//! The first key is written bare, later keys are prefixed with `.`, and
//! indices are always written as `[i]`.

use std::collections::BTreeSet;
use std::fmt;

/// Ordered set of rendered paths taken from one document.
pub type PathSet = BTreeSet<String>;

/// A single step in a [`KeyPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// Object key
    Key(String),
    /// Array index
    Index(usize),
}

/// Location of a node from the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath {
    segments: Vec<PathSegment>,
}

impl KeyPath {
    /// The empty path, naming the document root.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build a path from its segments.
    #[must_use]
    pub const fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Path extended by an object key.
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(PathSegment::Key(key.to_owned()));
        Self { segments }
    }

    /// Path extended by an array index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Segments from the root outwards.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the document root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl From<Vec<PathSegment>> for KeyPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self::from_segments(segments)
    }
}

/// Root segment of a rendered path, used to group report lines.
///
/// This is the text before the first `.` or `[`. A path that starts with an
/// index (the document itself is an array) uses its leading `[i]` as root.
///
/// ```
/// use keyscope_core::root_segment;
///
/// assert_eq!(root_segment("ETQ806.assignments[0].name"), "ETQ806");
/// assert_eq!(root_segment("items[3]"), "items");
/// assert_eq!(root_segment("[1].id"), "[1]");
/// ```
#[must_use]
pub fn root_segment(path: &str) -> &str {
    if path.starts_with('[') {
        return path.find(']').map_or(path, |end| &path[..=end]);
    }
    path.find(['.', '[']).map_or(path, |end| &path[..end])
}
