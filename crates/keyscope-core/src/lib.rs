// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types, error handling, and document I/O for keyscope
//!
//! This crate provides the foundational types used across the keyscope workspace:
//!
//! - [`error`] - Error types and Result alias
//! - [`path`] - Key paths and their rendered string form
//! - [`mapping`] - Old-to-new key name tables
//! - [`document`] - Loading and saving JSON documents

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Loading and saving JSON documents
pub mod document;
/// Error types for keyscope operations
pub mod error;
/// Key name remapping tables
pub mod mapping;
/// Key path representation
pub mod path;

// Re-exports for convenience
pub use document::{load_document, save_document};
pub use error::{KeyscopeError, Result};
pub use mapping::RootMap;
pub use path::{KeyPath, PathSegment, PathSet, root_segment};
