// SPDX-License-Identifier: MIT OR Apache-2.0
//! # keyscope-cli
//!
//! Command-line interface for keyscope - compare the key paths of two JSON
//! documents.
//!
//! ## Usage
//!
//! ```bash
//! # Summary grouped by root key (files resolved against ./samples)
//! keyscope base.json compare.json
//!
//! # Every differing path
//! keyscope --full-paths base.json compare.json
//!
//! # Summary followed by every differing path
//! keyscope --show-both base.json compare.json
//!
//! # Rename legacy root keys in the compare file first
//! keyscope --map-roots base.json legacy.json
//!
//! # Use a custom rename table
//! keyscope --map-roots --map-file roots.json base.json legacy.json
//!
//! # Machine-readable report
//! keyscope --json base.json compare.json
//! ```
//!
//! ## Views
//!
//! | View | Lines |
//! |------|-------|
//! | `[ROOT]` | one line per root key; a root with several differing paths is summarised with a count |
//! | `[ALL]` | one line per differing path |
//!
//! `--show-both` prints both views, `[ROOT]` first, and takes precedence over
//! `--full-paths`.
//!
//! ## Library Usage
//!
//! The constituent library crates can be used directly:
//!
//! - [`keyscope-paths`](https://docs.rs/keyscope-paths) - Path flattening
//! - [`keyscope-diff`](https://docs.rs/keyscope-diff) - Key renaming and path comparison
//! - [`keyscope-core`](https://docs.rs/keyscope-core) - Core types and document I/O

#![doc(html_root_url = "https://docs.rs/keyscope-cli/0.1.0")]
#![warn(missing_docs)]

/// Sample directory and output file naming
pub mod files;
/// Text report rendering
pub mod render;
/// The load, remap, diff, report pipeline
pub mod run;

pub use render::{ColorChoice, Renderer, ViewMode};
pub use run::{RunOptions, run};

/// Re-export of keyscope-paths for flattening.
pub use keyscope_paths as paths;

/// Re-export of keyscope-diff for renaming and comparison.
pub use keyscope_diff as diff;

/// Re-export of keyscope-core for core types.
pub use keyscope_core as core;
