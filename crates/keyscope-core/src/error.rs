// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types shared by the keyscope crates.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading, transforming, or saving documents.
#[derive(Debug, Error)]
pub enum KeyscopeError {
    /// A file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file was read but is not valid JSON
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Parser error, carrying line and column
        #[source]
        source: serde_json::Error,
    },

    /// A file could not be written
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A key mapping table names the same source key twice
    #[error("duplicate mapping for key '{key}'")]
    DuplicateMapping {
        /// The repeated source key
        key: String,
    },

    /// Two paths disagree about the shape of a node while re-nesting
    #[error("conflicting shapes at path '{path}'")]
    PathConflict {
        /// Rendered path of the conflicting node
        path: String,
    },
}

/// Result alias for keyscope operations.
pub type Result<T> = std::result::Result<T, KeyscopeError>;
