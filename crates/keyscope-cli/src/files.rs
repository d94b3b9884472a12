// SPDX-License-Identifier: MIT OR Apache-2.0
//! Where input files are looked up and where derived files are written.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Directory name searched for input files when none is given.
pub const DEFAULT_SAMPLES_DIR: &str = "samples";

/// Directory that relative input names are resolved against.
///
/// An explicit directory wins. Otherwise `./samples` is used when it exists,
/// and the current directory when it does not.
#[must_use]
pub fn samples_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    let default = PathBuf::from(DEFAULT_SAMPLES_DIR);
    if default.is_dir() {
        default
    } else {
        PathBuf::from(".")
    }
}

/// Absolute names are used as given; relative names are joined to `samples`.
#[must_use]
pub fn resolve_input(samples: &Path, name: &Path) -> PathBuf {
    if name.is_absolute() {
        name.to_path_buf()
    } else {
        samples.join(name)
    }
}

/// Sibling of `path` with `_mapped` inserted before the extension.
///
/// A path without an extension gets `.json`.
///
/// ```
/// use keyscope_cli::files::mapped_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     mapped_path(Path::new("samples/legacy.json")),
///     PathBuf::from("samples/legacy_mapped.json")
/// );
/// assert_eq!(mapped_path(Path::new("export")), PathBuf::from("export_mapped.json"));
/// ```
#[must_use]
pub fn mapped_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.file_stem().unwrap_or_default());
    name.push("_mapped.");
    name.push(path.extension().unwrap_or_else(|| OsStr::new("json")));
    path.with_file_name(name)
}
