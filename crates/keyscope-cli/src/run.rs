// SPDX-License-Identifier: MIT OR Apache-2.0
//! The comparison pipeline behind the `keyscope` binary.
//!
//! Both documents are loaded, and the mapped compare document written,
//! before any report output is produced.

use crate::files::{mapped_path, resolve_input, samples_dir};
use crate::render::{Renderer, ViewMode};
use anyhow::{Context, Result};
use keyscope_core::{RootMap, load_document, save_document};
use keyscope_diff::{diff_paths, remap_keys, remap_path_roots};
use keyscope_paths::{FlattenOptions, collect_paths};
use std::io::Write;
use std::path::PathBuf;

/// Everything one comparison needs.
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunOptions {
    /// Base document name
    pub base: PathBuf,
    /// Compare document name
    pub compare: PathBuf,
    /// Directory relative names are resolved against
    pub samples_dir: Option<PathBuf>,
    /// Rename keys in the compare document before comparing
    pub map_roots: bool,
    /// Rename table to use instead of the built-in legacy table
    pub map_file: Option<PathBuf>,
    /// Report views
    pub view: ViewMode,
    /// Report container paths as well as leaves
    pub containers: bool,
    /// Emit the diff as JSON instead of text
    pub json: bool,
    /// Colour report lines
    pub color: bool,
}

/// Run one comparison, writing the report to `out`.
///
/// # Errors
///
/// Fails if either document (or the map file) is missing, unreadable, or not
/// valid JSON, if the mapped document cannot be written, or if `out` fails.
/// The error context names which file was involved.
pub fn run<W: Write>(options: &RunOptions, out: &mut W) -> Result<()> {
    let samples = samples_dir(options.samples_dir.as_deref());
    let base_path = resolve_input(&samples, &options.base);
    let compare_path = resolve_input(&samples, &options.compare);

    let base = load_document(&base_path).context("base file")?;
    let mut compare = load_document(&compare_path).context("compare file")?;

    let map = if options.map_roots {
        Some(match &options.map_file {
            Some(path) => RootMap::load(path).context("map file")?,
            None => RootMap::legacy(),
        })
    } else {
        None
    };

    if let Some(map) = &map {
        let mapped = remap_keys(&compare, map);
        let mapped_file = mapped_path(&compare_path);
        save_document(&mapped_file, &mapped).context("mapped compare file")?;
        tracing::info!(path = %mapped_file.display(), "wrote mapped compare document");
        if !options.json {
            writeln!(
                out,
                "Mapped compare file saved to: {}",
                mapped_file.display()
            )?;
        }
        compare = mapped;
    }

    let flatten = FlattenOptions {
        include_containers: options.containers,
    };
    let mut base_paths = collect_paths(&base, &flatten);
    let compare_paths = collect_paths(&compare, &flatten);
    if let Some(map) = &map {
        // The compare document is already renamed; bring legacy base roots in line
        base_paths = remap_path_roots(&base_paths, map);
    }
    let diff = diff_paths(&base_paths, &compare_paths);
    tracing::debug!(
        missing_in_compare = diff.missing_in_compare.len(),
        missing_in_base = diff.missing_in_base.len(),
        "compared documents"
    );

    if options.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&diff)?)?;
        return Ok(());
    }

    writeln!(
        out,
        "\nComparing:\n  Base: {}\n  Compare: {}",
        base_path.display(),
        compare_path.display()
    )?;
    Renderer::new(options.view)
        .with_color(options.color)
        .render(&diff, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NO_DIFFERENCES;
    use serde_json::{Value, json};
    use std::fs;
    use std::path::Path;

    fn write(dir: &Path, name: &str, value: &Value) {
        fs::write(dir.join(name), value.to_string()).unwrap();
    }

    fn options(dir: &Path, base: &str, compare: &str) -> RunOptions {
        RunOptions {
            base: base.into(),
            compare: compare.into(),
            samples_dir: Some(dir.to_path_buf()),
            ..RunOptions::default()
        }
    }

    fn run_to_string(options: &RunOptions) -> Result<String> {
        let mut buf = Vec::new();
        run(options, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn test_extra_key_reported() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "base.json", &json!({"CA": {"x": 1}}));
        write(dir.path(), "cmp.json", &json!({"CA": {"x": 1, "y": 2}}));
        let text = run_to_string(&options(dir.path(), "base.json", "cmp.json")).unwrap();
        assert!(text.contains("Keys present in compare but missing in base:\n[ROOT] CA.y\n"));
        assert!(!text.contains("missing in compare:"));
    }

    #[test]
    fn test_map_roots_writes_mapped_file_and_clears_diff() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "base.json", &json!({"ECA": {"x": 1}}));
        write(dir.path(), "cmp.json", &json!({"CA": {"x": 1}}));
        let mut opts = options(dir.path(), "base.json", "cmp.json");
        opts.map_roots = true;

        let text = run_to_string(&opts).unwrap();
        assert!(text.contains("Mapped compare file saved to:"));
        assert!(text.contains(NO_DIFFERENCES));

        let mapped = load_document(&dir.path().join("cmp_mapped.json")).unwrap();
        assert_eq!(mapped, json!({"ECA": {"x": 1}}));
    }

    #[test]
    fn test_map_roots_aligns_legacy_base() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "base.json", &json!({"CA": {"x": 1}, "ET": [{"y": 2}]}));
        write(dir.path(), "cmp.json", &json!({"CA": {"x": 1}, "ET": [{"y": 2}]}));
        let mut opts = options(dir.path(), "base.json", "cmp.json");
        opts.map_roots = true;
        opts.view = ViewMode::All;

        let text = run_to_string(&opts).unwrap();
        assert!(text.contains(NO_DIFFERENCES), "{text}");
        assert!(!text.contains("[ALL]"));

        // Only the compare side is written back
        let mapped = load_document(&dir.path().join("cmp_mapped.json")).unwrap();
        assert_eq!(mapped, json!({"ECA": {"x": 1}, "EET": [{"y": 2}]}));
        assert!(!dir.path().join("base_mapped.json").exists());
    }

    #[test]
    fn test_map_roots_renames_only_base_root_segment() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "base.json", &json!({"ETQ801": {"CA": 1}}));
        write(dir.path(), "cmp.json", &json!({"ETQ801": {"CA": 1}}));
        let mut opts = options(dir.path(), "base.json", "cmp.json");
        opts.map_roots = true;
        opts.view = ViewMode::All;

        let text = run_to_string(&opts).unwrap();
        assert!(text.contains("[ALL] ETQ801.CA\n"), "{text}");
        assert!(text.contains("[ALL] ETQ801.ECA\n"), "{text}");
    }

    #[test]
    fn test_unwritable_mapped_file_names_role() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "base.json", &json!({"ECA": 1}));
        write(dir.path(), "cmp.json", &json!({"CA": 1}));
        fs::create_dir(dir.path().join("cmp_mapped.json")).unwrap();
        let mut opts = options(dir.path(), "base.json", "cmp.json");
        opts.map_roots = true;

        let mut buf = Vec::new();
        let err = run(&opts, &mut buf).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.starts_with("mapped compare file: cannot write"), "{msg}");
        assert!(msg.contains("cmp_mapped.json"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_scalar_base_reports_no_blank_path() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "base.json", &json!(42));
        write(dir.path(), "cmp.json", &json!({"a": 1}));

        let text = run_to_string(&options(dir.path(), "base.json", "cmp.json")).unwrap();
        assert!(!text.contains("[ROOT] \n"), "{text}");
        assert!(!text.contains("missing in compare:"));
        assert!(text.contains("[ROOT] a\n"));

        let mut opts = options(dir.path(), "base.json", "cmp.json");
        opts.json = true;
        let report: Value = serde_json::from_str(&run_to_string(&opts).unwrap()).unwrap();
        assert_eq!(report, json!({"missing_in_compare": [], "missing_in_base": ["a"]}));
    }

    #[test]
    fn test_map_file_replaces_legacy_table() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "base.json", &json!({"new": 1}));
        write(dir.path(), "cmp.json", &json!({"old": 1, "CA": 2}));
        write(dir.path(), "map.json", &json!({"old": "new"}));
        let mut opts = options(dir.path(), "base.json", "cmp.json");
        opts.map_roots = true;
        opts.map_file = Some(dir.path().join("map.json"));
        opts.view = ViewMode::All;

        let text = run_to_string(&opts).unwrap();
        assert!(text.contains("[ALL] CA\n"));
        assert!(!text.contains("[ALL] new"));
    }

    #[test]
    fn test_json_report() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "base.json", &json!({"a": [1, 2]}));
        write(dir.path(), "cmp.json", &json!({"a": [1]}));
        let mut opts = options(dir.path(), "base.json", "cmp.json");
        opts.json = true;

        let text = run_to_string(&opts).unwrap();
        let report: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            report,
            json!({"missing_in_compare": ["a[1]"], "missing_in_base": []})
        );
    }

    #[test]
    fn test_missing_base_file_names_role() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "cmp.json", &json!({}));
        let err = run_to_string(&options(dir.path(), "nope.json", "cmp.json")).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.starts_with("base file: cannot read"));
        assert!(msg.contains("nope.json"));
    }

    #[test]
    fn test_invalid_compare_file_names_role() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "base.json", &json!({}));
        fs::write(dir.path().join("cmp.json"), "{not json").unwrap();
        let err = run_to_string(&options(dir.path(), "base.json", "cmp.json")).unwrap_err();
        assert!(format!("{err:#}").starts_with("compare file: invalid JSON"));
    }

    #[test]
    fn test_failure_produces_no_output() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "base.json", &json!({"a": 1}));
        let mut buf = Vec::new();
        let result = run(&options(dir.path(), "base.json", "missing.json"), &mut buf);
        assert!(result.is_err());
        assert!(buf.is_empty());
    }
}
