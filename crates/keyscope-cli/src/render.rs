// SPDX-License-Identifier: MIT OR Apache-2.0
//! Text reports for a [`KeyDiff`].
//!
//! Every report line carries a view tag, `[ROOT]` or `[ALL]`, so the output of
//! `--show-both` can be filtered with grep. Paths only the base document has
//! are listed before paths only the compare document has.

use clap::ValueEnum;
use keyscope_diff::KeyDiff;
use std::collections::BTreeMap;
use std::io::{self, IsTerminal, Write};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Printed by each view when the documents have the same paths.
pub const NO_DIFFERENCES: &str = "No key differences found: both documents have the same paths.";

/// Which views a report contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Grouped by root segment
    #[default]
    Root,
    /// Every differing path
    All,
    /// `Root` followed by `All`
    Both,
}

impl ViewMode {
    /// View selected by the command-line flags. `show_both` wins over
    /// `full_paths`.
    #[must_use]
    pub const fn from_flags(full_paths: bool, show_both: bool) -> Self {
        if show_both {
            Self::Both
        } else if full_paths {
            Self::All
        } else {
            Self::Root
        }
    }
}

/// When to colour report lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Colour when stdout is a terminal
    #[default]
    Auto,
    /// Always colour
    Always,
    /// Never colour
    Never,
}

impl ColorChoice {
    /// Whether to emit colour codes.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

#[derive(Clone, Copy)]
enum Side {
    MissingInCompare,
    MissingInBase,
}

impl Side {
    const fn heading(self) -> &'static str {
        match self {
            Self::MissingInCompare => "Keys present in base but missing in compare:",
            Self::MissingInBase => "Keys present in compare but missing in base:",
        }
    }

    const fn color(self) -> &'static str {
        match self {
            Self::MissingInCompare => GREEN,
            Self::MissingInBase => RED,
        }
    }
}

/// Renders a [`KeyDiff`] as tagged text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    view: ViewMode,
    color: bool,
}

impl Renderer {
    /// Uncoloured renderer for `view`.
    #[must_use]
    pub const fn new(view: ViewMode) -> Self {
        Self { view, color: false }
    }

    /// Enable or disable colour codes.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Write the report for `diff` to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn render<W: Write>(&self, diff: &KeyDiff, out: &mut W) -> io::Result<()> {
        match self.view {
            ViewMode::Root => self.render_root(diff, out),
            ViewMode::All => self.render_all(diff, out),
            ViewMode::Both => {
                writeln!(out, "\n[ROOT] summary by root:")?;
                self.render_root(diff, out)?;
                writeln!(out, "\n[ALL] complete list of differing paths:")?;
                self.render_all(diff, out)
            }
        }
    }

    fn render_root<W: Write>(&self, diff: &KeyDiff, out: &mut W) -> io::Result<()> {
        if diff.is_empty() {
            return writeln!(out, "{NO_DIFFERENCES}");
        }
        let lines = [
            (Side::MissingInCompare, diff.grouped_missing_in_compare()),
            (Side::MissingInBase, diff.grouped_missing_in_base()),
        ];
        for (side, groups) in lines {
            self.section(out, side, "[ROOT]", &root_lines(&groups))?;
        }
        Ok(())
    }

    fn render_all<W: Write>(&self, diff: &KeyDiff, out: &mut W) -> io::Result<()> {
        if diff.is_empty() {
            return writeln!(out, "{NO_DIFFERENCES}");
        }
        let lines = [
            (Side::MissingInCompare, &diff.missing_in_compare),
            (Side::MissingInBase, &diff.missing_in_base),
        ];
        for (side, paths) in lines {
            let paths: Vec<&str> = paths.iter().map(String::as_str).collect();
            self.section(out, side, "[ALL]", &paths)?;
        }
        Ok(())
    }

    fn section<W: Write, S: AsRef<str>>(
        &self,
        out: &mut W,
        side: Side,
        tag: &str,
        lines: &[S],
    ) -> io::Result<()> {
        if lines.is_empty() {
            return Ok(());
        }
        writeln!(out, "\n{}", side.heading())?;
        let (start, end) = if self.color {
            (side.color(), RESET)
        } else {
            ("", "")
        };
        for line in lines {
            writeln!(out, "{start}{tag} {}{end}", line.as_ref())?;
        }
        Ok(())
    }
}

/// One line per root: the path itself for a single member, the root and a
/// count otherwise.
fn root_lines(groups: &BTreeMap<String, Vec<String>>) -> Vec<String> {
    groups
        .iter()
        .map(|(root, members)| match members.as_slice() {
            [only] => only.clone(),
            _ => format!("{root} ({} paths)", members.len()),
        })
        .collect()
}
