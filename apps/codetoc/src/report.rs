//! Report rendering: the Markdown navigation document and the JSON index.
//!
//! Both renderers are pure functions of the index and a timestamp captured
//! once per run; `write_markdown` / `write_json` only put them on disk.

use crate::error::{Result, TocError};
use crate::models::{Item, Kind, ProjectIndex};
use chrono::{DateTime, Local};
use serde_json::{json, Value as Json};
use std::fs;
use std::path::Path;

const TITLE: &str = "# Project Table of Contents";
const INTRO: &str = "This document provides a quick reference guide to all files, functions, classes, \
interfaces, and types in the project. Use the line numbers to quickly navigate \
to specific code sections when working with AI coding assistants.";

/// Markdown anchor for a file heading: `/` becomes `-`, then lower-cased.
pub fn anchor(path: &str) -> String {
    path.replace('/', "-").to_lowercase()
}

/// Items of `kind`, borrowed from `items`, in their original order.
fn of_kind<'a>(items: impl IntoIterator<Item = &'a Item>, kind: Kind) -> Vec<&'a Item> {
    items.into_iter().filter(|i| i.kind == kind).collect()
}

/// Render the navigation document.
///
/// Layout: title and timestamp, quick navigation links, one section per
/// file (items grouped by kind, ordered by line), then a flat index of all
/// items grouped by kind and ordered by name.
pub fn render_markdown(index: &ProjectIndex, generated: &DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push_str("\n\n");
    out.push_str(&format!(
        "*Generated on {}*\n\n",
        generated.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(INTRO);
    out.push_str("\n\n---\n\n");

    let sorted = index.sorted_by_file();

    out.push_str("## Quick Navigation\n\n");
    for rec in &sorted {
        out.push_str(&format!("- [{}](#{})\n", rec.file, anchor(&rec.file)));
    }
    out.push_str("\n---\n\n");

    for rec in &sorted {
        out.push_str(&format!("## {}\n\n", rec.file));
        for kind in Kind::DISPLAY_ORDER {
            let mut group = of_kind(&rec.items, kind);
            if group.is_empty() {
                continue;
            }
            group.sort_by_key(|i| i.line);
            out.push_str(&format!("### {}\n\n", kind.heading()));
            for item in group {
                out.push_str(&format!(
                    "- **{}** ({}) - [Line {}]({}#{})\n",
                    item.name, item.label, item.line, rec.file, item.line
                ));
            }
            out.push('\n');
        }
    }

    out.push_str("---\n\n");
    out.push_str("## Flat Index (All Items by Type)\n\n");
    for kind in Kind::DISPLAY_ORDER {
        let mut group = of_kind(index.items(), kind);
        if group.is_empty() {
            continue;
        }
        // Stable: equal names keep scan order
        group.sort_by(|a, b| a.name.cmp(&b.name));
        out.push_str(&format!("### {}\n\n", kind.heading()));
        for item in group {
            out.push_str(&format!(
                "- **{}** - [{}:{}]({}#L{})\n",
                item.name, item.file, item.line, item.file, item.line
            ));
        }
        out.push('\n');
    }
    out
}

/// Compose the JSON index (pure) for writing or testing.
///
/// Files and items keep their scan order; nothing is re-sorted.
pub fn compose_index_json(
    index: &ProjectIndex,
    root: &Path,
    generated: &DateTime<Local>,
) -> Result<Json> {
    Ok(json!({
        "generated": generated.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        "project_root": root.to_string_lossy(),
        "files": serde_json::to_value(index)?,
    }))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| TocError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the Markdown document to `path`, replacing any existing file.
pub fn write_markdown(path: &Path, index: &ProjectIndex, generated: &DateTime<Local>) -> Result<()> {
    write_file(path, &render_markdown(index, generated))
}

/// Write the JSON index to `path` with 2-space indentation.
pub fn write_json(
    path: &Path,
    index: &ProjectIndex,
    root: &Path,
    generated: &DateTime<Local>,
) -> Result<()> {
    let value = compose_index_json(index, root, generated)?;
    let s = serde_json::to_string_pretty(&value)?;
    write_file(path, &s)
}
