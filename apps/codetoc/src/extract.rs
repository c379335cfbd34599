//! Per-file declaration extraction.
//!
//! Each line is tested against the rule list independently; there is no
//! notion of scope, strings, or comments, so nested or multi-line
//! constructs are recognized only as far as a single line reveals them.

use crate::error::{Result, TocError};
use crate::models::Item;
use crate::rules::{first_match, is_denylisted, Rule};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// `\r\n`, `\n`, or a lone `\r` (classic Mac line endings).
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Extract items from already-loaded `content`.
///
/// `file` is the root-relative path recorded on every item. Line numbers
/// are 1-based and items come out in ascending line order.
pub fn extract_items(content: &str, file: &str, rules: &[Rule]) -> Vec<Item> {
    let mut items = Vec::new();
    for (idx, line) in LINE_BREAK.split(content).enumerate() {
        let Some((rule, name)) = first_match(rules, line) else {
            continue;
        };
        if is_denylisted(name) {
            continue;
        }
        items.push(Item {
            name: name.to_string(),
            kind: rule.kind,
            label: rule.label.to_string(),
            line: idx + 1,
            file: file.to_string(),
        });
    }
    items
}

/// Read `path` and extract its items.
///
/// Invalid UTF-8 is replaced rather than rejected; only I/O failures are
/// reported as `TocError::Read`.
pub fn extract_file(path: &Path, file: &str, rules: &[Rule]) -> Result<Vec<Item>> {
    let bytes = fs::read(path).map_err(|source| TocError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);
    let items = extract_items(&content, file, rules);
    debug!(file, count = items.len(), "Extracted items");
    Ok(items)
}
