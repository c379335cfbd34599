//! One generation run: scan, report read failures, write both reports.

use crate::config::Effective;
use crate::error::Result;
use crate::output;
use crate::report::{write_json, write_markdown};
use crate::scan::scan;
use chrono::Local;
use tracing::info;

/// Counts from a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Files that contributed at least one item.
    pub files: usize,
    pub items: usize,
    /// Files skipped because they could not be read.
    pub skipped: usize,
}

/// Scan `eff.root` and write the Markdown then the JSON report.
///
/// Unreadable files are printed and skipped. A write failure stops the run;
/// a report written before it stays on disk.
pub fn generate(eff: &Effective) -> Result<RunSummary> {
    output::print_scanning(&eff.root);
    let outcome = scan(&eff.root, &eff.scan);
    for err in &outcome.errors {
        output::print_read_error(err);
    }
    let index = outcome.index;
    output::print_found(index.len());

    let generated = Local::now();

    output::print_generating(&eff.markdown_path);
    write_markdown(&eff.markdown_path, &index, &generated)?;

    output::print_generating(&eff.json_path);
    write_json(&eff.json_path, &index, &eff.root, &generated)?;

    output::print_success(&eff.markdown_path, &eff.json_path);

    let summary = RunSummary {
        files: index.len(),
        items: index.items().count(),
        skipped: outcome.errors.len(),
    };
    info!(
        files = summary.files,
        items = summary.items,
        skipped = summary.skipped,
        "Table of contents generated"
    );
    Ok(summary)
}
