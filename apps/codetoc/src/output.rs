//! Console progress output for a generation run.
//!
//! Progress goes to stdout; read failures go to stderr. Colors follow
//! `NO_COLOR`, as everywhere else in the CLI.

use crate::error::TocError;
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn print_scanning(root: &Path) {
    println!("Scanning project: {}", root.display());
}

/// `Error reading <path>: <reason>` for a file the scanner skipped.
pub fn print_read_error(err: &TocError) {
    let line = match err.path() {
        Some(p) => format!("Error reading {}: {}", p.display(), err),
        None => format!("Error reading: {}", err),
    };
    if use_colors() {
        eprintln!("{}", line.yellow());
    } else {
        eprintln!("{}", line);
    }
}

pub fn print_found(files: usize) {
    println!("Found {} files with code elements", files);
}

pub fn print_generating(path: &Path) {
    println!("Generating {}...", path.display());
}

pub fn print_success(markdown: &Path, json: &Path) {
    let done = "✓ Table of contents generated successfully!";
    if use_colors() {
        println!("{}", done.green().bold());
    } else {
        println!("{}", done);
    }
    println!("  - Markdown: {}", markdown.display());
    println!("  - JSON: {}", json.display());
}
