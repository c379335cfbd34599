//! codetoc core library.
//!
//! This crate scans a TypeScript/JavaScript source tree, extracts
//! declarations with line-based patterns, and renders a Markdown table of
//! contents plus a JSON index.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Project root discovery and effective configuration resolution.
//! - `rules`: Ordered declaration patterns and the keyword denylist.
//! - `extract`: Per-file, per-line extraction into items.
//! - `scan`: Directory walk with extension filter and directory pruning.
//! - `report`: Markdown and JSON renderers and writers.
//! - `generate`: One end-to-end run wiring the above together.
//! - `models`: Item, file record, and project index types.
//! - `output`: Console progress printers.
//! - `error`: Shared error type.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod generate;
pub mod models;
pub mod output;
pub mod report;
pub mod rules;
pub mod scan;
pub mod utils;

pub use error::{Result, TocError};
pub use generate::{generate, RunSummary};
pub use models::{FileRecord, Item, Kind, ProjectIndex};
pub use scan::{scan, ScanOptions, ScanOutcome};
