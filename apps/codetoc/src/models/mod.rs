//! Shared data models for extracted declarations and scan results.

pub mod toc;

pub use toc::{FileRecord, Item, Kind, ProjectIndex};
