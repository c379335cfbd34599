//! Table-of-contents schema: extracted items, per-file records, and the
//! project-wide index produced by one scan.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Coarse declaration kind assigned by the matching rule.
pub enum Kind {
    Class,
    Interface,
    Type,
    Function,
    Method,
}

impl Kind {
    /// Fixed order used when grouping items in the Markdown report.
    pub const DISPLAY_ORDER: [Kind; 5] = [
        Kind::Class,
        Kind::Interface,
        Kind::Type,
        Kind::Function,
        Kind::Method,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Class => "class",
            Kind::Interface => "interface",
            Kind::Type => "type",
            Kind::Function => "function",
            Kind::Method => "method",
        }
    }

    /// Plural section heading, e.g. `Classes`.
    pub fn heading(self) -> &'static str {
        match self {
            Kind::Class => "Classes",
            Kind::Interface => "Interfaces",
            Kind::Type => "Types",
            Kind::Function => "Functions",
            Kind::Method => "Methods",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// A single declaration found on one line of a source file.
pub struct Item {
    pub name: String,
    /// Serialized as `type` to keep the JSON shape consumers already read.
    #[serde(rename = "type")]
    pub kind: Kind,
    pub label: String,
    /// 1-based line number.
    pub line: usize,
    /// Path relative to the project root, `/`-separated.
    pub file: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// All items extracted from one file, in line order.
pub struct FileRecord {
    pub file: String,
    pub items: Vec<Item>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
/// Scan result: one record per file that produced at least one item,
/// in traversal order.
pub struct ProjectIndex {
    files: Vec<FileRecord>,
}

impl ProjectIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Empty records are dropped so that files without
    /// declarations never show up in reports.
    pub fn push(&mut self, record: FileRecord) {
        if !record.items.is_empty() {
            self.files.push(record);
        }
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Every item across all files, in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.files.iter().flat_map(|f| f.items.iter())
    }

    /// Records ordered lexicographically by relative path.
    pub fn sorted_by_file(&self) -> Vec<&FileRecord> {
        let mut v: Vec<&FileRecord> = self.files.iter().collect();
        v.sort_by(|a, b| a.file.cmp(&b.file));
        v
    }
}

impl From<Vec<FileRecord>> for ProjectIndex {
    fn from(records: Vec<FileRecord>) -> Self {
        let mut index = ProjectIndex::new();
        for r in records {
            index.push(r);
        }
        index
    }
}
