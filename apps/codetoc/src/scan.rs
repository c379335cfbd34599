//! Project scanner: walks the tree and collects a `ProjectIndex`.
//!
//! Excluded directories are pruned before descent, so their subtrees are
//! never visited. Within a directory, files come before subdirectories and
//! both are ordered by name, which keeps the index order stable between runs.

use crate::error::TocError;
use crate::extract::extract_file;
use crate::models::{FileRecord, ProjectIndex};
use crate::rules::{builtin_rules, Rule};
use crate::utils::to_slash;
use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone)]
/// Which files to scan.
pub struct ScanOptions {
    /// Extensions without the leading dot, e.g. `tsx`.
    pub extensions: Vec<String>,
    /// Directory names pruned at any depth below the root.
    pub exclude_dirs: Vec<String>,
}

impl ScanOptions {
    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|n| self.exclude_dirs.iter().any(|d| d == n))
    }

    /// Suffix test on the raw name, so non-UTF-8 file names still qualify.
    fn matches_extension(&self, name: &OsStr) -> bool {
        let name = name.as_encoded_bytes();
        self.extensions.iter().any(|ext| {
            let ext = ext.as_bytes();
            name.len() > ext.len()
                && name.ends_with(ext)
                && name[name.len() - ext.len() - 1] == b'.'
        })
    }
}

/// Result of one scan: the index plus files that could not be read.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub index: ProjectIndex,
    pub errors: Vec<TocError>,
}

/// Scan `root` with the builtin rules.
pub fn scan(root: &Path, opts: &ScanOptions) -> ScanOutcome {
    scan_with_rules(root, opts, builtin_rules())
}

/// Scan `root`, extracting with `rules`.
///
/// Read failures are collected in `ScanOutcome::errors` and never stop the
/// walk. Files without any item are left out of the index.
pub fn scan_with_rules(root: &Path, opts: &ScanOptions, rules: &[Rule]) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    for path in candidate_files(root, opts) {
        let rel = relative_path(&path, root);
        match extract_file(&path, &rel, rules) {
            Ok(items) => {
                if items.is_empty() {
                    debug!(file = %rel, "No items; skipping");
                    continue;
                }
                outcome.index.push(FileRecord { file: rel, items });
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Failed to read file");
                outcome.errors.push(e);
            }
        }
    }
    outcome
}

/// Files under `root` whose names carry one of the configured extensions.
fn candidate_files(root: &Path, opts: &ScanOptions) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by(files_first_by_name)
        .into_iter()
        .filter_entry(|e| !opts.is_excluded_dir(e))
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(error = %err, "Skipping unreadable entry");
                None
            }
        })
        .filter(is_file_like)
        .filter(|e| opts.matches_extension(e.file_name()))
        .map(|e| e.into_path())
        .collect()
}

/// Regular files, plus symlinks that do not resolve to a directory.
/// A dangling link is kept so that it surfaces as a read failure.
fn is_file_like(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    ft.is_file() || (ft.is_symlink() && !entry.path().is_dir())
}

fn files_first_by_name(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    a_dir
        .cmp(&b_dir)
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// `path` relative to `root`, `/`-separated.
pub fn relative_path(path: &Path, root: &Path) -> String {
    let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    to_slash(&rel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Kind;
    use std::fs;
    use tempfile::tempdir;

    fn opts() -> ScanOptions {
        ScanOptions {
            extensions: vec!["ts".into(), "tsx".into(), "js".into(), "jsx".into()],
            exclude_dirs: vec![
                "node_modules".into(),
                "dist".into(),
                ".git".into(),
                "public".into(),
            ],
        }
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, content).unwrap();
    }

    fn files(outcome: &ScanOutcome) -> Vec<&str> {
        outcome.index.files().iter().map(|r| r.file.as_str()).collect()
    }

    #[test]
    fn test_extension_filter() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "a.ts", "function a() {}\n");
        write(root, "b.tsx", "function b() {}\n");
        write(root, "c.py", "function c() {}\n");
        write(root, "d.json", "function d() {}\n");
        write(root, "e.d.ts", "export type E = 1;\n");
        let out = scan(root, &opts());
        assert_eq!(files(&out), vec!["a.ts", "b.tsx", "e.d.ts"]);
    }

    #[test]
    fn test_excluded_dirs_are_never_indexed() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "node_modules/lib/index.js", "function hidden() {}\n");
        write(root, "dist/bundle.js", "function hidden() {}\n");
        write(root, "public/sw.js", "function hidden() {}\n");
        write(root, ".git/hooks/x.js", "function hidden() {}\n");
        write(root, "src/nested/node_modules/y.ts", "function hidden() {}\n");
        write(root, "src/main.ts", "function shown() {}\n");
        let out = scan(root, &opts());
        assert_eq!(files(&out), vec!["src/main.ts"]);
        assert!(out.index.items().all(|i| i.name != "hidden"));
    }

    #[test]
    fn test_excluded_name_only_applies_to_directories() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        // A file that happens to share a denylisted name is still a candidate
        write(root, "dist.ts", "class Dist {}\n");
        let out = scan(root, &opts());
        assert_eq!(files(&out), vec!["dist.ts"]);
    }

    #[test]
    fn test_files_without_items_are_absent() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "empty.ts", "// nothing here\nimport x from 'y';\n");
        write(root, "full.ts", "interface Full {}\n");
        let out = scan(root, &opts());
        assert_eq!(files(&out), vec!["full.ts"]);
        assert!(out.errors.is_empty());
    }

    #[test]
    fn test_relative_paths_use_forward_slashes_and_match_items() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "src/Components/Header.tsx", "export const Header = () => {\n");
        let out = scan(root, &opts());
        let rec = &out.index.files()[0];
        assert_eq!(rec.file, "src/Components/Header.tsx");
        assert!(rec.items.iter().all(|i| i.file == rec.file));
        assert_eq!(rec.items[0].kind, Kind::Function);
    }

    #[test]
    fn test_traversal_order_files_before_subdirs() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "b/inner.ts", "function inner() {}\n");
        write(root, "z.ts", "function z() {}\n");
        write(root, "a.ts", "function a() {}\n");
        let out = scan(root, &opts());
        assert_eq!(files(&out), vec!["a.ts", "z.ts", "b/inner.ts"]);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "x/y.ts", "class Y {}\n  go() {\n");
        write(root, "w.js", "const w = () => 1;\n");
        let first = scan(root, &opts());
        let second = scan(root, &opts());
        assert_eq!(first.index, second.index);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_skipped_and_reported() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "good.ts", "function good() {}\n");
        std::os::unix::fs::symlink(root.join("missing-target.ts"), root.join("broken.ts"))
            .unwrap();
        let out = scan(root, &opts());
        assert_eq!(files(&out), vec!["good.ts"]);
        assert_eq!(out.errors.len(), 1);
        assert!(out.errors[0]
            .path()
            .is_some_and(|p| p.ends_with("broken.ts")));
    }

    #[test]
    fn test_matches_extension_is_a_name_suffix_check() {
        let o = opts();
        assert!(o.matches_extension(OsStr::new("a.ts")));
        assert!(o.matches_extension(OsStr::new("x.d.ts")));
        assert!(o.matches_extension(OsStr::new(".ts")));
        assert!(!o.matches_extension(OsStr::new("ts")));
        assert!(!o.matches_extension(OsStr::new("a.mts")));
        assert!(!o.matches_extension(OsStr::new("a.tsx.bak")));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_file_name_is_scanned() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let root = dir.path();
        let name = OsStr::from_bytes(b"caf\xe9.ts");
        if fs::write(root.join(name), "class Cafe {}\n").is_err() {
            // Filesystems that enforce UTF-8 names cannot hold this fixture
            return;
        }
        write(root, "ok.ts", "class Ok {}\n");
        let out = scan(root, &opts());
        assert!(out.errors.is_empty());
        assert_eq!(out.index.len(), 2);
        assert!(out.index.items().any(|i| i.name == "Cafe"));
        let rec = out
            .index
            .files()
            .iter()
            .find(|r| r.items[0].name == "Cafe")
            .unwrap();
        assert_eq!(rec.file, "caf\u{FFFD}.ts");
    }

    #[test]
    fn test_relative_path_helper() {
        let root = Path::new("/proj");
        assert_eq!(relative_path(Path::new("/proj/src/a.ts"), root), "src/a.ts");
    }
}
