//! Configuration discovery and effective settings resolution.
//!
//! codetoc reads `codetoc.toml|yaml|yml` from the project root (the closest
//! ancestor holding one of those files or a `.git` directory) and merges it
//! with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `extensions`: `ts`, `tsx`, `js`, `jsx`
//! - `exclude_dirs`: `node_modules`, `dist`, `.git`, `public`
//! - `output.markdown`: `TABLE_OF_CONTENTS.md`
//! - `output.json`: `TABLE_OF_CONTENTS.json`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Result, TocError};
use crate::scan::ScanOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSIONS: [&str; 4] = ["ts", "tsx", "js", "jsx"];
pub const DEFAULT_EXCLUDE_DIRS: [&str; 4] = ["node_modules", "dist", ".git", "public"];
pub const DEFAULT_MARKDOWN_OUTPUT: &str = "TABLE_OF_CONTENTS.md";
pub const DEFAULT_JSON_OUTPUT: &str = "TABLE_OF_CONTENTS.json";

const CONFIG_FILES: [&str; 3] = ["codetoc.toml", "codetoc.yaml", "codetoc.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Output file names under `[output]`, relative to the project root.
pub struct OutputCfg {
    pub markdown: Option<String>,
    pub json: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `codetoc.toml|yaml`.
pub struct TocConfig {
    pub extensions: Option<Vec<String>>,
    pub exclude_dirs: Option<Vec<String>>,
    pub output: Option<OutputCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by a run after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub scan: ScanOptions,
    pub markdown_path: PathBuf,
    pub json_path: PathBuf,
    /// Whether a config file was found at the root.
    pub config_found: bool,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when a `codetoc.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_project_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `TocConfig` from `codetoc.toml` or `codetoc.yaml|yml` if present.
///
/// Returns `Ok(None)` when no config file exists; a file that exists but
/// fails to parse is an error.
pub fn load_config(root: &Path) -> Result<Option<TocConfig>> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.is_file() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|e| TocError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<TocConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<TocConfig>(&s).map_err(|e| e.to_string())
        };
        return parsed
            .map(Some)
            .map_err(|message| TocError::Config { path, message });
    }
    Ok(None)
}

/// Resolve `Effective` by merging the CLI root, discovered config, and defaults.
pub fn resolve_effective(cli_root: Option<&Path>) -> Result<Effective> {
    let root = match cli_root {
        Some(p) => p.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            detect_project_root(&cwd)
        }
    };
    if !root.is_dir() {
        return Err(TocError::NotADirectory(root));
    }
    // Absolute root: it is echoed on the console and stored in the JSON index
    let root = fs::canonicalize(&root).unwrap_or(root);

    let cfg = load_config(&root)?;
    let config_found = cfg.is_some();
    let cfg = cfg.unwrap_or_default();

    let extensions = cfg
        .extensions
        .map(|v| {
            v.into_iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect()
        })
        .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect());
    let exclude_dirs = cfg
        .exclude_dirs
        .unwrap_or_else(|| DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect());

    let output = cfg.output.unwrap_or_default();
    let markdown_path = root.join(
        output
            .markdown
            .as_deref()
            .unwrap_or(DEFAULT_MARKDOWN_OUTPUT),
    );
    let json_path = root.join(output.json.as_deref().unwrap_or(DEFAULT_JSON_OUTPUT));

    Ok(Effective {
        root,
        scan: ScanOptions {
            extensions,
            exclude_dirs,
        },
        markdown_path,
        json_path,
        config_found,
    })
}
