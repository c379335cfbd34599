//! CLI argument parsing via `clap`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "codetoc",
    version,
    about = "Generate a table of contents for a TypeScript/JavaScript project",
    long_about = "codetoc scans .ts/.tsx/.js/.jsx files for functions, classes, interfaces, types, and methods, then writes TABLE_OF_CONTENTS.md and TABLE_OF_CONTENTS.json to the project root.\n\nConfiguration precedence: CLI > codetoc.toml > defaults.",
    after_help = "Examples:\n  codetoc\n  codetoc --root ../my-app\n  RUST_LOG=codetoc=debug codetoc"
)]
/// Top-level CLI options. Running without flags scans the detected project root.
pub struct Cli {
    #[arg(
        long,
        help = "Project root (default: nearest ancestor with codetoc.toml or .git)"
    )]
    pub root: Option<PathBuf>,
}
