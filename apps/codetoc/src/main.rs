//! codetoc CLI binary entry point.
//! Resolves configuration, runs one generation, and maps errors to exit codes.

use clap::Parser;
use codetoc::cli::Cli;
use codetoc::utils::{error_prefix, note_prefix};
use codetoc::{config, generate, TocError};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // Logs go to stderr so stdout carries only progress lines
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let eff = match config::resolve_effective(cli.root.as_deref()) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            return ExitCode::from(2);
        }
    };
    if eff.config_found {
        tracing::debug!(root = %eff.root.display(), "Loaded codetoc config");
    } else if cli.root.is_some() {
        eprintln!(
            "{} No codetoc.toml found in {}; using defaults.",
            note_prefix(),
            eff.root.display()
        );
    }

    match generate(&eff) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e @ TocError::Write { .. }) => {
            eprintln!("{} {}", error_prefix(), e);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            ExitCode::from(2)
        }
    }
}
