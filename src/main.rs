//! untracked - Find directories that are not under version control.
//!
//! Usage:
//!   untracked                 Check the current directory
//!   untracked [PATH]...       Check each path in turn
//!   untracked -f json [PATH]  Emit a JSON report per path
//!   untracked --help          Show help

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use untracked_core::{ClassificationTree, ClassifyConfig, ScanWarning, TreeStats};
use untracked_scan::{Classifier, report, write_report};

#[derive(Parser)]
#[command(
    name = "untracked",
    version,
    about = "Find the topmost directories that are not under version control",
    long_about = "untracked walks each PATH and prints every directory that holds no \
                  repository anywhere beneath it, at its highest possible point.\n\n\
                  Recursion stops at repository boundaries; nothing inside a \
                  repository is inspected. Unreadable directories count as empty."
)]
struct Cli {
    /// Directories to check (defaults to the current directory)
    paths: Vec<PathBuf>,

    /// Classify sibling directories in parallel
    #[arg(short = 'j', long)]
    parallel: bool,

    /// Number of worker threads with --parallel (0 = auto)
    #[arg(long, default_value = "0")]
    threads: usize,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// JSON view of one checked path. Paths are rendered lossily.
#[derive(Serialize)]
struct JsonReport<'a> {
    root: String,
    unversioned: Vec<String>,
    stats: &'a TreeStats,
    warnings: &'a [ScanWarning],
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let paths = if cli.paths.is_empty() {
        vec![std::env::current_dir().context("Cannot determine current directory")?]
    } else {
        cli.paths.clone()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for path in &paths {
        let config = ClassifyConfig::builder()
            .root(path.as_path())
            .parallel(cli.parallel)
            .threads(cli.threads)
            .build()
            .context("Invalid path")?;

        let tree = Classifier::new()
            .classify(&config)
            .context("Classification failed")?;

        for warning in &tree.warnings {
            info!(path = %warning.path.display(), kind = ?warning.kind, "{}", warning.message);
        }

        match cli.format {
            OutputFormat::Text => {
                write_report(&tree.root, &mut out).context("Failed to write report")?;
            }
            OutputFormat::Json => {
                print_json(&tree, &mut out)?;
            }
        }
    }

    Ok(())
}

/// Write a pretty JSON report for one tree.
fn print_json(tree: &ClassificationTree, out: &mut impl Write) -> Result<()> {
    let json = JsonReport {
        root: tree.root_path.to_string_lossy().into_owned(),
        unversioned: report(&tree.root)
            .map(|path| path.to_string_lossy().into_owned())
            .collect(),
        stats: &tree.stats,
        warnings: &tree.warnings,
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&json)?).context("Failed to write report")?;
    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `-v`.
fn setup_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();
}
