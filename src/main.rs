//! bump-version - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use bump_version::sync::Synchronizer;
use bump_version::version::BumpKind;

/// Bump the project version across package.json, tauri.conf.json, and Cargo.toml.
#[derive(Parser, Debug)]
#[command(name = "bump-version")]
#[command(about = "Bump the project version across package.json, tauri.conf.json, and Cargo.toml")]
#[command(version)]
struct Cli {
    /// Kind of version bump to apply
    #[arg(value_enum)]
    kind: BumpKind,

    /// Project root containing package.json and src-tauri/ (defaults to the
    /// current directory)
    #[arg(short = 'C', long = "root")]
    root: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Accept the bare word `help` alongside -h/--help.
    if std::env::args().nth(1).as_deref() == Some("help") {
        Cli::command().print_help()?;
        return Ok(());
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            // Missing or unrecognized argument: usage text on stdout, exit 1
            // (clap's own rendering has no usage section here and exits 2).
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    let outcome = Synchronizer::new(root)
        .bump(cli.kind)
        .context("Failed to bump version")?;

    println!("{} -> {}", outcome.previous, outcome.next);

    Ok(())
}
