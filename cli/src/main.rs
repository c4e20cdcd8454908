//! # yumlscript Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the yumlscript CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the script writer against the given root directory
//! - Printing any error that ends the run
//!
//! ## Examples
//!
//! ```bash
//! # Write yumlScript.txt (or yumlScript1.txt, ...) in the current directory
//! yumlscript ~/repos/
//!
//! # Same, logging every directory and project file visited
//! yumlscript -vv ~/repos/
//! ```
//!
//! Exactly one root directory is expected. Any other number of arguments
//! prints the usage text and exits successfully without writing a script.
//! Errors are printed to stdout as `Error: <message>` and exit with status 1.
//!
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};
use yumlscript::core::config::Config;
use yumlscript::core::error::Result;
use yumlscript::scanner::ScriptWriter;

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "yumlscript",
    about = "Writes a yUML dependency diagram script for the MSBuild projects in a directory tree",
    version
)]
struct Cli {
    /// Root directory to scan for project files.
    #[arg(value_name = "rootDirectory")]
    roots: Vec<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let [root] = cli.roots.as_slice() else {
        print_usage();
        return Ok(());
    };

    if let Err(e) = write_script(root) {
        tracing::debug!("Script generation failed: {:?}", e);
        println!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn write_script(root: &Path) -> Result<PathBuf> {
    let output_dir = std::env::current_dir().context("Failed to get current directory")?;
    ScriptWriter::new(root, output_dir, Config::default()).write_script()
}

fn print_usage() {
    println!("Usage: yumlscript <rootDirectory>");
    println!();
    println!("  e.g. yumlscript ~/repos/");
    println!();
}
