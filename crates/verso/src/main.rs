//! Verso CLI - version and locale resolution for documentation sites.
//!
//! Provides commands for:
//! - `resolve`: Resolve a request path to version, labels, and switch targets
//! - `versions`: List the versions that have a topic
//! - `switch`: Compute the path for switching a page to another version
//! - `nav`: Print the localized navigation tree of a version

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GlobalArgs, NavArgs, ResolveArgs, SwitchArgs, VersionsArgs};
use output::Output;

/// Verso - version and locale resolution for documentation sites.
#[derive(Parser)]
#[command(name = "verso", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a request path for a locale.
    Resolve(ResolveArgs),
    /// List the versions in which a topic exists.
    Versions(VersionsArgs),
    /// Compute the path that switches a page to another version.
    Switch(SwitchArgs),
    /// Print the localized navigation tree.
    Nav(NavArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN.
    // Logs go to stderr so stdout stays valid JSON.
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Resolve(args) => args.execute(&cli.global, &output),
        Commands::Versions(args) => args.execute(&cli.global, &output),
        Commands::Switch(args) => args.execute(&cli.global, &output),
        Commands::Nav(args) => args.execute(&cli.global, &output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}
