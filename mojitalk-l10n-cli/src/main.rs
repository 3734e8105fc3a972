mod commands;

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use mojitalk_l10n::DEFAULT_OUTPUT_PATH;
use tracing_subscriber::EnvFilter;

use crate::commands::{run_check, run_export, run_generate};

/// Generate Localizable.xcstrings for the MOJiTalk app.
///
/// Without a subcommand, writes the built-in catalog to the default path.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Option<Commands>,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the string catalog.
    Generate {
        /// Where to write the catalog
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
        /// CSV translation table to use instead of the built-in one
        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// Verify that the catalog on disk is what `generate` would write.
    Check {
        /// The catalog to verify
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
        /// CSV translation table to use instead of the built-in one
        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// Write the built-in translation table as CSV.
    Export {
        /// The CSV file to write
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the summary.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.commands {
        None => run_generate(PathBuf::from(DEFAULT_OUTPUT_PATH), None),
        Some(Commands::Generate { output, table }) => run_generate(output, table),
        Some(Commands::Check { output, table }) => run_check(output, table),
        Some(Commands::Export { output }) => run_export(output),
    }
}
