use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use mojitalk_l10n::{
    CheckStatus, Generator, GeneratorConfig, TranslationTable, builtin_table, traits::Parser,
};
use tracing::{debug, info};

fn load_table(table: Option<&Path>) -> anyhow::Result<TranslationTable> {
    match table {
        Some(path) => {
            debug!(path = %path.display(), "reading translation table");
            TranslationTable::read_from(path)
                .with_context(|| format!("failed to read translation table {}", path.display()))
        }
        None => Ok(builtin_table()),
    }
}

fn generator(output: PathBuf, table: Option<PathBuf>) -> anyhow::Result<Generator> {
    let table = load_table(table.as_deref())?;
    Ok(Generator::new(
        table,
        GeneratorConfig::default().with_output_path(output),
    ))
}

pub fn run_generate(output: PathBuf, table: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let generator = generator(output, table)?;
    let summary = generator.write().with_context(|| {
        format!(
            "failed to write string catalog {}",
            generator.output_path().display()
        )
    })?;
    println!("{}", summary);
    Ok(ExitCode::SUCCESS)
}

pub fn run_check(output: PathBuf, table: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let generator = generator(output, table)?;
    let path = generator.output_path().display();
    let status = generator
        .check()
        .with_context(|| format!("failed to check string catalog {}", path))?;

    match status {
        CheckStatus::UpToDate => {
            println!("✅ {} is up to date", path);
            Ok(ExitCode::SUCCESS)
        }
        CheckStatus::Missing => {
            eprintln!("❌ {} does not exist", path);
            Ok(ExitCode::FAILURE)
        }
        CheckStatus::Stale(report) => {
            eprintln!("❌ {} is out of date", path);
            eprintln!("{}", report);
            Ok(ExitCode::FAILURE)
        }
    }
}

pub fn run_export(output: PathBuf) -> anyhow::Result<ExitCode> {
    let table = builtin_table();
    table
        .write_to(&output)
        .with_context(|| format!("failed to write translation table {}", output.display()))?;
    info!(path = %output.display(), keys = table.len(), "exported translation table");
    println!("✅ Exported {} strings to {}", table.len(), output.display());
    Ok(ExitCode::SUCCESS)
}
