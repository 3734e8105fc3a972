//! Turns a [`TranslationTable`] into the catalog file on disk.
//!
//! [`Generator::write`] is the whole pipeline: serialize the table, write the file, and
//! hand back a [`Summary`] for the console. [`Generator::check`] compares an existing file
//! against what `write` would produce.

use std::{
    collections::BTreeSet,
    fmt::Display,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{
    config::GeneratorConfig,
    error::Error,
    formats::xcstrings::{self, Format},
    traits::Parser,
    types::{LocaleCode, TranslationTable},
};

/// Builds and writes one catalog.
#[derive(Debug, Clone)]
pub struct Generator {
    table: TranslationTable,
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(table: TranslationTable, config: GeneratorConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn output_path(&self) -> &Path {
        &self.config.output_path
    }

    /// The catalog document for the current table.
    pub fn document(&self) -> Format {
        xcstrings::serialize(&self.table)
    }

    /// The exact text [`Generator::write`] stores.
    pub fn render(&self) -> Result<String, Error> {
        self.document().to_pretty_string()
    }

    /// Writes the catalog to the configured path, replacing any existing file.
    ///
    /// Fails if the parent directory does not exist or is not writable.
    pub fn write(&self) -> Result<Summary, Error> {
        self.report_missing_locales();

        let path = self.output_path();
        debug!(path = %path.display(), keys = self.table.len(), "writing string catalog");
        self.document().write_to(path)?;

        Ok(Summary {
            path: path.to_path_buf(),
            total_strings: self.table.len(),
            locales: self.config.locales.clone(),
        })
    }

    /// Compares the file at the configured path with what [`Generator::write`] would
    /// produce.
    pub fn check(&self) -> Result<CheckStatus, Error> {
        let path = self.output_path();
        let expected = self.render()?;

        let actual = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "catalog not found");
                return Ok(CheckStatus::Missing);
            }
            Err(e) => return Err(Error::Io(e)),
        };

        if actual == expected.as_bytes() {
            return Ok(CheckStatus::UpToDate);
        }

        // Compared as raw JSON so members the document model ignores still count.
        let existing: Value = serde_json::from_slice(&actual)?;
        let report = StaleReport::between(&existing, &self.document())?;
        debug!(
            added = report.added.len(),
            removed = report.removed.len(),
            changed = report.changed.len(),
            "catalog is stale"
        );
        Ok(CheckStatus::Stale(report))
    }

    fn report_missing_locales(&self) {
        for (key, missing) in self.table.missing_locales(&self.config.locales) {
            let missing = missing
                .iter()
                .map(|locale| locale.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            warn!(key = %key, missing = %missing, "key has no translation for some locales");
        }
    }
}

/// What a successful [`Generator::write`] reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub path: PathBuf,
    pub total_strings: usize,
    pub locales: Vec<LocaleCode>,
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "✅ Generated {}", self.path.display())?;
        writeln!(f, "📊 Total strings: {}", self.total_strings)?;
        write!(
            f,
            "🌍 Languages: {}",
            self.locales
                .iter()
                .map(LocaleCode::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// Result of [`Generator::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// The file matches byte for byte.
    UpToDate,
    /// No file at the output path.
    Missing,
    /// The file differs.
    Stale(StaleReport),
}

impl CheckStatus {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, CheckStatus::UpToDate)
    }
}

/// Key-level difference between an existing catalog and the generated one.
///
/// All three lists may be empty when only formatting differs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaleReport {
    /// Keys the generator would add.
    pub added: Vec<String>,
    /// Keys present on disk that the generator would drop.
    pub removed: Vec<String>,
    /// Keys whose record would change.
    pub changed: Vec<String>,
}

impl StaleReport {
    fn between(existing: &Value, generated: &Format) -> Result<Self, Error> {
        let empty = Map::new();
        let existing_strings = match existing.get("strings") {
            Some(Value::Object(strings)) => strings,
            None => &empty,
            Some(_) => {
                return Err(Error::DataMismatch(
                    "`strings` is not an object".to_string(),
                ));
            }
        };

        let existing_keys: BTreeSet<&String> = existing_strings.keys().collect();
        let generated_keys: BTreeSet<&String> = generated.strings.keys().collect();

        let added = generated_keys
            .difference(&existing_keys)
            .map(|key| key.to_string())
            .collect();
        let removed = existing_keys
            .difference(&generated_keys)
            .map(|key| key.to_string())
            .collect();
        let mut changed = Vec::new();
        for key in generated_keys.intersection(&existing_keys) {
            let expected = serde_json::to_value(&generated.strings[*key])?;
            if existing_strings.get(*key) != Some(&expected) {
                changed.push(key.to_string());
            }
        }

        Ok(Self {
            added,
            removed,
            changed,
        })
    }

    pub fn is_formatting_only(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

impl Display for StaleReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_formatting_only() {
            return write!(f, "formatting differs, no key changes");
        }
        let mut lines = Vec::new();
        for (label, keys) in [
            ("added", &self.added),
            ("removed", &self.removed),
            ("changed", &self.changed),
        ] {
            for key in keys {
                lines.push(format!("  {}: {}", label, key));
            }
        }
        write!(f, "{}", lines.join("\n"))
    }
}
