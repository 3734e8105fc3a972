//! Compiled-in generator settings.
//!
//! The generator takes no environment or file configuration; everything it needs lives
//! here. The CLI may only redirect the output path.

use std::path::{Path, PathBuf};

use crate::types::LocaleCode;

/// Locale declared as `sourceLanguage` in every generated catalog.
pub const SOURCE_LANGUAGE: &str = "zh-Hans";

/// String catalog format version.
pub const VERSION: &str = "1.0";

/// Locales shipped by the app, in display order.
pub const SUPPORTED_LOCALES: [&str; 4] = ["zh-Hans", "en", "ja", "ko"];

/// Catalog location relative to the repository root of the iOS project.
pub const DEFAULT_OUTPUT_PATH: &str = "MojiTalk/Resources/Localizable.xcstrings";

/// Settings for one [`crate::Generator`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Where the catalog is written (and read back by `check`).
    pub output_path: PathBuf,
    /// Locales every key is expected to carry. Reported in the summary; keys missing one
    /// are logged, never filled in.
    pub locales: Vec<LocaleCode>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            locales: SUPPORTED_LOCALES.iter().map(|code| LocaleCode::new(*code)).collect(),
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output path.
    pub fn with_output_path(mut self, output_path: impl AsRef<Path>) -> Self {
        self.output_path = output_path.as_ref().to_path_buf();
        self
    }

    /// Sets the expected locales.
    pub fn with_locales(mut self, locales: Vec<LocaleCode>) -> Self {
        self.locales = locales;
        self
    }
}
