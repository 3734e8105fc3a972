#![forbid(unsafe_code)]
//! String catalog generator for the MOJiTalk iOS app.
//!
//! The app's translations live in a [`TranslationTable`] (key → locale → text). This crate
//! maps that table onto Apple's String Catalog format and writes `Localizable.xcstrings`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mojitalk_l10n::{Generator, GeneratorConfig, builtin_table};
//!
//! let generator = Generator::new(builtin_table(), GeneratorConfig::default());
//! let summary = generator.write()?;
//! println!("{summary}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Every key becomes one `manual` entry and every translation one `translated` string
//! unit, text unchanged. Output is sorted by key and locale, so regenerating from the same
//! table always yields the same bytes.

pub mod catalog;
pub mod config;
pub mod error;
pub mod formats;
pub mod generator;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    catalog::builtin_table,
    config::{DEFAULT_OUTPUT_PATH, GeneratorConfig, SOURCE_LANGUAGE, SUPPORTED_LOCALES, VERSION},
    error::Error,
    formats::xcstrings::serialize,
    generator::{CheckStatus, Generator, StaleReport, Summary},
    types::{LocaleCode, TranslationEntry, TranslationKey, TranslationTable},
};
