//! Apple String Catalog (`.xcstrings`) document model.
//!
//! Only singular string units are modelled; the generator never emits plural or device
//! variations.

use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    io::{BufRead, Write},
};

use crate::{
    config::{SOURCE_LANGUAGE, VERSION},
    error::Error,
    traits::Parser,
    types::{LocaleCode, TranslationEntry, TranslationKey, TranslationTable},
};

/// A whole catalog file. Field order matches the serialized member order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    pub source_language: String,
    pub strings: BTreeMap<String, Item>,
    pub version: String,
}

impl Parser for Format {
    /// Parses the xcstrings format from a reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    /// Serializes the xcstrings format to a writer.
    ///
    /// Two-space indentation, non-ASCII text written literally.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(writer, &self).map_err(Error::Parse)
    }
}

impl Format {
    /// Renders the document exactly as [`Parser::write_to`] stores it.
    pub fn to_pretty_string(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(Error::Parse)
    }
}

/// Maps a translation table onto a catalog document.
///
/// Every key becomes one `manual` item and every (locale, text) pair one `translated`
/// string unit holding the text unchanged. Nothing is filled in for missing locales.
pub fn serialize(table: &TranslationTable) -> Format {
    let strings = table
        .iter()
        .map(|(key, entry)| (key.to_string(), Item::from(entry)))
        .collect();

    Format {
        source_language: SOURCE_LANGUAGE.to_string(),
        strings,
        version: VERSION.to_string(),
    }
}

impl From<&TranslationTable> for Format {
    fn from(table: &TranslationTable) -> Self {
        serialize(table)
    }
}

impl TryFrom<Format> for TranslationTable {
    type Error = Error;

    fn try_from(format: Format) -> Result<Self, Self::Error> {
        let mut table = TranslationTable::new();

        for (id, item) in format.strings {
            let mut entry = TranslationEntry::new();
            entry.set_comment(item.comment);

            for (lang_code, localization) in item.localizations {
                let Some(string_unit) = localization.string_unit else {
                    return Err(Error::DataMismatch(format!(
                        "`{}` has no string unit for `{}`",
                        id, lang_code
                    )));
                };
                entry.insert(LocaleCode::new(lang_code), string_unit.value);
            }

            table.insert_entry(TranslationKey::new(id), entry);
        }

        Ok(table)
    }
}

/// One catalog key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_state: Option<ExtractionState>,
    // Written even when empty so every key keeps the same shape.
    #[serde(default)]
    pub localizations: BTreeMap<String, Localization>,
}

impl From<&TranslationEntry> for Item {
    fn from(entry: &TranslationEntry) -> Self {
        let localizations = entry
            .iter()
            .map(|(locale, text)| {
                (
                    locale.to_string(),
                    Localization::from(StringUnit::new(TranslationState::Translated, text)),
                )
            })
            .collect();

        Item {
            comment: entry.comment().map(str::to_string),
            extraction_state: Some(ExtractionState::Manual),
            localizations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionState {
    Manual,
    Stale,
    ExtractedWithValue,
    Migrated,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_unit: Option<StringUnit>,
}

impl From<StringUnit> for Localization {
    fn from(string_unit: StringUnit) -> Self {
        Localization {
            string_unit: Some(string_unit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StringUnit {
    pub state: TranslationState,
    pub value: String,
}

impl StringUnit {
    pub fn new(state: TranslationState, value: &str) -> Self {
        Self {
            state,
            value: value.to_string(),
        }
    }
}

/// Review state of one string unit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationState {
    New,
    NeedsReview,
    Stale,
    Translated,
}
