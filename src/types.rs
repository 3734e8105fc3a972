//! Core types for the translation table.
//! The built-in catalog and the CSV reader build these; the serializer consumes them.

use std::{
    borrow::Borrow,
    collections::{BTreeMap, BTreeSet, btree_map},
    fmt::Display,
    str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;
use unic_langid::LanguageIdentifier;

use crate::error::Error;

lazy_static! {
    // `namespace.subkey`, at least one dot, no empty segments.
    static ref KEY_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_]+(\.[A-Za-z0-9_]+)+$").unwrap();
}

/// Dotted string identifier, e.g. `login.button.getCode`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TranslationKey(String);

impl TranslationKey {
    /// Wraps a key without checking its shape. Used for trusted, compiled-in data.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the first dot (`login` for `login.title`).
    pub fn namespace(&self) -> &str {
        self.0.split('.').next().unwrap_or_default()
    }
}

impl FromStr for TranslationKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if KEY_REGEX.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::validation_error(format!(
                "`{}` is not a dotted translation key",
                s
            )))
        }
    }
}

impl Borrow<str> for TranslationKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for TranslationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Locale code as written in the catalog (`zh-Hans`, `en`, ...).
///
/// The original spelling is kept verbatim. Parsing accepts only a BCP-47 language
/// identifier in its canonical form, ignoring case: `en-US` and `EN-us` pass, `en_US` does
/// not.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Wraps a code without validation. Used for compiled-in data.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn language_identifier(&self) -> Option<LanguageIdentifier> {
        self.0.parse().ok()
    }

    /// Whether both codes name the same language identifier (`en` and `EN` do).
    pub fn same_language(&self, other: &LocaleCode) -> bool {
        match (self.language_identifier(), other.language_identifier()) {
            (Some(a), Some(b)) => a == b,
            _ => self.0 == other.0,
        }
    }
}

impl FromStr for LocaleCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let code = Self(s.to_string());
        match code.language_identifier() {
            Some(lang_id) if !s.is_empty() && lang_id.to_string().eq_ignore_ascii_case(s) => {
                Ok(code)
            }
            _ => Err(Error::InvalidLocale(s.to_string())),
        }
    }
}

impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for LocaleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All translations of one key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationEntry {
    /// Locale → text. Empty and multi-line texts are stored as-is.
    values: BTreeMap<LocaleCode, String>,

    /// Optional note for translators.
    comment: Option<String>,
}

impl TranslationEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_value(mut self, locale: LocaleCode, text: impl Into<String>) -> Self {
        self.insert(locale, text);
        self
    }

    /// Sets the text for `locale`, returning the previous one.
    pub fn insert(&mut self, locale: LocaleCode, text: impl Into<String>) -> Option<String> {
        self.values.insert(locale, text.into())
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.values.get(locale).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LocaleCode, &str)> {
        self.values.iter().map(|(locale, text)| (locale, text.as_str()))
    }

    pub fn locales(&self) -> impl Iterator<Item = &LocaleCode> {
        self.values.keys()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }
}

/// The string catalog source of truth: key → translations.
///
/// Keys are kept sorted so every derived document comes out in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: BTreeMap<TranslationKey, TranslationEntry>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one translation, creating the key if needed. Returns the replaced text.
    pub fn insert(
        &mut self,
        key: TranslationKey,
        locale: LocaleCode,
        text: impl Into<String>,
    ) -> Option<String> {
        self.entries.entry(key).or_default().insert(locale, text)
    }

    /// Replaces the whole entry for `key`.
    pub fn insert_entry(
        &mut self,
        key: TranslationKey,
        entry: TranslationEntry,
    ) -> Option<TranslationEntry> {
        self.entries.insert(key, entry)
    }

    pub fn get(&self, key: &str) -> Option<&TranslationEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, TranslationKey, TranslationEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &TranslationKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every locale that appears under at least one key.
    pub fn locales(&self) -> BTreeSet<&LocaleCode> {
        self.entries
            .values()
            .flat_map(TranslationEntry::locales)
            .collect()
    }

    /// Keys lacking one or more of `expected`, with the locales they lack.
    pub fn missing_locales<'a>(
        &'a self,
        expected: &'a [LocaleCode],
    ) -> Vec<(&'a TranslationKey, Vec<&'a LocaleCode>)> {
        self.entries
            .iter()
            .filter_map(|(key, entry)| {
                let missing: Vec<_> = expected
                    .iter()
                    .filter(|locale| entry.get(locale.as_str()).is_none())
                    .collect();
                (!missing.is_empty()).then_some((key, missing))
            })
            .collect()
    }
}

impl FromIterator<(TranslationKey, TranslationEntry)> for TranslationTable {
    fn from_iter<T: IntoIterator<Item = (TranslationKey, TranslationEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TranslationTable {
    type Item = (TranslationKey, TranslationEntry);
    type IntoIter = btree_map::IntoIter<TranslationKey, TranslationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a TranslationTable {
    type Item = (&'a TranslationKey, &'a TranslationEntry);
    type IntoIter = btree_map::Iter<'a, TranslationKey, TranslationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
