//! Spreadsheet form of the translation table.
//!
//! ```text
//! key,zh-Hans,en,ja,ko,comment
//! common.ok,确定,OK,OK,확인,
//! ```
//!
//! The `comment` column is optional. Every other non-`key` column is a locale. Empty cells
//! are read as empty texts, so a CSV cannot express a missing translation.

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use crate::{
    config::SUPPORTED_LOCALES,
    error::Error,
    traits::Parser,
    types::{LocaleCode, TranslationEntry, TranslationKey, TranslationTable},
};

const KEY_COLUMN: &str = "key";
const COMMENT_COLUMN: &str = "comment";

/// Column positions resolved from the header row.
#[derive(Debug)]
struct Columns {
    key: usize,
    comment: Option<usize>,
    locales: Vec<(usize, LocaleCode)>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, Error> {
        let mut key = None;
        let mut comment = None;
        let mut locales: Vec<(usize, LocaleCode)> = Vec::new();

        for (index, name) in headers.iter().enumerate() {
            let name = name.trim();
            if name.eq_ignore_ascii_case(KEY_COLUMN) {
                key = Some(index);
            } else if name.eq_ignore_ascii_case(COMMENT_COLUMN) {
                comment = Some(index);
            } else {
                let locale: LocaleCode = name.parse()?;
                if let Some((_, seen)) = locales
                    .iter()
                    .find(|(_, seen)| seen.same_language(&locale))
                {
                    return Err(Error::DataMismatch(format!(
                        "locale column `{}` duplicates `{}`",
                        locale, seen
                    )));
                }
                locales.push((index, locale));
            }
        }

        let key = key.ok_or_else(|| Error::validation_error("missing `key` column"))?;
        Ok(Self {
            key,
            comment,
            locales,
        })
    }
}

impl Parser for TranslationTable {
    /// Parse from any reader. The first row must be the header.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let columns = Columns::from_headers(rdr.headers()?)?;

        let mut table = TranslationTable::new();
        for result in rdr.records() {
            let record = result?;
            let key: TranslationKey = record.get(columns.key).unwrap_or_default().trim().parse()?;
            if table.contains_key(key.as_str()) {
                return Err(Error::DataMismatch(format!("duplicate key `{}`", key)));
            }

            let mut entry = TranslationEntry::new();
            for (index, locale) in &columns.locales {
                entry.insert(locale.clone(), record.get(*index).unwrap_or_default());
            }
            entry.set_comment(
                columns
                    .comment
                    .and_then(|index| record.get(index))
                    .filter(|comment| !comment.is_empty())
                    .map(str::to_string),
            );

            table.insert_entry(key, entry);
        }

        Ok(table)
    }

    /// Parse from file path, honouring a UTF-8 or UTF-16 byte order mark.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path).map_err(Error::Io)?;
        let decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .strip_bom(true)
            .build(file);
        Self::from_reader(BufReader::new(decoder))
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        let locales = column_order(self);
        let with_comment = self.iter().any(|(_, entry)| entry.comment().is_some());

        let mut wtr = csv::WriterBuilder::new().from_writer(writer);

        let mut header = vec![KEY_COLUMN];
        header.extend(locales.iter().map(LocaleCode::as_str));
        if with_comment {
            header.push(COMMENT_COLUMN);
        }
        wtr.write_record(&header)?;

        for (key, entry) in self {
            let mut row = vec![key.as_str()];
            row.extend(
                locales
                    .iter()
                    .map(|locale| entry.get(locale.as_str()).unwrap_or_default()),
            );
            if with_comment {
                row.push(entry.comment().unwrap_or_default());
            }
            wtr.write_record(&row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Supported locales first, in display order, then any others alphabetically.
fn column_order(table: &TranslationTable) -> Vec<LocaleCode> {
    let present = table.locales();
    let mut order: Vec<LocaleCode> = SUPPORTED_LOCALES
        .iter()
        .map(|code| LocaleCode::new(*code))
        .collect();
    order.extend(
        present
            .into_iter()
            .filter(|locale| !SUPPORTED_LOCALES.contains(&locale.as_str()))
            .cloned(),
    );
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_table() {
        let csv_content = "key,zh-Hans,en,ja,ko\ncommon.ok,确定,OK,OK,확인\ncommon.cancel,取消,Cancel,キャンセル,취소\n";
        let table = TranslationTable::from_reader(Cursor::new(csv_content)).unwrap();
        assert_eq!(table.len(), 2);
        let ok = table.get("common.ok").unwrap();
        assert_eq!(ok.get("zh-Hans"), Some("确定"));
        assert_eq!(ok.get("ko"), Some("확인"));
        assert_eq!(ok.comment(), None);
    }

    #[test]
    fn test_empty_cell_is_empty_text() {
        let csv_content = "key,en,ja\nlogin.stats.suffix,,回\n";
        let table = TranslationTable::from_reader(Cursor::new(csv_content)).unwrap();
        let entry = table.get("login.stats.suffix").unwrap();
        assert_eq!(entry.get("en"), Some(""));
        assert_eq!(entry.get("ja"), Some("回"));
    }

    #[test]
    fn test_quoted_multiline_cell() {
        let csv_content = "key,en\nloginHelp.faq1.answer,\"1. Check email\n2. Check spam\"\n";
        let table = TranslationTable::from_reader(Cursor::new(csv_content)).unwrap();
        assert_eq!(
            table.get("loginHelp.faq1.answer").unwrap().get("en"),
            Some("1. Check email\n2. Check spam")
        );
    }

    #[test]
    fn test_comment_column() {
        let csv_content = "key,en,comment\ncommon.close,Close,Dismiss button\ncommon.ok,OK,\n";
        let table = TranslationTable::from_reader(Cursor::new(csv_content)).unwrap();
        assert_eq!(table.get("common.close").unwrap().comment(), Some("Dismiss button"));
        assert_eq!(table.get("common.ok").unwrap().comment(), None);
    }

    #[test]
    fn test_missing_key_column() {
        let csv_content = "id,en\ncommon.ok,OK\n";
        let result = TranslationTable::from_reader(Cursor::new(csv_content));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_invalid_locale_header() {
        let csv_content = "key,English (US)\ncommon.ok,OK\n";
        let result = TranslationTable::from_reader(Cursor::new(csv_content));
        assert!(matches!(result, Err(Error::InvalidLocale(_))));
    }

    #[test]
    fn test_locale_header_with_underscore() {
        let csv_content = "key,en,en_US\ncommon.ok,OK,OK\n";
        let result = TranslationTable::from_reader(Cursor::new(csv_content));
        assert!(matches!(result, Err(Error::InvalidLocale(code)) if code == "en_US"));
    }

    #[test]
    fn test_locale_headers_differing_by_case_are_duplicates() {
        let csv_content = "key,en,EN\ncommon.ok,OK,Ok2\n";
        let result = TranslationTable::from_reader(Cursor::new(csv_content));
        assert!(matches!(result, Err(Error::DataMismatch(_))));

        let result = TranslationTable::from_bytes(b"key,zh-Hans,ZH-hans\ncommon.ok,a,b\n");
        assert!(matches!(result, Err(Error::DataMismatch(_))));
    }

    #[test]
    fn test_region_variants_are_separate_locales() {
        let csv_content = "key,en,en-US\ncommon.color,Colour,Color\n";
        let table = TranslationTable::from_reader(Cursor::new(csv_content)).unwrap();
        let entry = table.get("common.color").unwrap();
        assert_eq!(entry.get("en"), Some("Colour"));
        assert_eq!(entry.get("en-US"), Some("Color"));
    }

    #[test]
    fn test_duplicate_key() {
        let csv_content = "key,en\ncommon.ok,OK\ncommon.ok,Okay\n";
        let result = TranslationTable::from_reader(Cursor::new(csv_content));
        assert!(matches!(result, Err(Error::DataMismatch(_))));
    }

    #[test]
    fn test_malformed_key() {
        let csv_content = "key,en\nnot a key,OK\n";
        let result = TranslationTable::from_reader(Cursor::new(csv_content));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let csv_content = "key,en,ja\ncommon.ok,OK\n";
        let result = TranslationTable::from_reader(Cursor::new(csv_content));
        assert!(matches!(result, Err(Error::CsvParse(_))));
    }

    #[test]
    fn test_write_then_read() {
        let mut table = TranslationTable::new();
        table.insert(TranslationKey::new("login.stats.suffix"), LocaleCode::new("en"), "");
        table.insert(TranslationKey::new("login.stats.suffix"), LocaleCode::new("ja"), "回");
        table.insert(TranslationKey::new("common.ok"), LocaleCode::new("zh-Hans"), "确定");

        let mut buf = Vec::new();
        table.to_writer(&mut buf).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("key,zh-Hans,en,ja,ko\n"));

        let parsed = TranslationTable::from_bytes(&buf).unwrap();
        assert_eq!(parsed.get("login.stats.suffix").unwrap().get("ja"), Some("回"));
        assert_eq!(parsed.get("common.ok").unwrap().get("zh-Hans"), Some("确定"));
    }

    #[test]
    fn test_extra_locale_columns_follow_supported() {
        let mut table = TranslationTable::new();
        table.insert(TranslationKey::new("common.ok"), LocaleCode::new("fr"), "D'accord");
        table.insert(TranslationKey::new("common.ok"), LocaleCode::new("de"), "OK");
        assert_eq!(
            column_order(&table)
                .iter()
                .map(LocaleCode::as_str)
                .collect::<Vec<_>>(),
            vec!["zh-Hans", "en", "ja", "ko", "de", "fr"]
        );
    }

    #[test]
    fn test_read_utf16_file_with_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");

        let content = "key,en,ko\ncommon.ok,OK,확인\n";
        let mut bytes = vec![0xFF, 0xFE];
        for unit in content.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        std::fs::write(&path, bytes).unwrap();

        let table = TranslationTable::read_from(&path).unwrap();
        assert_eq!(table.get("common.ok").unwrap().get("ko"), Some("확인"));
    }

    #[test]
    fn test_read_utf8_file_with_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");

        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("key,zh-Hans,en\ncommon.ok,确定,OK\n".as_bytes());
        std::fs::write(&path, bytes).unwrap();

        let table = TranslationTable::read_from(&path).unwrap();
        let entry = table.get("common.ok").unwrap();
        assert_eq!(entry.get("zh-Hans"), Some("确定"));
        assert_eq!(entry.get("en"), Some("OK"));
        assert_eq!(table.locales().len(), 2);
    }
}
