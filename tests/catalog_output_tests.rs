use indoc::indoc;
use mojitalk_l10n::formats::xcstrings::Format;
use mojitalk_l10n::traits::Parser;
use mojitalk_l10n::{
    Generator, GeneratorConfig, LocaleCode, TranslationKey, TranslationTable, builtin_table,
    serialize,
};
use std::fs;
use tempfile::TempDir;

const GOLDEN: &str = include_str!("fixtures/Localizable.xcstrings");

fn table_of(rows: &[(&str, &[(&str, &str)])]) -> TranslationTable {
    let mut table = TranslationTable::new();
    for (key, texts) in rows {
        for (locale, text) in texts.iter() {
            table.insert(TranslationKey::new(*key), LocaleCode::new(*locale), *text);
        }
    }
    table
}

fn value_of(rendered: &str) -> serde_json::Value {
    serde_json::from_str(rendered).expect("rendered catalog is JSON")
}

#[test]
fn test_builtin_catalog_matches_golden_file() {
    let generator = Generator::new(builtin_table(), GeneratorConfig::default());
    assert_eq!(generator.render().unwrap(), GOLDEN);
}

#[test]
fn test_common_ok_scenario() {
    let table = table_of(&[("common.ok", &[("en", "OK"), ("ja", "OK")])]);
    let rendered = serialize(&table).to_pretty_string().unwrap();

    let expected = indoc! {r#"
        {
          "sourceLanguage": "zh-Hans",
          "strings": {
            "common.ok": {
              "extractionState": "manual",
              "localizations": {
                "en": {
                  "stringUnit": {
                    "state": "translated",
                    "value": "OK"
                  }
                },
                "ja": {
                  "stringUnit": {
                    "state": "translated",
                    "value": "OK"
                  }
                }
              }
            }
          },
          "version": "1.0"
        }"#};
    assert_eq!(rendered, expected);
}

#[test]
fn test_empty_suffix_is_explicit() {
    let rendered = Generator::new(builtin_table(), GeneratorConfig::default())
        .render()
        .unwrap();
    let value = value_of(&rendered);
    let unit = &value["strings"]["login.stats.suffix"]["localizations"]["en"]["stringUnit"];
    assert_eq!(unit["value"], "");
    assert_eq!(unit["state"], "translated");
}

#[test]
fn test_multiline_answers_keep_newlines() {
    let table = builtin_table();
    let rendered = serialize(&table).to_pretty_string().unwrap();
    let value = value_of(&rendered);

    for key in ["loginHelp.faq1.answer", "loginHelp.faq2.answer"] {
        for locale in ["zh-Hans", "en", "ja", "ko"] {
            let expected = table.get(key).unwrap().get(locale).unwrap();
            assert!(expected.contains('\n'));
            assert_eq!(
                value["strings"][key]["localizations"][locale]["stringUnit"]["value"],
                expected
            );
        }
    }
    // Newlines are JSON-escaped inside the string, never raw line breaks.
    assert!(rendered.contains(r"1. Check if email address is correct\n2. Check spam folder"));
}

#[test]
fn test_source_language_is_fixed() {
    let table = table_of(&[("common.ok", &[("en", "OK")]), ("common.error", &[("ja", "エラー")])]);
    assert_eq!(serialize(&table).source_language, "zh-Hans");
    assert_eq!(serialize(&TranslationTable::new()).source_language, "zh-Hans");
}

#[test]
fn test_regenerating_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let config = GeneratorConfig::default().with_output_path(dir.path().join("Localizable.xcstrings"));

    Generator::new(builtin_table(), config.clone()).write().unwrap();
    let first = fs::read(&config.output_path).unwrap();
    Generator::new(builtin_table(), config.clone()).write().unwrap();
    let second = fs::read(&config.output_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_written_file_reads_back_to_same_table() {
    let dir = TempDir::new().unwrap();
    let config = GeneratorConfig::default().with_output_path(dir.path().join("Localizable.xcstrings"));
    let summary = Generator::new(builtin_table(), config.clone()).write().unwrap();
    assert_eq!(summary.total_strings, 65);

    let format = Format::read_from(&config.output_path).unwrap();
    let table = TranslationTable::try_from(format).unwrap();
    assert_eq!(table, builtin_table());
}

#[test]
fn test_csv_export_reimports_to_identical_catalog() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("translations.csv");
    builtin_table().write_to(&csv_path).unwrap();

    let imported = TranslationTable::read_from(&csv_path).unwrap();
    let from_csv = Generator::new(imported, GeneratorConfig::default())
        .render()
        .unwrap();
    assert_eq!(from_csv, GOLDEN);
}
